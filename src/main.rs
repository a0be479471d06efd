use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use skycast_advisory::AdvisoryEngine;
use skycast_core::{AppError, Config, ConfigError};
use skycast_shell::{Dashboard, DashboardState, TravelList, WeatherView};
use skycast_suggest::SuggestionClient;
use skycast_theme::{CustomColors, ThemeId, ThemeSelection};
use skycast_weather::WeatherProvider;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    skycast_core::init()?;

    let (config, _) = match Config::load_validated() {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load config: {:#}", e);
            return Err(match e.downcast::<ConfigError>() {
                Ok(config_err) => {
                    let app_err = AppError::from(config_err);
                    eprintln!("{}", app_err.user_message());
                    app_err.into()
                }
                Err(other) => other,
            });
        }
    };
    let mut dashboard = build_dashboard(&config)?;

    tracing::info!("SkyCast started");
    println!("SkyCast - Weather Dashboard");

    if dashboard.refresh().is_some() {
        dashboard.process_next().await;
    } else {
        tracing::warn!("No default city configured");
    }

    let palette = dashboard.state().palette();
    tracing::info!(
        "Palette: background={} accent={}",
        palette.background_css,
        palette.accent_color
    );

    match dashboard.state().view() {
        WeatherView::Ready(snapshot) => {
            println!(
                "\n{}: {}°C, {} (wind {:.0} km/h, humidity {}%, UV {}, AQI {})",
                snapshot.location_name(),
                snapshot.temperature_c().round(),
                snapshot.condition(),
                snapshot.wind_kph(),
                snapshot.humidity_pct(),
                snapshot.uv_index(),
                snapshot.air_quality_index()
            );
            for rec in AdvisoryEngine::all(snapshot) {
                tracing::info!(domain = ?rec.domain, severity = ?rec.severity, "{}", rec.headline);
                println!("  [{}] {}: {}", rec.domain.title(), rec.headline, rec.detail);
                for item in &rec.items {
                    println!("      - {}", item);
                }
            }
        }
        WeatherView::Failed(message) => {
            tracing::error!("Dashboard fetch failed: {}", message);
            println!("\n{}", message);
        }
        WeatherView::Loading => {}
    }

    let dispatched = dashboard.refresh_travel();
    let mut loaded = 0;
    for _ in 0..dispatched {
        if dashboard.process_next().await {
            loaded += 1;
        }
    }
    tracing::info!("Loaded {} of {} travel destination(s)", loaded, dispatched);
    println!("\nTravel:");
    for destination in dashboard.state().travel().iter() {
        println!("  {}: {}", destination.name(), destination.summary());
    }

    Ok(())
}

fn build_dashboard(config: &Config) -> Result<Dashboard> {
    let timeout = Duration::from_secs(config.weather.request_timeout_secs);

    let weather = WeatherProvider::new(config.weather.api_key.clone(), timeout)?
        .with_base_url(&config.weather.base_url);
    let suggestions = SuggestionClient::new(config.suggestions.api_key.clone(), timeout)?
        .with_base_url(&config.suggestions.base_url)
        .with_model(&config.suggestions.model);

    let theme = ThemeSelection::new(
        ThemeId::parse(&config.theme.initial),
        CustomColors::new(
            &config.theme.custom_background_start,
            &config.theme.custom_background_end,
            &config.theme.custom_accent,
        ),
    );
    let state = DashboardState::new(
        &config.weather.default_city,
        theme,
        TravelList::new(&config.travel.cities),
    );

    Ok(Dashboard::new(
        state,
        Arc::new(weather),
        Arc::new(suggestions),
        Duration::from_millis(config.weather.debounce_ms),
        tokio::runtime::Handle::current(),
    ))
}

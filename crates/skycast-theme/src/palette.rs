use serde::{Deserialize, Serialize};
use skycast_weather::WeatherCondition;

use crate::selection::{CustomColors, ThemeId, ThemeSelection};

/// Resolved colors for one theme state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePalette {
    pub background_css: String,
    pub accent_color: String,
    pub text_color: String,
    pub subtext_color: String,
    pub panel_background: String,
    pub button_background: String,
    pub button_hover_background: String,
    pub active_button_background: String,
}

// Shared by default and custom
const TEXT: &str = "#ffffff";
const SUBTEXT: &str = "rgba(255, 255, 255, 0.8)";
const PANEL: &str = "rgba(0, 0, 0, 0.2)";
const BUTTON: &str = "rgba(255, 255, 255, 0.1)";
const BUTTON_HOVER: &str = "rgba(255, 255, 255, 0.2)";
const ACTIVE_BUTTON: &str = "rgba(255, 255, 255, 0.25)";

const DEFAULT_ACCENT: &str = "#facc15";

const SUNSET_BACKGROUND: &str = "linear-gradient(to bottom right, #f97316, #9f1239)";
const SUNSET_ACCENT: &str = "#fde047";

const FOREST_BACKGROUND: &str = "linear-gradient(to bottom right, #16a34a, #14532d)";
const FOREST_ACCENT: &str = "#bef264";

/// Background of the default theme for each condition
pub fn condition_background(condition: WeatherCondition) -> &'static str {
    match condition {
        WeatherCondition::Clear => "linear-gradient(to bottom right, #38bdf8, #1d4ed8)",
        WeatherCondition::Clouds => "linear-gradient(to bottom right, #64748b, #334155)",
        WeatherCondition::Rain => "linear-gradient(to bottom right, #52525b, #18181b)",
        WeatherCondition::Snow => "linear-gradient(to bottom right, #a5b4fc, #4f46e5)",
        WeatherCondition::Thunderstorm => "linear-gradient(to bottom right, #1f2937, #000000)",
        WeatherCondition::Drizzle => "linear-gradient(to bottom right, #a1a1aa, #3f3f46)",
        WeatherCondition::Mist | WeatherCondition::Haze => {
            "linear-gradient(to bottom right, #e2e8f0, #94a3b8)"
        }
    }
}

fn palette(
    background: impl Into<String>,
    accent: impl Into<String>,
    subtext: &str,
    panel: &str,
    active_button: &str,
) -> StylePalette {
    StylePalette {
        background_css: background.into(),
        accent_color: accent.into(),
        text_color: TEXT.to_string(),
        subtext_color: subtext.to_string(),
        panel_background: panel.to_string(),
        button_background: BUTTON.to_string(),
        button_hover_background: BUTTON_HOVER.to_string(),
        active_button_background: active_button.to_string(),
    }
}

pub struct ThemeEngine;

impl ThemeEngine {
    /// Palette for the shell's current selection. An absent condition
    /// (nothing loaded yet) renders as `Clear`.
    pub fn derive(selection: &ThemeSelection, condition: Option<WeatherCondition>) -> StylePalette {
        Self::palette(
            selection.theme(),
            condition.unwrap_or_default(),
            selection.custom_colors(),
        )
    }

    /// Never fails; every combination yields a palette.
    pub fn palette(
        theme: ThemeId,
        condition: WeatherCondition,
        custom: &CustomColors,
    ) -> StylePalette {
        match theme {
            ThemeId::Default => palette(
                condition_background(condition),
                DEFAULT_ACCENT,
                SUBTEXT,
                PANEL,
                ACTIVE_BUTTON,
            ),
            ThemeId::Sunset => palette(
                SUNSET_BACKGROUND,
                SUNSET_ACCENT,
                "rgba(255, 255, 255, 0.85)",
                "rgba(0, 0, 0, 0.25)",
                "rgba(255, 255, 255, 0.3)",
            ),
            ThemeId::Forest => palette(
                FOREST_BACKGROUND,
                FOREST_ACCENT,
                "rgba(255, 255, 255, 0.9)",
                "rgba(0, 0, 0, 0.3)",
                "rgba(255, 255, 255, 0.3)",
            ),
            ThemeId::Custom => palette(
                custom.background_css(),
                custom.accent.as_str(),
                SUBTEXT,
                PANEL,
                ACTIVE_BUTTON,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_background_per_condition() {
        let custom = CustomColors::default();
        let rain = ThemeEngine::palette(ThemeId::Default, WeatherCondition::Rain, &custom);
        assert_eq!(
            rain.background_css,
            "linear-gradient(to bottom right, #52525b, #18181b)"
        );
        assert_eq!(rain.accent_color, "#facc15");
    }

    #[test]
    fn test_unknown_condition_uses_clear_background() {
        let custom = CustomColors::default();
        let clear = ThemeEngine::palette(ThemeId::Default, WeatherCondition::Clear, &custom);
        for keyword in ["Tornado", "Smoke", "Dust", ""] {
            let condition = WeatherCondition::from_keyword(keyword);
            let palette = ThemeEngine::palette(ThemeId::Default, condition, &custom);
            assert_eq!(palette.background_css, clear.background_css);
        }
    }

    #[test]
    fn test_absent_condition_is_clear() {
        let selection = ThemeSelection::default();
        assert_eq!(
            ThemeEngine::derive(&selection, None),
            ThemeEngine::derive(&selection, Some(WeatherCondition::Clear))
        );
    }

    #[test]
    fn test_presets_ignore_condition() {
        let custom = CustomColors::default();
        for theme in [ThemeId::Sunset, ThemeId::Forest] {
            let reference = ThemeEngine::palette(theme, WeatherCondition::Clear, &custom);
            for condition in WeatherCondition::ALL {
                assert_eq!(ThemeEngine::palette(theme, condition, &custom), reference);
            }
        }
    }

    #[test]
    fn test_custom_background_ignores_condition() {
        let custom = CustomColors::new("#102030", "#405060", "#708090");
        for condition in WeatherCondition::ALL {
            let palette = ThemeEngine::palette(ThemeId::Custom, condition, &custom);
            assert_eq!(
                palette.background_css,
                "linear-gradient(to bottom right, #102030, #405060)"
            );
            assert_eq!(palette.accent_color, "#708090");
        }
    }

    #[test]
    fn test_custom_shares_default_constants() {
        let custom = CustomColors::default();
        let default = ThemeEngine::palette(ThemeId::Default, WeatherCondition::Clear, &custom);
        let themed = ThemeEngine::palette(ThemeId::Custom, WeatherCondition::Clear, &custom);
        assert_eq!(themed.text_color, default.text_color);
        assert_eq!(themed.subtext_color, default.subtext_color);
        assert_eq!(themed.panel_background, default.panel_background);
        assert_eq!(themed.active_button_background, default.active_button_background);
    }

    #[test]
    fn test_forest_palette() {
        let palette =
            ThemeEngine::palette(ThemeId::Forest, WeatherCondition::Snow, &CustomColors::default());
        assert_eq!(palette.accent_color, "#bef264");
        assert_eq!(palette.panel_background, "rgba(0, 0, 0, 0.3)");
    }
}

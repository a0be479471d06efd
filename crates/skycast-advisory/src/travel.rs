use skycast_weather::WeatherSnapshot;

/// Prompt for a one-day itinerary in `city` given its current weather.
pub fn itinerary_prompt(city: &str, snapshot: &WeatherSnapshot) -> String {
    format!(
        "The weather in {} is currently {} at {}°C. Generate a fun, one-day travel itinerary with 3-4 suggestions suitable for these conditions. Format it with markdown headings.",
        city,
        snapshot.condition(),
        snapshot.temperature_c()
    )
}

/// Short line for a destination row, e.g. "13°C, Clouds".
pub fn destination_summary(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{}°C, {}",
        snapshot.temperature_c().round(),
        snapshot.condition()
    )
}

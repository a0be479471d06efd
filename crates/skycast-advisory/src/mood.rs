//! Mood-based activity suggestions.
//!
//! The advisory side only builds the prompt; the text itself comes from the
//! suggestion provider and is relayed as-is.

use serde::{Deserialize, Serialize};
use skycast_weather::WeatherSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Lazy,
    Energetic,
    Romantic,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Self::Lazy, Self::Energetic, Self::Romantic, Self::Sad];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Lazy => "lazy",
            Self::Energetic => "energetic",
            Self::Romantic => "romantic",
            Self::Sad => "sad",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Lazy => "Lazy",
            Self::Energetic => "Energetic",
            Self::Romantic => "Romantic",
            Self::Sad => "Sad",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Lazy => "meh",
            Self::Energetic => "rocket",
            Self::Romantic => "heart",
            Self::Sad => "frown",
        }
    }

    /// Case-insensitive lookup by key
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(key))
    }
}

pub fn mood_prompt(snapshot: &WeatherSnapshot, mood: Mood) -> String {
    format!(
        "The weather is {} at {}°C. I'm feeling {}. Give me one creative and specific activity suggestion.",
        snapshot.condition(),
        snapshot.temperature_c(),
        mood.key()
    )
}

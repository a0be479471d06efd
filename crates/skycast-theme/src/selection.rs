use serde::{Deserialize, Serialize};
use skycast_weather::WeatherCondition;

use crate::palette::{StylePalette, ThemeEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Default,
    Sunset,
    Forest,
    Custom,
}

impl ThemeId {
    pub const ALL: [ThemeId; 4] = [Self::Default, Self::Sunset, Self::Forest, Self::Custom];

    /// Preset themes offered by the selector (everything but custom)
    pub fn presets() -> impl Iterator<Item = ThemeId> {
        Self::ALL.into_iter().filter(|t| *t != Self::Custom)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Custom => "custom",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Sunset => "Sunset",
            Self::Forest => "Forest",
            Self::Custom => "Custom",
        }
    }

    /// Unknown ids fall back to the default theme.
    pub fn parse(key: &str) -> Self {
        let key = key.trim();
        match Self::ALL.into_iter().find(|t| t.key().eq_ignore_ascii_case(key)) {
            Some(theme) => theme,
            None => {
                tracing::debug!("Unknown theme id {:?}, using default", key);
                Self::Default
            }
        }
    }
}

/// User-authored colors for the custom theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    pub background_start: String,
    pub background_end: String,
    pub accent: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            background_start: "#4f46e5".to_string(),
            background_end: "#db2777".to_string(),
            accent: "#a5b4fc".to_string(),
        }
    }
}

impl CustomColors {
    pub fn new(
        background_start: impl Into<String>,
        background_end: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            background_start: background_start.into(),
            background_end: background_end.into(),
            accent: accent.into(),
        }
    }

    /// Two-stop gradient from start to end
    pub fn background_css(&self) -> String {
        format!(
            "linear-gradient(to bottom right, {}, {})",
            self.background_start, self.background_end
        )
    }
}

/// Session-scoped theme state owned by the shell.
///
/// Selecting a preset never touches the custom colors; editing any custom
/// color switches to the custom theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThemeSelection {
    theme: ThemeId,
    custom: CustomColors,
}

impl ThemeSelection {
    pub fn new(theme: ThemeId, custom: CustomColors) -> Self {
        Self { theme, custom }
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn custom_colors(&self) -> &CustomColors {
        &self.custom
    }

    pub fn select(&mut self, theme: ThemeId) {
        if self.theme != theme {
            tracing::debug!("Theme changed: {} -> {}", self.theme.key(), theme.key());
        }
        self.theme = theme;
    }

    pub fn set_background_start(&mut self, color: impl Into<String>) {
        self.custom.background_start = color.into();
        self.select(ThemeId::Custom);
    }

    pub fn set_background_end(&mut self, color: impl Into<String>) {
        self.custom.background_end = color.into();
        self.select(ThemeId::Custom);
    }

    pub fn set_accent(&mut self, color: impl Into<String>) {
        self.custom.accent = color.into();
        self.select(ThemeId::Custom);
    }

    pub fn palette(&self, condition: Option<WeatherCondition>) -> StylePalette {
        ThemeEngine::derive(self, condition)
    }
}

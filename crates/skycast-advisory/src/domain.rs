use serde::{Deserialize, Serialize};
use skycast_weather::WeatherSnapshot;

/// Advisory categories that depend on weather alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryDomain {
    Clothing,
    PetSafety,
    Stargazing,
    Gardening,
    Productivity,
    MicroAlerts,
    Fitness,
}

impl AdvisoryDomain {
    /// Navigation order
    pub const ALL: [AdvisoryDomain; 7] = [
        Self::Clothing,
        Self::PetSafety,
        Self::Stargazing,
        Self::Gardening,
        Self::Productivity,
        Self::MicroAlerts,
        Self::Fitness,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothes Assistant",
            Self::PetSafety => "Pet Guide",
            Self::Stargazing => "Stargazing",
            Self::Gardening => "Gardener Guide",
            Self::Productivity => "Productivity",
            Self::MicroAlerts => "Micro-Alerts",
            Self::Fitness => "Fitness Coach",
        }
    }
}

/// How the renderer should tint a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Informational,
    Caution,
    Favorable,
}

/// Output of one advisor for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain: AdvisoryDomain,
    pub headline: String,
    pub detail: String,
    pub severity: Severity,
    /// Ordered list items (clothing); empty for single-pick domains
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl Recommendation {
    pub fn new(
        domain: AdvisoryDomain,
        headline: impl Into<String>,
        detail: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            domain,
            headline: headline.into(),
            detail: detail.into(),
            severity,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }
}

/// A pure mapping from a snapshot to a recommendation.
pub trait Advisor: Send + Sync {
    fn domain(&self) -> AdvisoryDomain;

    /// Must handle every condition and numeric range without panicking.
    fn recommend(&self, snapshot: &WeatherSnapshot) -> Recommendation;
}

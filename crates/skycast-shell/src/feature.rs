use serde::{Deserialize, Serialize};
use skycast_advisory::AdvisoryDomain;

/// Navigation entries of the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    #[default]
    Mood,
    Clothes,
    Pet,
    Travel,
    Stargazing,
    Gardener,
    Productivity,
    Alerts,
    Fitness,
    Themes,
    Wallpaper,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Self::Mood,
        Self::Clothes,
        Self::Pet,
        Self::Travel,
        Self::Stargazing,
        Self::Gardener,
        Self::Productivity,
        Self::Alerts,
        Self::Fitness,
        Self::Themes,
        Self::Wallpaper,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Clothes => "clothes",
            Self::Pet => "pet",
            Self::Travel => "travel",
            Self::Stargazing => "stargazing",
            Self::Gardener => "gardener",
            Self::Productivity => "productivity",
            Self::Alerts => "alerts",
            Self::Fitness => "fitness",
            Self::Themes => "themes",
            Self::Wallpaper => "wallpaper",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mood => "Mood Helper",
            Self::Clothes => "Clothes Assistant",
            Self::Pet => "Pet Guide",
            Self::Travel => "Travel Companion",
            Self::Stargazing => "Stargazing",
            Self::Gardener => "Gardener Guide",
            Self::Productivity => "Productivity",
            Self::Alerts => "Micro-Alerts",
            Self::Fitness => "Fitness Coach",
            Self::Themes => "Themes",
            Self::Wallpaper => "Wallpaper",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Mood => "smile",
            Self::Clothes => "shirt",
            Self::Pet => "bone",
            Self::Travel => "map",
            Self::Stargazing => "star",
            Self::Gardener => "leaf",
            Self::Productivity => "brain_circuit",
            Self::Alerts => "bell",
            Self::Fitness => "bike",
            Self::Themes => "palette",
            Self::Wallpaper => "image",
        }
    }

    /// Advisory domain rendered by this feature. Mood and travel go through
    /// the suggestion provider; themes and wallpaper have no advisory.
    pub fn advisory_domain(&self) -> Option<AdvisoryDomain> {
        match self {
            Self::Clothes => Some(AdvisoryDomain::Clothing),
            Self::Pet => Some(AdvisoryDomain::PetSafety),
            Self::Stargazing => Some(AdvisoryDomain::Stargazing),
            Self::Gardener => Some(AdvisoryDomain::Gardening),
            Self::Productivity => Some(AdvisoryDomain::Productivity),
            Self::Alerts => Some(AdvisoryDomain::MicroAlerts),
            Self::Fitness => Some(AdvisoryDomain::Fitness),
            Self::Mood | Self::Travel | Self::Themes | Self::Wallpaper => None,
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_advisory_domain_has_a_feature() {
        for domain in AdvisoryDomain::ALL {
            assert!(
                Feature::ALL
                    .iter()
                    .any(|f| f.advisory_domain() == Some(domain)),
                "{:?}",
                domain
            );
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Feature::default(), Feature::Mood);
        assert_eq!(Feature::Alerts.name(), "Micro-Alerts");
        assert_eq!(Feature::parse("GARDENER"), Some(Feature::Gardener));
        assert_eq!(Feature::parse("weather"), None);
    }
}

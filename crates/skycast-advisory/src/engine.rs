use skycast_weather::WeatherSnapshot;

use crate::alerts::MicroAlertAdvisor;
use crate::clothing::ClothingAdvisor;
use crate::domain::{AdvisoryDomain, Advisor, Recommendation};
use crate::fitness::FitnessAdvisor;
use crate::gardening::GardeningAdvisor;
use crate::pet::PetSafetyAdvisor;
use crate::productivity::ProductivityAdvisor;
use crate::stargazing::StargazingAdvisor;

/// Dispatches a snapshot to the advisor for each domain.
pub struct AdvisoryEngine;

impl AdvisoryEngine {
    pub fn advisor(domain: AdvisoryDomain) -> &'static dyn Advisor {
        match domain {
            AdvisoryDomain::Clothing => &ClothingAdvisor,
            AdvisoryDomain::PetSafety => &PetSafetyAdvisor,
            AdvisoryDomain::Stargazing => &StargazingAdvisor,
            AdvisoryDomain::Gardening => &GardeningAdvisor,
            AdvisoryDomain::Productivity => &ProductivityAdvisor,
            AdvisoryDomain::MicroAlerts => &MicroAlertAdvisor,
            AdvisoryDomain::Fitness => &FitnessAdvisor,
        }
    }

    pub fn recommend(domain: AdvisoryDomain, snapshot: &WeatherSnapshot) -> Recommendation {
        Self::advisor(domain).recommend(snapshot)
    }

    /// One recommendation per domain, in navigation order.
    pub fn all(snapshot: &WeatherSnapshot) -> Vec<Recommendation> {
        AdvisoryDomain::ALL
            .iter()
            .map(|domain| Self::recommend(*domain, snapshot))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::{Reading, WeatherCondition};

    fn snapshots() -> Vec<WeatherSnapshot> {
        let mut out = Vec::new();
        for condition in WeatherCondition::ALL {
            for temp in [-40.0_f64, -5.0, 0.0, 9.99, 18.0, 32.0, 35.5, 50.0] {
                for aq in [Reading::Unavailable, Reading::Value(20.0), Reading::Value(100.0)] {
                    out.push(
                        WeatherSnapshot::builder("Grid")
                            .temperature_c(temp)
                            .condition(condition)
                            .air_quality_index(aq)
                            .wind_kph(temp.abs())
                            .humidity_pct(75)
                            .cloud_cover_pct(40)
                            .build(),
                    );
                }
            }
        }
        out
    }

    #[test]
    fn test_advisor_domains_match() {
        for domain in AdvisoryDomain::ALL {
            assert_eq!(AdvisoryEngine::advisor(domain).domain(), domain);
        }
    }

    #[test]
    fn test_every_input_yields_a_recommendation() {
        for snapshot in snapshots() {
            let all = AdvisoryEngine::all(&snapshot);
            assert_eq!(all.len(), AdvisoryDomain::ALL.len());
            for rec in &all {
                assert!(!rec.detail.is_empty(), "{:?}", rec.domain);
                assert!(!rec.headline.is_empty(), "{:?}", rec.domain);
            }
        }
    }

    #[test]
    fn test_recommendations_are_repeatable() {
        for snapshot in snapshots() {
            assert_eq!(AdvisoryEngine::all(&snapshot), AdvisoryEngine::all(&snapshot));
        }
    }

    #[test]
    fn test_only_clothing_has_items() {
        let snapshot = WeatherSnapshot::builder("London").build();
        for rec in AdvisoryEngine::all(&snapshot) {
            if rec.domain == AdvisoryDomain::Clothing {
                assert!(!rec.items.is_empty());
            } else {
                assert!(rec.items.is_empty());
            }
        }
    }
}

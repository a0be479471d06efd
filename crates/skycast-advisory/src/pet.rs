//! Is it safe to take the pet out? First matching hazard wins.

use serde::{Deserialize, Serialize};
use skycast_weather::{WeatherCondition, WeatherSnapshot};

use crate::domain::{AdvisoryDomain, Advisor, Recommendation, Severity};

pub const HEAT_ABOVE_C: f64 = 32.0;
pub const COLD_BELOW_C: f64 = -5.0;
pub const AIR_QUALITY_ABOVE: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetHazard {
    Heat,
    Cold,
    AirQuality,
    Thunder,
}

impl PetHazard {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Heat => "Dangerously hot for paws on pavement. Keep walks short and on grass.",
            Self::Cold => "Too cold for most pets. Limit outdoor time significantly.",
            Self::AirQuality => "Poor air quality. Best to keep pets indoors today.",
            Self::Thunder => "Thunder can scare pets. Keep them safe and comfortable inside.",
        }
    }
}

pub const SAFE_TEXT: &str = "Great day for a walk or a trip to the park!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetSafety {
    pub safe: bool,
    pub hazard: Option<PetHazard>,
    pub reason: &'static str,
}

pub fn assess_pet_safety(snapshot: &WeatherSnapshot) -> PetSafety {
    let temp = snapshot.temperature_c();

    let hazard = if temp > HEAT_ABOVE_C {
        Some(PetHazard::Heat)
    } else if temp < COLD_BELOW_C {
        Some(PetHazard::Cold)
    } else if snapshot.air_quality_index().exceeds(AIR_QUALITY_ABOVE) {
        Some(PetHazard::AirQuality)
    } else if snapshot.condition() == WeatherCondition::Thunderstorm {
        Some(PetHazard::Thunder)
    } else {
        None
    };

    PetSafety {
        safe: hazard.is_none(),
        hazard,
        reason: hazard.map_or(SAFE_TEXT, |h| h.text()),
    }
}

pub struct PetSafetyAdvisor;

impl Advisor for PetSafetyAdvisor {
    fn domain(&self) -> AdvisoryDomain {
        AdvisoryDomain::PetSafety
    }

    fn recommend(&self, snapshot: &WeatherSnapshot) -> Recommendation {
        let safety = assess_pet_safety(snapshot);
        let (headline, severity) = if safety.safe {
            ("Safe for pets", Severity::Favorable)
        } else {
            ("Not safe for pets", Severity::Caution)
        };
        Recommendation::new(self.domain(), headline, safety.reason, severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::Reading;

    fn snapshot(temp: f64, aq: Reading, condition: WeatherCondition) -> WeatherSnapshot {
        WeatherSnapshot::builder("Test")
            .temperature_c(temp)
            .air_quality_index(aq)
            .condition(condition)
            .build()
    }

    #[test]
    fn test_heat_wins_regardless_of_other_fields() {
        for condition in WeatherCondition::ALL {
            let safety = assess_pet_safety(&snapshot(33.0, Reading::Value(10.0), condition));
            assert!(!safety.safe);
            assert_eq!(safety.hazard, Some(PetHazard::Heat));
        }
        let safety = assess_pet_safety(&snapshot(
            33.0,
            Reading::Value(100.0),
            WeatherCondition::Thunderstorm,
        ));
        assert_eq!(safety.hazard, Some(PetHazard::Heat));
    }

    #[test]
    fn test_heat_boundary_is_strict() {
        let safety = assess_pet_safety(&snapshot(32.0, Reading::Unavailable, WeatherCondition::Clear));
        assert!(safety.safe);
    }

    #[test]
    fn test_cold() {
        let safety = assess_pet_safety(&snapshot(-6.0, Reading::Value(90.0), WeatherCondition::Clear));
        assert_eq!(safety.hazard, Some(PetHazard::Cold));

        let edge = assess_pet_safety(&snapshot(-5.0, Reading::Unavailable, WeatherCondition::Clear));
        assert!(edge.safe);
    }

    #[test]
    fn test_air_quality_boundary() {
        let poor = assess_pet_safety(&snapshot(20.0, Reading::Value(81.0), WeatherCondition::Clear));
        assert!(!poor.safe);
        assert_eq!(poor.hazard, Some(PetHazard::AirQuality));

        let ok = assess_pet_safety(&snapshot(20.0, Reading::Value(80.0), WeatherCondition::Clear));
        assert!(ok.safe);
        assert_eq!(ok.reason, SAFE_TEXT);
    }

    #[test]
    fn test_unavailable_air_quality_is_not_a_hazard() {
        let safety = assess_pet_safety(&snapshot(20.0, Reading::Unavailable, WeatherCondition::Clear));
        assert!(safety.safe);
    }

    #[test]
    fn test_thunderstorm() {
        let safety = assess_pet_safety(&snapshot(
            20.0,
            Reading::Value(20.0),
            WeatherCondition::Thunderstorm,
        ));
        assert_eq!(safety.hazard, Some(PetHazard::Thunder));
        assert!(safety.reason.contains("Thunder"));
    }

    #[test]
    fn test_recommendation_severity() {
        let unsafe_rec =
            PetSafetyAdvisor.recommend(&snapshot(40.0, Reading::Unavailable, WeatherCondition::Clear));
        assert_eq!(unsafe_rec.severity, Severity::Caution);

        let safe_rec =
            PetSafetyAdvisor.recommend(&snapshot(20.0, Reading::Unavailable, WeatherCondition::Clear));
        assert_eq!(safe_rec.severity, Severity::Favorable);
        assert_eq!(safe_rec.detail, SAFE_TEXT);
    }
}

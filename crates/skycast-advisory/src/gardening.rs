use serde::{Deserialize, Serialize};
use skycast_weather::{WeatherCondition, WeatherSnapshot};

use crate::domain::{AdvisoryDomain, Advisor, Recommendation, Severity};

pub const HOT_ABOVE_C: f64 = 35.0;
pub const FROST_BELOW_C: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GardenAdvice {
    SkipWatering,
    WaterAtDawnOrDusk,
    FrostProtection,
    PleasantDay,
}

impl GardenAdvice {
    pub fn text(&self) -> &'static str {
        match self {
            Self::SkipWatering => "Nature is watering for you! No need to water today.",
            Self::WaterAtDawnOrDusk => {
                "It's very hot. Water early in the morning or late in the evening to reduce evaporation."
            }
            Self::FrostProtection => "Frost possible. Protect sensitive plants overnight.",
            Self::PleasantDay => "A pleasant day for gardening. Check soil moisture before watering.",
        }
    }
}

/// Only `Rain` counts as watering; drizzle and storms do not.
pub fn garden_advice(snapshot: &WeatherSnapshot) -> GardenAdvice {
    let temp = snapshot.temperature_c();

    if snapshot.condition() == WeatherCondition::Rain {
        GardenAdvice::SkipWatering
    } else if temp > HOT_ABOVE_C {
        GardenAdvice::WaterAtDawnOrDusk
    } else if temp < FROST_BELOW_C {
        GardenAdvice::FrostProtection
    } else {
        GardenAdvice::PleasantDay
    }
}

pub struct GardeningAdvisor;

impl Advisor for GardeningAdvisor {
    fn domain(&self) -> AdvisoryDomain {
        AdvisoryDomain::Gardening
    }

    fn recommend(&self, snapshot: &WeatherSnapshot) -> Recommendation {
        let advice = garden_advice(snapshot);
        let severity = match advice {
            GardenAdvice::PleasantDay => Severity::Favorable,
            GardenAdvice::SkipWatering => Severity::Informational,
            GardenAdvice::WaterAtDawnOrDusk | GardenAdvice::FrostProtection => Severity::Caution,
        };
        Recommendation::new(self.domain(), "Garden tip", advice.text(), severity)
    }
}

use serde::{Deserialize, Serialize};
use skycast_weather::WeatherSnapshot;

use crate::domain::{AdvisoryDomain, Advisor, Recommendation, Severity};

pub const AIR_QUALITY_ABOVE: f64 = 80.0;
pub const HEAT_ABOVE_C: f64 = 30.0;
pub const HUMIDITY_ABOVE_PCT: u8 = 70;
pub const COLD_BELOW_C: f64 = 0.0;
pub const WIND_ABOVE_KPH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessAdvice {
    Indoor,
    HeatAndHumidity,
    Cold,
    Windy,
    Ideal,
}

impl FitnessAdvice {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Indoor => "Poor air quality. Best to exercise indoors today.",
            Self::HeatAndHumidity => {
                "High heat and humidity. Stay hydrated and consider a lighter workout."
            }
            Self::Cold => "Very cold. Ensure you warm up properly and dress in layers.",
            Self::Windy => {
                "It's windy! Good for resistance training on a run, but be careful on a bike."
            }
            Self::Ideal => "Ideal conditions for an outdoor run, walk, or cycling session.",
        }
    }
}

pub fn fitness_advice(snapshot: &WeatherSnapshot) -> FitnessAdvice {
    let temp = snapshot.temperature_c();

    if snapshot.air_quality_index().exceeds(AIR_QUALITY_ABOVE) {
        FitnessAdvice::Indoor
    } else if temp > HEAT_ABOVE_C && snapshot.humidity_pct() > HUMIDITY_ABOVE_PCT {
        FitnessAdvice::HeatAndHumidity
    } else if temp < COLD_BELOW_C {
        FitnessAdvice::Cold
    } else if snapshot.wind_kph() > WIND_ABOVE_KPH {
        FitnessAdvice::Windy
    } else {
        FitnessAdvice::Ideal
    }
}

pub struct FitnessAdvisor;

impl Advisor for FitnessAdvisor {
    fn domain(&self) -> AdvisoryDomain {
        AdvisoryDomain::Fitness
    }

    fn recommend(&self, snapshot: &WeatherSnapshot) -> Recommendation {
        let advice = fitness_advice(snapshot);
        let severity = match advice {
            FitnessAdvice::Ideal => Severity::Favorable,
            FitnessAdvice::Windy => Severity::Informational,
            FitnessAdvice::Indoor | FitnessAdvice::HeatAndHumidity | FitnessAdvice::Cold => {
                Severity::Caution
            }
        };
        Recommendation::new(self.domain(), "Workout advice", advice.text(), severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::Reading;

    fn snapshot(temp: f64, humidity: u8, wind: f64, aq: Reading) -> WeatherSnapshot {
        WeatherSnapshot::builder("Test")
            .temperature_c(temp)
            .humidity_pct(humidity)
            .wind_kph(wind)
            .air_quality_index(aq)
            .build()
    }

    #[test]
    fn test_air_quality_first() {
        let advice = fitness_advice(&snapshot(35.0, 90, 50.0, Reading::Value(100.0)));
        assert_eq!(advice, FitnessAdvice::Indoor);
    }

    #[test]
    fn test_heat_needs_both_heat_and_humidity() {
        assert_eq!(
            fitness_advice(&snapshot(31.0, 71, 0.0, Reading::Unavailable)),
            FitnessAdvice::HeatAndHumidity
        );
        assert_eq!(
            fitness_advice(&snapshot(31.0, 70, 0.0, Reading::Unavailable)),
            FitnessAdvice::Ideal
        );
        assert_eq!(
            fitness_advice(&snapshot(30.0, 90, 0.0, Reading::Unavailable)),
            FitnessAdvice::Ideal
        );
    }

    #[test]
    fn test_cold_before_wind() {
        assert_eq!(
            fitness_advice(&snapshot(-1.0, 50, 45.0, Reading::Value(20.0))),
            FitnessAdvice::Cold
        );
        assert_eq!(
            fitness_advice(&snapshot(0.0, 50, 45.0, Reading::Value(20.0))),
            FitnessAdvice::Windy
        );
    }

    #[test]
    fn test_air_quality_boundary() {
        assert_eq!(
            fitness_advice(&snapshot(20.0, 50, 0.0, Reading::Value(80.0))),
            FitnessAdvice::Ideal
        );
    }

    #[test]
    fn test_recommendation() {
        let rec = FitnessAdvisor.recommend(&snapshot(15.0, 40, 5.0, Reading::Value(20.0)));
        assert_eq!(rec.severity, Severity::Favorable);
        assert_eq!(rec.detail, FitnessAdvice::Ideal.text());
    }
}

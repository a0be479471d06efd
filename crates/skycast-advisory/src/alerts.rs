use serde::{Deserialize, Serialize};
use skycast_weather::{WeatherCondition, WeatherSnapshot};

use crate::domain::{AdvisoryDomain, Advisor, Recommendation, Severity};

pub const WIND_ALERT_ABOVE_KPH: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MicroAlert {
    Storm,
    Wind,
    AllClear,
}

impl MicroAlert {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Storm => "Micro-Alert: Heavy rain and lightning possible in the next 30 mins.",
            Self::Wind => "Micro-Alert: Strong wind gusts expected shortly.",
            Self::AllClear => "All clear for now. No immediate micro-alerts.",
        }
    }
}

pub fn micro_alert(snapshot: &WeatherSnapshot) -> MicroAlert {
    if snapshot.condition() == WeatherCondition::Thunderstorm {
        MicroAlert::Storm
    } else if snapshot.wind_kph() > WIND_ALERT_ABOVE_KPH {
        MicroAlert::Wind
    } else {
        MicroAlert::AllClear
    }
}

pub struct MicroAlertAdvisor;

impl Advisor for MicroAlertAdvisor {
    fn domain(&self) -> AdvisoryDomain {
        AdvisoryDomain::MicroAlerts
    }

    fn recommend(&self, snapshot: &WeatherSnapshot) -> Recommendation {
        let alert = micro_alert(snapshot);
        let (headline, severity) = match alert {
            MicroAlert::AllClear => ("No alerts", Severity::Informational),
            MicroAlert::Storm | MicroAlert::Wind => ("Weather alert", Severity::Caution),
        };
        Recommendation::new(self.domain(), headline, alert.text(), severity)
    }
}

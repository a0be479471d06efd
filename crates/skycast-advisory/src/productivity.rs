use serde::{Deserialize, Serialize};
use skycast_weather::{WeatherCondition, WeatherSnapshot};

use crate::domain::{AdvisoryDomain, Advisor, Recommendation, Severity};

/// How the focus timer is pitched for today's weather
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusFraming {
    IndoorFocus,
    Energizing,
}

impl FocusFraming {
    pub fn text(&self) -> &'static str {
        match self {
            Self::IndoorFocus => "Low-light and rain are great for deep focus indoors.",
            Self::Energizing => "A clear day can be energizing. Tackle your tasks with vigor!",
        }
    }
}

pub fn focus_framing(snapshot: &WeatherSnapshot) -> FocusFraming {
    match snapshot.condition() {
        WeatherCondition::Rain | WeatherCondition::Snow | WeatherCondition::Drizzle => {
            FocusFraming::IndoorFocus
        }
        _ => FocusFraming::Energizing,
    }
}

pub struct ProductivityAdvisor;

impl Advisor for ProductivityAdvisor {
    fn domain(&self) -> AdvisoryDomain {
        AdvisoryDomain::Productivity
    }

    fn recommend(&self, snapshot: &WeatherSnapshot) -> Recommendation {
        let framing = focus_framing(snapshot);
        Recommendation::new(
            self.domain(),
            "Focus session",
            framing.text(),
            Severity::Informational,
        )
    }
}

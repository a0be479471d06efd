//! Sky-watching quality from cloud cover, humidity and condition.
//!
//! The score is additive (0-100): clear-ish skies contribute up to 40,
//! dry air 30, and a `Clear` condition 30. Bands use strict `>`, so a
//! boundary score falls to the lower band.

use serde::{Deserialize, Serialize};
use skycast_weather::{WeatherCondition, WeatherSnapshot};

use crate::domain::{AdvisoryDomain, Advisor, Recommendation, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StargazingQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl StargazingQuality {
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            Self::Excellent
        } else if score > 60 {
            Self::Good
        } else if score > 40 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StargazingReport {
    pub score: u8,
    pub quality: StargazingQuality,
    pub reason: String,
}

pub fn stargazing_score(snapshot: &WeatherSnapshot) -> u8 {
    let cloud_cover = snapshot.cloud_cover_pct();

    let sky = if cloud_cover < 20 {
        40
    } else if cloud_cover < 50 {
        20
    } else {
        0
    };
    let air = if snapshot.humidity_pct() < 60 { 30 } else { 0 };
    let clear = if snapshot.condition() == WeatherCondition::Clear {
        30
    } else {
        0
    };

    sky + air + clear
}

pub fn assess_stargazing(snapshot: &WeatherSnapshot) -> StargazingReport {
    let score = stargazing_score(snapshot);
    let quality = StargazingQuality::from_score(score);
    let mut reason = format!(
        "Cloud cover is {}% and humidity is {}%.",
        snapshot.cloud_cover_pct(),
        snapshot.humidity_pct()
    );
    if quality == StargazingQuality::Excellent {
        reason.push_str(" It's a perfect night to see the stars!");
    }
    StargazingReport {
        score,
        quality,
        reason,
    }
}

pub struct StargazingAdvisor;

impl Advisor for StargazingAdvisor {
    fn domain(&self) -> AdvisoryDomain {
        AdvisoryDomain::Stargazing
    }

    fn recommend(&self, snapshot: &WeatherSnapshot) -> Recommendation {
        let report = assess_stargazing(snapshot);
        let severity = match report.quality {
            StargazingQuality::Excellent | StargazingQuality::Good => Severity::Favorable,
            StargazingQuality::Fair => Severity::Informational,
            StargazingQuality::Poor => Severity::Caution,
        };
        Recommendation::new(
            self.domain(),
            format!("Tonight's viewing: {}", report.quality.label()),
            report.reason,
            severity,
        )
    }
}

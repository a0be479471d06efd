//! What to wear. The only domain that accumulates several results.

use serde::{Deserialize, Serialize};
use skycast_weather::{WeatherCondition, WeatherSnapshot};

use crate::domain::{AdvisoryDomain, Advisor, Recommendation, Severity};

pub const HEAVY_JACKET_BELOW_C: f64 = 10.0;
pub const LIGHT_JACKET_BELOW_C: f64 = 18.0;
pub const WINDBREAKER_ABOVE_KPH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingItem {
    HeavyJacket,
    LightJacket,
    TShirt,
    Umbrella,
    BootsAndGloves,
    Windbreaker,
}

impl ClothingItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HeavyJacket => "Heavy Jacket",
            Self::LightJacket => "Light Jacket",
            Self::TShirt => "T-Shirt",
            Self::Umbrella => "Umbrella",
            Self::BootsAndGloves => "Boots & Gloves",
            Self::Windbreaker => "Windbreaker",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::HeavyJacket | Self::LightJacket | Self::TShirt => "shirt",
            Self::Umbrella => "cloud_rain",
            Self::BootsAndGloves => "cloud_snow",
            Self::Windbreaker => "wind",
        }
    }
}

/// One base layer by temperature, then weather gear in a fixed order.
pub fn recommend_clothing(snapshot: &WeatherSnapshot) -> Vec<ClothingItem> {
    let temp = snapshot.temperature_c();
    let mut items = Vec::with_capacity(4);

    if temp < HEAVY_JACKET_BELOW_C {
        items.push(ClothingItem::HeavyJacket);
    } else if temp < LIGHT_JACKET_BELOW_C {
        items.push(ClothingItem::LightJacket);
    } else {
        items.push(ClothingItem::TShirt);
    }

    let condition = snapshot.condition();
    if condition.is_wet() {
        items.push(ClothingItem::Umbrella);
    }
    if condition == WeatherCondition::Snow {
        items.push(ClothingItem::BootsAndGloves);
    }
    if snapshot.wind_kph() > WINDBREAKER_ABOVE_KPH {
        items.push(ClothingItem::Windbreaker);
    }

    items
}

pub struct ClothingAdvisor;

impl Advisor for ClothingAdvisor {
    fn domain(&self) -> AdvisoryDomain {
        AdvisoryDomain::Clothing
    }

    fn recommend(&self, snapshot: &WeatherSnapshot) -> Recommendation {
        let items = recommend_clothing(snapshot);
        let labels: Vec<String> = items.iter().map(|i| i.label().to_string()).collect();

        let severity = if items.len() > 1 {
            Severity::Caution
        } else if items == [ClothingItem::TShirt] {
            Severity::Favorable
        } else {
            Severity::Informational
        };

        Recommendation::new(
            self.domain(),
            "What to wear today",
            labels.join(", "),
            severity,
        )
        .with_items(labels)
    }
}

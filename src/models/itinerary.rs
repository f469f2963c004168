use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApiError;
use crate::models::trip_preference::TripPreference;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Sightseeing,
    Food,
    Culture,
    Adventure,
    Relaxation,
    Shopping,
    Nightlife,
    Transport,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sightseeing => "sightseeing",
            Category::Food => "food",
            Category::Culture => "culture",
            Category::Adventure => "adventure",
            Category::Relaxation => "relaxation",
            Category::Shopping => "shopping",
            Category::Nightlife => "nightlife",
            Category::Transport => "transport",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Flex,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryItem {
    pub day: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cost_estimate: Option<f64>,
}

impl ItineraryItem {
    pub fn new(
        day: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        time_of_day: TimeOfDay,
    ) -> Self {
        Self {
            day: day.max(1),
            title: title.into(),
            description: description.into(),
            category,
            time_of_day,
            location: None,
            cost_estimate: None,
        }
    }

    pub fn with_cost_estimate(mut self, cost: f64) -> Result<Self, ApiError> {
        if !(cost >= 0.0) {
            return Err(ApiError::Validation(format!(
                "cost_estimate must be non-negative, got {}",
                cost
            )));
        }
        self.cost_estimate = Some(cost);
        Ok(self)
    }
}

/// Generated plan. Items are kept in generation order, which is day-ascending.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Itinerary {
    pub name: String,
    pub preference: TripPreference,
    #[serde(default)]
    pub items: Vec<ItineraryItem>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub destination_emoji: Option<String>,
}

/// Shape of a document in the `itinerary` collection.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub itinerary: Itinerary,
    pub created_at: DateTime,
}

impl ItineraryRecord {
    pub fn new(itinerary: Itinerary, created_at: DateTime) -> Self {
        Self {
            id: None,
            itinerary,
            created_at,
        }
    }
}

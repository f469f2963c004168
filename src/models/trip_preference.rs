use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApiError;
use crate::services::date_range::trip_length_days;

pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 12;
pub const MAX_TRIP_DAYS: u32 = 365;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Shoestring,
    #[default]
    Moderate,
    Luxury,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Shoestring => "shoestring",
            BudgetLevel::Moderate => "moderate",
            BudgetLevel::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripPace {
    Relaxed,
    #[default]
    Balanced,
    Packed,
}

impl TripPace {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripPace::Relaxed => "relaxed",
            TripPace::Balanced => "balanced",
            TripPace::Packed => "packed",
        }
    }
}

impl fmt::Display for TripPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the traveler asked for. Embedded as-is into the generated itinerary.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TripPreference {
    pub destination: String,
    /// YYYY-MM-DD
    pub start_date: String,
    /// YYYY-MM-DD
    pub end_date: String,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default)]
    pub budget_level: BudgetLevel,
    #[serde(default)]
    pub pace: TripPace,
    #[serde(default)]
    pub mood: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_travelers() -> u32 {
    MIN_TRAVELERS
}

impl TripPreference {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&self.travelers) {
            return Err(ApiError::Validation(format!(
                "travelers must be between {} and {}, got {}",
                MIN_TRAVELERS, MAX_TRAVELERS, self.travelers
            )));
        }

        let days = trip_length_days(&self.start_date, &self.end_date);
        if days > MAX_TRIP_DAYS {
            return Err(ApiError::Validation(format!(
                "trip length must be at most {} days, got {}",
                MAX_TRIP_DAYS, days
            )));
        }

        Ok(())
    }
}

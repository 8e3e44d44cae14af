//! Food log entry model
//!
//! A single logged food as handed over by the persistence layer, and the
//! estimate record returned by the food recognition service.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Meal slot a food was logged under
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            _ => MealType::Snack,
        }
    }
}

/// Serving size reported alongside a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    pub unit: String,
    pub quantity: f64,
}

impl Default for ServingSize {
    fn default() -> Self {
        Self {
            unit: "serving".to_string(),
            quantity: 1.0,
        }
    }
}

/// A logged food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    pub name: String,
    pub logged_at: DateTime<Utc>,
    #[serde(default)]
    pub meal: MealType,
    pub nutrition: Nutrition,
}

impl FoodLogEntry {
    /// Calendar date of this entry in the user's local offset
    pub fn local_date(&self, offset: FixedOffset) -> NaiveDate {
        self.logged_at.with_timezone(&offset).date_naive()
    }
}

/// Best-effort nutrient estimate for a photographed food
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodEstimate {
    pub name: String,
    pub nutrition: Nutrition,
    #[serde(default)]
    pub serving_size: ServingSize,
}

impl FoodEstimate {
    /// Zeroed estimate used when recognition fails
    pub fn unknown() -> Self {
        Self {
            name: "Unknown food".to_string(),
            ..Self::default()
        }
    }

    /// Turn the estimate into a log entry at the given instant
    pub fn into_entry(self, logged_at: DateTime<Utc>, meal: MealType) -> FoodLogEntry {
        FoodLogEntry {
            name: self.name,
            logged_at,
            meal,
            nutrition: self.nutrition.sanitized(),
        }
    }
}

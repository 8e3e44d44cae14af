//! Shared nutrition data structure
//!
//! Used by food log entries, recognition estimates and daily totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nutritional information for one food, one entry or one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,     // grams
    pub carbs: f64,       // grams
    pub fat: f64,         // grams
    #[serde(default)]
    pub fiber: f64,       // grams
    #[serde(default)]
    pub sugar: f64,       // grams
    #[serde(default)]
    pub sodium: f64,      // milligrams
    #[serde(default)]
    pub cholesterol: f64, // milligrams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
            sodium: self.sodium * multiplier,
            cholesterol: self.cholesterol * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
            cholesterol: self.cholesterol + other.cholesterol,
        }
    }

    /// Replace negative and NaN values with zero.
    ///
    /// Upstream estimates are best-effort, so this is applied before any
    /// value reaches the scoring functions.
    pub fn sanitized(&self) -> Self {
        Self {
            calories: non_negative(self.calories),
            protein: non_negative(self.protein),
            carbs: non_negative(self.carbs),
            fat: non_negative(self.fat),
            fiber: non_negative(self.fiber),
            sugar: non_negative(self.sugar),
            sodium: non_negative(self.sodium),
            cholesterol: non_negative(self.cholesterol),
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::AddAssign for Nutrition {
    fn add_assign(&mut self, other: Nutrition) {
        *self = Nutrition::add(self, &other);
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

/// Nutrient totals for a single local calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrientTotals {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

impl DailyNutrientTotals {
    pub fn new(date: NaiveDate, nutrition: Nutrition) -> Self {
        Self { date, nutrition }
    }

    /// An unlogged day: all totals zero
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, Nutrition::zero())
    }

    pub fn calories(&self) -> f64 {
        self.nutrition.calories
    }

    /// A day counts as logged once it has any calories recorded
    pub fn is_logged(&self) -> bool {
        self.nutrition.calories > 0.0
    }
}

/// Clamp to zero; NaN and infinities are treated as missing data
pub fn non_negative(value: f64) -> f64 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        0.0
    }
}

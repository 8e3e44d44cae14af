//! Data models
//!
//! Plain records exchanged with the persistence and recognition layers.

mod food_log;
mod nutrition;
mod profile;

pub use food_log::{FoodEstimate, FoodLogEntry, MealType, ServingSize};
pub use nutrition::{non_negative, DailyNutrientTotals, Nutrition};
pub use profile::UserProfile;

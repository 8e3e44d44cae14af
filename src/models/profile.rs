//! User profile model
//!
//! The targets the scoring functions are measured against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_water_goal() -> u32 {
    8
}

/// Profile record as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    /// Maintenance energy target in kcal/day
    pub tdee: f64,
    pub protein_target: Option<f64>, // grams
    pub carbs_target: Option<f64>,   // grams
    pub fat_target: Option<f64>,     // grams
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub started_on: NaiveDate,
    pub target_end_date: Option<NaiveDate>,
    #[serde(default = "default_water_goal")]
    pub water_goal_glasses: u32,
}

impl UserProfile {
    /// Protein target in grams, falling back to 30% of TDEE from protein
    pub fn protein_target_or_default(&self) -> f64 {
        match self.protein_target {
            Some(target) if target > 0.0 => target,
            _ => crate::tracking::default_protein_target(self.tdee),
        }
    }

    /// Kilograms still to go; negative when gaining is the goal
    pub fn weight_to_go_kg(&self) -> f64 {
        self.current_weight_kg - self.target_weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(protein_target: Option<f64>) -> UserProfile {
        UserProfile {
            name: None,
            tdee: 2000.0,
            protein_target,
            carbs_target: None,
            fat_target: None,
            current_weight_kg: 72.0,
            target_weight_kg: 65.0,
            started_on: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            target_end_date: None,
            water_goal_glasses: 8,
        }
    }

    #[test]
    fn test_protein_target_fallback() {
        assert_eq!(profile(Some(110.0)).protein_target_or_default(), 110.0);
        // 2000 * 0.3 / 4
        assert_eq!(profile(None).protein_target_or_default(), 150.0);
        assert_eq!(profile(Some(0.0)).protein_target_or_default(), 150.0);
    }

    #[test]
    fn test_weight_to_go() {
        assert_eq!(profile(None).weight_to_go_kg(), 7.0);
    }

    #[test]
    fn test_water_goal_defaults_when_missing() {
        let json = r#"{
            "name": "Mint",
            "tdee": 1800,
            "protein_target": null,
            "carbs_target": null,
            "fat_target": null,
            "current_weight_kg": 60,
            "target_weight_kg": 55,
            "started_on": "2026-01-01",
            "target_end_date": "2026-03-01"
        }"#;
        let parsed: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.water_goal_glasses, 8);
        assert_eq!(parsed.target_end_date, NaiveDate::from_ymd_opt(2026, 3, 1));
    }
}

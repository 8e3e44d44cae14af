//! Water intake progress

use serde::{Deserialize, Serialize};

use crate::science::constants::{MIN_WATER_GLASSES, ML_PER_GLASS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterProgress {
    pub glasses: u32,
    /// Goal after applying the 8 glass minimum
    pub goal: u32,
    pub ml_consumed: u32,
    pub ml_goal: u32,
    pub progress_percent: f64,
    pub goal_reached: bool,
}

pub fn water_progress(glasses: u32, goal: u32) -> WaterProgress {
    let goal = goal.max(MIN_WATER_GLASSES);
    WaterProgress {
        glasses,
        goal,
        ml_consumed: glasses.saturating_mul(ML_PER_GLASS),
        ml_goal: goal.saturating_mul(ML_PER_GLASS),
        progress_percent: (f64::from(glasses) / f64::from(goal) * 100.0).min(100.0),
        goal_reached: glasses >= goal,
    }
}

/// Apply a +/- tap to the glass counter, never going below zero
pub fn adjust_glasses(current: u32, delta: i32) -> u32 {
    current.saturating_add_signed(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_has_minimum_of_eight() {
        let p = water_progress(4, 5);
        assert_eq!(p.goal, 8);
        assert_eq!(p.ml_consumed, 1000);
        assert_eq!(p.ml_goal, 2000);
        assert_eq!(p.progress_percent, 50.0);
        assert!(!p.goal_reached);
    }

    #[test]
    fn test_progress_caps_at_hundred() {
        let p = water_progress(12, 10);
        assert_eq!(p.progress_percent, 100.0);
        assert!(p.goal_reached);
    }

    #[test]
    fn test_adjust_never_negative() {
        assert_eq!(adjust_glasses(0, -1), 0);
        assert_eq!(adjust_glasses(3, 1), 4);
    }
}

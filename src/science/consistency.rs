//! Logging consistency score
//!
//! Blends how often the user logs with how close logged days land to target.

use super::constants::{ADHERENCE_WEIGHT, LOG_RATE_WEIGHT};
use crate::models::non_negative;

/// Score logging discipline from 0 to 100.
///
/// `daily_calories` holds one total per day, 0 for days without a log.
/// Each logged day contributes `1 - min(|cal - target| / target, 1)` to the
/// adherence average. Returns 0 when there is nothing to score.
pub fn calculate_consistency_score(daily_calories: &[f64], target_calories: f64) -> u32 {
    if daily_calories.is_empty() || target_calories <= 0.0 || !target_calories.is_finite() {
        return 0;
    }

    let logged: Vec<f64> = daily_calories
        .iter()
        .map(|&c| non_negative(c))
        .filter(|&c| c > 0.0)
        .collect();

    if logged.is_empty() {
        return 0;
    }

    let log_rate = logged.len() as f64 / daily_calories.len() as f64 * 100.0;

    let adherence_sum: f64 = logged
        .iter()
        .map(|&cal| {
            let deviation = (cal - target_calories).abs() / target_calories;
            1.0 - deviation.min(1.0)
        })
        .sum();
    let adherence = adherence_sum / logged.len() as f64 * 100.0;

    let score = (log_rate * LOG_RATE_WEIGHT + adherence * ADHERENCE_WEIGHT).round();
    score.clamp(0.0, 100.0) as u32
}

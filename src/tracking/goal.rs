//! Goal timeline progress
//!
//! How far along the user is between starting and their target end date.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Timeline used when the profile has no target end date
pub const DEFAULT_GOAL_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub total_days: u32,
    pub current_day: u32,
    pub days_remaining: u32,
    pub progress_percent: f64,
}

pub fn goal_progress(
    started_on: NaiveDate,
    target_end: Option<NaiveDate>,
    today: NaiveDate,
) -> GoalProgress {
    let target = target_end.unwrap_or_else(|| {
        started_on
            .checked_add_signed(Duration::days(DEFAULT_GOAL_DAYS))
            .unwrap_or(NaiveDate::MAX)
    });
    let total_days = (target - started_on).num_days().max(1);
    let current_day = (today - started_on).num_days().clamp(0, total_days);

    GoalProgress {
        total_days: total_days as u32,
        current_day: current_day as u32,
        days_remaining: (total_days - current_day) as u32,
        progress_percent: current_day as f64 / total_days as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_default_thirty_day_goal() {
        let p = goal_progress(date(1, 1), None, date(1, 16));
        assert_eq!(p.total_days, 30);
        assert_eq!(p.current_day, 15);
        assert_eq!(p.days_remaining, 15);
        assert_eq!(p.progress_percent, 50.0);
    }

    #[test]
    fn test_before_start_and_after_end_are_clamped() {
        let before = goal_progress(date(2, 1), Some(date(3, 1)), date(1, 20));
        assert_eq!(before.current_day, 0);

        let after = goal_progress(date(2, 1), Some(date(3, 1)), date(4, 1));
        assert_eq!(after.current_day, after.total_days);
        assert_eq!(after.progress_percent, 100.0);
    }

    #[test]
    fn test_default_goal_saturates_at_calendar_end() {
        let start = NaiveDate::MAX - Duration::days(3);
        let p = goal_progress(start, None, NaiveDate::MAX);
        assert_eq!(p.total_days, 3);
        assert_eq!(p.current_day, 3);
        assert_eq!(p.days_remaining, 0);
    }

    #[test]
    fn test_end_before_start_is_one_day() {
        let p = goal_progress(date(2, 1), Some(date(1, 1)), date(2, 1));
        assert_eq!(p.total_days, 1);
        assert_eq!(p.current_day, 0);
    }
}

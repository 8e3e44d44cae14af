//! Daily aggregation
//!
//! Buckets raw food log rows into local calendar days and derives the
//! averages the health grade is computed from.

use std::collections::BTreeMap;

use chrono::{Duration, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{non_negative, DailyNutrientTotals, FoodLogEntry, Nutrition};
use crate::science::constants::{DEFAULT_PROTEIN_SHARE, KCAL_PER_G_PROTEIN, MAINTENANCE_BAND_KCAL};
use crate::science::GradeInputs;

/// Protein target (g) when the profile has none: 30% of TDEE from protein
pub fn default_protein_target(tdee: f64) -> f64 {
    non_negative(tdee) * DEFAULT_PROTEIN_SHARE / KCAL_PER_G_PROTEIN
}

/// Sum entries per local date over the `window_days` days ending at `today`.
///
/// Every date in the window is present, oldest first; dates without entries
/// are zeroed. Entries outside the window are ignored. Near the start of the
/// calendar the window is cut short rather than wrapping.
pub fn aggregate_daily_totals(
    entries: &[FoodLogEntry],
    today: NaiveDate,
    window_days: u32,
    offset: FixedOffset,
) -> Vec<DailyNutrientTotals> {
    let mut buckets: BTreeMap<NaiveDate, Nutrition> = (0..i64::from(window_days))
        .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
        .map(|date| (date, Nutrition::zero()))
        .collect();

    let mut skipped = 0usize;
    for entry in entries {
        match buckets.get_mut(&entry.local_date(offset)) {
            Some(total) => *total += entry.nutrition.sanitized(),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!("Skipped {} log entries outside the {} day window", skipped, window_days);
    }

    buckets
        .into_iter()
        .map(|(date, nutrition)| DailyNutrientTotals::new(date, nutrition))
        .collect()
}

/// Averages over a window of daily totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub days: Vec<DailyNutrientTotals>,
    pub daily_calories: Vec<f64>,
    pub total_calories: f64,
    pub logged_days: u32,
    /// Logged days at or under TDEE + 200 kcal
    pub on_track_days: u32,
    /// Mean over logged days only
    pub avg_calories: f64,
    /// Mean over every day in the window, unlogged days counting as 0
    pub avg_calories_all_days: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
    pub avg_sugar: f64,
    pub avg_sodium: f64,
    pub avg_cholesterol: f64,
}

impl WeeklySummary {
    pub fn from_days(days: &[DailyNutrientTotals], tdee: f64) -> Self {
        let logged: Vec<&DailyNutrientTotals> = days.iter().filter(|d| d.is_logged()).collect();
        let logged_days = logged.len() as u32;
        let on_track_days = logged
            .iter()
            .filter(|d| d.calories() <= tdee + MAINTENANCE_BAND_KCAL)
            .count() as u32;

        let totals: Nutrition = days.iter().map(|d| d.nutrition).sum();
        let per_logged_day = |value: f64| {
            if logged_days == 0 {
                0.0
            } else {
                value / f64::from(logged_days)
            }
        };

        Self {
            days: days.to_vec(),
            daily_calories: days.iter().map(|d| d.calories()).collect(),
            total_calories: totals.calories,
            logged_days,
            on_track_days,
            avg_calories: per_logged_day(totals.calories),
            avg_calories_all_days: if days.is_empty() {
                0.0
            } else {
                totals.calories / days.len() as f64
            },
            avg_protein: per_logged_day(totals.protein),
            avg_carbs: per_logged_day(totals.carbs),
            avg_fat: per_logged_day(totals.fat),
            avg_sugar: per_logged_day(totals.sugar),
            avg_sodium: per_logged_day(totals.sodium),
            avg_cholesterol: per_logged_day(totals.cholesterol),
        }
    }

    /// Inputs for the health grade, averaged over logged days
    pub fn grade_inputs(&self, tdee: f64, target_protein: f64) -> GradeInputs {
        GradeInputs {
            avg_calories: self.avg_calories,
            tdee,
            avg_protein: self.avg_protein,
            target_protein,
            avg_sugar: self.avg_sugar,
            avg_sodium: self.avg_sodium,
            logged_days: self.logged_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use chrono::{TimeZone, Utc};

    fn entry(day: u32, hour: u32, calories: f64, protein: f64, sugar: f64) -> FoodLogEntry {
        FoodLogEntry {
            name: format!("meal-{}-{}", day, hour),
            logged_at: Utc.with_ymd_and_hms(2026, 2, day, hour, 0, 0).unwrap(),
            meal: MealType::Lunch,
            nutrition: Nutrition {
                calories,
                protein,
                sugar,
                ..Nutrition::zero()
            },
        }
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    #[test]
    fn test_window_is_cut_short_at_calendar_start() {
        let days = aggregate_daily_totals(&[], NaiveDate::MIN, 7, utc());
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::MIN);

        let start = NaiveDate::MIN + Duration::days(2);
        let days = aggregate_daily_totals(&[], start, 7, utc());
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, NaiveDate::MIN);
    }

    #[test]
    fn test_window_has_every_day_oldest_first() {
        let days = aggregate_daily_totals(&[], date(10), 7, utc());
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(4));
        assert_eq!(days[6].date, date(10));
        assert!(days.iter().all(|d| !d.is_logged()));
    }

    #[test]
    fn test_entries_summed_per_day_and_outside_ignored() {
        let entries = vec![
            entry(10, 8, 500.0, 20.0, 5.0),
            entry(10, 12, 700.0, 30.0, 10.0),
            entry(8, 19, 900.0, 40.0, 0.0),
            entry(1, 12, 5000.0, 0.0, 0.0),
        ];
        let days = aggregate_daily_totals(&entries, date(10), 7, utc());
        assert_eq!(days[6].calories(), 1200.0);
        assert_eq!(days[6].nutrition.protein, 50.0);
        assert_eq!(days[4].calories(), 900.0);
        let total: f64 = days.iter().map(|d| d.calories()).sum();
        assert_eq!(total, 2100.0);
    }

    #[test]
    fn test_local_offset_moves_late_meal_to_next_day() {
        // 20:00 UTC on the 9th is 03:00 on the 10th at UTC+7
        let entries = vec![entry(9, 20, 400.0, 0.0, 0.0)];
        let bangkok = FixedOffset::east_opt(7 * 3600).unwrap();
        let days = aggregate_daily_totals(&entries, date(10), 7, bangkok);
        assert_eq!(days[6].calories(), 400.0);
        assert_eq!(days[5].calories(), 0.0);
    }

    #[test]
    fn test_summary_averages_over_logged_days() {
        let entries = vec![
            entry(10, 8, 1800.0, 90.0, 20.0),
            entry(9, 8, 2400.0, 60.0, 40.0),
        ];
        let days = aggregate_daily_totals(&entries, date(10), 7, utc());
        let summary = WeeklySummary::from_days(&days, 2000.0);

        assert_eq!(summary.logged_days, 2);
        assert_eq!(summary.total_calories, 4200.0);
        assert_eq!(summary.avg_calories, 2100.0);
        assert_eq!(summary.avg_calories_all_days, 600.0);
        assert_eq!(summary.avg_protein, 75.0);
        assert_eq!(summary.avg_sugar, 30.0);
        // 2400 is over tdee + 200
        assert_eq!(summary.on_track_days, 1);
        assert_eq!(summary.daily_calories.len(), 7);

        let inputs = summary.grade_inputs(2000.0, 150.0);
        assert_eq!(inputs.logged_days, 2);
        assert_eq!(inputs.avg_calories, 2100.0);
    }

    #[test]
    fn test_summary_of_empty_week_is_zeroed() {
        let days = aggregate_daily_totals(&[], date(10), 7, utc());
        let summary = WeeklySummary::from_days(&days, 2000.0);
        assert_eq!(summary.logged_days, 0);
        assert_eq!(summary.avg_calories, 0.0);
        assert_eq!(summary.avg_sodium, 0.0);
    }

    #[test]
    fn test_default_protein_target() {
        assert_eq!(default_protein_target(2000.0), 150.0);
        assert_eq!(default_protein_target(-10.0), 0.0);
    }
}

//! Monthly logging calendar
//!
//! Which days of a month have a log, and the month's logging rate.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{TrackingError, TrackingResult};
use crate::models::FoodLogEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: u32,
    pub is_logged: bool,
    pub is_future: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1 in a Sunday-first grid
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
    pub logged_count: u32,
    /// Logged days as a percentage of days elapsed in the month
    pub consistency_rate: u32,
}

/// Distinct local dates that have at least one entry
pub fn logged_dates(entries: &[FoodLogEntry], offset: FixedOffset) -> BTreeSet<NaiveDate> {
    entries.iter().map(|e| e.local_date(offset)).collect()
}

fn days_in_month(first: NaiveDate) -> TrackingResult<u32> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    let next = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(TrackingError::InvalidMonth { year, month })?;
    Ok((next - Duration::days(1)).day())
}

pub fn build_month_calendar(
    year: i32,
    month: u32,
    logged: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> TrackingResult<MonthCalendar> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(TrackingError::InvalidMonth { year, month })?;
    let length = days_in_month(first)?;

    let days: Vec<CalendarDay> = (1..=length)
        .filter_map(|day| first.with_day(day))
        .map(|date| CalendarDay {
            day: date.day(),
            is_logged: logged.contains(&date),
            is_future: date > today,
            is_today: date == today,
        })
        .collect();
    let logged_count = days.iter().filter(|d| d.is_logged).count() as u32;

    let days_passed = if (year, month) == (today.year(), today.month()) {
        today.day()
    } else if first < today {
        length
    } else {
        0
    };
    let consistency_rate = if days_passed == 0 {
        0
    } else {
        (f64::from(logged_count) / f64::from(days_passed) * 100.0).round() as u32
    };

    Ok(MonthCalendar {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
        logged_count,
        consistency_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_month_rate_uses_days_so_far() {
        let logged: BTreeSet<NaiveDate> =
            [date(2026, 2, 1), date(2026, 2, 3), date(2026, 2, 9)].into_iter().collect();
        let cal = build_month_calendar(2026, 2, &logged, date(2026, 2, 10)).unwrap();

        assert_eq!(cal.days.len(), 28);
        // 1 Feb 2026 is a Sunday
        assert_eq!(cal.leading_blanks, 0);
        assert_eq!(cal.logged_count, 3);
        assert_eq!(cal.consistency_rate, 30);
        assert!(cal.days[9].is_today);
        assert!(cal.days[10].is_future);
        assert!(!cal.days[8].is_future);
    }

    #[test]
    fn test_past_month_uses_full_length() {
        let logged: BTreeSet<NaiveDate> = (1..=15).map(|d| date(2025, 12, d)).collect();
        let cal = build_month_calendar(2025, 12, &logged, date(2026, 2, 10)).unwrap();
        assert_eq!(cal.days.len(), 31);
        // 15 / 31
        assert_eq!(cal.consistency_rate, 48);
        // 1 Dec 2025 is a Monday
        assert_eq!(cal.leading_blanks, 1);
    }

    #[test]
    fn test_future_month_rate_is_zero() {
        let cal = build_month_calendar(2026, 5, &BTreeSet::new(), date(2026, 2, 10)).unwrap();
        assert_eq!(cal.consistency_rate, 0);
        assert!(cal.days.iter().all(|d| d.is_future));
    }

    #[test]
    fn test_invalid_month() {
        let err = build_month_calendar(2026, 13, &BTreeSet::new(), date(2026, 2, 10)).unwrap_err();
        assert!(matches!(err, TrackingError::InvalidMonth { month: 13, .. }));
    }
}

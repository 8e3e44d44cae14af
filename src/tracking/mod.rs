//! Tracking helpers
//!
//! Turns raw log rows and profile dates into the inputs and display data the
//! scoring engine and the front-end work with.

pub mod aggregate;
pub mod calendar;
pub mod goal;
pub mod water;

use chrono::FixedOffset;
use thiserror::Error;

pub use aggregate::{aggregate_daily_totals, default_protein_target, WeeklySummary};
pub use calendar::{build_month_calendar, logged_dates, CalendarDay, MonthCalendar};
pub use goal::{goal_progress, GoalProgress};
pub use water::{adjust_glasses, water_progress, WaterProgress};

/// Tracking error types
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("Invalid calendar month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

/// Result type for tracking operations
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Build a fixed offset from minutes east of UTC
pub fn offset_from_minutes(minutes: i32) -> TrackingResult<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(TrackingError::InvalidOffset(minutes))
}

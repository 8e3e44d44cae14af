//! Catnub Status Tool
//!
//! Runtime status of the service and usage instructions for AI assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Scoring instructions for AI assistants
pub const SCORING_INSTRUCTIONS: &str = r#"
# Catnub Scoring Instructions

Catnub turns logged food into feedback: a weight projection, a macro check,
a consistency score and a health grade out of 100.

## Units

| Field | Unit |
|-------|------|
| calories, tdee | kcal |
| protein, carbs, fat, fiber, sugar | grams |
| sodium, cholesterol | milligrams |
| logged_at | RFC 3339 timestamp, e.g. `2026-03-07T12:30:00+07:00` |
| today, dates | `YYYY-MM-DD` |

Negative numbers are treated as 0. Days with 0 kcal count as "not logged".

## Quick tools

- `weight_projection` - 30 day weight trend from TDEE and average intake
- `macro_balance` - protein/carb/fat split by grams
- `consistency_score` - logging discipline from a list of daily kcal totals
- `weekly_balance` - kcal balance over the logged days of a week
- `metabolic_split` - 70/30 resting/activity illustration of TDEE
- `health_grade` - the composite A-F grade with five quests
- `health_tip` - one tip from TDEE and average intake
- `food_health_score` - 0-100 score for a single food
- `month_calendar` - which days of a month were logged
- `water_progress` - glasses of water against the daily goal

## Full report

`weekly_report` takes raw food log entries plus the profile and does the
daily bucketing itself (local day boundaries use the server's configured
UTC offset). Pass `water_glasses` for today's water progress against the
profile goal. Prefer it when you have the raw log.

## Health grade

| Quest | Points | Full points when |
|-------|--------|------------------|
| Energy balance | 40 | average kcal within 80%-110% of TDEE |
| Protein | 15 | average protein at least 80% of target |
| Sugar | 15 | average sugar at most 30 g |
| Sodium | 10 | average sodium at most 2300 mg |
| Consistency | 20 | at least 5 logged days in the week |

Grades: A >= 80, B >= 70, C >= 50, D >= 40, otherwise F.
"#;

/// Runtime status of the Catnub service
#[derive(Debug, Clone, Serialize)]
pub struct CatnubStatus {
    /// Build information
    pub version: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,

    /// Configuration in effect
    pub utc_offset_minutes: i32,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub tool_calls: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    utc_offset_minutes: i32,
    tool_calls: u64,
}

impl StatusTracker {
    pub fn new(utc_offset_minutes: i32) -> Self {
        Self {
            start_time: Instant::now(),
            utc_offset_minutes,
            tool_calls: 0,
        }
    }

    /// Count one served tool call
    pub fn record_call(&mut self) {
        self.tool_calls += 1;
    }

    /// Get the current status
    pub fn get_status(&self) -> CatnubStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CatnubStatus {
            version: build_info.version,
            build_timestamp: build_info.build_timestamp,
            build_profile: build_info.build_profile,
            utc_offset_minutes: self.utc_offset_minutes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            tool_calls: self.tool_calls,
        }
    }
}

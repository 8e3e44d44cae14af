//! Composed insight reports
//!
//! Runs the individual scoring functions over a window of days and bundles
//! the results the way the dashboard and the MCP tools present them.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::collab::{CollabError, CollabResult, LogStore};
use crate::models::{FoodLogEntry, UserProfile};
use crate::science::{
    analyze_macro_balance, calculate_consistency_score, calculate_food_health_score,
    calculate_health_grade, calculate_metabolic_split, calculate_weekly_balance,
    calculate_weight_projection, determine_pet_mood, generate_health_tip, HealthGradeResult,
    HealthTip, MacroAnalysis, MetabolicSplit, PetMood, WeeklyBalance, WeightProjection,
};
use crate::tracking::{
    aggregate_daily_totals, goal_progress, water_progress, GoalProgress, WaterProgress,
    WeeklySummary,
};

/// Days in a scoring window
pub const WEEK_DAYS: u32 = 7;

/// Food score assumed for a day with nothing logged
const NEUTRAL_FOOD_SCORE: f64 = 50.0;

/// Energy and macro analysis for a window of days
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeepInsights {
    /// Mean over every day in the window, unlogged days included
    pub avg_calories: f64,
    pub projection: WeightProjection,
    pub weekly_balance: WeeklyBalance,
    pub metabolic_split: MetabolicSplit,
    pub macro_analysis: MacroAnalysis,
    pub consistency_score: u32,
    pub health_tip: HealthTip,
}

pub fn deep_insights(
    daily_calories: &[f64],
    tdee: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> DeepInsights {
    let avg_calories = if daily_calories.is_empty() {
        0.0
    } else {
        daily_calories.iter().sum::<f64>() / daily_calories.len() as f64
    };
    let projection = calculate_weight_projection(tdee, avg_calories);
    let health_tip = generate_health_tip(&projection, avg_calories, tdee);

    DeepInsights {
        avg_calories,
        weekly_balance: calculate_weekly_balance(daily_calories, tdee),
        metabolic_split: calculate_metabolic_split(tdee),
        macro_analysis: analyze_macro_balance(protein, carbs, fat),
        consistency_score: calculate_consistency_score(daily_calories, tdee),
        projection,
        health_tip,
    }
}

/// Everything the weekly analytics screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub today: NaiveDate,
    pub summary: WeeklySummary,
    pub target_protein: f64,
    pub grade: HealthGradeResult,
    pub insights: DeepInsights,
    pub goal: GoalProgress,
    /// Current minus target weight; negative when gaining is the goal
    pub weight_to_go_kg: f64,
    /// Today's glasses against the profile's water goal
    pub water: WaterProgress,
    pub today_food_score: f64,
    pub pet_mood: PetMood,
}

pub fn weekly_report(
    entries: &[FoodLogEntry],
    profile: &UserProfile,
    today: NaiveDate,
    offset: FixedOffset,
    water_glasses: u32,
) -> WeeklyReport {
    let days = aggregate_daily_totals(entries, today, WEEK_DAYS, offset);
    let summary = WeeklySummary::from_days(&days, profile.tdee);
    let target_protein = profile.protein_target_or_default();

    let grade = calculate_health_grade(&summary.grade_inputs(profile.tdee, target_protein));
    let insights = deep_insights(
        &summary.daily_calories,
        profile.tdee,
        summary.avg_protein,
        summary.avg_carbs,
        summary.avg_fat,
    );

    let todays: Vec<&FoodLogEntry> = entries
        .iter()
        .filter(|e| e.local_date(offset) == today)
        .collect();
    let today_food_score = if todays.is_empty() {
        NEUTRAL_FOOD_SCORE
    } else {
        todays
            .iter()
            .map(|e| f64::from(calculate_food_health_score(&e.nutrition)))
            .sum::<f64>()
            / todays.len() as f64
    };
    let today_calories = days.last().map(|d| d.calories()).unwrap_or(0.0);
    let pet_mood = determine_pet_mood(today_calories, profile.tdee, today_food_score);

    tracing::info!(
        "Weekly report for {}: {} logged days, grade {} ({})",
        today,
        summary.logged_days,
        grade.grade.as_str(),
        grade.total_score
    );

    WeeklyReport {
        today,
        goal: goal_progress(profile.started_on, profile.target_end_date, today),
        weight_to_go_kg: profile.weight_to_go_kg(),
        water: water_progress(water_glasses, profile.water_goal_glasses),
        summary,
        target_protein,
        grade,
        insights,
        today_food_score,
        pet_mood,
    }
}

/// UTC bounds of the local-date window ending at `today`, clamped to the
/// representable range
fn window_bounds(today: NaiveDate, offset: FixedOffset) -> (DateTime<Utc>, DateTime<Utc>) {
    let first_day = today
        .checked_sub_signed(Duration::days(i64::from(WEEK_DAYS) - 1))
        .unwrap_or(NaiveDate::MIN);
    let shift = Duration::seconds(i64::from(offset.local_minus_utc()));
    let from = first_day
        .and_time(NaiveTime::MIN)
        .checked_sub_signed(shift)
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let to = from
        .checked_add_signed(Duration::days(i64::from(WEEK_DAYS)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    (from, to)
}

/// Load a user's week from the store and build the report
pub async fn fetch_weekly_report(
    store: &dyn LogStore,
    user_id: &str,
    today: NaiveDate,
    offset: FixedOffset,
) -> CollabResult<WeeklyReport> {
    let profile = store
        .profile(user_id)
        .await?
        .ok_or_else(|| CollabError::ProfileNotFound(user_id.to_string()))?;

    let (from, to) = window_bounds(today, offset);
    let entries = store.logs_between(user_id, from, to).await?;
    let glasses = store.water_glasses(user_id, today).await?;

    Ok(weekly_report(&entries, &profile, today, offset, glasses))
}

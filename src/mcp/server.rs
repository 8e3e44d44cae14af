//! Catnub MCP Server Implementation
//!
//! Exposes the scoring engine as MCP tools over stdio.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{FoodLogEntry, MealType, Nutrition, UserProfile};
use crate::science::{
    analyze_macro_balance, calculate_consistency_score, calculate_food_health_score,
    calculate_health_grade, calculate_metabolic_split, calculate_weekly_balance,
    calculate_weight_projection, generate_health_tip, GradeInputs,
};
use crate::tools::insights;
use crate::tools::status::{StatusTracker, SCORING_INSTRUCTIONS};
use crate::tracking::{build_month_calendar, water_progress};

/// Catnub MCP Service
#[derive(Clone)]
pub struct CatnubService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    tool_router: ToolRouter<CatnubService>,
}

impl CatnubService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.utc_offset_minutes()))),
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Count the call and render a result record as pretty JSON
    async fn respond<T: Serialize>(&self, value: &T) -> Result<CallToolResult, McpError> {
        self.status_tracker.lock().await.record_call();
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Parse an optional `YYYY-MM-DD`, defaulting to today at the configured offset
    fn resolve_today(&self, today: Option<&str>) -> Result<NaiveDate, McpError> {
        match today {
            Some(raw) => parse_date(raw),
            None => Ok(self.config.today()),
        }
    }
}

/// Years accepted from clients; `%Y` alone would take signed extended years
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

fn parse_date(raw: &str) -> Result<NaiveDate, McpError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        McpError::invalid_params(format!("Invalid date {:?} (expected YYYY-MM-DD): {}", raw, e), None)
    })?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(McpError::invalid_params(
            format!("Date {:?} is outside years {}-{}", raw, MIN_YEAR, MAX_YEAR),
            None,
        ));
    }
    Ok(date)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, McpError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            McpError::invalid_params(format!("Invalid timestamp {:?} (expected RFC 3339): {}", raw, e), None)
        })
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeightProjectionParams {
    /// Total daily energy expenditure in kcal
    pub tdee: f64,
    /// Average daily intake in kcal
    pub avg_daily_intake: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MacroBalanceParams {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailyCaloriesParams {
    /// Calories per day, 0 for days without a log
    pub daily_calories: Vec<f64>,
    /// Daily calorie target in kcal
    pub target_calories: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MetabolicSplitParams {
    pub tdee: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HealthGradeParams {
    pub avg_calories: f64,
    pub tdee: f64,
    pub avg_protein: f64,
    pub target_protein: f64,
    pub avg_sugar: f64,
    /// Milligrams
    pub avg_sodium: f64,
    /// Days with any log in the week (0-7)
    pub logged_days: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HealthTipParams {
    pub tdee: f64,
    pub avg_calories: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NutritionParams {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub sodium: f64,
    #[serde(default)]
    pub cholesterol: f64,
}

impl From<&NutritionParams> for Nutrition {
    fn from(p: &NutritionParams) -> Self {
        Nutrition {
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            fat: p.fat,
            fiber: p.fiber,
            sugar: p.sugar,
            sodium: p.sodium,
            cholesterol: p.cholesterol,
        }
        .sanitized()
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogEntryParams {
    pub name: String,
    /// RFC 3339 timestamp
    pub logged_at: String,
    /// breakfast, lunch, dinner or snack
    pub meal: Option<String>,
    #[serde(flatten)]
    pub nutrition: NutritionParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileParams {
    pub name: Option<String>,
    pub tdee: f64,
    pub protein_target: Option<f64>,
    pub carbs_target: Option<f64>,
    pub fat_target: Option<f64>,
    #[serde(default)]
    pub current_weight_kg: f64,
    #[serde(default)]
    pub target_weight_kg: f64,
    /// YYYY-MM-DD
    pub started_on: String,
    /// YYYY-MM-DD
    pub target_end_date: Option<String>,
    #[serde(default = "default_water_goal")]
    pub water_goal_glasses: u32,
}

fn default_water_goal() -> u32 { 8 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeeklyReportParams {
    pub entries: Vec<LogEntryParams>,
    pub profile: ProfileParams,
    /// YYYY-MM-DD, defaults to today in the configured time zone
    pub today: Option<String>,
    /// Glasses of water logged today
    #[serde(default)]
    pub water_glasses: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MonthCalendarParams {
    pub year: i32,
    pub month: u32,
    /// Dates (YYYY-MM-DD) that have at least one log
    #[serde(default)]
    pub logged_dates: Vec<String>,
    /// YYYY-MM-DD, defaults to today in the configured time zone
    pub today: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WaterProgressParams {
    pub glasses: u32,
    #[serde(default = "default_water_goal")]
    pub goal: u32,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CatnubService {
    #[tool(description = "Get Catnub server status including version, build time, uptime, configured UTC offset and memory usage")]
    async fn catnub_status(&self) -> Result<CallToolResult, McpError> {
        let mut tracker = self.status_tracker.lock().await;
        tracker.record_call();
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for the scoring tools: units, which tool to call when, and how the health grade is scored. Call this first when unsure.")]
    async fn scoring_instructions(&self) -> Result<CallToolResult, McpError> {
        self.status_tracker.lock().await.record_call();
        Ok(CallToolResult::success(vec![Content::text(SCORING_INSTRUCTIONS)]))
    }

    #[tool(description = "Project the 30 day weight change from TDEE and average daily intake")]
    async fn weight_projection(&self, Parameters(p): Parameters<WeightProjectionParams>) -> Result<CallToolResult, McpError> {
        self.respond(&calculate_weight_projection(p.tdee, p.avg_daily_intake)).await
    }

    #[tool(description = "Analyze the protein/carb/fat split (by grams) and flag low protein, high fat or high carbs")]
    async fn macro_balance(&self, Parameters(p): Parameters<MacroBalanceParams>) -> Result<CallToolResult, McpError> {
        self.respond(&analyze_macro_balance(p.protein, p.carbs, p.fat)).await
    }

    #[tool(description = "Score logging discipline (0-100) from daily calorie totals against the target")]
    async fn consistency_score(&self, Parameters(p): Parameters<DailyCaloriesParams>) -> Result<CallToolResult, McpError> {
        let score = calculate_consistency_score(&p.daily_calories, p.target_calories);
        self.respond(&serde_json::json!({ "consistency_score": score })).await
    }

    #[tool(description = "Net calorie balance over the logged days of a week, with the implied weight trend")]
    async fn weekly_balance(&self, Parameters(p): Parameters<DailyCaloriesParams>) -> Result<CallToolResult, McpError> {
        self.respond(&calculate_weekly_balance(&p.daily_calories, p.target_calories)).await
    }

    #[tool(description = "Split TDEE into resting metabolism (70%) and activity")]
    async fn metabolic_split(&self, Parameters(p): Parameters<MetabolicSplitParams>) -> Result<CallToolResult, McpError> {
        self.respond(&calculate_metabolic_split(p.tdee)).await
    }

    #[tool(description = "Compute the weekly health grade (0-100, A-F) with its five quests, nutrition gaps and advice")]
    async fn health_grade(&self, Parameters(p): Parameters<HealthGradeParams>) -> Result<CallToolResult, McpError> {
        let inputs = GradeInputs {
            avg_calories: p.avg_calories,
            tdee: p.tdee,
            avg_protein: p.avg_protein,
            target_protein: p.target_protein,
            avg_sugar: p.avg_sugar,
            avg_sodium: p.avg_sodium,
            logged_days: p.logged_days,
        };
        self.respond(&calculate_health_grade(&inputs)).await
    }

    #[tool(description = "Pick one health tip from TDEE and average daily intake")]
    async fn health_tip(&self, Parameters(p): Parameters<HealthTipParams>) -> Result<CallToolResult, McpError> {
        let projection = calculate_weight_projection(p.tdee, p.avg_calories);
        self.respond(&generate_health_tip(&projection, p.avg_calories, p.tdee)).await
    }

    #[tool(description = "Score a single food from 0 to 100 based on protein, fiber, sugar, sodium and fat density")]
    async fn food_health_score(&self, Parameters(p): Parameters<NutritionParams>) -> Result<CallToolResult, McpError> {
        let score = calculate_food_health_score(&Nutrition::from(&p));
        self.respond(&serde_json::json!({ "health_score": score })).await
    }

    #[tool(description = "Build the full weekly report (summary, grade, insights, goal progress, pet mood) from raw food log entries and the user's profile")]
    async fn weekly_report(&self, Parameters(p): Parameters<WeeklyReportParams>) -> Result<CallToolResult, McpError> {
        let today = self.resolve_today(p.today.as_deref())?;

        let entries = p
            .entries
            .iter()
            .map(|e| {
                Ok(FoodLogEntry {
                    name: e.name.clone(),
                    logged_at: parse_timestamp(&e.logged_at)?,
                    meal: e.meal.as_deref().map(MealType::from_str).unwrap_or_default(),
                    nutrition: Nutrition::from(&e.nutrition),
                })
            })
            .collect::<Result<Vec<_>, McpError>>()?;

        let profile = UserProfile {
            name: p.profile.name,
            tdee: p.profile.tdee,
            protein_target: p.profile.protein_target,
            carbs_target: p.profile.carbs_target,
            fat_target: p.profile.fat_target,
            current_weight_kg: p.profile.current_weight_kg,
            target_weight_kg: p.profile.target_weight_kg,
            started_on: parse_date(&p.profile.started_on)?,
            target_end_date: p.profile.target_end_date.as_deref().map(parse_date).transpose()?,
            water_goal_glasses: p.profile.water_goal_glasses,
        };

        tracing::info!("weekly_report: {} entries ending {}", entries.len(), today);
        let report = insights::weekly_report(&entries, &profile, today, self.config.offset, p.water_glasses);
        self.respond(&report).await
    }

    #[tool(description = "Build a month's logging calendar with per-day flags and the consistency rate so far")]
    async fn month_calendar(&self, Parameters(p): Parameters<MonthCalendarParams>) -> Result<CallToolResult, McpError> {
        let today = self.resolve_today(p.today.as_deref())?;
        let logged: BTreeSet<NaiveDate> = p
            .logged_dates
            .iter()
            .map(|d| parse_date(d))
            .collect::<Result<_, _>>()?;
        let calendar = build_month_calendar(p.year, p.month, &logged, today)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        self.respond(&calendar).await
    }

    #[tool(description = "Water intake progress in glasses and millilitres against the daily goal (minimum 8 glasses)")]
    async fn water_progress(&self, Parameters(p): Parameters<WaterProgressParams>) -> Result<CallToolResult, McpError> {
        self.respond(&water_progress(p.glasses, p.goal)).await
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CatnubService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "catnub".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Catnub Nutrition Scoring".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Catnub - nutrition scoring and weight projection. \
                 IMPORTANT: Call scoring_instructions for units and scoring rules. \
                 Quick scores: weight_projection, macro_balance, consistency_score, weekly_balance, \
                 metabolic_split, health_grade, health_tip, food_health_score. \
                 Reports: weekly_report (from raw food log entries and a profile). \
                 Tracking: month_calendar, water_progress. \
                 Status: catnub_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-03-07").unwrap(), NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
        assert!(parse_date("07/03/2026").is_err());
    }

    fn report_params(started_on: &str, today: &str) -> WeeklyReportParams {
        serde_json::from_value(serde_json::json!({
            "entries": [],
            "profile": { "tdee": 2000.0, "started_on": started_on },
            "today": today,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_weekly_report_rejects_out_of_range_dates() {
        let service = CatnubService::new(Config::default());
        for params in [
            report_params("+262142-12-31", "2026-03-07"),
            report_params("2026-03-01", "-262143-01-01"),
        ] {
            assert!(service.weekly_report(Parameters(params)).await.is_err());
        }
        let ok = service
            .weekly_report(Parameters(report_params("2026-03-01", "2026-03-07")))
            .await;
        assert!(ok.is_ok());
    }

    #[test]
    fn test_parse_date_rejects_extended_years() {
        for raw in ["+262142-12-31", "-262143-01-01", "0000-01-01", "+10000-01-01"] {
            assert!(parse_date(raw).is_err(), "accepted {}", raw);
        }
        assert!(parse_date("0001-01-01").is_ok());
        assert!(parse_date("9999-12-31").is_ok());
    }

    #[test]
    fn test_parse_timestamp_normalizes_to_utc() {
        let ts = parse_timestamp("2026-03-07T06:30:00+07:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-03-06T23:30:00+00:00");
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_nutrition_params_are_sanitized() {
        let p: NutritionParams = serde_json::from_value(serde_json::json!({
            "calories": 200.0, "protein": -5.0, "carbs": 30.0, "fat": 4.0
        }))
        .unwrap();
        let n = Nutrition::from(&p);
        assert_eq!(n.protein, 0.0);
        assert_eq!(n.sodium, 0.0);
        assert_eq!(n.calories, 200.0);
    }

    #[test]
    fn test_resolve_today() {
        let service = CatnubService::new(Config::default());
        assert_eq!(
            service.resolve_today(Some("2026-03-07")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
        );
        assert!(service.resolve_today(Some("not-a-date")).is_err());
    }

    #[test]
    fn test_server_info() {
        let info = CatnubService::new(Config::default()).get_info();
        assert_eq!(info.server_info.name, "catnub");
    }
}

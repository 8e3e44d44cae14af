//! Health grade engine
//!
//! Scores a week of eating out of 100 across five quests:
//!
//! | quest        | points |
//! |--------------|--------|
//! | calorie band | 40     |
//! | protein      | 15     |
//! | sugar        | 15     |
//! | sodium       | 10     |
//! | consistency  | 20     |
//!
//! Rounding: sub-scores are kept unrounded and summed once for the total.
//! Every displayed figure (quest score, breakdown field, gap) is rounded on
//! its own, so the breakdown may differ from the total by one point.

use serde::{Deserialize, Serialize};

use super::constants::{
    CALORIE_LOWER_FACTOR, CALORIE_MAX_SCORE, CALORIE_UPPER_FACTOR, CONSISTENCY_MAX_SCORE,
    FULL_CONSISTENCY_DAYS, PROTEIN_MAX_SCORE, PROTEIN_PASS_FACTOR, PROTEIN_PER_EGG_G,
    SODIUM_LIMIT_MG, SODIUM_MAX_SCORE, SODIUM_MG_PER_POINT, SUGAR_GRAMS_PER_POINT,
    SUGAR_LIMIT_G, SUGAR_MAX_SCORE,
};
use crate::models::non_negative;

/// Letter grade for the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Grade::A
        } else if score >= 70 {
            Grade::B
        } else if score >= 50 {
            Grade::C
        } else if score >= 40 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

/// Outcome of a single quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Success,
    Warning,
    Danger,
}

/// One gamified sub-score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestItem {
    pub name: String,
    pub icon: String,
    pub score: u32,
    pub max_score: u32,
    pub progress_percent: f64,
    pub status: QuestStatus,
    pub message: String,
}

impl QuestItem {
    fn new(
        name: impl Into<String>,
        icon: &str,
        raw_score: f64,
        max_score: u32,
        status: QuestStatus,
        message: String,
    ) -> Self {
        let max = f64::from(max_score);
        let raw_score = raw_score.clamp(0.0, max);
        Self {
            name: name.into(),
            icon: icon.to_string(),
            score: raw_score.round() as u32,
            max_score,
            progress_percent: (raw_score / max * 100.0).clamp(0.0, 100.0),
            status,
            message,
        }
    }
}

/// Points per category, each rounded for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub calorie_score: u32,
    pub nutrient_score: u32,
    pub consistency_score: u32,
}

/// How far off the nutrient targets the period landed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGap {
    pub missing_protein: u32, // grams
    pub excess_sugar: u32,    // grams
    pub excess_sodium: u32,   // milligrams
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthGradeResult {
    pub total_score: u32,
    pub grade: Grade,
    pub breakdown: ScoreBreakdown,
    pub nutrition_gap: NutritionGap,
    /// Always five entries: calorie, protein, sugar, sodium, consistency
    pub quests: Vec<QuestItem>,
    /// Never empty
    pub advice: Vec<String>,
}

/// Averages for the scoring window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeInputs {
    pub avg_calories: f64,
    pub tdee: f64,
    pub avg_protein: f64,    // grams
    pub target_protein: f64, // grams
    pub avg_sugar: f64,      // grams
    pub avg_sodium: f64,     // milligrams
    /// Days with any log in the window (0-7)
    pub logged_days: u32,
}

impl GradeInputs {
    fn sanitized(&self) -> Self {
        Self {
            avg_calories: non_negative(self.avg_calories),
            tdee: non_negative(self.tdee),
            avg_protein: non_negative(self.avg_protein),
            target_protein: non_negative(self.target_protein),
            avg_sugar: non_negative(self.avg_sugar),
            avg_sodium: non_negative(self.avg_sodium),
            logged_days: self.logged_days,
        }
    }
}

/// Sub-score before rounding, with its quest and optional advice line
struct Scored {
    raw: f64,
    quest: QuestItem,
    advice: Option<String>,
}

fn score_calories(avg: f64, tdee: f64) -> Scored {
    const NAME: &str = "Quest: Energy balance (TDEE ±10%)";
    const ICON: &str = "⚖️";

    if tdee <= 0.0 {
        return Scored {
            raw: 0.0,
            quest: QuestItem::new(
                NAME,
                ICON,
                0.0,
                CALORIE_MAX_SCORE,
                QuestStatus::Warning,
                "Set a daily calorie target to start this quest".to_string(),
            ),
            advice: Some("Set up your calorie target to get an energy score".to_string()),
        };
    }

    let lower = tdee * CALORIE_LOWER_FACTOR;
    let upper = tdee * CALORIE_UPPER_FACTOR;
    let max = f64::from(CALORIE_MAX_SCORE);

    if (lower..=upper).contains(&avg) {
        return Scored {
            raw: max,
            quest: QuestItem::new(
                NAME,
                ICON,
                max,
                CALORIE_MAX_SCORE,
                QuestStatus::Success,
                "Excellent! Energy is balanced".to_string(),
            ),
            advice: None,
        };
    }

    let diff = (avg - tdee).abs().min(tdee);
    let raw = (max - diff / tdee * max).max(0.0);
    let (message, advice) = if avg < lower {
        (
            format!("Eat {} kcal more to reach the range", (lower - avg).round()),
            "Eating far below target, watch out for the yo-yo effect",
        )
    } else {
        (
            format!("Cut {} kcal to hit the sweet spot", (avg - upper).round()),
            "Eating over target, weight may creep up",
        )
    };

    Scored {
        raw,
        quest: QuestItem::new(NAME, ICON, raw, CALORIE_MAX_SCORE, QuestStatus::Warning, message),
        advice: Some(advice.to_string()),
    }
}

fn score_protein(avg: f64, target: f64) -> (Scored, f64) {
    const NAME: &str = "Quest: Hit your protein target (> 80%)";
    const ICON: &str = "🥩";
    let max = f64::from(PROTEIN_MAX_SCORE);

    // a zero target is met by any intake, so the division below never sees 0
    if avg >= target * PROTEIN_PASS_FACTOR {
        let scored = Scored {
            raw: max,
            quest: QuestItem::new(
                NAME,
                ICON,
                max,
                PROTEIN_MAX_SCORE,
                QuestStatus::Success,
                "Protein target reached. Great!".to_string(),
            ),
            advice: None,
        };
        return (scored, 0.0);
    }

    let raw = avg / target * max;
    let missing = (target - avg).max(0.0);
    let eggs = (missing / PROTEIN_PER_EGG_G).ceil();
    let scored = Scored {
        raw,
        quest: QuestItem::new(
            NAME,
            ICON,
            raw,
            PROTEIN_MAX_SCORE,
            QuestStatus::Warning,
            format!("Missing {}g (~{} boiled eggs)", missing.round(), eggs),
        ),
        advice: Some(format!("Protein below target (missing {}g)", missing.round())),
    };
    (scored, missing)
}

fn score_sugar(avg: f64) -> (Scored, f64) {
    let name = format!("Quest: Limit sugar (< {}g)", SUGAR_LIMIT_G);
    const ICON: &str = "🍬";
    let max = f64::from(SUGAR_MAX_SCORE);

    if avg <= SUGAR_LIMIT_G {
        let scored = Scored {
            raw: max,
            quest: QuestItem::new(
                name,
                ICON,
                max,
                SUGAR_MAX_SCORE,
                QuestStatus::Success,
                "Sugar well under control!".to_string(),
            ),
            advice: None,
        };
        return (scored, 0.0);
    }

    let excess = avg - SUGAR_LIMIT_G;
    let raw = (max - excess / SUGAR_GRAMS_PER_POINT).max(0.0);
    let scored = Scored {
        raw,
        quest: QuestItem::new(
            name,
            ICON,
            raw,
            SUGAR_MAX_SCORE,
            QuestStatus::Danger,
            format!("{}g over (go easy on sweets)", excess.round()),
        ),
        advice: Some(format!("Sugar above the limit (over by {}g)", excess.round())),
    };
    (scored, excess)
}

fn score_sodium(avg: f64) -> (Scored, f64) {
    let name = format!("Quest: Limit sodium (< {}mg)", SODIUM_LIMIT_MG);
    const ICON: &str = "🧂";
    let max = f64::from(SODIUM_MAX_SCORE);

    if avg <= SODIUM_LIMIT_MG {
        let scored = Scored {
            raw: max,
            quest: QuestItem::new(
                name,
                ICON,
                max,
                SODIUM_MAX_SCORE,
                QuestStatus::Success,
                "Salt intake is excellent!".to_string(),
            ),
            advice: None,
        };
        return (scored, 0.0);
    }

    let excess = avg - SODIUM_LIMIT_MG;
    let raw = (max - excess / SODIUM_MG_PER_POINT).max(0.0);
    let scored = Scored {
        raw,
        quest: QuestItem::new(
            name,
            ICON,
            raw,
            SODIUM_MAX_SCORE,
            QuestStatus::Danger,
            format!("{}mg over (skip the soup broth)", excess.round()),
        ),
        advice: Some(format!(
            "High sodium strains the kidneys (over by {}mg)",
            excess.round()
        )),
    };
    (scored, excess)
}

fn score_consistency(logged_days: u32) -> Scored {
    const NAME: &str = "Quest: Log consistently (5 days/week)";
    const ICON: &str = "📅";
    let max = f64::from(CONSISTENCY_MAX_SCORE);

    if logged_days >= FULL_CONSISTENCY_DAYS {
        return Scored {
            raw: max,
            quest: QuestItem::new(
                NAME,
                ICON,
                max,
                CONSISTENCY_MAX_SCORE,
                QuestStatus::Success,
                "Outstanding discipline!".to_string(),
            ),
            advice: None,
        };
    }

    let raw = f64::from(logged_days) / f64::from(FULL_CONSISTENCY_DAYS) * max;
    let remaining = FULL_CONSISTENCY_DAYS - logged_days;
    Scored {
        raw,
        quest: QuestItem::new(
            NAME,
            ICON,
            raw,
            CONSISTENCY_MAX_SCORE,
            QuestStatus::Warning,
            format!(
                "Log {} more day{} for full points",
                remaining,
                if remaining == 1 { "" } else { "s" }
            ),
        ),
        advice: Some("Logging is patchy, try to log more often".to_string()),
    }
}

/// Compute the composite health grade for a scoring window.
///
/// Negative or NaN inputs are treated as zero.
pub fn calculate_health_grade(inputs: &GradeInputs) -> HealthGradeResult {
    let inputs = inputs.sanitized();

    let calorie = score_calories(inputs.avg_calories, inputs.tdee);
    let (protein, missing_protein) = score_protein(inputs.avg_protein, inputs.target_protein);
    let (sugar, excess_sugar) = score_sugar(inputs.avg_sugar);
    let (sodium, excess_sodium) = score_sodium(inputs.avg_sodium);
    let consistency = score_consistency(inputs.logged_days);

    let nutrient_raw = protein.raw + sugar.raw + sodium.raw;
    let total_raw = calorie.raw + nutrient_raw + consistency.raw;
    let total_score = total_raw.round().clamp(0.0, 100.0) as u32;
    let grade = Grade::from_score(total_score);

    let breakdown = ScoreBreakdown {
        calorie_score: calorie.raw.round() as u32,
        nutrient_score: nutrient_raw.round() as u32,
        consistency_score: consistency.raw.round() as u32,
    };

    let scored = [calorie, protein, sugar, sodium, consistency];
    let mut advice: Vec<String> = scored.iter().filter_map(|s| s.advice.clone()).collect();
    if advice.is_empty() {
        advice.push("Excellent! Keep it up".to_string());
    }
    let quests = scored.into_iter().map(|s| s.quest).collect();

    tracing::debug!(
        "Health grade {} ({}): calorie={} nutrient={} consistency={}",
        grade.as_str(),
        total_score,
        breakdown.calorie_score,
        breakdown.nutrient_score,
        breakdown.consistency_score
    );

    HealthGradeResult {
        total_score,
        grade,
        breakdown,
        nutrition_gap: NutritionGap {
            missing_protein: missing_protein.round() as u32,
            excess_sugar: excess_sugar.round() as u32,
            excess_sodium: excess_sodium.round() as u32,
        },
        quests,
        advice,
    }
}

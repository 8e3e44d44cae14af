//! Energy balance calculations
//!
//! Weight projection from an average intake, weekly balance over logged days
//! and the educational BMR/activity split.

use serde::{Deserialize, Serialize};

use super::constants::{
    BMR_PERCENT, BMR_SHARE_OF_TDEE, CALORIES_PER_KG_FAT, MAINTENANCE_BAND_KCAL,
    PROJECTION_HORIZON_DAYS, WEEKLY_BALANCE_BAND_KCAL,
};
use super::round_to;
use crate::models::non_negative;

/// Direction the projected weight is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionStatus {
    Losing,
    Gaining,
    Maintaining,
}

/// Projected body-mass trend over a 30 day horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProjection {
    /// TDEE minus average intake; positive means eating under target
    pub daily_deficit: f64,
    /// Signed kg over 30 days, two decimals; positive means losing mass
    pub projected_weight_change_kg: f64,
    pub status: ProjectionStatus,
    pub message: String,
}

/// Project the 30 day weight change from the average daily intake.
///
/// A non-positive TDEE yields a zeroed "maintaining" result.
pub fn calculate_weight_projection(tdee: f64, avg_daily_intake: f64) -> WeightProjection {
    if tdee <= 0.0 || !tdee.is_finite() {
        return WeightProjection {
            daily_deficit: 0.0,
            projected_weight_change_kg: 0.0,
            status: ProjectionStatus::Maintaining,
            message: "Not enough data yet to project your weight".to_string(),
        };
    }

    let daily_deficit = tdee - non_negative(avg_daily_intake);
    let change_kg = daily_deficit * PROJECTION_HORIZON_DAYS / CALORIES_PER_KG_FAT;

    let (status, message) = if daily_deficit > MAINTENANCE_BAND_KCAL {
        (
            ProjectionStatus::Losing,
            format!(
                "Losing weight nicely! Expect about {:.1} kg less in 30 days",
                change_kg.abs()
            ),
        )
    } else if daily_deficit < -MAINTENANCE_BAND_KCAL {
        (
            ProjectionStatus::Gaining,
            format!(
                "Careful, you are eating over target and may gain {:.1} kg in 30 days",
                change_kg.abs()
            ),
        )
    } else {
        (
            ProjectionStatus::Maintaining,
            "Weight is holding steady. Excellent!".to_string(),
        )
    };

    WeightProjection {
        daily_deficit,
        projected_weight_change_kg: round_to(change_kg, 2),
        status,
        message,
    }
}

/// Classification of a week's accumulated balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    Deficit,
    Surplus,
    Balanced,
}

/// Calorie balance accumulated over the logged days of a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBalance {
    /// Intake minus target over logged days; negative is a deficit
    pub total_balance: f64,
    pub status: BalanceStatus,
    pub message: String,
}

/// Sum the balance over logged days only.
///
/// Unlogged days (0 kcal) are dropped from both the intake and the target so
/// a forgotten day does not read as a fast.
pub fn calculate_weekly_balance(daily_calories: &[f64], daily_target: f64) -> WeeklyBalance {
    let (total_intake, logged_days) = daily_calories
        .iter()
        .map(|&c| non_negative(c))
        .filter(|&c| c > 0.0)
        .fold((0.0, 0u32), |(sum, n), c| (sum + c, n + 1));

    if logged_days == 0 {
        return WeeklyBalance {
            total_balance: 0.0,
            status: BalanceStatus::Balanced,
            message: "Awaiting your first log".to_string(),
        };
    }

    let total_target = non_negative(daily_target) * f64::from(logged_days);
    let balance = total_intake - total_target;

    let status = if balance < -WEEKLY_BALANCE_BAND_KCAL {
        BalanceStatus::Deficit
    } else if balance > WEEKLY_BALANCE_BAND_KCAL {
        BalanceStatus::Surplus
    } else {
        BalanceStatus::Balanced
    };

    let fat_change_kg = (balance / CALORIES_PER_KG_FAT).abs();
    let message = match status {
        BalanceStatus::Deficit => format!("Trending down {:.1} kg this week", fat_change_kg),
        BalanceStatus::Surplus => format!("Trending up {:.1} kg this week", fat_change_kg),
        BalanceStatus::Balanced => "Weight steady this week".to_string(),
    };

    WeeklyBalance {
        total_balance: balance,
        status,
        message,
    }
}

/// Rough resting vs activity share of TDEE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetabolicSplit {
    pub bmr: f64,
    pub activity: f64,
    pub bmr_percent: u32,
}

/// Split TDEE into a fixed 70/30 resting/activity estimate.
///
/// This is an illustration for the user, not a basal metabolic formula.
pub fn calculate_metabolic_split(tdee: f64) -> MetabolicSplit {
    let tdee = non_negative(tdee);
    let bmr = (tdee * BMR_SHARE_OF_TDEE).round();
    MetabolicSplit {
        bmr,
        activity: tdee - bmr,
        bmr_percent: BMR_PERCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_boundary_is_maintaining() {
        let p = calculate_weight_projection(2000.0, 1800.0);
        assert_eq!(p.daily_deficit, 200.0);
        assert_eq!(p.status, ProjectionStatus::Maintaining);
    }

    #[test]
    fn test_projection_losing() {
        let p = calculate_weight_projection(2000.0, 1700.0);
        assert_eq!(p.daily_deficit, 300.0);
        assert_eq!(p.status, ProjectionStatus::Losing);
        assert_eq!(p.projected_weight_change_kg, 1.17);
        assert!(p.message.contains("1.2 kg"));
    }

    #[test]
    fn test_projection_gaining() {
        let p = calculate_weight_projection(2000.0, 2500.0);
        assert_eq!(p.daily_deficit, -500.0);
        assert_eq!(p.status, ProjectionStatus::Gaining);
        assert_eq!(p.projected_weight_change_kg, -1.95);
    }

    #[test]
    fn test_projection_without_tdee() {
        for tdee in [0.0, -1500.0, f64::NAN] {
            let p = calculate_weight_projection(tdee, 1800.0);
            assert_eq!(p.daily_deficit, 0.0);
            assert_eq!(p.projected_weight_change_kg, 0.0);
            assert_eq!(p.status, ProjectionStatus::Maintaining);
        }
    }

    #[test]
    fn test_weekly_balance_no_logs() {
        let b = calculate_weekly_balance(&[0.0; 7], 2000.0);
        assert_eq!(b.total_balance, 0.0);
        assert_eq!(b.status, BalanceStatus::Balanced);
        assert!(b.message.contains("Awaiting"));
    }

    #[test]
    fn test_weekly_balance_ignores_unlogged_days() {
        // three logged days at 1500 against 2000: -1500 over the logged days only
        let b = calculate_weekly_balance(&[1500.0, 0.0, 1500.0, 0.0, 0.0, 1500.0, 0.0], 2000.0);
        assert_eq!(b.total_balance, -1500.0);
        assert_eq!(b.status, BalanceStatus::Deficit);
        assert_eq!(b.message, "Trending down 0.2 kg this week");
    }

    #[test]
    fn test_weekly_balance_band_is_exclusive() {
        let b = calculate_weekly_balance(&[3000.0], 2000.0);
        assert_eq!(b.total_balance, 1000.0);
        assert_eq!(b.status, BalanceStatus::Balanced);

        let b = calculate_weekly_balance(&[3001.0], 2000.0);
        assert_eq!(b.status, BalanceStatus::Surplus);
    }

    #[test]
    fn test_metabolic_split_fixed_ratio() {
        let split = calculate_metabolic_split(2000.0);
        assert_eq!(split.bmr, 1400.0);
        assert_eq!(split.activity, 600.0);
        assert_eq!(split.bmr_percent, 70);
    }

    #[test]
    fn test_same_inputs_same_results() {
        for (tdee, intake) in [(2000.0, 1700.0), (2000.0, 2500.0), (0.0, 1800.0)] {
            assert_eq!(
                calculate_weight_projection(tdee, intake),
                calculate_weight_projection(tdee, intake)
            );
        }
        let week = [1500.0, 0.0, 2600.0, 2000.0, 0.0, 1800.0, 2100.0];
        assert_eq!(calculate_weekly_balance(&week, 2000.0), calculate_weekly_balance(&week, 2000.0));
    }
}

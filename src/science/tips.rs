//! Health tip selection
//!
//! Picks exactly one tip from a fixed priority chain. Several conditions can
//! hold at once, so the order of the checks is part of the behavior.
//!
//! The projected change is signed by deficit (a loss is positive), so the
//! gain/loss thresholds compare its magnitude against the status.

use serde::{Deserialize, Serialize};

use super::projection::{ProjectionStatus, WeightProjection};
use crate::models::non_negative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTip {
    pub tip: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: TipKind,
}

impl HealthTip {
    fn new(tip: &str, icon: &str, kind: TipKind) -> Self {
        Self {
            tip: tip.to_string(),
            icon: icon.to_string(),
            kind,
        }
    }
}

pub fn generate_health_tip(
    projection: &WeightProjection,
    avg_calories: f64,
    target_calories: f64,
) -> HealthTip {
    let avg_calories = non_negative(avg_calories);
    let change_kg = projection.projected_weight_change_kg.abs();

    if avg_calories == 0.0 {
        return HealthTip::new(
            "Start logging your food to get personal tips!",
            "📝",
            TipKind::Info,
        );
    }

    if projection.status == ProjectionStatus::Gaining && change_kg > 1.0 {
        return HealthTip::new(
            "Try cutting your dinner portion by 20% to keep weight in check",
            "🍽️",
            TipKind::Warning,
        );
    }

    if projection.status == ProjectionStatus::Losing && change_kg > 2.0 {
        return HealthTip::new(
            "You are eating too little! Add protein to protect your muscle",
            "💪",
            TipKind::Warning,
        );
    }

    if avg_calories < target_calories * 0.5 {
        return HealthTip::new(
            "Eat enough so your body does not run out of energy",
            "⚡",
            TipKind::Warning,
        );
    }

    if projection.status == ProjectionStatus::Maintaining {
        return HealthTip::new("Great consistency! Keep going!", "🎯", TipKind::Success);
    }

    HealthTip::new(
        "Drink at least 8 glasses of water a day to help your metabolism",
        "💧",
        TipKind::Info,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::science::projection::calculate_weight_projection;

    fn projection(status: ProjectionStatus, change: f64) -> WeightProjection {
        WeightProjection {
            daily_deficit: 0.0,
            projected_weight_change_kg: change,
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_no_calories_wins_over_everything() {
        let tip = generate_health_tip(&projection(ProjectionStatus::Gaining, 5.0), 0.0, 2000.0);
        assert_eq!(tip.kind, TipKind::Info);
        assert_eq!(tip.icon, "📝");
    }

    #[test]
    fn test_gaining_with_large_change() {
        let tip = generate_health_tip(&projection(ProjectionStatus::Gaining, 1.5), 2600.0, 2000.0);
        assert_eq!(tip.kind, TipKind::Warning);
        assert_eq!(tip.icon, "🍽️");
    }

    #[test]
    fn test_losing_fast() {
        let tip = generate_health_tip(&projection(ProjectionStatus::Losing, -2.5), 1200.0, 2000.0);
        assert_eq!(tip.icon, "💪");
    }

    #[test]
    fn test_real_projections_hit_gain_and_loss_tips() {
        // 600 kcal over: -2.34 kg projected, gaining
        let p = calculate_weight_projection(2000.0, 2600.0);
        assert_eq!(generate_health_tip(&p, 2600.0, 2000.0).icon, "🍽️");

        // 1200 kcal under: 4.68 kg projected loss
        let p = calculate_weight_projection(2000.0, 800.0);
        assert_eq!(generate_health_tip(&p, 800.0, 2000.0).icon, "💪");
    }

    #[test]
    fn test_under_half_target() {
        // losing ~1.6 kg: below the losing-fast threshold, but 1400 is
        // under half of a 3000 target
        let p = calculate_weight_projection(1800.0, 1400.0);
        let tip = generate_health_tip(&p, 1400.0, 3000.0);
        assert_eq!(tip.kind, TipKind::Warning);
        assert_eq!(tip.icon, "⚡");
    }

    #[test]
    fn test_maintaining_praise() {
        let p = calculate_weight_projection(2000.0, 1950.0);
        let tip = generate_health_tip(&p, 1950.0, 2000.0);
        assert_eq!(tip.kind, TipKind::Success);
    }

    #[test]
    fn test_fallback_hydration() {
        let p = calculate_weight_projection(2000.0, 1600.0);
        let tip = generate_health_tip(&p, 1600.0, 2000.0);
        assert_eq!(tip.kind, TipKind::Info);
        assert_eq!(tip.icon, "💧");
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let tip = generate_health_tip(&projection(ProjectionStatus::Maintaining, 0.0), 2000.0, 2000.0);
        let json = serde_json::to_value(&tip).unwrap();
        assert_eq!(json["type"], "success");
    }

    #[test]
    fn test_same_inputs_same_tip() {
        for (tdee, avg) in [(2000.0, 0.0), (2000.0, 2600.0), (2000.0, 1900.0), (3000.0, 1400.0)] {
            let p = calculate_weight_projection(tdee, avg);
            assert_eq!(generate_health_tip(&p, avg, tdee), generate_health_tip(&p, avg, tdee));
        }
    }
}

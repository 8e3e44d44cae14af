//! Macro balance analysis
//!
//! Judges the protein/carb/fat mix of a period.
//!
//! Ratios are shares of total macro *grams*, not of calories: a gram of fat
//! counts the same as a gram of protein here. Thresholds below are tuned for
//! that gram-weighted view.

use serde::{Deserialize, Serialize};

use super::constants::{MAX_CARB_RATIO, MAX_FAT_RATIO, MIN_PROTEIN_RATIO};
use crate::models::non_negative;

/// Overall verdict on a macro mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroQuality {
    Good,
    Warning,
    Danger,
}

/// Gram-share breakdown with one piece of advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAnalysis {
    pub p_ratio: u32,
    pub c_ratio: u32,
    pub f_ratio: u32,
    pub quality: MacroQuality,
    pub advice: String,
}

pub fn analyze_macro_balance(protein: f64, carbs: f64, fat: f64) -> MacroAnalysis {
    let (protein, carbs, fat) = (non_negative(protein), non_negative(carbs), non_negative(fat));
    let total = protein + carbs + fat;

    if total <= 0.0 {
        return MacroAnalysis {
            p_ratio: 0,
            c_ratio: 0,
            f_ratio: 0,
            quality: MacroQuality::Warning,
            advice: "No data".to_string(),
        };
    }

    let p_ratio = protein / total * 100.0;
    let c_ratio = carbs / total * 100.0;
    let f_ratio = fat / total * 100.0;

    // First matching rule wins; fat is checked before carbs.
    let (quality, advice) = if p_ratio < MIN_PROTEIN_RATIO {
        (
            MacroQuality::Warning,
            "⚠️ Protein is too low, add meat, eggs or beans",
        )
    } else if f_ratio > MAX_FAT_RATIO {
        (
            MacroQuality::Danger,
            "🚨 Fat is very high, cut back on fried and oily food",
        )
    } else if c_ratio > MAX_CARB_RATIO {
        (
            MacroQuality::Warning,
            "⚠️ Carbs are high, watch out for blood sugar spikes",
        )
    } else {
        (MacroQuality::Good, "✅ Well balanced macros!")
    };

    MacroAnalysis {
        p_ratio: p_ratio.round() as u32,
        c_ratio: c_ratio.round() as u32,
        f_ratio: f_ratio.round() as u32,
        quality,
        advice: advice.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_macros_is_warning() {
        let a = analyze_macro_balance(0.0, 0.0, 0.0);
        assert_eq!((a.p_ratio, a.c_ratio, a.f_ratio), (0, 0, 0));
        assert_eq!(a.quality, MacroQuality::Warning);
        assert_eq!(a.advice, "No data");
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        let a = analyze_macro_balance(50.0, 100.0, 100.0);
        assert_eq!((a.p_ratio, a.c_ratio, a.f_ratio), (20, 40, 40));
        assert_eq!(a.quality, MacroQuality::Good);
    }

    #[test]
    fn test_low_protein_wins_over_high_fat() {
        let a = analyze_macro_balance(10.0, 40.0, 50.0);
        assert_eq!(a.quality, MacroQuality::Warning);
        assert!(a.advice.contains("Protein"));
    }

    #[test]
    fn test_high_fat_wins_over_high_carb() {
        // both fat (45%) and carbs are checked; fat trips first
        let a = analyze_macro_balance(20.0, 35.0, 45.0);
        assert_eq!(a.quality, MacroQuality::Danger);
        assert!(a.advice.contains("Fat"));
    }

    #[test]
    fn test_high_carb() {
        let a = analyze_macro_balance(20.0, 70.0, 10.0);
        assert_eq!(a.c_ratio, 70);
        assert_eq!(a.quality, MacroQuality::Warning);
        assert!(a.advice.contains("Carbs"));
    }

    #[test]
    fn test_ratios_sum_to_hundred() {
        let a = analyze_macro_balance(90.0, 210.0, 60.0);
        assert_eq!(a.p_ratio + a.c_ratio + a.f_ratio, 100);
    }

    #[test]
    fn test_same_inputs_same_results() {
        for (p, c, f) in [(0.0, 0.0, 0.0), (10.0, 40.0, 50.0), (90.0, 210.0, 60.0)] {
            assert_eq!(analyze_macro_balance(p, c, f), analyze_macro_balance(p, c, f));
        }
    }
}

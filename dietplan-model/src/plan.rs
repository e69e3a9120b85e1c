#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Daily nutrition target derived from a validated profile.
///
/// Values are unrounded; rounding is left to [`PlanSummary`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutritionPlan {
    pub bmi: f64,
    /// Basal metabolic rate, kcal/day.
    pub bmr: f64,
    /// Energy expenditure before the objective adjustment, kcal/day.
    pub daily_calories: f64,
    pub target_calories: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

/// Display-ready strings for a plan.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    pub target_calories: String,
    pub bmi: String,
    pub protein: String,
    pub carbohydrates: String,
    pub fats: String,
    pub includes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanResponse {
    pub plan: NutritionPlan,
    pub summary: PlanSummary,
}

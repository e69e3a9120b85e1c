use dietplan_model::{
    choice::{ActivityLevel, Objective},
    plan::NutritionPlan,
};
use log::debug;

use crate::profile::UserProfile;

const OBJECTIVE_ADJUSTMENT_KCAL: f64 = 500.0;

const PROTEIN_SHARE: f64 = 0.30;
const CARB_SHARE: f64 = 0.40;
const FAT_SHARE: f64 = 0.30;

const PROTEIN_KCAL_PER_G: f64 = 4.0;
const CARB_KCAL_PER_G: f64 = 4.0;
const FAT_KCAL_PER_G: f64 = 9.0;

pub fn compute(profile: &UserProfile) -> NutritionPlan {
    let bmi = get_body_mass_index(profile);
    let bmr = get_basal_metabolic_rate(profile);
    let daily_calories = bmr * get_activity_multiplier(profile.activity_level());
    // Not clamped: the lowest valid inputs still stay well above zero.
    let target_calories = adjust_for_objective(daily_calories, profile.objective());
    debug!(
        "BMI {}, BMR {}, daily {} kcal, target {} kcal",
        bmi, bmr, daily_calories, target_calories
    );

    NutritionPlan {
        bmi,
        bmr,
        daily_calories,
        target_calories,
        protein_g: PROTEIN_SHARE * target_calories / PROTEIN_KCAL_PER_G,
        carb_g: CARB_SHARE * target_calories / CARB_KCAL_PER_G,
        fat_g: FAT_SHARE * target_calories / FAT_KCAL_PER_G,
    }
}

fn get_body_mass_index(profile: &UserProfile) -> f64 {
    profile.weight_kg() as f64 / profile.height_m().powf(2.0)
}

/// Revised Harris-Benedict equation, kcal/day.
fn get_basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let weight = profile.weight_kg() as f64;
    let height = profile.height_cm() as f64;
    let age = profile.age() as f64;

    if profile.is_female() {
        447.593 + 9.247 * weight + 3.098 * height - 4.330 * age
    } else {
        88.362 + 13.397 * weight + 4.799 * height - 5.677 * age
    }
}

fn get_activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

fn adjust_for_objective(daily_calories: f64, objective: Objective) -> f64 {
    match objective {
        Objective::WeightLoss => daily_calories - OBJECTIVE_ADJUSTMENT_KCAL,
        Objective::WeightGain | Objective::MuscleGain => {
            daily_calories + OBJECTIVE_ADJUSTMENT_KCAL
        }
        Objective::Maintenance => daily_calories,
    }
}

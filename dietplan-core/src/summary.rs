use dietplan_model::plan::{NutritionPlan, PlanSummary};

use crate::profile::UserProfile;

/// Rounds a plan for display: whole kcal and grams, BMI to one decimal.
pub fn summarize(profile: &UserProfile, plan: &NutritionPlan) -> PlanSummary {
    let calories = format!("{:.0} kcal", plan.target_calories);
    let protein = format!("{:.0}g", plan.protein_g);
    let carbohydrates = format!("{:.0}g", plan.carb_g);
    let fats = format!("{:.0}g", plan.fat_g);

    let includes = vec![
        format!("Personalized {} meal plan", profile.meal_preference()),
        format!("Daily calorie target: {}", calories),
        format!(
            "Protein: {} | Carbs: {} | Fats: {}",
            protein, carbohydrates, fats
        ),
        format!(
            "Customized workout routine for {}",
            profile.objective().to_string().to_lowercase()
        ),
        "30 days of meal and exercise scheduling".to_owned(),
        "Progress tracking tools".to_owned(),
    ];

    PlanSummary {
        target_calories: calories,
        bmi: format!("{:.1}", plan.bmi),
        protein,
        carbohydrates,
        fats,
        includes,
    }
}

use dietplan_model::choice::{ActivityLevel, Gender, MealPreference, Objective};

/// Validated user input. Only [`crate::validation::validate`] can build one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserProfile {
    gender: Gender,
    age: u16,
    height_cm: u16,
    weight_kg: u16,
    meal_preference: MealPreference,
    activity_level: ActivityLevel,
    objective: Objective,
}

impl UserProfile {
    pub(crate) fn new(
        gender: Gender,
        age: u16,
        height_cm: u16,
        weight_kg: u16,
        meal_preference: MealPreference,
        activity_level: ActivityLevel,
        objective: Objective,
    ) -> Self {
        Self {
            gender,
            age,
            height_cm,
            weight_kg,
            meal_preference,
            activity_level,
            objective,
        }
    }
    pub fn gender(&self) -> Gender {
        self.gender
    }
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }
    pub fn age(&self) -> u16 {
        self.age
    }
    pub fn height_cm(&self) -> u16 {
        self.height_cm
    }
    pub fn height_m(&self) -> f64 {
        self.height_cm as f64 / 100.0
    }
    pub fn weight_kg(&self) -> u16 {
        self.weight_kg
    }
    pub fn meal_preference(&self) -> MealPreference {
        self.meal_preference
    }
    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }
    pub fn objective(&self) -> Objective {
        self.objective
    }
}

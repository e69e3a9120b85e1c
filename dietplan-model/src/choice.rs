use std::{fmt, str::FromStr};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A value picked from a fixed list in the plan form.
///
/// Parsing goes through the option labels shown to the user, and
/// `to_string` gives back the canonical label.
pub trait Choice: Copy + fmt::Display + FromStr + IntoEnumIterator {
    fn options() -> Vec<String> {
        Self::iter().map(|choice| choice.to_string()).collect()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display, EnumIter, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum Gender {
    #[strum(to_string = "Male", serialize = "👨 Male")]
    Male,
    #[strum(to_string = "Female", serialize = "👩 Female")]
    Female,
}

impl Choice for Gender {}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display, EnumIter, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum MealPreference {
    Vegetarian,
    #[strum(to_string = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
}

impl Choice for MealPreference {}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display, EnumIter, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum ActivityLevel {
    Sedentary,
    #[strum(to_string = "Lightly Active")]
    LightlyActive,
    #[strum(to_string = "Moderately Active")]
    ModeratelyActive,
    #[strum(to_string = "Very Active")]
    VeryActive,
}

impl Choice for ActivityLevel {}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display, EnumIter, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum Objective {
    #[strum(to_string = "Weight Loss")]
    WeightLoss,
    #[strum(to_string = "Weight Gain")]
    WeightGain,
    #[strum(to_string = "Muscle Gain")]
    MuscleGain,
    Maintenance,
}

impl Choice for Objective {}

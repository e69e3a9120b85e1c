use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::choice::{ActivityLevel, Choice, Gender, MealPreference, Objective};

pub const AGE_YEARS: RangeInclusive<u16> = 15..=80;
pub const HEIGHT_CM: RangeInclusive<u16> = 140..=220;
pub const WEIGHT_KG: RangeInclusive<u16> = 40..=150;

/// Fields of the plan form, in the order they are validated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display, EnumIter)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Field {
    #[strum(to_string = "gender")]
    Gender,
    #[strum(to_string = "age")]
    Age,
    #[strum(to_string = "height")]
    Height,
    #[strum(to_string = "weight")]
    Weight,
    #[strum(to_string = "meal preference")]
    MealPreference,
    #[strum(to_string = "activity level")]
    ActivityLevel,
    #[strum(to_string = "objective")]
    Objective,
}

impl Field {
    pub fn title(&self) -> &'static str {
        match self {
            Field::Gender => "Gender",
            Field::Age => "Age",
            Field::Height => "Height (in cm)",
            Field::Weight => "Weight (in kg)",
            Field::MealPreference => "Meal Preference",
            Field::ActivityLevel => "Activity Level",
            Field::Objective => "Objective",
        }
    }

    /// Sentinel shown while nothing is selected. Free-text fields have none.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::Gender => Some("Select Gender"),
            Field::Age => Some("Select Age"),
            Field::Height | Field::Weight => None,
            Field::MealPreference => Some("Select Meal Preference"),
            Field::ActivityLevel => Some("Select Activity Level"),
            Field::Objective => Some("Select Objective"),
        }
    }

    pub fn bounds(&self) -> Option<RangeInclusive<u16>> {
        match self {
            Field::Age => Some(AGE_YEARS),
            Field::Height => Some(HEIGHT_CM),
            Field::Weight => Some(WEIGHT_KG),
            _ => None,
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Field::Age => Some("years"),
            Field::Height => Some("cm"),
            Field::Weight => Some("kg"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ErrorKind {
    MissingSelection,
    NotNumeric,
    OutOfRange,
}

/// Error descriptor reported back to whoever submitted the form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanError {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: String,
}

/// Raw, unvalidated form submission. Missing fields read as empty strings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PlanForm {
    pub gender: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "text_or_number"))]
    pub age: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "text_or_number"))]
    pub height: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "text_or_number"))]
    pub weight: String,
    pub meal_preference: String,
    pub activity_level: String,
    pub objective: String,
}

impl PlanForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Gender => &self.gender,
            Field::Age => &self.age,
            Field::Height => &self.height,
            Field::Weight => &self.weight,
            Field::MealPreference => &self.meal_preference,
            Field::ActivityLevel => &self.activity_level,
            Field::Objective => &self.objective,
        }
    }
}

/// Accepts numeric fields sent as JSON numbers as well as text. Numbers
/// are kept as their literal text so validation still sees `70.5` as
/// non-numeric.
#[cfg(feature = "serde")]
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct TextOrNumberVisitor;
    impl<'de> serde::de::Visitor<'de> for TextOrNumberVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or a number")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_owned())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(format!("{:?}", v))
        }
    }
    deserializer.deserialize_any(TextOrNumberVisitor)
}

/// Everything a front end needs to draw one form field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldOptions {
    pub field: Field,
    pub title: String,
    pub placeholder: Option<String>,
    pub options: Vec<String>,
}

impl FieldOptions {
    pub fn for_field(field: Field) -> Self {
        let options = match field {
            Field::Gender => Gender::options(),
            Field::Age => AGE_YEARS.map(|age| age.to_string()).collect(),
            Field::Height | Field::Weight => Vec::new(),
            Field::MealPreference => MealPreference::options(),
            Field::ActivityLevel => ActivityLevel::options(),
            Field::Objective => Objective::options(),
        };

        Self {
            field,
            title: field.title().to_owned(),
            placeholder: field.placeholder().map(str::to_owned),
            options,
        }
    }

    pub fn all() -> Vec<Self> {
        Field::iter().map(Self::for_field).collect()
    }
}

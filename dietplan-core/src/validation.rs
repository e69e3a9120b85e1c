use dietplan_model::{
    choice::Choice,
    form::{ErrorKind, Field, PlanError, PlanForm},
};

use crate::profile::UserProfile;

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select your {0}.")]
    MissingSelection(Field),
    #[error("{}", range_message(.0))]
    NotNumeric(Field),
    #[error("{}", range_message(.0))]
    OutOfRange(Field),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

fn range_message(field: &Field) -> String {
    match (field.bounds(), field.unit()) {
        (Some(bounds), Some(unit)) => format!(
            "Please provide a valid {} between {} and {} {}.",
            field,
            bounds.start(),
            bounds.end(),
            unit
        ),
        _ => format!("Please provide a valid {}.", field),
    }
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingSelection(field)
            | ValidationError::NotNumeric(field)
            | ValidationError::OutOfRange(field) => *field,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingSelection(_) => ErrorKind::MissingSelection,
            ValidationError::NotNumeric(_) => ErrorKind::NotNumeric,
            ValidationError::OutOfRange(_) => ErrorKind::OutOfRange,
        }
    }
}

impl From<ValidationError> for PlanError {
    fn from(error: ValidationError) -> Self {
        Self {
            field: error.field(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Checks the form field by field and stops at the first failure.
pub fn validate(form: &PlanForm) -> Result<UserProfile> {
    let gender = select(form, Field::Gender)?;
    let age = number(form, Field::Age)?;
    let height_cm = number(form, Field::Height)?;
    let weight_kg = number(form, Field::Weight)?;
    let meal_preference = select(form, Field::MealPreference)?;
    let activity_level = select(form, Field::ActivityLevel)?;
    let objective = select(form, Field::Objective)?;

    Ok(UserProfile::new(
        gender,
        age,
        height_cm,
        weight_kg,
        meal_preference,
        activity_level,
        objective,
    ))
}

fn select<C: Choice>(form: &PlanForm, field: Field) -> Result<C> {
    form.value(field)
        .trim()
        .parse()
        .map_err(|_| ValidationError::MissingSelection(field))
}

fn number(form: &PlanForm, field: Field) -> Result<u16> {
    let mut value = form.value(field);

    // Selected numbers (age) can still be left at the placeholder.
    if let Some(placeholder) = field.placeholder() {
        value = value.trim();
        if value.is_empty() || value == placeholder {
            return Err(ValidationError::MissingSelection(field));
        }
    }

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric(field));
    }

    // Only digits are left, so a parse failure means overflow.
    let number: u16 = value
        .parse()
        .map_err(|_| ValidationError::OutOfRange(field))?;
    match field.bounds() {
        Some(bounds) if !bounds.contains(&number) => Err(ValidationError::OutOfRange(field)),
        _ => Ok(number),
    }
}

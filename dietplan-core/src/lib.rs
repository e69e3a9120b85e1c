pub mod calculator;
pub mod profile;
pub mod summary;
pub mod validation;

use dietplan_model::{form::PlanForm, plan::PlanResponse};
use log::debug;

pub use calculator::compute;
pub use profile::UserProfile;
pub use summary::summarize;
pub use validation::{validate, ValidationError};

/// Runs a single form submission through validation, calculation and
/// formatting.
pub fn create_plan(form: &PlanForm) -> validation::Result<PlanResponse> {
    let profile = validate(form)?;
    debug!("Validated profile {:?}", profile);

    let plan = compute(&profile);
    let summary = summarize(&profile, &plan);
    Ok(PlanResponse { plan, summary })
}

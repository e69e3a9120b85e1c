mod client;

pub use client::*;

use dietplan_model::form::PlanForm;
use itertools::Itertools;

/// Requests a plan and lays its summary out as plain text.
pub async fn render_plan(client: &dyn Client, form: &PlanForm) -> Result<String> {
    let response = client.request_plan(form).await?;
    let summary = response.summary;

    let metrics = [
        format!("Daily Calorie Target: {}", summary.target_calories),
        format!("BMI: {}", summary.bmi),
        format!("Protein: {}", summary.protein),
        format!("Carbohydrates: {}", summary.carbohydrates),
        format!("Fats: {}", summary.fats),
        "Your Plan Includes:".to_owned(),
    ];
    let includes = summary.includes.iter().map(|line| format!("- {}", line));

    Ok(metrics.into_iter().chain(includes).join("\n"))
}

/// What a form submission ended in, once transport failures are ruled out.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Plan(String),
    Rejected(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Plan(_))
    }
}

/// Like [`render_plan`], but a rejected form is an outcome, not an error.
pub async fn submit(client: &dyn Client, form: &PlanForm) -> Result<Outcome> {
    match render_plan(client, form).await {
        Ok(plan) => Ok(Outcome::Plan(plan)),
        Err(Error::Validation(error)) => Ok(Outcome::Rejected(error.message)),
        Err(e) => Err(e),
    }
}

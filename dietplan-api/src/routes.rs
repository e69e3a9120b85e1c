use actix_web::{
    get, http::StatusCode, post, web, Either, HttpResponse, Responder, ResponseError,
};
use dietplan_core::{create_plan, ValidationError};
use dietplan_model::{
    form::{FieldOptions, PlanError, PlanForm},
    plan::PlanResponse,
};
use log::{info, warn};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct InvalidForm(#[from] ValidationError);

impl ResponseError for InvalidForm {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(PlanError::from(self.0))
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    "ok"
}

#[get("/options")]
async fn options() -> impl Responder {
    web::Json(FieldOptions::all())
}

#[post("/plan")]
async fn plan(
    form: Either<web::Json<PlanForm>, web::Form<PlanForm>>,
) -> Result<web::Json<PlanResponse>, InvalidForm> {
    let form = match form {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    info!("Creating plan");
    let response = create_plan(&form).map_err(|e| {
        warn!("Rejected form: {}", e);
        InvalidForm::from(e)
    })?;
    info!("Plan created, {}", response.summary.target_calories);

    Ok(web::Json(response))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(options).service(plan);
}

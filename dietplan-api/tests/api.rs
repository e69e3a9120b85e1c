use actix_web::{
    http::{header, StatusCode},
    test, App,
};
use dietplan_api::{config::ApiConfig, cors, routes};
use dietplan_model::{
    choice::{ActivityLevel, Objective},
    form::{ErrorKind, Field, FieldOptions, PlanError, PlanForm},
    plan::PlanResponse,
};
use serde_json::json;

fn valid_form() -> PlanForm {
    PlanForm {
        gender: "Male".to_owned(),
        age: "30".to_owned(),
        height: "175".to_owned(),
        weight: "70".to_owned(),
        meal_preference: "Vegetarian".to_owned(),
        activity_level: ActivityLevel::Sedentary.to_string(),
        objective: Objective::WeightLoss.to_string(),
    }
}

#[actix_web::test]
async fn json_form_returns_plan() {
    let app = test::init_service(App::new().configure(routes::configure)).await;
    let req = test::TestRequest::post()
        .uri("/plan")
        .set_json(valid_form())
        .to_request();

    let response: PlanResponse = test::call_and_read_body_json(&app, req).await;

    assert!((response.plan.target_calories - 1534.8004).abs() < 1e-9);
    assert_eq!(response.summary.target_calories, "1535 kcal");
    assert_eq!(response.summary.protein, "115g");
}

#[actix_web::test]
async fn urlencoded_form_returns_plan() {
    let app = test::init_service(App::new().configure(routes::configure)).await;
    let form = PlanForm {
        gender: "Female".to_owned(),
        age: "25".to_owned(),
        height: "160".to_owned(),
        weight: "55".to_owned(),
        activity_level: "Moderately Active".to_owned(),
        objective: "Maintenance".to_owned(),
        ..valid_form()
    };
    let req = test::TestRequest::post()
        .uri("/plan")
        .set_form(&form)
        .to_request();

    let response: PlanResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.summary.bmi, "21.5");
}

#[actix_web::test]
async fn json_numbers_are_accepted_for_numeric_fields() {
    let app = test::init_service(App::new().configure(routes::configure)).await;
    let req = test::TestRequest::post()
        .uri("/plan")
        .set_json(json!({
            "gender": "Male",
            "age": 30,
            "height": 175,
            "weight": 70,
            "meal_preference": "Vegan",
            "activity_level": "Sedentary",
            "objective": "Weight Loss",
        }))
        .to_request();

    let response: PlanResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.summary.target_calories, "1535 kcal");
}

#[actix_web::test]
async fn fractional_json_weight_is_not_numeric() {
    let app = test::init_service(App::new().configure(routes::configure)).await;
    let req = test::TestRequest::post()
        .uri("/plan")
        .set_json(json!({
            "gender": "Male",
            "age": 30,
            "height": 175,
            "weight": 70.5,
            "meal_preference": "Vegan",
            "activity_level": "Sedentary",
            "objective": "Weight Loss",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: PlanError = test::read_body_json(resp).await;
    assert_eq!(error.field, Field::Weight);
    assert_eq!(error.kind, ErrorKind::NotNumeric);
}

#[actix_web::test]
async fn placeholder_gender_is_rejected() {
    let app = test::init_service(App::new().configure(routes::configure)).await;
    let req = test::TestRequest::post()
        .uri("/plan")
        .set_json(json!({
            "gender": "Select Gender",
            "age": "30",
            "height": "175",
            "weight": "70",
            "meal_preference": "Vegan",
            "activity_level": "Sedentary",
            "objective": "Weight Loss",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: PlanError = test::read_body_json(resp).await;
    assert_eq!(
        error,
        PlanError {
            field: Field::Gender,
            kind: ErrorKind::MissingSelection,
            message: "Please select your gender.".to_owned(),
        }
    );
}

#[actix_web::test]
async fn out_of_range_height_is_rejected() {
    let app = test::init_service(App::new().configure(routes::configure)).await;
    let req = test::TestRequest::post()
        .uri("/plan")
        .set_json(PlanForm {
            height: "221".to_owned(),
            ..valid_form()
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "height");
    assert_eq!(body["kind"], "out_of_range");
    assert_eq!(
        body["message"],
        "Please provide a valid height between 140 and 220 cm."
    );
}

#[actix_web::test]
async fn options_list_every_field() {
    let app = test::init_service(App::new().configure(routes::configure)).await;
    let req = test::TestRequest::get().uri("/options").to_request();

    let options: Vec<FieldOptions> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(options, FieldOptions::all());
    assert_eq!(options.len(), 7);
    assert_eq!(options[4].placeholder.as_deref(), Some("Select Meal Preference"));
}

#[actix_web::test]
async fn health_check() {
    let app = test::init_service(App::new().configure(routes::configure)).await;
    let req = test::TestRequest::get().uri("/health").to_request();

    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "ok");
}

fn config_with_origins(origins: &[&str]) -> ApiConfig {
    ApiConfig {
        allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
        ..ApiConfig::default()
    }
}

#[actix_web::test]
async fn configured_origin_is_echoed() {
    let config = config_with_origins(&["http://a.example"]);
    let app = test::init_service(
        App::new()
            .wrap(cors(&config))
            .configure(routes::configure),
    )
    .await;
    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "http://a.example"))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://a.example")
    );
}

#[actix_web::test]
async fn unlisted_origin_gets_no_cors_header() {
    let config = config_with_origins(&["http://a.example"]);
    let app = test::init_service(
        App::new()
            .wrap(cors(&config))
            .configure(routes::configure),
    )
    .await;
    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "http://evil.example"))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[actix_web::test]
async fn empty_origin_list_allows_any_origin() {
    let config = config_with_origins(&[]);
    let app = test::init_service(
        App::new()
            .wrap(cors(&config))
            .configure(routes::configure),
    )
    .await;

    for origin in ["http://a.example", "http://b.example"] {
        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, origin))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "{}", origin);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some(origin)
        );
    }
}

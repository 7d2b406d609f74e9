use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use uchinoko::diagnosis::{
    AgeGroup, BreedInfo, DiagnosisEngine, DiagnosisInput, DiagnosisOutcome, SelectionOptions,
    SizeClass,
};
use uchinoko::profiles::{profile_router, DogProfileService, DogRepository};

#[derive(Debug, Deserialize)]
pub(crate) struct DiagnosisRequest {
    #[serde(flatten)]
    pub(crate) input: DiagnosisInput,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DiagnosisResponse {
    pub(crate) today: NaiveDate,
    #[serde(flatten)]
    pub(crate) outcome: DiagnosisOutcome,
    pub(crate) size_label: &'static str,
    pub(crate) age_label: &'static str,
    pub(crate) temperament_label: &'static str,
    pub(crate) temperament_summary: &'static str,
    pub(crate) temperament_description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) breed_info: Option<BreedInfo>,
}

/// Stored profile fields as they come back from saved documents. Any of them
/// may be missing or out of range.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StoredDescriptionRequest {
    #[serde(default)]
    pub(crate) rank: String,
    #[serde(default)]
    pub(crate) age_group: Option<StoredCode>,
    #[serde(default)]
    pub(crate) size_class: Option<StoredCode>,
}

/// Dog records store snake_case names (`"senior"`); older documents hold
/// numeric codes (`2`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredCode {
    Code(i64),
    Name(String),
}

impl StoredCode {
    /// Numeric code for the field, or -1 when it is missing or names nothing known.
    fn resolve<T, F>(field: Option<&Self>, code: F) -> i64
    where
        T: DeserializeOwned,
        F: Fn(T) -> u8,
    {
        match field {
            Some(Self::Code(value)) => *value,
            Some(Self::Name(name)) => {
                serde_json::from_value::<T>(json!(name.trim().to_ascii_lowercase()))
                    .map(|parsed| i64::from(code(parsed)))
                    .unwrap_or(-1)
            }
            None => -1,
        }
    }
}

pub(crate) fn with_service_routes<R>(
    service: Arc<DogProfileService<R>>,
    engine: Arc<DiagnosisEngine>,
) -> Router
where
    R: DogRepository + 'static,
{
    profile_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/diagnosis", post(diagnosis_endpoint))
        .route("/api/v1/diagnosis/options", get(options_endpoint))
        .route(
            "/api/v1/diagnosis/description",
            post(stored_description_endpoint),
        )
        .layer(Extension(engine))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn diagnosis_endpoint(
    Extension(engine): Extension<Arc<DiagnosisEngine>>,
    Json(payload): Json<DiagnosisRequest>,
) -> Json<DiagnosisResponse> {
    let DiagnosisRequest { input, today } = payload;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let outcome = engine.diagnose(&input, today);
    let breed_info = Some(engine.describe_breed(&input.breed)).filter(|info| !info.is_empty());

    Json(DiagnosisResponse {
        today,
        size_label: outcome.size_class.label(),
        age_label: outcome.age_group.label(),
        temperament_label: outcome.temperament.label(),
        temperament_summary: engine.descriptions().temperament_summary(outcome.temperament),
        temperament_description: engine.describe_temperament(outcome.temperament),
        breed_info,
        outcome,
    })
}

pub(crate) async fn options_endpoint(
    Extension(engine): Extension<Arc<DiagnosisEngine>>,
) -> Json<SelectionOptions> {
    Json(engine.selection_options())
}

pub(crate) async fn stored_description_endpoint(
    Extension(engine): Extension<Arc<DiagnosisEngine>>,
    Json(payload): Json<StoredDescriptionRequest>,
) -> Json<serde_json::Value> {
    let description = engine.descriptions().compose_stored_difficulty_description(
        &payload.rank,
        StoredCode::resolve(payload.age_group.as_ref(), AgeGroup::code),
        StoredCode::resolve(payload.size_class.as_ref(), SizeClass::code),
    );
    Json(json!({ "difficulty_description": description }))
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::json;

use super::domain::{DiaryDraft, DogId, DogProfileDraft, HealthRecordDraft, OwnerId};
use super::repository::{DogRepository, RepositoryError};
use super::service::{DogProfileService, ProfileServiceError};

/// Router builder exposing dog profile, diary, and health endpoints.
pub fn profile_router<R>(service: Arc<DogProfileService<R>>) -> Router
where
    R: DogRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/owners/:owner_id/dogs",
            post(register_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/owners/:owner_id/dogs/:dog_id",
            get(fetch_handler::<R>).put(update_handler::<R>),
        )
        .route(
            "/api/v1/owners/:owner_id/dogs/:dog_id/card",
            get(card_handler::<R>),
        )
        .route(
            "/api/v1/owners/:owner_id/dogs/:dog_id/diaries",
            post(diary_handler::<R>).get(list_diaries_handler::<R>),
        )
        .route(
            "/api/v1/owners/:owner_id/dogs/:dog_id/health-records",
            post(health_handler::<R>).get(list_health_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path(owner_id): Path<String>,
    axum::Json(draft): axum::Json<DogProfileDraft>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.register(OwnerId(owner_id), draft, Utc::now()) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path(owner_id): Path<String>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.list(&OwnerId(owner_id)) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path((owner_id, dog_id)): Path<(String, String)>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.get(&OwnerId(owner_id), &DogId(dog_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path((owner_id, dog_id)): Path<(String, String)>,
    axum::Json(draft): axum::Json<DogProfileDraft>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.update(&OwnerId(owner_id), &DogId(dog_id), draft, Utc::now()) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn card_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path((owner_id, dog_id)): Path<(String, String)>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.share_card(&OwnerId(owner_id), &DogId(dog_id)) {
        Ok(card) => (StatusCode::OK, axum::Json(card)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn diary_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path((owner_id, dog_id)): Path<(String, String)>,
    axum::Json(draft): axum::Json<DiaryDraft>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.add_diary(&OwnerId(owner_id), &DogId(dog_id), draft, Utc::now()) {
        Ok(entry) => (StatusCode::CREATED, axum::Json(entry)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_diaries_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path((owner_id, dog_id)): Path<(String, String)>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.diaries(&OwnerId(owner_id), &DogId(dog_id)) {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn health_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path((owner_id, dog_id)): Path<(String, String)>,
    axum::Json(draft): axum::Json<HealthRecordDraft>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.add_health_record(&OwnerId(owner_id), &DogId(dog_id), draft, Utc::now()) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_health_handler<R>(
    State(service): State<Arc<DogProfileService<R>>>,
    Path((owner_id, dog_id)): Path<(String, String)>,
) -> Response
where
    R: DogRepository + 'static,
{
    match service.health_records(&OwnerId(owner_id), &DogId(dog_id)) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ProfileServiceError) -> Response {
    let status = match &err {
        ProfileServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ProfileServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ProfileServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ProfileServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use bloglist_core::aggregate;
use bloglist_core::store::BlogStore;
use bloglist_core::validate::{self, BlogPayload};
use bloglist_types::models::{BlogRecord, BlogSummary};

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::{AppState, run_blocking};

pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogRecord>>, AppError> {
    let blogs = run_blocking(&state, |s| Ok(s.db.find_all_blogs()?)).await?;
    Ok(Json(blogs))
}

/// Total likes and the most-liked blog over the whole collection.
pub async fn blog_summary(State(state): State<AppState>) -> Result<Json<BlogSummary>, AppError> {
    let blogs = run_blocking(&state, |s| Ok(s.db.find_all_blogs()?)).await?;
    Ok(Json(aggregate::summarize(&blogs)))
}

pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogRecord>, AppError> {
    let blog = run_blocking(&state, move |s| Ok(s.db.find_blog(id)?)).await?;
    Ok(Json(blog))
}

pub async fn create_blog(
    State(state): State<AppState>,
    AppJson(payload): AppJson<BlogPayload>,
) -> Result<impl IntoResponse, AppError> {
    let draft = validate::validate_for_create(&payload)?;

    let blog = run_blocking(&state, move |s| Ok(s.db.insert_blog(&draft)?)).await?;

    Ok((StatusCode::CREATED, Json(blog)))
}

/// Partial update. Usually just `{ "likes": n }`; title and url are not
/// required again.
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<BlogPayload>,
) -> Result<Json<BlogRecord>, AppError> {
    let patch = validate::validate_for_update(&payload)?;

    let blog = run_blocking(&state, move |s| Ok(s.db.update_blog(id, &patch)?)).await?;

    Ok(Json(blog))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    run_blocking(&state, move |s| Ok(s.db.delete_blog(id)?)).await?;
    Ok(StatusCode::NO_CONTENT)
}

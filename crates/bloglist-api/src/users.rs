use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use bloglist_core::store::UserStore;
use bloglist_types::api::CreateUserRequest;
use bloglist_types::models::UserRecord;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::{AppState, run_blocking};

/// Registered users. Credential hashes are never serialized.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>, AppError> {
    let users = run_blocking(&state, |s| Ok(s.db.find_all_users()?)).await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Argon2 is CPU-bound, so hashing runs on the blocking pool with the insert.
    let user = run_blocking(&state, move |s| {
        Ok(s.identity
            .create_user(&s.db, &req.username, req.name.as_deref(), &req.password)?)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

/// GET /api/v1/resumes
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<Resume>> {
    Json(state.store.list())
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    /// Optional role-template id to pre-populate the new document.
    pub role: Option<String>,
}

/// POST /api/v1/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    body: Option<Json<CreateRequest>>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let resume = state.store.create_with_defaults(req.role.as_deref())?;
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    state
        .store
        .get_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// PUT /api/v1/resumes/:id
/// Replaces the whole document; the id in the path wins over the body's.
pub async fn handle_put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut resume): Json<Resume>,
) -> Result<Json<Resume>, AppError> {
    if id.is_empty() {
        return Err(AppError::Validation("Resume id must not be empty".to_string()));
    }
    resume.id = id.clone();
    let stored = state.store.upsert(resume)?;
    // Keep any open draft in step with the authoritative write.
    if state.sessions.get(&id).is_some() {
        let _ = state.sessions.open(&state.store, &id);
    }
    Ok(Json(stored))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.sessions.close(&id);
    state.store.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    Json,
};

use crate::ats::{simulate, AtsReport};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/resumes/:id/ats
/// Runs the parseability simulation over the live draft if one is open,
/// otherwise over the stored document.
pub async fn handle_ats_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AtsReport>, AppError> {
    let resume = state
        .sessions
        .get(&id)
        .or_else(|| state.store.get_by_id(&id))
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(simulate(&resume)))
}

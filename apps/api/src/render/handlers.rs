use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::render::render_page;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RenderQuery {
    /// Display magnification, clamped to [0.5, 1.5]. Defaults to 1.0.
    pub zoom: Option<f32>,
}

/// GET /api/v1/resumes/:id/render
/// Renders the document through its selected template. An open editor draft
/// takes precedence over the stored copy so the preview tracks live edits.
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    let resume = state
        .sessions
        .get(&id)
        .or_else(|| state.store.get_by_id(&id))
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Html(render_page(&resume, query.zoom.unwrap_or(1.0))))
}

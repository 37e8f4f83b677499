use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::editor::ops::{
    apply_custom_op, apply_design_patch, apply_education_op, apply_experience_op,
    apply_personal_patch, apply_project_op, apply_skill_op, CustomSectionOp, DesignPatch,
    EducationPatch, ListOp, PersonalInfoPatch, ProjectPatch, SkillPatch, WorkExperiencePatch,
};
use crate::editor::score::completeness_score;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

/// Every edit operation responds with the updated draft and its recomputed
/// completeness score, so clients can re-render without a second request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub resume: Resume,
    pub score: u32,
}

impl From<Resume> for DraftResponse {
    fn from(resume: Resume) -> Self {
        let score = completeness_score(&resume);
        DraftResponse { resume, score }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

fn mutate_draft(
    state: &AppState,
    id: &str,
    mutate: impl FnOnce(&mut Resume),
) -> Result<Json<DraftResponse>, AppError> {
    state
        .sessions
        .with_draft(&state.store, id, mutate)
        .map(|draft| Json(draft.into()))
        .ok_or_else(|| not_found(id))
}

/// POST /api/v1/editor/:id/open
pub async fn handle_open(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DraftResponse>, AppError> {
    state
        .sessions
        .open(&state.store, &id)
        .map(|draft| Json(draft.into()))
        .ok_or_else(|| not_found(&id))
}

/// POST /api/v1/editor/:id/save
pub async fn handle_save(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DraftResponse>, AppError> {
    let stored = state
        .sessions
        .save(&state.store, &id)
        .ok_or_else(|| not_found(&id))??;
    Ok(Json(stored.into()))
}

/// GET /api/v1/editor/:id/score
pub async fn handle_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let resume = state
        .sessions
        .get(&id)
        .or_else(|| state.store.get_by_id(&id))
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(json!({ "score": completeness_score(&resume) })))
}

/// PATCH /api/v1/editor/:id/personal
pub async fn handle_patch_personal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Result<Json<DraftResponse>, AppError> {
    mutate_draft(&state, &id, |draft| {
        apply_personal_patch(&mut draft.personal_info, patch)
    })
}

/// PATCH /api/v1/editor/:id/design
pub async fn handle_patch_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<DesignPatch>,
) -> Result<Json<DraftResponse>, AppError> {
    mutate_draft(&state, &id, |draft| apply_design_patch(draft, patch))
}

/// POST /api/v1/editor/:id/experience
pub async fn handle_experience_op(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(op): Json<ListOp<WorkExperiencePatch>>,
) -> Result<Json<DraftResponse>, AppError> {
    mutate_draft(&state, &id, |draft| apply_experience_op(draft, op))
}

/// POST /api/v1/editor/:id/education
pub async fn handle_education_op(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(op): Json<ListOp<EducationPatch>>,
) -> Result<Json<DraftResponse>, AppError> {
    mutate_draft(&state, &id, |draft| apply_education_op(draft, op))
}

/// POST /api/v1/editor/:id/skills
pub async fn handle_skill_op(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(op): Json<ListOp<SkillPatch>>,
) -> Result<Json<DraftResponse>, AppError> {
    mutate_draft(&state, &id, |draft| apply_skill_op(draft, op))
}

/// POST /api/v1/editor/:id/projects
pub async fn handle_project_op(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(op): Json<ListOp<ProjectPatch>>,
) -> Result<Json<DraftResponse>, AppError> {
    mutate_draft(&state, &id, |draft| apply_project_op(draft, op))
}

/// POST /api/v1/editor/:id/custom
pub async fn handle_custom_op(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(op): Json<CustomSectionOp>,
) -> Result<Json<DraftResponse>, AppError> {
    mutate_draft(&state, &id, |draft| apply_custom_op(draft, op))
}

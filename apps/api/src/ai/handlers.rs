use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::ai::prompts;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

/// Every AI endpoint answers with one plain string. The in-memory document is
/// never touched here; applying the text back is an ordinary editor patch, so
/// a late result racing a manual edit is plain last-write-wins.
#[derive(Serialize)]
pub struct AiTextResponse {
    pub text: String,
}

fn load_resume(state: &AppState, id: &str) -> Result<Resume, AppError> {
    state
        .sessions
        .get(id)
        .or_else(|| state.store.get_by_id(id))
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceRequest {
    pub text: String,
    /// What the text is, e.g. "resume" or "work experience description".
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_context() -> String {
    "resume".to_string()
}

/// POST /api/v1/ai/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<AiTextResponse>, AppError> {
    let prompt = prompts::enhance_prompt(&req.text, &req.context);
    let text = state
        .ai
        .generate(prompts::RESUME_WRITER_SYSTEM, &prompt)
        .await?;
    Ok(Json(AiTextResponse { text }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletsRequest {
    pub position: String,
    pub company: String,
}

/// POST /api/v1/ai/bullets
pub async fn handle_bullets(
    State(state): State<AppState>,
    Json(req): Json<BulletsRequest>,
) -> Result<Json<AiTextResponse>, AppError> {
    let prompt = prompts::bullets_prompt(&req.position, &req.company);
    let text = state
        .ai
        .generate(prompts::RESUME_WRITER_SYSTEM, &prompt)
        .await?;
    Ok(Json(AiTextResponse { text }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub resume_id: String,
}

/// POST /api/v1/ai/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<AiTextResponse>, AppError> {
    let resume = load_resume(&state, &req.resume_id)?;
    let prompt = prompts::summary_prompt(&resume);
    let text = state
        .ai
        .generate(prompts::RESUME_WRITER_SYSTEM, &prompt)
        .await?;
    Ok(Json(AiTextResponse { text }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFitRequest {
    pub resume_id: String,
    pub job_description: String,
}

/// POST /api/v1/ai/job-fit
/// Returns lightweight Markdown for human display.
pub async fn handle_job_fit(
    State(state): State<AppState>,
    Json(req): Json<JobFitRequest>,
) -> Result<Json<AiTextResponse>, AppError> {
    let resume = load_resume(&state, &req.resume_id)?;
    let prompt = prompts::job_fit_prompt(&resume, &req.job_description);
    let text = state
        .ai
        .generate(prompts::ATS_ANALYST_SYSTEM, &prompt)
        .await?;
    Ok(Json(AiTextResponse { text }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub text: String,
    pub job_description: String,
}

/// POST /api/v1/ai/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<AiTextResponse>, AppError> {
    let prompt = prompts::optimize_prompt(&req.text, &req.job_description);
    let text = state
        .ai
        .generate(prompts::RESUME_WRITER_SYSTEM, &prompt)
        .await?;
    Ok(Json(AiTextResponse { text }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub resume_id: String,
    pub job_description: String,
}

/// POST /api/v1/ai/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<AiTextResponse>, AppError> {
    let resume = load_resume(&state, &req.resume_id)?;
    let prompt = prompts::cover_letter_prompt(&resume, &req.job_description);
    let text = state
        .ai
        .generate(prompts::RESUME_WRITER_SYSTEM, &prompt)
        .await?;
    Ok(Json(AiTextResponse { text }))
}

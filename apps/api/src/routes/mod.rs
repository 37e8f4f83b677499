pub mod catalog;
pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::ai::handlers as ai_handlers;
use crate::ats::handlers as ats_handlers;
use crate::editor::handlers as editor_handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;
use crate::store::handlers as store_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(catalog::catalog_handler))
        // Resume documents
        .route("/api/v1/resumes", get(store_handlers::handle_list))
        .route("/api/v1/resumes", post(store_handlers::handle_create))
        .route("/api/v1/resumes/:id", get(store_handlers::handle_get))
        .route("/api/v1/resumes/:id", put(store_handlers::handle_put))
        .route("/api/v1/resumes/:id", delete(store_handlers::handle_delete))
        // Projections
        .route(
            "/api/v1/resumes/:id/render",
            get(render_handlers::handle_render),
        )
        .route(
            "/api/v1/resumes/:id/ats",
            get(ats_handlers::handle_ats_report),
        )
        // Editor sessions
        .route("/api/v1/editor/:id/open", post(editor_handlers::handle_open))
        .route("/api/v1/editor/:id/save", post(editor_handlers::handle_save))
        .route("/api/v1/editor/:id/score", get(editor_handlers::handle_score))
        .route(
            "/api/v1/editor/:id/personal",
            patch(editor_handlers::handle_patch_personal),
        )
        .route(
            "/api/v1/editor/:id/design",
            patch(editor_handlers::handle_patch_design),
        )
        .route(
            "/api/v1/editor/:id/experience",
            post(editor_handlers::handle_experience_op),
        )
        .route(
            "/api/v1/editor/:id/education",
            post(editor_handlers::handle_education_op),
        )
        .route(
            "/api/v1/editor/:id/skills",
            post(editor_handlers::handle_skill_op),
        )
        .route(
            "/api/v1/editor/:id/projects",
            post(editor_handlers::handle_project_op),
        )
        .route(
            "/api/v1/editor/:id/custom",
            post(editor_handlers::handle_custom_op),
        )
        // AI text assistant
        .route("/api/v1/ai/enhance", post(ai_handlers::handle_enhance))
        .route("/api/v1/ai/bullets", post(ai_handlers::handle_bullets))
        .route("/api/v1/ai/summary", post(ai_handlers::handle_summary))
        .route("/api/v1/ai/job-fit", post(ai_handlers::handle_job_fit))
        .route("/api/v1/ai/optimize", post(ai_handlers::handle_optimize))
        .route(
            "/api/v1/ai/cover-letter",
            post(ai_handlers::handle_cover_letter),
        )
        .with_state(state)
}

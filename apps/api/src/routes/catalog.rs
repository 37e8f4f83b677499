use axum::Json;
use serde::Serialize;

use crate::models::catalog::{FontInfo, TemplateInfo, ThemeColor, FONTS, TEMPLATES, THEME_COLORS};
use crate::models::roles::{RoleInfo, ROLES};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub templates: &'static [TemplateInfo],
    pub theme_colors: &'static [ThemeColor],
    pub fonts: &'static [FontInfo],
    pub roles: &'static [RoleInfo],
}

/// GET /api/v1/catalog
/// The static design catalog: selectable templates, colors, fonts and role
/// templates for the new-resume flow.
pub async fn catalog_handler() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        templates: TEMPLATES,
        theme_colors: THEME_COLORS,
        fonts: FONTS,
        roles: ROLES,
    })
}

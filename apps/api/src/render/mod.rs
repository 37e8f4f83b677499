//! Template Renderer — a pure projection of a resume document into an HTML
//! page, parameterized by the selected template variant, theme color, font,
//! layout metrics and section order. Rendering never mutates its input and
//! never fails on missing or malformed optional fields.

pub mod handlers;
pub mod markup;
pub mod sections;
pub mod templates;

use crate::models::resume::Resume;

/// Logical page size. The zoom control scales the on-screen page only; the
/// print/export surface stays at this size.
pub const PAGE_WIDTH_MM: u32 = 210;
pub const PAGE_HEIGHT_MM: u32 = 297;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 1.5;

/// The three structurally distinct layouts. Template ids from the catalog map
/// onto these; ids this build does not recognize fall back to the split
/// header, matching the catalog's default styling family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateVariant {
    /// Full-width header, single column ("titanium").
    HeaderFirst,
    /// Split header with right-aligned photo block, single column.
    TrailingPhoto,
    /// Two-column layout with a fixed sidebar ("dubai").
    Sidebar,
}

impl TemplateVariant {
    pub fn resolve(template_id: &str) -> Self {
        match template_id {
            "titanium" => TemplateVariant::HeaderFirst,
            "dubai" => TemplateVariant::Sidebar,
            _ => TemplateVariant::TrailingPhoto,
        }
    }
}

/// Clamps the display magnification to the supported range.
pub fn clamp_zoom(zoom: f32) -> f32 {
    if !zoom.is_finite() {
        return 1.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// CSS custom properties derived from the document's design settings. Applied
/// once at the document root; sections consume them uniformly.
fn style_vars(resume: &Resume) -> String {
    let layout = &resume.layout;
    format!(
        "--margin:{}px;--font-scale:{};--line-height:{};--gap:{}px;--primary:{};--font-family:'{}'",
        layout.margin,
        layout.font_size,
        layout.line_height,
        layout.section_gap,
        markup::escape(&resume.theme_color),
        markup::escape(&resume.font_family),
    )
}

/// Renders the document body for the resolved template variant.
pub fn render_resume(resume: &Resume) -> String {
    let body = match TemplateVariant::resolve(&resume.template) {
        TemplateVariant::HeaderFirst => templates::compose_header_first(resume),
        TemplateVariant::TrailingPhoto => templates::compose_trailing_photo(resume),
        TemplateVariant::Sidebar => templates::compose_sidebar(resume),
    };
    format!(
        "<div class=\"rs-doc\" data-template=\"{}\" style=\"{}\">{body}</div>",
        markup::escape(&resume.template),
        style_vars(resume),
    )
}

const BASE_CSS: &str = "\
.rs-page{width:210mm;min-height:297mm;background:#fff;color:#1e293b;box-shadow:0 4px 24px rgba(0,0,0,.25);transform-origin:top center}\
.rs-doc{font-family:var(--font-family);font-size:calc(1rem * var(--font-scale));padding:var(--margin);line-height:var(--line-height)}\
.rs-section{margin-bottom:var(--gap)}\
.rs-heading{color:var(--primary);font-size:.9em;font-weight:700;text-transform:uppercase;letter-spacing:.1em;border-bottom:1px solid #e2e8f0;padding-bottom:.2em;margin:0 0 .5em}\
.rs-name{font-size:2.5em;font-weight:700;text-transform:uppercase;margin:0 0 .1em;line-height:1.1}\
.rs-accent{color:var(--primary)}\
.rs-job-title{font-size:1.2em;color:#64748b;margin:0 0 .5em}\
.rs-contacts{font-size:.9em;display:flex;flex-wrap:wrap;gap:.6em}\
.rs-sep{color:#94a3b8}\
.rs-header{margin-bottom:var(--gap)}\
.rs-header-first{display:flex;align-items:center;gap:2em;border-bottom:2px solid #000;padding-bottom:1em}\
.rs-header-split{display:flex;justify-content:space-between;align-items:flex-start;border-bottom:2px solid var(--primary);padding-bottom:1.5em}\
.rs-photo{object-fit:cover}\
.rs-photo-round{width:100px;height:100px;border-radius:50%}\
.rs-photo-square{width:120px;height:120px;border-radius:12px}\
.rs-entry{margin-bottom:1em}\
.rs-entry-head{display:flex;justify-content:space-between;align-items:baseline}\
.rs-entry-title{font-size:1.05em;font-weight:700;margin:0}\
.rs-entry-org{color:var(--primary);font-weight:600;margin-bottom:.3em}\
.rs-date{font-size:.85em;color:#64748b;white-space:nowrap}\
.rs-text{font-size:.9em;margin:0;line-height:var(--line-height)}\
.rs-prewrap{white-space:pre-wrap}\
.rs-link{font-size:.8em;color:var(--primary)}\
.rs-tech{font-size:.85em;color:#64748b;font-family:monospace;margin-bottom:.3em}\
.rs-subtitle{font-size:.9em;font-style:italic;color:#475569}\
.rs-chips{display:flex;flex-wrap:wrap;gap:.5em;list-style:none;margin:0;padding:0}\
.rs-chip{background:#f1f5f9;padding:.3em .8em;border-radius:4px;font-size:.85em}\
.rs-columns{display:flex;min-height:297mm}\
.rs-sidebar{width:35%;background:#f8fafc;border-right:1px solid #e2e8f0;padding:var(--margin)}\
.rs-sidebar .rs-name{font-size:2em;text-align:center}\
.rs-sidebar .rs-job-title{text-align:center}\
.rs-main{flex:1;padding:var(--margin)}\
.rs-columns .rs-doc-padding{padding:0}\
@media print{.rs-viewport{transform:none !important}.rs-page{box-shadow:none;width:100%}body{margin:0}}";

/// Renders the full standalone HTML page: base stylesheet, A4 page wrapper,
/// and a display-only zoom transform excluded from print output.
pub fn render_page(resume: &Resume, zoom: f32) -> String {
    let zoom = clamp_zoom(zoom);
    let body = render_resume(resume);
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
<title>{}</title><style>{BASE_CSS}</style></head>\
<body style=\"background:#334155;display:flex;justify-content:center;padding:2rem\">\
<div class=\"rs-viewport\" style=\"transform:scale({zoom})\">\
<div class=\"rs-page\">{body}</div>\
</div></body></html>",
        markup::escape(&resume.title),
    )
}

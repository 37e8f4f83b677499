//! Template composers — the three structurally distinct layouts. Each takes
//! the resume by reference and produces the document body; section content
//! comes from the shared renderers in `sections`.

use crate::models::resume::{Resume, SectionTag};
use crate::render::markup::escape;
use crate::render::sections::render_section;

/// Section tags to render in the body, in the document's configured order.
/// `personal` is consumed by the header; unknown tags are skipped.
fn body_order(resume: &Resume) -> impl Iterator<Item = SectionTag> + '_ {
    resume
        .section_order
        .iter()
        .filter_map(|raw| SectionTag::parse(raw))
        .filter(|tag| *tag != SectionTag::Personal)
}

fn contact_line(resume: &Resume, out: &mut String) {
    out.push_str("<div class=\"rs-contacts\">");
    let info = &resume.personal_info;
    let mut first = true;
    let mut push = |out: &mut String, text: &str| {
        if !first {
            out.push_str("<span class=\"rs-sep\">|</span>");
        }
        out.push_str(&format!("<span>{}</span>", escape(text)));
        first = false;
    };
    if !info.location.is_empty() {
        push(out, &info.location);
    }
    if !info.email.is_empty() {
        push(out, &info.email);
    }
    if !info.phone.is_empty() {
        push(out, &info.phone);
    }
    if let Some(linkedin) = info.linkedin.as_deref().filter(|l| !l.is_empty()) {
        push(out, linkedin);
    }
    if let Some(website) = info.website.as_deref().filter(|w| !w.is_empty()) {
        push(out, website);
    }
    out.push_str("</div>");
}

fn photo_img(resume: &Resume, class: &str, out: &mut String) {
    if let Some(photo) = resume.personal_info.photo.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(&format!(
            "<img class=\"{class}\" src=\"{}\" alt=\"Profile\">",
            escape(photo)
        ));
    }
}

/// Header-first single column: full-width header with optional photo, name,
/// job title and a horizontal contact line, then the body in section order.
pub fn compose_header_first(resume: &Resume) -> String {
    let mut out = String::new();
    out.push_str("<header class=\"rs-header rs-header-first\">");
    photo_img(resume, "rs-photo rs-photo-round", &mut out);
    out.push_str("<div class=\"rs-header-block\">");
    out.push_str(&format!(
        "<h1 class=\"rs-name\">{}</h1>",
        escape(&resume.personal_info.full_name)
    ));
    out.push_str(&format!(
        "<p class=\"rs-job-title\">{}</p>",
        escape(&resume.title)
    ));
    contact_line(resume, &mut out);
    out.push_str("</div></header>");
    for tag in body_order(resume) {
        render_section(tag, resume, &mut out);
    }
    out
}

/// Single column with a right-aligned photo block: name, title and contacts on
/// the left, photo on the right, a rule in the theme color below, then the
/// body in section order.
pub fn compose_trailing_photo(resume: &Resume) -> String {
    let mut out = String::new();
    out.push_str("<header class=\"rs-header rs-header-split\">");
    out.push_str("<div class=\"rs-header-block\">");
    out.push_str(&format!(
        "<h1 class=\"rs-name rs-accent\">{}</h1>",
        escape(&resume.personal_info.full_name)
    ));
    out.push_str(&format!(
        "<p class=\"rs-job-title\">{}</p>",
        escape(&resume.title)
    ));
    contact_line(resume, &mut out);
    out.push_str("</div>");
    photo_img(resume, "rs-photo rs-photo-square", &mut out);
    out.push_str("</header>");
    for tag in body_order(resume) {
        render_section(tag, resume, &mut out);
    }
    out
}

/// Two-column sidebar: the left column carries photo, identity, contacts and
/// always forces Education and Skills, regardless of the configured order;
/// the right column renders the remaining sections in a fixed order.
pub fn compose_sidebar(resume: &Resume) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"rs-columns\">");

    out.push_str("<aside class=\"rs-sidebar\">");
    photo_img(resume, "rs-photo rs-photo-round", &mut out);
    out.push_str(&format!(
        "<h1 class=\"rs-name\">{}</h1>",
        escape(&resume.personal_info.full_name)
    ));
    out.push_str(&format!(
        "<p class=\"rs-job-title\">{}</p>",
        escape(&resume.title)
    ));
    contact_line(resume, &mut out);
    render_section(SectionTag::Education, resume, &mut out);
    render_section(SectionTag::Skills, resume, &mut out);
    out.push_str("</aside>");

    // Sidebar-forced sections never repeat here, even if present in the
    // configured order.
    out.push_str("<main class=\"rs-main\">");
    render_section(SectionTag::Summary, resume, &mut out);
    render_section(SectionTag::Experience, resume, &mut out);
    render_section(SectionTag::Projects, resume, &mut out);
    render_section(SectionTag::Custom, resume, &mut out);
    out.push_str("</main>");

    out.push_str("</div>");
    out
}

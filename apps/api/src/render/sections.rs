//! Shared section renderers. Each projects one section tag of a resume into
//! markup; the same functions back all three template variants so emptiness
//! guards and formatting behave identically everywhere.

use crate::models::resume::{Resume, SectionTag};
use crate::render::markup::escape;

/// Formats an ISO-like date string as abbreviated month + 4-digit year
/// ("Mar 2021"). Empty or unparseable input renders as empty, never an error.
pub fn format_month_year(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let candidates = [raw.to_string(), format!("{raw}-01"), format!("{raw}-01-01")];
    for candidate in &candidates {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(candidate, "%Y-%m-%d") {
            return date.format("%b %Y").to_string();
        }
    }
    String::new()
}

/// The start–end date badge. `current` always wins over the end date.
pub fn date_badge(start: &str, end: &str, current: bool) -> String {
    let end_label = if current {
        "Present".to_string()
    } else {
        format_month_year(end)
    };
    format!("{} – {}", format_month_year(start), end_label)
}

/// Renders one body section into `out`. Dispatch is exhaustive over the
/// closed tag set; `Personal` is consumed by the template header and renders
/// nothing here.
pub fn render_section(tag: SectionTag, resume: &Resume, out: &mut String) {
    match tag {
        SectionTag::Personal => {}
        SectionTag::Summary => render_summary(resume, out),
        SectionTag::Experience => render_experience(resume, out),
        SectionTag::Education => render_education(resume, out),
        SectionTag::Projects => render_projects(resume, out),
        SectionTag::Skills => render_skills(resume, out),
        SectionTag::Custom => render_custom(resume, out),
    }
}

fn render_summary(resume: &Resume, out: &mut String) {
    let summary = resume.personal_info.summary.trim();
    if summary.is_empty() {
        return;
    }
    out.push_str("<section class=\"rs-section\" data-section=\"summary\">");
    out.push_str("<h2 class=\"rs-heading\">Profile</h2>");
    out.push_str(&format!("<p class=\"rs-text\">{}</p>", escape(summary)));
    out.push_str("</section>");
}

fn render_experience(resume: &Resume, out: &mut String) {
    if resume.work_experience.is_empty() {
        return;
    }
    out.push_str("<section class=\"rs-section\" data-section=\"experience\">");
    out.push_str("<h2 class=\"rs-heading\">Experience</h2>");
    for exp in &resume.work_experience {
        out.push_str("<div class=\"rs-entry\">");
        out.push_str(&format!(
            "<div class=\"rs-entry-head\"><h3 class=\"rs-entry-title\">{}</h3>\
             <span class=\"rs-date\">{}</span></div>",
            escape(&exp.position),
            escape(&date_badge(&exp.start_date, &exp.end_date, exp.current)),
        ));
        out.push_str(&format!(
            "<div class=\"rs-entry-org\">{}</div>",
            escape(&exp.company)
        ));
        out.push_str(&format!(
            "<p class=\"rs-text rs-prewrap\">{}</p>",
            escape(&exp.description)
        ));
        out.push_str("</div>");
    }
    out.push_str("</section>");
}

fn render_education(resume: &Resume, out: &mut String) {
    if resume.education.is_empty() {
        return;
    }
    out.push_str("<section class=\"rs-section\" data-section=\"education\">");
    out.push_str("<h2 class=\"rs-heading\">Education</h2>");
    for edu in &resume.education {
        out.push_str("<div class=\"rs-entry\">");
        out.push_str(&format!(
            "<div class=\"rs-entry-head\"><h3 class=\"rs-entry-title\">{}</h3>\
             <span class=\"rs-date\">{}</span></div>",
            escape(&edu.school),
            escape(&date_badge(&edu.start_date, &edu.end_date, edu.current)),
        ));
        out.push_str(&format!(
            "<div class=\"rs-entry-org\">{}, {}</div>",
            escape(&edu.degree),
            escape(&edu.field)
        ));
        out.push_str("</div>");
    }
    out.push_str("</section>");
}

fn render_projects(resume: &Resume, out: &mut String) {
    if resume.projects.is_empty() {
        return;
    }
    out.push_str("<section class=\"rs-section\" data-section=\"projects\">");
    out.push_str("<h2 class=\"rs-heading\">Projects</h2>");
    for proj in &resume.projects {
        out.push_str("<div class=\"rs-entry\">");
        out.push_str("<div class=\"rs-entry-head\">");
        out.push_str(&format!(
            "<h3 class=\"rs-entry-title\">{}</h3>",
            escape(&proj.name)
        ));
        if let Some(link) = proj.link.as_deref().filter(|l| !l.trim().is_empty()) {
            out.push_str(&format!("<span class=\"rs-link\">{}</span>", escape(link)));
        }
        out.push_str("</div>");
        if let Some(tech) = proj.technologies.as_deref().filter(|t| !t.trim().is_empty()) {
            out.push_str(&format!("<div class=\"rs-tech\">{}</div>", escape(tech)));
        }
        out.push_str(&format!(
            "<p class=\"rs-text\">{}</p>",
            escape(&proj.description)
        ));
        out.push_str("</div>");
    }
    out.push_str("</section>");
}

fn render_skills(resume: &Resume, out: &mut String) {
    if resume.skills.is_empty() {
        return;
    }
    out.push_str("<section class=\"rs-section\" data-section=\"skills\">");
    out.push_str("<h2 class=\"rs-heading\">Skills</h2>");
    out.push_str("<ul class=\"rs-chips\">");
    for skill in &resume.skills {
        // Names only; proficiency level is never displayed.
        out.push_str(&format!("<li class=\"rs-chip\">{}</li>", escape(&skill.name)));
    }
    out.push_str("</ul></section>");
}

fn render_custom(resume: &Resume, out: &mut String) {
    // No emptiness guard at the section level: every custom section renders.
    for section in &resume.custom_sections {
        out.push_str("<section class=\"rs-section\" data-section=\"custom\">");
        out.push_str(&format!(
            "<h2 class=\"rs-heading\">{}</h2>",
            escape(&section.title)
        ));
        for item in &section.items {
            out.push_str("<div class=\"rs-entry\">");
            out.push_str("<div class=\"rs-entry-head\">");
            out.push_str(&format!(
                "<h3 class=\"rs-entry-title\">{}</h3>",
                escape(&item.title)
            ));
            if let Some(date) = item.date.as_deref().filter(|d| !d.trim().is_empty()) {
                out.push_str(&format!("<span class=\"rs-date\">{}</span>", escape(date)));
            }
            out.push_str("</div>");
            if let Some(subtitle) = item.subtitle.as_deref().filter(|s| !s.trim().is_empty()) {
                out.push_str(&format!(
                    "<div class=\"rs-subtitle\">{}</div>",
                    escape(subtitle)
                ));
            }
            if !item.description.trim().is_empty() {
                out.push_str(&format!(
                    "<p class=\"rs-text\">{}</p>",
                    escape(&item.description)
                ));
            }
            out.push_str("</div>");
        }
        out.push_str("</section>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{CustomSection, CustomSectionItem, Skill, SkillLevel, WorkExperience};

    fn resume_with_experience(current: bool) -> Resume {
        let mut resume = Resume::skeleton();
        resume.work_experience.push(WorkExperience {
            id: "e1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2021-03-01".to_string(),
            end_date: "2023-06-01".to_string(),
            current,
            description: "Shipped things.\nFixed things.".to_string(),
        });
        resume
    }

    #[test]
    fn test_format_month_year_full_date() {
        assert_eq!(format_month_year("2021-03-01"), "Mar 2021");
    }

    #[test]
    fn test_format_month_year_partial_dates() {
        assert_eq!(format_month_year("2021-03"), "Mar 2021");
        assert_eq!(format_month_year("2021"), "Jan 2021");
    }

    #[test]
    fn test_format_month_year_empty_and_malformed_render_blank() {
        assert_eq!(format_month_year(""), "");
        assert_eq!(format_month_year("   "), "");
        assert_eq!(format_month_year("not a date"), "");
        assert_eq!(format_month_year("2021-13-40"), "");
    }

    #[test]
    fn test_date_badge_current_always_wins() {
        // The stored end date is ignored whenever `current` is set.
        assert_eq!(date_badge("2021-03-01", "2023-06-01", true), "Mar 2021 – Present");
        assert_eq!(date_badge("2021-03-01", "", true), "Mar 2021 – Present");
    }

    #[test]
    fn test_date_badge_completed_range() {
        assert_eq!(date_badge("2021-03-01", "2023-06-01", false), "Mar 2021 – Jun 2023");
    }

    #[test]
    fn test_empty_summary_renders_nothing() {
        let resume = Resume::skeleton();
        let mut out = String::new();
        render_section(SectionTag::Summary, &resume, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_experience_preserves_line_breaks() {
        let resume = resume_with_experience(false);
        let mut out = String::new();
        render_section(SectionTag::Experience, &resume, &mut out);
        assert!(out.contains("rs-prewrap"));
        assert!(out.contains("Shipped things.\nFixed things."));
    }

    #[test]
    fn test_experience_entry_escapes_user_text() {
        let mut resume = resume_with_experience(false);
        resume.work_experience[0].company = "Tom & Jerry <Inc>".to_string();
        let mut out = String::new();
        render_section(SectionTag::Experience, &resume, &mut out);
        assert!(out.contains("Tom &amp; Jerry &lt;Inc&gt;"));
        assert!(!out.contains("<Inc>"));
    }

    #[test]
    fn test_skills_render_names_without_levels() {
        let mut resume = Resume::skeleton();
        resume.skills.push(Skill {
            id: "s1".to_string(),
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
        });
        let mut out = String::new();
        render_section(SectionTag::Skills, &resume, &mut out);
        assert!(out.contains("Rust"));
        assert!(!out.contains("Expert"));
    }

    #[test]
    fn test_custom_section_renders_even_when_empty() {
        let mut resume = Resume::skeleton();
        resume.custom_sections.push(CustomSection::blank("Awards"));
        let mut out = String::new();
        render_section(SectionTag::Custom, &resume, &mut out);
        assert!(out.contains("Awards"));
    }

    #[test]
    fn test_custom_item_omits_absent_lines() {
        let mut resume = Resume::skeleton();
        let mut section = CustomSection::blank("Languages");
        let mut item = CustomSectionItem::blank();
        item.title = "French".to_string();
        section.items.push(item);
        resume.custom_sections.push(section);
        let mut out = String::new();
        render_section(SectionTag::Custom, &resume, &mut out);
        assert!(out.contains("French"));
        assert!(!out.contains("rs-subtitle"));
        assert!(!out.contains("rs-text"));
    }

    #[test]
    fn test_personal_tag_renders_nothing_in_body() {
        let resume = resume_with_experience(false);
        let mut out = String::new();
        render_section(SectionTag::Personal, &resume, &mut out);
        assert!(out.is_empty());
    }
}

//! ATS Simulation View — projects a resume into the diagnostic listing a
//! naive text-extraction pipeline would produce. Independent of the template
//! renderer: categories appear in a fixed order regardless of `sectionOrder`,
//! and absent data is marked explicitly rather than omitted.

pub mod handlers;

use serde::Serialize;

use crate::models::resume::Resume;

/// Templates a single-column extractor parses cleanly.
pub const SAFE_TEMPLATES: &[&str] = &["titanium", "new-york", "san-francisco"];

const SAFE_SCORE: u32 = 98;
const COMPLEX_LAYOUT_SCORE: u32 = 75;

/// Character budget for the description preview of each work entry.
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

const COMPLEX_LAYOUT_WARNING: &str = "Complex layout detected: this template uses columns or \
complex formatting which may confuse older ATS software. For maximum safety, switch to the \
\"Titanium\" template.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    /// Heuristic parseability score keyed off the selected template.
    pub score: u32,
    pub template_safe: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// The plain diagnostic listing, fixed category order.
    pub listing: String,
}

pub fn simulate(resume: &Resume) -> AtsReport {
    let template_safe = SAFE_TEMPLATES.contains(&resume.template.as_str());
    AtsReport {
        score: if template_safe { SAFE_SCORE } else { COMPLEX_LAYOUT_SCORE },
        template_safe,
        warning: (!template_safe).then(|| COMPLEX_LAYOUT_WARNING.to_string()),
        listing: build_listing(resume),
    }
}

fn truncate_preview(text: &str) -> String {
    let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{preview}...")
}

fn build_listing(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let mut out = String::new();

    out.push_str("-- CANDIDATE IDENTITY --\n");
    out.push_str(&format!("NAME_EXTRACTED: {}\n", info.full_name));
    out.push_str(&format!("EMAIL_EXTRACTED: {}\n", info.email));
    out.push_str(&format!("LOC_EXTRACTED: {}\n", info.location));

    out.push_str("\n-- PROFESSIONAL_SUMMARY --\n");
    if info.summary.is_empty() {
        out.push_str("NULL\n");
    } else {
        out.push_str(&format!("{}\n", info.summary));
    }

    out.push_str("\n-- WORK_HISTORY_ENTITIES --\n");
    for exp in &resume.work_experience {
        // Dates are echoed verbatim: the point of this view is what a naive
        // extractor sees, not the renderer's prettified badge.
        let end = if exp.current { "PRESENT" } else { exp.end_date.as_str() };
        out.push_str(&format!("ROLE: {}\n", exp.position));
        out.push_str(&format!("ORG: {}\n", exp.company));
        out.push_str(&format!("DATES: {} to {}\n", exp.start_date, end));
        out.push_str(&format!(
            "{} [TEXT_BLOCK_DETECTED]\n",
            truncate_preview(&exp.description)
        ));
    }

    out.push_str("\n-- EDUCATIONAL_BACKGROUND --\n");
    for edu in &resume.education {
        out.push_str(&format!(
            "[DEGREE: {}] [FIELD: {}] [INSTITUTION: {}]\n",
            edu.degree, edu.field, edu.school
        ));
    }

    out.push_str("\n-- KEYWORD_CLOUD --\n");
    if resume.skills.is_empty() {
        out.push_str("NO_SKILLS_DETECTED\n");
    } else {
        for skill in &resume.skills {
            out.push_str(&format!("{}\n", skill.name));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Resume, Skill, SkillLevel, WorkExperience};

    fn sample_resume(template: &str) -> Resume {
        let mut resume = Resume::skeleton();
        resume.template = template.to_string();
        resume.personal_info.full_name = "Ada Lovelace".to_string();
        resume.personal_info.email = "ada@example.com".to_string();
        resume.personal_info.location = "London".to_string();
        resume
    }

    #[test]
    fn test_safe_template_scores_high_without_warning() {
        let report = simulate(&sample_resume("titanium"));
        assert_eq!(report.score, 98);
        assert!(report.template_safe);
        assert!(report.warning.is_none());
    }

    #[test]
    fn test_complex_template_scores_low_with_warning() {
        let report = simulate(&sample_resume("berlin"));
        assert_eq!(report.score, 75);
        assert!(!report.template_safe);
        assert!(report.warning.is_some());
    }

    #[test]
    fn test_all_safe_templates_score_high() {
        for template in SAFE_TEMPLATES {
            assert_eq!(simulate(&sample_resume(template)).score, 98);
        }
    }

    #[test]
    fn test_empty_summary_shows_null_marker() {
        let report = simulate(&sample_resume("titanium"));
        assert!(report.listing.contains("-- PROFESSIONAL_SUMMARY --\nNULL"));
    }

    #[test]
    fn test_empty_skills_shows_explicit_marker() {
        let report = simulate(&sample_resume("titanium"));
        assert!(report.listing.contains("NO_SKILLS_DETECTED"));
    }

    #[test]
    fn test_listing_category_order_is_fixed() {
        let mut resume = sample_resume("titanium");
        // A reordered document must not affect the diagnostic order.
        resume.section_order.reverse();
        let listing = simulate(&resume).listing;
        let identity = listing.find("-- CANDIDATE IDENTITY --").unwrap();
        let summary = listing.find("-- PROFESSIONAL_SUMMARY --").unwrap();
        let work = listing.find("-- WORK_HISTORY_ENTITIES --").unwrap();
        let education = listing.find("-- EDUCATIONAL_BACKGROUND --").unwrap();
        let keywords = listing.find("-- KEYWORD_CLOUD --").unwrap();
        assert!(identity < summary && summary < work && work < education && education < keywords);
    }

    #[test]
    fn test_work_entry_preview_truncated_and_tagged() {
        let mut resume = sample_resume("titanium");
        resume.work_experience.push(WorkExperience {
            id: "e1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2021-03-01".to_string(),
            end_date: String::new(),
            current: true,
            description: "x".repeat(300),
        });
        let listing = simulate(&resume).listing;
        assert!(listing.contains("ROLE: Engineer"));
        assert!(listing.contains("DATES: 2021-03-01 to PRESENT"));
        let preview = format!("{}...", "x".repeat(100));
        assert!(listing.contains(&preview));
        assert!(!listing.contains(&"x".repeat(101)));
        assert!(listing.contains("[TEXT_BLOCK_DETECTED]"));
    }

    #[test]
    fn test_dates_are_echoed_verbatim() {
        let mut resume = sample_resume("titanium");
        resume.work_experience.push(WorkExperience {
            id: "e1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2018-06-01".to_string(),
            end_date: "2021-02-28".to_string(),
            current: false,
            description: "Shipped things.".to_string(),
        });
        let listing = simulate(&resume).listing;
        // Stored strings pass through untouched, no month-name formatting.
        assert!(listing.contains("DATES: 2018-06-01 to 2021-02-28"));
        assert!(!listing.contains("Jun 2018"));
    }

    #[test]
    fn test_education_line_format() {
        let mut resume = sample_resume("titanium");
        resume.education.push(Education {
            id: "ed1".to_string(),
            school: "Royal Society".to_string(),
            degree: "BSc".to_string(),
            field: "Mathematics".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
        });
        let listing = simulate(&resume).listing;
        assert!(listing.contains("[DEGREE: BSc] [FIELD: Mathematics] [INSTITUTION: Royal Society]"));
    }

    #[test]
    fn test_skill_names_listed() {
        let mut resume = sample_resume("titanium");
        resume.skills.push(Skill {
            id: "s1".to_string(),
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
        });
        let listing = simulate(&resume).listing;
        assert!(listing.contains("Rust"));
        assert!(!listing.contains("NO_SKILLS_DETECTED"));
    }
}

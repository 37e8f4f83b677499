use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The root resume aggregate. One per saved document.
///
/// Serializes camelCase to stay field-for-field compatible with the persisted
/// JSON layout; optional fields that were never set round-trip as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub title: String,
    /// Epoch milliseconds, refreshed on every persisted write.
    pub last_modified: i64,
    pub personal_info: PersonalInfo,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub custom_sections: Vec<CustomSection>,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default = "default_section_order")]
    pub section_order: Vec<String>,
}

impl Resume {
    /// The empty skeleton a new document starts from. The store assigns the
    /// id and timestamp when it persists the document.
    pub fn skeleton() -> Self {
        Resume {
            id: String::new(),
            title: "Untitled Resume".to_string(),
            last_modified: 0,
            personal_info: PersonalInfo::default(),
            work_experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            custom_sections: Vec::new(),
            template: default_template(),
            theme_color: default_theme_color(),
            font_family: default_font_family(),
            layout: LayoutSettings::default(),
            section_order: default_section_order(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Inline image data string. Kept inside the document, matching the
    /// persisted layout; absence renders as omission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// Ignored by every renderer when `current` is true ("Present" wins).
    pub end_date: String,
    pub current: bool,
    /// Newline-separated achievement lines; line breaks are preserved.
    pub description: String,
}

impl WorkExperience {
    pub fn blank() -> Self {
        WorkExperience {
            id: Uuid::new_v4().to_string(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

impl Education {
    pub fn blank() -> Self {
        Education {
            id: Uuid::new_v4().to_string(),
            school: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn blank() -> Self {
        Skill {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            level: SkillLevel::Intermediate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<String>,
}

impl Project {
    pub fn blank() -> Self {
        Project {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            description: String::new(),
            link: None,
            technologies: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    pub id: String,
    /// User-defined heading, e.g. "Languages" or "Awards".
    pub title: String,
    #[serde(default)]
    pub items: Vec<CustomSectionItem>,
}

impl CustomSection {
    pub fn blank(title: impl Into<String>) -> Self {
        CustomSection {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSectionItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl CustomSectionItem {
    pub fn blank() -> Self {
        CustomSectionItem {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            subtitle: None,
            date: None,
            description: String::new(),
        }
    }
}

/// Pure presentation parameters. No effect on the underlying data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    /// Page margin in pixels.
    pub margin: u32,
    /// Font scale factor applied to the whole page.
    pub font_size: f32,
    /// Line-height multiplier.
    pub line_height: f32,
    /// Gap between sections in pixels.
    pub section_gap: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            margin: 24,
            font_size: 1.0,
            line_height: 1.5,
            section_gap: 24,
        }
    }
}

/// The closed set of renderable section tags. `section_order` is stored as
/// strings for wire fidelity; rendering dispatches through this enum so an
/// unhandled tag is a compile error, and unknown strings are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionTag {
    Personal,
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Custom,
}

impl SectionTag {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "personal" => Some(SectionTag::Personal),
            "summary" => Some(SectionTag::Summary),
            "experience" => Some(SectionTag::Experience),
            "education" => Some(SectionTag::Education),
            "projects" => Some(SectionTag::Projects),
            "skills" => Some(SectionTag::Skills),
            "custom" => Some(SectionTag::Custom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionTag::Personal => "personal",
            SectionTag::Summary => "summary",
            SectionTag::Experience => "experience",
            SectionTag::Education => "education",
            SectionTag::Projects => "projects",
            SectionTag::Skills => "skills",
            SectionTag::Custom => "custom",
        }
    }
}

pub fn default_template() -> String {
    "titanium".to_string()
}

pub fn default_theme_color() -> String {
    "#2563eb".to_string()
}

pub fn default_font_family() -> String {
    "Inter".to_string()
}

pub fn default_section_order() -> Vec<String> {
    [
        "personal",
        "summary",
        "experience",
        "education",
        "projects",
        "skills",
        "custom",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_tag_parse_known_and_unknown() {
        assert_eq!(SectionTag::parse("experience"), Some(SectionTag::Experience));
        assert_eq!(SectionTag::parse("personal"), Some(SectionTag::Personal));
        assert_eq!(SectionTag::parse("references"), None);
        assert_eq!(SectionTag::parse(""), None);
    }

    #[test]
    fn test_resume_serializes_camel_case() {
        let resume = Resume::skeleton();
        let json = serde_json::to_value(&resume).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("workExperience").is_some());
        assert!(json.get("sectionOrder").is_some());
        assert!(json.get("lastModified").is_some());
        // Unset optionals stay absent rather than serializing as null.
        assert!(json["personalInfo"].get("photo").is_none());
    }

    #[test]
    fn test_resume_round_trip() {
        let mut resume = Resume::skeleton();
        resume.id = "abc".to_string();
        resume.personal_info.full_name = "Ada Lovelace".to_string();
        resume.skills.push(Skill {
            id: "s1".to_string(),
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
        });
        let json = serde_json::to_string(&resume).unwrap();
        let back: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
    }

    #[test]
    fn test_missing_design_fields_fall_back_to_defaults() {
        // Documents written before the design settings existed still load.
        let json = r#"{
            "id": "r1",
            "title": "Old Resume",
            "lastModified": 0,
            "personalInfo": {},
            "workExperience": [],
            "education": [],
            "skills": []
        }"#;
        let resume: Resume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.template, "titanium");
        assert_eq!(resume.theme_color, "#2563eb");
        assert_eq!(resume.layout, LayoutSettings::default());
        assert_eq!(resume.section_order, default_section_order());
    }

    #[test]
    fn test_skill_level_ordering() {
        assert!(SkillLevel::Beginner < SkillLevel::Expert);
        assert!(SkillLevel::Intermediate < SkillLevel::Advanced);
    }
}

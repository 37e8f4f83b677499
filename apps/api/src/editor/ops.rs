//! Section-scoped edit operations. Every operation is typed against the
//! entity it touches: patch structs carry one `Option` per declared field
//! (`Some` replaces, `None` leaves untouched) and list mutations are a tagged
//! enum, so there is no string-keyed field access anywhere.

use serde::Deserialize;

use crate::models::resume::{
    CustomSection, CustomSectionItem, Education, LayoutSettings, PersonalInfo, Project, Resume,
    Skill, SkillLevel, WorkExperience,
};

// ── Field patches ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub photo: Option<String>,
}

pub fn apply_personal_patch(info: &mut PersonalInfo, patch: PersonalInfoPatch) {
    // Optional links clear when patched to an empty string.
    let clear_or_set = |value: String| if value.is_empty() { None } else { Some(value) };
    if let Some(v) = patch.full_name {
        info.full_name = v;
    }
    if let Some(v) = patch.email {
        info.email = v;
    }
    if let Some(v) = patch.phone {
        info.phone = v;
    }
    if let Some(v) = patch.location {
        info.location = v;
    }
    if let Some(v) = patch.summary {
        info.summary = v;
    }
    if let Some(v) = patch.linkedin {
        info.linkedin = clear_or_set(v);
    }
    if let Some(v) = patch.website {
        info.website = clear_or_set(v);
    }
    if let Some(v) = patch.photo {
        info.photo = clear_or_set(v);
    }
}

/// Design-level settings: title, template, theme, font, layout metrics and
/// the section display order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignPatch {
    pub title: Option<String>,
    pub template: Option<String>,
    pub theme_color: Option<String>,
    pub font_family: Option<String>,
    pub layout: Option<LayoutSettings>,
    pub section_order: Option<Vec<String>>,
}

pub fn apply_design_patch(resume: &mut Resume, patch: DesignPatch) {
    if let Some(v) = patch.title {
        resume.title = v;
    }
    if let Some(v) = patch.template {
        resume.template = v;
    }
    if let Some(v) = patch.theme_color {
        resume.theme_color = v;
    }
    if let Some(v) = patch.font_family {
        resume.font_family = v;
    }
    if let Some(v) = patch.layout {
        resume.layout = v;
    }
    if let Some(v) = patch.section_order {
        resume.section_order = v;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub technologies: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomItemPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

// ── List operations ─────────────────────────────────────────────────────────

/// A mutation against one ordered entry list. `Add` appends a blank entry
/// with a generated id; reorders swap adjacent positions and are no-ops at
/// the list edges; `Update`/`Remove` against an unknown id are no-ops.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ListOp<P> {
    Add,
    Update { id: String, patch: P },
    Remove { id: String },
    MoveUp { id: String },
    MoveDown { id: String },
}

fn apply_list_op<T, P>(
    list: &mut Vec<T>,
    op: ListOp<P>,
    id_of: fn(&T) -> &str,
    blank: fn() -> T,
    apply: fn(&mut T, P),
) {
    match op {
        ListOp::Add => list.push(blank()),
        ListOp::Update { id, patch } => {
            if let Some(entry) = list.iter_mut().find(|e| id_of(e) == id) {
                apply(entry, patch);
            }
        }
        ListOp::Remove { id } => list.retain(|e| id_of(e) != id),
        ListOp::MoveUp { id } => {
            if let Some(i) = list.iter().position(|e| id_of(e) == id) {
                if i > 0 {
                    list.swap(i - 1, i);
                }
            }
        }
        ListOp::MoveDown { id } => {
            if let Some(i) = list.iter().position(|e| id_of(e) == id) {
                if i + 1 < list.len() {
                    list.swap(i, i + 1);
                }
            }
        }
    }
}

pub fn apply_experience_op(resume: &mut Resume, op: ListOp<WorkExperiencePatch>) {
    apply_list_op(
        &mut resume.work_experience,
        op,
        |e| &e.id,
        WorkExperience::blank,
        |entry, patch| {
            if let Some(v) = patch.company {
                entry.company = v;
            }
            if let Some(v) = patch.position {
                entry.position = v;
            }
            if let Some(v) = patch.start_date {
                entry.start_date = v;
            }
            if let Some(v) = patch.end_date {
                entry.end_date = v;
            }
            if let Some(v) = patch.current {
                entry.current = v;
            }
            if let Some(v) = patch.description {
                entry.description = v;
            }
        },
    );
}

pub fn apply_education_op(resume: &mut Resume, op: ListOp<EducationPatch>) {
    apply_list_op(
        &mut resume.education,
        op,
        |e| &e.id,
        Education::blank,
        |entry, patch| {
            if let Some(v) = patch.school {
                entry.school = v;
            }
            if let Some(v) = patch.degree {
                entry.degree = v;
            }
            if let Some(v) = patch.field {
                entry.field = v;
            }
            if let Some(v) = patch.start_date {
                entry.start_date = v;
            }
            if let Some(v) = patch.end_date {
                entry.end_date = v;
            }
            if let Some(v) = patch.current {
                entry.current = v;
            }
        },
    );
}

pub fn apply_skill_op(resume: &mut Resume, op: ListOp<SkillPatch>) {
    apply_list_op(
        &mut resume.skills,
        op,
        |e| &e.id,
        Skill::blank,
        |entry, patch| {
            if let Some(v) = patch.name {
                entry.name = v;
            }
            if let Some(v) = patch.level {
                entry.level = v;
            }
        },
    );
}

pub fn apply_project_op(resume: &mut Resume, op: ListOp<ProjectPatch>) {
    apply_list_op(
        &mut resume.projects,
        op,
        |e| &e.id,
        Project::blank,
        |entry, patch| {
            let clear_or_set = |value: String| if value.is_empty() { None } else { Some(value) };
            if let Some(v) = patch.name {
                entry.name = v;
            }
            if let Some(v) = patch.description {
                entry.description = v;
            }
            if let Some(v) = patch.link {
                entry.link = clear_or_set(v);
            }
            if let Some(v) = patch.technologies {
                entry.technologies = clear_or_set(v);
            }
        },
    );
}

/// Custom sections nest one level deeper than the other lists: operations
/// address either a section or an item within one.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum CustomSectionOp {
    AddSection { title: String },
    RenameSection { id: String, title: String },
    RemoveSection { id: String },
    MoveSectionUp { id: String },
    MoveSectionDown { id: String },
    AddItem { section_id: String },
    UpdateItem { section_id: String, id: String, patch: CustomItemPatch },
    RemoveItem { section_id: String, id: String },
}

pub fn apply_custom_op(resume: &mut Resume, op: CustomSectionOp) {
    let sections = &mut resume.custom_sections;
    match op {
        CustomSectionOp::AddSection { title } => sections.push(CustomSection::blank(title)),
        CustomSectionOp::RenameSection { id, title } => {
            if let Some(section) = sections.iter_mut().find(|s| s.id == id) {
                section.title = title;
            }
        }
        CustomSectionOp::RemoveSection { id } => sections.retain(|s| s.id != id),
        CustomSectionOp::MoveSectionUp { id } => {
            if let Some(i) = sections.iter().position(|s| s.id == id) {
                if i > 0 {
                    sections.swap(i - 1, i);
                }
            }
        }
        CustomSectionOp::MoveSectionDown { id } => {
            if let Some(i) = sections.iter().position(|s| s.id == id) {
                if i + 1 < sections.len() {
                    sections.swap(i, i + 1);
                }
            }
        }
        CustomSectionOp::AddItem { section_id } => {
            if let Some(section) = sections.iter_mut().find(|s| s.id == section_id) {
                section.items.push(CustomSectionItem::blank());
            }
        }
        CustomSectionOp::UpdateItem { section_id, id, patch } => {
            if let Some(item) = sections
                .iter_mut()
                .find(|s| s.id == section_id)
                .and_then(|s| s.items.iter_mut().find(|i| i.id == id))
            {
                let clear_or_set = |value: String| if value.is_empty() { None } else { Some(value) };
                if let Some(v) = patch.title {
                    item.title = v;
                }
                if let Some(v) = patch.subtitle {
                    item.subtitle = clear_or_set(v);
                }
                if let Some(v) = patch.date {
                    item.date = clear_or_set(v);
                }
                if let Some(v) = patch.description {
                    item.description = v;
                }
            }
        }
        CustomSectionOp::RemoveItem { section_id, id } => {
            if let Some(section) = sections.iter_mut().find(|s| s.id == section_id) {
                section.items.retain(|i| i.id != id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume_with_three_skills() -> Resume {
        let mut resume = Resume::skeleton();
        for name in ["alpha", "beta", "gamma"] {
            resume.skills.push(Skill {
                id: name.to_string(),
                name: name.to_string(),
                level: SkillLevel::Beginner,
            });
        }
        resume
    }

    #[test]
    fn test_personal_patch_replaces_only_present_fields() {
        let mut info = PersonalInfo {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..PersonalInfo::default()
        };
        apply_personal_patch(
            &mut info,
            PersonalInfoPatch {
                phone: Some("555-0100".to_string()),
                ..PersonalInfoPatch::default()
            },
        );
        assert_eq!(info.full_name, "Ada");
        assert_eq!(info.email, "ada@example.com");
        assert_eq!(info.phone, "555-0100");
    }

    #[test]
    fn test_personal_patch_clears_optional_link_with_empty_string() {
        let mut info = PersonalInfo {
            linkedin: Some("linkedin.com/in/ada".to_string()),
            ..PersonalInfo::default()
        };
        apply_personal_patch(
            &mut info,
            PersonalInfoPatch {
                linkedin: Some(String::new()),
                ..PersonalInfoPatch::default()
            },
        );
        assert_eq!(info.linkedin, None);
    }

    #[test]
    fn test_design_patch_updates_section_order() {
        let mut resume = Resume::skeleton();
        apply_design_patch(
            &mut resume,
            DesignPatch {
                template: Some("dubai".to_string()),
                section_order: Some(vec!["skills".to_string(), "experience".to_string()]),
                ..DesignPatch::default()
            },
        );
        assert_eq!(resume.template, "dubai");
        assert_eq!(resume.section_order, vec!["skills", "experience"]);
        assert_eq!(resume.title, "Untitled Resume");
    }

    #[test]
    fn test_add_appends_blank_entry_with_generated_id() {
        let mut resume = Resume::skeleton();
        apply_experience_op(&mut resume, ListOp::Add);
        assert_eq!(resume.work_experience.len(), 1);
        assert!(!resume.work_experience[0].id.is_empty());
        assert!(resume.work_experience[0].company.is_empty());
    }

    #[test]
    fn test_update_targets_entry_by_id() {
        let mut resume = resume_with_three_skills();
        apply_skill_op(
            &mut resume,
            ListOp::Update {
                id: "beta".to_string(),
                patch: SkillPatch {
                    name: Some("Beta Prime".to_string()),
                    level: Some(SkillLevel::Expert),
                },
            },
        );
        assert_eq!(resume.skills[1].name, "Beta Prime");
        assert_eq!(resume.skills[1].level, SkillLevel::Expert);
        assert_eq!(resume.skills[0].name, "alpha");
    }

    #[test]
    fn test_update_unknown_id_is_a_no_op() {
        let mut resume = resume_with_three_skills();
        let before = resume.clone();
        apply_skill_op(
            &mut resume,
            ListOp::Update {
                id: "missing".to_string(),
                patch: SkillPatch::default(),
            },
        );
        assert_eq!(resume, before);
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let mut resume = resume_with_three_skills();
        apply_skill_op(&mut resume, ListOp::Remove { id: "missing".to_string() });
        assert_eq!(resume.skills.len(), 3);
    }

    #[test]
    fn test_move_up_swaps_adjacent_entries() {
        let mut resume = resume_with_three_skills();
        apply_skill_op(&mut resume, ListOp::MoveUp { id: "gamma".to_string() });
        let names: Vec<_> = resume.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "gamma", "beta"]);
    }

    #[test]
    fn test_move_is_a_no_op_at_list_edges() {
        let mut resume = resume_with_three_skills();
        apply_skill_op(&mut resume, ListOp::MoveUp { id: "alpha".to_string() });
        apply_skill_op(&mut resume, ListOp::MoveDown { id: "gamma".to_string() });
        let names: Vec<_> = resume.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_custom_section_item_lifecycle() {
        let mut resume = Resume::skeleton();
        apply_custom_op(&mut resume, CustomSectionOp::AddSection { title: "Awards".to_string() });
        let section_id = resume.custom_sections[0].id.clone();

        apply_custom_op(&mut resume, CustomSectionOp::AddItem { section_id: section_id.clone() });
        let item_id = resume.custom_sections[0].items[0].id.clone();

        apply_custom_op(
            &mut resume,
            CustomSectionOp::UpdateItem {
                section_id: section_id.clone(),
                id: item_id.clone(),
                patch: CustomItemPatch {
                    title: Some("Turing Award".to_string()),
                    date: Some("2024".to_string()),
                    ..CustomItemPatch::default()
                },
            },
        );
        assert_eq!(resume.custom_sections[0].items[0].title, "Turing Award");
        assert_eq!(resume.custom_sections[0].items[0].date.as_deref(), Some("2024"));

        apply_custom_op(&mut resume, CustomSectionOp::RemoveItem { section_id, id: item_id });
        assert!(resume.custom_sections[0].items.is_empty());
    }

    #[test]
    fn test_list_op_deserializes_from_tagged_json() {
        let op: ListOp<SkillPatch> =
            serde_json::from_str(r#"{"op":"update","id":"s1","patch":{"name":"Rust"}}"#).unwrap();
        match op {
            ListOp::Update { id, patch } => {
                assert_eq!(id, "s1");
                assert_eq!(patch.name.as_deref(), Some("Rust"));
            }
            _ => panic!("expected update op"),
        }
        let add: ListOp<SkillPatch> = serde_json::from_str(r#"{"op":"add"}"#).unwrap();
        assert!(matches!(add, ListOp::Add));
    }
}

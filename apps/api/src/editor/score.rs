//! Completeness score — a derived 0–100 heuristic over document field
//! presence. Recomputed on demand, never persisted.

use crate::models::resume::Resume;

const MAX_SCORE: u32 = 100;

/// The fixed weighted checks, in evaluation order.
const CHECKS: &[(&str, u32, fn(&Resume) -> bool)] = &[
    ("name present", 10, |r| !r.personal_info.full_name.is_empty()),
    ("email present", 5, |r| !r.personal_info.email.is_empty()),
    ("summary over 50 chars", 15, |r| {
        r.personal_info.summary.chars().count() > 50
    }),
    ("at least one work entry", 20, |r| !r.work_experience.is_empty()),
    ("more than one work entry", 10, |r| r.work_experience.len() > 1),
    ("at least one education entry", 10, |r| !r.education.is_empty()),
    ("five or more skills", 15, |r| r.skills.len() >= 5),
    ("at least one project", 15, |r| !r.projects.is_empty()),
];

pub fn completeness_score(resume: &Resume) -> u32 {
    let score: u32 = CHECKS
        .iter()
        .filter(|(_, _, check)| check(resume))
        .map(|(_, weight, _)| weight)
        .sum();
    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        Education, Project, Resume, Skill, SkillLevel, WorkExperience,
    };

    #[test]
    fn test_empty_resume_scores_zero() {
        assert_eq!(completeness_score(&Resume::skeleton()), 0);
    }

    #[test]
    fn test_fully_populated_resume_scores_one_hundred() {
        let mut resume = Resume::skeleton();
        resume.personal_info.full_name = "Ada Lovelace".to_string();
        resume.personal_info.email = "ada@example.com".to_string();
        resume.personal_info.summary = "A".repeat(60);
        for _ in 0..2 {
            resume.work_experience.push(WorkExperience::blank());
        }
        resume.education.push(Education::blank());
        for i in 0..5 {
            resume.skills.push(Skill {
                id: i.to_string(),
                name: format!("skill-{i}"),
                level: SkillLevel::Intermediate,
            });
        }
        resume.projects.push(Project::blank());
        assert_eq!(completeness_score(&resume), 100);
    }

    #[test]
    fn test_summary_must_exceed_fifty_characters() {
        let mut resume = Resume::skeleton();
        resume.personal_info.summary = "A".repeat(50);
        assert_eq!(completeness_score(&resume), 0);
        resume.personal_info.summary = "A".repeat(51);
        assert_eq!(completeness_score(&resume), 15);
    }

    #[test]
    fn test_work_entry_weights_stack() {
        let mut resume = Resume::skeleton();
        resume.work_experience.push(WorkExperience::blank());
        assert_eq!(completeness_score(&resume), 20);
        resume.work_experience.push(WorkExperience::blank());
        assert_eq!(completeness_score(&resume), 30);
    }

    #[test]
    fn test_four_skills_score_nothing() {
        let mut resume = Resume::skeleton();
        for i in 0..4 {
            resume.skills.push(Skill {
                id: i.to_string(),
                name: format!("skill-{i}"),
                level: SkillLevel::Beginner,
            });
        }
        assert_eq!(completeness_score(&resume), 0);
    }
}

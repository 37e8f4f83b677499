//! Prompt builders for the AI Text Assistant. Each operation sends resume or
//! job-description context and expects one plain-text reply (job-fit analysis
//! returns lightweight Markdown for human display only).

use serde_json::json;

use crate::models::resume::Resume;

/// Job-description context is capped before interpolation to keep prompts
/// bounded.
const JD_SNIPPET_CHARS: usize = 500;

pub const RESUME_WRITER_SYSTEM: &str =
    "You are an expert resume writer. You write professional, impactful, concise \
     text in active voice with strong action verbs.";

pub const ATS_ANALYST_SYSTEM: &str =
    "You are an ATS (Applicant Tracking System) expert who evaluates how well a \
     resume matches a job description.";

pub fn enhance_prompt(text: &str, context: &str) -> String {
    format!(
        "Rewrite the following {context} text to be more professional, impactful, \
         and concise. Use active voice and strong action verbs. Return ONLY the \
         rewritten text, no explanations.\n\nOriginal Text: \"{text}\""
    )
}

pub fn bullets_prompt(position: &str, company: &str) -> String {
    format!(
        "Generate 3-4 professional, achievement-oriented resume bullet points for \
         the position of \"{position}\" at \"{company}\". Focus on measurable \
         impact, leadership, and technical skills appropriate for this role. Use \
         active voice. Return only the bullet points as a single string, separated \
         by newlines. Do not include dashes or bullets, just the text lines."
    )
}

pub fn summary_prompt(resume: &Resume) -> String {
    let context = json!({
        "experience": resume.work_experience,
        "skills": resume.skills,
        "education": resume.education,
    });
    format!(
        "Based on the following resume data, write a compelling, professional \
         summary (max 3-4 sentences). Highlight key skills and years of experience \
         if applicable. Return ONLY the summary text.\n\nResume Data: {context}"
    )
}

pub fn job_fit_prompt(resume: &Resume, job_description: &str) -> String {
    let resume_json = serde_json::to_string(resume).unwrap_or_default();
    format!(
        "Compare the Resume against the Job Description.\n\n\
         1. Identify missing keywords.\n\
         2. Suggest specific improvements for the \"Work Experience\" section to \
         better align with the job.\n\
         3. Give a match score (0-100%).\n\n\
         Keep the response concise and formatted in Markdown.\n\n\
         Resume: {resume_json}\n\nJob Description: {job_description}"
    )
}

pub fn optimize_prompt(text: &str, job_description: &str) -> String {
    let snippet: String = job_description.chars().take(JD_SNIPPET_CHARS).collect();
    format!(
        "Rewrite the following resume content to specifically target the provided \
         Job Description. Incorporate relevant keywords from the job description \
         naturally. Maintain truthfulness but phrase achievements to match the job \
         requirements. Use active voice.\n\n\
         Job Description Snippet: {snippet}...\n\n\
         Original Content: \"{text}\"\n\n\
         Return ONLY the rewritten content."
    )
}

pub fn cover_letter_prompt(resume: &Resume, job_description: &str) -> String {
    let context = json!({
        "name": resume.personal_info.full_name,
        "experience": resume.work_experience,
        "skills": resume.skills,
    });
    format!(
        "Write a professional, persuasive cover letter based on the candidate's \
         resume and the job description.\n\n\
         Candidate Info: {context}\n\nJob Description: {job_description}\n\n\
         Rules:\n\
         1. Use a professional tone.\n\
         2. Highlight specific achievements from the resume that match the job \
         description.\n\
         3. Keep it under 300 words.\n\
         4. Return ONLY the body of the letter (no date/address header)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Skill, SkillLevel};

    #[test]
    fn test_enhance_prompt_embeds_text_and_context() {
        let prompt = enhance_prompt("Did stuff", "work experience");
        assert!(prompt.contains("Did stuff"));
        assert!(prompt.contains("work experience"));
    }

    #[test]
    fn test_bullets_prompt_embeds_role_and_company() {
        let prompt = bullets_prompt("Engineer", "Acme");
        assert!(prompt.contains("\"Engineer\""));
        assert!(prompt.contains("\"Acme\""));
    }

    #[test]
    fn test_summary_prompt_includes_skills_context() {
        let mut resume = Resume::skeleton();
        resume.skills.push(Skill {
            id: "s1".to_string(),
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
        });
        let prompt = summary_prompt(&resume);
        assert!(prompt.contains("Rust"));
    }

    #[test]
    fn test_optimize_prompt_caps_job_description() {
        let long_jd = "x".repeat(2000);
        let prompt = optimize_prompt("content", &long_jd);
        assert!(!prompt.contains(&"x".repeat(501)));
        assert!(prompt.contains(&"x".repeat(500)));
    }
}

//! Static role templates: pre-filled starting points applied onto the default
//! skeleton at creation time. Entry ids are regenerated per document so two
//! resumes created from the same role never share ids.

use serde::Serialize;
use uuid::Uuid;

use crate::models::resume::{Education, Project, Resume, Skill, SkillLevel, WorkExperience};

#[derive(Debug, Clone, Serialize)]
pub struct RoleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

pub const ROLES: &[RoleInfo] = &[
    RoleInfo {
        id: "software-engineer",
        name: "Software Engineer",
        category: "Technology",
    },
    RoleInfo {
        id: "data-analyst",
        name: "Data Analyst",
        category: "Data",
    },
    RoleInfo {
        id: "business-analyst",
        name: "Business Analyst",
        category: "Business",
    },
    RoleInfo {
        id: "nurse",
        name: "Registered Nurse",
        category: "Healthcare",
    },
    RoleInfo {
        id: "it-support",
        name: "IT Support Specialist",
        category: "Technology",
    },
    RoleInfo {
        id: "customer-support",
        name: "Customer Support",
        category: "Service",
    },
    RoleInfo {
        id: "qa-analyst",
        name: "QA Analyst",
        category: "Technology",
    },
    RoleInfo {
        id: "pharmacist",
        name: "Pharmacist",
        category: "Healthcare",
    },
    RoleInfo {
        id: "data-entry",
        name: "Data Entry Clerk",
        category: "Admin",
    },
];

struct ExperienceSeed {
    company: &'static str,
    position: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    current: bool,
    description: &'static str,
}

struct EducationSeed {
    school: &'static str,
    degree: &'static str,
    field: &'static str,
    start_date: &'static str,
    end_date: &'static str,
}

struct ProjectSeed {
    name: &'static str,
    description: &'static str,
    technologies: &'static str,
}

struct RoleSeed {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    skills: &'static [(&'static str, SkillLevel)],
    experience: &'static [ExperienceSeed],
    education: &'static [EducationSeed],
    projects: &'static [ProjectSeed],
}

const SEEDS: &[RoleSeed] = &[
    RoleSeed {
        id: "software-engineer",
        title: "Senior Software Engineer",
        summary: "Innovative Software Engineer with 6+ years of experience in full-stack \
development, cloud computing, and system architecture. Proven track record of delivering \
scalable web applications and leading agile teams. Expert in React, Node.js, and AWS.",
        skills: &[
            ("React.js", SkillLevel::Expert),
            ("Node.js", SkillLevel::Advanced),
            ("TypeScript", SkillLevel::Advanced),
            ("AWS (Lambda, S3, EC2)", SkillLevel::Intermediate),
            ("Docker & Kubernetes", SkillLevel::Intermediate),
            ("System Design", SkillLevel::Advanced),
        ],
        experience: &[
            ExperienceSeed {
                company: "TechFlow Solutions",
                position: "Senior Software Engineer",
                start_date: "2021-03-01",
                end_date: "",
                current: true,
                description: "Lead a team of 5 developers in rebuilding the legacy CRM system, \
resulting in a 40% performance improvement.\nArchitected and deployed microservices using \
Node.js and Docker on AWS.\nImplemented CI/CD pipelines reducing deployment time by 60%.",
            },
            ExperienceSeed {
                company: "Innovate Digital",
                position: "Software Developer",
                start_date: "2018-06-01",
                end_date: "2021-02-28",
                current: false,
                description: "Developed responsive frontend interfaces using React and Redux.\n\
Collaborated with UX designers to implement pixel-perfect designs.\nOptimized database queries \
in PostgreSQL, reducing load times by 25%.",
            },
        ],
        education: &[EducationSeed {
            school: "University of Technology",
            degree: "Bachelor of Science",
            field: "Computer Science",
            start_date: "2014-09-01",
            end_date: "2018-05-01",
        }],
        projects: &[ProjectSeed {
            name: "E-Commerce Platform",
            description: "Built a full-featured e-commerce platform handling 10k+ daily users.",
            technologies: "Next.js, Stripe, PostgreSQL",
        }],
    },
    RoleSeed {
        id: "data-analyst",
        title: "Data Analyst",
        summary: "Detail-oriented Data Analyst with expertise in data visualization, statistical \
analysis, and predictive modeling. Skilled in transforming complex datasets into actionable \
strategic insights. Proficient in Python, SQL, and Tableau.",
        skills: &[
            ("Python (Pandas, NumPy)", SkillLevel::Advanced),
            ("SQL", SkillLevel::Expert),
            ("Tableau / PowerBI", SkillLevel::Advanced),
            ("Statistical Analysis", SkillLevel::Advanced),
            ("Machine Learning Basics", SkillLevel::Intermediate),
        ],
        experience: &[ExperienceSeed {
            company: "Global Insights Corp",
            position: "Data Analyst",
            start_date: "2020-01-01",
            end_date: "",
            current: true,
            description: "Designed interactive dashboards in Tableau to track KPIs, saving the \
management team 10 hours of reporting time weekly.\nAnalyzed customer churn data to identify \
key risk factors, leading to a 15% retention strategy improvement.\nAutomated ETL processes \
using Python scripts.",
        }],
        education: &[EducationSeed {
            school: "State University",
            degree: "Bachelor of Science",
            field: "Statistics",
            start_date: "2015-09-01",
            end_date: "2019-05-01",
        }],
        projects: &[],
    },
    RoleSeed {
        id: "business-analyst",
        title: "Business Analyst",
        summary: "Strategic Business Analyst with 5+ years of experience bridging the gap \
between IT and business stakeholders. Expert in requirements gathering, process modeling, and \
agile methodologies. Committed to driving operational efficiency.",
        skills: &[
            ("Requirements Gathering", SkillLevel::Expert),
            ("Process Modeling (BPMN)", SkillLevel::Advanced),
            ("Agile & Scrum", SkillLevel::Advanced),
            ("JIRA / Confluence", SkillLevel::Advanced),
            ("SQL", SkillLevel::Intermediate),
        ],
        experience: &[ExperienceSeed {
            company: "FinTech Corp",
            position: "Senior Business Analyst",
            start_date: "2019-05-01",
            end_date: "",
            current: true,
            description: "Facilitated workshops to gather requirements for a new loan \
processing system.\nCreated detailed user stories and acceptance criteria for the development \
team.\nConducted UAT testing and user training sessions.",
        }],
        education: &[],
        projects: &[],
    },
    RoleSeed {
        id: "nurse",
        title: "Registered Nurse (RN)",
        summary: "Compassionate Registered Nurse with 7 years of experience in ER and ICU \
settings. Dedicated to providing high-quality patient care, advocating for patient needs, and \
maintaining strict safety protocols. Certified in ACLS and BLS.",
        skills: &[
            ("Patient Care", SkillLevel::Expert),
            ("Emergency Response", SkillLevel::Expert),
            ("Medication Administration", SkillLevel::Expert),
            ("Electronic Health Records (Epic)", SkillLevel::Advanced),
            ("Team Leadership", SkillLevel::Advanced),
        ],
        experience: &[ExperienceSeed {
            company: "City General Hospital",
            position: "ICU Nurse",
            start_date: "2018-08-01",
            end_date: "",
            current: true,
            description: "Monitor critical patients and administer life-saving treatments in a \
high-pressure environment.\nCollaborate with multidisciplinary teams to develop and implement \
patient care plans.\nMentor new nursing staff and students.",
        }],
        education: &[EducationSeed {
            school: "Medical College",
            degree: "Bachelor of Science",
            field: "Nursing",
            start_date: "2014-09-01",
            end_date: "2018-05-01",
        }],
        projects: &[],
    },
    RoleSeed {
        id: "it-support",
        title: "IT Support Specialist",
        summary: "Reliable IT Support Specialist with strong troubleshooting skills and a \
customer-centric approach. Experienced in hardware configuration, network troubleshooting, and \
software deployment. Proven ability to resolve tickets efficiently under SLAs.",
        skills: &[
            ("Hardware Troubleshooting", SkillLevel::Expert),
            ("Windows/MacOS/Linux", SkillLevel::Advanced),
            ("Active Directory", SkillLevel::Intermediate),
            ("Office 365 Admin", SkillLevel::Intermediate),
            ("Network Fundamentals", SkillLevel::Intermediate),
        ],
        experience: &[ExperienceSeed {
            company: "TechServices Inc.",
            position: "IT Helpdesk Technician",
            start_date: "2020-02-01",
            end_date: "",
            current: true,
            description: "Resolved 50+ support tickets daily regarding hardware, software, and \
network connectivity.\nManaged user accounts and permissions in Active Directory.\nDeployed \
and reimaged workstations for new hires.",
        }],
        education: &[],
        projects: &[],
    },
    RoleSeed {
        id: "customer-support",
        title: "Customer Support Representative",
        summary: "Empathetic Customer Support Professional committed to delivering exceptional \
service and resolving complex issues. Strong communication skills with a track record of \
maintaining high CSAT scores. Experienced with Zendesk and Salesforce.",
        skills: &[
            ("Conflict Resolution", SkillLevel::Expert),
            ("CRM Software (Zendesk)", SkillLevel::Advanced),
            ("Written Communication", SkillLevel::Expert),
            ("Technical Support", SkillLevel::Intermediate),
        ],
        experience: &[ExperienceSeed {
            company: "SaaS Startup",
            position: "Customer Success Specialist",
            start_date: "2021-01-01",
            end_date: "",
            current: true,
            description: "Handled inbound inquiries via chat, email, and phone, maintaining a \
98% satisfaction rating.\nCreated knowledge base articles to reduce ticket volume.\n\
Collaborated with product teams to escalate and resolve bugs.",
        }],
        education: &[],
        projects: &[],
    },
    RoleSeed {
        id: "qa-analyst",
        title: "Quality Assurance Analyst",
        summary: "Detail-oriented QA Analyst with experience in manual and automated testing. \
Skilled in designing test plans, identifying bugs, and ensuring software quality. Proficient \
in Selenium, Jira, and SQL.",
        skills: &[
            ("Manual Testing", SkillLevel::Expert),
            ("Test Automation (Selenium)", SkillLevel::Intermediate),
            ("JIRA / Bug Tracking", SkillLevel::Advanced),
            ("API Testing (Postman)", SkillLevel::Intermediate),
        ],
        experience: &[ExperienceSeed {
            company: "SoftSys",
            position: "QA Engineer",
            start_date: "2019-06-01",
            end_date: "",
            current: true,
            description: "Executed test cases for web and mobile applications, identifying \
critical defects prior to release.\nDeveloped automated test scripts using Selenium WebDriver, \
reducing regression testing time by 30%.\nParticipated in daily stand-ups and sprint planning.",
        }],
        education: &[],
        projects: &[],
    },
    RoleSeed {
        id: "pharmacist",
        title: "Clinical Pharmacist",
        summary: "Licensed Pharmacist with extensive knowledge of pharmaceuticals, drug \
interactions, and patient counseling. Committed to ensuring medication safety and accuracy. \
Strong attention to detail and ability to work in fast-paced environments.",
        skills: &[
            ("Medication Dispensing", SkillLevel::Expert),
            ("Patient Counseling", SkillLevel::Expert),
            ("Inventory Management", SkillLevel::Advanced),
            ("Pharmacy Software", SkillLevel::Advanced),
        ],
        experience: &[ExperienceSeed {
            company: "HealthPlus Pharmacy",
            position: "Staff Pharmacist",
            start_date: "2018-01-01",
            end_date: "",
            current: true,
            description: "Review prescriptions for accuracy and potential drug interactions.\n\
Counsel patients on proper medication usage and side effects.\nManage inventory and order \
controlled substances.",
        }],
        education: &[EducationSeed {
            school: "School of Pharmacy",
            degree: "Doctor of Pharmacy (Pharm.D.)",
            field: "Pharmacy",
            start_date: "2012-09-01",
            end_date: "2016-05-01",
        }],
        projects: &[],
    },
    RoleSeed {
        id: "data-entry",
        title: "Data Entry Specialist",
        summary: "Efficient Data Entry Specialist with excellent typing speed (80+ WPM) and \
accuracy. Proficient in MS Excel and database management. Highly organized and capable of \
handling large volumes of data with confidentiality.",
        skills: &[
            ("Fast Typing (80 WPM)", SkillLevel::Expert),
            ("Microsoft Excel", SkillLevel::Advanced),
            ("Data Verification", SkillLevel::Advanced),
            ("Attention to Detail", SkillLevel::Expert),
        ],
        experience: &[ExperienceSeed {
            company: "Logistics Co.",
            position: "Data Entry Clerk",
            start_date: "2020-01-01",
            end_date: "",
            current: true,
            description: "Entered shipping and inventory data into the ERP system with 99.9% \
accuracy.\nVerified data integrity by comparing source documents with system records.\n\
Generated weekly reports for management.",
        }],
        education: &[],
        projects: &[],
    },
];

/// Copies the role's pre-filled fields onto `resume`. Returns false when the
/// role id is unknown, leaving the document untouched.
pub fn apply_role(role_id: &str, resume: &mut Resume) -> bool {
    let Some(seed) = SEEDS.iter().find(|s| s.id == role_id) else {
        return false;
    };
    resume.title = seed.title.to_string();
    resume.personal_info.summary = seed.summary.to_string();
    resume.skills = seed
        .skills
        .iter()
        .map(|(name, level)| Skill {
            id: fresh_id(),
            name: name.to_string(),
            level: *level,
        })
        .collect();
    resume.work_experience = seed
        .experience
        .iter()
        .map(|e| WorkExperience {
            id: fresh_id(),
            company: e.company.to_string(),
            position: e.position.to_string(),
            start_date: e.start_date.to_string(),
            end_date: e.end_date.to_string(),
            current: e.current,
            description: e.description.to_string(),
        })
        .collect();
    resume.education = seed
        .education
        .iter()
        .map(|e| Education {
            id: fresh_id(),
            school: e.school.to_string(),
            degree: e.degree.to_string(),
            field: e.field.to_string(),
            start_date: e.start_date.to_string(),
            end_date: e.end_date.to_string(),
            current: false,
        })
        .collect();
    resume.projects = seed
        .projects
        .iter()
        .map(|p| Project {
            id: fresh_id(),
            name: p.name.to_string(),
            description: p.description.to_string(),
            link: None,
            technologies: Some(p.technologies.to_string()),
        })
        .collect();
    true
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_known_role_fills_document() {
        let mut resume = Resume::skeleton();
        assert!(apply_role("software-engineer", &mut resume));
        assert_eq!(resume.title, "Senior Software Engineer");
        assert_eq!(resume.work_experience.len(), 2);
        assert!(resume.work_experience[0].current);
        assert_eq!(resume.skills.len(), 6);
        assert_eq!(resume.projects.len(), 1);
    }

    #[test]
    fn test_apply_unknown_role_is_a_no_op() {
        let mut resume = Resume::skeleton();
        let before = resume.clone();
        assert!(!apply_role("astronaut", &mut resume));
        assert_eq!(resume, before);
    }

    #[test]
    fn test_role_entry_ids_are_fresh_per_application() {
        let mut a = Resume::skeleton();
        let mut b = Resume::skeleton();
        apply_role("data-analyst", &mut a);
        apply_role("data-analyst", &mut b);
        assert_ne!(a.work_experience[0].id, b.work_experience[0].id);
        assert_ne!(a.skills[0].id, b.skills[0].id);
    }

    #[test]
    fn test_every_catalog_role_applies() {
        for role in ROLES {
            let mut resume = Resume::skeleton();
            assert!(apply_role(role.id, &mut resume), "role {} has no seed", role.id);
            assert_ne!(resume.title, "Untitled Resume");
            assert!(!resume.personal_info.summary.is_empty());
            assert!(!resume.skills.is_empty());
            assert!(!resume.work_experience.is_empty());
        }
    }

    #[test]
    fn test_catalog_and_seeds_agree() {
        assert_eq!(ROLES.len(), SEEDS.len());
        for seed in SEEDS {
            assert!(ROLES.iter().any(|r| r.id == seed.id), "seed {} not listed", seed.id);
        }
    }

    #[test]
    fn test_healthcare_role_fills_education() {
        let mut resume = Resume::skeleton();
        assert!(apply_role("pharmacist", &mut resume));
        assert_eq!(resume.title, "Clinical Pharmacist");
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].degree, "Doctor of Pharmacy (Pharm.D.)");
        assert!(!resume.education[0].current);
    }
}

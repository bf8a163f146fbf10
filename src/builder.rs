//! Document builder: flattens a raw profile JSON into the document store.
//!
//! The transformation is a pure function of the profile — rerunning the
//! builder regenerates every document and overwrites the store whole; there
//! is no merge or incremental mode. Every profile field is optional and
//! defaults to an empty string or list, so a sparse profile never fails.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::models::{DocType, Document};
use crate::store;

/// Framework names appended to the skills document alongside the
/// profile's programming languages.
const FRAMEWORKS: &str = "Laravel, NodeJS, Pandas, NumPy, scikit-learn";

/// Raw profile record as authored by hand, before flattening.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub interview_preparation: InterviewPreparation,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub situation: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub action: Vec<String>,
    #[serde(default)]
    pub result: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub programming_languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Language {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct InterviewPreparation {
    #[serde(default)]
    pub screening_call: ScreeningCall,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ScreeningCall {
    #[serde(default)]
    pub elevator_pitch: String,
    #[serde(default)]
    pub top_questions_to_expect: Vec<String>,
}

/// Flatten a profile into the full document list.
///
/// Deterministic: the same profile always yields the same documents in the
/// same order (summary, experience entries, projects, skills, education
/// entries, interview prep).
pub fn build_documents(profile: &Profile) -> Vec<Document> {
    let mut documents = Vec::new();

    documents.push(Document {
        id: "summary-1".to_string(),
        title: "Professional Summary".to_string(),
        doc_type: DocType::Summary,
        content: format!("{} - {}. {}", profile.name, profile.title, profile.summary),
        tags: vec!["summary".to_string(), "profile".to_string()],
    });

    for (i, exp) in profile.experience.iter().enumerate() {
        let achievements = exp.achievements.join(" ");
        documents.push(Document {
            id: format!("experience-{}", i + 1),
            title: format!("{} - {}", exp.role, exp.company),
            doc_type: DocType::Experience,
            content: format!(
                "{} at {} ({} - {}). {}",
                exp.role, exp.company, exp.start_date, exp.end_date, achievements
            ),
            tags: vec!["experience".to_string(), "work".to_string()],
        });
    }

    for (i, proj) in profile.projects.iter().enumerate() {
        let actions = proj.action.join(" ");
        let results = proj.result.join(" ");
        let mut tags = vec!["project".to_string()];
        tags.extend(proj.tech_stack.iter().take(3).cloned());
        documents.push(Document {
            id: format!("project-{}", i + 1),
            title: proj.name.clone(),
            doc_type: DocType::Project,
            content: format!(
                "{}. {} {} Actions: {} Results: {}",
                proj.name, proj.situation, proj.task, actions, results
            ),
            tags,
        });
    }

    let languages = profile
        .skills
        .programming_languages
        .iter()
        .map(|lang| lang.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    documents.push(Document {
        id: "skills-1".to_string(),
        title: "Technical Skills".to_string(),
        doc_type: DocType::Skills,
        content: format!(
            "Programming skills: {}. Frameworks: {}",
            languages, FRAMEWORKS
        ),
        tags: vec!["skills".to_string(), "technical".to_string()],
    });

    for (i, edu) in profile.education.iter().enumerate() {
        documents.push(Document {
            id: format!("education-{}", i + 1),
            title: format!("{} - {}", edu.degree, edu.institution),
            doc_type: DocType::Education,
            content: format!(
                "{} from {}. {} {}",
                edu.degree, edu.institution, edu.specialization, edu.status
            ),
            tags: vec!["education".to_string()],
        });
    }

    let screening = &profile.interview_preparation.screening_call;
    documents.push(Document {
        id: "interview-prep-1".to_string(),
        title: "Interview Preparation".to_string(),
        doc_type: DocType::Interview,
        content: format!(
            "Elevator pitch: {} Questions to expect: {}",
            screening.elevator_pitch,
            screening.top_questions_to_expect.join(" ")
        ),
        tags: vec!["interview".to_string(), "preparation".to_string()],
    });

    documents
}

/// Run the build command: read the profile, flatten it, overwrite the store.
pub fn run_build(config: &Config) -> Result<()> {
    let profile_path = &config.profile.path;
    let content = std::fs::read_to_string(profile_path)
        .with_context(|| format!("Failed to read profile: {}", profile_path.display()))?;

    let profile: Profile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse profile: {}", profile_path.display()))?;

    let documents = build_documents(&profile);
    store::save_store(&config.store.path, &documents)?;

    let count = |t: DocType| documents.iter().filter(|d| d.doc_type == t).count();
    println!(
        "Created {} documents in {}",
        documents.len(),
        config.store.path.display()
    );
    println!("  - {} experience entries", count(DocType::Experience));
    println!("  - {} projects", count(DocType::Project));
    println!("  - {} education entries", count(DocType::Education));
    println!("  - Plus summary, skills, and interview prep");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        serde_json::from_str(
            r#"{
                "name": "Catherine Dalafu",
                "title": "Full-Stack Developer",
                "summary": "IT student and developer.",
                "experience": [
                    {
                        "role": "Developer",
                        "company": "Acme",
                        "start_date": "2023-01",
                        "end_date": "2024-06",
                        "achievements": ["Led team", "Shipped features"]
                    }
                ],
                "projects": [
                    {
                        "name": "Event Management",
                        "situation": "Campus events were manual.",
                        "task": "Automate registration.",
                        "action": ["Built the backend"],
                        "result": ["Cut processing time"],
                        "tech_stack": ["Laravel", "MySQL", "Vue", "Redis"]
                    }
                ],
                "skills": {
                    "programming_languages": [{"name": "Python"}, {"name": "PHP"}]
                },
                "education": [
                    {
                        "degree": "BS Information Technology",
                        "institution": "SPUP",
                        "specialization": "Web Development",
                        "status": "Dean's Lister"
                    }
                ],
                "interview_preparation": {
                    "screening_call": {
                        "elevator_pitch": "I build web systems.",
                        "top_questions_to_expect": ["Tell me about yourself"]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_experience_title_and_content() {
        let documents = build_documents(&sample_profile());
        let exp = documents
            .iter()
            .find(|d| d.doc_type == DocType::Experience)
            .unwrap();
        assert_eq!(exp.title, "Developer - Acme");
        assert!(exp.content.contains("Led team"));
        assert!(exp.content.contains("Developer at Acme (2023-01 - 2024-06)"));
    }

    #[test]
    fn test_empty_experience_produces_no_experience_docs() {
        let profile: Profile = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        let documents = build_documents(&profile);
        assert!(!documents.iter().any(|d| d.doc_type == DocType::Experience));
        // Summary, skills, and interview docs are always emitted.
        assert_eq!(documents.len(), 3);
    }

    #[test]
    fn test_project_tags_capped_at_three_stack_entries() {
        let documents = build_documents(&sample_profile());
        let proj = documents
            .iter()
            .find(|d| d.doc_type == DocType::Project)
            .unwrap();
        assert_eq!(proj.tags, vec!["project", "Laravel", "MySQL", "Vue"]);
    }

    #[test]
    fn test_skills_document_joins_languages_and_frameworks() {
        let documents = build_documents(&sample_profile());
        let skills = documents
            .iter()
            .find(|d| d.doc_type == DocType::Skills)
            .unwrap();
        assert_eq!(
            skills.content,
            "Programming skills: Python, PHP. Frameworks: Laravel, NodeJS, Pandas, NumPy, scikit-learn"
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let profile = sample_profile();
        let first = build_documents(&profile);
        let second = build_documents(&profile);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.content, b.content);
        }
    }

    #[test]
    fn test_missing_sections_never_fail() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        let documents = build_documents(&profile);
        let interview = documents
            .iter()
            .find(|d| d.doc_type == DocType::Interview)
            .unwrap();
        assert!(interview.content.starts_with("Elevator pitch:"));
    }

    #[test]
    fn test_document_ids_are_sequential() {
        let mut profile = sample_profile();
        profile.experience.push(Experience {
            role: "Intern".to_string(),
            company: "Beta".to_string(),
            ..Default::default()
        });
        let documents = build_documents(&profile);
        let ids: Vec<&str> = documents
            .iter()
            .filter(|d| d.doc_type == DocType::Experience)
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["experience-1", "experience-2"]);
    }
}

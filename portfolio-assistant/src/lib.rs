//! Profile JSON to `ChatKnowledge` converter with canned response rules.

use chrono::{DateTime, Utc};
use portfolio_core::{Profile, PortfolioError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parse a profile document from a JSON string. Missing optional fields and
/// absent arrays deserialize to their empty defaults.
pub fn profile_from_str(profile_json: &str) -> Result<Profile, PortfolioError> {
    let value: Value =
        serde_json::from_str(profile_json).map_err(|err| PortfolioError::Parse(err.to_string()))?;
    profile_from_value(&value)
}

/// Parse a profile document from a `serde_json::Value`.
pub fn profile_from_value(value: &Value) -> Result<Profile, PortfolioError> {
    if !value.is_object() {
        return Err(PortfolioError::MissingData);
    }
    serde_json::from_value(value.clone()).map_err(|err| PortfolioError::Parse(err.to_string()))
}

/// Build the canned-response knowledge base from a JSON string.
pub fn build_knowledge_str(profile_json: &str) -> Result<ChatKnowledge, PortfolioError> {
    Ok(ChatKnowledge::from_profile(&profile_from_str(profile_json)?))
}

/// Build the canned-response knowledge base from a `serde_json::Value`.
pub fn build_knowledge_value(value: &Value) -> Result<ChatKnowledge, PortfolioError> {
    Ok(ChatKnowledge::from_profile(&profile_from_value(value)?))
}

/// Static strings pre-joined from the profile record. Every canned response
/// is a pure function of these fields and the input text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatKnowledge {
    pub built_at: DateTime<Utc>,
    pub identity: String,
    pub skills: String,
    pub projects: String,
    pub experience: String,
    pub education: String,
    pub contact: String,
}

impl ChatKnowledge {
    pub fn from_profile(profile: &Profile) -> Self {
        let skills = profile
            .skills
            .iter()
            .chain(profile.tools.iter())
            .map(|skill| format!("{} ({}%)", skill.name, skill.level))
            .collect::<Vec<_>>()
            .join(", ");

        let projects = profile
            .projects
            .iter()
            .map(|project| format!("{}: {}", project.title, project.description))
            .collect::<Vec<_>>()
            .join(". ");

        let experience = profile
            .experience
            .iter()
            .map(|entry| {
                format!(
                    "{} at {} ({}): {}",
                    entry.role, entry.company, entry.period, entry.description
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        let education = profile
            .education
            .iter()
            .map(|entry| format!("{} at {} ({})", entry.degree, entry.school, entry.period))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            built_at: Utc::now(),
            identity: format!(
                "{} is a {} based in {}. {}",
                profile.name, profile.title, profile.location, profile.bio
            ),
            skills,
            projects,
            experience,
            education,
            contact: format!("Email: {}, Phone: {}", profile.email, profile.phone),
        }
    }
}

/// Topic a rule resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Skills,
    Projects,
    Experience,
    Contact,
    Education,
    About,
    Greeting,
}

struct ResponseRule {
    topic: Topic,
    keywords: &'static [&'static str],
    // Greeting words are too short for substring matching ("hi" is inside
    // "anything"), so that rule matches whole words only.
    whole_word: bool,
}

impl ResponseRule {
    fn matches(&self, lowered: &str) -> bool {
        if self.whole_word {
            lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| self.keywords.contains(&word))
        } else {
            self.keywords.iter().any(|keyword| lowered.contains(keyword))
        }
    }
}

/// Ordered rule list; the first match wins.
const RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: Topic::Skills,
        keywords: &["skill", "technology", "technologies", "tools"],
        whole_word: false,
    },
    ResponseRule {
        topic: Topic::Projects,
        keywords: &["project"],
        whole_word: false,
    },
    ResponseRule {
        topic: Topic::Experience,
        keywords: &["experience", "work"],
        whole_word: false,
    },
    ResponseRule {
        topic: Topic::Contact,
        keywords: &["contact", "hire", "email", "reach"],
        whole_word: false,
    },
    ResponseRule {
        topic: Topic::Education,
        keywords: &["education", "study"],
        whole_word: false,
    },
    ResponseRule {
        topic: Topic::About,
        keywords: &["who", "about"],
        whole_word: false,
    },
    ResponseRule {
        topic: Topic::Greeting,
        keywords: &["hello", "hi", "hey"],
        whole_word: true,
    },
];

/// Returned verbatim when no rule matches.
pub const FALLBACK_RESPONSE: &str =
    "Ask me about skills, projects, experience, education, or contact info. What would you like to know?";

/// Assistant message the transcript is seeded with.
pub fn greeting() -> &'static str {
    "Hi! I'm an assistant trained on this portfolio. Ask me anything about the owner's skills, experience, or projects!"
}

/// Answer free-text input with the first matching canned response, falling
/// back to the default prompt. Matching is case-insensitive.
pub fn respond(knowledge: &ChatKnowledge, input: &str) -> String {
    let lowered = input.to_lowercase();
    for rule in RULES {
        if rule.matches(&lowered) {
            return response_for(rule.topic, knowledge);
        }
    }
    FALLBACK_RESPONSE.to_string()
}

fn response_for(topic: Topic, knowledge: &ChatKnowledge) -> String {
    match topic {
        Topic::Skills => format!("Skills & tools: {}.", knowledge.skills),
        Topic::Projects => format!("Key projects: {}.", knowledge.projects),
        Topic::Experience => format!("Professional experience: {}", knowledge.experience),
        Topic::Contact => format!(
            "You can reach me at {}. Open to new opportunities and collaborations.",
            knowledge.contact
        ),
        Topic::Education => format!("Education: {}.", knowledge.education),
        Topic::About => knowledge.identity.clone(),
        Topic::Greeting => {
            "Hello! Ask me about the owner's skills, projects, experience, education, or contact info."
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{Education, Experience, Project, Skill};

    fn sample_profile() -> Profile {
        Profile {
            name: "Minh Khoa".into(),
            title: "Frontend Developer".into(),
            bio: "Sculpting digital experiences with care.".into(),
            location: "Ho Chi Minh City".into(),
            email: "khoa@example.com".into(),
            phone: "+84 90 123 4567".into(),
            skills: vec![
                Skill {
                    name: "JavaScript".into(),
                    level: 90,
                },
                Skill {
                    name: "React".into(),
                    level: 88,
                },
            ],
            tools: vec![Skill {
                name: "Redux".into(),
                level: 85,
            }],
            projects: vec![Project {
                title: "Shoply".into(),
                description: "Storefront with cart and checkout".into(),
                ..Project::default()
            }],
            experience: vec![Experience {
                role: "Frontend Developer".into(),
                company: "Acme Studio".into(),
                period: "2022 - 2025".into(),
                description: "Built customer facing web apps.".into(),
            }],
            education: vec![Education {
                degree: "BSc Computer Science".into(),
                school: "HCMUS".into(),
                period: "2016 - 2020".into(),
                description: "Graduated with distinction.".into(),
            }],
            ..Profile::default()
        }
    }

    #[test]
    fn skills_question_lists_skills_and_tools() {
        let knowledge = ChatKnowledge::from_profile(&sample_profile());
        let answer = respond(&knowledge, "What are your skills?");
        assert!(answer.contains("JavaScript (90%)"));
        assert!(answer.contains("React (88%)"));
        assert!(answer.contains("Redux (85%)"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let knowledge = ChatKnowledge::from_profile(&sample_profile());
        assert_eq!(respond(&knowledge, "SKILLS"), respond(&knowledge, "skills"));
    }

    #[test]
    fn unmatched_input_returns_exact_fallback() {
        let knowledge = ChatKnowledge::from_profile(&sample_profile());
        assert_eq!(
            respond(&knowledge, "tell me something unrelated"),
            FALLBACK_RESPONSE
        );
    }

    #[test]
    fn rule_order_prefers_skills_over_projects() {
        let knowledge = ChatKnowledge::from_profile(&sample_profile());
        let answer = respond(&knowledge, "what technologies do your projects use?");
        assert!(answer.starts_with("Skills & tools:"));
    }

    #[test]
    fn greeting_matches_whole_words_only() {
        let knowledge = ChatKnowledge::from_profile(&sample_profile());
        assert!(respond(&knowledge, "hi").starts_with("Hello!"));
        assert!(respond(&knowledge, "Hey there").starts_with("Hello!"));
        // "anything" chứa "hi" nhưng không phải lời chào.
        assert_eq!(respond(&knowledge, "anything"), FALLBACK_RESPONSE);
    }

    #[test]
    fn contact_rule_covers_hiring_questions() {
        let knowledge = ChatKnowledge::from_profile(&sample_profile());
        let answer = respond(&knowledge, "How can I hire you?");
        assert!(answer.contains("khoa@example.com"));
        assert!(answer.contains("+84 90 123 4567"));
    }

    #[test]
    fn about_rule_returns_identity() {
        let knowledge = ChatKnowledge::from_profile(&sample_profile());
        let answer = respond(&knowledge, "who are you");
        assert_eq!(
            answer,
            "Minh Khoa is a Frontend Developer based in Ho Chi Minh City. \
             Sculpting digital experiences with care."
        );
    }

    #[test]
    fn profile_from_value_rejects_non_object() {
        let err = profile_from_value(&Value::String("not a profile".into()))
            .expect_err("chuỗi trần không phải hồ sơ");
        assert!(matches!(err, PortfolioError::MissingData));
    }

    #[test]
    fn profile_parses_with_missing_arrays() {
        let profile = profile_from_str(r#"{"name": "An"}"#).expect("hồ sơ tối giản hợp lệ");
        assert_eq!(profile.name, "An");
        assert!(profile.skills.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.socials.github.is_none());
    }

    #[test]
    fn knowledge_from_empty_profile_degrades_gracefully() {
        let knowledge = ChatKnowledge::from_profile(&Profile::default());
        assert!(knowledge.skills.is_empty());
        assert!(knowledge.projects.is_empty());
        assert_eq!(
            respond(&knowledge, "nothing recognizable here"),
            FALLBACK_RESPONSE
        );
    }
}

//! Content assistant: pass-through to an external generative text provider.
//!
//! The assistant performs no local inference, caching, or retries. A task
//! goes in, text comes out; provider failures surface as
//! [`AssistantError`] and map to 502 at the handler boundary.

mod client;
mod error;

use serde::{Deserialize, Serialize};

pub use client::AssistantClient;
pub use error::AssistantError;

/// What the caller wants the assistant to do with the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Draft new content from a brief.
    Draft,
    /// Translate the input into the target language.
    Translate,
    /// Extract checkable factual claims, one per line.
    Extract,
    /// Improve tone and clarity without changing meaning.
    Improve,
}

/// Optional knobs for a generation task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateParams {
    /// Intended audience (e.g., "CTOs at mid-size retailers").
    #[serde(default)]
    pub audience: Option<String>,
    /// Desired tone (e.g., "confident, plain-spoken").
    #[serde(default)]
    pub tone: Option<String>,
    /// Target language for `Translate` tasks.
    #[serde(default)]
    pub language: Option<String>,
}

/// A content generation task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTask {
    /// What to do.
    pub kind: TaskKind,
    /// The input text (brief, source copy, or draft).
    pub input: String,
    /// Optional knobs.
    #[serde(default)]
    pub params: GenerateParams,
}

impl GenerateTask {
    /// Render the system prompt for this task.
    #[must_use]
    pub fn system_prompt(&self) -> String {
        let mut prompt = match self.kind {
            TaskKind::Draft => {
                "You are a marketing copywriter. Draft content from the brief the user \
                 provides. Respond with the content only, no preamble."
                    .to_string()
            }
            TaskKind::Translate => {
                let language = self
                    .params
                    .language
                    .as_deref()
                    .unwrap_or("English");
                format!(
                    "Translate the user's text into {language}. Preserve formatting. \
                     Respond with the translation only."
                )
            }
            TaskKind::Extract => {
                "Extract the checkable factual claims from the user's text. \
                 Respond with one claim per line and nothing else."
                    .to_string()
            }
            TaskKind::Improve => {
                "Improve the clarity and flow of the user's text without changing its \
                 meaning. Respond with the revised text only."
                    .to_string()
            }
        };

        if let Some(audience) = &self.params.audience {
            prompt.push_str(&format!(" The audience is: {audience}."));
        }
        if let Some(tone) = &self.params.tone {
            prompt.push_str(&format!(" Use this tone: {tone}."));
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_translate_defaults_to_english() {
        let task = GenerateTask {
            kind: TaskKind::Translate,
            input: "Hallo Welt".to_string(),
            params: GenerateParams::default(),
        };
        assert!(task.system_prompt().contains("into English"));
    }

    #[test]
    fn test_system_prompt_translate_uses_language_param() {
        let task = GenerateTask {
            kind: TaskKind::Translate,
            input: "Hello world".to_string(),
            params: GenerateParams {
                language: Some("German".to_string()),
                ..GenerateParams::default()
            },
        };
        assert!(task.system_prompt().contains("into German"));
    }

    #[test]
    fn test_system_prompt_includes_audience_and_tone() {
        let task = GenerateTask {
            kind: TaskKind::Draft,
            input: "Announce the new logo".to_string(),
            params: GenerateParams {
                audience: Some("designers".to_string()),
                tone: Some("playful".to_string()),
                language: None,
            },
        };
        let prompt = task.system_prompt();
        assert!(prompt.contains("designers"));
        assert!(prompt.contains("playful"));
    }

    #[test]
    fn test_task_kind_serde_lowercase() {
        let json = serde_json::to_string(&TaskKind::Extract).expect("serialize");
        assert_eq!(json, "\"extract\"");
        let kind: TaskKind = serde_json::from_str("\"improve\"").expect("deserialize");
        assert_eq!(kind, TaskKind::Improve);
    }
}

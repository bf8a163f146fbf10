//! Core data models shared by every `twin` command.
//!
//! A [`Document`] is one indexed unit of profile information: a
//! paragraph-scale fact with a type, a title, free-text content, and tags.
//! The builder produces them, the store persists them, and both search
//! variants rank them. [`ChatTurn`] is both the in-memory conversation
//! record and the wire message shape sent to the completion API.

use serde::{Deserialize, Serialize};

/// Category of a profile document.
///
/// Serialized lowercase in the store file (`"type": "experience"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Summary,
    Experience,
    Project,
    Skills,
    Education,
    Interview,
}

impl DocType {
    /// Lowercase name as it appears in the store file.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Summary => "summary",
            DocType::Experience => "experience",
            DocType::Project => "project",
            DocType::Skills => "skills",
            DocType::Education => "education",
            DocType::Interview => "interview",
        }
    }

    /// Uppercase label used in rendered context blocks (`[EXPERIENCE]`).
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indexed unit of profile information.
///
/// Immutable after creation within a process. `content` may be absent in
/// the store file; it degrades scoring to zero rather than failing the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: DocType,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The persisted document collection: `{"documents": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStore {
    pub documents: Vec<Document>,
}

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One role-tagged message, kept in session history and sent on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

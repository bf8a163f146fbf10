//! Loading and saving the document store file.
//!
//! The store is a single flat JSON file, `{"documents": [...]}`. Chat and
//! query read it to completion once per process; the builder overwrites it
//! whole. There is no locking and no incremental mode.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

use crate::models::{Document, DocumentStore};

/// In-memory view of the store, read-only for its owner's lifetime.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    documents: Vec<Document>,
}

impl ProfileStore {
    /// Load the store from a JSON file.
    ///
    /// A missing or malformed file is an error; callers that must keep
    /// running without a profile (the chat loop) handle it by degrading
    /// rather than by retrying.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document store: {}", path.display()))?;

        let store: DocumentStore = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse document store: {}", path.display()))?;

        Ok(Self {
            documents: store.documents,
        })
    }

    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Per-type document counts, in sorted type order for stable output.
    pub fn type_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for doc in &self.documents {
            *counts.entry(doc.doc_type.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Overwrite the store file with the given documents.
///
/// Used only by the builder; pretty-printed so the file stays hand-readable.
pub fn save_store(path: &Path, documents: &[Document]) -> Result<()> {
    let store = DocumentStore {
        documents: documents.to_vec(),
    };
    let json = serde_json::to_string_pretty(&store)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write document store: {}", path.display()))?;
    Ok(())
}

//! Strategy source port
//!
//! Defines the interface for loading strategy documents from wherever they
//! are stored (files, embedded fixtures, ...).

use disjunct_domain::StrategyDocument;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while loading a strategy document
#[derive(Error, Debug)]
pub enum StrategySourceError {
    #[error("Strategy document not found: {0}")]
    NotFound(String),

    #[error("Failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {location}: {message}")]
    Parse { location: String, message: String },
}

/// Port for loading strategy documents
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait StrategySourcePort: Send + Sync {
    /// Load the document stored at `location`
    fn load(&self, location: &str) -> Result<StrategyDocument, StrategySourceError>;
}

/// Strategy source backed by documents held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStrategySource {
    documents: HashMap<String, StrategyDocument>,
}

impl InMemoryStrategySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under `location`
    pub fn with_document(
        mut self,
        location: impl Into<String>,
        document: StrategyDocument,
    ) -> Self {
        self.documents.insert(location.into(), document);
        self
    }
}

impl StrategySourcePort for InMemoryStrategySource {
    fn load(&self, location: &str) -> Result<StrategyDocument, StrategySourceError> {
        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| StrategySourceError::NotFound(location.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disjunct_domain::StrategyNode;

    #[test]
    fn test_in_memory_source_returns_registered_document() {
        let doc = StrategyDocument {
            strategy: StrategyNode::Nothing,
        };
        let source = InMemoryStrategySource::new().with_document("empty", doc.clone());
        assert_eq!(source.load("empty").unwrap(), doc);
    }

    #[test]
    fn test_in_memory_source_missing_document() {
        let source = InMemoryStrategySource::new();
        let err = source.load("missing").unwrap_err();
        assert!(matches!(err, StrategySourceError::NotFound(ref l) if l == "missing"));
        assert_eq!(err.to_string(), "Strategy document not found: missing");
    }
}

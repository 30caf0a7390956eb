//! File system strategy source
//!
//! Provides [`FileStrategySource`], the [`StrategySourcePort`] adapter that
//! reads strategy documents from disk.
//!
//! # Formats
//!
//! The format is chosen by extension:
//!
//! - `.json` - parsed as JSON
//! - `.toml` - parsed as TOML
//! - anything else - TOML first, then JSON

use disjunct_application::{StrategySourceError, StrategySourcePort};
use disjunct_domain::StrategyDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Document formats understood by [`FileStrategySource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> Result<StrategyDocument, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Strategy source that reads documents from the local file system
///
/// Relative locations are resolved against `base_dir` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileStrategySource {
    base_dir: Option<PathBuf>,
}

impl FileStrategySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locations against `dir`
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn resolve(&self, location: &str) -> PathBuf {
        let path = PathBuf::from(location);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        }
    }
}

impl StrategySourcePort for FileStrategySource {
    fn load(&self, location: &str) -> Result<StrategyDocument, StrategySourceError> {
        let path = self.resolve(location);
        if !path.is_file() {
            return Err(StrategySourceError::NotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(&path).map_err(|source| StrategySourceError::Io {
            location: path.display().to_string(),
            source,
        })?;

        let parsed = match DocumentFormat::from_path(&path) {
            Some(format) => {
                debug!("Parsing {} as {:?}", path.display(), format);
                format.parse(&content)
            }
            None => {
                debug!("No known extension on {}, trying TOML then JSON", path.display());
                DocumentFormat::Toml
                    .parse(&content)
                    .or_else(|_| DocumentFormat::Json.parse(&content))
            }
        };

        parsed.map_err(|message| StrategySourceError::Parse {
            location: path.display().to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disjunct_domain::StrategyNode;

    const NESTED_JSON: &str = r#"{
        "strategy": {
            "kind": "one_of",
            "children": [
                {"kind": "one_of", "children": [
                    {"kind": "just", "value": 1},
                    {"kind": "just", "value": 2}
                ]},
                {"kind": "just", "value": 3}
            ]
        }
    }"#;

    const NESTED_TOML: &str = r#"
[strategy]
kind = "one_of"

[[strategy.children]]
kind = "named"
name = "integers()"

[[strategy.children]]
kind = "nothing"
"#;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a.TOML")),
            Some(DocumentFormat::Toml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("a")), None);
    }

    #[test]
    fn test_load_json_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("nested.json"), NESTED_JSON).unwrap();

        let source = FileStrategySource::new().with_base_dir(dir.path());
        let doc = source.load("nested.json").unwrap();

        assert_eq!(doc.strategy.leaf_count(), 3);
        assert_eq!(
            doc.strategy.build().to_string(),
            "one_of(just(1), just(2), just(3))"
        );
    }

    #[test]
    fn test_load_toml_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested.toml");
        fs::write(&path, NESTED_TOML).unwrap();

        let source = FileStrategySource::new();
        let doc = source.load(path.to_str().unwrap()).unwrap();

        match doc.strategy {
            StrategyNode::OneOf { children } => assert_eq!(children.len(), 2),
            other => panic!("expected one_of, got {:?}", other),
        }
    }

    #[test]
    fn test_load_without_extension_falls_back_to_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("strategy"), NESTED_JSON).unwrap();

        let source = FileStrategySource::new().with_base_dir(dir.path());
        let doc = source.load("strategy").unwrap();
        assert_eq!(doc.strategy.depth(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileStrategySource::new().with_base_dir(dir.path());
        let err = source.load("absent.json").unwrap_err();
        assert!(matches!(err, StrategySourceError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), r#"{"strategy": {"kind": "maybe"}}"#).unwrap();

        let source = FileStrategySource::new().with_base_dir(dir.path());
        let err = source.load("bad.json").unwrap_err();
        assert!(matches!(err, StrategySourceError::Parse { .. }));
    }
}

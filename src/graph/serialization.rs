//! Graph documents for saving and loading descriptions.
//!
//! A document wraps the chains of a graph with a format version and optional
//! metadata. JSON and TOML are supported; both use the same shape:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "chains": [
//!     { "inputs": "0:v", "filters": { "name": "scale", "options": { "w": 1280 } }, "outputs": "out" }
//!   ]
//! }
//! ```

use crate::core::error::{FilterGraphError, FilterGraphResult};
use crate::graph::structure::{FilterChain, FilterGraph};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metadata about the graph itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphMetadata {
    /// Optional name for this graph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// On-disk document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> FilterGraphResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(FilterGraphError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Serializable representation of a complete graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Document format version
    #[serde(default = "GraphDocument::default_version")]
    pub version: String,
    /// Graph metadata
    #[serde(default)]
    pub metadata: GraphMetadata,
    /// All chains, in declaration order
    #[serde(default)]
    pub chains: Vec<FilterChain>,
}

impl GraphDocument {
    /// Current format version.
    pub const VERSION: &'static str = "1.0.0";

    fn default_version() -> String {
        Self::VERSION.to_string()
    }

    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            version: Self::default_version(),
            metadata: GraphMetadata::default(),
            chains: Vec::new(),
        }
    }

    /// Create a document holding the chains of `graph`.
    pub fn from_graph(graph: &FilterGraph) -> Self {
        Self {
            chains: graph.chains().to_vec(),
            ..Self::new()
        }
    }

    /// Convert into a renderable graph.
    pub fn into_graph(self) -> FilterGraph {
        FilterGraph::from(self.chains)
    }

    /// Fail with [`FilterGraphError::EmptyGraph`] if there are no chains.
    pub fn require_chains(self) -> FilterGraphResult<Self> {
        if self.chains.is_empty() {
            Err(FilterGraphError::EmptyGraph)
        } else {
            Ok(self)
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> FilterGraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to compact JSON (no whitespace).
    pub fn to_json_compact(&self) -> FilterGraphResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> FilterGraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> FilterGraphResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Deserialize from TOML string.
    pub fn from_toml(text: &str) -> FilterGraphResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse `text` in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> FilterGraphResult<Self> {
        match format {
            DocumentFormat::Json => Self::from_json(text),
            DocumentFormat::Toml => Self::from_toml(text),
        }
    }

    /// Load a document from disk, choosing the format from the extension.
    pub fn load(path: impl AsRef<Path>) -> FilterGraphResult<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let document = Self::parse(&text, format)?;
        log::debug!(
            "Loaded graph document {} ({:?}, {} chain(s))",
            path.display(),
            format,
            document.chains.len()
        );
        Ok(document)
    }

    /// Write the document to disk, choosing the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> FilterGraphResult<()> {
        let path = path.as_ref();
        let text = match DocumentFormat::from_path(path)? {
            DocumentFormat::Json => self.to_json()?,
            DocumentFormat::Toml => self.to_toml()?,
        };
        std::fs::write(path, text)?;
        Ok(())
    }
}

impl Default for GraphDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::structure::Filter;
    use std::io::Write;

    const SPLIT_JSON: &str = r#"{
        "metadata": { "name": "Side by side" },
        "chains": [
            { "inputs": "0:v", "filters": { "name": "scale", "options": { "w": 640, "h": -1 } }, "outputs": "left" },
            { "inputs": ["left", "1:v"], "filters": "hstack", "outputs": "out" }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let document = GraphDocument::from_json(SPLIT_JSON).unwrap();
        assert_eq!(document.version, GraphDocument::VERSION);
        assert_eq!(document.metadata.name.as_deref(), Some("Side by side"));
        assert_eq!(
            document.into_graph().render(),
            "[0:v]scale=w=640:h=-1[left];[left][1:v]hstack[out]"
        );
    }

    #[test]
    fn test_from_toml() {
        let text = r#"
            version = "1.0.0"

            [[chains]]
            inputs = "0:v"
            outputs = "v"
            filters = [
                { name = "trim", options = { start = 10, end = 20 } },
                { name = "setpts", options = "PTS-STARTPTS" },
            ]

            [[chains]]
            inputs = "0:a"
            outputs = "a"
            filters = [
                { name = "atrim", options = { start = 10, end = 20 } },
                { name = "asetpts", options = "PTS-STARTPTS" },
            ]
        "#;
        let graph = GraphDocument::from_toml(text).unwrap().into_graph();
        assert_eq!(
            graph.render(),
            "[0:v]trim=start=10:end=20,setpts=PTS-STARTPTS[v];\
             [0:a]atrim=start=10:end=20,asetpts=PTS-STARTPTS[a]"
        );
    }

    #[test]
    fn test_json_round_trip_keeps_option_order() {
        let graph = FilterGraph::new().chain(
            FilterChain::new("0:v", Filter::new("pad").with_option("w", "iw+20").with_option("h", "ih+20"))
                .with_output("padded"),
        );
        let json = GraphDocument::from_graph(&graph).to_json_compact().unwrap();
        let restored = GraphDocument::from_json(&json).unwrap().into_graph();
        assert_eq!(restored, graph);
        assert_eq!(restored.render(), "[0:v]pad=w=iw+20:h=ih+20[padded]");
    }

    #[test]
    fn test_require_chains() {
        let result = GraphDocument::from_json("{}").unwrap().require_chains();
        assert!(matches!(result, Err(FilterGraphError::EmptyGraph)));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SPLIT_JSON.as_bytes()).unwrap();

        let document = GraphDocument::load(file.path()).unwrap();
        assert_eq!(document.chains.len(), 2);
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.toml");
        let document = GraphDocument::from_json(SPLIT_JSON).unwrap();

        document.save(&path).unwrap();
        let restored = GraphDocument::load(&path).unwrap();
        assert_eq!(restored.into_graph().render(), document.into_graph().render());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = GraphDocument::load("graph.yaml");
        assert!(matches!(result, Err(FilterGraphError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GraphDocument::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(FilterGraphError::Io(_))));
    }
}

use serde::{Deserialize, Serialize};

/// Handle used when an edge does not name the output it leaves from.
pub const DEFAULT_SOURCE_HANDLE: &str = "output";

fn default_source_handle() -> String {
    DEFAULT_SOURCE_HANDLE.to_string()
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        alias = "source_handle",
        default = "default_source_handle"
    )]
    pub source_handle: String,
}

impl WorkflowEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: default_source_handle(),
        }
    }

    pub fn with_source_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = handle.into();
        self
    }

    /// Whether either end of this edge points at `node_id`.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// `"source → target"`, with `?` standing in for an empty end.
    pub fn item_label(&self) -> String {
        let end = |s: &str| if s.is_empty() { "?".to_string() } else { s.to_string() };
        format!("{} → {}", end(&self.source), end(&self.target))
    }
}

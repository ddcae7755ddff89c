use crate::error::WorkflowError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Lower bound of the canvas coordinate space.
pub const POSITION_MIN: f64 = 0.0;
/// Upper bound of the canvas coordinate space.
pub const POSITION_MAX: f64 = 5000.0;
/// Coordinate given to nodes that arrive without one.
pub const DEFAULT_POSITION: f64 = 100.0;
/// Label written into the config of a freshly created node.
pub const DEFAULT_NODE_LABEL: &str = "New Node";

/// The kinds of logic a workflow node can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NodeType {
    Condition,
    #[default]
    Message,
    Wait,
    Api,
}

impl NodeType {
    pub const ALL: [NodeType; 4] = [
        NodeType::Condition,
        NodeType::Message,
        NodeType::Wait,
        NodeType::Api,
    ];

    /// The wire name used by the host (`"condition"`, `"message"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Condition => "condition",
            NodeType::Message => "message",
            NodeType::Wait => "wait",
            NodeType::Api => "api",
        }
    }

    /// Human-readable label shown in the property panel.
    pub fn display_label(&self) -> &'static str {
        match self {
            NodeType::Condition => "Condition",
            NodeType::Message => "Message",
            NodeType::Wait => "Wait",
            NodeType::Api => "API Call",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(NodeType::as_str).collect()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| WorkflowError::InvalidNodeType(s.to_string()))
    }
}

impl TryFrom<String> for NodeType {
    type Error = WorkflowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A point on the canvas. Both coordinates are kept inside `0..=5000`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_coordinate(x),
            y: clamp_coordinate(y),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, DEFAULT_POSITION)
    }
}

/// Clamps a coordinate to the canvas bounds. `NaN` falls back to the default position.
pub fn clamp_coordinate(value: f64) -> f64 {
    if value.is_nan() {
        DEFAULT_POSITION
    } else {
        value.clamp(POSITION_MIN, POSITION_MAX)
    }
}

fn default_position() -> f64 {
    DEFAULT_POSITION
}

/// The config object every new node starts with: `{"label": "New Node"}`.
pub fn default_node_config() -> Map<String, Value> {
    let mut config = Map::new();
    config.insert(
        "label".to_string(),
        Value::String(DEFAULT_NODE_LABEL.to_string()),
    );
    config
}

fn node_config_or_default<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_else(default_node_config))
}

/// A unit of workflow logic, in the shape the host binds and persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub node_type: NodeType,
    #[serde(default = "default_position")]
    pub position_x: f64,
    #[serde(default = "default_position")]
    pub position_y: f64,
    #[serde(
        default = "default_node_config",
        deserialize_with = "node_config_or_default"
    )]
    pub node_config: Map<String, Value>,
}

impl WorkflowNode {
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        let position = Position::default();
        Self {
            id: id.into(),
            node_type,
            position_x: position.x,
            position_y: position.y,
            node_config: default_node_config(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.set_position(position);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.node_config
            .insert("label".to_string(), Value::String(label.into()));
        self
    }

    pub fn position(&self) -> Position {
        Position::new(self.position_x, self.position_y)
    }

    pub fn set_position(&mut self, position: Position) {
        let position = Position::new(position.x, position.y);
        self.position_x = position.x;
        self.position_y = position.y;
    }

    /// Shallow-merges `patch` into `node_config`; keys in `patch` win.
    pub fn merge_config(&mut self, patch: Map<String, Value>) {
        self.node_config.extend(patch);
    }

    /// The configured label, if it is a non-empty string.
    pub fn label(&self) -> Option<&str> {
        self.node_config
            .get("label")
            .and_then(Value::as_str)
            .filter(|label| !label.is_empty())
    }

    /// The text the property panel shows for this node in a list.
    pub fn item_label(&self) -> String {
        self.label()
            .unwrap_or_else(|| self.node_type.as_str())
            .to_string()
    }
}

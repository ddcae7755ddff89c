use crate::model::NodeType;
use std::fmt;
use thiserror::Error;

/// Which end of an edge a reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Target,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::Source => write!(f, "source"),
            EdgeEnd::Target => write!(f, "target"),
        }
    }
}

/// The collection a duplicated id was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScope {
    Node,
    Edge,
}

impl fmt::Display for IdScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdScope::Node => write!(f, "node"),
            IdScope::Edge => write!(f, "edge"),
        }
    }
}

/// Errors raised by graph operations, validation and host action dispatch.
///
/// None of these are fatal for the component: an operation that fails leaves the
/// graph exactly as it was, and validation failures are reported as messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("No nodes in workflow")]
    EmptyWorkflow,

    #[error("Edge '{edge_id}' references missing {end} node '{node_id}'")]
    DanglingEdgeReference {
        edge_id: String,
        end: EdgeEnd,
        node_id: String,
    },

    #[error("Duplicate {scope} id '{id}'")]
    DuplicateId { scope: IdScope, id: String },

    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    #[error("Unknown node type '{0}', expected one of: {types}", types = NodeType::names().join(", "))]
    InvalidNodeType(String),

    #[error("Workflow is read-only, '{0}' is not allowed")]
    ReadOnly(String),

    #[error("Action '{0}' is disabled by the component configuration")]
    ActionDisabled(String),

    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Invalid arguments for action '{action}': {message}")]
    InvalidArguments { action: String, message: String },

    #[error("Failed to bind component content: {0}")]
    Binding(String),
}

impl From<serde_json::Error> for WorkflowError {
    fn from(err: serde_json::Error) -> Self {
        WorkflowError::Binding(err.to_string())
    }
}

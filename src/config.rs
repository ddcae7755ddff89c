//! The component's bound content: data bindings, editing switches and styling.
//!
//! The host hands this over as a JSON object with camelCase keys. Any key it
//! leaves out takes the same default the descriptor advertises for it.

use crate::descriptor::ComponentDescriptor;
use crate::error::WorkflowError;
use crate::model::{NodeType, WorkflowEdge, WorkflowMetadata, WorkflowNode, null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_SIDEBAR_WIDTH: &str = "150px";
pub const DEFAULT_SIDEBAR_BACKGROUND: &str = "#F9FAFB";
pub const DEFAULT_CANVAS_BACKGROUND: &str = "#FFFFFF";
pub const DEFAULT_GRID_COLOR: &str = "#E5E7EB";
pub const DEFAULT_CONDITION_NODE_COLOR: &str = "#3B82F6";
pub const DEFAULT_MESSAGE_NODE_COLOR: &str = "#10B981";
pub const DEFAULT_WAIT_NODE_COLOR: &str = "#F59E0B";
pub const DEFAULT_API_NODE_COLOR: &str = "#8B5CF6";

/// The two published versions of the component.
///
/// `V1` saves raw `{nodes, edges}`; `V2` binds workflow metadata, validates before
/// saving and produces the upsert payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    V1,
    #[default]
    V2,
}

fn string(value: &str) -> String {
    value.to_string()
}

/// Typed view of the host content object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub initial_nodes: Vec<WorkflowNode>,
    #[serde(deserialize_with = "null_as_default")]
    pub initial_edges: Vec<WorkflowEdge>,
    pub initial_workflow: Option<WorkflowMetadata>,
    pub read_only: bool,
    pub show_edit_action: bool,
    pub show_delete_action: bool,
    pub sidebar_width: String,
    pub sidebar_background: String,
    pub canvas_background: String,
    pub grid_color: String,
    pub condition_node_color: String,
    pub message_node_color: String,
    pub wait_node_color: String,
    pub api_node_color: String,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            initial_nodes: Vec::new(),
            initial_edges: Vec::new(),
            initial_workflow: None,
            read_only: false,
            show_edit_action: true,
            show_delete_action: true,
            sidebar_width: string(DEFAULT_SIDEBAR_WIDTH),
            sidebar_background: string(DEFAULT_SIDEBAR_BACKGROUND),
            canvas_background: string(DEFAULT_CANVAS_BACKGROUND),
            grid_color: string(DEFAULT_GRID_COLOR),
            condition_node_color: string(DEFAULT_CONDITION_NODE_COLOR),
            message_node_color: string(DEFAULT_MESSAGE_NODE_COLOR),
            wait_node_color: string(DEFAULT_WAIT_NODE_COLOR),
            api_node_color: string(DEFAULT_API_NODE_COLOR),
        }
    }
}

impl ComponentConfig {
    /// Parses the host content object from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, WorkflowError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts an already-parsed content object.
    pub fn from_value(value: Value) -> Result<Self, WorkflowError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The color the canvas uses for nodes of `node_type`.
    pub fn node_color(&self, node_type: NodeType) -> &str {
        match node_type {
            NodeType::Condition => &self.condition_node_color,
            NodeType::Message => &self.message_node_color,
            NodeType::Wait => &self.wait_node_color,
            NodeType::Api => &self.api_node_color,
        }
    }

    /// Whether the edit button is offered on nodes.
    pub fn edit_enabled(&self) -> bool {
        !self.read_only && self.show_edit_action
    }

    /// Whether the delete button is offered on nodes.
    pub fn delete_enabled(&self) -> bool {
        !self.read_only && self.show_delete_action
    }
}

/// Whether the property panel shows `property` for the given content.
///
/// Unknown property names are never visible. `initialWorkflow` only exists on
/// the second component version.
pub fn is_visible(config: &ComponentConfig, variant: Variant, property: &str) -> bool {
    ComponentDescriptor::for_variant(variant)
        .property(property)
        .is_some_and(|p| p.hidden.is_none_or(|rule| !rule.applies(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = ComponentConfig::from_value(json!({})).unwrap();
        assert_eq!(config, ComponentConfig::default());
        assert!(config.show_edit_action);
        assert!(config.show_delete_action);
        assert_eq!(config.sidebar_width, "150px");
    }

    #[test]
    fn test_camel_case_keys() {
        let config = ComponentConfig::from_value(json!({
            "readOnly": true,
            "waitNodeColor": "#000000",
            "initialNodes": [{ "id": "n1", "node_type": "wait" }],
            "initialWorkflow": { "name": "Onboarding" }
        }))
        .unwrap();
        assert!(config.read_only);
        assert!(!config.edit_enabled());
        assert_eq!(config.node_color(NodeType::Wait), "#000000");
        assert_eq!(config.initial_nodes[0].node_type, NodeType::Wait);
        assert_eq!(
            config.initial_workflow.unwrap()["name"],
            json!("Onboarding")
        );
    }

    #[test]
    fn test_unloaded_bindings_take_defaults() {
        let config = ComponentConfig::from_value(json!({
            "initialNodes": null,
            "initialEdges": null,
            "initialWorkflow": null
        }))
        .unwrap();
        assert_eq!(config, ComponentConfig::default());

        let config = ComponentConfig::from_value(json!({
            "initialNodes": [{ "id": "n1", "node_type": "api", "node_config": null }]
        }))
        .unwrap();
        assert_eq!(config.initial_nodes[0].label(), Some("New Node"));
    }

    #[test]
    fn test_bad_content_is_a_binding_error() {
        let err = ComponentConfig::from_json(r#"{"initialNodes": [{"node_type": "loop"}]}"#)
            .unwrap_err();
        match err {
            WorkflowError::Binding(message) => {
                assert!(message.contains("Unknown node type 'loop'"), "{}", message)
            }
            other => panic!("expected a binding error, got {:?}", other),
        }
    }

    #[test]
    fn test_visibility_follows_read_only() {
        let mut config = ComponentConfig::default();
        assert!(is_visible(&config, Variant::V1, "showEditAction"));
        config.read_only = true;
        assert!(!is_visible(&config, Variant::V1, "showEditAction"));
        assert!(!is_visible(&config, Variant::V1, "sidebarBackground"));
        assert!(is_visible(&config, Variant::V1, "canvasBackground"));
        assert!(is_visible(&config, Variant::V1, "readOnly"));
        assert!(!is_visible(&config, Variant::V1, "initialWorkflow"));
        assert!(is_visible(&config, Variant::V2, "initialWorkflow"));
        assert!(!is_visible(&config, Variant::V2, "noSuchProperty"));
    }
}

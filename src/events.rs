use crate::model::{NodeType, WorkflowNode};
use crate::save::SavePayload;
use serde::Serialize;
use serde_json::{Map, Value};

/// Events the component raises for the host to react to.
///
/// Serializes as `{"name": "<event-name>", "event": { ...payload }}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "event")]
pub enum TriggerEvent {
    #[serde(rename = "workflow-saved")]
    WorkflowSaved(SavePayload),

    #[serde(rename = "node-selected")]
    NodeSelected {
        node_id: String,
        node_type: NodeType,
        node_data: Map<String, Value>,
    },

    #[serde(rename = "node-edit")]
    NodeEdit {
        node_id: String,
        node_type: NodeType,
        node_data: Map<String, Value>,
    },

    #[serde(rename = "node-deleted")]
    NodeDeleted {
        node_id: String,
        node_type: NodeType,
    },

    #[serde(rename = "workflow-changed")]
    WorkflowChanged { is_dirty: bool },

    #[serde(rename = "validation-failed")]
    ValidationFailed { errors: Vec<String> },
}

impl TriggerEvent {
    /// The host-facing event name, e.g. `"workflow-changed"`.
    pub fn name(&self) -> &'static str {
        match self {
            TriggerEvent::WorkflowSaved(_) => "workflow-saved",
            TriggerEvent::NodeSelected { .. } => "node-selected",
            TriggerEvent::NodeEdit { .. } => "node-edit",
            TriggerEvent::NodeDeleted { .. } => "node-deleted",
            TriggerEvent::WorkflowChanged { .. } => "workflow-changed",
            TriggerEvent::ValidationFailed { .. } => "validation-failed",
        }
    }

    pub(crate) fn node_selected(node: &WorkflowNode) -> Self {
        TriggerEvent::NodeSelected {
            node_id: node.id.clone(),
            node_type: node.node_type,
            node_data: node.node_config.clone(),
        }
    }

    pub(crate) fn node_edit(node: &WorkflowNode) -> Self {
        TriggerEvent::NodeEdit {
            node_id: node.id.clone(),
            node_type: node.node_type,
            node_data: node.node_config.clone(),
        }
    }
}

/// Receives trigger events as the component emits them.
pub trait EventSink {
    fn emit(&mut self, event: TriggerEvent);
}

/// Collects events in emission order. Handy for hosts that poll and for tests.
impl EventSink for Vec<TriggerEvent> {
    fn emit(&mut self, event: TriggerEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_wire_shape() {
        let event = TriggerEvent::WorkflowChanged { is_dirty: true };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "name": "workflow-changed", "event": { "is_dirty": true } })
        );

        let event = TriggerEvent::NodeDeleted {
            node_id: "n1".to_string(),
            node_type: NodeType::Wait,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "name": "node-deleted", "event": { "node_id": "n1", "node_type": "wait" } })
        );
        assert_eq!(event.name(), "node-deleted");
    }
}

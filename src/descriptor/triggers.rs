use super::{LocalizedText, TriggerEventDescriptor};
use crate::config::Variant;
use serde_json::{Value, json};

fn trigger(name: &str, label: &str, event: Value, test_event: Value) -> TriggerEventDescriptor {
    TriggerEventDescriptor {
        name: name.to_string(),
        label: LocalizedText::en(label),
        event,
        default: true,
        test_event,
    }
}

fn node_fixture() -> Value {
    json!({ "node_id": "test-id", "node_type": "message", "node_data": { "label": "Test" } })
}

pub(super) fn trigger_events(variant: Variant) -> Vec<TriggerEventDescriptor> {
    let saved = match variant {
        Variant::V1 => trigger(
            "workflow-saved",
            "On Workflow Saved",
            json!({ "nodes": [], "edges": [] }),
            json!({ "nodes": [{ "id": "test", "node_type": "message" }], "edges": [] }),
        ),
        Variant::V2 => trigger(
            "workflow-saved",
            "On Workflow Saved",
            json!({ "p_workflow": {}, "p_nodes": [], "p_edges": [] }),
            json!({
                "p_workflow": { "name": "Test Workflow" },
                "p_nodes": [{ "id": "test", "node_type": "message" }],
                "p_edges": []
            }),
        ),
    };

    vec![
        saved,
        trigger(
            "node-selected",
            "On Node Selected",
            json!({ "node_id": "", "node_type": "", "node_data": {} }),
            node_fixture(),
        ),
        trigger(
            "workflow-changed",
            "On Workflow Changed",
            json!({ "is_dirty": true }),
            json!({ "is_dirty": true }),
        ),
        trigger(
            "validation-failed",
            "On Validation Failed",
            json!({ "errors": [] }),
            json!({ "errors": ["No nodes in workflow"] }),
        ),
        trigger(
            "node-edit",
            "On Node Edit",
            json!({ "node_id": "", "node_type": "", "node_data": {} }),
            node_fixture(),
        ),
        trigger(
            "node-deleted",
            "On Node Deleted",
            json!({ "node_id": "", "node_type": "" }),
            json!({ "node_id": "test-id", "node_type": "message" }),
        ),
    ]
}

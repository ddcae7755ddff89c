//! Common test utilities for building workflow graphs and bound content.
use flowcanvas::prelude::*;
use serde_json::{Value, json};

/// A three-step onboarding flow: condition -> message -> wait.
#[allow(dead_code)]
pub fn create_simple_nodes() -> Vec<WorkflowNode> {
    vec![
        WorkflowNode::new("start", NodeType::Condition).with_label("New customer?"),
        WorkflowNode::new("greet", NodeType::Message)
            .with_label("Welcome")
            .with_position(Position::new(300.0, 100.0)),
        WorkflowNode::new("pause", NodeType::Wait).with_position(Position::new(500.0, 100.0)),
    ]
}

#[allow(dead_code)]
pub fn create_simple_edges() -> Vec<WorkflowEdge> {
    vec![
        WorkflowEdge::new("e1", "start", "greet").with_source_handle("true"),
        WorkflowEdge::new("e2", "greet", "pause"),
    ]
}

/// Bound content for the simple flow, as the host would send it.
#[allow(dead_code)]
pub fn simple_content() -> Value {
    json!({
        "initialNodes": create_simple_nodes(),
        "initialEdges": create_simple_edges(),
        "initialWorkflow": {
            "id": "wf-1",
            "merchant_id": "m-42",
            "name": "Onboarding",
            "description": "Greets new customers",
            "is_active": true
        }
    })
}

#[allow(dead_code)]
pub fn simple_config() -> ComponentConfig {
    ComponentConfig::from_value(simple_content()).expect("simple content should bind")
}

/// A builder over the simple flow, collecting its events.
#[allow(dead_code)]
pub fn simple_builder(variant: Variant) -> WorkflowBuilder {
    WorkflowBuilder::collecting(variant, simple_config())
}

/// Names of the collected events, in emission order.
#[allow(dead_code)]
pub fn event_names(events: &[TriggerEvent]) -> Vec<&'static str> {
    events.iter().map(TriggerEvent::name).collect()
}

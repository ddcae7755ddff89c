//! Tests for the component descriptor and property visibility.
mod common;
use common::*;
use flowcanvas::descriptor::{HiddenRule, PropertyType, Section};
use flowcanvas::prelude::*;
use serde_json::json;

#[test]
fn test_editor_metadata() {
    let descriptor = ComponentDescriptor::for_variant(Variant::V1);
    let value = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(
        value["editor"],
        json!({ "label": { "en": "Workflow Builder" }, "icon": "workflow" })
    );
}

#[test]
fn test_actions_are_listed_in_both_variants() {
    for variant in [Variant::V1, Variant::V2] {
        let descriptor = ComponentDescriptor::for_variant(variant);
        let names: Vec<_> = descriptor.actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["save", "validate", "clear", "updateNodeConfig"]);
    }

    let v2 = ComponentDescriptor::for_variant(Variant::V2);
    let update = v2.action("updateNodeConfig").unwrap();
    let args: Vec<_> = update.args.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(args, vec!["nodeId", "config"]);
    assert!(v2.action("save").unwrap().action_description.en.contains("p_workflow"));
}

#[test]
fn test_trigger_events_and_fixtures() {
    let descriptor = ComponentDescriptor::for_variant(Variant::V1);
    let names: Vec<_> = descriptor
        .trigger_events
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "workflow-saved",
            "node-selected",
            "workflow-changed",
            "validation-failed",
            "node-edit",
            "node-deleted"
        ]
    );
    assert!(descriptor.trigger_events.iter().all(|e| e.default));

    let failed = descriptor.trigger_event("validation-failed").unwrap();
    assert_eq!(failed.test_event, json!({ "errors": ["No nodes in workflow"] }));

    let saved_v2 = ComponentDescriptor::for_variant(Variant::V2);
    let saved_v2 = saved_v2.trigger_event("workflow-saved").unwrap();
    assert!(saved_v2.event.get("p_nodes").is_some());
}

#[test]
fn test_emitted_events_match_fixture_shapes() {
    let mut builder = simple_builder(Variant::V2);
    builder.select_node("greet").unwrap();
    builder.request_edit("greet").unwrap();
    builder.delete_node("greet").unwrap();
    builder.save().unwrap();
    builder.clear();
    builder.validate();

    let descriptor = builder.descriptor();
    for event in builder.sink() {
        let fixture = descriptor.trigger_event(event.name()).unwrap();
        let emitted = serde_json::to_value(event).unwrap();
        let expected_keys: Vec<_> = fixture.event.as_object().unwrap().keys().collect();
        let actual_keys: Vec<_> = emitted["event"].as_object().unwrap().keys().collect();
        assert_eq!(expected_keys, actual_keys, "payload keys of '{}'", event.name());
    }
}

#[test]
fn test_property_layout() {
    let v1 = ComponentDescriptor::for_variant(Variant::V1);
    let v2 = ComponentDescriptor::for_variant(Variant::V2);
    assert!(v1.property("initialWorkflow").is_none());
    assert_eq!(v2.properties.len(), v1.properties.len() + 1);

    let nodes = v1.property("initialNodes").unwrap();
    assert_eq!(nodes.kind, PropertyType::Array);
    assert_eq!(nodes.section, Section::Settings);
    let item = nodes.item.as_ref().unwrap();
    assert_eq!(item.default_value["node_config"], json!({ "label": "New Node" }));
    let node_type = item.fields.iter().find(|f| f.name == "node_type").unwrap();
    let choices: Vec<_> = node_type.options.options.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(choices, vec!["condition", "message", "wait", "api"]);

    let x = item.fields.iter().find(|f| f.name == "position_x").unwrap();
    assert_eq!((x.options.min, x.options.max), (Some(0.0), Some(5000.0)));

    let edges = v1.property("initialEdges").unwrap();
    assert_eq!(
        edges.item.as_ref().unwrap().default_value["sourceHandle"],
        json!("output")
    );

    let grid = v1.property("gridColor").unwrap();
    assert_eq!(grid.section, Section::Style);
    assert_eq!(grid.default_value, json!("#E5E7EB"));
    assert_eq!(
        v1.property("sidebarWidth").unwrap().hidden,
        Some(HiddenRule::WhenReadOnly)
    );
}

#[test]
fn test_default_content_binds_to_default_config() {
    let descriptor = ComponentDescriptor::for_variant(Variant::V1);
    let content = serde_json::Value::Object(descriptor.default_content());
    let config = ComponentConfig::from_value(content).unwrap();
    assert_eq!(config, ComponentConfig::default());
}

#[test]
fn test_visibility_rules() {
    let mut config = ComponentConfig::default();
    for variant in [Variant::V1, Variant::V2] {
        for name in ComponentDescriptor::for_variant(variant).property_names() {
            assert!(is_visible(&config, variant, name), "{} should be visible", name);
        }
    }

    config.read_only = true;
    let hidden: Vec<_> = ComponentDescriptor::for_variant(Variant::V2)
        .property_names()
        .into_iter()
        .filter(|name| !is_visible(&config, Variant::V2, name))
        .map(str::to_string)
        .collect();
    assert_eq!(
        hidden,
        vec![
            "showEditAction",
            "showDeleteAction",
            "sidebarWidth",
            "sidebarBackground"
        ]
    );
    assert!(!is_visible(&config, Variant::V1, "initialWorkflow"));
}

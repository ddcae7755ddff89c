use super::{ActionArgument, ActionDescriptor, LocalizedText, PropertyType};
use crate::config::Variant;

pub const SAVE: &str = "save";
pub const VALIDATE: &str = "validate";
pub const CLEAR: &str = "clear";
pub const UPDATE_NODE_CONFIG: &str = "updateNodeConfig";

fn action(name: &str, label: &str, description: &str) -> ActionDescriptor {
    ActionDescriptor {
        name: name.to_string(),
        label: LocalizedText::en(label),
        action: name.to_string(),
        action_description: LocalizedText::en(description),
        args: Vec::new(),
    }
}

fn argument(name: &str, label: &str, kind: PropertyType) -> ActionArgument {
    ActionArgument {
        name: name.to_string(),
        label: LocalizedText::en(label),
        kind,
    }
}

pub(super) fn actions(variant: Variant) -> Vec<ActionDescriptor> {
    let save_description = match variant {
        Variant::V1 => "Returns {nodes, edges} for saving to database",
        Variant::V2 => {
            "Validates, then returns {p_workflow, p_nodes, p_edges} for the workflow upsert call"
        }
    };

    let mut update = action(
        UPDATE_NODE_CONFIG,
        "Update Node Config",
        "Merges a config object into the node with the given ID",
    );
    update.args = vec![
        argument("nodeId", "Node ID", PropertyType::Text),
        argument("config", "Config", PropertyType::Object),
    ];

    vec![
        action(SAVE, "Save Workflow", save_description),
        action(
            VALIDATE,
            "Validate Workflow",
            "Returns {valid, errors} validation result",
        ),
        action(CLEAR, "Clear Canvas", "Clears all nodes and edges from canvas"),
        update,
    ]
}

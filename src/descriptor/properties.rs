use super::{
    BindingValidation, Choice, FieldOptions, HiddenRule, ItemField, ItemSchema, LocalizedText,
    PropertyDescriptor, PropertyType, Section,
};
use crate::config::{self, Variant};
use crate::model::{
    DEFAULT_NODE_LABEL, DEFAULT_POSITION, DEFAULT_SOURCE_HANDLE, NodeType, POSITION_MAX,
    POSITION_MIN,
};
use serde_json::{Value, json};

fn property(
    name: &str,
    label: &str,
    kind: PropertyType,
    section: Section,
    default_value: Value,
) -> PropertyDescriptor {
    PropertyDescriptor {
        name: name.to_string(),
        label: LocalizedText::en(label),
        kind,
        section,
        default_value,
        bindable: true,
        hidden: None,
        item: None,
        binding_validation: None,
        property_help: None,
    }
}

impl PropertyDescriptor {
    fn validated(mut self, kind: &str, tooltip: &str) -> Self {
        self.binding_validation = Some(BindingValidation {
            kind: kind.to_string(),
            tooltip: tooltip.to_string(),
        });
        self
    }

    fn help(mut self, text: &str) -> Self {
        self.property_help = Some(text.to_string());
        self
    }

    fn hidden_when_read_only(mut self) -> Self {
        self.hidden = Some(HiddenRule::WhenReadOnly);
        self
    }

    fn items(mut self, item: ItemSchema) -> Self {
        self.item = Some(item);
        self
    }
}

fn field(name: &str, label: &str, kind: PropertyType) -> ItemField {
    ItemField {
        name: name.to_string(),
        label: LocalizedText::en(label),
        kind,
        default_value: None,
        options: FieldOptions::default(),
    }
}

fn id_field() -> ItemField {
    let mut id = field("id", "ID", PropertyType::Text);
    id.options.placeholder = Some("Auto-generated if empty".to_string());
    id
}

fn coordinate_field(name: &str, label: &str) -> ItemField {
    let mut coordinate = field(name, label, PropertyType::Number);
    coordinate.default_value = Some(json!(DEFAULT_POSITION));
    coordinate.options.min = Some(POSITION_MIN);
    coordinate.options.max = Some(POSITION_MAX);
    coordinate.options.step = Some(10.0);
    coordinate
}

fn node_item() -> ItemSchema {
    let mut node_type = field("node_type", "Node Type", PropertyType::TextSelect);
    node_type.default_value = Some(json!(NodeType::default().as_str()));
    node_type.options.options = NodeType::ALL
        .iter()
        .map(|t| Choice {
            value: t.as_str().to_string(),
            label: t.display_label().to_string(),
        })
        .collect();

    let mut node_config = field("node_config", "Config", PropertyType::Object);
    node_config.default_value = Some(json!({ "label": DEFAULT_NODE_LABEL }));

    ItemSchema {
        default_value: json!({
            "id": "",
            "node_type": NodeType::default().as_str(),
            "position_x": DEFAULT_POSITION,
            "position_y": DEFAULT_POSITION,
            "node_config": { "label": DEFAULT_NODE_LABEL }
        }),
        fields: vec![
            id_field(),
            node_type,
            coordinate_field("position_x", "Position X"),
            coordinate_field("position_y", "Position Y"),
            node_config,
        ],
    }
}

fn edge_item() -> ItemSchema {
    let text = |name: &str, label: &str, default: &str| {
        let mut f = field(name, label, PropertyType::Text);
        f.default_value = Some(json!(default));
        f
    };

    ItemSchema {
        default_value: json!({
            "id": "",
            "source": "",
            "target": "",
            "sourceHandle": DEFAULT_SOURCE_HANDLE
        }),
        fields: vec![
            id_field(),
            text("source", "Source Node ID", ""),
            text("target", "Target Node ID", ""),
            text("sourceHandle", "Source Handle", DEFAULT_SOURCE_HANDLE),
        ],
    }
}

fn color(name: &str, label: &str, default: &str, tooltip: &str) -> PropertyDescriptor {
    property(name, label, PropertyType::Color, Section::Style, json!(default))
        .validated("string", tooltip)
}

pub(super) fn properties(variant: Variant) -> Vec<PropertyDescriptor> {
    let mut properties = vec![
        property(
            "initialNodes",
            "Initial Nodes",
            PropertyType::Array,
            Section::Settings,
            json!([]),
        )
        .items(node_item())
        .validated("array", "Array of node objects from database")
        .help(
            "Bind to the collection of workflow nodes. Each node should have: \
             id, node_type, position_x, position_y, node_config {label}",
        ),
        property(
            "initialEdges",
            "Initial Edges",
            PropertyType::Array,
            Section::Settings,
            json!([]),
        )
        .items(edge_item())
        .validated("array", "Array of edge objects from database")
        .help(
            "Bind to the collection of workflow edges. Each edge should have: \
             id, source, target, sourceHandle",
        ),
    ];

    if variant == Variant::V2 {
        properties.push(
            property(
                "initialWorkflow",
                "Initial Workflow",
                PropertyType::Object,
                Section::Settings,
                json!({}),
            )
            .validated("object", "Workflow record from database")
            .help(
                "Bind to the workflow record (id, merchant_id, name, description, is_active). \
                 It is sent back unchanged as p_workflow when saving.",
            ),
        );
    }

    properties.extend([
        property(
            "readOnly",
            "Read Only",
            PropertyType::OnOff,
            Section::Settings,
            json!(false),
        )
        .validated("boolean", "Enable/disable editing mode")
        .help("Disable editing for view-only mode in analytics pages"),
        property(
            "showEditAction",
            "Show Edit Action",
            PropertyType::OnOff,
            Section::Settings,
            json!(true),
        )
        .hidden_when_read_only()
        .validated("boolean", "Show edit button on nodes")
        .help("Show edit button when hovering over nodes. Triggers \"On Node Edit\" event."),
        property(
            "showDeleteAction",
            "Show Delete Action",
            PropertyType::OnOff,
            Section::Settings,
            json!(true),
        )
        .hidden_when_read_only()
        .validated("boolean", "Show delete button on nodes")
        .help("Show delete button when hovering over nodes. Triggers \"On Node Deleted\" event."),
        property(
            "sidebarWidth",
            "Sidebar Width",
            PropertyType::Length,
            Section::Style,
            json!(config::DEFAULT_SIDEBAR_WIDTH),
        )
        .hidden_when_read_only()
        .validated("string", "Width of the node palette sidebar"),
        color(
            "sidebarBackground",
            "Sidebar Background",
            config::DEFAULT_SIDEBAR_BACKGROUND,
            "Background color of sidebar",
        )
        .hidden_when_read_only(),
        color(
            "canvasBackground",
            "Canvas Background",
            config::DEFAULT_CANVAS_BACKGROUND,
            "Background color of canvas",
        ),
        color(
            "gridColor",
            "Grid Color",
            config::DEFAULT_GRID_COLOR,
            "Color of background grid",
        ),
        color(
            "conditionNodeColor",
            "Condition Node Color",
            config::DEFAULT_CONDITION_NODE_COLOR,
            "Color for condition nodes",
        ),
        color(
            "messageNodeColor",
            "Message Node Color",
            config::DEFAULT_MESSAGE_NODE_COLOR,
            "Color for message nodes",
        ),
        color(
            "waitNodeColor",
            "Wait Node Color",
            config::DEFAULT_WAIT_NODE_COLOR,
            "Color for wait nodes",
        ),
        color(
            "apiNodeColor",
            "API Node Color",
            config::DEFAULT_API_NODE_COLOR,
            "Color for API nodes",
        ),
    ]);

    properties
}

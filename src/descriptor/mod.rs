//! Static description of the component for the page-builder host.
//!
//! The descriptor is what the host reads to render the property panel, list the
//! actions a page can call and list the events a page can react to. It carries no
//! behavior of its own; the only rule it encodes is [`HiddenRule`], which
//! [`crate::config::is_visible`] evaluates against the bound content.

use crate::config::{ComponentConfig, Variant};
use serde::Serialize;
use serde_json::Value;

mod actions;
mod properties;
mod triggers;

pub use actions::{CLEAR, SAVE, UPDATE_NODE_CONFIG, VALIDATE};

/// A label in the host's localization format (`{"en": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: String,
}

impl LocalizedText {
    pub fn en(text: &str) -> Self {
        Self {
            en: text.to_string(),
        }
    }
}

/// How the editor lists the component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorMeta {
    pub label: LocalizedText,
    pub icon: String,
}

/// Editor widget used for a property or item field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyType {
    Array,
    Object,
    Text,
    TextSelect,
    Number,
    OnOff,
    Length,
    Color,
}

/// Property panel tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Settings,
    Style,
}

/// A condition under which the property panel hides a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HiddenRule {
    /// Hidden while `readOnly` is on.
    WhenReadOnly,
}

impl HiddenRule {
    pub fn applies(&self, config: &ComponentConfig) -> bool {
        match self {
            HiddenRule::WhenReadOnly => config.read_only,
        }
    }
}

/// The type hint and tooltip shown when a property is bound to data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingValidation {
    #[serde(rename = "type")]
    pub kind: String,
    pub tooltip: String,
}

/// One entry of a `TextSelect` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

/// Widget options of an item field. Empty options are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Choice>,
}

/// A field of an array item (a node or an edge) in the property panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemField {
    pub name: String,
    pub label: LocalizedText,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    pub options: FieldOptions,
}

/// Item schema of an `Array` property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSchema {
    pub default_value: Value,
    pub fields: Vec<ItemField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,
    pub label: LocalizedText,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub section: Section,
    pub default_value: Value,
    pub bindable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<HiddenRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_validation: Option<BindingValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_help: Option<String>,
}

/// An argument of a callable action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionArgument {
    pub name: String,
    pub label: LocalizedText,
    #[serde(rename = "type")]
    pub kind: PropertyType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub name: String,
    pub label: LocalizedText,
    pub action: String,
    pub action_description: LocalizedText,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ActionArgument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEventDescriptor {
    pub name: String,
    pub label: LocalizedText,
    /// Payload shape with empty values.
    pub event: Value,
    pub default: bool,
    /// Example payload the editor fires when testing a workflow on this event.
    pub test_event: Value,
}

/// Everything the host needs to know about one version of the component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub variant: Variant,
    pub editor: EditorMeta,
    pub actions: Vec<ActionDescriptor>,
    pub trigger_events: Vec<TriggerEventDescriptor>,
    pub properties: Vec<PropertyDescriptor>,
}

impl ComponentDescriptor {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            editor: EditorMeta {
                label: LocalizedText::en("Workflow Builder"),
                icon: "workflow".to_string(),
            },
            actions: actions::actions(variant),
            trigger_events: triggers::trigger_events(variant),
            properties: properties::properties(variant),
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn action(&self, name: &str) -> Option<&ActionDescriptor> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn trigger_event(&self, name: &str) -> Option<&TriggerEventDescriptor> {
        self.trigger_events.iter().find(|e| e.name == name)
    }

    /// Property names in panel order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    /// Default values of every property, keyed like the host content object.
    pub fn default_content(&self) -> serde_json::Map<String, Value> {
        self.properties
            .iter()
            .map(|p| (p.name.clone(), p.default_value.clone()))
            .collect()
    }
}

//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts and tests need, so a single
//! `use flowcanvas::prelude::*;` is enough to bind content, edit a graph and call
//! actions.

pub use crate::component::WorkflowBuilder;
pub use crate::config::{ComponentConfig, Variant, is_visible};
pub use crate::descriptor::ComponentDescriptor;
pub use crate::error::{EdgeEnd, IdScope, WorkflowError};
pub use crate::events::{EventSink, TriggerEvent};
pub use crate::graph::WorkflowGraph;
pub use crate::model::{NodeType, Position, WorkflowEdge, WorkflowMetadata, WorkflowNode};
pub use crate::save::SavePayload;
pub use crate::validator::{ValidationReport, validate};

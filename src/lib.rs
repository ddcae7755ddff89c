//! # flowcanvas - Workflow Builder component model
//!
//! **flowcanvas** models the node/edge "Workflow Builder" widget that a no-code page
//! builder hosts. The widget itself (canvas, drag-and-drop, property panel) lives in
//! the host; this crate owns everything behind it that can be tested:
//!
//! 1.  **Descriptor**: the static metadata the host reads to render the property
//!     panel and wire up actions and trigger events ([`descriptor`]).
//! 2.  **Bound content**: the typed configuration object the host passes in, with
//!     defaults and the property visibility rule ([`config`]).
//! 3.  **Graph model**: nodes, edges and a dirty flag, with the mutations the canvas
//!     performs ([`graph`]).
//! 4.  **Validation**: structural checks that report every problem at once
//!     ([`validator`]).
//! 5.  **Actions and events**: `save`, `validate`, `clear` and `updateNodeConfig`,
//!     dispatched by name, emitting trigger events to an [`events::EventSink`]
//!     ([`component`]).
//!
//! Persistence is not handled here. `save` returns a payload and the host stores it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowcanvas::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Bind the content object the host provides.
//!     let config = ComponentConfig::from_value(json!({
//!         "initialNodes": [
//!             { "id": "start", "node_type": "condition", "node_config": { "label": "New customer?" } },
//!             { "id": "greet", "node_type": "message" }
//!         ],
//!         "initialEdges": [
//!             { "id": "e1", "source": "start", "target": "greet", "sourceHandle": "true" }
//!         ],
//!         "initialWorkflow": { "name": "Onboarding", "merchant_id": "m-1" }
//!     }))?;
//!
//!     // 2. Create the component. Events are collected in a Vec.
//!     let mut builder = WorkflowBuilder::collecting(Variant::V2, config);
//!
//!     // 3. Edit on the canvas.
//!     let wait = builder.add_node(NodeType::Wait, Position::new(400.0, 200.0), None)?;
//!     builder.connect("greet", &wait, None)?;
//!
//!     // 4. Let the host call actions by name.
//!     let report = builder.call_action("validate", &[])?;
//!     println!("Validation: {}", report);
//!
//!     let payload = builder.call_action("save", &[])?;
//!     println!("Upsert payload: {}", payload);
//!
//!     for event in builder.sink() {
//!         println!("-> {}", event.name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod component;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod graph;
pub mod model;
pub mod prelude;
pub mod save;
pub mod validator;

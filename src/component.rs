use crate::config::{ComponentConfig, Variant};
use crate::descriptor::{self, ComponentDescriptor};
use crate::error::WorkflowError;
use crate::events::{EventSink, TriggerEvent};
use crate::graph::WorkflowGraph;
use crate::model::{NodeType, Position, WorkflowMetadata, WorkflowNode};
use crate::save::SavePayload;
use crate::validator::{self, ValidationReport};
use serde_json::{Map, Value};
use tracing::{info, warn};

/// The workflow builder as the host sees it: bound content in, actions called by
/// name, trigger events out.
///
/// Host actions (`save`, `validate`, `clear`, `updateNodeConfig`) always run.
/// Canvas interactions (adding, moving, connecting, deleting and editing nodes)
/// respect `readOnly` and the edit/delete switches of the bound content.
pub struct WorkflowBuilder<S: EventSink = Vec<TriggerEvent>> {
    variant: Variant,
    config: ComponentConfig,
    workflow: Option<WorkflowMetadata>,
    graph: WorkflowGraph,
    sink: S,
}

impl WorkflowBuilder {
    /// A builder that collects its events in a `Vec`, see [`WorkflowBuilder::sink`].
    pub fn collecting(variant: Variant, config: ComponentConfig) -> Self {
        Self::new(variant, config, Vec::new())
    }
}

impl<S: EventSink> WorkflowBuilder<S> {
    /// Binds the content and starts with a clean graph built from `initialNodes`
    /// and `initialEdges`. Events go into `sink`.
    pub fn new(variant: Variant, config: ComponentConfig, sink: S) -> Self {
        let (graph, workflow) = bind(variant, &config);
        Self {
            variant,
            config,
            workflow,
            graph,
            sink,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn config(&self) -> &ComponentConfig {
        &self.config
    }

    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn descriptor(&self) -> ComponentDescriptor {
        ComponentDescriptor::for_variant(self.variant)
    }

    /// Re-binds the content, e.g. after the host's data source refreshed.
    /// Replaces the graph and discards unsaved edits.
    pub fn rebind(&mut self, config: ComponentConfig) {
        let (graph, workflow) = bind(self.variant, &config);
        self.graph = graph;
        self.workflow = workflow;
        self.config = config;
    }

    // --- Host actions ---

    /// Hands the current graph to the host for persistence.
    ///
    /// The first component version always returns `{nodes, edges}`. The second
    /// validates first: an invalid graph emits `validation-failed` and yields
    /// `None`; a valid one yields `{p_workflow, p_nodes, p_edges}`. A returned
    /// payload is also emitted as `workflow-saved` and clears the dirty flag.
    pub fn save(&mut self) -> Option<SavePayload> {
        let nodes = self.graph.nodes().to_vec();
        let edges = self.graph.edges().to_vec();

        let payload = match self.variant {
            Variant::V1 => SavePayload::Raw { nodes, edges },
            Variant::V2 => {
                let report = validator::validate(&nodes, &edges);
                if !report.valid {
                    warn!(errors = ?report.errors, "Save aborted, workflow is invalid");
                    self.sink.emit(TriggerEvent::ValidationFailed {
                        errors: report.errors,
                    });
                    return None;
                }
                SavePayload::Upsert {
                    p_workflow: self.workflow.clone().unwrap_or_default(),
                    p_nodes: nodes,
                    p_edges: edges,
                }
            }
        };

        info!(
            nodes = payload.nodes().len(),
            edges = payload.edges().len(),
            "Workflow saved"
        );
        self.graph.mark_saved();
        self.sink.emit(TriggerEvent::WorkflowSaved(payload.clone()));
        Some(payload)
    }

    /// Validates the current graph. A failing result is also emitted as
    /// `validation-failed`.
    pub fn validate(&mut self) -> ValidationReport {
        let report = validator::validate(self.graph.nodes(), self.graph.edges());
        if !report.valid {
            warn!(errors = ?report.errors, "Workflow validation failed");
            self.sink.emit(TriggerEvent::ValidationFailed {
                errors: report.errors.clone(),
            });
        }
        report
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.flush();
    }

    /// Merges `config` into a node's `node_config`.
    pub fn update_node_config(
        &mut self,
        node_id: &str,
        config: Map<String, Value>,
    ) -> Result<(), WorkflowError> {
        let result = self.graph.update_node_config(node_id, config);
        self.flush();
        result
    }

    /// Runs a host action by its descriptor name with positional arguments.
    ///
    /// Returns the action's result as JSON: the save payload (or `null` when the
    /// save was refused), the validation report, or `null` for actions without a
    /// result.
    pub fn call_action(&mut self, name: &str, args: &[Value]) -> Result<Value, WorkflowError> {
        match name {
            descriptor::SAVE => Ok(self
                .save()
                .map(serde_json::to_value)
                .transpose()?
                .unwrap_or(Value::Null)),
            descriptor::VALIDATE => Ok(serde_json::to_value(self.validate())?),
            descriptor::CLEAR => {
                self.clear();
                Ok(Value::Null)
            }
            descriptor::UPDATE_NODE_CONFIG => {
                let (node_id, config) = update_args(args)?;
                self.update_node_config(node_id, config)?;
                Ok(Value::Null)
            }
            other => Err(WorkflowError::UnknownAction(other.to_string())),
        }
    }

    // --- Canvas interactions ---

    /// Drops a new node of `node_type` onto the canvas and returns its id.
    pub fn add_node(
        &mut self,
        node_type: NodeType,
        position: Position,
        config: Option<Map<String, Value>>,
    ) -> Result<String, WorkflowError> {
        self.ensure_editable("addNode")?;
        let id = self.graph.add_node(node_type, position, config);
        self.flush();
        Ok(id)
    }

    /// Adds a node with an explicit id (or a generated one when it is empty).
    pub fn insert_node(&mut self, node: WorkflowNode) -> Result<String, WorkflowError> {
        self.ensure_editable("addNode")?;
        let result = self.graph.insert_node(node);
        self.flush();
        result
    }

    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), WorkflowError> {
        self.ensure_editable("moveNode")?;
        let result = self.graph.move_node(node_id, position);
        self.flush();
        result
    }

    /// Connects two nodes and returns the new edge id.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        source_handle: Option<&str>,
    ) -> Result<String, WorkflowError> {
        self.ensure_editable("addEdge")?;
        let result = self.graph.add_edge(source, target, source_handle);
        if let Err(err) = &result {
            warn!(%err, "Rejected edge");
        }
        self.flush();
        result
    }

    /// Deletes a node through its delete button, removing its edges too.
    pub fn delete_node(&mut self, node_id: &str) -> Result<(), WorkflowError> {
        self.ensure_editable("deleteNode")?;
        if !self.config.show_delete_action {
            return Err(WorkflowError::ActionDisabled("deleteNode".to_string()));
        }
        let result = self.graph.delete_node(node_id).map(|_| ());
        self.flush();
        result
    }

    /// Reports a click on a node.
    pub fn select_node(&mut self, node_id: &str) -> Result<(), WorkflowError> {
        let node = self
            .graph
            .node(node_id)
            .ok_or_else(|| WorkflowError::NodeNotFound(node_id.to_string()))?;
        let event = TriggerEvent::node_selected(node);
        self.sink.emit(event);
        Ok(())
    }

    /// Reports a click on a node's edit button.
    pub fn request_edit(&mut self, node_id: &str) -> Result<(), WorkflowError> {
        self.ensure_editable("editNode")?;
        if !self.config.show_edit_action {
            return Err(WorkflowError::ActionDisabled("editNode".to_string()));
        }
        let node = self
            .graph
            .node(node_id)
            .ok_or_else(|| WorkflowError::NodeNotFound(node_id.to_string()))?;
        let event = TriggerEvent::node_edit(node);
        self.sink.emit(event);
        Ok(())
    }

    fn ensure_editable(&self, operation: &str) -> Result<(), WorkflowError> {
        if self.config.read_only {
            warn!(operation, "Rejected edit on read-only workflow");
            return Err(WorkflowError::ReadOnly(operation.to_string()));
        }
        Ok(())
    }

    fn flush(&mut self) {
        for event in self.graph.take_events() {
            self.sink.emit(event);
        }
    }
}

fn bind(variant: Variant, config: &ComponentConfig) -> (WorkflowGraph, Option<WorkflowMetadata>) {
    let graph = WorkflowGraph::from_bound(
        config.initial_nodes.clone(),
        config.initial_edges.clone(),
    );
    let workflow = match variant {
        Variant::V1 => None,
        Variant::V2 => config.initial_workflow.clone(),
    };
    (graph, workflow)
}

fn update_args(args: &[Value]) -> Result<(&str, Map<String, Value>), WorkflowError> {
    let invalid = |message: &str| WorkflowError::InvalidArguments {
        action: descriptor::UPDATE_NODE_CONFIG.to_string(),
        message: message.to_string(),
    };
    let node_id = args
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("nodeId must be a string"))?;
    let config = args
        .get(1)
        .and_then(Value::as_object)
        .cloned()
        .ok_or_else(|| invalid("config must be an object"))?;
    Ok((node_id, config))
}

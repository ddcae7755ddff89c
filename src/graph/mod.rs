use crate::error::{EdgeEnd, IdScope, WorkflowError};
use crate::events::TriggerEvent;
use crate::model::{NodeType, Position, WorkflowEdge, WorkflowNode, default_node_config};
use serde_json::{Map, Value};
use tracing::debug;

mod ids;

use ids::generate_id;

/// The in-memory workflow being edited: nodes, edges and a dirty flag.
///
/// Every mutation queues the trigger events it produces; the owner drains them
/// with [`WorkflowGraph::take_events`] and forwards them to the host. Operations
/// that fail leave nodes, edges and the dirty flag untouched.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    nodes: Vec<WorkflowNode>,
    edges: Vec<WorkflowEdge>,
    dirty: bool,
    events: Vec<TriggerEvent>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the initial state from bound host data.
    ///
    /// Empty ids are filled in and positions clamped. Nothing else is checked:
    /// duplicated ids or dangling edges in bound data are left for the validator
    /// to report. The result is clean and has no pending events.
    pub fn from_bound(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Self {
        let mut graph = Self::default();
        for mut node in nodes {
            if node.id.is_empty() {
                node.id = graph.fresh_node_id();
            }
            let position = node.position();
            node.set_position(position);
            graph.nodes.push(node);
        }
        for mut edge in edges {
            if edge.id.is_empty() {
                edge.id = graph.fresh_edge_id();
            }
            graph.edges.push(edge);
        }
        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "Bound initial workflow graph"
        );
        graph
    }

    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[WorkflowEdge] {
        &self.edges
    }

    pub fn node(&self, node_id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Drains the events queued since the last call, in emission order.
    pub fn take_events(&mut self) -> Vec<TriggerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Adds a node with a generated id and returns that id.
    ///
    /// `config` defaults to `{"label": "New Node"}` when `None`.
    pub fn add_node(
        &mut self,
        node_type: NodeType,
        position: Position,
        config: Option<Map<String, Value>>,
    ) -> String {
        let id = self.fresh_node_id();
        let mut node = WorkflowNode::new(id.clone(), node_type).with_position(position);
        node.node_config = config.unwrap_or_else(default_node_config);
        self.push_node(node);
        id
    }

    /// Adds a fully specified node. An empty id is replaced by a generated one;
    /// an id already in use is rejected.
    pub fn insert_node(&mut self, mut node: WorkflowNode) -> Result<String, WorkflowError> {
        if node.id.is_empty() {
            node.id = self.fresh_node_id();
        } else if self.contains_node(&node.id) {
            return Err(WorkflowError::DuplicateId {
                scope: IdScope::Node,
                id: node.id,
            });
        }
        let position = node.position();
        node.set_position(position);
        let id = node.id.clone();
        self.push_node(node);
        Ok(id)
    }

    /// Merges `config` into the node's `node_config`.
    pub fn update_node_config(
        &mut self,
        node_id: &str,
        config: Map<String, Value>,
    ) -> Result<(), WorkflowError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| WorkflowError::NodeNotFound(node_id.to_string()))?;
        node.merge_config(config);
        debug!(node_id, "Updated node config");
        self.mark_changed();
        Ok(())
    }

    /// Moves a node, clamping the position to the canvas.
    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), WorkflowError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| WorkflowError::NodeNotFound(node_id.to_string()))?;
        node.set_position(position);
        self.mark_changed();
        Ok(())
    }

    /// Removes a node together with every edge entering or leaving it.
    ///
    /// Emits `node-deleted` followed by `workflow-changed`.
    pub fn delete_node(&mut self, node_id: &str) -> Result<WorkflowNode, WorkflowError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == node_id)
            .ok_or_else(|| WorkflowError::NodeNotFound(node_id.to_string()))?;
        let node = self.nodes.remove(index);

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(node_id));
        debug!(
            node_id,
            removed_edges = before - self.edges.len(),
            "Deleted node"
        );

        self.events.push(TriggerEvent::NodeDeleted {
            node_id: node.id.clone(),
            node_type: node.node_type,
        });
        self.mark_changed();
        Ok(node)
    }

    /// Connects two existing nodes and returns the new edge id.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        source_handle: Option<&str>,
    ) -> Result<String, WorkflowError> {
        let id = self.fresh_edge_id();
        let mut edge = WorkflowEdge::new(id, source, target);
        if let Some(handle) = source_handle {
            edge.source_handle = handle.to_string();
        }
        self.insert_edge(edge)
    }

    /// Adds a fully specified edge. Both ends must exist and the id must be unused;
    /// an empty id is replaced by a generated one.
    pub fn insert_edge(&mut self, mut edge: WorkflowEdge) -> Result<String, WorkflowError> {
        if edge.id.is_empty() {
            edge.id = self.fresh_edge_id();
        } else if self.edges.iter().any(|e| e.id == edge.id) {
            return Err(WorkflowError::DuplicateId {
                scope: IdScope::Edge,
                id: edge.id,
            });
        }
        for (end, node_id) in [(EdgeEnd::Source, &edge.source), (EdgeEnd::Target, &edge.target)] {
            if !self.contains_node(node_id) {
                return Err(WorkflowError::DanglingEdgeReference {
                    edge_id: edge.id.clone(),
                    end,
                    node_id: node_id.clone(),
                });
            }
        }

        debug!(
            edge_id = %edge.id,
            source = %edge.source,
            target = %edge.target,
            "Added edge"
        );
        let id = edge.id.clone();
        self.edges.push(edge);
        self.mark_changed();
        Ok(id)
    }

    /// Empties the graph and resets the dirty flag.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.dirty = false;
        debug!("Cleared workflow graph");
        self.events.push(TriggerEvent::WorkflowChanged { is_dirty: false });
    }

    /// Records that the current state has been handed off for persistence.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    fn push_node(&mut self, node: WorkflowNode) {
        debug!(node_id = %node.id, node_type = %node.node_type, "Added node");
        self.nodes.push(node);
        self.mark_changed();
    }

    fn mark_changed(&mut self) {
        self.dirty = true;
        self.events
            .push(TriggerEvent::WorkflowChanged { is_dirty: true });
    }

    fn fresh_node_id(&self) -> String {
        generate_id("node", self.nodes.iter().map(|n| n.id.as_str()))
    }

    fn fresh_edge_id(&self) -> String {
        generate_id("edge", self.edges.iter().map(|e| e.id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_operations_leave_state_untouched() {
        let mut graph = WorkflowGraph::from_bound(
            vec![WorkflowNode::new("n1", NodeType::Message)],
            vec![],
        );

        assert!(graph.add_edge("n1", "ghost", None).is_err());
        assert!(graph.update_node_config("ghost", Map::new()).is_err());
        assert!(graph.delete_node("ghost").is_err());

        assert_eq!(graph.nodes().len(), 1);
        assert!(graph.edges().is_empty());
        assert!(!graph.is_dirty());
        assert!(graph.take_events().is_empty());
    }

    #[test]
    fn test_bound_data_gets_ids() {
        let graph = WorkflowGraph::from_bound(
            vec![WorkflowNode::new("", NodeType::Api)],
            vec![WorkflowEdge::new("", "a", "b")],
        );
        assert!(graph.nodes()[0].id.starts_with("node-"));
        assert!(graph.edges()[0].id.starts_with("edge-"));
    }
}

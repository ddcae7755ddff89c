use crate::model::{WorkflowEdge, WorkflowMetadata, WorkflowNode};
use serde::{Deserialize, Serialize};

/// What the `save` action hands back to the host for persistence.
///
/// The component does not persist anything itself; the host stores the raw
/// collections (first component version) or forwards the upsert arguments to its
/// backend RPC (second version).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavePayload {
    /// `{nodes, edges}`
    Raw {
        nodes: Vec<WorkflowNode>,
        edges: Vec<WorkflowEdge>,
    },
    /// `{p_workflow, p_nodes, p_edges}`, the argument object of the upsert RPC.
    Upsert {
        p_workflow: WorkflowMetadata,
        p_nodes: Vec<WorkflowNode>,
        p_edges: Vec<WorkflowEdge>,
    },
}

impl SavePayload {
    pub fn nodes(&self) -> &[WorkflowNode] {
        match self {
            SavePayload::Raw { nodes, .. } => nodes,
            SavePayload::Upsert { p_nodes, .. } => p_nodes,
        }
    }

    pub fn edges(&self) -> &[WorkflowEdge] {
        match self {
            SavePayload::Raw { edges, .. } => edges,
            SavePayload::Upsert { p_edges, .. } => p_edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeType;
    use serde_json::json;

    #[test]
    fn test_upsert_payload_keys() {
        let mut workflow = WorkflowMetadata::new();
        workflow.insert("merchant_id".to_string(), json!("m-42"));
        let payload = SavePayload::Upsert {
            p_workflow: workflow,
            p_nodes: vec![WorkflowNode::new("n1", NodeType::Message)],
            p_edges: vec![],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["p_workflow"]["merchant_id"], json!("m-42"));
        assert_eq!(value["p_nodes"][0]["id"], json!("n1"));
        assert_eq!(value["p_edges"], json!([]));
        assert_eq!(payload.nodes().len(), 1);
    }
}

use crate::error::{EdgeEnd, IdScope, WorkflowError};
use crate::model::{WorkflowEdge, WorkflowNode};
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The outcome of validating a workflow graph, as returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: &[WorkflowError]) -> Self {
        Self {
            valid: errors.is_empty(),
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Runs every structural check and returns all violations, in a stable order:
/// empty workflow, duplicate node ids, duplicate edge ids, dangling edge ends.
pub fn check(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> Vec<WorkflowError> {
    let mut errors = Vec::new();

    if nodes.is_empty() {
        errors.push(WorkflowError::EmptyWorkflow);
    }

    errors.extend(
        nodes
            .iter()
            .map(|n| n.id.as_str())
            .duplicates()
            .map(|id| WorkflowError::DuplicateId {
                scope: IdScope::Node,
                id: id.to_string(),
            }),
    );
    errors.extend(
        edges
            .iter()
            .map(|e| e.id.as_str())
            .duplicates()
            .map(|id| WorkflowError::DuplicateId {
                scope: IdScope::Edge,
                id: id.to_string(),
            }),
    );

    let known: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in edges {
        for (end, node_id) in [(EdgeEnd::Source, &edge.source), (EdgeEnd::Target, &edge.target)] {
            if !known.contains(node_id.as_str()) {
                errors.push(WorkflowError::DanglingEdgeReference {
                    edge_id: edge.id.clone(),
                    end,
                    node_id: node_id.clone(),
                });
            }
        }
    }

    errors
}

/// Validates a node/edge collection and renders the result for the host.
pub fn validate(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> ValidationReport {
    ValidationReport::from_errors(&check(nodes, edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeType;

    #[test]
    fn test_single_node_is_valid() {
        let report = validate(&[WorkflowNode::new("n1", NodeType::Message)], &[]);
        assert_eq!(
            report,
            ValidationReport {
                valid: true,
                errors: vec![]
            }
        );
    }

    #[test]
    fn test_empty_workflow() {
        let report = validate(&[], &[]);
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["No nodes in workflow".to_string()]);
    }

    #[test]
    fn test_errors_accumulate() {
        let nodes = vec![
            WorkflowNode::new("n1", NodeType::Message),
            WorkflowNode::new("n1", NodeType::Wait),
        ];
        let edges = vec![
            WorkflowEdge::new("e1", "n1", "missing"),
            WorkflowEdge::new("e1", "gone", "n1"),
        ];

        let errors = check(&nodes, &edges);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&WorkflowError::DuplicateId {
            scope: IdScope::Node,
            id: "n1".to_string()
        }));
        assert!(errors.contains(&WorkflowError::DuplicateId {
            scope: IdScope::Edge,
            id: "e1".to_string()
        }));
        assert!(errors.contains(&WorkflowError::DanglingEdgeReference {
            edge_id: "e1".to_string(),
            end: EdgeEnd::Target,
            node_id: "missing".to_string()
        }));
        assert!(errors.contains(&WorkflowError::DanglingEdgeReference {
            edge_id: "e1".to_string(),
            end: EdgeEnd::Source,
            node_id: "gone".to_string()
        }));
    }

    #[test]
    fn test_triplicate_id_reported_once() {
        let nodes = vec![
            WorkflowNode::new("x", NodeType::Api),
            WorkflowNode::new("x", NodeType::Api),
            WorkflowNode::new("x", NodeType::Api),
        ];
        let report = validate(&nodes, &[]);
        assert_eq!(report.errors, vec!["Duplicate node id 'x'".to_string()]);
    }
}

//! Tests for structural validation of workflow graphs.
mod common;
use common::*;
use flowcanvas::prelude::*;

#[test]
fn test_single_message_node_is_valid() {
    let nodes = vec![WorkflowNode::new("n1", NodeType::Message)];
    let report = validate(&nodes, &[]);
    assert!(report.valid);
    assert!(report.errors.is_empty());
}

#[test]
fn test_empty_workflow_is_invalid() {
    let report = validate(&[], &[]);
    assert_eq!(
        report,
        ValidationReport {
            valid: false,
            errors: vec!["No nodes in workflow".to_string()],
        }
    );
}

#[test]
fn test_empty_workflow_with_edges_still_reports_empty() {
    let edges = vec![WorkflowEdge::new("e1", "a", "b")];
    let report = validate(&[], &edges);
    assert!(!report.valid);
    assert!(report.errors.contains(&"No nodes in workflow".to_string()));
    assert_eq!(report.errors.len(), 3);
}

#[test]
fn test_dangling_edge_is_reported() {
    let nodes = vec![WorkflowNode::new("n1", NodeType::Message)];
    let edges = vec![WorkflowEdge::new("e1", "n1", "missing")];

    let report = validate(&nodes, &edges);
    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec!["Edge 'e1' references missing target node 'missing'".to_string()]
    );
}

#[test]
fn test_simple_flow_is_valid() {
    let report = validate(&create_simple_nodes(), &create_simple_edges());
    assert!(report.valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn test_all_violations_are_accumulated() {
    let mut nodes = create_simple_nodes();
    nodes.push(WorkflowNode::new("greet", NodeType::Api));
    let mut edges = create_simple_edges();
    edges.push(WorkflowEdge::new("e2", "pause", "nowhere"));

    let report = validate(&nodes, &edges);
    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec![
            "Duplicate node id 'greet'".to_string(),
            "Duplicate edge id 'e2'".to_string(),
            "Edge 'e2' references missing target node 'nowhere'".to_string(),
        ]
    );
}

#[test]
fn test_bound_graph_with_problems_is_caught_by_validation() {
    let graph = WorkflowGraph::from_bound(
        vec![
            WorkflowNode::new("a", NodeType::Wait),
            WorkflowNode::new("a", NodeType::Wait),
        ],
        vec![WorkflowEdge::new("e1", "a", "b")],
    );
    let errors = flowcanvas::validator::check(graph.nodes(), graph.edges());
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&WorkflowError::DuplicateId {
        scope: IdScope::Node,
        id: "a".to_string(),
    }));
}

use clap::Parser;
use flowcanvas::model::{NodeType, Position, WorkflowEdge, WorkflowNode};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use serde_json::json;
use std::fs;

/// A CLI tool to generate component content fixtures for the Workflow Builder
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_content.json")]
    output: String,

    /// Number of nodes to generate
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// Number of extra edges to add on top of the spanning chain
    #[arg(long, default_value_t = 3)]
    extra_edges: usize,

    /// Number of edges pointing at nodes that do not exist
    #[arg(long, default_value_t = 0)]
    dangling: usize,

    /// Include an initialWorkflow record for the second component version
    #[arg(long)]
    with_workflow: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.nodes == 0 && cli.extra_edges > 0 {
        eprintln!("Error: --extra-edges requires at least one node");
        std::process::exit(1);
    }

    println!(
        "Generating workflow content ({} nodes, {} extra edges, {} dangling)...",
        cli.nodes, cli.extra_edges, cli.dangling
    );

    let nodes = generate_nodes(&mut rng, cli.nodes);
    let mut edges = generate_edges(&mut rng, &nodes, cli.extra_edges);
    edges.extend(generate_dangling_edges(&mut rng, &nodes, cli.dangling, edges.len()));

    let mut content = json!({
        "initialNodes": nodes,
        "initialEdges": edges,
    });
    if cli.with_workflow {
        content["initialWorkflow"] = json!({
            "id": format!("wf-{}", rng.random_range(1000..9999)),
            "merchant_id": format!("m-{}", rng.random_range(1..500)),
            "name": "Generated Workflow",
            "description": "Random fixture from workflow-gen",
            "is_active": rng.random_bool(0.5),
        });
    }

    fs::write(&cli.output, serde_json::to_string_pretty(&content)?)?;
    println!(
        "Successfully generated and saved workflow content to '{}'",
        cli.output
    );

    Ok(())
}

/// Nodes laid out left to right with some vertical jitter.
fn generate_nodes(rng: &mut ThreadRng, count: usize) -> Vec<WorkflowNode> {
    (0..count)
        .map(|i| {
            let node_type = *NodeType::ALL.choose(rng).unwrap_or(&NodeType::Message);
            let position = Position::new(
                100.0 + 220.0 * i as f64,
                rng.random_range(50.0..600.0),
            );
            WorkflowNode::new(format!("n{}", i + 1), node_type)
                .with_position(position)
                .with_label(format!("{} {}", node_type.display_label(), i + 1))
        })
        .collect()
}

/// A chain through all nodes plus `extra` random forward edges.
fn generate_edges(rng: &mut ThreadRng, nodes: &[WorkflowNode], extra: usize) -> Vec<WorkflowEdge> {
    let mut edges: Vec<WorkflowEdge> = nodes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let edge = WorkflowEdge::new(format!("e{}", i + 1), &pair[0].id, &pair[1].id);
            match pair[0].node_type {
                NodeType::Condition => edge.with_source_handle("true"),
                _ => edge,
            }
        })
        .collect();

    for _ in 0..extra {
        let source = rng.random_range(0..nodes.len());
        let target = rng.random_range(0..nodes.len());
        let id = format!("e{}", edges.len() + 1);
        edges.push(WorkflowEdge::new(id, &nodes[source].id, &nodes[target].id));
    }
    println!("-> Generated {} edge(s).", edges.len());
    edges
}

fn generate_dangling_edges(
    rng: &mut ThreadRng,
    nodes: &[WorkflowNode],
    count: usize,
    offset: usize,
) -> Vec<WorkflowEdge> {
    (0..count)
        .map(|i| {
            let source = nodes
                .choose(rng)
                .map(|n| n.id.clone())
                .unwrap_or_else(|| "ghost-source".to_string());
            WorkflowEdge::new(format!("e{}", offset + i + 1), source, format!("missing-{}", i + 1))
        })
        .collect()
}

use clap::{Parser, Subcommand, ValueEnum};
use flowcanvas::prelude::*;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantCli {
    V1,
    V2,
}

impl From<VariantCli> for Variant {
    fn from(value: VariantCli) -> Self {
        match value {
            VariantCli::V1 => Variant::V1,
            VariantCli::V2 => Variant::V2,
        }
    }
}

/// Inspect the Workflow Builder component and run its actions against bound content
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The component version to emulate
    #[arg(short, long, value_enum, default_value = "v2", global = true)]
    variant: VariantCli,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the component descriptor as JSON
    Describe,
    /// Validate the graph bound in a content JSON file
    Validate {
        /// Path to the component content JSON (initialNodes, initialEdges, ...)
        content_path: String,
    },
    /// Run the save action on a content JSON file and print the payload
    Save {
        /// Path to the component content JSON (initialNodes, initialEdges, ...)
        content_path: String,
        /// Also print the trigger events the component emitted
        #[arg(short, long)]
        events: bool,
    },
    /// List which properties the panel shows for the given content
    Visibility {
        /// Path to the component content JSON
        content_path: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let variant = Variant::from(cli.variant);

    match cli.command {
        Command::Describe => {
            let descriptor = ComponentDescriptor::for_variant(variant);
            print_json(&descriptor);
        }
        Command::Validate { content_path } => {
            let mut builder = load_builder(variant, &content_path);
            let report = builder.validate();
            print_json(&report);
            if !report.valid {
                std::process::exit(2);
            }
        }
        Command::Save {
            content_path,
            events,
        } => {
            let mut builder = load_builder(variant, &content_path);
            let payload = builder
                .call_action("save", &[])
                .unwrap_or_else(|e| exit_with_error(&format!("Save failed: {}", e)));
            print_json(&payload);
            if events {
                print_json(builder.sink());
            }
            if payload.is_null() {
                std::process::exit(2);
            }
        }
        Command::Visibility { content_path } => {
            let config = load_config(&content_path);
            let descriptor = ComponentDescriptor::for_variant(variant);
            for name in descriptor.property_names() {
                let state = if is_visible(&config, variant, name) {
                    "shown"
                } else {
                    "hidden"
                };
                println!("{:<20} {}", name, state);
            }
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Builds the log filter from `RUST_LOG` directives, falling back to `info`
/// when they are unset or malformed.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn load_config(content_path: &str) -> ComponentConfig {
    let content = fs::read_to_string(content_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read content file '{}': {}",
            content_path, e
        ))
    });
    let config = ComponentConfig::from_json(&content)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    debug!(
        nodes = config.initial_nodes.len(),
        edges = config.initial_edges.len(),
        "Loaded component content"
    );
    config
}

fn load_builder(variant: Variant, content_path: &str) -> WorkflowBuilder {
    WorkflowBuilder::collecting(variant, load_config(content_path))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to render JSON: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

use artifact_graph::application::dto::OutputFormat;
use artifact_graph::graph_building::domain::ArtifactIdentifier;
use clap::Parser;
use std::path::PathBuf;

/// Render the transitive dependency graph of an artifact as GraphML or DOT
#[derive(Parser, Debug)]
#[command(name = "artifact-graph")]
#[command(version)]
#[command(
    about = "Render the transitive dependency graph of an artifact as GraphML or DOT",
    long_about = None
)]
pub struct Args {
    /// Root artifact coordinates: group:artifact:version[:classifier]
    #[arg(short, long, value_name = "COORDINATES")]
    pub root: ArtifactIdentifier,

    /// Local artifact repository directory
    #[arg(long, value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Comma-separated report definitions, e.g. "COMPILE,TEST-TRANSITIVE"
    /// [default: PACKAGE,COMPILE,RUNTIME,TEST,COMPILE-TRANSITIVE]
    #[arg(long, value_name = "LIST")]
    pub reports: Option<String>,

    /// Exclude artifacts whose groupId matches (supports wildcards: *)
    /// Can be specified multiple times
    #[arg(long = "exclude-group", value_name = "PATTERN")]
    pub exclude_group: Vec<String>,

    /// Exclude artifacts whose artifactId matches (supports wildcards: *)
    /// Can be specified multiple times
    #[arg(long = "exclude-artifact", value_name = "PATTERN")]
    pub exclude_artifact: Vec<String>,

    /// Only keep artifacts whose groupId matches (supports wildcards: *)
    #[arg(long = "include-group", value_name = "PATTERN")]
    pub include_group: Option<String>,

    /// Do not show versions in vertex labels
    #[arg(long)]
    pub hide_version: bool,

    /// Do not label edges with their scope
    #[arg(long)]
    pub hide_edge_labels: bool,

    /// Output format: graphml or dot [default: graphml]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Directory for report documents, or "-" for stdout (single report only) [default: target]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Base name replacing <artifactId>-<version> in file names
    #[arg(long, value_name = "NAME")]
    pub final_name: Option<String>,

    /// Path to config file (default: auto-discover artifact-graph.config.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

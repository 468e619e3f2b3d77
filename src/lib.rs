//! artifact-graph - dependency graph reports for artifact repositories
//!
//! This library walks the dependency descriptors of a local artifact
//! repository, starting at a root artifact, and renders one dependency graph
//! per report definition (for example `COMPILE` or `TEST-TRANSITIVE`) as
//! GraphML or Graphviz DOT. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_building`): Artifacts, graphs, edge policies and the BFS builder
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Repository, serializers, console and filesystem
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use artifact_graph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let resolver = CachingArtifactResolver::new(LocalRepositoryResolver::new(
//!     PathBuf::from("/opt/repository"),
//! )?);
//! let progress_reporter = StderrProgressReporter::new();
//! let presenter = FileSystemWriter::new(PathBuf::from("target"));
//!
//! let use_case = GenerateGraphsUseCase::new(resolver, progress_reporter, presenter);
//!
//! let request = GraphRequest::builder()
//!     .root("com.example:app:1.0".parse()?)
//!     .reports(DependencyOptions::parse_report_definitions("COMPILE,TEST-TRANSITIVE")?)
//!     .format(OutputFormat::Dot)
//!     .build()?;
//!
//! let response = use_case.execute(request)?;
//! println!("{} report(s) written", response.written_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod graph_building;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        DotSerializer, GraphMlSerializer, SimpleVertexRenderer,
    };
    pub use crate::adapters::outbound::repository::{
        CachingArtifactResolver, LocalRepositoryResolver,
    };
    pub use crate::application::dto::{
        GraphRequest, GraphResponse, OutputFormat, ReportOutcome, ReportStatus,
    };
    pub use crate::application::use_cases::GenerateGraphsUseCase;
    pub use crate::graph_building::domain::{
        Artifact, ArtifactIdentifier, DependencyEdge, DependencyGraph, DependencyOptions,
        GraphType, ResolvedArtifact, Scope,
    };
    pub use crate::graph_building::policies::EdgeInclusionPolicy;
    pub use crate::graph_building::services::{BreadthFirstGraphBuilder, DependencyFilter};
    pub use crate::ports::outbound::{
        ArtifactResolver, GraphSerializer, OutputPresenter, ProgressReporter, RenderOptions,
        ResolutionError, VertexRenderer,
    };
    pub use crate::shared::Result;
}

pub mod artifact;
pub mod artifact_identifier;
pub mod dependency_options;
pub mod graph;

pub use artifact::{Artifact, DependencyEdge, ResolvedArtifact, Scope, DEFAULT_DEPENDENCY_TYPE};
pub use artifact_identifier::ArtifactIdentifier;
pub use dependency_options::{DependencyOptions, GraphType, DEFAULT_REPORTS};
pub use graph::{DependencyGraph, Edge, EdgeView, Vertex};

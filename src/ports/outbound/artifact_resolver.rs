use crate::graph_building::domain::{ArtifactIdentifier, ResolvedArtifact};
use std::path::PathBuf;
use thiserror::Error;

/// Why an artifact could not be resolved.
///
/// A resolution failure is a value, not a fault: the graph builder keeps a
/// placeholder vertex and carries on with the rest of the traversal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no descriptor for {artifact} at {}", path.display())]
    DescriptorNotFound { artifact: String, path: PathBuf },

    #[error("invalid descriptor for {artifact}: {reason}")]
    InvalidDescriptor { artifact: String, reason: String },

    #[error("relocation of {artifact} exceeds {hops} hops")]
    RelocationLoop { artifact: String, hops: usize },

    #[error("failed to read {artifact}: {details}")]
    Io { artifact: String, details: String },
}

/// ArtifactResolver port: artifact coordinates in, size and declared
/// dependencies out.
///
/// Implementations must be safe to call repeatedly for the same identifier
/// and must report unresolvable artifacts as `ResolutionError` instead of
/// panicking. Relocations are followed by the resolver; the caller keeps
/// keying the artifact by the identifier it asked for.
pub trait ArtifactResolver: Send + Sync {
    fn resolve_artifact(
        &self,
        id: &ArtifactIdentifier,
    ) -> std::result::Result<ResolvedArtifact, ResolutionError>;
}

impl<R: ArtifactResolver + ?Sized> ArtifactResolver for &R {
    fn resolve_artifact(
        &self,
        id: &ArtifactIdentifier,
    ) -> std::result::Result<ResolvedArtifact, ResolutionError> {
        (**self).resolve_artifact(id)
    }
}

/// Artifact repository adapters implementing the ArtifactResolver port
mod caching_resolver;
mod local_repository;

pub use caching_resolver::CachingArtifactResolver;
pub use local_repository::LocalRepositoryResolver;

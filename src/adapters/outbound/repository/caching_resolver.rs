use crate::graph_building::domain::{ArtifactIdentifier, ResolvedArtifact};
use crate::ports::outbound::{ArtifactResolver, ResolutionError};
use dashmap::DashMap;

type CachedResolution = std::result::Result<ResolvedArtifact, ResolutionError>;

/// CachingArtifactResolver wraps an ArtifactResolver and memoizes its results.
///
/// Failures are cached as well, so an unresolvable artifact is only looked
/// up once per run even when several reports reach it. The cache is a
/// `DashMap` and can be shared by builders running on different threads.
pub struct CachingArtifactResolver<R: ArtifactResolver> {
    inner: R,
    cache: DashMap<ArtifactIdentifier, CachedResolution>,
}

impl<R: ArtifactResolver> CachingArtifactResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Number of cached identifiers
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<R: ArtifactResolver> ArtifactResolver for CachingArtifactResolver<R> {
    fn resolve_artifact(&self, id: &ArtifactIdentifier) -> CachedResolution {
        if let Some(cached) = self.cache.get(id) {
            return cached.value().clone();
        }

        // Resolve outside of the map's shard lock
        let resolution = self.inner.resolve_artifact(id);
        self.cache.insert(id.clone(), resolution.clone());
        resolution
    }
}

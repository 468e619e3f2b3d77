use artifact_graph::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock ArtifactResolver backed by a map; unknown artifacts fail to resolve
#[derive(Default)]
pub struct MockArtifactResolver {
    artifacts: HashMap<ArtifactIdentifier, ResolvedArtifact>,
    calls: Mutex<Vec<ArtifactIdentifier>>,
}

impl MockArtifactResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifact(mut self, coords: &str, size: u64, dependencies: Vec<DependencyEdge>) -> Self {
        self.artifacts.insert(
            coords.parse().unwrap(),
            ResolvedArtifact::new(size, dependencies),
        );
        self
    }

    /// Identifiers in the order they were resolved
    pub fn calls(&self) -> Vec<ArtifactIdentifier> {
        self.calls.lock().unwrap().clone()
    }
}

impl ArtifactResolver for MockArtifactResolver {
    fn resolve_artifact(
        &self,
        id: &ArtifactIdentifier,
    ) -> std::result::Result<ResolvedArtifact, ResolutionError> {
        self.calls.lock().unwrap().push(id.clone());
        self.artifacts
            .get(id)
            .cloned()
            .ok_or_else(|| ResolutionError::InvalidDescriptor {
                artifact: id.to_string(),
                reason: "unknown to mock resolver".to_string(),
            })
    }
}

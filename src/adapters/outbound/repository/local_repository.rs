use crate::graph_building::domain::{
    ArtifactIdentifier, DependencyEdge, ResolvedArtifact, Scope, DEFAULT_DEPENDENCY_TYPE,
};
use crate::ports::outbound::{ArtifactResolver, ResolutionError};
use crate::shared::error::GraphError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of relocations followed for one artifact
const MAX_RELOCATION_HOPS: usize = 8;

const DEFAULT_PACKAGING: &str = "jar";

/// On-disk descriptor of one artifact version
#[derive(Debug, Deserialize)]
struct ArtifactDescriptor {
    #[serde(default = "default_packaging")]
    packaging: String,
    #[serde(default)]
    relocation: Option<RelocationEntry>,
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
    #[serde(default)]
    dependency_management: Vec<DependencyEntry>,
}

fn default_packaging() -> String {
    DEFAULT_PACKAGING.to_string()
}

#[derive(Debug, Deserialize)]
struct RelocationEntry {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DependencyEntry {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(default)]
    classifier: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default, rename = "type")]
    dependency_type: Option<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    transitive_only: bool,
}

impl DependencyEntry {
    fn into_edge(self) -> std::result::Result<DependencyEdge, String> {
        let mut target = ArtifactIdentifier::new(self.group_id, self.artifact_id, self.version)
            .map_err(|e| e.to_string())?;
        if let Some(classifier) = self.classifier {
            target = target.with_classifier(classifier).map_err(|e| e.to_string())?;
        }
        let scope: Scope = self.scope.as_deref().unwrap_or_default().parse()?;

        let mut edge = DependencyEdge::new(target, scope).with_type(
            self.dependency_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_DEPENDENCY_TYPE.to_string()),
        );
        edge.optional = self.optional;
        edge.transitive_only = self.transitive_only;
        Ok(edge)
    }
}

/// LocalRepositoryResolver adapter reading artifacts from a local repository
///
/// Layout: `<root>/<group with '.' as '/'>/<artifactId>/<version>/` holding
/// the TOML descriptor `<artifactId>-<version>.toml` and the artifact file
/// `<artifactId>-<version>[-<classifier>].<ext>`.
pub struct LocalRepositoryResolver {
    root: PathBuf,
}

impl LocalRepositoryResolver {
    /// Creates a resolver for the repository rooted at `root`
    ///
    /// # Errors
    /// Returns `InvalidRepositoryPath` if `root` is not an existing directory.
    pub fn new(root: PathBuf) -> Result<Self> {
        let metadata = fs::metadata(&root).map_err(|e| GraphError::InvalidRepositoryPath {
            path: root.clone(),
            reason: e.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(GraphError::InvalidRepositoryPath {
                path: root,
                reason: "Not a directory".to_string(),
            }
            .into());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn version_directory(&self, id: &ArtifactIdentifier) -> std::result::Result<PathBuf, ResolutionError> {
        let mut path = self.root.clone();
        for segment in id.group_id().split('.') {
            push_segment(&mut path, segment, id)?;
        }
        push_segment(&mut path, id.artifact_id(), id)?;
        push_segment(&mut path, id.version(), id)?;
        Ok(path)
    }

    fn read_descriptor(
        &self,
        id: &ArtifactIdentifier,
    ) -> std::result::Result<ArtifactDescriptor, ResolutionError> {
        let path = self
            .version_directory(id)?
            .join(format!("{}-{}.toml", id.artifact_id(), id.version()));

        if fs::symlink_metadata(&path).is_err() {
            return Err(ResolutionError::DescriptorNotFound {
                artifact: id.to_string(),
                path,
            });
        }

        let content = read_checked_file(&path, "artifact descriptor").map_err(|e| {
            ResolutionError::Io {
                artifact: id.to_string(),
                details: e.to_string(),
            }
        })?;

        toml::from_str(&content).map_err(|e| ResolutionError::InvalidDescriptor {
            artifact: id.to_string(),
            reason: e.to_string(),
        })
    }

    /// Size of the artifact file in bytes, or 0 when it is absent
    fn artifact_size(
        &self,
        id: &ArtifactIdentifier,
        packaging: &str,
    ) -> std::result::Result<u64, ResolutionError> {
        let extension = match packaging {
            "bundle" => "jar",
            other => other,
        };
        let file_name = match id.classifier() {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                id.artifact_id(),
                id.version(),
                classifier,
                extension
            ),
            None => format!("{}-{}.{}", id.artifact_id(), id.version(), extension),
        };
        let path = self.version_directory(id)?.join(file_name);

        Ok(fs::metadata(&path)
            .ok()
            .filter(|metadata| metadata.is_file())
            .map(|metadata| metadata.len())
            .unwrap_or(0))
    }
}

/// Appends one path segment derived from a coordinate, rejecting segments
/// that would leave the repository.
fn push_segment(
    path: &mut PathBuf,
    segment: &str,
    id: &ArtifactIdentifier,
) -> std::result::Result<(), ResolutionError> {
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(ResolutionError::InvalidDescriptor {
            artifact: id.to_string(),
            reason: format!("'{}' is not a valid repository path segment", segment),
        });
    }
    path.push(segment);
    Ok(())
}

fn into_edges(
    entries: Vec<DependencyEntry>,
    id: &ArtifactIdentifier,
) -> std::result::Result<Vec<DependencyEdge>, ResolutionError> {
    entries
        .into_iter()
        .map(|entry| {
            entry
                .into_edge()
                .map_err(|reason| ResolutionError::InvalidDescriptor {
                    artifact: id.to_string(),
                    reason,
                })
        })
        .collect()
}

impl ArtifactResolver for LocalRepositoryResolver {
    fn resolve_artifact(
        &self,
        id: &ArtifactIdentifier,
    ) -> std::result::Result<ResolvedArtifact, ResolutionError> {
        let mut current = id.clone();
        let mut descriptor = self.read_descriptor(&current)?;
        let mut hops = 0;

        while let Some(relocation) = descriptor.relocation.take() {
            let target = current
                .relocated(
                    relocation.group_id.as_deref(),
                    relocation.artifact_id.as_deref(),
                    relocation.version.as_deref(),
                )
                .map_err(|e| ResolutionError::InvalidDescriptor {
                    artifact: current.to_string(),
                    reason: e.to_string(),
                })?;
            if target == current {
                break;
            }

            hops += 1;
            if hops > MAX_RELOCATION_HOPS {
                return Err(ResolutionError::RelocationLoop {
                    artifact: id.to_string(),
                    hops: MAX_RELOCATION_HOPS,
                });
            }

            descriptor = self.read_descriptor(&target)?;
            current = target;
        }

        let size = self.artifact_size(&current, &descriptor.packaging)?;
        let dependencies = into_edges(descriptor.dependencies, &current)?;
        let managed = into_edges(descriptor.dependency_management, &current)?;

        Ok(ResolvedArtifact::new(size, dependencies).with_managed_dependencies(managed))
    }
}

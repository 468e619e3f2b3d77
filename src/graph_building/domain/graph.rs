//! Dependency graph aggregate backed by petgraph.
//!
//! Vertices are keyed by [`ArtifactIdentifier`]; at most one vertex exists per
//! identifier. Edges are directed from the depending artifact to its
//! dependency and are deduplicated per (source, target, label).

use super::{Artifact, ArtifactIdentifier, Scope, DEFAULT_DEPENDENCY_TYPE};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// A graph node: the artifact coordinates plus the resolved payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: ArtifactIdentifier,
    artifact: Artifact,
}

impl Vertex {
    fn new(id: ArtifactIdentifier) -> Self {
        Self {
            id,
            artifact: Artifact::Unresolved,
        }
    }

    pub fn id(&self) -> &ArtifactIdentifier {
        &self.id
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }
}

/// Edge payload: the scope and dependency type that justified the edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub scope: Scope,
    pub dependency_type: String,
    pub optional: bool,
}

impl Edge {
    pub fn new(scope: Scope, dependency_type: impl Into<String>, optional: bool) -> Self {
        Self {
            scope,
            dependency_type: dependency_type.into(),
            optional,
        }
    }

    /// Display label: the scope, with the dependency type appended when it
    /// is not the default `jar`.
    pub fn label(&self) -> String {
        if self.dependency_type == DEFAULT_DEPENDENCY_TYPE {
            self.scope.as_str().to_string()
        } else {
            format!("{}/{}", self.scope, self.dependency_type)
        }
    }
}

/// Borrowed view of one edge together with its endpoints.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'g> {
    pub source_index: usize,
    pub target_index: usize,
    pub source: &'g Vertex,
    pub target: &'g Vertex,
    pub edge: &'g Edge,
}

/// Directed dependency graph.
///
/// Only read accessors are public; the graph builder populates it through
/// crate-private methods and hands it over effectively frozen.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<Vertex, Edge>,
    node_indices: HashMap<ArtifactIdentifier, NodeIndex>,
}

impl DependencyGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the vertex for `id`, creating it if needed.
    pub(crate) fn ensure_vertex(&mut self, id: &ArtifactIdentifier) -> NodeIndex {
        if let Some(&index) = self.node_indices.get(id) {
            return index;
        }
        let index = self.graph.add_node(Vertex::new(id.clone()));
        self.node_indices.insert(id.clone(), index);
        index
    }

    pub(crate) fn set_artifact(&mut self, index: NodeIndex, artifact: Artifact) {
        self.graph[index].artifact = artifact;
    }

    /// Adds an edge unless an edge with the same label already joins the
    /// two vertices. Returns true if the edge was added.
    pub(crate) fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, edge: Edge) -> bool {
        let label = edge.label();
        let duplicate = self
            .graph
            .edges_connecting(source, target)
            .any(|existing| existing.weight().label() == label);
        if duplicate {
            return false;
        }
        self.graph.add_edge(source, target, edge);
        true
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertices in insertion order (the root first).
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.graph.node_indices().map(move |index| &self.graph[index])
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        self.graph.edge_references().map(move |e| EdgeView {
            source_index: e.source().index(),
            target_index: e.target().index(),
            source: &self.graph[e.source()],
            target: &self.graph[e.target()],
            edge: e.weight(),
        })
    }

    pub fn vertex(&self, id: &ArtifactIdentifier) -> Option<&Vertex> {
        self.node_indices.get(id).map(|&index| &self.graph[index])
    }

    /// Position of the vertex in [`vertices`](Self::vertices) order.
    pub fn index_of(&self, id: &ArtifactIdentifier) -> Option<usize> {
        self.node_indices.get(id).map(|index| index.index())
    }

    /// The first vertex added, i.e. the root of the traversal.
    pub fn root(&self) -> Option<&Vertex> {
        self.vertices().next()
    }

    /// Edges leaving the vertex for `id`, in insertion order.
    pub fn dependencies_of(&self, id: &ArtifactIdentifier) -> Vec<EdgeView<'_>> {
        match self.index_of(id) {
            Some(index) => self
                .edges()
                .filter(|view| view.source_index == index)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn contains(&self, id: &ArtifactIdentifier) -> bool {
        self.node_indices.contains_key(id)
    }
}

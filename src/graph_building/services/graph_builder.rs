use super::DependencyFilter;
use crate::graph_building::domain::{
    Artifact, ArtifactIdentifier, DependencyGraph, DependencyOptions, Edge,
};
use crate::graph_building::policies::EdgeInclusionPolicy;
use crate::ports::outbound::{ArtifactResolver, ProgressReporter};
use std::collections::{HashSet, VecDeque};

/// BreadthFirstGraphBuilder walks the dependency space level by level from
/// a root artifact and records the kept dependency edges as a graph.
///
/// Each identifier is enqueued at most once, which bounds the traversal on
/// cyclic inputs and ensures shared dependencies are resolved only once.
/// Resolution failures never abort the walk: the artifact stays in the graph
/// as an unresolved placeholder and a warning is reported.
///
/// The visited set and queue live inside one `build_graph` call, so a
/// builder can be reused for several reports.
pub struct BreadthFirstGraphBuilder<'a, R, P> {
    resolver: &'a R,
    progress_reporter: &'a P,
    filter: &'a DependencyFilter,
}

impl<'a, R, P> BreadthFirstGraphBuilder<'a, R, P>
where
    R: ArtifactResolver,
    P: ProgressReporter,
{
    pub fn new(resolver: &'a R, progress_reporter: &'a P, filter: &'a DependencyFilter) -> Self {
        Self {
            resolver,
            progress_reporter,
            filter,
        }
    }

    /// Builds the dependency graph of `root` for one report.
    ///
    /// Sibling dependencies are handled in the order the resolver returns
    /// them, which fixes the edge order of the result.
    pub fn build_graph(&self, root: &ArtifactIdentifier, options: &DependencyOptions) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        let mut visited: HashSet<ArtifactIdentifier> = HashSet::new();
        let mut queue: VecDeque<ArtifactIdentifier> = VecDeque::new();

        graph.ensure_vertex(root);
        visited.insert(root.clone());
        queue.push_back(root.clone());

        while let Some(current) = queue.pop_front() {
            let current_label = current.to_string();
            self.progress_reporter.report_progress(
                visited.len() - queue.len(),
                queue.len(),
                Some(&current_label),
            );

            let source = graph.ensure_vertex(&current);
            let artifact = match self.resolver.resolve_artifact(&current) {
                Ok(resolved) => Artifact::Resolved(resolved),
                Err(e) => {
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  Could not resolve {}: {} (kept as unresolved)",
                        current_label, e
                    ));
                    Artifact::Unresolved
                }
            };

            let from_root = &current == root;
            for dependency in artifact.dependencies() {
                if !self.filter.keeps(&dependency.target) {
                    continue;
                }
                if !EdgeInclusionPolicy::includes(dependency, from_root, options) {
                    continue;
                }

                let target = graph.ensure_vertex(&dependency.target);
                graph.add_edge(
                    source,
                    target,
                    Edge::new(
                        dependency.scope,
                        dependency.dependency_type.as_str(),
                        dependency.optional,
                    ),
                );

                if visited.insert(dependency.target.clone()) {
                    queue.push_back(dependency.target.clone());
                }
            }

            graph.set_artifact(source, artifact);
        }

        graph
    }
}

use crate::graph_building::domain::{DependencyEdge, DependencyOptions};

/// EdgeInclusionPolicy decides whether a declared dependency becomes an edge
/// of the graph requested by one report.
///
/// Rules, all of which must hold:
/// 1. the report's graph type accepts the dependency's scope
/// 2. below the root, only transitively propagating scopes (compile,
///    runtime) are followed unless the report includes all transitive
///    dependencies
/// 3. dependencies marked transitive-only require the report to include all
///    transitive dependencies
/// 4. below the root, optional dependencies require the report to include
///    optionals; optional dependencies of the root itself are always kept
///
/// Exclusion patterns are not part of this policy; see `DependencyFilter`.
pub struct EdgeInclusionPolicy;

impl EdgeInclusionPolicy {
    /// # Arguments
    /// * `edge` - The declared dependency
    /// * `from_root` - Whether the declaring artifact is the traversal root
    /// * `options` - The report being built
    pub fn includes(edge: &DependencyEdge, from_root: bool, options: &DependencyOptions) -> bool {
        if !options.graph_type.accepts(edge.scope) {
            return false;
        }

        let all_transitive = options.include_all_transitive_dependencies;

        if !from_root && !edge.scope.is_transitive() && !all_transitive {
            return false;
        }

        if edge.transitive_only && !all_transitive {
            return false;
        }

        if edge.optional && !from_root && !options.include_optional_dependencies {
            return false;
        }

        true
    }
}

mod dependency_filter;
mod graph_builder;

pub use dependency_filter::{DependencyFilter, FilterDecision};
pub use graph_builder::BreadthFirstGraphBuilder;

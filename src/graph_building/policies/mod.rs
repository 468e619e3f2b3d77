mod edge_inclusion;

pub use edge_inclusion::EdgeInclusionPolicy;

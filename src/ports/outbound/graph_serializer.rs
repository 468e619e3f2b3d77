use super::{AttributeValue, VertexRenderer, RESERVED_LABEL_ATTRIBUTE};
use crate::graph_building::domain::{DependencyGraph, Vertex};
use crate::shared::Result;
use std::io::Write;

/// Rendering choices for one serialization call.
pub struct RenderOptions {
    pub renderer: Box<dyn VertexRenderer>,
    /// When false, edges are written without their scope/type label
    pub show_edge_labels: bool,
}

impl RenderOptions {
    pub fn new(renderer: Box<dyn VertexRenderer>, show_edge_labels: bool) -> Self {
        Self {
            renderer,
            show_edge_labels,
        }
    }

    /// Extra attributes of `vertex`, without any that reuse the reserved
    /// `label` name.
    pub fn attributes(&self, vertex: &Vertex) -> Vec<(&'static str, AttributeValue)> {
        self.renderer
            .attributes(vertex)
            .into_iter()
            .filter(|(name, _)| *name != RESERVED_LABEL_ATTRIBUTE)
            .collect()
    }
}

/// GraphSerializer port for writing a finished graph to a byte stream
///
/// Serializers never mutate the graph, and output depends only on the graph
/// and the options, so repeated calls produce identical bytes.
pub trait GraphSerializer {
    /// Writes the whole graph to `out`
    ///
    /// # Errors
    /// Returns an error if the stream cannot be written.
    fn serialize(
        &self,
        graph: &DependencyGraph,
        out: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<()>;

    /// File extension (without dot) of the produced documents
    fn file_extension(&self) -> &'static str;
}

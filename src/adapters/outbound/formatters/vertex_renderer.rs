use crate::graph_building::domain::Vertex;
use crate::ports::outbound::{AttributeValue, VertexRenderer};

/// SimpleVertexRenderer labels a vertex with its artifactId (and classifier),
/// optionally followed by the version on a second line.
#[derive(Debug, Clone, Copy)]
pub struct SimpleVertexRenderer {
    show_version: bool,
}

impl SimpleVertexRenderer {
    pub fn new(show_version: bool) -> Self {
        Self { show_version }
    }
}

impl Default for SimpleVertexRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl VertexRenderer for SimpleVertexRenderer {
    fn label(&self, vertex: &Vertex) -> String {
        let id = vertex.id();
        let mut label = id.artifact_id().to_string();
        if let Some(classifier) = id.classifier() {
            label.push(':');
            label.push_str(classifier);
        }
        if self.show_version {
            label.push('\n');
            label.push_str(id.version());
        }
        label
    }

    fn attributes(&self, vertex: &Vertex) -> Vec<(&'static str, AttributeValue)> {
        let mut attributes = vec![
            ("size", AttributeValue::Integer(vertex.artifact().size())),
            (
                "resolved",
                AttributeValue::Boolean(vertex.artifact().is_resolved()),
            ),
        ];
        if self.show_version {
            attributes.push((
                "version",
                AttributeValue::Text(vertex.id().version().to_string()),
            ));
        }
        attributes
    }
}

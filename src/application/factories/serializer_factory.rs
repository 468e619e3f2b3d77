use crate::adapters::outbound::formatters::{DotSerializer, GraphMlSerializer, SimpleVertexRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{GraphSerializer, RenderOptions};

/// Factory for creating graph serializers
///
/// Selecting the infrastructure adapter for an output format is an
/// application concern, so the factory lives in the application layer.
pub struct SerializerFactory;

impl SerializerFactory {
    /// Creates a serializer for the specified output format
    ///
    /// # Examples
    /// ```
    /// use artifact_graph::application::dto::OutputFormat;
    /// use artifact_graph::application::factories::SerializerFactory;
    ///
    /// let serializer = SerializerFactory::create(OutputFormat::Dot);
    /// assert_eq!(serializer.file_extension(), "dot");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphSerializer> {
        match format {
            OutputFormat::GraphMl => Box::new(GraphMlSerializer::new()),
            OutputFormat::Dot => Box::new(DotSerializer::new()),
        }
    }

    /// Creates the rendering options shared by every serializer
    pub fn render_options(show_version: bool, show_edge_labels: bool) -> RenderOptions {
        RenderOptions::new(
            Box::new(SimpleVertexRenderer::new(show_version)),
            show_edge_labels,
        )
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::GraphMl => "📝 Writing GraphML documents...",
            OutputFormat::Dot => "📝 Writing Graphviz DOT documents...",
        }
    }
}

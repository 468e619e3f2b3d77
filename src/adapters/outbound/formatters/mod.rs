/// Formatter adapters rendering dependency graphs into output formats
mod dot_serializer;
mod graphml_serializer;
mod vertex_renderer;

pub use dot_serializer::DotSerializer;
pub use graphml_serializer::GraphMlSerializer;
pub use vertex_renderer::SimpleVertexRenderer;

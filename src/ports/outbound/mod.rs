/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach artifact metadata, output destinations and the console.
pub mod artifact_resolver;
pub mod graph_serializer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod vertex_renderer;

pub use artifact_resolver::{ArtifactResolver, ResolutionError};
pub use graph_serializer::{GraphSerializer, RenderOptions};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use vertex_renderer::{AttributeValue, VertexRenderer, RESERVED_LABEL_ATTRIBUTE};

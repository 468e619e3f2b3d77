/// Mock implementations for testing
mod mock_artifact_resolver;
mod mock_output_presenter;
mod mock_progress_reporter;

pub use mock_artifact_resolver::MockArtifactResolver;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;

/// Data Transfer Objects for application layer
///
/// DTOs carry the report request in from the CLI and the per-report
/// outcomes back out, keeping the domain layer isolated.
mod graph_request;
mod graph_response;
mod output_format;

pub use graph_request::{GraphRequest, GraphRequestBuilder};
pub use graph_response::{GraphResponse, ReportOutcome, ReportStatus};
pub use output_format::OutputFormat;

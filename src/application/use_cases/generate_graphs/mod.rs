use crate::application::dto::{GraphRequest, GraphResponse, ReportOutcome, ReportStatus};
use crate::application::factories::SerializerFactory;
use crate::graph_building::domain::{DependencyGraph, DependencyOptions};
use crate::graph_building::services::{BreadthFirstGraphBuilder, DependencyFilter};
use crate::ports::outbound::{
    ArtifactResolver, GraphSerializer, OutputPresenter, ProgressReporter, RenderOptions,
};
use crate::shared::error::GraphError;
use crate::shared::Result;

/// GenerateGraphsUseCase - builds and writes one dependency graph per report
///
/// Reports run one after another. A report whose output cannot be written
/// is recorded as failed and the remaining reports still run; only
/// configuration problems (invalid patterns) abort the request, and they do
/// so before any graph is built.
///
/// # Type Parameters
/// * `R` - ArtifactResolver implementation
/// * `PR` - ProgressReporter implementation
/// * `O` - OutputPresenter implementation
pub struct GenerateGraphsUseCase<R, PR, O> {
    resolver: R,
    progress_reporter: PR,
    output_presenter: O,
}

impl<R, PR, O> GenerateGraphsUseCase<R, PR, O>
where
    R: ArtifactResolver,
    PR: ProgressReporter,
    O: OutputPresenter,
{
    /// Creates a new GenerateGraphsUseCase with injected dependencies
    pub fn new(resolver: R, progress_reporter: PR, output_presenter: O) -> Self {
        Self {
            resolver,
            progress_reporter,
            output_presenter,
        }
    }

    /// Executes every report of the request
    ///
    /// # Errors
    /// Returns an error only if the exclusion patterns are invalid. Failures
    /// of individual reports are part of the response.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        let filter = DependencyFilter::new(
            request.excluded_group_ids.clone(),
            request.excluded_artifact_ids.clone(),
            request.include_group_id.clone(),
        )?;

        let serializer = SerializerFactory::create(request.format);
        let render_options =
            SerializerFactory::render_options(request.show_version, request.show_edge_labels);

        self.progress_reporter.report(&format!(
            "🔎 Building {} report(s) for {}",
            request.reports.len(),
            request.root
        ));
        self.progress_reporter
            .report(SerializerFactory::progress_message(request.format));

        let builder = BreadthFirstGraphBuilder::new(&self.resolver, &self.progress_reporter, &filter);
        let outcomes: Vec<ReportOutcome> = request
            .reports
            .iter()
            .map(|report| {
                let graph = builder.build_graph(&request.root, report);
                self.write_report(&request, report, &graph, serializer.as_ref(), &render_options)
            })
            .collect();

        self.warn_unmatched_patterns(&filter);

        let response = GraphResponse::new(outcomes);
        self.report_summary(&response);
        Ok(response)
    }

    fn write_report(
        &self,
        request: &GraphRequest,
        report: &DependencyOptions,
        graph: &DependencyGraph,
        serializer: &dyn GraphSerializer,
        render_options: &RenderOptions,
    ) -> ReportOutcome {
        let file_name = request.report_file_name(report, serializer.file_extension());

        let status = match self.serialize_to_output(&file_name, graph, serializer, render_options) {
            Ok(()) => {
                let unresolved_count = graph
                    .vertices()
                    .filter(|vertex| !vertex.artifact().is_resolved())
                    .count();
                self.progress_reporter.report(&format!(
                    "✅ {}: {} artifact(s), {} dependency edge(s) -> {}",
                    report,
                    graph.vertex_count(),
                    graph.edge_count(),
                    self.output_presenter.location(&file_name)
                ));
                ReportStatus::Written {
                    vertex_count: graph.vertex_count(),
                    edge_count: graph.edge_count(),
                    unresolved_count,
                }
            }
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ {} failed: {}", report, e));
                ReportStatus::Failed {
                    message: e.to_string(),
                }
            }
        };

        ReportOutcome {
            report: *report,
            file_name,
            status,
        }
    }

    fn serialize_to_output(
        &self,
        file_name: &str,
        graph: &DependencyGraph,
        serializer: &dyn GraphSerializer,
        render_options: &RenderOptions,
    ) -> Result<()> {
        let mut out = self.output_presenter.open(file_name)?;
        serializer
            .serialize(graph, out.as_mut(), render_options)
            .map_err(|e| {
                GraphError::OutputWriteError {
                    target: self.output_presenter.location(file_name),
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn warn_unmatched_patterns(&self, filter: &DependencyFilter) {
        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Pattern '{}' did not match any dependencies.",
                pattern
            ));
        }
    }

    fn report_summary(&self, response: &GraphResponse) {
        if response.has_failures() {
            self.progress_reporter.report_error(&format!(
                "{} of {} report(s) could not be written",
                response.failed_count(),
                response.outcomes.len()
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "Success: {} report(s) written",
                response.written_count()
            ));
        }
    }
}

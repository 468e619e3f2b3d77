use super::OutputFormat;
use crate::graph_building::domain::{ArtifactIdentifier, DependencyOptions, DEFAULT_REPORTS};
use crate::shared::error::GraphError;
use crate::shared::Result;

/// GraphRequest - request DTO for the report generation use case
///
/// One request produces one document per report definition, all rooted at
/// the same artifact and sharing exclusions and rendering toggles.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub root: ArtifactIdentifier,
    pub reports: Vec<DependencyOptions>,
    /// Group patterns whose artifacts never enter the graph
    pub excluded_group_ids: Vec<String>,
    /// ArtifactId patterns whose artifacts never enter the graph
    pub excluded_artifact_ids: Vec<String>,
    /// When set, only artifacts of a matching group enter the graph
    pub include_group_id: Option<String>,
    pub show_version: bool,
    pub show_edge_labels: bool,
    pub format: OutputFormat,
    /// Replaces `<artifactId>-<version>` in output file names
    pub final_name: Option<String>,
}

impl GraphRequest {
    pub fn builder() -> GraphRequestBuilder {
        GraphRequestBuilder::default()
    }

    /// File name of the document written for `report`
    ///
    /// - `<artifactId>-<version>-<TOKEN>-deps.<ext>` by default
    /// - `<finalName>-<TOKEN>-deps.<ext>` with a final name and several reports
    /// - `<finalName>-deps.<ext>` with a final name and a single report
    pub fn report_file_name(&self, report: &DependencyOptions, extension: &str) -> String {
        match &self.final_name {
            Some(name) if self.reports.len() == 1 => format!("{}-deps.{}", name, extension),
            Some(name) => format!("{}-{}-deps.{}", name, report, extension),
            None => format!(
                "{}-{}-{}-deps.{}",
                self.root.artifact_id(),
                self.root.version(),
                report,
                extension
            ),
        }
    }
}

/// Builder for GraphRequest
///
/// Reports default to `DEFAULT_REPORTS`; versions and edge labels are shown
/// unless turned off.
#[derive(Debug, Clone)]
pub struct GraphRequestBuilder {
    root: Option<ArtifactIdentifier>,
    reports: Vec<DependencyOptions>,
    excluded_group_ids: Vec<String>,
    excluded_artifact_ids: Vec<String>,
    include_group_id: Option<String>,
    show_version: bool,
    show_edge_labels: bool,
    format: OutputFormat,
    final_name: Option<String>,
}

impl Default for GraphRequestBuilder {
    fn default() -> Self {
        Self {
            root: None,
            reports: Vec::new(),
            excluded_group_ids: Vec::new(),
            excluded_artifact_ids: Vec::new(),
            include_group_id: None,
            show_version: true,
            show_edge_labels: true,
            format: OutputFormat::default(),
            final_name: None,
        }
    }
}

impl GraphRequestBuilder {
    pub fn root(mut self, root: ArtifactIdentifier) -> Self {
        self.root = Some(root);
        self
    }

    pub fn reports(mut self, reports: Vec<DependencyOptions>) -> Self {
        self.reports = reports;
        self
    }

    pub fn excluded_group_ids(mut self, patterns: Vec<String>) -> Self {
        self.excluded_group_ids = patterns;
        self
    }

    pub fn excluded_artifact_ids(mut self, patterns: Vec<String>) -> Self {
        self.excluded_artifact_ids = patterns;
        self
    }

    pub fn include_group_id(mut self, pattern: Option<String>) -> Self {
        self.include_group_id = pattern;
        self
    }

    pub fn show_version(mut self, show: bool) -> Self {
        self.show_version = show;
        self
    }

    pub fn show_edge_labels(mut self, show: bool) -> Self {
        self.show_edge_labels = show;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn final_name(mut self, final_name: Option<String>) -> Self {
        self.final_name = final_name;
        self
    }

    /// # Errors
    /// - No root artifact was given
    /// - The final name is blank or contains path separators
    pub fn build(self) -> Result<GraphRequest> {
        let root = self.root.ok_or_else(|| GraphError::Validation {
            message: "A root artifact is required".to_string(),
        })?;

        if let Some(name) = &self.final_name {
            if name.trim().is_empty() || name.contains(|c: char| c == '/' || c == '\\') {
                return Err(GraphError::Validation {
                    message: format!(
                        "Final name '{}' must be non-empty and must not contain path separators",
                        name
                    ),
                }
                .into());
            }
        }

        let reports = if self.reports.is_empty() {
            DependencyOptions::parse_report_definitions(DEFAULT_REPORTS)?
        } else {
            self.reports
        };

        Ok(GraphRequest {
            root,
            reports,
            excluded_group_ids: self.excluded_group_ids,
            excluded_artifact_ids: self.excluded_artifact_ids,
            include_group_id: self.include_group_id,
            show_version: self.show_version,
            show_edge_labels: self.show_edge_labels,
            format: self.format,
            final_name: self.final_name,
        })
    }
}

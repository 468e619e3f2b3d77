use crate::graph_building::domain::DependencyOptions;

/// What happened to one report of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    Written {
        vertex_count: usize,
        edge_count: usize,
        /// Vertices kept as placeholders because resolution failed
        unresolved_count: usize,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub report: DependencyOptions,
    pub file_name: String,
    pub status: ReportStatus,
}

impl ReportOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, ReportStatus::Failed { .. })
    }
}

/// GraphResponse - response DTO listing one outcome per requested report,
/// in request order.
#[derive(Debug, Clone, Default)]
pub struct GraphResponse {
    pub outcomes: Vec<ReportOutcome>,
}

impl GraphResponse {
    pub fn new(outcomes: Vec<ReportOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn written_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

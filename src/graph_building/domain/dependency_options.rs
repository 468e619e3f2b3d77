use super::Scope;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Report list used when none is configured
pub const DEFAULT_REPORTS: &str = "PACKAGE,COMPILE,RUNTIME,TEST,COMPILE-TRANSITIVE";

const TRANSITIVE_SUFFIX: &str = "-TRANSITIVE";
const OPTIONAL_SUFFIX: &str = "-OPTIONAL";

/// Which classpath a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphType {
    /// Dependencies that end up in the packaged artifact
    Package,
    Compile,
    Runtime,
    Test,
}

impl GraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::Package => "PACKAGE",
            GraphType::Compile => "COMPILE",
            GraphType::Runtime => "RUNTIME",
            GraphType::Test => "TEST",
        }
    }

    /// Returns true if edges in `scope` belong on this graph.
    pub fn accepts(&self, scope: Scope) -> bool {
        match self {
            GraphType::Package | GraphType::Runtime => {
                matches!(scope, Scope::Compile | Scope::Runtime)
            }
            GraphType::Compile => matches!(scope, Scope::Compile | Scope::Provided | Scope::System),
            GraphType::Test => !matches!(scope, Scope::Import),
        }
    }
}

impl FromStr for GraphType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PACKAGE" => Ok(GraphType::Package),
            "COMPILE" => Ok(GraphType::Compile),
            "RUNTIME" => Ok(GraphType::Runtime),
            "TEST" => Ok(GraphType::Test),
            _ => Err(format!(
                "Unknown graph type: '{}'. Valid types: PACKAGE, COMPILE, RUNTIME, TEST",
                s
            )),
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed report definition: drives exactly one graph build and one
/// serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependencyOptions {
    pub graph_type: GraphType,
    pub include_all_transitive_dependencies: bool,
    pub include_optional_dependencies: bool,
}

impl DependencyOptions {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            include_all_transitive_dependencies: false,
            include_optional_dependencies: false,
        }
    }

    pub fn transitive(mut self) -> Self {
        self.include_all_transitive_dependencies = true;
        self
    }

    pub fn with_optional(mut self) -> Self {
        self.include_optional_dependencies = true;
        self
    }

    /// Parses a comma-separated list of report tokens.
    ///
    /// Blank tokens are skipped. Any unknown token fails the whole list so
    /// that no graph is built for a request that cannot be honored.
    pub fn parse_report_definitions(reports: &str) -> Result<Vec<DependencyOptions>> {
        let mut definitions = reports
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::parse::<DependencyOptions>)
            .collect::<Result<Vec<_>>>()?;

        if definitions.is_empty() {
            return Err(GraphError::InvalidReportDefinition {
                token: reports.to_string(),
                reason: "No report definitions given".to_string(),
            }
            .into());
        }

        // Repeated definitions would write the same file twice.
        let mut seen = HashSet::new();
        definitions.retain(|definition| seen.insert(*definition));

        Ok(definitions)
    }
}

impl FromStr for DependencyOptions {
    type Err = anyhow::Error;

    /// Parses `GRAPHTYPE[-TRANSITIVE][-OPTIONAL]`, case-insensitively.
    fn from_str(token: &str) -> Result<Self> {
        let mut rest = token.trim().to_uppercase();

        let include_optional = rest.ends_with(OPTIONAL_SUFFIX);
        if include_optional {
            rest.truncate(rest.len() - OPTIONAL_SUFFIX.len());
        }
        let include_transitive = rest.ends_with(TRANSITIVE_SUFFIX);
        if include_transitive {
            rest.truncate(rest.len() - TRANSITIVE_SUFFIX.len());
        }

        let graph_type = rest
            .parse::<GraphType>()
            .map_err(|reason| GraphError::InvalidReportDefinition {
                token: token.to_string(),
                reason,
            })?;

        Ok(Self {
            graph_type,
            include_all_transitive_dependencies: include_transitive,
            include_optional_dependencies: include_optional,
        })
    }
}

impl fmt::Display for DependencyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.graph_type.as_str())?;
        if self.include_all_transitive_dependencies {
            f.write_str(TRANSITIVE_SUFFIX)?;
        }
        if self.include_optional_dependencies {
            f.write_str(OPTIONAL_SUFFIX)?;
        }
        Ok(())
    }
}

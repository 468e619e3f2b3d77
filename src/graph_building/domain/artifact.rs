use super::ArtifactIdentifier;
use std::fmt;
use std::str::FromStr;

/// Default dependency type when a declaration does not name one
pub const DEFAULT_DEPENDENCY_TYPE: &str = "jar";

/// When a dependency is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Scope {
    /// Needed to compile, run and test; propagates transitively.
    #[default]
    Compile,
    /// Needed to compile but supplied by the runtime environment.
    Provided,
    /// Needed only at run time; propagates transitively.
    Runtime,
    /// Needed only to compile and run tests.
    Test,
    /// Like provided, but resolved from an explicit path.
    System,
    /// Dependency-management import; never an edge.
    Import,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
            Scope::System => "system",
            Scope::Import => "import",
        }
    }

    /// Returns true if a dependency in this scope is inherited by dependents
    /// of the declaring artifact.
    pub fn is_transitive(&self) -> bool {
        matches!(self, Scope::Compile | Scope::Runtime)
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "compile" => Ok(Scope::Compile),
            "provided" => Ok(Scope::Provided),
            "runtime" => Ok(Scope::Runtime),
            "test" => Ok(Scope::Test),
            "system" => Ok(Scope::System),
            "import" => Ok(Scope::Import),
            other => Err(format!(
                "Unknown scope: '{}'. Valid scopes: compile, provided, runtime, test, system, import",
                other
            )),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared dependency of a resolved artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub target: ArtifactIdentifier,
    pub scope: Scope,
    /// Declared dependency type (`jar`, `test-jar`, `pom`, ...)
    pub dependency_type: String,
    pub optional: bool,
    /// Only honored when a report includes all transitive dependencies
    pub transitive_only: bool,
}

impl DependencyEdge {
    /// Creates a required `jar` dependency in the given scope.
    pub fn new(target: ArtifactIdentifier, scope: Scope) -> Self {
        Self {
            target,
            scope,
            dependency_type: DEFAULT_DEPENDENCY_TYPE.to_string(),
            optional: false,
            transitive_only: false,
        }
    }

    pub fn with_type(mut self, dependency_type: impl Into<String>) -> Self {
        self.dependency_type = dependency_type.into();
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn transitive_only(mut self) -> Self {
        self.transitive_only = true;
        self
    }
}

/// Payload of a successfully resolved artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Size of the artifact file in bytes (0 when the file is absent)
    pub size: u64,
    /// Declared dependencies, in declaration order
    pub dependencies: Vec<DependencyEdge>,
    /// Dependency-management entries, in declaration order
    pub managed_dependencies: Vec<DependencyEdge>,
}

impl ResolvedArtifact {
    pub fn new(size: u64, dependencies: Vec<DependencyEdge>) -> Self {
        Self {
            size,
            dependencies,
            managed_dependencies: Vec::new(),
        }
    }

    pub fn with_managed_dependencies(mut self, managed: Vec<DependencyEdge>) -> Self {
        self.managed_dependencies = managed;
        self
    }
}

/// Node payload: either the resolved artifact or a placeholder for an
/// artifact whose resolution failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Resolved(ResolvedArtifact),
    Unresolved,
}

impl Artifact {
    /// Artifact size; placeholders report 0.
    pub fn size(&self) -> u64 {
        match self {
            Artifact::Resolved(resolved) => resolved.size,
            Artifact::Unresolved => 0,
        }
    }

    /// Declared dependencies; placeholders have none.
    pub fn dependencies(&self) -> &[DependencyEdge] {
        match self {
            Artifact::Resolved(resolved) => &resolved.dependencies,
            Artifact::Unresolved => &[],
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Artifact::Resolved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(coords: &str) -> ArtifactIdentifier {
        coords.parse().unwrap()
    }

    #[test]
    fn test_scope_from_str() {
        assert_eq!("compile".parse::<Scope>().unwrap(), Scope::Compile);
        assert_eq!("".parse::<Scope>().unwrap(), Scope::Compile);
        assert_eq!("TEST".parse::<Scope>().unwrap(), Scope::Test);
        assert_eq!(" runtime ".parse::<Scope>().unwrap(), Scope::Runtime);
        let err = "deploy".parse::<Scope>().unwrap_err();
        assert!(err.contains("Unknown scope"));
        assert!(err.contains("deploy"));
    }

    #[test]
    fn test_scope_is_transitive() {
        assert!(Scope::Compile.is_transitive());
        assert!(Scope::Runtime.is_transitive());
        assert!(!Scope::Provided.is_transitive());
        assert!(!Scope::Test.is_transitive());
        assert!(!Scope::System.is_transitive());
    }

    #[test]
    fn test_dependency_edge_builders() {
        let edge = DependencyEdge::new(id("com.z:test-lib:1.0"), Scope::Test)
            .with_type("test-jar")
            .optional()
            .transitive_only();
        assert_eq!(edge.dependency_type, "test-jar");
        assert!(edge.optional);
        assert!(edge.transitive_only);
    }

    #[test]
    fn test_unresolved_artifact_is_empty() {
        let artifact = Artifact::Unresolved;
        assert_eq!(artifact.size(), 0);
        assert!(artifact.dependencies().is_empty());
        assert!(!artifact.is_resolved());
    }

    #[test]
    fn test_resolved_artifact_accessors() {
        let artifact = Artifact::Resolved(ResolvedArtifact::new(
            1024,
            vec![DependencyEdge::new(id("com.y:lib:2.0"), Scope::Compile)],
        ));
        assert_eq!(artifact.size(), 1024);
        assert_eq!(artifact.dependencies().len(), 1);
        assert!(artifact.is_resolved());
    }
}

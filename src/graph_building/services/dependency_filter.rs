use crate::graph_building::domain::ArtifactIdentifier;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of patterns per list to prevent DoS attacks
const MAX_PATTERNS: usize = 64;

/// Maximum length of a single pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// Why the filter kept or dropped a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Keep,
    ExcludedGroup,
    ExcludedArtifact,
    OutsideIncludedGroup,
}

/// DependencyFilter - decides which dependency targets may enter the graph
///
/// Exclusions are applied first (group, then artifact) and the include-group
/// filter second, so a dependency matched by an exclusion is dropped even if
/// it is inside the included group. Every list accepts exact names and `*`
/// wildcards.
#[derive(Debug, Default)]
pub struct DependencyFilter {
    excluded_groups: Vec<CoordinatePattern>,
    excluded_artifacts: Vec<CoordinatePattern>,
    include_group: Option<CoordinatePattern>,
}

impl DependencyFilter {
    /// Creates a filter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns in one list (> MAX_PATTERNS)
    /// - Invalid pattern format (length, characters, only wildcards)
    pub fn new(
        excluded_groups: Vec<String>,
        excluded_artifacts: Vec<String>,
        include_group: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            excluded_groups: compile_list("excluded group", excluded_groups)?,
            excluded_artifacts: compile_list("excluded artifact", excluded_artifacts)?,
            include_group: include_group
                .filter(|pattern| !pattern.trim().is_empty())
                .map(|pattern| CoordinatePattern::new("included group", pattern))
                .transpose()?,
        })
    }

    /// A filter that keeps every dependency.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Every list is evaluated before deciding, so each pattern that
    /// matches `target` is recorded even when an earlier list already
    /// drops it.
    pub fn decide(&self, target: &ArtifactIdentifier) -> FilterDecision {
        let excluded_group = any_matches(&self.excluded_groups, target.group_id());
        let excluded_artifact = any_matches(&self.excluded_artifacts, target.artifact_id());
        let inside_included_group = self
            .include_group
            .as_ref()
            .map_or(true, |include| include.matches(target.group_id()));

        if excluded_group {
            FilterDecision::ExcludedGroup
        } else if excluded_artifact {
            FilterDecision::ExcludedArtifact
        } else if !inside_included_group {
            FilterDecision::OutsideIncludedGroup
        } else {
            FilterDecision::Keep
        }
    }

    pub fn keeps(&self, target: &ArtifactIdentifier) -> bool {
        self.decide(target) == FilterDecision::Keep
    }

    /// Returns the patterns that have not matched any dependency so far.
    ///
    /// Call after a build to report patterns that had no effect.
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.excluded_groups
            .iter()
            .chain(self.excluded_artifacts.iter())
            .chain(self.include_group.iter())
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// Evaluates every pattern so that each one records whether it matched.
fn any_matches(patterns: &[CoordinatePattern], value: &str) -> bool {
    patterns
        .iter()
        .fold(false, |found, pattern| pattern.matches(value) || found)
}

fn compile_list(kind: &str, patterns: Vec<String>) -> Result<Vec<CoordinatePattern>> {
    if patterns.len() > MAX_PATTERNS {
        return Err(GraphError::InvalidPattern {
            kind: kind.to_string(),
            pattern: format!("{} patterns", patterns.len()),
            reason: format!("Too many patterns (maximum: {})", MAX_PATTERNS),
        }
        .into());
    }

    patterns
        .into_iter()
        .map(|pattern| CoordinatePattern::new(kind, pattern))
        .collect()
}

/// A single pattern with its compiled matcher
#[derive(Debug)]
struct CoordinatePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl CoordinatePattern {
    fn new(kind: &str, pattern: String) -> Result<Self> {
        let pattern = pattern.trim().to_string();
        validate_pattern(&pattern).map_err(|reason| GraphError::InvalidPattern {
            kind: kind.to_string(),
            pattern: pattern.clone(),
            reason,
        })?;

        Ok(Self {
            matcher: compile_pattern(&pattern),
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, value: &str) -> bool {
        let is_match = self.matcher.matches(value);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Pattern matcher types for efficient matching
#[derive(Debug)]
enum PatternMatcher {
    /// Exact match: "org.slf4j"
    Exact(String),
    /// Leading wildcard: "*-test"
    EndsWith(String),
    /// Trailing wildcard: "org.apache.*"
    StartsWith(String),
    /// Wildcards on both ends: "*log*"
    Contains(String),
    /// General case: literal parts that must appear in order, anchored at
    /// the ends unless the pattern starts or ends with a wildcard
    Parts {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, value: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => value == s,
            PatternMatcher::EndsWith(suffix) => value.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => value.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => value.contains(middle.as_str()),
            PatternMatcher::Parts {
                parts,
                anchored_start,
                anchored_end,
            } => {
                let mut rest = value;
                for (i, part) in parts.iter().enumerate() {
                    let is_first = i == 0;
                    let is_last = i + 1 == parts.len();
                    if is_first && *anchored_start {
                        match rest.strip_prefix(part.as_str()) {
                            Some(stripped) => rest = stripped,
                            None => return false,
                        }
                    } else if is_last && *anchored_end {
                        return rest.ends_with(part.as_str());
                    } else {
                        match rest.find(part.as_str()) {
                            Some(pos) => rest = &rest[pos + part.len()..],
                            None => return false,
                        }
                    }
                }
                !*anchored_end || rest.is_empty() || parts.is_empty()
            }
        }
    }
}

/// Validates a pattern string, returning the reason it is invalid
fn validate_pattern(pattern: &str) -> std::result::Result<(), String> {
    if pattern.is_empty() {
        return Err("Pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(format!(
            "Pattern is too long ({} chars). Maximum: {} chars",
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if let Some(ch) = pattern.chars().find(|&c| !is_valid_pattern_char(c)) {
        return Err(format!(
            "Invalid character '{}'. Only alphanumeric, hyphens, underscores, dots, and asterisks (*) are allowed.",
            ch
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return Err("Pattern cannot contain only wildcards".to_string());
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '*'
}

/// Compiles a pattern string into an optimized matcher
fn compile_pattern(pattern: &str) -> PatternMatcher {
    let starts_wild = pattern.starts_with('*');
    let ends_wild = pattern.ends_with('*');
    let parts: Vec<String> = pattern
        .split('*')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    match (parts.len(), starts_wild, ends_wild) {
        (1, false, false) => PatternMatcher::Exact(parts[0].clone()),
        (1, true, false) => PatternMatcher::EndsWith(parts[0].clone()),
        (1, false, true) => PatternMatcher::StartsWith(parts[0].clone()),
        (1, true, true) => PatternMatcher::Contains(parts[0].clone()),
        _ => PatternMatcher::Parts {
            parts,
            anchored_start: !starts_wild,
            anchored_end: !ends_wild,
        },
    }
}

use crate::shared::error::GraphError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single coordinate (security limit)
const MAX_COORDINATE_LENGTH: usize = 255;

/// Coordinates of one artifact revision: group, artifact, version and an
/// optional classifier.
///
/// Equality and hashing cover all four coordinates and nothing else, so the
/// identifier is used directly as the graph-node key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactIdentifier {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
}

impl ArtifactIdentifier {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let version = version.into();

        validate_coordinate("groupId", &group_id)?;
        validate_coordinate("artifactId", &artifact_id)?;
        validate_coordinate("version", &version)?;

        Ok(Self {
            group_id,
            artifact_id,
            version,
            classifier: None,
        })
    }

    /// Returns a copy of this identifier carrying the given classifier.
    /// An empty classifier is treated as no classifier.
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Result<Self> {
        let classifier = classifier.into();
        if classifier.is_empty() {
            self.classifier = None;
        } else {
            validate_coordinate("classifier", &classifier)?;
            self.classifier = Some(classifier);
        }
        Ok(self)
    }

    /// Returns the identifier a relocation points to. Coordinates the
    /// relocation leaves unset are kept, and so is the classifier.
    pub fn relocated(
        &self,
        group_id: Option<&str>,
        artifact_id: Option<&str>,
        version: Option<&str>,
    ) -> Result<Self> {
        let relocated = Self::new(
            group_id.unwrap_or(&self.group_id),
            artifact_id.unwrap_or(&self.artifact_id),
            version.unwrap_or(&self.version),
        )?;
        Ok(Self {
            classifier: self.classifier.clone(),
            ..relocated
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }
}

fn validate_coordinate(name: &str, value: &str) -> Result<()> {
    let reason = if value.is_empty() {
        Some(format!("{} cannot be empty", name))
    } else if value.len() > MAX_COORDINATE_LENGTH {
        Some(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            name,
            value.len(),
            MAX_COORDINATE_LENGTH
        ))
    } else if value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == ':' || c == '/' || c == '\\')
    {
        Some(format!(
            "{} contains invalid characters (whitespace, control characters, ':', '/' and '\\' are not allowed)",
            name
        ))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(GraphError::InvalidArtifactIdentifier {
            value: value.to_string(),
            reason,
        }
        .into()),
        None => Ok(()),
    }
}

impl FromStr for ArtifactIdentifier {
    type Err = anyhow::Error;

    /// Parses `group:artifact:version[:classifier]`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group, artifact, version] => Self::new(*group, *artifact, *version),
            [group, artifact, version, classifier] => {
                Self::new(*group, *artifact, *version)?.with_classifier(*classifier)
            }
            _ => Err(GraphError::InvalidArtifactIdentifier {
                value: s.to_string(),
                reason: format!("expected 3 or 4 ':'-separated parts, found {}", parts.len()),
            }
            .into()),
        }
    }
}

impl fmt::Display for ArtifactIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_valid() {
        let id = ArtifactIdentifier::new("com.x", "app", "1.0").unwrap();
        assert_eq!(id.group_id(), "com.x");
        assert_eq!(id.artifact_id(), "app");
        assert_eq!(id.version(), "1.0");
        assert_eq!(id.classifier(), None);
    }

    #[test]
    fn test_new_rejects_empty_coordinates() {
        assert!(ArtifactIdentifier::new("", "app", "1.0").is_err());
        assert!(ArtifactIdentifier::new("com.x", "", "1.0").is_err());
        assert!(ArtifactIdentifier::new("com.x", "app", "").is_err());
    }

    #[test]
    fn test_new_rejects_separators() {
        let err = ArtifactIdentifier::new("com.x", "a:b", "1.0").unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
        assert!(ArtifactIdentifier::new("com/x", "app", "1.0").is_err());
    }

    #[test]
    fn test_new_rejects_control_characters() {
        let err = ArtifactIdentifier::new("com.x", "a\u{1}b", "1.0").unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
        assert!(ArtifactIdentifier::new("com.x", "app", "1.0\u{7f}").is_err());
        assert!(ArtifactIdentifier::new("com.x", "app", "1.0")
            .unwrap()
            .with_classifier("jdk\u{1b}8")
            .is_err());
    }

    #[test]
    fn test_equality_includes_classifier() {
        let plain = ArtifactIdentifier::new("com.x", "app", "1.0").unwrap();
        let sources = plain.clone().with_classifier("sources").unwrap();
        assert_ne!(plain, sources);

        let mut set = HashSet::new();
        set.insert(plain.clone());
        set.insert(sources);
        set.insert(ArtifactIdentifier::new("com.x", "app", "1.0").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_classifier_is_none() {
        let id = ArtifactIdentifier::new("com.x", "app", "1.0")
            .unwrap()
            .with_classifier("")
            .unwrap();
        assert_eq!(id.classifier(), None);
    }

    #[test]
    fn test_from_str_and_display() {
        let id: ArtifactIdentifier = "com.y:lib:2.0".parse().unwrap();
        assert_eq!(id.to_string(), "com.y:lib:2.0");

        let id: ArtifactIdentifier = "com.y:lib:2.0:tests".parse().unwrap();
        assert_eq!(id.classifier(), Some("tests"));
        assert_eq!(id.to_string(), "com.y:lib:2.0:tests");
    }

    #[test]
    fn test_from_str_wrong_part_count() {
        let err = "com.y:lib".parse::<ArtifactIdentifier>().unwrap_err();
        assert!(err.to_string().contains("found 2"));
        assert!("a:b:c:d:e".parse::<ArtifactIdentifier>().is_err());
    }

    #[test]
    fn test_relocated_keeps_classifier_and_unset_coordinates() {
        let id: ArtifactIdentifier = "old.group:lib:1.0:jdk8".parse().unwrap();
        let moved = id.relocated(Some("new.group"), None, None).unwrap();
        assert_eq!(moved.group_id(), "new.group");
        assert_eq!(moved.artifact_id(), "lib");
        assert_eq!(moved.version(), "1.0");
        assert_eq!(moved.classifier(), Some("jdk8"));
    }
}

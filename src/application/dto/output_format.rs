/// Output format enumeration for graph documents
///
/// Both the CLI and the serializer factory need to understand it, so it
/// lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// GraphML XML document (default)
    #[default]
    GraphMl,
    /// Graphviz DOT document
    Dot,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "graphml" => Ok(OutputFormat::GraphMl),
            "dot" | "gv" => Ok(OutputFormat::Dot),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'graphml' or 'dot'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::GraphMl => write!(f, "graphml"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("graphml").unwrap(), OutputFormat::GraphMl);
        assert_eq!(OutputFormat::from_str("GraphML").unwrap(), OutputFormat::GraphMl);
        assert_eq!(OutputFormat::from_str("dot").unwrap(), OutputFormat::Dot);
        assert_eq!(OutputFormat::from_str("GV").unwrap(), OutputFormat::Dot);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("json").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("graphml"));
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [OutputFormat::GraphMl, OutputFormat::Dot] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
        assert_eq!(OutputFormat::default(), OutputFormat::GraphMl);
    }
}

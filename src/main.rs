mod cli;
mod config;

use anyhow::Context;
use artifact_graph::adapters::outbound::console::StderrProgressReporter;
use artifact_graph::adapters::outbound::repository::{
    CachingArtifactResolver, LocalRepositoryResolver,
};
use artifact_graph::application::dto::{GraphRequest, GraphResponse, OutputFormat};
use artifact_graph::application::factories::{PresenterFactory, PresenterType};
use artifact_graph::application::use_cases::GenerateGraphsUseCase;
use artifact_graph::graph_building::domain::{DependencyOptions, DEFAULT_REPORTS};
use artifact_graph::shared::error::{ExitCode, GraphError};
use artifact_graph::shared::Result;
use cli::Args;
use config::ConfigFile;
use std::path::PathBuf;
use std::process;

const DEFAULT_OUTPUT_DIR: &str = "target";

fn main() {
    let exit_code = match run() {
        Ok(response) if response.has_failures() => ExitCode::ReportsFailed,
        Ok(_) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<GraphResponse> {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            config::discover_config(&cwd)?
        }
    };

    let settings = RunSettings::merge(args, config.unwrap_or_default())?;

    let resolver = CachingArtifactResolver::new(LocalRepositoryResolver::new(settings.repository)?);
    let progress_reporter = StderrProgressReporter::new();
    let presenter = PresenterFactory::create(settings.output);

    let use_case = GenerateGraphsUseCase::new(resolver, progress_reporter, presenter);
    use_case.execute(settings.request)
}

/// Effective settings after layering CLI arguments over the config file
#[derive(Debug)]
struct RunSettings {
    request: GraphRequest,
    repository: PathBuf,
    output: PresenterType,
}

impl RunSettings {
    /// CLI values win over config values. Exclusion patterns from both
    /// sources are combined.
    fn merge(args: Args, config: ConfigFile) -> Result<Self> {
        let repository = args.repository.or(config.repository).ok_or_else(|| {
            GraphError::Validation {
                message: "No artifact repository given.\n\n💡 Hint: Pass --repository <DIR> or set `repository` in artifact-graph.config.yml.".to_string(),
            }
        })?;

        let reports_definition = args
            .reports
            .or(config.reports)
            .unwrap_or_else(|| DEFAULT_REPORTS.to_string());
        let reports = DependencyOptions::parse_report_definitions(&reports_definition)?;

        let format = match (args.format, config.format) {
            (Some(format), _) => format,
            (None, Some(name)) => name
                .parse::<OutputFormat>()
                .map_err(|message| GraphError::Validation { message })?,
            (None, None) => OutputFormat::default(),
        };

        let mut excluded_group_ids = config.excluded_group_ids.unwrap_or_default();
        excluded_group_ids.extend(args.exclude_group);
        let mut excluded_artifact_ids = config.excluded_artifact_ids.unwrap_or_default();
        excluded_artifact_ids.extend(args.exclude_artifact);

        let show_version = !args.hide_version && config.show_version.unwrap_or(true);
        let show_edge_labels = !args.hide_edge_labels && config.show_edge_labels.unwrap_or(true);

        let output_dir = args
            .output_dir
            .or(config.output_dir)
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
        let output = PresenterType::from_output_dir(&output_dir);

        // Several documents on one stream would not parse as one document.
        if output == PresenterType::Stdout && reports.len() > 1 {
            return Err(GraphError::Validation {
                message: format!(
                    "Writing to stdout supports a single report, but {} were requested.\n\n💡 Hint: Select one report with --reports or write to an output directory.",
                    reports.len()
                ),
            }
            .into());
        }

        let request = GraphRequest::builder()
            .root(args.root)
            .reports(reports)
            .excluded_group_ids(excluded_group_ids)
            .excluded_artifact_ids(excluded_artifact_ids)
            .include_group_id(args.include_group.or(config.include_group_id))
            .show_version(show_version)
            .show_edge_labels(show_edge_labels)
            .format(format)
            .final_name(args.final_name.or(config.final_name))
            .build()?;

        Ok(Self {
            request,
            repository,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["artifact-graph", "--root", "com.x:app:1.0"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_merge_defaults() {
        let settings =
            RunSettings::merge(args(&["--repository", "/repo"]), ConfigFile::default()).unwrap();

        assert_eq!(settings.repository, PathBuf::from("/repo"));
        assert_eq!(
            settings.output,
            PresenterType::Directory(PathBuf::from(DEFAULT_OUTPUT_DIR))
        );
        assert_eq!(settings.request.reports.len(), 5);
        assert_eq!(settings.request.format, OutputFormat::GraphMl);
        assert!(settings.request.show_version);
        assert!(settings.request.show_edge_labels);
        assert!(settings.request.excluded_group_ids.is_empty());
    }

    #[test]
    fn test_merge_requires_repository() {
        let err = RunSettings::merge(args(&[]), ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("No artifact repository given"));
    }

    #[test]
    fn test_merge_config_values_used_when_cli_silent() {
        let config = ConfigFile {
            repository: Some(PathBuf::from("/from-config")),
            reports: Some("TEST".to_string()),
            format: Some("dot".to_string()),
            output_dir: Some("-".to_string()),
            show_version: Some(false),
            final_name: Some("bundle".to_string()),
            ..ConfigFile::default()
        };

        let settings = RunSettings::merge(args(&[]), config).unwrap();

        assert_eq!(settings.repository, PathBuf::from("/from-config"));
        assert_eq!(settings.request.reports.len(), 1);
        assert_eq!(settings.request.format, OutputFormat::Dot);
        assert_eq!(settings.output, PresenterType::Stdout);
        assert!(!settings.request.show_version);
        assert_eq!(settings.request.final_name.as_deref(), Some("bundle"));
    }

    #[test]
    fn test_merge_rejects_several_reports_on_stdout() {
        let err = RunSettings::merge(
            args(&["--repository", "/repo", "--output-dir", "-"]),
            ConfigFile::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("supports a single report"));

        let err = RunSettings::merge(
            args(&["--repository", "/repo", "--reports", "COMPILE,TEST", "--output-dir", "-"]),
            ConfigFile::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("2 were requested"));

        let settings = RunSettings::merge(
            args(&["--repository", "/repo", "--reports", "COMPILE,compile", "--output-dir", "-"]),
            ConfigFile::default(),
        )
        .unwrap();
        assert_eq!(settings.output, PresenterType::Stdout);
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = ConfigFile {
            repository: Some(PathBuf::from("/from-config")),
            reports: Some("TEST".to_string()),
            format: Some("dot".to_string()),
            include_group_id: Some("com.config".to_string()),
            ..ConfigFile::default()
        };

        let settings = RunSettings::merge(
            args(&[
                "--repository",
                "/from-cli",
                "--reports",
                "COMPILE,RUNTIME",
                "--format",
                "graphml",
                "--include-group",
                "com.cli",
            ]),
            config,
        )
        .unwrap();

        assert_eq!(settings.repository, PathBuf::from("/from-cli"));
        assert_eq!(settings.request.reports.len(), 2);
        assert_eq!(settings.request.format, OutputFormat::GraphMl);
        assert_eq!(settings.request.include_group_id.as_deref(), Some("com.cli"));
    }

    #[test]
    fn test_merge_combines_exclusions() {
        let config = ConfigFile {
            repository: Some(PathBuf::from("/repo")),
            excluded_group_ids: Some(vec!["org.apache.*".to_string()]),
            ..ConfigFile::default()
        };

        let settings = RunSettings::merge(
            args(&["--exclude-group", "com.internal", "--exclude-artifact", "*-test"]),
            config,
        )
        .unwrap();

        assert_eq!(
            settings.request.excluded_group_ids,
            vec!["org.apache.*".to_string(), "com.internal".to_string()]
        );
        assert_eq!(settings.request.excluded_artifact_ids, vec!["*-test".to_string()]);
    }

    #[test]
    fn test_merge_hide_flags_win_over_config() {
        let config = ConfigFile {
            repository: Some(PathBuf::from("/repo")),
            show_version: Some(true),
            show_edge_labels: Some(true),
            ..ConfigFile::default()
        };

        let settings =
            RunSettings::merge(args(&["--hide-version", "--hide-edge-labels"]), config).unwrap();

        assert!(!settings.request.show_version);
        assert!(!settings.request.show_edge_labels);
    }

    #[test]
    fn test_merge_rejects_invalid_reports() {
        let err = RunSettings::merge(
            args(&["--repository", "/repo", "--reports", "COMPILE,BOGUS"]),
            ConfigFile::default(),
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("BOGUS"));
    }
}

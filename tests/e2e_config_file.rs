/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to written reports, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture_repository() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/repository")
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Config body pointing at the fixture repository, followed by `extra`.
fn config_with_repository(extra: &str) -> String {
    format!(
        "repository: \"{}\"\n{}",
        fixture_repository().display(),
        extra
    )
}

fn read(dir: &Path, file_name: &str) -> String {
    fs::read_to_string(dir.join(file_name)).unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_supplies_repository_and_reports() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("artifact-graph.config.yml"),
            &config_with_repository("reports: \"COMPILE\"\noutput_dir: graphs\n"),
        );

        cargo_bin_cmd!("artifact-graph")
            .current_dir(dir.path())
            .args(["--root", "com.example:app:1.0"])
            .assert()
            .success();

        let graphs = dir.path().join("graphs");
        assert!(graphs.join("app-1.0-COMPILE-deps.graphml").exists());
        assert_eq!(fs::read_dir(&graphs).unwrap().count(), 1);
    }

    #[test]
    fn test_auto_discovery_applies_exclusions() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("artifact-graph.config.yml"),
            &config_with_repository(
                "reports: \"TEST\"\nexcluded_group_ids:\n  - junit\nexcluded_artifact_ids:\n  - \"slf4j-*\"\n",
            ),
        );

        cargo_bin_cmd!("artifact-graph")
            .current_dir(dir.path())
            .args(["--root", "com.example:app:1.0", "--output-dir", "out"])
            .assert()
            .success();

        let xml = read(&dir.path().join("out"), "app-1.0-TEST-deps.graphml");
        assert!(!xml.contains("junit"));
        assert!(!xml.contains("hamcrest"));
        assert!(!xml.contains("slf4j"));
        assert!(xml.contains("core"));
    }

    #[test]
    fn test_no_config_and_no_repository_is_application_error() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("artifact-graph")
            .current_dir(dir.path())
            .args(["--root", "com.example:app:1.0"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No artifact repository given"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        let out = dir.path().join("out");
        write_config(
            &config_path,
            &config_with_repository("reports: \"RUNTIME\"\nformat: dot\nfinal_name: svc\n"),
        );

        cargo_bin_cmd!("artifact-graph")
            .args(["--root", "com.example:app:1.0"])
            .arg("--config")
            .arg(&config_path)
            .arg("--output-dir")
            .arg(&out)
            .assert()
            .success();

        let dot = read(&out, "svc-deps.dot");
        assert!(dot.starts_with("digraph"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        cargo_bin_cmd!("artifact-graph")
            .args([
                "--root",
                "com.example:app:1.0",
                "--config",
                "/nonexistent/artifact-graph.config.yml",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml_is_application_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("broken.yml");
        write_config(&config_path, "reports: [[[broken");

        cargo_bin_cmd!("artifact-graph")
            .args(["--root", "com.example:app:1.0"])
            .arg("--config")
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_report_in_config_is_application_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, &config_with_repository("reports: \"DEPLOY\"\n"));

        cargo_bin_cmd!("artifact-graph")
            .args(["--root", "com.example:app:1.0"])
            .arg("--config")
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid config: reports"));
    }

    #[test]
    fn test_unknown_fields_are_warned() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &config_with_repository("reports: \"COMPILE\"\nshow_sizes: true\n"),
        );

        cargo_bin_cmd!("artifact-graph")
            .args(["--root", "com.example:app:1.0", "--output-dir", "-"])
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'show_sizes' will be ignored",
            ));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_reports_and_format_override_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        let out = dir.path().join("out");
        write_config(
            &config_path,
            &config_with_repository("reports: \"TEST\"\nformat: dot\n"),
        );

        cargo_bin_cmd!("artifact-graph")
            .args([
                "--root",
                "com.example:app:1.0",
                "--reports",
                "COMPILE",
                "--format",
                "graphml",
            ])
            .arg("--config")
            .arg(&config_path)
            .arg("--output-dir")
            .arg(&out)
            .assert()
            .success();

        assert!(out.join("app-1.0-COMPILE-deps.graphml").exists());
        assert!(!out.join("app-1.0-TEST-deps.dot").exists());
    }

    #[test]
    fn test_hide_flags_override_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &config_with_repository(
                "reports: \"COMPILE\"\nshow_version: true\nshow_edge_labels: true\n",
            ),
        );

        cargo_bin_cmd!("artifact-graph")
            .args([
                "--root",
                "com.example:app:1.0",
                "--output-dir",
                "-",
                "--hide-version",
                "--hide-edge-labels",
            ])
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("<data key=\"e_label\">").not())
            .stdout(predicate::str::contains("v_version").not());
    }

    #[test]
    fn test_cli_and_config_exclusions_are_combined() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &config_with_repository("reports: \"TEST\"\nexcluded_group_ids:\n  - junit\n"),
        );

        cargo_bin_cmd!("artifact-graph")
            .args([
                "--root",
                "com.example:app:1.0",
                "--output-dir",
                "-",
                "--exclude-group",
                "org.slf4j",
            ])
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("junit").not())
            .stdout(predicate::str::contains("slf4j").not())
            .stdout(predicate::str::contains("legacy"));
    }
}

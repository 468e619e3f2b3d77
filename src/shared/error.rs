use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested report was written
    Success = 0,
    /// At least one report could not be written; the others were
    ReportsFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration error, invalid repository, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ReportsFailed => write!(f, "Reports Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Invalid report definition: '{token}'\nReason: {reason}\n\n💡 Hint: Use GRAPHTYPE[-TRANSITIVE][-OPTIONAL] where GRAPHTYPE is one of PACKAGE, COMPILE, RUNTIME, TEST")]
    InvalidReportDefinition { token: String, reason: String },

    #[error("Invalid {kind} pattern: '{pattern}'\nReason: {reason}")]
    InvalidPattern {
        kind: String,
        pattern: String,
        reason: String,
    },

    #[error("Invalid artifact identifier: '{value}'\nReason: {reason}\n\n💡 Hint: Use the form group:artifact:version[:classifier]")]
    InvalidArtifactIdentifier { value: String, reason: String },

    #[error("Failed to write report: {target}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    OutputWriteError { target: String, details: String },

    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid local repository directory with --repository")]
    InvalidRepositoryPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

use crate::ports::outbound::OutputPresenter;
use crate::shared::error::GraphError;
use crate::shared::security::validate_directory_not_symlink;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter writing each report to a file in one directory
///
/// The directory is created on first use. Writing through symbolic links
/// (either the directory or the report file) is rejected.
pub struct FileSystemWriter {
    output_dir: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write_error(&self, file_name: &str, details: impl Into<String>) -> anyhow::Error {
        GraphError::OutputWriteError {
            target: self.output_dir.join(file_name).display().to_string(),
            details: details.into(),
        }
        .into()
    }

    /// File names must stay inside the output directory
    fn validate_file_name(&self, file_name: &str) -> Result<()> {
        let is_plain_name = !file_name.is_empty()
            && file_name != "."
            && file_name != ".."
            && !file_name.contains(|c: char| c == '/' || c == '\\');
        if !is_plain_name {
            return Err(self.write_error(
                file_name,
                "Report file name must not contain path separators",
            ));
        }
        Ok(())
    }

    fn prepare_output_directory(&self, file_name: &str) -> Result<()> {
        validate_directory_not_symlink(&self.output_dir)
            .map_err(|e| self.write_error(file_name, e.to_string()))?;
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            self.write_error(
                file_name,
                format!("Failed to create output directory: {}", e),
            )
        })
    }

    fn validate_target_not_symlink(&self, path: &Path, file_name: &str) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(self.write_error(
                    file_name,
                    "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
                ));
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn open(&self, file_name: &str) -> Result<Box<dyn Write>> {
        self.validate_file_name(file_name)?;
        self.prepare_output_directory(file_name)?;

        let path = self.output_dir.join(file_name);
        self.validate_target_not_symlink(&path, file_name)?;

        let file = File::create(&path).map_err(|e| self.write_error(file_name, e.to_string()))?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn location(&self, file_name: &str) -> String {
        self.output_dir.join(file_name).display().to_string()
    }
}

/// StdoutPresenter adapter writing every report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn open(&self, _file_name: &str) -> Result<Box<dyn Write>> {
        Ok(Box::new(io::stdout()))
    }

    fn location(&self, _file_name: &str) -> String {
        "stdout".to_string()
    }
}

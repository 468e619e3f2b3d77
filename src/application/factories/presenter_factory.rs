use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where report documents go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    /// One file per report inside this directory
    Directory(PathBuf),
}

impl PresenterType {
    /// `-` selects stdout, anything else is an output directory
    pub fn from_output_dir(output_dir: &str) -> Self {
        if output_dir == "-" {
            PresenterType::Stdout
        } else {
            PresenterType::Directory(PathBuf::from(output_dir))
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the specified destination
    ///
    /// # Examples
    /// ```
    /// use artifact_graph::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// assert_eq!(presenter.location("any"), "stdout");
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::Directory(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_output_dir() {
        assert_eq!(PresenterType::from_output_dir("-"), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from_output_dir("target"),
            PresenterType::Directory(PathBuf::from("target"))
        );
    }

    #[test]
    fn test_create_directory_presenter() {
        let presenter = PresenterFactory::create(PresenterType::Directory(PathBuf::from("out")));
        assert!(presenter.location("a.graphml").ends_with("a.graphml"));
        assert!(presenter.location("a.graphml").starts_with("out"));
    }
}

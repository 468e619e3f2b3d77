use crate::shared::Result;
use std::io::Write;

/// OutputPresenter port for report destinations
///
/// Each report is written to its own named destination. The presenter only
/// hands out byte sinks; the serializer decides what goes into them.
pub trait OutputPresenter {
    /// Opens the destination for the report with the given file name
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination directory cannot be created
    /// - The destination is a symbolic link
    /// - File permissions prevent writing
    fn open(&self, file_name: &str) -> Result<Box<dyn Write>>;

    /// Human-readable location of the destination, used in progress output
    fn location(&self, file_name: &str) -> String;
}

impl<O: OutputPresenter + ?Sized> OutputPresenter for &O {
    fn open(&self, file_name: &str) -> Result<Box<dyn Write>> {
        (**self).open(file_name)
    }

    fn location(&self, file_name: &str) -> String {
        (**self).location(file_name)
    }
}

impl<O: OutputPresenter + ?Sized> OutputPresenter for Box<O> {
    fn open(&self, file_name: &str) -> Result<Box<dyn Write>> {
        (**self).open(file_name)
    }

    fn location(&self, file_name: &str) -> String {
        (**self).location(file_name)
    }
}

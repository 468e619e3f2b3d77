use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes everything to stderr so report output on stdout stays clean. A
/// spinner tracks traversal while artifacts are being resolved; it is
/// cleared before any other message is printed.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut spinner_option = self.spinner.borrow_mut();
        if let Some(spinner) = spinner_option.as_ref() {
            return spinner.clone();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("   {spinner:.green} {prefix} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(120));
        *spinner_option = Some(spinner.clone());
        spinner
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_progress(&self, visited: usize, pending: usize, message: Option<&str>) {
        let spinner = self.get_or_create_spinner();
        spinner.set_prefix(format!("[{} resolved, {} queued]", visited, pending));
        if let Some(msg) = message {
            spinner.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        // Keep the spinner; warnings are printed above it
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.suspend(|| eprintln!("{}", message.yellow())),
            None => eprintln!("{}", message.yellow()),
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message.green());
    }
}

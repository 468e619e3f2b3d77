/// ProgressReporter port for user feedback during graph generation
///
/// Resolution problems are never errors of the run; they are surfaced here
/// as warnings while traversal continues.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports traversal progress
    ///
    /// # Arguments
    /// * `visited` - Artifacts resolved so far
    /// * `pending` - Artifacts still queued
    /// * `message` - Optional message, typically the artifact being resolved
    fn report_progress(&self, visited: usize, pending: usize, message: Option<&str>);

    /// Reports a recoverable problem (unresolvable artifact, unused pattern)
    fn report_warning(&self, message: &str);

    /// Reports a failure of one report or of the whole run
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &P {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, visited: usize, pending: usize, message: Option<&str>) {
        (**self).report_progress(visited, pending, message)
    }

    fn report_warning(&self, message: &str) {
        (**self).report_warning(message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}

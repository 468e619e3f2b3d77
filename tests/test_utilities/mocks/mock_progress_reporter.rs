use artifact_graph::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.with_prefix("Warning: ")
    }

    pub fn errors(&self) -> Vec<String> {
        self.with_prefix("Error: ")
    }

    fn with_prefix(&self, prefix: &str) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix(prefix).map(str::to_string))
            .collect()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, visited: usize, pending: usize, message: Option<&str>) {
        let msg = if let Some(m) = message {
            format!("Progress: {}/{} - {}", visited, pending, m)
        } else {
            format!("Progress: {}/{}", visited, pending)
        };
        self.messages.lock().unwrap().push(msg);
    }

    fn report_warning(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Warning: {}", message));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}

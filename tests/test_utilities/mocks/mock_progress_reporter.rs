use aida_report::prelude::*;
use std::sync::{Arc, Mutex};

/// Records everything a report run tells its progress reporter.
///
/// Entries are kept in call order with a kind prefix: `Progress: n/total`,
/// `Error: `, `Completed: `; plain notes are stored as-is. Clones share
/// the log, so a clone can be handed to a use case or `ReportJob::wait`
/// and inspected afterwards.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Per-file error lines, prefix stripped.
    pub fn errors(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Error: ").map(str::to_string))
            .collect()
    }

    /// The final completion line of the run, if one was reported.
    pub fn completion(&self) -> Option<String> {
        self.get_messages()
            .into_iter()
            .rev()
            .find_map(|m| m.strip_prefix("Completed: ").map(str::to_string))
    }

    fn push(&self, entry: String) {
        self.log.lock().unwrap().push(entry);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(match message {
            Some(file_or_stage) => format!("Progress: {}/{} - {}", current, total, file_or_stage),
            None => format!("Progress: {}/{}", current, total),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}

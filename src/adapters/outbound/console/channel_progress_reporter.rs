use crate::ports::outbound::ProgressReporter;
use std::sync::mpsc::Sender;

/// One progress call, detached from the thread that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Message(String),
    Progress {
        current: usize,
        total: usize,
        message: Option<String>,
    },
    Error(String),
    Completed(String),
}

impl ProgressEvent {
    /// Replays the event on `reporter`.
    pub fn dispatch<R: ProgressReporter + ?Sized>(&self, reporter: &R) {
        match self {
            ProgressEvent::Message(message) => reporter.report(message),
            ProgressEvent::Progress {
                current,
                total,
                message,
            } => reporter.report_progress(*current, *total, message.as_deref()),
            ProgressEvent::Error(message) => reporter.report_error(message),
            ProgressEvent::Completed(message) => reporter.report_completion(message),
        }
    }
}

/// ChannelProgressReporter adapter that forwards progress over a channel
///
/// The pipeline thread owns this reporter; the front end keeps the
/// receiving end and drains it on its own schedule. Events sent after the
/// receiver is gone are dropped.
#[derive(Debug, Clone)]
pub struct ChannelProgressReporter {
    sender: Sender<ProgressEvent>,
}

impl ChannelProgressReporter {
    pub fn new(sender: Sender<ProgressEvent>) -> Self {
        Self { sender }
    }

    fn send(&self, event: ProgressEvent) {
        let _ = self.sender.send(event);
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn report(&self, message: &str) {
        self.send(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.send(ProgressEvent::Progress {
            current,
            total,
            message: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.send(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.send(ProgressEvent::Completed(message.to_string()));
    }
}

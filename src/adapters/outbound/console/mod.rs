/// Console adapters for progress reporting
mod channel_progress_reporter;
mod progress_reporter;

pub use channel_progress_reporter::{ChannelProgressReporter, ProgressEvent};
pub use progress_reporter::StderrProgressReporter;

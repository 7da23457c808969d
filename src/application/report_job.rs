use crate::adapters::outbound::console::{ChannelProgressReporter, ProgressEvent};
use crate::application::dto::{CancelFlag, ReportResponse};
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use tracing::warn;

/// ReportJob - A report run executing on a background worker thread
///
/// The worker receives a `ChannelProgressReporter`; its calls arrive on
/// the owning thread as `ProgressEvent`s and are replayed there by `wait`.
pub struct ReportJob {
    events: Receiver<ProgressEvent>,
    handle: JoinHandle<Result<ReportResponse>>,
    cancel: CancelFlag,
}

impl ReportJob {
    /// Starts `work` on a new thread.
    ///
    /// `cancel` is the flag the work polls; `ReportJob::cancel` sets it.
    ///
    /// # Errors
    /// Fails only if the operating system refuses to spawn the thread.
    pub fn spawn<F>(cancel: CancelFlag, work: F) -> Result<Self>
    where
        F: FnOnce(ChannelProgressReporter) -> Result<ReportResponse> + Send + 'static,
    {
        let (sender, events) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("report-worker".to_string())
            .spawn(move || work(ChannelProgressReporter::new(sender)))?;

        Ok(Self {
            events,
            handle,
            cancel,
        })
    }

    /// Requests cooperative cancellation; the file in progress completes.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Routes Ctrl-C (SIGINT/SIGTERM) to this job's cancel flag.
    ///
    /// Only one handler can be installed per process.
    ///
    /// # Errors
    /// Fails if a handler is already installed or the platform refuses it.
    pub fn cancel_on_interrupt(&self) -> Result<()> {
        ctrlc::set_handler(interrupt_handler(self.cancel.clone()))?;
        Ok(())
    }

    /// Replays progress on `reporter` until the worker finishes, then
    /// returns its result.
    pub fn wait<R: ProgressReporter + ?Sized>(self, reporter: &R) -> Result<ReportResponse> {
        for event in self.events.iter() {
            event.dispatch(reporter);
        }

        match self.handle.join() {
            Ok(result) => result,
            Err(_) => anyhow::bail!("Report worker thread panicked"),
        }
    }
}

fn interrupt_handler(cancel: CancelFlag) -> impl FnMut() + Send + 'static {
    move || {
        if !cancel.is_cancelled() {
            warn!("Interrupt received; stopping after the current file");
            eprintln!("\nInterrupted: finishing the current file and saving the partial report...");
        }
        cancel.cancel();
    }
}

use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::report::ReportBuilder;
use crate::inventory::domain::ProcessedFileSet;
use crate::inventory::policies::ReportLayout;
use crate::inventory::services::{FieldExtractor, SoftwareClassifier};
use crate::ports::outbound::{DocumentCollector, DocumentReader, ProgressReporter, ReportWriter};
use crate::shared::Result;
use std::path::Path;
use tracing::{error, info, warn};

/// What happened to a single candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    Written,
    Skipped,
    Failed,
}

/// GenerateReportUseCase - Core use case for report generation
///
/// Composes file discovery, document reading, field extraction and the
/// report builder into one strictly sequential run. Per-file problems are
/// logged and counted; only discovery, output and save failures abort.
///
/// # Type Parameters
/// * `C` - DocumentCollector implementation
/// * `R` - DocumentReader implementation
/// * `W` - ReportWriter implementation
/// * `P` - ProgressReporter implementation
pub struct GenerateReportUseCase<C, R, W, P> {
    collector: C,
    reader: R,
    writer: W,
    progress_reporter: P,
    extractor: FieldExtractor,
    classifier: SoftwareClassifier,
    layout: ReportLayout,
}

impl<C, R, W, P> GenerateReportUseCase<C, R, W, P>
where
    C: DocumentCollector,
    R: DocumentReader,
    W: ReportWriter,
    P: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        collector: C,
        reader: R,
        writer: W,
        progress_reporter: P,
        extractor: FieldExtractor,
        classifier: SoftwareClassifier,
    ) -> Self {
        Self {
            collector,
            reader,
            writer,
            progress_reporter,
            extractor,
            classifier,
            layout: ReportLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Executes one run, consuming the use case together with its writer.
    ///
    /// # Returns
    /// ReportResponse with the per-outcome counters; `written_rows` is the
    /// number of rows in the saved workbook.
    ///
    /// # Errors
    /// Fails if the input directory cannot be walked, the header cannot be
    /// written, or the workbook cannot be saved.
    pub fn execute(self, request: ReportRequest) -> Result<ReportResponse> {
        let Self {
            collector,
            reader,
            writer,
            progress_reporter,
            extractor,
            classifier,
            layout,
        } = self;

        progress_reporter.report(&format!(
            "📂 Scanning {} for report files",
            request.input_directory.display()
        ));
        let paths = collector.collect_documents(&request.input_directory)?;
        let total = paths.len();
        info!(
            total,
            input = %request.input_directory.display(),
            "Found report files"
        );
        progress_reporter.report(&format!("✅ Found {} report file(s)", total));
        progress_reporter.report_progress(0, total, Some("Starting..."));

        let mut builder = ReportBuilder::create(writer, layout, classifier)?;
        let mut processed_files = ProcessedFileSet::new();
        let mut response = ReportResponse::empty(request.output_path.clone());
        response.total = total;
        let mut sequence: u32 = 0;

        for path in &paths {
            if request.is_cancelled() {
                warn!(processed = response.processed, total, "Run cancelled");
                progress_reporter.report_error(&format!(
                    "⚠️  Cancelled after {} of {} file(s)",
                    response.processed, total
                ));
                response.cancelled = true;
                break;
            }

            let display_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            progress_reporter.report_progress(
                response.processed,
                total,
                Some(&format!("Processing: {}", display_name)),
            );

            let context = FileContext {
                reader: &reader,
                extractor: &extractor,
                reporter: &progress_reporter,
                root: &request.input_directory,
            };
            match context.process(path, sequence + 1, &mut builder, &mut processed_files) {
                FileOutcome::Written => {
                    sequence += 1;
                    response.written_rows += 1;
                }
                FileOutcome::Skipped => response.skipped += 1,
                FileOutcome::Failed => response.failed += 1,
            }

            response.processed += 1;
            progress_reporter.report_progress(response.processed, total, None);
        }

        builder.finalize_row_heights()?;
        builder.save(&request.output_path)?;
        info!(
            rows = response.written_rows,
            skipped = response.skipped,
            failed = response.failed,
            output = %request.output_path.display(),
            "Report saved"
        );

        if response.cancelled {
            progress_reporter.report_progress(response.processed, total, Some("Processing cancelled"));
        } else {
            progress_reporter.report_progress(total, total, Some("Processing complete"));
        }
        progress_reporter.report_completion(&format!(
            "✅ Report saved to {} ({} row(s))",
            request.output_path.display(),
            response.written_rows
        ));

        Ok(response)
    }
}

/// Collaborators needed to turn one path into one row
struct FileContext<'a, R, P> {
    reader: &'a R,
    extractor: &'a FieldExtractor,
    reporter: &'a P,
    root: &'a Path,
}

impl<R: DocumentReader, P: ProgressReporter> FileContext<'_, R, P> {
    fn process<W: ReportWriter>(
        &self,
        path: &Path,
        next_sequence: u32,
        builder: &mut ReportBuilder<W>,
        processed_files: &mut ProcessedFileSet,
    ) -> FileOutcome {
        let document = match self.reader.read_document(self.root, path) {
            Ok(document) => document,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping unreadable document");
                self.reporter
                    .report_error(&format!("⚠️  Skipped {}: {}", path.display(), e));
                return FileOutcome::Skipped;
            }
        };

        let Some(record) = self.extractor.extract(&document, processed_files) else {
            self.reporter.report(&format!(
                "ℹ️  {} was already processed, skipping",
                document.relative_path()
            ));
            return FileOutcome::Skipped;
        };

        match builder.append_row(next_sequence, &record) {
            Ok(()) => {
                info!(
                    file = record.file_name(),
                    sequence = next_sequence,
                    machine = record.machine_name(),
                    software = record.software().len(),
                    users = record.users().len(),
                    "Row written"
                );
                FileOutcome::Written
            }
            Err(e) => {
                error!(file = record.file_name(), error = %e, "Failed to write row");
                self.reporter.report_error(&format!(
                    "❌ Failed to process {}: {}",
                    record.file_name(),
                    e
                ));
                FileOutcome::Failed
            }
        }
    }
}

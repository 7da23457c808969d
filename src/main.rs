use aida_report::adapters::outbound::console::StderrProgressReporter;
use aida_report::adapters::outbound::filesystem::StdoutPresenter;
use aida_report::application::dto::{CancelFlag, ReportRequest};
use aida_report::application::factories::FormatterFactory;
use aida_report::application::ReportJob;
use aida_report::cli::Args;
use aida_report::config::{self, Settings};
use aida_report::logging::init_logging;
use aida_report::ports::outbound::OutputPresenter;
use aida_report::shared::error::ExitCode;
use aida_report::shared::Result;
use owo_colors::OwoColorize;
use std::process;
use tracing::{error, info, warn};

fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        error!(error = %format!("{:#}", e), "Run failed");
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_for(&args)?;
    let settings = Settings::resolve(&args, config)?;
    init_logging(&settings.log_file)?;
    info!(
        input = %settings.input_directory.display(),
        output = %settings.output_path.display(),
        keywords = settings.security_keywords.len(),
        "Starting report run"
    );

    let cancel = CancelFlag::new();
    let request = ReportRequest::new(
        settings.input_directory.clone(),
        settings.output_path.clone(),
    )
    .with_cancel(cancel.clone());
    let keywords = settings.security_keywords.clone();

    let job = ReportJob::spawn(cancel, move |reporter| {
        aida_report::generate_report(request, keywords, reporter)
    })?;
    if let Err(e) = job.cancel_on_interrupt() {
        warn!(error = %e, "Ctrl-C handler not installed; the run cannot be interrupted cleanly");
    }
    let response = job.wait(&StderrProgressReporter::new())?;

    let formatter = FormatterFactory::create(settings.summary);
    let summary = formatter.format(&settings.input_directory, &response)?;
    StdoutPresenter::new().present(&summary)?;

    Ok(())
}

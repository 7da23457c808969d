use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::SummaryFormat;

/// Build one XLSX inventory summary from a directory of AIDA64 HTML reports
#[derive(Parser, Debug)]
#[command(name = "aida-report")]
#[command(version)]
#[command(
    about = "Build one XLSX inventory summary from a directory of AIDA64 HTML reports",
    long_about = None
)]
pub struct Args {
    /// Directory with AIDA64 .htm/.html reports (searched recursively)
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Workbook to write (defaults to <DIR>/results.xlsx)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to <DIR>/aida-report.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log file, appended to on every run
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Summary printed after the run: text or json
    #[arg(short, long, value_name = "FORMAT")]
    pub summary: Option<SummaryFormat>,

    /// Additional security software keyword (case-insensitive substring)
    /// Can be specified multiple times: -k "avast" -k "symantec"
    #[arg(short = 'k', long = "security-keyword", value_name = "KEYWORD")]
    pub security_keywords: Vec<String>,
}

impl Args {
    pub fn parse_args() -> std::result::Result<Self, clap::Error> {
        Self::try_parse()
    }
}

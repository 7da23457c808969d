use crate::application::dto::ReportResponse;
use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonSummary<'a> {
    generated_at: String,
    tool: ToolInfo,
    input_directory: &'a Path,
    #[serde(flatten)]
    response: &'a ReportResponse,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

/// JsonSummaryFormatter adapter producing a machine-readable summary
pub struct JsonSummaryFormatter;

impl JsonSummaryFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonSummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for JsonSummaryFormatter {
    fn format(&self, input_directory: &Path, response: &ReportResponse) -> Result<String> {
        let summary = JsonSummary {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            input_directory,
            response,
        };
        let mut json = serde_json::to_string_pretty(&summary)?;
        json.push('\n');
        Ok(json)
    }
}

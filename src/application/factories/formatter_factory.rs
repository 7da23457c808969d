use crate::adapters::outbound::formatters::{JsonSummaryFormatter, TextSummaryFormatter};
use crate::application::dto::SummaryFormat;
use crate::ports::outbound::SummaryFormatter;

/// Factory for creating run summary formatters
///
/// Selects the formatter adapter matching the requested summary format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified summary format
    ///
    /// # Examples
    /// ```
    /// use aida_report::application::dto::SummaryFormat;
    /// use aida_report::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(SummaryFormat::Json);
    /// ```
    pub fn create(format: SummaryFormat) -> Box<dyn SummaryFormatter> {
        match format {
            SummaryFormat::Text => Box::new(TextSummaryFormatter::new()),
            SummaryFormat::Json => Box::new(JsonSummaryFormatter::new()),
        }
    }
}

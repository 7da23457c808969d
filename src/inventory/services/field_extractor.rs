use super::html_navigation::{
    all_rows, find_named_anchor, flattened_text, grandparent, next_element_named, table_rows,
};
use crate::inventory::domain::{ExtractedRecord, ProcessedFileSet, SourceDocument};
use crate::shared::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

/// `[ name ]` inside a user cell
static BRACKETED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*([^\]]+?)\s*\]").expect("static regex is valid"));

/// Column holding the program name in the installed-programs table
const PROGRAM_NAME_COLUMN: usize = 2;

/// Column holding the program version in the installed-programs table
const PROGRAM_VERSION_COLUMN: usize = 3;

/// Rows consumed before program data starts: the column header row and
/// the sub-header row below it.
const PROGRAM_TABLE_LEADING_ROWS: usize = 2;

/// Labels, sentinels and anchor names of the AIDA64 page layout.
///
/// The defaults match reports produced by a Russian-localized AIDA64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionLabels {
    pub machine_label: String,
    pub machine_stop_label: String,
    pub machine_not_found: String,
    pub os_label: String,
    pub os_stop_label: String,
    pub os_not_found: String,
    pub programs_anchor: String,
    pub users_anchor: String,
    pub user_cell_class: String,
}

impl Default for ExtractionLabels {
    fn default() -> Self {
        Self {
            machine_label: "Компьютер".to_string(),
            machine_stop_label: "Генератор".to_string(),
            machine_not_found: "Имя компьютера не найдено".to_string(),
            os_label: "Операционная система".to_string(),
            os_stop_label: "Дата".to_string(),
            os_not_found: "Операционная система не найдена".to_string(),
            programs_anchor: "installed programs".to_string(),
            users_anchor: "users".to_string(),
            user_cell_class: "dt".to_string(),
        }
    }
}

/// A `label value [stop-label ...]` pattern for one summary field.
#[derive(Debug, Clone)]
struct LabelPattern {
    label: String,
    pattern: Regex,
}

impl LabelPattern {
    fn new(label: &str, stop_label: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"{}\s+(.*?)(?:\s+{}|\s*$)",
            regex::escape(label),
            regex::escape(stop_label)
        ))?;
        Ok(Self {
            label: label.to_string(),
            pattern,
        })
    }

    /// Value following the label in the first row that carries it.
    fn find_in(&self, document: &Html) -> Option<String> {
        all_rows(document)
            .map(flattened_text)
            .filter(|text| text.contains(&self.label))
            .find_map(|text| {
                self.pattern
                    .captures(&text)
                    .and_then(|captures| captures.get(1))
                    .map(|value| value.as_str().trim().to_string())
            })
    }
}

/// FieldExtractor - pulls the inventory fields out of one AIDA64 page
///
/// Each field is extracted independently: a missing section yields the
/// field's sentinel or an empty list and never fails the whole record.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    labels: ExtractionLabels,
    machine: LabelPattern,
    os: LabelPattern,
    user_cell: Selector,
}

impl FieldExtractor {
    /// Compiles the patterns for the given labels.
    ///
    /// # Errors
    /// Returns an error if the user cell class is blank, contains
    /// whitespace, or does not form a valid CSS class selector.
    pub fn new(labels: ExtractionLabels) -> Result<Self> {
        let class = labels.user_cell_class.as_str();
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            anyhow::bail!("Invalid user cell class '{}': expected a single class name", class);
        }
        let machine = LabelPattern::new(&labels.machine_label, &labels.machine_stop_label)?;
        let os = LabelPattern::new(&labels.os_label, &labels.os_stop_label)?;
        let selector_text = format!("td.{}", labels.user_cell_class);
        let user_cell = Selector::parse(&selector_text)
            .map_err(|e| anyhow::anyhow!("Invalid user cell class '{}': {:?}", selector_text, e))?;

        Ok(Self {
            labels,
            machine,
            os,
            user_cell,
        })
    }

    pub fn labels(&self) -> &ExtractionLabels {
        &self.labels
    }

    /// Extracts a record unless the document was already processed in this run.
    ///
    /// The relative path is recorded in `processed` on first sight, so a
    /// second call with the same path returns `None`.
    pub fn extract(
        &self,
        document: &SourceDocument,
        processed: &mut ProcessedFileSet,
    ) -> Option<ExtractedRecord> {
        if !processed.insert(document.relative_path()) {
            info!(
                file = document.relative_path(),
                "File was already processed, skipping"
            );
            return None;
        }

        let html = Html::parse_document(document.content());
        Some(ExtractedRecord::new(
            document.relative_path().to_string(),
            self.machine_name(&html),
            self.os_description(&html),
            self.installed_software(&html),
            self.users(&html),
        ))
    }

    pub fn machine_name(&self, html: &Html) -> String {
        match self.machine.find_in(html) {
            Some(name) => {
                info!(machine_name = %name, "Found machine name");
                name
            }
            None => self.labels.machine_not_found.clone(),
        }
    }

    pub fn os_description(&self, html: &Html) -> String {
        match self.os.find_in(html) {
            Some(os) => {
                info!(os = %os, "Found operating system");
                os
            }
            None => self.labels.os_not_found.clone(),
        }
    }

    /// `"<name> <version>"` for every row of the installed-programs table.
    pub fn installed_software(&self, html: &Html) -> Vec<String> {
        let Some(table) = self.anchored_table(html, &self.labels.programs_anchor) else {
            warn!("Installed programs table not found");
            return Vec::new();
        };

        let rows = table_rows(table);
        if rows.len() < PROGRAM_TABLE_LEADING_ROWS {
            debug!(rows = rows.len(), "Installed programs table has no data rows");
        }

        rows.iter()
            .skip(PROGRAM_TABLE_LEADING_ROWS)
            .map(|cells| {
                let name = cells.get(PROGRAM_NAME_COLUMN).map_or("", String::as_str);
                let version = cells.get(PROGRAM_VERSION_COLUMN).map_or("", String::as_str);
                program_entry(name, version)
            })
            .collect()
    }

    /// Numbered `"<n>. <name> "` entries from the users section.
    pub fn users(&self, html: &Html) -> Vec<String> {
        let Some(anchor) = find_named_anchor(html, &self.labels.users_anchor) else {
            debug!("Users section not found");
            return Vec::new();
        };
        let Some(table) =
            grandparent(anchor).and_then(|section| next_element_named(html, section, "table"))
        else {
            warn!("Users table not found after the users anchor");
            return Vec::new();
        };

        table
            .select(&self.user_cell)
            .filter_map(|cell| bracketed_name(&cell.text().collect::<String>()))
            .enumerate()
            .map(|(i, name)| format!("{}. {} ", i + 1, name))
            .collect()
    }

    fn anchored_table<'a>(&self, html: &'a Html, anchor_name: &str) -> Option<ElementRef<'a>> {
        let anchor = find_named_anchor(html, anchor_name)?;
        next_element_named(html, anchor, "table")
    }
}

/// `"<name> <version>"`, blank cells included, so every data row keeps its entry.
fn program_entry(name: &str, version: &str) -> String {
    format!("{} {}", name, version)
}

/// Name inside `[ ... ]`; blank brackets are rejected.
fn bracketed_name(text: &str) -> Option<String> {
    let captured = BRACKETED_NAME.captures(text)?.get(1)?.as_str().trim();
    if captured.is_empty() {
        None
    } else {
        Some(captured.to_string())
    }
}

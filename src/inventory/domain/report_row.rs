use crate::inventory::domain::ExtractedRecord;

/// One formatted spreadsheet line built from an `ExtractedRecord`.
///
/// The software and security blocks are numbered independently from 1,
/// one entry per line, each line terminated by `\n`. `security` is the
/// already classified subset of the record's software, in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub sequence: u32,
    pub file_name: String,
    pub machine_name: String,
    pub os_description: String,
    pub software_block: String,
    pub security_block: String,
    pub users_block: String,
}

impl ReportRow {
    pub fn new(sequence: u32, record: &ExtractedRecord, security: &[&str]) -> Self {
        Self {
            sequence,
            file_name: record.file_name().to_string(),
            machine_name: record.machine_name().to_string(),
            os_description: record.os_description().to_string(),
            software_block: numbered_block(record.software().iter().map(String::as_str)),
            security_block: numbered_block(security.iter().copied()),
            users_block: record.users().join("\n"),
        }
    }

    /// Cell values in column order; the sequence number is column 0.
    pub fn text_cells(&self) -> [&str; 6] {
        [
            &self.file_name,
            &self.machine_name,
            &self.os_description,
            &self.software_block,
            &self.security_block,
            &self.users_block,
        ]
    }
}

fn numbered_block<'a>(entries: impl Iterator<Item = &'a str>) -> String {
    entries
        .enumerate()
        .map(|(i, entry)| format!("{}. {}\n", i + 1, entry))
        .collect()
}

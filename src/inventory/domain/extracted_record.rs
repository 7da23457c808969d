/// Fields extracted from one report document.
///
/// `software` holds `"<name> <version>"` strings and `users` holds already
/// numbered `"<n>. <name> "` strings, both in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    file_name: String,
    machine_name: String,
    os_description: String,
    software: Vec<String>,
    users: Vec<String>,
}

impl ExtractedRecord {
    pub fn new(
        file_name: String,
        machine_name: String,
        os_description: String,
        software: Vec<String>,
        users: Vec<String>,
    ) -> Self {
        Self {
            file_name,
            machine_name,
            os_description,
            software,
            users,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn machine_name(&self) -> &str {
        &self.machine_name
    }

    pub fn os_description(&self) -> &str {
        &self.os_description
    }

    pub fn software(&self) -> &[String] {
        &self.software
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }
}

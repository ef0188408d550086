//! Directory listing types

use serde::{Deserialize, Serialize};

use crate::envelope::HumanText;

/// Entry names directly inside a directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListing {
    /// Path as requested by the caller
    pub path: String,
    /// Entry names sorted by name
    pub entries: Vec<String>,
}

impl HumanText for FileListing {
    fn human_text(&self) -> String {
        format!("Files in {}:\n{}", self.path, self.entries.join("\n"))
    }
}

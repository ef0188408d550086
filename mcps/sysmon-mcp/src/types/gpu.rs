//! GPU diagnostic output

use serde::{Deserialize, Serialize};

use crate::envelope::HumanText;

/// Verbatim output of the platform GPU utility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuReport {
    pub raw: String,
}

impl HumanText for GpuReport {
    fn human_text(&self) -> String {
        self.raw.clone()
    }
}

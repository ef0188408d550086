//! Directory listing

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::config::FilesConfig;
use crate::error::{ToolError, ToolResult};
use crate::types::FileListing;

/// Lists directory entries, optionally confined to a root
#[derive(Debug, Clone, Default)]
pub struct FileLister {
    root: Option<PathBuf>,
}

impl FileLister {
    /// Unrestricted lister
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FilesConfig) -> Self {
        let root = config.root.as_deref().map(|r| {
            let expanded = expand_home(r);
            expanded.canonicalize().unwrap_or(expanded)
        });
        Self { root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Names of the entries directly inside `path`, sorted by name
    pub async fn list(&self, path: &str) -> ToolResult<FileListing> {
        if path.is_empty() {
            return Err(ToolError::InvalidArguments("path must not be empty".to_string()));
        }
        if path.contains('\0') {
            return Err(ToolError::InvalidArguments("path contains a null byte".to_string()));
        }

        let mut target = expand_home(path);

        if let Some(root) = &self.root {
            let canonical = fs::canonicalize(&target)
                .await
                .map_err(|e| ToolError::from_path_io(path, e))?;
            if !canonical.starts_with(root) {
                return Err(ToolError::PermissionDenied(format!(
                    "{} is outside {}",
                    path,
                    root.display()
                )));
            }
            // Read the path that passed the check
            target = canonical;
        }

        let mut read_dir = fs::read_dir(&target)
            .await
            .map_err(|e| ToolError::from_path_io(path, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| ToolError::from_path_io(path, e))?
        {
            entries.push(entry.file_name().to_string_lossy().to_string());
        }
        entries.sort();

        Ok(FileListing {
            path: path.to_string(),
            entries,
        })
    }
}

fn expand_home(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

// src/export/utils.rs
//! Utility functions for view export

use std::fs;
use std::path::Path;

use crate::Result;

/// Write content to a file, creating parent directories if needed
pub fn write_export_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Format a DateTime as full ISO timestamp
pub fn format_timestamp(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

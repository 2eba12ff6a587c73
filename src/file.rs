// src/file.rs
//
// Copy/Export of the currently visible directory.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportFormat;
use crate::csv::rows_to_string;
use crate::view::TieredView;

pub const EXPORT_HEADERS: [&str; 6] = ["Tier", "Name", "Role", "Department", "Email", "Phone"];

/// Header row plus one row per visible record, in display order.
pub fn directory_rows(view: &TieredView<'_>) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(view.len() + 1);
    rows.push(EXPORT_HEADERS.iter().map(|h| s!(*h)).collect());
    for (tier, r) in view.iter() {
        rows.push(vec![
            s!(tier.title()),
            r.display_name(),
            s!(r.role().unwrap_or("")),
            s!(r.department().unwrap_or("")),
            s!(r.email().unwrap_or("")),
            s!(r.phone().unwrap_or("")),
        ]);
    }
    rows
}

pub fn to_export_string(view: &TieredView<'_>, format: ExportFormat) -> String {
    rows_to_string(&directory_rows(view), format.delim())
}

/// Write the view to `path`, creating parent directories. Returns the path written.
pub fn write_export(
    path: &Path,
    view: &TieredView<'_>,
    format: ExportFormat,
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, to_export_string(view, format))?;
    logf!("Export: {} record(s) → {}", view.len(), path.display());
    Ok(path.to_path_buf())
}

/// Format implied by the file extension; CSV unless it says `.tsv`.
pub fn format_for_path(path: &Path) -> ExportFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(ExportFormat::Tsv.ext()) => ExportFormat::Tsv,
        _ => ExportFormat::Csv,
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

//! History export.
//!
//! Writes the last history entries as plain text, one canonical line per
//! entry, to `conversion_history.txt`.

use crate::state::HistoryLedger;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name of the exported history.
pub const EXPORT_FILE_NAME: &str = "conversion_history.txt";

/// Error type for history export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the export file failed.
    #[error("Failed to write history to {path:?}: {source}")]
    Io {
        /// Target file.
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Path of the export file inside `dir`.
pub fn export_path(dir: &Path) -> PathBuf {
    dir.join(EXPORT_FILE_NAME)
}

/// Write the last `n` entries of `history` to `dir/conversion_history.txt`.
///
/// The directory is created when missing. An empty history produces an
/// empty file. Returns the path written.
///
/// # Errors
///
/// `ExportError::Io` if the directory or file cannot be written.
pub fn export_history(history: &HistoryLedger, n: usize, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = export_path(dir);
    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;
    std::fs::write(&path, history.export_text(n)).map_err(io_err)?;

    info!(path = %path.display(), entries = history.len().min(n), "Exported history");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HistoryEntry;
    use std::fs;

    #[test]
    fn export_writes_canonical_lines() {
        let dir = std::env::temp_dir().join("unitconv_test_export");
        let _ = fs::remove_dir_all(&dir);

        let mut history = HistoryLedger::default();
        history.append(HistoryEntry::new(100.0, "Celsius", 212.0, "Fahrenheit"));
        history.append(HistoryEntry::new(70.0, "kilograms", 154.3234, "pounds"));

        let path = export_history(&history, 10, &dir).unwrap();
        assert!(path.ends_with(EXPORT_FILE_NAME));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "100.0 Celsius → 212.0000 Fahrenheit\n70.0 kilograms → 154.3234 pounds"
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_of_empty_history_is_empty_file() {
        let dir = std::env::temp_dir().join("unitconv_test_export_empty");
        let path = export_history(&HistoryLedger::default(), 10, &dir).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_into_a_file_path_fails() {
        let blocker = std::env::temp_dir().join("unitconv_test_export_blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = export_history(&HistoryLedger::default(), 10, &blocker);
        assert!(matches!(result, Err(ExportError::Io { .. })));

        let _ = fs::remove_file(&blocker);
    }
}

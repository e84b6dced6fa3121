//! JSON fixture I/O and atomic file operations

use crate::types::SourceResult;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceDataError {
    #[error("failed to read source data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse source data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a list of source results from a JSON file.
pub fn read_results(path: &Path) -> Result<Vec<SourceResult>, SourceDataError> {
    let contents = std::fs::read_to_string(path)?;
    let results: Vec<SourceResult> = serde_json::from_str(&contents)?;
    Ok(results)
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceId;

    #[test]
    fn test_read_results_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("results.json");

        let results = vec![
            SourceResult::empty(SourceId::Github),
            SourceResult::skipped(SourceId::Producthunt),
        ];
        let json = serde_json::to_string_pretty(&results).unwrap();
        std::fs::write(&path, json).unwrap();

        let parsed = read_results(&path).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn test_read_results_missing_file() {
        let result = read_results(Path::new("/nonexistent/results.json"));
        assert!(matches!(result, Err(SourceDataError::Io(_))));
    }

    #[test]
    fn test_read_results_malformed_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = read_results(&path);
        assert!(matches!(result, Err(SourceDataError::Json(_))));
    }

    #[test]
    fn test_atomic_write_creates_parents() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("out.json");

        atomic_write(&path, b"{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}

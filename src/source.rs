use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors reading program text
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("File '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the full text of a source file
/// # Errors
/// Returns `SourceError::NotFound` for a missing path and `SourceError::Io` for any other read failure
pub fn read_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[function main [body [return 0]]]").unwrap();

        let text = read_source(file.path()).unwrap();
        assert_eq!(text, "[function main [body [return 0]]]");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.rq");
        assert!(matches!(read_source(&path), Err(SourceError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read_source(dir.path()), Err(SourceError::Io { .. })));
    }
}

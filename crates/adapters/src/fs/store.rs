use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use heic2png_application::{ApplicationError, FileStore};
use tracing::warn;

#[derive(Debug, Default)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>, ApplicationError> {
        fs::read(path).map_err(|error| ApplicationError::Io(error.to_string()))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ApplicationError> {
        let result = File::create(path).and_then(|mut file| {
            file.write_all(bytes)?;
            file.flush()
        });

        if let Err(error) = result {
            if path.is_file() {
                if let Err(cleanup) = fs::remove_file(path) {
                    warn!(path = %path.display(), error = %cleanup, "could not remove partial output");
                }
            }
            return Err(ApplicationError::Io(error.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn write_replaces_existing_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("photo.png");
        fs::write(&path, b"a much longer previous payload").expect("seed");

        LocalFileStore.write(&path, b"new").expect("write");

        assert_eq!(fs::read(&path).expect("read"), b"new");
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = LocalFileStore.read(&dir.path().join("absent.heic"));
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }

    #[test]
    fn write_into_missing_directory_fails_cleanly() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gone").join("photo.png");

        let result = LocalFileStore.write(&path, b"data");

        assert!(matches!(result, Err(ApplicationError::Io(_))));
        assert!(!path.exists());
    }
}

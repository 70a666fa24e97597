use std::path::{Path, PathBuf};

use crate::DomainError;

pub const SOURCE_EXTENSION: &str = "heic";
pub const TARGET_EXTENSION: &str = "png";

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// A file picked up by the directory scan.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InputFile {
    path: PathBuf,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.file_name().is_none() {
            return Err(DomainError::MissingFileName(path.display().to_string()));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Same directory and stem, with `extension` in place of the original one.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.path.with_extension(extension)
    }
}

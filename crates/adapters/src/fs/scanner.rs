use std::path::Path;

use heic2png_application::{ApplicationError, DirectoryScanner};
use heic2png_domain::{has_extension, InputFile};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Lists the top level of a directory only; subdirectories are not entered.
#[derive(Debug, Default)]
pub struct WalkdirScanner;

impl DirectoryScanner for WalkdirScanner {
    fn scan(
        &self,
        directory: &Path,
        extension: &str,
    ) -> Result<Vec<InputFile>, ApplicationError> {
        if !directory.is_dir() {
            return Err(ApplicationError::DirectoryNotFound(directory.to_path_buf()));
        }

        let walker = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut inputs = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(directory = %directory.display(), %error, "skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            if !has_extension(path, extension) {
                continue;
            }
            if !entry.file_type().is_file() {
                debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }

            inputs.push(InputFile::new(path)?);
        }

        Ok(inputs)
    }
}

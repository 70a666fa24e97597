use std::path::Path;

use heic2png_domain::{BatchReport, ConversionOutcome, InputFile, PixelImage};

use crate::ApplicationError;

pub trait DirectoryScanner {
    /// Lists files directly inside `directory` whose extension matches,
    /// ordered by file name.
    fn scan(&self, directory: &Path, extension: &str)
        -> Result<Vec<InputFile>, ApplicationError>;
}

pub trait FileStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>, ApplicationError>;

    /// Replaces whatever is at `path`. A failed write leaves no file behind.
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ApplicationError>;
}

pub trait ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelImage, ApplicationError>;
}

pub trait ImageEncoder {
    fn encode(&self, image: &PixelImage) -> Result<Vec<u8>, ApplicationError>;
}

/// Presentation side of the reporter. Called in run order, one file at a time.
pub trait ReportSink {
    fn run_started(&mut self, directory: &Path);

    fn directory_missing(&mut self, directory: &Path);

    fn no_matching_files(&mut self, directory: &Path);

    fn scan_finished(&mut self, directory: &Path, found: usize);

    fn conversion_started(&mut self, input: &InputFile, output: &Path);

    fn conversion_finished(&mut self, input: &InputFile, outcome: &ConversionOutcome);

    fn batch_finished(&mut self, report: &BatchReport);
}

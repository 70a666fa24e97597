use heic2png_domain::{ConversionOutcome, InputFile};
use tracing::{debug, info, warn};

use crate::{
    ApplicationError, ConvertDirectoryCommand, DirectoryScanner, FileStore, ImageDecoder,
    ImageEncoder, ReportSink, Reporter, RunOutcome,
};

pub struct ConversionService {
    scanner: Box<dyn DirectoryScanner>,
    files: Box<dyn FileStore>,
    decoder: Box<dyn ImageDecoder>,
    encoder: Box<dyn ImageEncoder>,
}

impl ConversionService {
    pub fn new(
        scanner: Box<dyn DirectoryScanner>,
        files: Box<dyn FileStore>,
        decoder: Box<dyn ImageDecoder>,
        encoder: Box<dyn ImageEncoder>,
    ) -> Self {
        Self {
            scanner,
            files,
            decoder,
            encoder,
        }
    }

    /// Converts every matching file in the directory, one at a time.
    ///
    /// Only a missing directory is returned as an error; per-file problems
    /// end up as failures in the report.
    pub fn convert_directory(
        &self,
        command: ConvertDirectoryCommand,
        sink: &mut dyn ReportSink,
    ) -> Result<RunOutcome, ApplicationError> {
        let directory = command.directory;
        info!(directory = %directory.display(), "starting conversion run");
        sink.run_started(&directory);

        let inputs = match self.scanner.scan(&directory, &command.source_extension) {
            Ok(inputs) => inputs,
            Err(error) => {
                if let ApplicationError::DirectoryNotFound(ref missing) = error {
                    sink.directory_missing(missing);
                }
                return Err(error);
            }
        };

        if inputs.is_empty() {
            info!(directory = %directory.display(), "no matching files");
            sink.no_matching_files(&directory);
            return Ok(RunOutcome::NoMatchingFiles { directory });
        }

        info!(count = inputs.len(), "found input files");
        let mut reporter = Reporter::new(&directory, inputs.len(), sink);
        for input in &inputs {
            let output = input.output_path(&command.target_extension);
            reporter.started(input, &output);
            let outcome = self.convert_file(input, &command.target_extension);
            debug!(
                input = %input.path().display(),
                success = outcome.is_success(),
                "attempt finished"
            );
            reporter.record(input, &outcome);
        }

        let report = reporter.finish();
        if !report.is_complete() {
            warn!(
                discovered = report.discovered,
                attempted = report.attempted(),
                "tally does not cover every discovered file"
            );
        }
        info!(
            discovered = report.discovered,
            succeeded = report.succeeded,
            failed = report.failed,
            "conversion run finished"
        );
        Ok(RunOutcome::Completed(report))
    }

    /// One attempt, no retries. Never returns an error.
    pub fn convert_file(&self, input: &InputFile, target_extension: &str) -> ConversionOutcome {
        let output = input.output_path(target_extension);
        debug!(input = %input.path().display(), output = %output.display(), "converting");

        let result = self
            .files
            .read(input.path())
            .and_then(|bytes| self.decoder.decode(&bytes))
            .and_then(|image| self.encoder.encode(&image))
            .and_then(|encoded| self.files.write(&output, &encoded));

        match result {
            Ok(()) => ConversionOutcome::Success { output },
            Err(error) => {
                warn!(input = %input.path().display(), %error, "conversion failed");
                ConversionOutcome::Failure {
                    reason: error.to_string(),
                }
            }
        }
    }
}

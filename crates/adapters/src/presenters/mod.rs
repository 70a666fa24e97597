use std::fmt;
use std::io::Write;
use std::path::Path;

use heic2png_application::ReportSink;
use heic2png_domain::{BatchReport, ConversionOutcome, InputFile};

const RULE: &str = "--------------------------------------------------";

/// Writes the human-facing progress report, one line per event.
pub struct ConsoleReportSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReportSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(error) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            tracing::warn!(%error, "failed to write report line");
        }
    }
}

impl<W: Write> ReportSink for ConsoleReportSink<W> {
    fn run_started(&mut self, directory: &Path) {
        self.line(format_args!("Converting folder: {}", directory.display()));
        self.line(format_args!(""));
    }

    fn directory_missing(&mut self, directory: &Path) {
        self.line(format_args!(
            "Error: folder does not exist: {}",
            directory.display()
        ));
    }

    fn no_matching_files(&mut self, directory: &Path) {
        self.line(format_args!("No HEIC files found in {}", directory.display()));
    }

    fn scan_finished(&mut self, _directory: &Path, found: usize) {
        self.line(format_args!("Found {found} HEIC file(s)"));
        self.line(format_args!("{RULE}"));
    }

    fn conversion_started(&mut self, input: &InputFile, output: &Path) {
        let output_name = output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.line(format_args!(
            "Converting: {} -> {}",
            input.file_name(),
            output_name
        ));
    }

    fn conversion_finished(&mut self, _input: &InputFile, outcome: &ConversionOutcome) {
        match outcome {
            ConversionOutcome::Success { .. } => self.line(format_args!("  ✓ success")),
            ConversionOutcome::Failure { reason } => {
                self.line(format_args!("  ✗ failed: {reason}"))
            }
        }
    }

    fn batch_finished(&mut self, report: &BatchReport) {
        self.line(format_args!("{RULE}"));
        self.line(format_args!("Conversion finished:"));
        self.line(format_args!("  succeeded: {}", report.succeeded));
        self.line(format_args!("  failed: {}", report.failed));
        if let Some(location) = report.output_location() {
            self.line(format_args!(""));
            self.line(format_args!("PNG files saved in: {}", location.display()));
        }
    }
}

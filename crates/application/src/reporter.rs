use std::path::Path;

use heic2png_domain::{BatchReport, ConversionOutcome, InputFile};

use crate::ReportSink;

/// Owns the tally for one run and forwards every event to the sink as it
/// happens.
pub struct Reporter<'a> {
    report: BatchReport,
    sink: &'a mut dyn ReportSink,
}

impl<'a> Reporter<'a> {
    pub fn new(output_dir: &Path, discovered: usize, sink: &'a mut dyn ReportSink) -> Self {
        sink.scan_finished(output_dir, discovered);
        Self {
            report: BatchReport::new(output_dir, discovered),
            sink,
        }
    }

    pub fn started(&mut self, input: &InputFile, output: &Path) {
        self.sink.conversion_started(input, output);
    }

    pub fn record(&mut self, input: &InputFile, outcome: &ConversionOutcome) {
        self.report.record(outcome);
        self.sink.conversion_finished(input, outcome);
    }

    pub fn finish(self) -> BatchReport {
        self.sink.batch_finished(&self.report);
        self.report
    }
}

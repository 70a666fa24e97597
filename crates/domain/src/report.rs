use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Success { output: PathBuf },
    Failure { reason: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Running tally for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub discovered: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn new(output_dir: impl Into<PathBuf>, discovered: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            discovered,
            succeeded: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, outcome: &ConversionOutcome) {
        match outcome {
            ConversionOutcome::Success { .. } => self.succeeded += 1,
            ConversionOutcome::Failure { .. } => self.failed += 1,
        }
    }

    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.attempted() == self.discovered
    }

    /// Where the outputs landed, if anything was written.
    pub fn output_location(&self) -> Option<&Path> {
        (self.succeeded > 0).then_some(self.output_dir.as_path())
    }
}

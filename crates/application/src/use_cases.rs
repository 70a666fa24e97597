use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConvertDirectoryCommand {
    pub directory: PathBuf,
    pub source_extension: String,
    pub target_extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoMatchingFiles { directory: PathBuf },
    Completed(heic2png_domain::BatchReport),
}

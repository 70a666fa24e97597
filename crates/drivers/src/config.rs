use std::path::{Path, PathBuf};

use heic2png_application::ConvertDirectoryCommand;
use heic2png_domain::{SOURCE_EXTENSION, TARGET_EXTENSION};

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target_dir: PathBuf,
    pub source_extension: String,
    pub target_extension: String,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_dir: executable_dir(),
            source_extension: SOURCE_EXTENSION.to_string(),
            target_extension: TARGET_EXTENSION.to_string(),
            log_filter: log_filter_for(0).to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            target_dir: cli.directory.clone().unwrap_or(defaults.target_dir),
            log_filter: log_filter_for(cli.verbose).to_string(),
            ..defaults
        }
    }

    pub fn command(&self) -> ConvertDirectoryCommand {
        ConvertDirectoryCommand {
            directory: self.target_dir.clone(),
            source_extension: self.source_extension.clone(),
            target_extension: self.target_extension.clone(),
        }
    }
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn log_filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

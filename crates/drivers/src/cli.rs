use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "heic2png",
    version,
    about = "Convert every HEIC image in a folder to PNG",
    long_about = "Converts each *.heic file found directly inside DIRECTORY into a PNG \
                  written next to it. Existing PNG files with the same name are overwritten."
)]
pub struct Cli {
    /// Folder to convert (defaults to the folder holding this executable)
    pub directory: Option<PathBuf>,
    /// Log more to stderr (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

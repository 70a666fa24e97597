mod error;
mod file;
mod image;
mod report;

pub use error::DomainError;
pub use file::{has_extension, InputFile, SOURCE_EXTENSION, TARGET_EXTENSION};
pub use image::{PixelImage, PixelLayout};
pub use report::{BatchReport, ConversionOutcome};

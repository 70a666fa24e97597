mod error;
mod ports;
mod reporter;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{DirectoryScanner, FileStore, ImageDecoder, ImageEncoder, ReportSink};
pub use reporter::Reporter;
pub use service::ConversionService;
pub use use_cases::{ConvertDirectoryCommand, RunOutcome};

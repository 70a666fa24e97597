pub mod codec;
pub mod fs;
pub mod presenters;

pub use codec::{install_decoder, ImageCratePngEncoder, INSTALL_GUIDANCE};
#[cfg(feature = "libheif")]
pub use codec::LibheifDecoder;
pub use fs::{LocalFileStore, WalkdirScanner};
pub use presenters::ConsoleReportSink;

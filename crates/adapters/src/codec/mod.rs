#[cfg(feature = "libheif")]
mod heif;
mod png;

use heic2png_application::{ApplicationError, ImageDecoder};

#[cfg(feature = "libheif")]
pub use heif::LibheifDecoder;
pub use png::ImageCratePngEncoder;

pub const INSTALL_GUIDANCE: &str = "HEIC decoding needs libheif.
Install the library first, for example:
  apt install libheif-dev      (Debian/Ubuntu)
  brew install libheif         (macOS)
then rebuild with the codec enabled:
  cargo install --path crates/drivers --features libheif";

/// Sets up the HEIC decoder, or explains how to get one.
pub fn install_decoder() -> Result<Box<dyn ImageDecoder>, ApplicationError> {
    #[cfg(feature = "libheif")]
    {
        Ok(Box::new(LibheifDecoder::new()))
    }

    #[cfg(not(feature = "libheif"))]
    {
        Err(ApplicationError::CodecUnavailable(
            INSTALL_GUIDANCE.to_string(),
        ))
    }
}

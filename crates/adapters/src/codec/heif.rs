use heic2png_application::{ApplicationError, ImageDecoder};
use heic2png_domain::{PixelImage, PixelLayout};
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

/// Decodes the primary image of a HEIC/HEIF container through libheif.
pub struct LibheifDecoder {
    lib: LibHeif,
}

impl LibheifDecoder {
    pub fn new() -> Self {
        Self {
            lib: LibHeif::new(),
        }
    }
}

impl Default for LibheifDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDecoder for LibheifDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelImage, ApplicationError> {
        let context = HeifContext::read_from_bytes(bytes)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        let handle = context
            .primary_image_handle()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        let (chroma, layout) = if handle.has_alpha_channel() {
            (RgbChroma::Rgba, PixelLayout::Rgba8)
        } else {
            (RgbChroma::Rgb, PixelLayout::Rgb8)
        };

        let image = self
            .lib
            .decode(&handle, ColorSpace::Rgb(chroma), None)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        let planes = image.planes();
        let plane = planes.interleaved.ok_or_else(|| {
            ApplicationError::Decode("libheif returned no interleaved plane".to_string())
        })?;

        Ok(PixelImage::from_strided(
            plane.width,
            plane.height,
            layout,
            plane.stride,
            plane.data,
        )?)
    }
}

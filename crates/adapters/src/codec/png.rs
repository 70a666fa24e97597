use heic2png_application::{ApplicationError, ImageEncoder};
use heic2png_domain::{PixelImage, PixelLayout};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder as _};

#[derive(Debug, Default)]
pub struct ImageCratePngEncoder;

impl ImageEncoder for ImageCratePngEncoder {
    fn encode(&self, image: &PixelImage) -> Result<Vec<u8>, ApplicationError> {
        let color_type = match image.layout() {
            PixelLayout::Rgb8 => ExtendedColorType::Rgb8,
            PixelLayout::Rgba8 => ExtendedColorType::Rgba8,
        };

        let mut encoded = Vec::new();
        PngEncoder::new(&mut encoded)
            .write_image(image.data(), image.width(), image.height(), color_type)
            .map_err(|error| ApplicationError::Encode(error.to_string()))?;
        Ok(encoded)
    }
}

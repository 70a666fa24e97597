use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Rgb8,
    Rgba8,
}

impl PixelLayout {
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// A decoded raster, tightly packed in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl PixelImage {
    pub fn new(
        width: u32,
        height: u32,
        layout: PixelLayout,
        data: Vec<u8>,
    ) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidDimensions { width, height });
        }

        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(DomainError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Copies `height` rows of `width` pixels out of a buffer whose rows are
    /// `stride` bytes apart, dropping any row padding.
    pub fn from_strided(
        width: u32,
        height: u32,
        layout: PixelLayout,
        stride: usize,
        data: &[u8],
    ) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidDimensions { width, height });
        }

        let row_len = width as usize * layout.channels();
        let rows = height as usize;
        let needed = stride * (rows - 1) + row_len;
        if stride < row_len || data.len() < needed {
            return Err(DomainError::BufferSizeMismatch {
                expected: needed.max(row_len * rows),
                actual: data.len(),
            });
        }

        let mut packed = Vec::with_capacity(row_len * rows);
        for row in data.chunks(stride).take(rows) {
            packed.extend_from_slice(&row[..row_len]);
        }
        Self::new(width, height, layout, packed)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

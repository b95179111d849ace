//! Decoded raster data handed from the resolver to drawables and canvases.

use image::RgbaImage;

/// Fully decoded RGBA pixels. Never mutated after decoding.
#[derive(Clone, PartialEq)]
pub struct PixelData {
    raster: RgbaImage,
}

impl PixelData {
    /// Wrap an already decoded raster.
    #[must_use]
    pub fn new(raster: RgbaImage) -> Self {
        Self { raster }
    }

    /// Decode encoded image bytes (PNG, JPEG, ...) completely.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error if the bytes are not a complete, valid image.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self { raster: decoded.into_rgba8() })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Borrow the underlying raster.
    #[must_use]
    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }
}

impl std::fmt::Debug for PixelData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PixelData({}x{})", self.width(), self.height())
    }
}

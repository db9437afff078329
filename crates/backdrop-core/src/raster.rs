//! The raster image value type threaded through the pipeline.
//!
//! Every pipeline stage consumes and produces immutable `RasterImage` values;
//! only the compositor mutates a canvas, and it owns that canvas exclusively.
//! Rows are stored top-down (row 0 is the top edge), matching the `image`
//! crate's convention.

/// A decoded image with RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new RasterImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 4) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a fully transparent image of the given dimensions.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width * height * 4) as usize],
        }
    }

    /// Create a RasterImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage for codec and filter interop.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the RGBA channels of the pixel at (x, y).
    ///
    /// Callers must keep x < width and y < height.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Overwrite the pixel at (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Get the alpha channel of the pixel at (x, y).
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixels[((y * self.width + x) * 4 + 3) as usize]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_image_creation() {
        let pixels = vec![0u8; 100 * 50 * 4];
        let img = RasterImage::new(100, 50, pixels);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 20000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_raster_image_empty() {
        let img = RasterImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_transparent_is_all_zero() {
        let img = RasterImage::transparent(4, 3);
        assert_eq!(img.byte_size(), 4 * 3 * 4);
        assert!(img.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut img = RasterImage::transparent(10, 10);
        img.set_pixel(3, 7, [1, 2, 3, 200]);

        assert_eq!(img.pixel(3, 7), [1, 2, 3, 200]);
        assert_eq!(img.alpha(3, 7), 200);
        assert_eq!(img.pixel(7, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn test_rgba_image_roundtrip() {
        let mut img = RasterImage::transparent(5, 4);
        img.set_pixel(2, 1, [10, 20, 30, 255]);

        let rgba = img.to_rgba_image().expect("valid buffer");
        let back = RasterImage::from_rgba_image(rgba);
        assert_eq!(back, img);
    }
}

use image::ImageError;

/// 8-bit grayscale raster, the pixel layout the decoder consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct LumaRaster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl LumaRaster {
    /// Decodes encoded image bytes (any format `image` recognizes) and
    /// converts them to luma.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let luma = image::load_from_memory(bytes)?.to_luma8();
        let (width, height) = luma.dimensions();
        Ok(Self {
            width,
            height,
            pixels: luma.into_raw(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, Luma};
    use std::io::Cursor;

    fn encode(image: &GrayImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn should_decode_png_into_luma_pixels() {
        let image = GrayImage::from_pixel(4, 3, Luma([200]));

        let raster = LumaRaster::decode(&encode(&image, ImageFormat::Png)).unwrap();

        assert_eq!((raster.width, raster.height), (4, 3));
        assert_eq!(raster.pixels.len(), 12);
        assert!(raster.pixels.iter().all(|&p| p == 200));
    }

    #[test]
    fn should_decode_jpeg() {
        let image = GrayImage::from_pixel(16, 16, Luma([255]));

        let raster = LumaRaster::decode(&encode(&image, ImageFormat::Jpeg)).unwrap();

        assert_eq!((raster.width, raster.height), (16, 16));
        assert!(!raster.is_empty());
    }

    #[test]
    fn should_fail_on_bytes_that_are_not_an_image() {
        assert!(LumaRaster::decode(b"definitely not a png").is_err());
        assert!(LumaRaster::decode(&[]).is_err());
    }
}

use std::panic::{AssertUnwindSafe, catch_unwind};

use rxing::Exceptions;

use business::domain::scan::services::{BarcodeExtractorService, ExtractionFailure};
use business::domain::scan::value_objects::{Barcode, CapturedImage};

use crate::raster::LumaRaster;

/// Barcode extractor backed by rxing's multi-barcode reader.
///
/// The decoder is called once per image. When it reports several symbols the
/// first one wins; their order is whatever rxing returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct RxingBarcodeExtractor;

impl RxingBarcodeExtractor {
    pub fn new() -> Self {
        Self
    }

    fn decode_first(raster: LumaRaster) -> Result<String, ExtractionFailure> {
        let LumaRaster {
            width,
            height,
            pixels,
        } = raster;

        let decoded = catch_unwind(AssertUnwindSafe(move || {
            rxing::helpers::detect_multiple_in_luma(pixels, width, height)
        }))
        .map_err(|_| ExtractionFailure::DecoderFailed("decoder panicked".to_string()))?;

        let results = match decoded {
            Ok(results) => results,
            Err(Exceptions::NotFoundException(_)) => return Err(ExtractionFailure::NotFound),
            Err(err) => return Err(ExtractionFailure::DecoderFailed(err.to_string())),
        };

        results
            .into_iter()
            .next()
            .map(|result| result.getText().to_string())
            .ok_or(ExtractionFailure::NotFound)
    }
}

impl BarcodeExtractorService for RxingBarcodeExtractor {
    fn extract(&self, image: &CapturedImage) -> Result<Barcode, ExtractionFailure> {
        let raster = LumaRaster::decode(&image.bytes)
            .map_err(|err| ExtractionFailure::UnreadableImage(err.to_string()))?;

        if raster.is_empty() {
            return Err(ExtractionFailure::NotFound);
        }

        let text = Self::decode_first(raster)?;

        // An empty payload carries nothing to look up.
        Barcode::from_decoded(text).map_err(|_| ExtractionFailure::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, Luma, imageops};
    use rxing::{BarcodeFormat, MultiFormatWriter, Writer};
    use std::io::Cursor;

    const MARGIN: u32 = 24;

    fn symbol(contents: &str, format: BarcodeFormat, width: i32, height: i32) -> GrayImage {
        let matrix = MultiFormatWriter::default()
            .encode(contents, &format, width, height)
            .unwrap();
        let (w, h) = (matrix.getWidth(), matrix.getHeight());

        let mut canvas = GrayImage::from_pixel(w + 2 * MARGIN, h + 2 * MARGIN, Luma([255]));
        for y in 0..h {
            for x in 0..w {
                if matrix.get(x, y) {
                    canvas.put_pixel(x + MARGIN, y + MARGIN, Luma([0]));
                }
            }
        }
        canvas
    }

    fn png(image: &GrayImage) -> CapturedImage {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        CapturedImage::new(bytes.into_inner(), Some("capture.png".to_string()))
    }

    #[test]
    fn should_return_text_of_single_qr_code() {
        let image = png(&symbol("3017620422003", BarcodeFormat::QR_CODE, 200, 200));

        let barcode = RxingBarcodeExtractor::new().extract(&image).unwrap();

        assert_eq!(barcode.as_str(), "3017620422003");
    }

    #[test]
    fn should_return_text_of_single_ean13() {
        let image = png(&symbol("5901234123457", BarcodeFormat::EAN_13, 380, 120));

        let barcode = RxingBarcodeExtractor::new().extract(&image).unwrap();

        assert_eq!(barcode.as_str(), "5901234123457");
    }

    #[test]
    fn should_return_decoded_text_without_trimming() {
        let image = png(&symbol("  42 ", BarcodeFormat::QR_CODE, 200, 200));

        let barcode = RxingBarcodeExtractor::new().extract(&image).unwrap();

        assert_eq!(barcode.as_str(), "  42 ");
    }

    #[test]
    fn should_return_whitespace_only_payload_as_is() {
        let image = png(&symbol("   ", BarcodeFormat::QR_CODE, 200, 200));

        let barcode = RxingBarcodeExtractor::new().extract(&image).unwrap();

        assert_eq!(barcode.as_str(), "   ");
    }

    #[test]
    fn should_report_not_found_for_blank_image() {
        let image = png(&GrayImage::from_pixel(120, 120, Luma([255])));

        let result = RxingBarcodeExtractor::new().extract(&image);

        assert_eq!(result, Err(ExtractionFailure::NotFound));
    }

    #[test]
    fn should_report_unreadable_image_for_corrupt_bytes() {
        let image = CapturedImage::new(b"\x89PNG truncated".to_vec(), Some("x.png".to_string()));

        let result = RxingBarcodeExtractor::new().extract(&image);

        assert!(matches!(result, Err(ExtractionFailure::UnreadableImage(_))));
    }

    #[test]
    fn should_return_one_of_several_barcodes_consistently() {
        let left = symbol("4006381333931", BarcodeFormat::QR_CODE, 200, 200);
        let right = symbol("8410000810004", BarcodeFormat::QR_CODE, 200, 200);
        let mut canvas = GrayImage::from_pixel(
            left.width() + right.width(),
            left.height().max(right.height()),
            Luma([255]),
        );
        imageops::overlay(&mut canvas, &left, 0, 0);
        imageops::overlay(&mut canvas, &right, i64::from(left.width()), 0);
        let image = png(&canvas);
        let extractor = RxingBarcodeExtractor::new();

        let first = extractor.extract(&image).unwrap();
        let second = extractor.extract(&image).unwrap();

        assert!(["4006381333931", "8410000810004"].contains(&first.as_str()));
        assert_eq!(first, second);
    }
}

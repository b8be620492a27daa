use crate::domain::scan::errors::ScanError;
use crate::domain::scan::value_objects::{Barcode, CapturedImage, ImageSource};

/// Raw user input for one scan, per input mode.
#[derive(Debug, Clone, PartialEq)]
pub enum BarcodeInput {
    Manual(String),
    Image {
        source: ImageSource,
        image: CapturedImage,
    },
}

pub struct ResolveBarcodeParams {
    pub input: BarcodeInput,
}

/// Turns user input into a barcode, decoding images when needed.
///
/// Synchronous on purpose: image decoding is CPU-bound.
pub trait ResolveBarcodeUseCase: Send + Sync {
    fn execute(&self, params: ResolveBarcodeParams) -> Result<Barcode, ScanError>;
}

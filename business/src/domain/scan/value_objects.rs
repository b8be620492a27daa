use super::errors::ScanError;

/// Decoded or typed barcode payload.
///
/// Never empty. No check-digit or symbology validation is performed, any
/// non-empty text is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode(String);

impl Barcode {
    /// Creates a barcode from raw text, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ScanError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ScanError::MissingBarcodeInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Creates a barcode from text read off an image, exactly as decoded.
    /// Only an empty payload is rejected.
    pub fn from_decoded(text: impl Into<String>) -> Result<Self, ScanError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ScanError::MissingBarcodeInput);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the user supplies the barcode for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Manual,
    Camera,
    Upload,
}

impl InputMode {
    /// Image source backing this mode, if the mode works on images.
    pub fn image_source(&self) -> Option<ImageSource> {
        match self {
            InputMode::Manual => None,
            InputMode::Camera => Some(ImageSource::Camera),
            InputMode::Upload => Some(ImageSource::Upload),
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Manual => write!(f, "manual"),
            InputMode::Camera => write!(f, "camera"),
            InputMode::Upload => write!(f, "upload"),
        }
    }
}

impl std::str::FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(InputMode::Manual),
            "camera" => Ok(InputMode::Camera),
            "upload" => Ok(InputMode::Upload),
            _ => Err(format!("Invalid input mode: {}", s)),
        }
    }
}

/// Where an image came from. Uploads are restricted to a few file types,
/// camera captures are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Upload,
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Camera => write!(f, "camera"),
            ImageSource::Upload => write!(f, "upload"),
        }
    }
}

/// File extensions accepted for uploaded images.
pub const UPLOAD_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Encoded image bytes as received from the user, before decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
}

impl CapturedImage {
    pub fn new(bytes: Vec<u8>, file_name: Option<String>) -> Self {
        Self { bytes, file_name }
    }

    /// Lower-cased file name extension, if any.
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name.as_deref()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Whether the file name carries one of the accepted upload extensions.
    pub fn has_upload_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| UPLOAD_EXTENSIONS.contains(&ext.as_str()))
    }
}

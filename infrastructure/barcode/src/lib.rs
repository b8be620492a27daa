pub mod extractor;
pub mod raster;

/// Conversion image → grille de blocs pour blockmosaic.
///
/// Contrast/brightness enhancement, block averaging and nearest-color
/// palette matching.

pub mod adjust;
pub mod average;
pub mod matcher;
pub mod quantizer;

pub use quantizer::quantize;

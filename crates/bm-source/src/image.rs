use std::path::Path;

use bm_core::error::CoreError;
use bm_core::frame::FrameBuffer;

/// Charge une image depuis le disque en RGB (alpha ignoré).
///
/// Tout format décodable par la crate `image` (PNG, JPEG, BMP, GIF) est accepté.
///
/// # Errors
/// Returns `MissingResource` if the path is unreadable or the format cannot
/// be decoded.
///
/// # Example
/// ```no_run
/// use bm_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("logo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, CoreError> {
    let img = image::open(path).map_err(|e| CoreError::missing(path.display(), e))?;
    let frame = frame_from_dynamic(&img)?;
    log::info!(
        "Image chargée : {} ({}×{})",
        path.display(),
        frame.width,
        frame.height
    );
    Ok(frame)
}

/// Décode une image déjà en mémoire (bytes d'un fichier PNG, JPEG…).
///
/// # Errors
/// Returns `MissingResource` if the bytes are not a supported image.
pub fn load_image_from_memory(bytes: &[u8]) -> Result<FrameBuffer, CoreError> {
    let img = image::load_from_memory(bytes).map_err(|e| CoreError::missing("<memory>", e))?;
    frame_from_dynamic(&img)
}

fn frame_from_dynamic(img: &image::DynamicImage) -> Result<FrameBuffer, CoreError> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    FrameBuffer::from_raw(width, height, rgb.into_raw())
}

use bm_core::frame::FrameBuffer;

/// Mélange chaque canal avec une valeur dégénérée : `d + factor * (v - d)`.
///
/// Calcul en f32, borné à [0, 255] puis tronqué. `factor = 1.0` est exact.
#[inline(always)]
fn blend(v: u8, degenerate: f32, factor: f32) -> u8 {
    let out = degenerate + factor * (f32::from(v) - degenerate);
    out.clamp(0.0, 255.0) as u8
}

fn blend_all(frame: &mut FrameBuffer, degenerate: f32, factor: f32) {
    for v in &mut frame.data {
        *v = blend(*v, degenerate, factor);
    }
}

/// Adjust contrast around the mean grey level of the frame.
///
/// `ratio = 1.0` is the identity; `0.0` collapses the frame to flat grey;
/// negative values invert around the mean. No validation.
///
/// # Example
/// ```
/// use bm_core::frame::FrameBuffer;
/// use bm_core::color::Rgb;
/// use bm_quantize::adjust::enhance_contrast;
/// let mut fb = FrameBuffer::filled(2, 2, Rgb::new(10, 200, 30));
/// let before = fb.clone();
/// enhance_contrast(&mut fb, 1.0);
/// assert_eq!(fb, before);
/// ```
pub fn enhance_contrast(frame: &mut FrameBuffer, ratio: f32) {
    let mean = f32::from(frame.mean_grey());
    blend_all(frame, mean, ratio);
}

/// Scale every channel by `factor` (degenerate image is black).
///
/// # Example
/// ```
/// use bm_core::frame::FrameBuffer;
/// use bm_core::color::Rgb;
/// use bm_quantize::adjust::enhance_brightness;
/// let mut fb = FrameBuffer::filled(1, 1, Rgb::new(100, 200, 50));
/// enhance_brightness(&mut fb, 1.5);
/// assert_eq!(fb.pixel(0, 0), Rgb::new(150, 255, 75));
/// ```
pub fn enhance_brightness(frame: &mut FrameBuffer, factor: f32) {
    blend_all(frame, 0.0, factor);
}

/// Applique contraste puis luminosité à une copie de la frame.
///
/// L'ordre compte : le contraste est calculé sur l'image d'origine, la
/// luminosité sur le résultat. `brightness_offset` est appliqué comme
/// facteur `1 + brightness_offset`.
#[must_use]
pub fn adjust_image(frame: &FrameBuffer, contrast_ratio: f32, brightness_offset: f32) -> FrameBuffer {
    let mut out = frame.clone();
    enhance_contrast(&mut out, contrast_ratio);
    enhance_brightness(&mut out, 1.0 + brightness_offset);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bm_core::color::Rgb;

    fn gradient() -> FrameBuffer {
        let mut fb = FrameBuffer::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                let v = (x * 16 + y) as u8;
                fb.set_pixel(x, y, Rgb::new(v, 255 - v, v / 2));
            }
        }
        fb
    }

    #[test]
    fn identity_adjustment_leaves_frame_unchanged() {
        let fb = gradient();
        assert_eq!(adjust_image(&fb, 1.0, 0.0), fb);
    }

    #[test]
    fn zero_contrast_collapses_to_mean_grey() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(0, 0, Rgb::new(255, 255, 255));
        let mean = fb.mean_grey();
        enhance_contrast(&mut fb, 0.0);
        assert!(fb.pixels().all(|c| c == Rgb::new(mean, mean, mean)));
    }

    #[test]
    fn contrast_stretches_away_from_mean() {
        // Mean grey of a 50/50 black/white frame is 128.
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(0, 0, Rgb::new(100, 100, 100));
        fb.set_pixel(1, 0, Rgb::new(156, 156, 156));
        assert_eq!(fb.mean_grey(), 128);
        enhance_contrast(&mut fb, 2.0);
        assert_eq!(fb.pixel(0, 0), Rgb::new(72, 72, 72));
        assert_eq!(fb.pixel(1, 0), Rgb::new(184, 184, 184));
    }

    #[test]
    fn negative_contrast_inverts_around_mean() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(0, 0, Rgb::new(100, 100, 100));
        fb.set_pixel(1, 0, Rgb::new(156, 156, 156));
        enhance_contrast(&mut fb, -1.0);
        assert_eq!(fb.pixel(0, 0), Rgb::new(156, 156, 156));
        assert_eq!(fb.pixel(1, 0), Rgb::new(100, 100, 100));
    }

    #[test]
    fn brightness_offset_minus_one_is_black() {
        let out = adjust_image(&gradient(), 1.0, -1.0);
        assert!(out.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn brightness_truncates_and_saturates() {
        let mut fb = FrameBuffer::filled(1, 1, Rgb::new(3, 250, 1));
        enhance_brightness(&mut fb, 1.5);
        // 4.5 → 4, 375 → 255, 1.5 → 1
        assert_eq!(fb.pixel(0, 0), Rgb::new(4, 255, 1));
    }

    #[test]
    fn contrast_is_applied_before_brightness() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(0, 0, Rgb::new(100, 100, 100));
        fb.set_pixel(1, 0, Rgb::new(156, 156, 156));
        let out = adjust_image(&fb, 2.0, 0.5);
        // contrast: 72/184, then ×1.5: 108/255 (276 saturates)
        assert_eq!(out.pixel(0, 0), Rgb::new(108, 108, 108));
        assert_eq!(out.pixel(1, 0), Rgb::new(255, 255, 255));
    }
}

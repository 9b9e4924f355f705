use crate::color::Rgb;
use crate::error::CoreError;

/// Buffer de pixels RGB immuable pendant une conversion.
///
/// Stocke les pixels en RGB row-major, 3 bytes par pixel. Les décodeurs
/// ignorent le canal alpha.
///
/// # Example
/// ```
/// use bm_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Pixels RGB, row-major, 3 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use bm_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 3);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Wrap an existing RGB buffer.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `data` is not exactly `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(CoreError::InvalidInput(format!(
                "RGB buffer of {} bytes does not match {width}×{height}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Buffer rempli d'une seule couleur.
    ///
    /// # Example
    /// ```
    /// use bm_core::frame::FrameBuffer;
    /// use bm_core::color::Rgb;
    /// let fb = FrameBuffer::filled(4, 2, Rgb::new(50, 100, 150));
    /// assert_eq!(fb.pixel(3, 1), Rgb::new(50, 100, 150));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let mut fb = Self::new(width, height);
        for px in fb.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
        fb
    }

    /// Accès au pixel (x, y).
    ///
    /// # Example
    /// ```
    /// use bm_core::frame::FrameBuffer;
    /// use bm_core::color::Rgb;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), Rgb::new(0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Écrit le pixel (x, y).
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }

    /// Mean grey level, rounded half-up. 0 for an empty frame.
    ///
    /// # Example
    /// ```
    /// use bm_core::frame::FrameBuffer;
    /// use bm_core::color::Rgb;
    /// let fb = FrameBuffer::filled(3, 3, Rgb::new(255, 255, 255));
    /// assert_eq!(fb.mean_grey(), 255);
    /// ```
    #[must_use]
    pub fn mean_grey(&self) -> u8 {
        let count = u64::from(self.width) * u64::from(self.height);
        if count == 0 {
            return 0;
        }
        let sum: u64 = self.pixels().map(|c| u64::from(c.grey())).sum();
        ((2 * sum + count) / (2 * count)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_short_buffer() {
        let err = FrameBuffer::from_raw(2, 2, vec![0; 11]);
        assert!(matches!(err, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn set_then_get_pixel() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set_pixel(2, 1, Rgb::new(1, 2, 3));
        assert_eq!(fb.pixel(2, 1), Rgb::new(1, 2, 3));
        assert_eq!(&fb.data[15..18], &[1, 2, 3]);
    }

    #[test]
    fn mean_grey_rounds_half_up() {
        // Greys 0 and 1 average to 0.5, rounded up to 1.
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(1, 0, Rgb::new(1, 1, 1));
        assert_eq!(fb.pixel(1, 0).grey(), 1);
        assert_eq!(fb.mean_grey(), 1);
    }

    #[test]
    fn mean_grey_of_empty_frame_is_zero() {
        assert_eq!(FrameBuffer::new(0, 5).mean_grey(), 0);
    }
}

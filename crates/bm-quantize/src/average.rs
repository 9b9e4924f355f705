use bm_core::color::Rgb;
use bm_core::error::CoreError;
use bm_core::frame::FrameBuffer;

/// Nombre de blocs entiers sur chaque axe : `(width / bs, height / bs)`.
///
/// Les pixels restants en bord droit/bas sont ignorés.
///
/// # Example
/// ```
/// use bm_quantize::average::block_counts;
/// assert_eq!(block_counts(65, 31, 8), (8, 3));
/// assert_eq!(block_counts(4, 4, 8), (0, 0));
/// ```
#[inline]
#[must_use]
pub fn block_counts(width: u32, height: u32, block_size: u32) -> (u32, u32) {
    if block_size == 0 {
        return (0, 0);
    }
    (width / block_size, height / block_size)
}

/// Moyenne RGB d'un bloc `block_size × block_size` dont le coin haut-gauche
/// est le pixel `(x, y)`.
///
/// Each channel is summed independently then divided by `block_size²` with
/// truncating integer division.
///
/// # Example
/// ```
/// use bm_core::frame::FrameBuffer;
/// use bm_core::color::Rgb;
/// use bm_quantize::average::average_block;
/// let fb = FrameBuffer::filled(4, 4, Rgb::new(50, 100, 150));
/// assert_eq!(average_block(&fb, 2, 2, 2), Rgb::new(50, 100, 150));
/// ```
#[must_use]
pub fn average_block(frame: &FrameBuffer, x: u32, y: u32, block_size: u32) -> Rgb {
    debug_assert!(block_size > 0);
    debug_assert!(x + block_size <= frame.width && y + block_size <= frame.height);
    let mut sum = [0u64; 3];
    for py in y..y + block_size {
        for px in x..x + block_size {
            let c = frame.pixel(px, py);
            sum[0] += u64::from(c.r);
            sum[1] += u64::from(c.g);
            sum[2] += u64::from(c.b);
        }
    }
    let count = u64::from(block_size) * u64::from(block_size);
    // Each quotient is a mean of u8 values, so it fits in u8.
    Rgb::new(
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    )
}

/// Average every whole block of the frame, row-major.
///
/// # Errors
/// Returns `InvalidInput` if `block_size` is zero.
///
/// # Example
/// ```
/// use bm_core::frame::FrameBuffer;
/// use bm_quantize::average::average_blocks;
/// let fb = FrameBuffer::new(10, 7);
/// assert_eq!(average_blocks(&fb, 3).unwrap().len(), 3 * 2);
/// ```
pub fn average_blocks(frame: &FrameBuffer, block_size: u32) -> Result<Vec<Rgb>, CoreError> {
    if block_size == 0 {
        return Err(CoreError::InvalidInput(
            "block_size must be a positive integer".into(),
        ));
    }
    let (cols, rows) = block_counts(frame.width, frame.height, block_size);
    let mut out = Vec::with_capacity(cols as usize * rows as usize);
    for row in 0..rows {
        for col in 0..cols {
            out.push(average_block(
                frame,
                col * block_size,
                row * block_size,
                block_size,
            ));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_for_exact_multiples() {
        for bs in [1, 2, 4, 8, 16] {
            let (cx, cy) = block_counts(64, 32, bs);
            assert_eq!((cx, cy), (64 / bs, 32 / bs));
        }
    }

    #[test]
    fn uniform_frame_averages_exactly() {
        let fb = FrameBuffer::filled(12, 6, Rgb::new(50, 100, 150));
        for bs in [1, 2, 3, 6] {
            let blocks = average_blocks(&fb, bs).unwrap();
            assert_eq!(blocks.len(), (12 / bs * (6 / bs)) as usize);
            assert!(blocks.iter().all(|&c| c == Rgb::new(50, 100, 150)));
        }
    }

    #[test]
    fn division_truncates_rather_than_rounds() {
        // Block of 2×2: three pixels at 0, one at 3 → 3/4 = 0.75 → 0.
        // Another: three at 255, one at 254 → 1019/4 = 254.75 → 254.
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(1, 1, Rgb::new(3, 254, 3));
        fb.set_pixel(0, 0, Rgb::new(0, 255, 0));
        fb.set_pixel(1, 0, Rgb::new(0, 255, 0));
        fb.set_pixel(0, 1, Rgb::new(0, 255, 0));
        assert_eq!(average_block(&fb, 0, 0, 2), Rgb::new(0, 254, 0));
    }

    #[test]
    fn blocks_are_row_major_from_top_left() {
        let mut fb = FrameBuffer::new(4, 4);
        // Top-right block red, bottom-left block blue.
        for (x, y) in [(2, 0), (3, 0), (2, 1), (3, 1)] {
            fb.set_pixel(x, y, Rgb::new(200, 0, 0));
        }
        for (x, y) in [(0, 2), (1, 2), (0, 3), (1, 3)] {
            fb.set_pixel(x, y, Rgb::new(0, 0, 200));
        }
        let blocks = average_blocks(&fb, 2).unwrap();
        assert_eq!(
            blocks,
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(200, 0, 0),
                Rgb::new(0, 0, 200),
                Rgb::new(0, 0, 0),
            ]
        );
    }

    #[test]
    fn remainder_pixels_are_dropped() {
        // 5×3 frame, bs=2: the last column and last row never reach a block.
        let mut fb = FrameBuffer::new(5, 3);
        for y in 0..3 {
            fb.set_pixel(4, y, Rgb::new(255, 255, 255));
        }
        for x in 0..5 {
            fb.set_pixel(x, 2, Rgb::new(255, 255, 255));
        }
        let blocks = average_blocks(&fb, 2).unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|&c| c == Rgb::new(0, 0, 0)));
    }

    #[test]
    fn oversized_block_gives_no_blocks() {
        let fb = FrameBuffer::new(4, 10);
        assert!(average_blocks(&fb, 5).unwrap().is_empty());
    }

    #[test]
    fn zero_block_size_is_invalid() {
        let fb = FrameBuffer::new(4, 4);
        assert!(matches!(
            average_blocks(&fb, 0),
            Err(CoreError::InvalidInput(_))
        ));
    }
}

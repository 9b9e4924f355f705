use bm_core::error::CoreError;
use bm_core::frame::FrameBuffer;
use bm_core::grid::BlockGrid;
use bm_core::palette::Palette;

use crate::adjust::adjust_image;
use crate::average::{average_blocks, block_counts};
use crate::matcher::nearest;

/// Convertit une image en grille d'identifiants de palette.
///
/// 1. contraste puis luminosité sur toute l'image ;
/// 2. découpage en blocs `block_size × block_size` (reste ignoré) ;
/// 3. moyenne tronquée de chaque bloc ;
/// 4. entrée de palette la plus proche pour chaque moyenne.
///
/// La grille retournée a `width = block_count_x` et `height = block_count_y`.
/// Si `block_size` dépasse une dimension de l'image, la grille est vide sur
/// cet axe.
///
/// # Errors
/// Returns `InvalidInput` if `block_size` is zero.
///
/// # Example
/// ```
/// use bm_core::frame::FrameBuffer;
/// use bm_core::color::Rgb;
/// use bm_core::palette::{Palette, PaletteEntry};
/// use bm_quantize::quantize;
///
/// let frame = FrameBuffer::filled(32, 16, Rgb::new(240, 240, 240));
/// let palette = Palette::new(vec![
///     PaletteEntry::new("black_wool", 20, 21, 25),
///     PaletteEntry::new("white_wool", 233, 236, 236),
/// ]);
/// let grid = quantize(&frame, 8, 1.0, 0.0, &palette).unwrap();
/// assert_eq!((grid.width, grid.height), (4, 2));
/// assert!(grid.cells.iter().all(|id| id == "white_wool"));
/// ```
pub fn quantize(
    frame: &FrameBuffer,
    block_size: u32,
    contrast_ratio: f32,
    brightness_offset: f32,
    palette: &Palette,
) -> Result<BlockGrid, CoreError> {
    if block_size == 0 {
        return Err(CoreError::InvalidInput(
            "block_size must be a positive integer".into(),
        ));
    }

    let adjusted = adjust_image(frame, contrast_ratio, brightness_offset);
    log::debug!(
        "Image ajustée : contraste {contrast_ratio}, luminosité {brightness_offset}"
    );

    let (block_count_x, block_count_y) = block_counts(adjusted.width, adjusted.height, block_size);
    log::info!("Grille {block_count_x}×{block_count_y} (blocs de {block_size}px)");
    if palette.is_empty() {
        log::warn!("Palette vide : toutes les cellules seront \"none\"");
    }

    let cells = average_blocks(&adjusted, block_size)?
        .into_iter()
        .map(|avg| nearest(palette, avg).to_owned())
        .collect();

    BlockGrid::new(block_count_x, block_count_y, cells)
}

use std::time::Duration;

use anyhow::{Context, Result};
use bm_core::config::ConfigSet;
use bm_core::error::CoreError;
use bm_core::grid::BlockGrid;
use bm_core::palette::load_palette;
use bm_core::placement::BlockPos;
use bm_core::traits::PlacementSink;
use bm_place::project;
use bm_quantize::quantize;
use bm_source::image::load_image;

use crate::draw::draw;

/// Charge l'image et la palette d'un config set puis les quantifie.
///
/// # Errors
/// Returns an error if the image or the color map cannot be loaded, or if
/// the block size is invalid.
pub fn convert_to_block_ids(set: &ConfigSet) -> Result<BlockGrid> {
    let palette = load_palette(&set.color_map.color_map_path)?;
    let frame = load_image(&set.image.img_path)?;
    let grid = quantize(
        &frame,
        set.size_ratio.block_size,
        set.image_adjust.contrast_ratio,
        set.image_adjust.brightness_offset,
        &palette,
    )?;
    Ok(grid)
}

/// Exécute un config set complet : validation, conversion, projection, placement.
///
/// Les valeurs sont validées avant toute lecture de fichier, et l'emprise
/// de la grille (décalée de `world_origin`) avant tout placement. Retourne
/// le nombre de blocs placés.
///
/// # Errors
/// Returns the first failure of any stage; nothing is retried.
pub fn run_config_set(
    set: &ConfigSet,
    world_origin: BlockPos,
    sink: &mut dyn PlacementSink,
    pacing: Duration,
) -> Result<usize> {
    set.validate()?;
    let orientation = set.orientation()?;

    let grid = convert_to_block_ids(set)
        .with_context(|| format!("Conversion de {}", set.image.img_path.display()))?;
    log::info!(
        "{} → {}×{} blocs, view_from {orientation}",
        set.image.img_path.display(),
        grid.width,
        grid.height
    );

    let placements = project(&grid, set.origin(), orientation)?;
    let fits = placements.bounds().is_none_or(|(min, max)| {
        world_origin.checked_add(min).is_some() && world_origin.checked_add(max).is_some()
    });
    if !fits {
        return Err(CoreError::InvalidInput(format!(
            "{}×{} blocks from {} shifted by {world_origin} leave the i32 coordinate range",
            grid.width,
            grid.height,
            set.origin()
        ))
        .into());
    }

    let placed = draw(placements, sink, pacing)?;
    Ok(placed)
}

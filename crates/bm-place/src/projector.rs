use std::iter::FusedIterator;

use bm_core::error::CoreError;
use bm_core::grid::BlockGrid;
use bm_core::placement::{BlockPos, Orientation, Placement};

/// Cellule lue et position produite pour le pas `(axis1, axis2)`.
///
/// `axis1` parcourt les colonnes, `axis2` monte de 0 à `height - 1`. Les
/// deux orientations murales lisent les lignes de bas en haut pour que le
/// haut de l'image soit en haut du mur. Les bornes sont vérifiées par
/// [`project`].
#[inline]
#[allow(clippy::cast_possible_wrap)]
fn locate(
    orientation: Orientation,
    height: u32,
    axis1: u32,
    axis2: u32,
    origin: BlockPos,
) -> ((u32, u32), BlockPos) {
    let (a1, a2) = (axis1 as i32, axis2 as i32);
    match orientation {
        Orientation::DownOnGround => ((axis1, axis2), origin + BlockPos::new(a1, 0, a2)),
        Orientation::FacingPositiveX => (
            (axis1, height - axis2 - 1),
            origin + BlockPos::new(0, a2, a1),
        ),
        Orientation::FacingPositiveZ => (
            (axis1, height - axis2 - 1),
            origin + BlockPos::new(a1, a2, 0),
        ),
    }
}

/// Séquence paresseuse des placements d'une grille.
///
/// `axis2` (lignes) en boucle externe, `axis1` (colonnes) en boucle interne.
/// Émet exactement `width × height` placements ; pour recommencer, rappeler
/// [`project`].
#[derive(Clone, Debug)]
pub struct Placements<'a> {
    grid: &'a BlockGrid,
    origin: BlockPos,
    orientation: Orientation,
    next: usize,
}

impl<'a> Iterator for Placements<'a> {
    type Item = Placement<'a>;

    fn next(&mut self) -> Option<Placement<'a>> {
        if self.next >= self.grid.len() {
            return None;
        }
        let width = self.grid.width as usize;
        let axis1 = (self.next % width) as u32;
        let axis2 = (self.next / width) as u32;
        self.next += 1;

        let ((col, row), pos) = locate(
            self.orientation,
            self.grid.height,
            axis1,
            axis2,
            self.origin,
        );
        Some(Placement {
            pos,
            block_id: self.grid.get(col, row),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Placements<'_> {}

impl FusedIterator for Placements<'_> {}

/// Décalage de la dernière cellule émise par rapport à l'origine.
///
/// Tous les décalages sont positifs : la boîte couverte va de `origin` à
/// `origin + far_offset`.
fn far_offset(grid: &BlockGrid, orientation: Orientation) -> Result<BlockPos, CoreError> {
    let axis = |n: u32| {
        i32::try_from(n.saturating_sub(1)).map_err(|_| {
            CoreError::InvalidInput(format!(
                "grid {}×{} does not fit in i32 coordinates",
                grid.width, grid.height
            ))
        })
    };
    let (a1, a2) = (axis(grid.width)?, axis(grid.height)?);
    Ok(match orientation {
        Orientation::DownOnGround => BlockPos::new(a1, 0, a2),
        Orientation::FacingPositiveX => BlockPos::new(0, a2, a1),
        Orientation::FacingPositiveZ => BlockPos::new(a1, a2, 0),
    })
}

impl Placements<'_> {
    /// Coins min et max de la boîte couverte, `None` pour une grille vide.
    #[must_use]
    pub fn bounds(&self) -> Option<(BlockPos, BlockPos)> {
        if self.grid.is_empty() {
            return None;
        }
        // Checked by `project`.
        let far = far_offset(self.grid, self.orientation).ok()?;
        Some((self.origin, self.origin + far))
    }
}

/// Projette `grid` à partir de `origin` selon `orientation`.
///
/// # Errors
/// Returns `InvalidInput` if any cell would land outside the `i32`
/// coordinate range; nothing is emitted in that case.
///
/// # Example
/// ```
/// use bm_core::grid::BlockGrid;
/// use bm_core::placement::{BlockPos, Orientation};
/// use bm_place::project;
///
/// let grid = BlockGrid::from_rows(vec![vec!["A".into(), "B".into()]]).unwrap();
/// let out: Vec<_> = project(&grid, BlockPos::new(0, 0, 0), Orientation::DownOnGround)
///     .unwrap()
///     .map(|p| (p.pos.x, p.pos.y, p.pos.z, p.block_id))
///     .collect();
/// assert_eq!(out, [(0, 0, 0, "A"), (1, 0, 0, "B")]);
/// ```
pub fn project(
    grid: &BlockGrid,
    origin: BlockPos,
    orientation: Orientation,
) -> Result<Placements<'_>, CoreError> {
    if !grid.is_empty() {
        let far = far_offset(grid, orientation)?;
        origin.checked_add(far).ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "grid {}×{} from {origin} (view_from {orientation}) leaves the i32 coordinate range",
                grid.width, grid.height
            ))
        })?;
    }
    log::debug!(
        "Projection {}×{} depuis {origin} (view_from {orientation})",
        grid.width,
        grid.height
    );
    Ok(Placements {
        grid,
        origin,
        orientation,
        next: 0,
    })
}

/// Comme [`project`], avec `view_from` sous forme textuelle ("y", "x", "z").
///
/// # Errors
/// Returns `InvalidInput` for an unknown `view_from` or an out-of-range
/// extent; nothing is emitted.
pub fn project_view<'a>(
    grid: &'a BlockGrid,
    origin: BlockPos,
    view_from: &str,
) -> Result<Placements<'a>, CoreError> {
    let orientation = view_from.parse()?;
    project(grid, origin, orientation)
}

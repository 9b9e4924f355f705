use crate::error::CoreError;

/// Identifiant émis quand la palette est vide.
pub const NO_MATCH: &str = "none";

/// Grille d'identifiants de blocs, une cellule par bloc de l'image.
///
/// Row-major : la ligne 0 correspond au haut de l'image. Produite une fois
/// par le quantizer, jamais modifiée ensuite.
///
/// # Example
/// ```
/// use bm_core::grid::BlockGrid;
/// let grid = BlockGrid::from_rows(vec![vec!["A".into(), "B".into()]]).unwrap();
/// assert_eq!((grid.width, grid.height), (2, 1));
/// assert_eq!(grid.get(1, 0), "B");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockGrid {
    /// Flat array of identifiers, row-major.
    pub cells: Vec<String>,
    /// Number of block columns (`block_count_x`).
    pub width: u32,
    /// Number of block rows (`block_count_y`).
    pub height: u32,
}

impl BlockGrid {
    /// Build a grid from flat row-major cells.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `cells.len() != width * height`.
    pub fn new(width: u32, height: u32, cells: Vec<String>) -> Result<Self, CoreError> {
        if cells.len() != width as usize * height as usize {
            return Err(CoreError::InvalidInput(format!(
                "{} cells do not fill a {width}×{height} grid",
                cells.len()
            )));
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid from nested rows (`rows[y][x]`).
    ///
    /// # Errors
    /// Returns `InvalidInput` if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, CoreError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(y) = rows.iter().position(|r| r.len() != width) {
            return Err(CoreError::InvalidInput(format!(
                "row {y} has {} cells, expected {width}",
                rows[y].len()
            )));
        }
        let width = u32::try_from(width)
            .map_err(|_| CoreError::InvalidInput("grid too wide".into()))?;
        let height = u32::try_from(height)
            .map_err(|_| CoreError::InvalidInput("grid too tall".into()))?;
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Identifier at column `x`, row `y`.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> &str {
        &self.cells[y as usize * self.width as usize + x as usize]
    }

    /// One row of identifiers, left to right.
    ///
    /// # Example
    /// ```
    /// use bm_core::grid::BlockGrid;
    /// let grid = BlockGrid::new(2, 2, vec!["a".into(), "b".into(), "c".into(), "d".into()]).unwrap();
    /// assert_eq!(grid.row(1), ["c", "d"]);
    /// ```
    #[must_use]
    pub fn row(&self, y: u32) -> &[String] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        (0..self.height).map(|y| self.row(y))
    }

    /// True when either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells, i.e. of placements a projection will emit.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn new_rejects_wrong_cell_count() {
        assert!(BlockGrid::new(2, 2, ids(&["a", "b", "c"])).is_err());
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![ids(&["a", "b"]), ids(&["c"])];
        assert!(matches!(
            BlockGrid::from_rows(rows),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn rows_are_row_major() {
        let grid = BlockGrid::from_rows(vec![ids(&["a", "b", "c"]), ids(&["d", "e", "f"])]).unwrap();
        assert_eq!(grid.get(0, 1), "d");
        assert_eq!(grid.get(2, 0), "c");
        let collected: Vec<&[String]> = grid.rows().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1], ids(&["d", "e", "f"]).as_slice());
    }

    #[test]
    fn empty_grid_from_no_rows() {
        let grid = BlockGrid::from_rows(Vec::new()).unwrap();
        assert!(grid.is_empty());
        assert_eq!((grid.width, grid.height), (0, 0));
    }
}

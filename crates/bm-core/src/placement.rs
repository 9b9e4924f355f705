use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Position entière dans l'espace 3D cible.
///
/// # Example
/// ```
/// use bm_core::placement::BlockPos;
/// let p = BlockPos::new(1, 2, 3) + BlockPos::new(10, 0, -3);
/// assert_eq!(p, BlockPos::new(11, 2, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct BlockPos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (height).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Build a position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Somme composante par composante, `None` si un axe déborde de `i32`.
    ///
    /// # Example
    /// ```
    /// use bm_core::placement::BlockPos;
    /// assert_eq!(BlockPos::new(1, 2, 3).checked_add(BlockPos::new(1, 1, 1)), Some(BlockPos::new(2, 3, 4)));
    /// assert_eq!(BlockPos::new(i32::MAX, 0, 0).checked_add(BlockPos::new(1, 0, 0)), None);
    /// ```
    #[must_use]
    pub fn checked_add(self, rhs: BlockPos) -> Option<BlockPos> {
        Some(BlockPos::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }
}

impl Add for BlockPos {
    type Output = BlockPos;

    fn add(self, rhs: BlockPos) -> BlockPos {
        BlockPos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<BlockPos> for [i32; 3] {
    fn from(p: BlockPos) -> Self {
        [p.x, p.y, p.z]
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// One block to place: a position and the identifier borrowed from the grid.
///
/// Pas d'identité propre, émis une fois puis oublié.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Where to place the block.
    pub pos: BlockPos,
    /// Palette identifier.
    pub block_id: &'a str,
}

/// Plan sur lequel la grille est projetée (`view_from`).
///
/// # Example
/// ```
/// use bm_core::placement::Orientation;
/// let o: Orientation = "x".parse().unwrap();
/// assert_eq!(o, Orientation::FacingPositiveX);
/// assert!("w".parse::<Orientation>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// "y" : à plat sur le plan x-z, vu d'en haut.
    #[default]
    DownOnGround,
    /// "x" : mur sur le plan z-y, vu depuis +X.
    FacingPositiveX,
    /// "z" : mur sur le plan x-y, vu depuis +Z.
    FacingPositiveZ,
}

impl Orientation {
    /// The `view_from` letter of this orientation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DownOnGround => "y",
            Self::FacingPositiveX => "x",
            Self::FacingPositiveZ => "z",
        }
    }
}

impl FromStr for Orientation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "y" => Ok(Self::DownOnGround),
            "x" => Ok(Self::FacingPositiveX),
            "z" => Ok(Self::FacingPositiveZ),
            other => Err(CoreError::InvalidInput(format!(
                "unknown view_from '{other}', expected 'y', 'x' or 'z'"
            ))),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

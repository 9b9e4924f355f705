use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::CoreError;

/// One entry of a color map: an opaque block identifier and its RGB color.
///
/// # Example
/// ```
/// use bm_core::palette::PaletteEntry;
/// let e = PaletteEntry::new("white_wool", 233, 236, 236);
/// assert_eq!(e.block_id, "white_wool");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaletteEntry {
    /// Identifiant transmis tel quel au sink.
    #[serde(alias = "id")]
    pub block_id: String,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl PaletteEntry {
    /// Build an entry.
    #[must_use]
    pub fn new(block_id: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self {
            block_id: block_id.into(),
            r,
            g,
            b,
        }
    }

    /// Couleur de l'entrée.
    #[inline(always)]
    #[must_use]
    pub fn color(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Ordered color map. Order only matters for tie-breaking.
///
/// # Example
/// ```
/// use bm_core::palette::{Palette, PaletteEntry};
/// let p = Palette::new(vec![PaletteEntry::new("stone", 125, 125, 125)]);
/// assert_eq!(p.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Wrap a list of entries, keeping their order.
    #[must_use]
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Entries in palette order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the palette has no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a JSON color map: an array of `{"block_id", "r", "g", "b"}` objects.
    ///
    /// # Errors
    /// Returns `MissingResource` (with `origin` as path) if the document is
    /// malformed, an entry lacks a field, or a channel is outside 0–255.
    ///
    /// # Example
    /// ```
    /// use bm_core::palette::Palette;
    /// let p = Palette::from_json(r#"[{"block_id": "red_wool", "r": 160, "g": 39, "b": 34}]"#, "inline").unwrap();
    /// assert_eq!(p.entries()[0].block_id, "red_wool");
    /// ```
    pub fn from_json(json: &str, origin: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::missing(origin, e))
    }
}

/// Charge une color map JSON depuis le disque.
///
/// # Errors
/// Returns `MissingResource` if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use bm_core::palette::load_palette;
/// use std::path::Path;
/// let palette = load_palette(Path::new("color_map_rgb.json")).unwrap();
/// ```
pub fn load_palette(path: &Path) -> Result<Palette, CoreError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CoreError::missing(path.display(), e))?;
    let palette = Palette::from_json(&content, &path.display().to_string())?;
    log::debug!(
        "Palette chargée : {} entrées depuis {}",
        palette.len(),
        path.display()
    );
    Ok(palette)
}

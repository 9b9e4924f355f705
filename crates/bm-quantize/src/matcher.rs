use bm_core::color::Rgb;
use bm_core::grid::NO_MATCH;
use bm_core::palette::{Palette, PaletteEntry};

/// Entrée de palette la plus proche de `color` (distance de Manhattan).
///
/// Balayage linéaire avec minimum courant et comparaison stricte : à
/// distance égale, la première entrée dans l'ordre de la palette gagne.
/// `None` si la palette est vide.
///
/// # Example
/// ```
/// use bm_core::color::Rgb;
/// use bm_core::palette::{Palette, PaletteEntry};
/// use bm_quantize::matcher::nearest_entry;
/// let p = Palette::new(vec![
///     PaletteEntry::new("black", 0, 0, 0),
///     PaletteEntry::new("white", 255, 255, 255),
/// ]);
/// assert_eq!(nearest_entry(&p, Rgb::new(200, 190, 220)).unwrap().block_id, "white");
/// ```
#[must_use]
pub fn nearest_entry(palette: &Palette, color: Rgb) -> Option<&PaletteEntry> {
    let mut best: Option<(&PaletteEntry, u32)> = None;
    for entry in palette.entries() {
        let distance = color.manhattan(entry.color());
        match best {
            Some((_, smallest)) if distance >= smallest => {}
            _ => best = Some((entry, distance)),
        }
    }
    best.map(|(entry, _)| entry)
}

/// Identifiant de l'entrée la plus proche, ou `"none"` pour une palette vide.
///
/// # Example
/// ```
/// use bm_core::color::Rgb;
/// use bm_core::palette::Palette;
/// use bm_quantize::matcher::nearest;
/// assert_eq!(nearest(&Palette::default(), Rgb::new(1, 2, 3)), "none");
/// ```
#[must_use]
pub fn nearest(palette: &Palette, color: Rgb) -> &str {
    nearest_entry(palette, color).map_or(NO_MATCH, |e| e.block_id.as_str())
}

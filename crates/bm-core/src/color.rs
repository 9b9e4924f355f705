/// Couleur RGB 8 bits par canal.
///
/// # Example
/// ```
/// use bm_core::color::Rgb;
/// let c = Rgb::new(50, 100, 150);
/// assert_eq!(c.r, 50);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Distance de Manhattan dans l'espace RGB : |Δr| + |Δg| + |Δb|.
    ///
    /// Volontairement non perceptuelle.
    ///
    /// # Example
    /// ```
    /// use bm_core::color::Rgb;
    /// let d = Rgb::new(10, 20, 30).manhattan(Rgb::new(0, 30, 30));
    /// assert_eq!(d, 20);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn manhattan(self, other: Rgb) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }

    /// Grey level (ITU-R 601 weights, 16-bit fixed point, rounded).
    ///
    /// # Example
    /// ```
    /// use bm_core::color::Rgb;
    /// assert_eq!(Rgb::new(255, 255, 255).grey(), 255);
    /// assert_eq!(Rgb::new(0, 0, 0).grey(), 0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn grey(self) -> u8 {
        ((u32::from(self.r) * 19595 + u32::from(self.g) * 38470 + u32::from(self.b) * 7471
            + 0x8000)
            >> 16) as u8
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

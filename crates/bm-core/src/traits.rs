use crate::placement::Placement;

/// Reçoit les placements émis par le projector, dans l'ordre d'émission.
///
/// Implémenté par : `ConsoleSink`, `McfunctionSink` (bm-app). Une API de
/// placement distante se branche au même endroit.
///
/// # Example
/// ```
/// use bm_core::traits::PlacementSink;
/// use bm_core::placement::Placement;
///
/// struct CountingSink(usize);
/// impl PlacementSink for CountingSink {
///     fn place(&mut self, _placement: &Placement<'_>) -> anyhow::Result<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait PlacementSink {
    /// Place one block.
    ///
    /// # Errors
    /// Any error aborts the whole projection; the caller never retries.
    fn place(&mut self, placement: &Placement<'_>) -> anyhow::Result<()>;

    /// Called once after the last placement. Default: nothing to flush.
    ///
    /// # Errors
    /// Returns an error if buffered output cannot be written.
    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

use std::time::Duration;

use bm_core::error::CoreError;
use bm_core::placement::Placement;
use bm_core::traits::PlacementSink;

/// Transmet chaque placement au sink, dans l'ordre d'émission.
///
/// Attend `pacing` après chaque appel. La première erreur du sink arrête
/// tout : pas de retry, pas de placement suivant.
///
/// Retourne le nombre de placements effectués.
///
/// # Errors
/// Returns `SinkFailure` carrying the sink's error message.
pub fn draw<'a, I, S>(placements: I, sink: &mut S, pacing: Duration) -> Result<usize, CoreError>
where
    I: IntoIterator<Item = Placement<'a>>,
    S: PlacementSink + ?Sized,
{
    let mut placed = 0usize;
    for placement in placements {
        sink.place(&placement).map_err(|e| {
            log::error!(
                "Placement refusé en {} ({}) : {e:#}",
                placement.pos,
                placement.block_id
            );
            CoreError::SinkFailure(format!("{e:#}"))
        })?;
        log::trace!("{} {}", placement.pos, placement.block_id);
        placed += 1;
        if !pacing.is_zero() {
            std::thread::sleep(pacing);
        }
    }
    Ok(placed)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use bm_core::placement::BlockPos;

    /// Records placements; fails on call number `fail_at` if set.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) placed: Vec<(BlockPos, String)>,
        pub(crate) fail_at: Option<usize>,
    }

    impl PlacementSink for RecordingSink {
        fn place(&mut self, placement: &Placement<'_>) -> anyhow::Result<()> {
            if self.fail_at == Some(self.placed.len()) {
                anyhow::bail!("connection reset");
            }
            self.placed
                .push((placement.pos, placement.block_id.to_string()));
            Ok(())
        }
    }

    fn placements() -> Vec<Placement<'static>> {
        ["a", "b", "c"]
            .into_iter()
            .enumerate()
            .map(|(i, id)| Placement {
                pos: BlockPos::new(i as i32, 0, 0),
                block_id: id,
            })
            .collect()
    }

    #[test]
    fn forwards_in_order() {
        let mut sink = RecordingSink::default();
        let n = draw(placements(), &mut sink, Duration::ZERO).unwrap();
        assert_eq!(n, 3);
        let ids: Vec<&str> = sink.placed.iter().map(|(_, id)| id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn first_sink_error_aborts() {
        let mut sink = RecordingSink {
            fail_at: Some(1),
            ..RecordingSink::default()
        };
        let err = draw(placements(), &mut sink, Duration::ZERO).unwrap_err();
        match err {
            CoreError::SinkFailure(msg) => assert!(msg.contains("connection reset")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(sink.placed.len(), 1);
    }

    #[test]
    fn works_through_trait_object() {
        let mut sink = RecordingSink::default();
        let dyn_sink: &mut dyn PlacementSink = &mut sink;
        assert_eq!(draw(placements(), dyn_sink, Duration::ZERO).unwrap(), 3);
    }

    #[test]
    fn pacing_delays_every_placement_including_the_last() {
        let mut sink = RecordingSink::default();
        let start = std::time::Instant::now();
        draw(placements(), &mut sink, Duration::from_millis(5)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(15));
        assert_eq!(sink.placed.len(), 3);
    }
}

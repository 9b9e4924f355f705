use std::fs::File;
use std::io::{BufWriter, Stdout, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bm_core::placement::{BlockPos, Placement};
use bm_core::traits::PlacementSink;

/// Position monde d'un placement, erreur si elle sort de `i32`.
fn world_pos(world_origin: BlockPos, placement: &Placement<'_>) -> Result<BlockPos> {
    world_origin.checked_add(placement.pos).with_context(|| {
        format!(
            "{} décalé de {world_origin} sort des coordonnées i32",
            placement.pos
        )
    })
}

/// Affiche chaque placement en coordonnées monde : `x y z block_id`.
pub struct ConsoleSink<W: Write> {
    out: W,
    world_origin: BlockPos,
}

impl ConsoleSink<Stdout> {
    /// Console sink on stdout.
    #[must_use]
    pub fn stdout(world_origin: BlockPos) -> Self {
        Self::new(std::io::stdout(), world_origin)
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Console sink on any writer.
    pub fn new(out: W, world_origin: BlockPos) -> Self {
        Self { out, world_origin }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlacementSink for ConsoleSink<W> {
    fn place(&mut self, placement: &Placement<'_>) -> Result<()> {
        let pos = world_pos(self.world_origin, placement)?;
        writeln!(self.out, "{pos} {}", placement.block_id)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Écrit des commandes `setblock X Y Z <block_id>` dans un fichier de fonction.
pub struct McfunctionSink<W: Write> {
    out: W,
    world_origin: BlockPos,
    written: usize,
}

impl McfunctionSink<BufWriter<File>> {
    /// Create (or truncate) the function file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create(path: &Path, world_origin: BlockPos) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Impossible de créer {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file), world_origin))
    }
}

impl<W: Write> McfunctionSink<W> {
    /// Function sink on any writer.
    pub fn new(out: W, world_origin: BlockPos) -> Self {
        Self {
            out,
            world_origin,
            written: 0,
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlacementSink for McfunctionSink<W> {
    fn place(&mut self, placement: &Placement<'_>) -> Result<()> {
        let pos = world_pos(self.world_origin, placement)?;
        writeln!(self.out, "setblock {pos} {}", placement.block_id)
            .context("Écriture de la commande setblock")?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().context("Flush du fichier de fonction")?;
        log::info!("{} commandes setblock écrites", self.written);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(x: i32, y: i32, z: i32, id: &str) -> Placement<'_> {
        Placement {
            pos: BlockPos::new(x, y, z),
            block_id: id,
        }
    }

    #[test]
    fn console_adds_world_origin() {
        let mut sink = ConsoleSink::new(Vec::new(), BlockPos::new(5000, 0, 5000));
        sink.place(&placement(1, 2, 3, "red_wool")).unwrap();
        sink.place(&placement(-1, 0, 0, "none")).unwrap();
        sink.finish().unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "5001 2 5003 red_wool\n4999 0 5000 none\n");
    }

    #[test]
    fn mcfunction_writes_setblock_lines() {
        let mut sink = McfunctionSink::new(Vec::new(), BlockPos::default());
        sink.place(&placement(0, 64, 0, "minecraft:stone")).unwrap();
        sink.finish().unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "setblock 0 64 0 minecraft:stone\n");
    }

    #[test]
    fn overflowing_world_position_is_an_error() {
        let mut console = ConsoleSink::new(Vec::new(), BlockPos::new(i32::MAX, 0, 0));
        assert!(console.place(&placement(1, 0, 0, "stone")).is_err());
        assert!(console.into_inner().is_empty());

        let mut func = McfunctionSink::new(Vec::new(), BlockPos::new(0, i32::MIN, 0));
        assert!(func.place(&placement(0, -1, 0, "stone")).is_err());
        assert!(func.into_inner().is_empty());
    }

    #[test]
    fn mcfunction_create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draw.mcfunction");
        let mut sink = McfunctionSink::create(&path, BlockPos::new(0, 0, 10)).unwrap();
        sink.place(&placement(1, 1, 1, "glass")).unwrap();
        sink.finish().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "setblock 1 1 11 glass\n");
    }

    #[test]
    fn mcfunction_create_fails_in_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("draw.mcfunction");
        assert!(McfunctionSink::create(&path, BlockPos::default()).is_err());
    }
}

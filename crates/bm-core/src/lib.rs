/// Shared types, traits, and configuration for blockmosaic.
///
/// This crate holds everything the quantizer, the projector and the
/// application agree on: pixel frames, palettes, block grids, placements
/// and the batch configuration format.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod palette;
pub mod placement;
pub mod traits;

pub use color::Rgb;
pub use config::{BatchConfig, ConfigSet};
pub use error::CoreError;
pub use frame::FrameBuffer;
pub use grid::BlockGrid;
pub use palette::{Palette, PaletteEntry};
pub use placement::{BlockPos, Orientation, Placement};
pub use traits::PlacementSink;

//! block-downscale library crate.
//!
//! Halves an RGBA image by collapsing each 2x2 block into one pixel with an
//! edge-preserving heuristic instead of a plain mean:
//!
//! 1. **Block reduction** - [`block::reduce`] picks one color per 2x2 block
//! 2. **Raster scan** - [`raster::downscale`] walks the image block by block
//! 3. **I/O** - [`io`] loads the source and writes the PNG result
//! 4. **Pipeline** - [`pipeline::run`] ties the three together

pub mod block;
pub mod color;
pub mod config;
pub mod error;
pub mod geom;
pub mod io;
pub mod pipeline;
pub mod raster;

pub use block::{reduce, reduce_block, BlockCorners};
pub use color::Rgba;
pub use error::{Error, InvalidInput, LoadError, SaveError};
pub use geom::{Coord, Resolution};
pub use raster::{downscale, downscale_image, downscale_into, PixelBuffer};

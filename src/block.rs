//! Edge-preserving reduction of a 2x2 pixel block to a single color.
//!
//! A plain mean of four pixels turns a checkerboard into flat gray. The
//! reducer instead anchors on the two diagonals of the block: when a corner
//! matches a neighbour its color is kept as is, and only unmatched diagonals
//! are averaged. The final color is the mean of the two diagonal results.
//!
//! The reduction depends on which corner holds which color. Swapping two
//! corners generally changes the result.

use crate::color::Rgba;
use crate::geom::Coord;

/// Pixel coordinates covering one 2x2 block.
///
/// Rows are counted top-down, as in the underlying row-major buffer: the
/// bottom corners sit one row below the block origin. The browser tool this
/// crate replaces read the two rows the other way round, so its "top" pair
/// came from the lower row; that flip looks like a latent defect and is not
/// reproduced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCorners {
    pub top_left: Coord,
    pub top_right: Coord,
    pub bottom_left: Coord,
    pub bottom_right: Coord,
}

impl BlockCorners {
    /// Corners of the block whose top-left pixel is `origin`.
    pub const fn at(origin: Coord) -> Self {
        Self {
            top_left: origin,
            top_right: Coord::new(origin.x + 1, origin.y),
            bottom_left: Coord::new(origin.x, origin.y + 1),
            bottom_right: Coord::new(origin.x + 1, origin.y + 1),
        }
    }

    /// Corners of block `block` in the block grid (pixel origin `2 * block`).
    pub const fn of_block(block: Coord) -> Self {
        Self::at(Coord::new(block.x * 2, block.y * 2))
    }

    /// Corners in reducer order: top-left, top-right, bottom-left, bottom-right.
    pub const fn to_array(self) -> [Coord; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

/// Reduce four block colors to one.
///
/// Arguments are the top-left, top-right, bottom-left and bottom-right
/// colors, in that order.
///
/// # Example
/// ```
/// use block_downscale::block::reduce;
/// use block_downscale::color::Rgba;
///
/// let red = Rgba::from_bytes([255, 0, 0, 255]);
/// let green = Rgba::from_bytes([0, 255, 0, 255]);
/// // Checkerboard: each diagonal keeps its own color.
/// let out = reduce(red, green, green, red);
/// assert_eq!(out, Rgba::new(127.5, 127.5, 0.0, 255.0));
/// ```
pub fn reduce(c1: Rgba, c2: Rgba, c3: Rgba, c4: Rgba) -> Rgba {
    // Flat region
    if c1.matches(&c2) && c1.matches(&c3) && c1.matches(&c4) {
        return c1;
    }

    // c1 is also kept when it matches its horizontal neighbour c2, not only
    // its diagonal partner c4.
    let chunk1 = if c1.matches(&c4) || c1.matches(&c2) {
        c1
    } else {
        c1.average_with(c4)
    };

    let chunk2 = if c3.matches(&c2) || c3.matches(&c4) {
        c3
    } else {
        c2.average_with(c3)
    };

    chunk1.average_with(chunk2)
}

/// [`reduce`] over an array in top-left, top-right, bottom-left,
/// bottom-right order.
#[inline]
pub fn reduce_block(colors: [Rgba; 4]) -> Rgba {
    let [c1, c2, c3, c4] = colors;
    reduce(c1, c2, c3, c4)
}

//! Property tests for the block reducer and the raster scanner.
//!
//! These check the laws the downscaler must hold for any input:
//! - A flat block reduces to its own color
//! - Two matching diagonals reduce to the mean of the two diagonal colors
//! - Output dimensions are always the halved input dimensions

use block_downscale::{downscale, reduce, Resolution, Rgba};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn color(c: (u8, u8, u8, u8)) -> Rgba {
    Rgba::from_bytes([c.0, c.1, c.2, c.3])
}

#[quickcheck]
fn flat_block_is_identity(c: (u8, u8, u8, u8)) -> bool {
    let c = color(c);
    reduce(c, c, c, c) == c
}

#[quickcheck]
fn matching_diagonals_average(a: (u8, u8, u8, u8), b: (u8, u8, u8, u8)) -> TestResult {
    if a == b {
        return TestResult::discard();
    }
    let (a, b) = (color(a), color(b));
    // top-left == bottom-right, top-right == bottom-left
    TestResult::from_bool(reduce(a, b, b, a) == a.average_with(b))
}

#[quickcheck]
fn result_stays_within_channel_range(
    c1: (u8, u8, u8, u8),
    c2: (u8, u8, u8, u8),
    c3: (u8, u8, u8, u8),
    c4: (u8, u8, u8, u8),
) -> bool {
    let out = reduce(color(c1), color(c2), color(c3), color(c4));
    let min = |f: fn(&Rgba) -> f32| {
        [c1, c2, c3, c4]
            .iter()
            .map(|&c| f(&color(c)))
            .fold(f32::INFINITY, f32::min)
    };
    let max = |f: fn(&Rgba) -> f32| {
        [c1, c2, c3, c4]
            .iter()
            .map(|&c| f(&color(c)))
            .fold(f32::NEG_INFINITY, f32::max)
    };
    let channels: [fn(&Rgba) -> f32; 4] = [|c| c.r, |c| c.g, |c| c.b, |c| c.a];
    channels
        .iter()
        .all(|&f| f(&out) >= min(f) && f(&out) <= max(f))
}

#[quickcheck]
fn output_dimensions_are_halved(w: u8, h: u8) -> bool {
    let (w, h) = (u32::from(w % 40), u32::from(h % 40));
    let src = vec![0x7fu8; (w * h * 4) as usize];
    let out = match downscale(&src, w, h) {
        Ok(out) => out,
        Err(_) => return false,
    };
    out.resolution() == Resolution::new(w / 2, h / 2)
        && out.as_bytes().len() == (w / 2 * (h / 2) * 4) as usize
}

#[quickcheck]
fn degenerate_input_is_empty(len: u8, thin_width: bool) -> bool {
    let len = u32::from(len % 64);
    let (w, h) = if thin_width { (1, len) } else { (len, 1) };
    let src = vec![0u8; (w * h * 4) as usize];
    matches!(downscale(&src, w, h), Ok(out) if out.is_empty())
}

#[quickcheck]
fn wrong_length_is_rejected(w: u8, h: u8, extra: u8) -> TestResult {
    if extra == 0 {
        return TestResult::discard();
    }
    let (w, h) = (u32::from(w % 16), u32::from(h % 16));
    let src = vec![0u8; (w * h * 4) as usize + extra as usize];
    TestResult::from_bool(downscale(&src, w, h).is_err())
}

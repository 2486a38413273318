//! One-shot downscale run: load, halve, save.

use std::time::{Duration, Instant};

use crate::error::Error;
use crate::geom::Resolution;
use crate::io::{ImageSink, ImageSource};
use crate::raster::downscale_image;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub input: Resolution,
    pub output: Resolution,
    /// Time spent reducing blocks, excluding decode and encode.
    pub elapsed: Duration,
}

/// Load an image from `source`, halve it and hand the result to `sink`.
///
/// There are no retries: the first failure aborts the run and nothing is
/// written to the sink.
pub fn run(source: &mut dyn ImageSource, sink: &mut dyn ImageSink) -> Result<Summary, Error> {
    log::info!("Loading image from {}", source.describe());
    let image = source.load()?;
    log::info!("Loaded {} image", image.resolution());

    let start = Instant::now();
    let halved = downscale_image(&image);
    let elapsed = start.elapsed();
    log::info!(
        "Downscaled {} -> {} in {:?}",
        image.resolution(),
        halved.resolution(),
        elapsed
    );
    if halved.is_empty() {
        log::warn!(
            "Source {} is smaller than one 2x2 block, nothing to write",
            image.resolution()
        );
    }

    log::info!("Saving PNG to {}", sink.describe());
    sink.save(&halved)?;

    Ok(Summary {
        input: image.resolution(),
        output: halved.resolution(),
        elapsed,
    })
}

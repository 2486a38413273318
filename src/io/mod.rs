//! Image sources and sinks.
//!
//! The downscaler only sees the [`ImageSource`] and [`ImageSink`] traits.
//! Two families of implementations exist:
//!
//! - **File-backed** ([`FileSource`], [`FileSink`]) for batch runs on paths.
//! - **Stream-backed** ([`StreamSource`], [`StreamSink`]) for piping through
//!   stdin/stdout or any other reader and writer.
//!
//! [`open_source`] and [`open_sink`] pick one from a command-line path, where
//! `-` means the standard streams.

mod codec;
mod file;
mod stream;

use std::path::Path;

use crate::error::{LoadError, SaveError};
use crate::raster::PixelBuffer;

pub use codec::{decode, encode_png};
pub use file::{FileSink, FileSource};
pub use stream::{StreamSink, StreamSource};

/// Path that selects stdin or stdout.
pub const STDIO_PATH: &str = "-";

/// Supplies the full-resolution image.
pub trait ImageSource {
    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;

    /// Read and decode the image into RGBA8.
    fn load(&mut self) -> Result<PixelBuffer, LoadError>;
}

/// Persists the downscaled image as PNG.
pub trait ImageSink {
    /// Human-readable destination, used in logs and errors.
    fn describe(&self) -> String;

    fn save(&mut self, image: &PixelBuffer) -> Result<(), SaveError>;
}

/// Source for a command-line path (`-` reads stdin).
pub fn open_source(path: &Path) -> Box<dyn ImageSource> {
    if is_stdio(path) {
        Box::new(StreamSource::new(std::io::stdin().lock(), "stdin"))
    } else {
        Box::new(FileSource::new(path))
    }
}

/// Sink for a command-line path (`-` writes stdout).
pub fn open_sink(path: &Path) -> Box<dyn ImageSink> {
    if is_stdio(path) {
        Box::new(StreamSink::new(std::io::stdout().lock(), "stdout"))
    } else {
        Box::new(FileSink::new(path))
    }
}

/// Whether `path` names the standard streams.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

//! Reader/writer-backed image source and sink.

use std::io::{Read, Write};

use super::codec::{decode, encode_png};
use super::{ImageSink, ImageSource};
use crate::error::{LoadError, SaveError};
use crate::raster::PixelBuffer;

/// Reads an encoded image from any reader until EOF.
pub struct StreamSource<R> {
    reader: R,
    name: String,
}

impl<R: Read> StreamSource<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }
}

impl<R: Read> ImageSource for StreamSource<R> {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn load(&mut self) -> Result<PixelBuffer, LoadError> {
        let mut bytes = Vec::new();
        self.reader
            .read_to_end(&mut bytes)
            .map_err(|source| LoadError::Stream {
                origin: self.name.clone(),
                source,
            })?;
        decode(&bytes, &self.name)
    }
}

/// Writes PNG bytes to any writer.
pub struct StreamSink<W> {
    writer: W,
    name: String,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ImageSink for StreamSink<W> {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn save(&mut self, image: &PixelBuffer) -> Result<(), SaveError> {
        let png = encode_png(image, &self.name)?;
        self.writer
            .write_all(&png)
            .and_then(|()| self.writer.flush())
            .map_err(|source| SaveError::Stream {
                target: self.name.clone(),
                source,
            })
    }
}

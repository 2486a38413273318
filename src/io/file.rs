//! File-backed image source and sink.

use std::path::PathBuf;

use super::codec::{decode, encode_png};
use super::{ImageSink, ImageSource};
use crate::error::{LoadError, SaveError};
use crate::raster::PixelBuffer;

/// Reads an image file from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&mut self) -> Result<PixelBuffer, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        decode(&bytes, &self.describe())
    }
}

/// Writes a PNG file to disk, replacing any existing file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSink for FileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn save(&mut self, image: &PixelBuffer) -> Result<(), SaveError> {
        // Encode fully before touching the file so a failed encode leaves
        // nothing behind.
        let png = encode_png(image, &self.describe())?;
        std::fs::write(&self.path, png).map_err(|source| SaveError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let mut source = FileSource::new(dir.path().join("nope.png"));
        match source.load() {
            Err(LoadError::Io { path, source }) => {
                assert!(path.ends_with("nope.png"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");
        let image = PixelBuffer::new(vec![1, 2, 3, 4, 5, 6, 7, 8], 2, 1).unwrap();

        FileSink::new(&path).save(&image).unwrap();
        assert_eq!(FileSource::new(&path).load().unwrap(), image);
    }

    #[test]
    fn test_empty_image_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.png");
        let image = PixelBuffer::new(Vec::new(), 3, 0).unwrap();

        let err = FileSink::new(&path).save(&image).unwrap_err();
        assert!(matches!(err, SaveError::EmptyImage { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_destination_is_save_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.png");
        let image = PixelBuffer::new(vec![0; 4], 1, 1).unwrap();

        let err = FileSink::new(&path).save(&image).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }
}

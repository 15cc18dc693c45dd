use bytes::Bytes;
use thiserror::Error;
use tokio::task;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::lister::ImageReference;

/// A listed gallery image and where its pixels live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub id: Id,
    reference: ImageReference,
    path: PathBuf,
}

impl ImageData {
    pub fn from_references(root: &Path, references: Vec<ImageReference>) -> Vec<Self> {
        references
            .into_iter()
            .enumerate()
            .map(|(index, reference)| Self {
                id: Id(index),
                path: reference.resolve(root),
                reference,
            })
            .collect()
    }

    pub fn reference(&self) -> &ImageReference {
        &self.reference
    }

    /// Decodes the image on the blocking pool.
    pub async fn load(self, size: Size) -> Result<Rgba, Error> {
        let image = task::spawn_blocking(move || {
            let decoded = image::open(&self.path)?;
            let decoded = match size {
                Size::Original => decoded,
                Size::Thumbnail { width, height } => decoded.thumbnail(width, height),
            };

            Ok::<_, Error>(decoded.to_rgba8())
        })
        .await??;

        Ok(Rgba {
            width: image.width(),
            height: image.height(),
            pixels: Bytes::from(image.into_raw()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(usize);

impl Id {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone)]
pub struct Rgba {
    pub width: u32,
    pub height: u32,
    pub pixels: Bytes,
}

impl Rgba {
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rgba")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Size {
    Original,
    Thumbnail { width: u32, height: u32 },
}

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("failed to read image: {0}")]
    IOFailed(Arc<io::Error>),
    #[error("image loading task failed: {0}")]
    JoinFailed(Arc<task::JoinError>),
    #[error("failed to decode image: {0}")]
    ImageDecodingFailed(Arc<image::ImageError>),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::IOFailed(Arc::new(error))
    }
}

impl From<task::JoinError> for Error {
    fn from(error: task::JoinError) -> Self {
        Self::JoinFailed(Arc::new(error))
    }
}

impl From<image::ImageError> for Error {
    fn from(error: image::ImageError) -> Self {
        match error {
            image::ImageError::IoError(error) => Self::from(error),
            error => Self::ImageDecodingFailed(Arc::new(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lister::{Category, DirectoryEntry, select_images};

    fn images_in(root: &Path, names: &[&str]) -> Vec<ImageData> {
        let entries = names.iter().map(|name| DirectoryEntry {
            name: (*name).to_string(),
            is_file: true,
        });
        let category = Category::new("gallery");
        let references = select_images("gallery", entries)
            .into_iter()
            .map(|path| ImageReference::new(path, category.clone()))
            .collect();

        ImageData::from_references(root, references)
    }

    #[test]
    fn test_ids_follow_listing_order() {
        let images = images_in(Path::new("public"), &["b (2).png", "a (1).png"]);

        assert_eq!(images[0].id.index(), 0);
        assert_eq!(images[0].reference().path(), "/gallery/a (1).png");
        assert_eq!(images[1].reference().path(), "/gallery/b (2).png");
    }

    #[tokio::test]
    async fn test_load_original_and_thumbnail() {
        let root = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(root.path().join("gallery")).expect("dir");
        image::RgbaImage::new(8, 4)
            .save(root.path().join("gallery").join("wide (1).png"))
            .expect("save png");

        let images = images_in(root.path(), &["wide (1).png"]);

        let original = images[0].clone().load(Size::Original).await.expect("original");
        assert_eq!((original.width, original.height), (8, 4));
        assert_eq!(original.pixels.len(), 8 * 4 * 4);
        assert!((original.aspect_ratio() - 2.0).abs() < f32::EPSILON);

        let thumbnail = images[0]
            .clone()
            .load(Size::Thumbnail {
                width: 4,
                height: 4,
            })
            .await
            .expect("thumbnail");
        assert_eq!((thumbnail.width, thumbnail.height), (4, 2));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let root = tempfile::tempdir().expect("tempdir");
        let images = images_in(root.path(), &["gone.jpg"]);

        let result = images[0].clone().load(Size::Original).await;

        assert!(matches!(result, Err(Error::IOFailed(_))));
    }

    #[tokio::test]
    async fn test_garbage_is_decoding_error() {
        let root = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(root.path().join("gallery")).expect("dir");
        std::fs::write(root.path().join("gallery").join("broken.png"), b"not a png")
            .expect("write");
        let images = images_in(root.path(), &["broken.png"]);

        let result = images[0].clone().load(Size::Original).await;

        assert!(matches!(result, Err(Error::ImageDecodingFailed(_))));
    }
}

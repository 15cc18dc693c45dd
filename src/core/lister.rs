use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Extensions surfaced by the lister, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Fixed label attached to every image of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A site-relative image path such as `/gallery/couples (1).jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    path: String,
    category: Category,
}

impl ImageReference {
    pub fn new(path: impl Into<String>, category: Category) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn file_name(&self) -> &str {
        self.path
            .rsplit_once('/')
            .map_or(self.path.as_str(), |(_, name)| name)
    }

    /// Maps the site-relative path onto the asset root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.path.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_file: bool,
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("directory {path:?} is unavailable: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Lists the images directly under `root/directory`, ordered by the number
/// embedded in each file name.
///
/// A directory that cannot be read yields an empty listing. Nothing is
/// cached: every call reads the directory again.
pub async fn list_images(
    root: &Path,
    directory: &str,
    category: &Category,
) -> Vec<ImageReference> {
    let entries = match read_entries(&root.join(directory)).await {
        Ok(entries) => entries,
        Err(error) => {
            debug!(%error, "Listing unavailable directory as empty");
            return Vec::new();
        }
    };

    let images: Vec<_> = select_images(directory, entries)
        .into_iter()
        .map(|path| ImageReference::new(path, category.clone()))
        .collect();

    debug!(directory, category = category.as_str(), count = images.len(), "Listed images");
    images
}

async fn read_entries(path: &Path) -> Result<Vec<DirectoryEntry>, ListingError> {
    let unavailable = |source: io::Error| ListingError::DirectoryUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let mut directory = tokio::fs::read_dir(path).await.map_err(unavailable)?;
    let mut entries = Vec::new();

    while let Some(entry) = directory.next_entry().await.map_err(unavailable)? {
        let file_type = entry.file_type().await.map_err(unavailable)?;
        let Ok(name) = entry.file_name().into_string() else {
            debug!(name = ?entry.file_name(), "Skipping non UTF-8 file name");
            continue;
        };

        entries.push(DirectoryEntry {
            name,
            is_file: file_type.is_file(),
        });
    }

    Ok(entries)
}

/// Keeps image files and returns their site-relative paths in natural order.
///
/// The sort is stable, so entries sharing a key stay in encounter order.
pub fn select_images<I>(directory: &str, entries: I) -> Vec<String>
where
    I: IntoIterator<Item = DirectoryEntry>,
{
    let mut paths: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.is_file && is_image_name(&entry.name))
        .map(|entry| format!("/{directory}/{}", entry.name))
        .collect();

    paths.sort_by_cached_key(|path| sort_key(path));
    paths
}

pub fn is_image_name(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, extension)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|accepted| extension.eq_ignore_ascii_case(accepted))
    })
}

/// The first parenthesized number, else the first digit run directly
/// before a `.`, else 0.
pub fn sort_key(path: &str) -> u64 {
    parenthesized_number(path)
        .or_else(|| number_before_dot(path))
        .unwrap_or(0)
}

fn parenthesized_number(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();

    bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'(')
        .find_map(|(open, _)| {
            let start = open + 1;
            let end = start + digit_run(&bytes[start..]);

            (end > start && bytes.get(end) == Some(&b')'))
                .then(|| parse_digits(&text[start..end]))
        })
}

fn number_before_dot(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        let len = digit_run(&bytes[start..]);
        if len == 0 {
            start += 1;
            continue;
        }

        let end = start + len;
        if bytes.get(end) == Some(&b'.') {
            return Some(parse_digits(&text[start..end]));
        }
        start = end;
    }

    None
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

// Only ever called on ASCII digits, so the sole failure is overflow.
fn parse_digits(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

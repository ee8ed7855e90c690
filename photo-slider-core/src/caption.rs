//! Provides functionality for turning image filenames into captions.
//!
//! A filename of the form `author - title.jpg` is shown with both lines, and any `%` in the
//! filename becomes a line break. Captions are inserted into the page as raw HTML so that
//! these line breaks survive, which also means markup in a filename reaches the page as-is.

use crate::layout::{split_extension, LINE_BREAK};

use std::path::{Component, Path};

/// The caption and location of a single image in the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMeta {
    /// The path of the image relative to the project directory, separated with `/`.
    pub rel_path: String,
    /// The author line of the caption, which may be empty.
    pub author: String,
    /// The title line of the caption.
    pub title: String,
}

impl ImageMeta {
    /// Creates the metadata for the image at `path`, relative to the project directory `root`.
    pub fn from_path(path: &Path, root: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let (stem, _) = split_extension(&name);
        let (author, title) = parse_author_title(stem);

        Self {
            rel_path: to_slash(path.strip_prefix(root).unwrap_or(path)),
            author,
            title,
        }
    }
}

/// Splits a filename without its extension into an author and a title.
///
/// Without a `-`, the author is empty and the whole name is the title.
pub fn parse_author_title(name: &str) -> (String, String) {
    match name.split_once('-') {
        Some((author, title)) => (
            author.replace('%', LINE_BREAK).trim().to_string(),
            title.replace('%', LINE_BREAK).trim().to_string(),
        ),
        None => (String::new(), name.replace('%', LINE_BREAK)),
    }
}

/// Joins the normal components of a path with forward slashes.
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|part| match part {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

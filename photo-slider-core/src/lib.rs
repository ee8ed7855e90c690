//! Photo Slider: a scrolling photo gallery generator.
//!
//! Reads a folder of images, turns each filename into an author and title caption,
//! and writes a single static HTML page which scrolls through the images forever.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod caption;
pub mod config;
pub mod fs;
pub mod layout;
pub mod render;

mod error;

#[cfg(test)]
mod tests;

pub use caption::{parse_author_title, ImageMeta};
pub use config::Config;
pub use error::Error;
pub use fs::{ensure_folder, find_images, FolderStatus};
pub use render::write_html;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

use std::path::{Path, PathBuf};

/// The gallery builder.
#[derive(Debug)]
pub struct Gallery {
    /// The project directory, containing the image folder.
    pub root: PathBuf,
    /// The configuration of the gallery.
    pub config: Config,
    /// The ordered images, available once the gallery has been built.
    pub images: Option<Vec<ImageMeta>>,
    /// The seed for the gallery order, if the order should be reproducible.
    pub seed: Option<u64>,
}

impl Gallery {
    /// Creates a new gallery builder for the given project directory with the default configuration.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config: Config::default(),
            images: None,
            seed: None,
        }
    }

    /// Sets the configuration of the gallery.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Makes the gallery order reproducible by seeding the shuffle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the path of the image folder.
    pub fn image_folder(&self) -> PathBuf {
        self.root.join(layout::IMAGE_FOLDER)
    }

    /// Discovers the images, shuffles them and parses their captions.
    pub fn build(&mut self) -> Result<&[ImageMeta], Error> {
        let mut paths = find_images(self.image_folder())?;

        match self.seed {
            Some(seed) => paths.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => paths.shuffle(&mut thread_rng()),
        }

        let images = paths
            .iter()
            .map(|path| ImageMeta::from_path(path, &self.root))
            .collect();

        Ok(self.images.insert(images).as_slice())
    }

    /// Writes the gallery page to the given path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let images = self.images.as_ref().ok_or(Error::NotBuilt)?;
        write_html(path, images, &self.config)
    }
}

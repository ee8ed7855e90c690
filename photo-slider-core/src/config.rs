//! Provides the gallery configuration and its plain-text `key=value` file format.

use crate::Error;

use std::fs::{read_to_string, write};
use std::io::ErrorKind;
use std::path::Path;

/// The styling options of the gallery.
///
/// Values are not validated, and are written into the stylesheet exactly as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Whether to show the author line of each caption.
    pub include_author: bool,
    /// The fill color of the author text.
    pub author_text_color: String,
    /// The stroke color of the author text.
    pub author_stroke_color: String,
    /// The fill color of the title text.
    pub title_text_color: String,
    /// The stroke color of the title text.
    pub title_stroke_color: String,
    /// The color of the outline around each image.
    pub image_border_color: String,
    /// The CSS border style of the outline around each image, for example `dashed`.
    pub image_border_style: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_author: true,
            author_text_color: "#ffffff".to_string(),
            author_stroke_color: "#803128".to_string(),
            title_text_color: "#ffffff".to_string(),
            title_stroke_color: "#bd685e".to_string(),
            image_border_color: "#741d34".to_string(),
            image_border_style: "dashed".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from the given file.
    ///
    /// If the file does not exist, it is created with the default values, which are then returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        match read_to_string(path) {
            Ok(contents) => Ok(Self::parse(&contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = Self::default();

                write(path, config.template())
                    .map_err(|e| Error::WriteConfig(path.to_path_buf(), e.to_string()))?;

                Ok(config)
            }
            Err(e) => Err(Error::ReadConfig(path.to_path_buf(), e.to_string())),
        }
    }

    /// Parses the contents of a configuration file on top of the default values.
    ///
    /// Blank lines, comments, lines without `=` and unknown keys are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut config = Self::default();

        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                config.set(key.trim(), value.trim());
            }
        }

        config
    }

    /// Overwrites the field named by `key`, returning `false` if the key is not recognised.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let field = match key {
            "include_author" => {
                self.include_author = value == "true";
                return true;
            }
            "author_text_color" => &mut self.author_text_color,
            "author_stroke_color" => &mut self.author_stroke_color,
            "title_text_color" => &mut self.title_text_color,
            "title_stroke_color" => &mut self.title_stroke_color,
            "image_border_color" => &mut self.image_border_color,
            "image_border_style" => &mut self.image_border_style,
            _ => return false,
        };

        *field = value.to_string();
        true
    }

    /// Formats the configuration as a commented configuration file.
    pub fn template(&self) -> String {
        format!(
            "# Photo Slider Configuration
# Set include_author to true to show author names, false to hide them
include_author={}

# Color customization (use hex color codes like #ffffff)
author_text_color={}
author_stroke_color={}
title_text_color={}
title_stroke_color={}
image_border_color={}

# Border style options: none, solid, dashed, dotted, double, groove, ridge, inset, outset
image_border_style={}
",
            self.include_author,
            self.author_text_color,
            self.author_stroke_color,
            self.title_text_color,
            self.title_stroke_color,
            self.image_border_color,
            self.image_border_style
        )
    }
}

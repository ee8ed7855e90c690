//! Provides functionality for writing the gallery page.

mod style;

pub use style::animation_duration;

use crate::{Config, Error, ImageMeta};

use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;

/// The start of the document, up to the opening of the stylesheet.
static HEAD: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Photo Slider</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Nunito:ital,wght@1,800&display=swap" rel="stylesheet">
    <style>
"#;

/// Writes the gallery page to the file at `path`, replacing it if it exists.
///
/// If writing fails part of the way through, the partially written file is left in place.
pub fn write_html(
    path: impl AsRef<Path>,
    images: &[ImageMeta],
    config: &Config,
) -> std::result::Result<(), Error> {
    let path = path.as_ref();
    let file =
        File::create(path).map_err(|e| Error::CreateOutput(path.to_path_buf(), e.to_string()))?;
    let mut writer = BufWriter::new(file);

    render(&mut writer, images, config)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::WriteOutput(path.to_path_buf(), e.to_string()))
}

/// Writes the gallery page.
///
/// The images are written twice in the same order, one copy after the other, so that the
/// animation can jump back to the start after scrolling through exactly one copy.
pub fn render(w: &mut impl Write, images: &[ImageMeta], config: &Config) -> Result<()> {
    w.write_all(HEAD.as_bytes())?;
    style::write_stylesheet(w, images.len(), config)?;
    writeln!(w, "    </style>")?;
    writeln!(w, "  </head>")?;
    writeln!(w, "  <body>")?;
    writeln!(w, "    <div id=\"permas\">")?;

    for class in ["scroll-content", "scroll-content-duplicate"] {
        writeln!(w, "      <div class=\"{}\">", class)?;

        for image in images {
            write_image(w, image, config)?;
        }

        writeln!(w, "      </div>")?;
    }

    writeln!(w, "    </div>")?;
    writeln!(w, "  </body>")?;
    writeln!(w, "</html>")
}

/// Writes the container of a single image and its caption.
fn write_image(w: &mut impl Write, image: &ImageMeta, config: &Config) -> Result<()> {
    writeln!(w, "        <div class=\"image-container\">")?;
    writeln!(
        w,
        "          <img class=\"scroller\" src=\"{}\">",
        escape_html(&image.rel_path)
    )?;
    writeln!(w, "          <div class=\"caption\">")?;

    if config.include_author {
        writeln!(w, "            <div class=\"author\">{}</div>", image.author)?;
    }

    writeln!(w, "            <div class=\"title\">{}</div>", image.title)?;
    writeln!(w, "          </div>")?;
    writeln!(w, "        </div>")
}

/// Escapes the characters which are special in HTML text and attribute values.
///
/// Quotes become the numeric entities `&#34;` and `&#39;` rather than named ones.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}

//! Names and constants describing the layout of a photo slider project.

/// The folder, relative to the project directory, in which images are placed.
pub static IMAGE_FOLDER: &str = "images";

/// The generated page, relative to the project directory.
pub static OUTPUT_FILE: &str = "photo.html";

/// The configuration file, relative to the project directory.
pub static CONFIG_FILE: &str = "photo-slider.config";

/// The image extensions which are included in the gallery, compared in lowercase.
pub static ALLOWED_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Inserted into captions in place of every `%` in a filename.
pub static LINE_BREAK: &str = "<br>";

/// How long each image adds to one full cycle of the scroll animation.
pub static SECONDS_PER_IMAGE: usize = 5;

/// Splits a file name into its stem and its extension, including the leading dot.
///
/// The extension starts at the last dot of the name, so `.png` has an empty stem.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) => name.split_at(i),
        None => (name, ""),
    }
}

/// Returns `true` if the file name has one of the allowed image extensions.
pub fn is_image(name: &str) -> bool {
    let (_, extension) = split_extension(name);
    let extension = extension.to_lowercase();

    ALLOWED_EXTENSIONS.contains(&extension.as_str())
}

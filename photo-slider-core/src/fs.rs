//! Provides filesystem access for locating images.

use crate::layout::is_image;
use crate::Error;

use std::fs::{create_dir_all, read_dir};
use std::path::{Path, PathBuf};

/// Whether the image folder was already present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FolderStatus {
    /// The folder already existed.
    Existing,
    /// The folder did not exist and has just been created, so it is empty.
    Created,
}

/// Ensures the folder exists, creating it and any missing parents if not.
pub fn ensure_folder(path: impl AsRef<Path>) -> Result<FolderStatus, Error> {
    let path = path.as_ref();

    if path.exists() {
        return Ok(FolderStatus::Existing);
    }

    create_dir_all(path).map_err(|e| Error::CreateFolder(path.to_path_buf(), e.to_string()))?;

    Ok(FolderStatus::Created)
}

/// Lists the images directly inside the folder, in directory listing order.
///
/// Subdirectories are not searched, and files without an allowed extension are skipped.
pub fn find_images(folder: impl AsRef<Path>) -> Result<Vec<PathBuf>, Error> {
    let folder = folder.as_ref();
    let entries =
        read_dir(folder).map_err(|e| Error::ReadFolder(folder.to_path_buf(), e.to_string()))?;
    let mut images = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::ReadFolder(folder.to_path_buf(), e.to_string()))?;

        // Symlinks are not followed, so a link to a directory is kept like any other file.
        let file_type = entry
            .file_type()
            .map_err(|e| Error::ReadFolder(folder.to_path_buf(), e.to_string()))?;

        if file_type.is_dir() {
            continue;
        }

        if is_image(&entry.file_name().to_string_lossy()) {
            images.push(folder.join(entry.file_name()));
        }
    }

    Ok(images)
}

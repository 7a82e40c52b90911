use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// --- Image files in a directory, sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("No image files found in directory {}", dir_path.display());
    }
    Ok(paths)
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
pub fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", image_path.display(), e))?;

    // 3 = 180°, 6 = 90° CW, 8 = 90° CCW; flipped variants are left as is
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {}", orientation, image_path.display());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}

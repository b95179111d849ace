//! File naming and saving of rendered boards.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::RgbaImage;

use crate::error::PadError;

/// Generate an output filename from the first image's designator.
///
/// The designator's stem (see [`designator_stem`]) is slugged to at most 50
/// characters, followed by a unix timestamp and a `.png` extension.
#[must_use]
pub fn auto_filename(designator: &str) -> String {
    let slug = slug(designator_stem(designator), 50);
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("{slug}-{timestamp}.png")
}

/// The part of a designator that names the image: the last path segment of
/// a path or URI, without scheme, query, fragment or extension.
#[must_use]
pub fn designator_stem(designator: &str) -> &str {
    let rest = designator.split_once("://").map_or(designator, |(_, rest)| rest);
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    let segment = rest.trim_end_matches(['/', '\\']).rsplit(['/', '\\']).next().unwrap_or_default();
    match segment.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => segment,
    }
}

/// Lowercase ASCII slug of `input`, hyphen-separated, at most `max_len` bytes.
/// Falls back to `board` when nothing usable remains.
fn slug(input: &str, max_len: usize) -> String {
    let words: Vec<String> = input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();

    let mut out = String::with_capacity(max_len);
    for word in words {
        let sep = usize::from(!out.is_empty());
        if out.len() + sep >= max_len {
            break;
        }
        if sep == 1 {
            out.push('-');
        }
        let room = max_len - out.len();
        out.push_str(&word[..word.len().min(room)]);
    }

    if out.is_empty() {
        "board".to_string()
    } else {
        out
    }
}

/// Resolve the output path: use explicit path or auto-generate.
#[must_use]
pub fn resolve_output_path(explicit: Option<&str>, first_designator: &str) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(auto_filename(first_designator)),
    }
}

/// Encode the board surface as PNG at `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or encoding fails.
pub fn save_surface(surface: &RgbaImage, path: &Path) -> Result<(), PadError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    surface
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PadError::Encode(format!("Failed to save {}: {e}", path.display())))
}

//! Background and font discovery.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Extensions accepted as background images.
pub const BACKGROUND_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Extensions accepted as fonts.
pub const FONT_EXTENSIONS: &[&str] = &["ttf"];

/// Background image file names in `dir`, sorted.
pub fn list_backgrounds(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    list_with_extensions(dir.as_ref(), BACKGROUND_EXTENSIONS)
}

/// Font file names in `dir`, sorted.
pub fn list_fonts(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    list_with_extensions(dir.as_ref(), FONT_EXTENSIONS)
}

/// Resolves a user supplied asset name. An existing file path wins,
/// otherwise the name is looked up in `dir`.
pub fn resolve(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    let direct = Path::new(name);
    if direct.is_file() {
        return direct.to_path_buf();
    }
    dir.as_ref().join(name)
}

/// The named background, or the first one listed in `dir`.
pub fn pick_background(dir: impl AsRef<Path>, name: Option<&str>) -> Result<PathBuf> {
    pick(dir.as_ref(), name, "backgrounds", BACKGROUND_EXTENSIONS)
}

/// The named font, or the first one listed in `dir`.
pub fn pick_font(dir: impl AsRef<Path>, name: Option<&str>) -> Result<PathBuf> {
    pick(dir.as_ref(), name, "fonts", FONT_EXTENSIONS)
}

fn pick(
    dir: &Path,
    name: Option<&str>,
    kind: &'static str,
    extensions: &[&str],
) -> Result<PathBuf> {
    if let Some(name) = name {
        return Ok(resolve(dir, name));
    }
    let first = list_with_extensions(dir, extensions)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoAssets {
            kind,
            dir: dir.to_path_buf(),
        })?;
    log::info!("no {kind} chosen, using {first}");
    Ok(dir.join(first))
}

fn list_with_extensions(dir: &Path, extensions: &[&str]) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            log::warn!("skipping non UTF-8 file name in {}", dir.display());
            continue;
        };
        if has_extension(name, extensions) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

fn has_extension(name: &str, extensions: &[&str]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

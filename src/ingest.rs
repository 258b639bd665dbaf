//! Import externally-sourced sign images into the asset tree.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::{info, warn};

use crate::foundation::error::{SignError, SignResult};
use crate::render::{raster, standardize};

/// Parse a single-letter argument (`A`..`Z`, either case).
pub fn parse_letter(arg: &str) -> SignResult<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(letter.to_ascii_lowercase()),
        _ => Err(SignError::validation(format!(
            "invalid letter '{arg}': expected a single letter A-Z"
        ))),
    }
}

/// Normalize one letter image (flatten alpha onto white, fit into a `size`
/// square) and write `<letter>.png` into `<root>/alphabet/` for every root.
///
/// Returns the paths written.
pub fn import_letter(
    image_path: &Path,
    letter: char,
    roots: &[PathBuf],
    size: u32,
) -> SignResult<Vec<PathBuf>> {
    if !letter.is_ascii_alphabetic() {
        return Err(SignError::validation(format!(
            "invalid letter '{letter}': expected A-Z"
        )));
    }
    if roots.is_empty() {
        return Err(SignError::validation("at least one output root is required"));
    }

    let img = image::open(image_path)
        .with_context(|| format!("open letter image '{}'", image_path.display()))?;
    let flat = standardize::flatten_to_white(&img);
    let letter_card = standardize::fit_center(&flat, size)?;

    let file_name = format!("{}.png", letter.to_ascii_lowercase());
    let mut written = Vec::with_capacity(roots.len());
    for root in roots {
        let path = root.join("alphabet").join(&file_name);
        raster::write_png(
            &path,
            letter_card.as_raw(),
            letter_card.width(),
            letter_card.height(),
            image::ColorType::Rgb8,
        )?;
        written.push(path);
    }

    info!(letter = %letter, files = written.len(), "letter imported");
    Ok(written)
}

/// Result of a batch import over a directory of `A.png`..`Z.png` scans.
#[derive(Clone, Debug, Default)]
pub struct ImportOutcome {
    pub imported: Vec<char>,
    pub missing: Vec<char>,
    /// Letter -> error message for files that failed to process.
    pub failed: Vec<(char, String)>,
}

/// Import every letter image found in `dir` (`A.png` or `a.png` per letter).
/// Missing files are recorded, not fatal; so are per-letter failures.
pub fn import_alphabet_dir(dir: &Path, roots: &[PathBuf], size: u32) -> SignResult<ImportOutcome> {
    if roots.is_empty() {
        return Err(SignError::validation("at least one output root is required"));
    }

    let mut outcome = ImportOutcome::default();
    for letter in 'a'..='z' {
        let upper = dir.join(format!("{}.png", letter.to_ascii_uppercase()));
        let lower = dir.join(format!("{letter}.png"));
        let source = if upper.exists() {
            upper
        } else if lower.exists() {
            lower
        } else {
            outcome.missing.push(letter);
            continue;
        };

        match import_letter(&source, letter, roots, size) {
            Ok(_) => outcome.imported.push(letter),
            Err(err) => {
                warn!(%letter, %err, "failed to import letter image");
                outcome.failed.push((letter, err.to_string()));
            }
        }
    }

    info!(
        imported = outcome.imported.len(),
        missing = outcome.missing.len(),
        failed = outcome.failed.len(),
        "alphabet import finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn parse_letter_accepts_single_letters_only() {
        assert_eq!(parse_letter("A").unwrap(), 'a');
        assert_eq!(parse_letter("z").unwrap(), 'z');
        assert!(parse_letter("ab").is_err());
        assert!(parse_letter("7").is_err());
        assert!(parse_letter("").is_err());
    }

    #[test]
    fn import_letter_writes_standardized_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("scan.png");
        write_test_png(&source, 300, 120);

        let roots = [dir.path().join("site"), dir.path().join("frontend")];
        let written = import_letter(&source, 'B', &roots, 150).unwrap();
        assert_eq!(written.len(), 2);

        for path in &written {
            assert!(path.ends_with("alphabet/b.png"));
            let img = image::open(path).unwrap();
            assert_eq!(img.width(), 150);
            assert_eq!(img.height(), 150);
        }
    }

    #[test]
    fn batch_import_records_missing_letters() {
        let dir = tempfile::tempdir().unwrap();
        write_test_png(&dir.path().join("A.png"), 40, 40);
        write_test_png(&dir.path().join("c.png"), 40, 40);

        let roots = [dir.path().join("out")];
        let outcome = import_alphabet_dir(dir.path(), &roots, 150).unwrap();
        assert_eq!(outcome.imported, vec!['a', 'c']);
        assert_eq!(outcome.missing.len(), 24);
        assert!(outcome.failed.is_empty());
    }
}

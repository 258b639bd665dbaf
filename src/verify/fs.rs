//! Filesystem checks over the generated asset tree.

use std::path::Path;

use anyhow::Context as _;
use image::{Rgb, RgbImage, imageops};
use tracing::debug;

use crate::catalog::dictionary::{self, DICTIONARY};
use crate::foundation::error::{SignError, SignResult};
use crate::manifest::DictionaryManifest;
use crate::render::{raster, standardize};
use crate::verify::report::Report;

/// Signs sampled for the preview montage, matching the front end's
/// most-visited entries.
pub const MONTAGE_SAMPLE: [&str; 10] = [
    "hello", "mother", "father", "eat", "drink", "good", "bad", "yes", "no", "red",
];

/// Check that an alphabet directory holds a valid card for every letter.
///
/// Accepts `<letter>.svg` (must parse) or `<letter>.png` (must decode; a
/// non-square image is a warning).
pub fn check_alphabet_dir(dir: &Path, report: &mut Report) {
    if !dir.is_dir() {
        report.fail(dir.display().to_string(), "directory not found");
        return;
    }

    for letter in 'a'..='z' {
        let svg_path = dir.join(format!("{letter}.svg"));
        let png_path = dir.join(format!("{letter}.png"));
        let label = format!("{}/{letter}", dir.display());

        if svg_path.is_file() {
            match std::fs::read(&svg_path) {
                Ok(bytes) => match raster::parse_svg(&bytes) {
                    Ok(_) => report.pass(format!("{label}.svg")),
                    Err(err) => report.fail(format!("{label}.svg"), err.to_string()),
                },
                Err(err) => report.fail(format!("{label}.svg"), err.to_string()),
            }
        } else if png_path.is_file() {
            match image::open(&png_path) {
                Ok(img) => {
                    debug!(letter = %letter, width = img.width(), height = img.height(), "png checked");
                    if img.width() == img.height() {
                        report.pass(format!("{label}.png"));
                    } else {
                        report.warn(
                            format!("{label}.png"),
                            format!("not square: {}x{}", img.width(), img.height()),
                        );
                    }
                }
                Err(err) => report.fail(format!("{label}.png"), err.to_string()),
            }
        } else {
            report.fail(label, "no svg or png card found");
        }
    }
}

/// Check a dictionary directory and its metadata manifest.
pub fn check_dictionary_dir(dir: &Path, manifest_path: &Path, report: &mut Report) {
    if !dir.is_dir() {
        report.fail(dir.display().to_string(), "directory not found");
        return;
    }

    for entry in &DICTIONARY {
        let path = dir.join(format!("{}.svg", entry.word));
        let label = format!("{}/{}.svg", dir.display(), entry.word);
        if !path.is_file() {
            report.fail(label, "file not found");
            continue;
        }
        match std::fs::read(&path) {
            Ok(bytes) => match raster::parse_svg(&bytes) {
                Ok(_) => report.pass(label),
                Err(err) => report.fail(label, err.to_string()),
            },
            Err(err) => report.fail(label, err.to_string()),
        }
    }

    check_manifest_file(manifest_path, report);
}

/// Validate the manifest on disk and compare per-category counts against the
/// catalog breakdown.
pub fn check_manifest_file(manifest_path: &Path, report: &mut Report) {
    let label = manifest_path.display().to_string();
    let manifest = match DictionaryManifest::from_path(manifest_path) {
        Ok(manifest) => manifest,
        Err(err) => {
            report.fail(label, err.to_string());
            return;
        }
    };
    if let Err(err) = manifest.validate() {
        report.fail(label, err.to_string());
        return;
    }
    report.pass(label);

    for (category, expected) in dictionary::category_counts() {
        let actual = manifest
            .signs
            .values()
            .filter(|record| record.category == category)
            .count();
        if actual == expected {
            report.pass(format!("category '{category}'"));
        } else {
            report.warn(
                format!("category '{category}'"),
                format!("{actual} signs (expected {expected})"),
            );
        }
    }
}

/// Paste sample sign images from `dir` into a labeled-free preview grid and
/// write it to `out`. Returns how many images were placed.
pub fn write_preview_montage(dir: &Path, out: &Path) -> SignResult<usize> {
    const TILE: u32 = 150;
    const GAP: u32 = 20;
    const COLS: u32 = 5;

    let mut tiles = Vec::new();
    for name in MONTAGE_SAMPLE {
        let path = dir.join(format!("{name}.png"));
        if !path.is_file() {
            continue;
        }
        let img = image::open(&path)
            .with_context(|| format!("open montage tile '{}'", path.display()))?;
        let flat = standardize::flatten_to_white(&img);
        tiles.push(standardize::fit_center(&flat, TILE)?);
    }

    if tiles.is_empty() {
        return Err(SignError::check(format!(
            "no sample sign images found under '{}'",
            dir.display()
        )));
    }

    let rows = (tiles.len() as u32).div_ceil(COLS);
    let canvas_w = COLS * TILE + (COLS + 1) * GAP;
    let canvas_h = rows * TILE + (rows + 1) * GAP;
    let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, Rgb([255, 255, 255]));

    for (i, tile) in tiles.iter().enumerate() {
        let col = i as u32 % COLS;
        let row = i as u32 / COLS;
        let x = GAP + col * (TILE + GAP);
        let y = GAP + row * (TILE + GAP);
        imageops::overlay(&mut canvas, tile, i64::from(x), i64::from(y));
    }

    raster::write_png(
        out,
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgb8,
    )?;
    Ok(tiles.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::generate::{self, AlphabetStyle};

    fn generated_root() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        generate::generate_alphabet(&[root.clone()], AlphabetStyle::Illustrated, false).unwrap();
        generate::generate_dictionary(&[root.clone()], false).unwrap();
        (dir, root)
    }

    #[test]
    fn generated_tree_passes_all_checks() {
        let (_keep, root) = generated_root();
        let mut report = Report::default();
        check_alphabet_dir(&root.join("alphabet"), &mut report);
        check_dictionary_dir(
            &root.join("dictionary"),
            &root.join(generate::MANIFEST_FILE),
            &mut report,
        );
        assert!(report.is_success(), "failures: {:?}", report.items());
        // 26 letters + 53 words + manifest + 9 categories.
        assert_eq!(report.len(), 26 + 53 + 1 + 9);
    }

    #[test]
    fn missing_letter_is_reported() {
        let (_keep, root) = generated_root();
        std::fs::remove_file(root.join("alphabet/q.svg")).unwrap();

        let mut report = Report::default();
        check_alphabet_dir(&root.join("alphabet"), &mut report);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn corrupt_svg_is_reported() {
        let (_keep, root) = generated_root();
        std::fs::write(root.join("dictionary/hello.svg"), b"<svg").unwrap();

        let mut report = Report::default();
        check_dictionary_dir(
            &root.join("dictionary"),
            &root.join(generate::MANIFEST_FILE),
            &mut report,
        );
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn montage_requires_at_least_one_sample() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("preview.png");
        assert!(write_preview_montage(dir.path(), &out).is_err());

        let tile = RgbImage::from_pixel(60, 60, Rgb([1, 2, 3]));
        tile.save(dir.path().join("hello.png")).unwrap();
        tile.save(dir.path().join("red.png")).unwrap();
        let placed = write_preview_montage(dir.path(), &out).unwrap();
        assert_eq!(placed, 2);

        let montage = image::open(&out).unwrap();
        assert_eq!(montage.width(), 5 * 150 + 6 * 20);
        assert_eq!(montage.height(), 150 + 2 * 20);
    }
}

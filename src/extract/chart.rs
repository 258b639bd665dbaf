//! Crop a printed sign chart into individual standardized sign images.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbImage;
use tracing::{info, warn};

use crate::catalog::charts::{Cell, ChartLayout};
use crate::catalog::dictionary;
use crate::extract::grid::{self, GridShape};
use crate::foundation::error::{SignError, SignResult};
use crate::manifest::{ExtractedSign, ExtractionManifest};
use crate::render::{raster, standardize};

#[derive(Clone, Copy, Debug)]
pub struct ExtractOpts {
    /// Output edge length in pixels.
    pub size: u32,
    /// Pixels trimmed from every cell edge to avoid grid lines.
    pub padding: u32,
}

impl Default for ExtractOpts {
    fn default() -> Self {
        Self {
            size: 200,
            padding: 8,
        }
    }
}

/// Result of one chart run. Per-cell failures do not abort the run.
#[derive(Clone, Debug, Default)]
pub struct ExtractOutcome {
    /// Sign names written, with their source grid position.
    pub written: Vec<(String, (u32, u32))>,
    /// Sign name -> error message for cells that failed.
    pub failed: Vec<(String, String)>,
}

/// Crop every mapped cell of `layout` out of the chart at `image_path` and
/// write `<name>.png` into each output root.
#[tracing::instrument(skip(layout, roots, opts), fields(chart = layout.name))]
pub fn extract_chart(
    image_path: &Path,
    layout: &ChartLayout,
    roots: &[PathBuf],
    opts: &ExtractOpts,
) -> SignResult<ExtractOutcome> {
    layout.validate()?;
    if roots.is_empty() {
        return Err(SignError::validation("at least one output root is required"));
    }

    let chart = image::open(image_path)
        .with_context(|| format!("open chart image '{}'", image_path.display()))?;
    let chart = standardize::flatten_to_white(&chart);
    let (width, height) = chart.dimensions();
    info!(width, height, cells = layout.cells.len(), "loaded chart image");

    let shape = GridShape {
        cols: layout.cols,
        rows: layout.rows,
    };

    let mut outcome = ExtractOutcome::default();
    for cell in &layout.cells {
        match extract_cell(&chart, shape, cell, opts) {
            Ok(tile) => match write_tile(&tile, cell.name, roots) {
                Ok(()) => outcome
                    .written
                    .push((cell.name.to_string(), (cell.col, cell.row))),
                Err(err) => {
                    warn!(sign = cell.name, %err, "failed to write sign image");
                    outcome.failed.push((cell.name.to_string(), err.to_string()));
                }
            },
            Err(err) => {
                warn!(sign = cell.name, %err, "failed to crop cell");
                outcome.failed.push((cell.name.to_string(), err.to_string()));
            }
        }
    }

    info!(
        written = outcome.written.len(),
        failed = outcome.failed.len(),
        "chart extraction finished"
    );
    Ok(outcome)
}

fn extract_cell(
    chart: &RgbImage,
    shape: GridShape,
    cell: &Cell,
    opts: &ExtractOpts,
) -> SignResult<RgbImage> {
    let (width, height) = chart.dimensions();
    let rect = grid::cell_rect(width, height, shape, cell.col, cell.row, opts.padding)?;
    let cropped =
        image::imageops::crop_imm(chart, rect.x, rect.y, rect.width, rect.height).to_image();
    standardize::fit_center(&cropped, opts.size)
}

fn write_tile(tile: &RgbImage, name: &str, roots: &[PathBuf]) -> SignResult<()> {
    for root in roots {
        let path = root.join(format!("{name}.png"));
        raster::write_png(
            &path,
            tile.as_raw(),
            tile.width(),
            tile.height(),
            image::ColorType::Rgb8,
        )?;
    }
    Ok(())
}

/// Build the metadata manifest for an extraction run. Only signs with catalog
/// metadata are listed.
pub fn extraction_manifest(
    outcome: &ExtractOutcome,
    layout: &ChartLayout,
    image_path: &Path,
) -> ExtractionManifest {
    let mut signs = BTreeMap::new();
    for (name, position) in &outcome.written {
        let Some(entry) = dictionary::lookup(name) else {
            continue;
        };
        signs.insert(
            name.clone(),
            ExtractedSign {
                category: entry.category.to_string(),
                description: entry.description.to_string(),
                difficulty: entry.difficulty,
                usage: entry.usage.to_string(),
                source_image: image_path.display().to_string(),
                grid_position: *position,
            },
        );
    }

    let categories: std::collections::BTreeSet<String> =
        signs.values().map(|sign| sign.category.clone()).collect();

    ExtractionManifest {
        chart: layout.name.to_string(),
        total_cells: layout.cells.len(),
        extracted: outcome.written.len(),
        categories: categories.into_iter().collect(),
        signs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::charts;

    #[test]
    fn manifest_skips_cells_without_catalog_metadata() {
        let layout = charts::layout("dictionary").unwrap();
        let outcome = ExtractOutcome {
            written: vec![
                ("mother".to_string(), (0, 4)),
                ("hospital".to_string(), (1, 0)),
            ],
            failed: vec![],
        };
        let manifest = extraction_manifest(&outcome, &layout, Path::new("dict1.jpg"));
        assert_eq!(manifest.extracted, 2);
        assert!(manifest.signs.contains_key("mother"));
        assert!(!manifest.signs.contains_key("hospital"));
        assert_eq!(manifest.categories, vec!["family".to_string()]);
    }
}

use std::path::Path;

use image::{Rgb, RgbImage};

use signforge::catalog::charts;
use signforge::extract::chart::{ExtractOpts, extract_chart, extraction_manifest};

fn cell_color(col: u32, row: u32) -> Rgb<u8> {
    Rgb([40 * col as u8 + 20, 80 * row as u8 + 20, 200])
}

/// Paint a synthetic 3x2 chart where every cell has a distinct flat color.
fn synthetic_chart(path: &Path, cell: u32) {
    let mut img = RgbImage::new(3 * cell, 2 * cell);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = cell_color(x / cell, y / cell);
    }
    img.save(path).unwrap();
}

#[test]
fn illustrated_chart_crops_standardize_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let chart_path = dir.path().join("chart.png");
    synthetic_chart(&chart_path, 100);

    let layout = charts::layout("illustrated").unwrap();
    let roots = [dir.path().join("site"), dir.path().join("frontend")];
    let opts = ExtractOpts {
        size: 120,
        padding: 5,
    };

    let outcome = extract_chart(&chart_path, &layout, &roots, &opts).unwrap();
    assert_eq!(outcome.written.len(), 6);
    assert!(outcome.failed.is_empty());

    for cell in &layout.cells {
        for root in &roots {
            let path = root.join(format!("{}.png", cell.name));
            let img = image::open(&path).unwrap().to_rgb8();
            assert_eq!(img.dimensions(), (120, 120));
            // Flat-color source cell survives crop + resize in the middle of
            // the tile (allow one count of resampling rounding).
            let got = img.get_pixel(60, 60);
            let want = cell_color(cell.col, cell.row);
            for channel in 0..3 {
                assert!(
                    got[channel].abs_diff(want[channel]) <= 1,
                    "{}: got {got:?}, want {want:?}",
                    cell.name
                );
            }
        }
    }
}

#[test]
fn extraction_manifest_records_positions_and_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let chart_path = dir.path().join("chart.png");
    synthetic_chart(&chart_path, 60);

    let layout = charts::layout("illustrated").unwrap();
    let roots = [dir.path().join("out")];
    let outcome = extract_chart(&chart_path, &layout, &roots, &ExtractOpts::default()).unwrap();

    let manifest = extraction_manifest(&outcome, &layout, &chart_path);
    assert_eq!(manifest.chart, "illustrated");
    assert_eq!(manifest.extracted, 6);
    // All six illustrated signs carry catalog metadata.
    assert_eq!(manifest.signs.len(), 6);
    assert_eq!(manifest.signs["goodbye"].grid_position, (1, 0));
    assert_eq!(manifest.signs["thank_you"].category, "greetings");

    let manifest_path = dir.path().join("extraction.json");
    manifest.write(&manifest_path).unwrap();
    let raw = std::fs::read_to_string(&manifest_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["extracted"], 6);
    assert_eq!(value["signs"]["yes"]["difficulty"], "easy");
}

#[test]
fn oversized_padding_fails_cells_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let chart_path = dir.path().join("chart.png");
    synthetic_chart(&chart_path, 20);

    let layout = charts::layout("illustrated").unwrap();
    let roots = [dir.path().join("out")];
    let opts = ExtractOpts {
        size: 50,
        padding: 30,
    };

    let outcome = extract_chart(&chart_path, &layout, &roots, &opts).unwrap();
    assert!(outcome.written.is_empty());
    assert_eq!(outcome.failed.len(), 6);
}

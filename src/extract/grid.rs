//! Cell-rectangle arithmetic for grid-laid-out sign charts.

use crate::foundation::error::{SignError, SignResult};

/// Grid shape of a chart image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub cols: u32,
    pub rows: u32,
}

/// Pixel rectangle of one grid cell after padding and clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the crop rectangle for cell `(col, row)`.
///
/// Cell size is the integer division of the image extent by the grid shape;
/// `padding` is trimmed from every edge of the cell to avoid grid lines. The
/// result is clamped to the image extents. A cell that collapses to zero area
/// is an error so callers can skip it and keep processing.
pub fn cell_rect(
    img_width: u32,
    img_height: u32,
    shape: GridShape,
    col: u32,
    row: u32,
    padding: u32,
) -> SignResult<CellRect> {
    if shape.cols == 0 || shape.rows == 0 {
        return Err(SignError::validation("grid must have cols>0 and rows>0"));
    }
    if col >= shape.cols || row >= shape.rows {
        return Err(SignError::validation(format!(
            "cell ({col}, {row}) is outside the {}x{} grid",
            shape.cols, shape.rows
        )));
    }

    let cell_w = img_width / shape.cols;
    let cell_h = img_height / shape.rows;
    if cell_w == 0 || cell_h == 0 {
        return Err(SignError::validation(format!(
            "image {img_width}x{img_height} is too small for a {}x{} grid",
            shape.cols, shape.rows
        )));
    }

    let left = (col * cell_w + padding).min(img_width);
    let top = (row * cell_h + padding).min(img_height);
    let right = ((col + 1) * cell_w).saturating_sub(padding).min(img_width);
    let bottom = ((row + 1) * cell_h).saturating_sub(padding).min(img_height);

    if right <= left || bottom <= top {
        return Err(SignError::validation(format!(
            "cell ({col}, {row}) collapses to an empty crop with padding {padding}"
        )));
    }

    Ok(CellRect {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE: GridShape = GridShape { cols: 4, rows: 2 };

    #[test]
    fn cells_tile_the_image_without_padding() {
        let rect = cell_rect(400, 200, SHAPE, 0, 0, 0).unwrap();
        assert_eq!(rect, CellRect { x: 0, y: 0, width: 100, height: 100 });

        let rect = cell_rect(400, 200, SHAPE, 3, 1, 0).unwrap();
        assert_eq!(rect, CellRect { x: 300, y: 100, width: 100, height: 100 });
    }

    #[test]
    fn padding_trims_every_edge() {
        let rect = cell_rect(400, 200, SHAPE, 1, 0, 5).unwrap();
        assert_eq!(rect, CellRect { x: 105, y: 5, width: 90, height: 90 });
    }

    #[test]
    fn remainder_pixels_stay_outside_the_last_cell() {
        // 410/4 = 102 per cell; the 2 leftover columns are never cropped.
        let rect = cell_rect(410, 200, SHAPE, 3, 0, 0).unwrap();
        assert_eq!(rect.x + rect.width, 408);
    }

    #[test]
    fn oversized_padding_is_an_error_not_a_panic() {
        assert!(cell_rect(400, 200, SHAPE, 0, 0, 60).is_err());
    }

    #[test]
    fn out_of_grid_cells_are_rejected() {
        assert!(cell_rect(400, 200, SHAPE, 4, 0, 0).is_err());
        assert!(cell_rect(400, 200, SHAPE, 0, 2, 0).is_err());
    }

    #[test]
    fn tiny_images_are_rejected() {
        assert!(cell_rect(3, 200, SHAPE, 0, 0, 0).is_err());
    }
}

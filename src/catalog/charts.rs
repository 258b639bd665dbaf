//! Named grid layouts for the printed sign charts the extractor crops.
//!
//! Cells are listed row-major, exactly as the signs appear on the chart;
//! trailing cells of the last row may be unused.

use crate::foundation::error::{SignError, SignResult};

/// One chart cell mapped to the sign it contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub name: &'static str,
    /// 0-based column.
    pub col: u32,
    /// 0-based row.
    pub row: u32,
}

/// Grid layout of a printed sign chart.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub name: &'static str,
    pub cols: u32,
    pub rows: u32,
    pub cells: Vec<Cell>,
}

impl ChartLayout {
    pub fn validate(&self) -> SignResult<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(SignError::validation(format!(
                "chart '{}' must have cols>0 and rows>0",
                self.name
            )));
        }
        if self.cells.len() as u64 > u64::from(self.cols) * u64::from(self.rows) {
            return Err(SignError::validation(format!(
                "chart '{}' maps more cells than the grid holds",
                self.name
            )));
        }

        let mut seen = std::collections::BTreeSet::new();
        for cell in &self.cells {
            if cell.name.is_empty() {
                return Err(SignError::validation(format!(
                    "chart '{}' has an unnamed cell at ({}, {})",
                    self.name, cell.col, cell.row
                )));
            }
            if cell.col >= self.cols || cell.row >= self.rows {
                return Err(SignError::validation(format!(
                    "chart '{}' cell '{}' at ({}, {}) is outside the {}x{} grid",
                    self.name, cell.name, cell.col, cell.row, self.cols, self.rows
                )));
            }
            if !seen.insert(cell.name) {
                return Err(SignError::validation(format!(
                    "chart '{}' maps '{}' twice",
                    self.name, cell.name
                )));
            }
        }
        Ok(())
    }
}

const ALPHABET: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

// Order matches the printed chart the crops were tuned against.
const DICTIONARY_CHART: [&str; 48] = [
    "family", "hospital", "operation", "injection", "cry", "yes",
    "doctor", "jesus", "pray", "priest", "walk", "help",
    "hearing_aid", "wednesday", "thursday", "friday", "suddenly", "feel",
    "sick", "drink", "eat", "children", "candy", "apple",
    "mother", "father", "sister", "brother", "friend", "love",
    "good", "bad", "happy", "sad", "hot", "cold",
    "big", "small", "more", "finished", "water", "milk",
    "one", "two", "three", "five", "ten", "red",
];

const COMMON_CHART: [&str; 48] = [
    "hello", "thank_you", "please", "sorry", "goodbye", "yes", "no", "help",
    "mother", "father", "sister", "brother", "family", "friend", "love", "baby",
    "eat", "drink", "sleep", "work", "play", "study", "read", "write",
    "good", "bad", "happy", "sad", "hot", "cold", "big", "small",
    "red", "blue", "green", "yellow", "black", "white", "one", "two",
    "three", "five", "ten", "water", "milk", "bread", "more", "finished",
];

const ILLUSTRATED_CHART: [&str; 6] = ["hello", "goodbye", "please", "thank_you", "yes", "no"];

fn row_major(names: &[&'static str], cols: u32) -> Vec<Cell> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Cell {
            name,
            col: i as u32 % cols,
            row: i as u32 / cols,
        })
        .collect()
}

/// Names of all built-in chart layouts.
pub const CHART_NAMES: [&str; 5] = [
    "alphabet",
    "alphabet-6x5",
    "dictionary",
    "common",
    "illustrated",
];

/// Look up a built-in chart layout by name.
pub fn layout(name: &str) -> Option<ChartLayout> {
    let (name, cols, rows, names): (&'static str, u32, u32, &[&'static str]) = match name {
        "alphabet" => ("alphabet", 7, 4, &ALPHABET),
        "alphabet-6x5" => ("alphabet-6x5", 6, 5, &ALPHABET),
        "dictionary" => ("dictionary", 6, 8, &DICTIONARY_CHART),
        "common" => ("common", 8, 6, &COMMON_CHART),
        "illustrated" => ("illustrated", 3, 2, &ILLUSTRATED_CHART),
        _ => return None,
    };
    Some(ChartLayout {
        name,
        cols,
        rows,
        cells: row_major(names, cols),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_layout_validates() {
        for name in CHART_NAMES {
            let layout = layout(name).unwrap();
            layout.validate().unwrap();
        }
        assert!(layout("unknown").is_none());
    }

    #[test]
    fn alphabet_layout_is_row_major_with_trailing_gap() {
        let chart = layout("alphabet").unwrap();
        assert_eq!(chart.cells.len(), 26);
        assert_eq!(chart.cells[0], Cell { name: "a", col: 0, row: 0 });
        assert_eq!(chart.cells[6], Cell { name: "g", col: 6, row: 0 });
        assert_eq!(chart.cells[7], Cell { name: "h", col: 0, row: 1 });
        // z is the 26th cell; the last two grid cells stay unmapped.
        assert_eq!(chart.cells[25], Cell { name: "z", col: 4, row: 3 });
    }

    #[test]
    fn validate_rejects_out_of_bounds_and_duplicates() {
        let mut chart = layout("illustrated").unwrap();
        chart.cells.push(Cell { name: "extra", col: 3, row: 0 });
        assert!(chart.validate().is_err());

        let mut chart = layout("illustrated").unwrap();
        chart.cells[1] = Cell { name: "hello", col: 1, row: 0 };
        assert!(chart.validate().is_err());
    }

    #[test]
    fn chart_words_with_metadata_resolve_in_the_catalog() {
        // Not every printed cell has catalog metadata, but the dictionary
        // words the front end links to must.
        let chart = layout("common").unwrap();
        for cell in &chart.cells {
            if crate::catalog::dictionary::lookup(cell.name).is_none() {
                panic!("common chart cell '{}' has no catalog entry", cell.name);
            }
        }
    }
}

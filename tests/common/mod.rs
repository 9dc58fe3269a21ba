#![allow(dead_code)] // Not every test file uses every helper

use peertally::column::column_to_index;
use peertally::Grid;

/// Columns A..=BI, enough to reach the sentence-only column.
pub const WIDTH: usize = 61;

pub fn col(label: &str) -> usize {
    column_to_index(label).unwrap()
}

/// Builds a survey grid addressed by column letters.
pub struct GridBuilder {
    rows: Grid,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            rows: vec![vec![String::new(); WIDTH]],
        }
    }

    pub fn question(mut self, label: &str, text: &str) -> Self {
        self.rows[0][col(label)] = text.to_string();
        self
    }

    /// Full-width response row; unspecified cells are blank.
    pub fn row(mut self, cells: &[(&str, &str)]) -> Self {
        let mut row = vec![String::new(); WIDTH];
        for (label, value) in cells {
            row[col(label)] = value.to_string();
        }
        self.rows.push(row);
        self
    }

    /// Response row with exactly the given cells, starting at column A.
    pub fn raw_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn build(self) -> Grid {
        self.rows
    }
}

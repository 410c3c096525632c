//! Fixed-size rectangular character grid.
//!
//! Cells are stored row-major in one contiguous `Vec<char>`; a row is the
//! slice `cells[r * cols..(r + 1) * cols]`. Dimensions are set at construction
//! and nothing in the public API can change them.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("grid rows have zero width")]
    ZeroWidth,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from row strings. Width is counted in `char`s; every row
    /// must match the first.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut count = 0usize;
        for (row, text) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(text.as_ref().chars());
            let found = cells.len() - before;
            match cols {
                None if found == 0 => return Err(GridError::ZeroWidth),
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            count += 1;
        }
        let cols = cols.ok_or(GridError::Empty)?;
        Ok(Self {
            cells,
            rows: count,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `r` as a slice. Panics when `r >= rows()`, like slice indexing.
    pub fn row(&self, r: usize) -> &[char] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[char]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.iter_rows().map(|row| row.iter().collect()).collect()
    }

    /// Multiset of the grid's characters.
    pub fn char_counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for &c in &self.cells {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [char] {
        &mut self.cells
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, char> {
        self.cells.chunks_exact_mut(self.cols)
    }
}

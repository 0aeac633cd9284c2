use serde::{Deserialize, Serialize};

/// Blank display character for unmarked cells
pub const BLANK: char = ' ';

/// A square grid of display characters
///
/// Created fresh for each render pass, owned exclusively by it, and
/// discarded after the text dump. Writes outside the grid are dropped
/// silently: clipping is the expected fate of off-screen geometry, never
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharGrid {
    cells: Vec<Vec<char>>,
    size: usize,
}

impl CharGrid {
    /// Create a new blank grid with the given dimension
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![BLANK; size]; size],
            size,
        }
    }

    /// Grid dimension (cells per side)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the character at the given cell, or `None` if out of range
    pub fn get(&self, row: i32, col: i32) -> Option<char> {
        if self.in_range(row) && self.in_range(col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Write a character at the given cell.
    ///
    /// Out-of-range writes are dropped. Returns whether the write landed.
    pub fn set(&mut self, row: i32, col: i32, ch: char) -> bool {
        if self.in_range(row) && self.in_range(col) {
            self.cells[row as usize][col as usize] = ch;
            true
        } else {
            false
        }
    }

    /// Serialize the grid into display lines, top row first.
    ///
    /// Always exactly `size` lines of exactly `size` characters.
    pub fn to_lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }

    fn in_range(&self, index: i32) -> bool {
        index >= 0 && (index as usize) < self.size
    }
}

//! Hex board: cell colors plus the ordered set of still-empty cells.
//!
//! Cells are addressed either by a 0-indexed `(row, col)` [`Point`] or by
//! their flattened index `row * size + col`.

use std::fmt;

use crate::constants::HEX_DELTA;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Connects the left and right columns.
    Blue,
    /// Connects the top and bottom rows.
    Red,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Blue => write!(f, "Blue"),
            Color::Red => write!(f, "Red"),
        }
    }
}

/// A cell as `(row, col)`, 0-indexed.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
    /// Flattened indices of empty cells, ascending.
    open: Vec<usize>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
            open: (0..size * size).collect(),
        }
    }

    #[inline]
    pub fn index(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn point(&self, index: usize) -> Point {
        (index / self.size, index % self.size)
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// Stone at `point`, `None` for empty or off-board cells.
    pub fn get(&self, point: Point) -> Option<Color> {
        if !self.contains(point) {
            return None;
        }
        self.cells[self.index(point)]
    }

    #[inline]
    pub fn get_index(&self, index: usize) -> Option<Color> {
        self.cells[index]
    }

    /// Puts a stone on an empty cell and drops it from the open set.
    ///
    /// The caller guarantees the cell is on the board and empty; breaking
    /// that contract is a bug and panics.
    pub fn place_stone(&mut self, point: Point, color: Color) {
        let idx = self.index(point);
        assert!(
            self.cells[idx].is_none(),
            "place_stone on occupied cell {point:?}"
        );
        self.cells[idx] = Some(color);
        match self.open.binary_search(&idx) {
            Ok(pos) => {
                self.open.remove(pos);
            }
            Err(_) => panic!("cell {point:?} was empty but missing from the open set"),
        }
    }

    /// Neighbouring cells of `point`: 6 inside, 4 on a non-corner edge,
    /// 2 or 3 in the corners.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        let size = self.size as isize;
        HEX_DELTA.into_iter().filter_map(move |(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r >= 0 && r < size && c >= 0 && c < size {
                Some((r as usize, c as usize))
            } else {
                None
            }
        })
    }

    /// Flattened indices of the empty cells, in index order.
    pub fn open_cells(&self) -> &[usize] {
        &self.open
    }

    pub fn empty_count(&self) -> usize {
        self.open.len()
    }

    pub fn is_full(&self) -> bool {
        self.open.is_empty()
    }

    /// Writes a cell without touching the open set.
    ///
    /// Only rollout workspaces use this: they fill and clear cells in bulk
    /// and are thrown away afterwards, so their open set is never consulted.
    #[inline]
    pub(crate) fn mark(&mut self, index: usize, color: Option<Color>) {
        self.cells[index] = color;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column labels, tens digit on its own line for wide boards.
        if self.size >= 10 {
            write!(f, "    ")?;
            for col in 1..=self.size {
                let tens = if col >= 10 {
                    char::from_digit((col / 10) as u32, 10).unwrap_or(' ')
                } else {
                    ' '
                };
                write!(f, "{tens} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "    ")?;
        for col in 1..=self.size {
            write!(f, "{} ", col % 10)?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{}{:>2}  ", " ".repeat(row), row + 1)?;
            for col in 0..self.size {
                let ch = self.get((row, col)).map_or('.', Color::symbol);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

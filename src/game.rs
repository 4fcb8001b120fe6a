//! Game session: a board and its connectivity tracker, kept in step.
//!
//! Every stone placed through [`Game::play`] (or [`Game::place_stone`]
//! followed by [`Game::connect_stones`]) is merged with its same-colored
//! neighbours, so [`Game::has_won`] only needs to compare chain roots along
//! two opposite edges.

use log::debug;

use crate::board::{Board, Color, Point};
use crate::error::HexError;
use crate::union_find::ConnectivityTracker;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    tracker: ConnectivityTracker,
}

impl Game {
    /// A fresh session: every cell empty, every cell its own chain.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            tracker: ConnectivityTracker::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.board.size
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tracker(&self) -> &ConnectivityTracker {
        &self.tracker
    }

    pub fn empty_count(&self) -> usize {
        self.board.empty_count()
    }

    pub fn stone_at(&self, point: Point) -> Option<Color> {
        self.board.get(point)
    }

    /// Records a stone without connecting it; [`Game::connect_stones`] must
    /// follow.
    pub fn place_stone(&mut self, point: Point, color: Color) {
        self.board.place_stone(point, color);
    }

    /// Merges the stone at `point` with every neighbour of the same color.
    /// Calling it again for the same stone changes nothing.
    pub fn connect_stones(&mut self, point: Point) {
        let idx = self.board.index(point);
        self.connect_index(idx);
    }

    pub(crate) fn connect_index(&mut self, idx: usize) {
        let Some(color) = self.board.get_index(idx) else {
            return;
        };
        let point = self.board.point(idx);
        for n in self.board.neighbors(point) {
            if self.board.get(n) == Some(color) {
                self.tracker.union(self.board.index(n), idx, color);
            }
        }
    }

    /// Validated placement: rejects off-board and occupied cells, then
    /// places and connects the stone.
    pub fn play(&mut self, point: Point, color: Color) -> Result<(), HexError> {
        let (row, col) = point;
        if !self.board.contains(point) {
            return Err(HexError::OutOfBounds {
                row: row + 1,
                col: col + 1,
                size: self.size(),
            });
        }
        if self.board.get(point).is_some() {
            return Err(HexError::Occupied {
                row: row + 1,
                col: col + 1,
            });
        }
        self.place_stone(point, color);
        self.connect_stones(point);
        debug!("{color} plays {}", str_point(point));
        Ok(())
    }

    /// Whether `color` has a chain joining its two goal edges: left and
    /// right columns for Blue, top and bottom rows for Red.
    ///
    /// Collects the roots of `color`'s stones on the first edge and reports
    /// a win as soon as a stone on the opposite edge shares one of them.
    pub fn has_won(&mut self, color: Color) -> bool {
        let n = self.board.size;
        let edge_cell = |k: usize, far: bool| -> usize {
            match color {
                Color::Blue => k * n + if far { n - 1 } else { 0 },
                Color::Red => k + if far { (n - 1) * n } else { 0 },
            }
        };

        let mut roots = Vec::with_capacity(n);
        for k in 0..n {
            let idx = edge_cell(k, false);
            if self.board.get_index(idx) == Some(color) {
                roots.push(self.tracker.find(idx));
            }
        }
        if roots.is_empty() {
            return false;
        }
        for k in 0..n {
            let idx = edge_cell(k, true);
            if self.board.get_index(idx) == Some(color) && roots.contains(&self.tracker.find(idx)) {
                return true;
            }
        }
        false
    }

    /// The color that has completed its connection, if any.
    pub fn winner(&mut self) -> Option<Color> {
        [Color::Blue, Color::Red]
            .into_iter()
            .find(|&color| self.has_won(color))
    }

    /// Overwrites this session with a copy of `other`, keeping allocations.
    pub fn restore_from(&mut self, other: &Game) {
        self.board.clone_from(&other.board);
        self.tracker.restore_from(&other.tracker);
        debug_assert_eq!(self.tracker.len(), self.size() * self.size());
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn tracker_mut(&mut self) -> &mut ConnectivityTracker {
        &mut self.tracker
    }
}

/// Parses a 1-indexed `"<row> <col>"` (or `"<row>,<col>"`) into a 0-indexed
/// point. Bounds are checked later by [`Game::play`].
pub fn parse_point(text: &str) -> Result<Point, HexError> {
    let invalid = || HexError::InvalidCoordinate(text.trim().to_string());
    let mut parts = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());

    let mut next = || -> Result<usize, HexError> {
        let value: usize = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        value.checked_sub(1).ok_or_else(invalid)
    };
    let row = next()?;
    let col = next()?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((row, col))
}

/// Formats a 0-indexed point the way the player types it.
pub fn str_point((row, col): Point) -> String {
    format!("({}, {})", row + 1, col + 1)
}

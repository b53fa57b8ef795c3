use crate::error::MarkError;
use serde::{Deserialize, Serialize};

/// Number of cells along each side of the board.
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The content of a single cell.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell<P> {
    /// Nobody has marked the cell yet.
    #[default]
    Empty,
    /// The cell belongs to the given participant for the rest of the match.
    MarkedBy(P),
}

impl<P> Cell<P> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the owner of the cell, if it is marked.
    pub fn owner(&self) -> Option<&P> {
        match self {
            Cell::Empty => None,
            Cell::MarkedBy(participant) => Some(participant),
        }
    }
}

/// One of the eight triples of cells that decide a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Cells `(i, 0)`, `(i, 1)`, `(i, 2)`.
    Row(usize),
    /// Cells `(0, i)`, `(1, i)`, `(2, i)`.
    Column(usize),
    /// Cells `(0, 0)`, `(1, 1)`, `(2, 2)`.
    Diagonal,
    /// Cells `(0, 2)`, `(1, 1)`, `(2, 0)`.
    AntiDiagonal,
}

impl Line {
    /// All lines in the order they are checked: each row followed by the column
    /// with the same index, then both diagonals.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Column(0),
        Line::Row(1),
        Line::Column(1),
        Line::Row(2),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The `(x, y)` addresses of the three cells on this line.
    pub fn cells(self) -> [(usize, usize); BOARD_SIZE] {
        match self {
            Line::Row(i) => [(i, 0), (i, 1), (i, 2)],
            Line::Column(i) => [(0, i), (1, i), (2, i)],
            Line::Diagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }
}

/// Where a match stands. Derived from the board on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus<P> {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A line is fully owned by the given participant.
    Won(P),
    /// Every cell is marked and no line is complete.
    Drawn,
}

impl<P> MatchStatus<P> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

/// The 3x3 grid of a match, addressed as `cells[x][y]`.
///
/// Marks are permanent: a cell can go from `Empty` to `MarkedBy` exactly once and
/// there is no way back. The only mutator is crate-private so that a board handed
/// out by a match can be inspected but never edited around the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board<P> {
    cells: [[Cell<P>; BOARD_SIZE]; BOARD_SIZE],
}

impl<P> Default for Board<P> {
    fn default() -> Self {
        Board::new()
    }
}

impl<P> Board<P> {
    /// Creates a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| Cell::Empty)),
        }
    }

    /// Returns the cell at `(x, y)`, or `None` outside the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell<P>> {
        self.cells.get(x)?.get(y)
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterates the addresses of the cells that can still be marked, row by row.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_empty())
                .map(move |(y, _)| (x, y))
        })
    }

    fn at(&self, (x, y): (usize, usize)) -> &Cell<P> {
        &self.cells[x][y]
    }
}

impl<P: Clone> Board<P> {
    /// Returns an owned copy of the grid.
    pub fn snapshot(&self) -> [[Cell<P>; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.clone()
    }
}

impl<P: PartialEq> Board<P> {
    /// Marks `(x, y)` for `participant`.
    ///
    /// Fails without touching the board when the cell is outside the grid or already marked.
    pub(crate) fn mark(&mut self, participant: P, x: usize, y: usize) -> Result<(), MarkError> {
        let cell = self
            .cells
            .get_mut(x)
            .and_then(|row| row.get_mut(y))
            .ok_or(MarkError::OutOfBounds { x, y })?;
        if !cell.is_empty() {
            return Err(MarkError::CellOccupied { x, y });
        }
        *cell = Cell::MarkedBy(participant);
        Ok(())
    }

    /// Returns the first line whose three cells are marked by the same participant.
    pub fn winning_line(&self) -> Option<Line> {
        Line::ALL.into_iter().find(|line| {
            let [first, second, third] = line.cells();
            Self::is_line_marked_same(self.at(first), self.at(second), self.at(third))
        })
    }

    /// Returns true if any row, column or diagonal is owned by a single participant.
    pub fn has_winner(&self) -> bool {
        self.winning_line().is_some()
    }

    /// Returns the owner of the first winning line.
    pub fn winner(&self) -> Option<&P> {
        let [first, _, _] = self.winning_line()?.cells();
        self.at(first).owner()
    }

    // Three empty cells are equal to each other but never a win.
    fn is_line_marked_same(first: &Cell<P>, second: &Cell<P>, third: &Cell<P>) -> bool {
        !first.is_empty() && first == second && first == third
    }
}

impl<P: PartialEq + Clone> Board<P> {
    /// Computes the status of the board. A win is checked before fullness, so a move
    /// that completes a line and fills the last cell is a win and not a draw.
    pub fn status(&self) -> MatchStatus<P> {
        if let Some(winner) = self.winner() {
            return MatchStatus::Won(winner.clone());
        }
        if self.is_full() {
            return MatchStatus::Drawn;
        }
        MatchStatus::InProgress
    }
}

use crate::board::{Board, Cell, MatchStatus};
use crate::error::{MarkError, RegionError};
use crate::region::{AnchorCoordinates, Coordinate, Plane, map_region};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Which of the two registration slots a participant occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// The other seat.
    pub fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// One tic-tac-toe match: the board, its two participants, the anchors of its cells and
/// whoever marked last.
///
/// The engine deliberately stays thin. `mark_cell` neither checks that the acting player
/// is registered nor that it is their turn; callers decide that with
/// [`Match::is_participant`] and [`Match::last_marker`], or wrap the match in a
/// [`crate::turn::TurnGuard`]. Reaching a win or a draw does not lock the board either,
/// callers are expected to check [`Match::has_winner`] and [`Match::is_board_full`] (in
/// that order) after every mark and stop once one of them is true.
#[derive(Debug, Clone)]
pub struct Match<P, W> {
    first: P,
    second: P,
    board: Board<P>,
    anchors: AnchorCoordinates<W>,
    last_marker: Option<P>,
}

/// A builder for creating instances of `Match`.
pub struct MatchBuilder<P, W> {
    first: P,
    second: P,
    lower: Coordinate<W>,
    upper: Coordinate<W>,
    plane: Plane,
}

impl<P, W> MatchBuilder<P, W>
where
    P: PartialEq + Clone + Debug,
    W: PartialEq + Clone + Debug,
{
    /// Creates a new builder for two participants playing on the region between `lower`
    /// and `upper`.
    pub fn new(first: P, second: P, lower: Coordinate<W>, upper: Coordinate<W>) -> Self {
        Self {
            first,
            second,
            lower,
            upper,
            plane: Plane::default(),
        }
    }

    /// Sets the pair of axes the board region spans. Defaults to [`Plane::XY`].
    pub fn with_plane(mut self, plane: Plane) -> Self {
        self.plane = plane;
        self
    }

    /// Validates the region and builds the match.
    pub fn build(self) -> Result<Match<P, W>, RegionError<W>> {
        let anchors = map_region(&self.lower, &self.upper, self.plane)?;
        tracing::debug!(first = ?self.first, second = ?self.second, "match created");
        Ok(Match {
            first: self.first,
            second: self.second,
            board: Board::new(),
            anchors,
            last_marker: None,
        })
    }
}

impl<P, W> Match<P, W>
where
    P: PartialEq + Clone + Debug,
    W: PartialEq + Clone + Debug,
{
    /// Returns a new builder for `Match`.
    pub fn builder(
        first: P,
        second: P,
        lower: Coordinate<W>,
        upper: Coordinate<W>,
    ) -> MatchBuilder<P, W> {
        MatchBuilder::new(first, second, lower, upper)
    }

    /// Creates a match on an upright region spanning x and y.
    ///
    /// Fails if the corners are in different spaces or do not form a 3x3x1 slab.
    pub fn new(
        first: P,
        second: P,
        lower: Coordinate<W>,
        upper: Coordinate<W>,
    ) -> Result<Self, RegionError<W>> {
        MatchBuilder::new(first, second, lower, upper).build()
    }

    /// Marks cell `(x, y)` for `participant` and records them as the last marker.
    ///
    /// An occupied or out-of-range cell is rejected and nothing changes, including the
    /// last marker.
    pub fn mark_cell(&mut self, participant: P, x: usize, y: usize) -> Result<(), MarkError> {
        match self.board.mark(participant.clone(), x, y) {
            Ok(()) => {
                tracing::debug!(?participant, x, y, "cell marked");
                self.last_marker = Some(participant);
                Ok(())
            }
            Err(error) => {
                tracing::debug!(?participant, %error, "mark rejected");
                Err(error)
            }
        }
    }
}

impl<P: PartialEq, W> Match<P, W> {
    /// Returns true if `candidate` is one of the two participants.
    pub fn is_participant(&self, candidate: &P) -> bool {
        *candidate == self.first || *candidate == self.second
    }

    /// Returns the seat `candidate` is registered in. The first seat wins if both
    /// participants compare equal.
    pub fn seat_of(&self, candidate: &P) -> Option<Seat> {
        if *candidate == self.first {
            Some(Seat::First)
        } else if *candidate == self.second {
            Some(Seat::Second)
        } else {
            None
        }
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Returns true if a row, a column or a diagonal is owned by one participant.
    pub fn has_winner(&self) -> bool {
        self.board.has_winner()
    }

    /// Returns the participant owning the first complete line.
    pub fn winner(&self) -> Option<&P> {
        self.board.winner()
    }
}

impl<P: PartialEq + Clone, W> Match<P, W> {
    pub fn status(&self) -> MatchStatus<P> {
        self.board.status()
    }
}

impl<P, W> Match<P, W> {
    /// Returns the participant who made the last successful mark.
    pub fn last_marker(&self) -> Option<&P> {
        self.last_marker.as_ref()
    }

    pub fn participants(&self) -> (&P, &P) {
        (&self.first, &self.second)
    }

    /// Returns the participant sitting in `seat`.
    pub fn participant(&self, seat: Seat) -> &P {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell<P>> {
        self.board.cell(x, y)
    }

    /// Number of successful marks so far.
    pub fn marks_applied(&self) -> usize {
        self.board.marked_count()
    }

    /// Returns the physical anchor of cell `(x, y)`. Anchors never change during a match.
    pub fn anchor_coordinate_for(&self, x: usize, y: usize) -> Option<&Coordinate<W>> {
        self.anchors.get(x, y)
    }

    pub fn anchors(&self) -> &AnchorCoordinates<W> {
        &self.anchors
    }
}

impl<P, W: PartialEq> Match<P, W> {
    /// Finds the cell anchored at `coordinate`, e.g. the block a player clicked.
    pub fn cell_at(&self, coordinate: &Coordinate<W>) -> Option<(usize, usize)> {
        self.anchors.cell_at(coordinate)
    }
}

use crate::game::Seat;
use crate::region::{Coordinate, Plane};
use thiserror::Error;

/// Reasons a region cannot be turned into a set of anchor coordinates.
///
/// Both variants only occur while a match is being built; once a `Match` exists
/// its anchors are fixed and can no longer fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError<W> {
    /// The two corners live in different spaces (worlds).
    #[error("region corners belong to different spaces: {lower:?} and {upper:?}")]
    CrossSpace {
        /// The lower corner as given.
        lower: W,
        /// The upper corner as given.
        upper: W,
    },

    /// The corners do not describe an exact 3x3x1 slab on the configured plane.
    #[error("region {lower:?} .. {upper:?} is not a 3x3 slab on plane {plane:?}")]
    InvalidShape {
        /// The plane the slab was expected to span.
        plane: Plane,
        /// The lower corner as given.
        lower: Coordinate<W>,
        /// The upper corner as given.
        upper: Coordinate<W>,
    },
}

/// Reasons a single mark is rejected. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarkError {
    /// The target cell already carries a mark.
    #[error("cell ({x}, {y}) is already marked")]
    CellOccupied { x: usize, y: usize },

    /// The target cell is outside the 3x3 grid.
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },
}

/// Rejections raised by [`crate::turn::TurnGuard`] on top of the engine's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The acting player is neither of the two registered participants.
    #[error("player is not a participant of this match")]
    NotAParticipant,

    /// The acting participant moved out of turn.
    #[error("it is the {expected:?} participant's turn")]
    NotYourTurn { expected: Seat },

    /// The match already reached a win or a draw.
    #[error("the match is already over")]
    MatchOver,

    /// The engine rejected the mark itself.
    #[error(transparent)]
    Mark(#[from] MarkError),
}

//! A small tic-tac-toe rules engine whose cells are anchored in space.
//!
//! Every match is played on a 3x3 grid, and every cell of that grid is bound to a block
//! coordinate inside a 3x3x1 slab of some world, so a presentation layer can render marks
//! where players see them. The engine owns the board, the two participants and the
//! anchors; rendering, input detection and match lifecycle are left to the caller.
//!
//! # Example
//!
//! ```rust
//! use slab_tictactoe::{Coordinate, Match, MatchStatus};
//!
//! // Bind a match to the slab spanning (0, 64, 10) .. (3, 67, 10) in the "overworld"
//! let mut game = Match::new(
//!     "alice",
//!     "bob",
//!     Coordinate::new("overworld", 0, 64, 10),
//!     Coordinate::new("overworld", 3, 67, 10),
//! )
//! .unwrap();
//!
//! // Play a few moves, checking for a winner before checking for a full board
//! for (player, x, y) in [("alice", 0, 0), ("bob", 1, 1), ("alice", 0, 1), ("bob", 2, 2), ("alice", 0, 2)] {
//!     game.mark_cell(player, x, y).unwrap();
//!     if game.has_winner() || game.is_board_full() {
//!         break;
//!     }
//! }
//!
//! assert_eq!(game.status(), MatchStatus::Won("alice"));
//! assert_eq!(game.anchor_coordinate_for(0, 2), Some(&Coordinate::new("overworld", 0, 66, 10)));
//! ```

/// Contains the `Board` grid, its cells and the win/draw detection.
pub mod board;
/// Contains the error types of the engine.
pub mod error;
/// The core module of the library, containing `Match` and its builder.
pub mod game;
/// Contains the mapping between a world region and the anchors of the cells.
pub mod region;
/// Contains `TurnGuard`, an optional wrapper that enforces turn order.
pub mod turn;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Line, MatchStatus};
pub use error::{MarkError, RegionError, TurnError};
pub use game::{Match, MatchBuilder, Seat};
pub use region::{AnchorCoordinates, Coordinate, Plane, map_region};
pub use turn::{Turn, TurnGuard};

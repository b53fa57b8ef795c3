use crate::board::MatchStatus;
use crate::error::TurnError;
use crate::game::{Match, Seat};
use std::fmt::Debug;

/// Where a guarded match stands between two moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn<P> {
    /// Waiting for the participant in the given seat.
    Awaiting(Seat),
    /// The match reached a terminal status; no more marks are accepted.
    Finished(MatchStatus<P>),
}

/// Strict play on top of a [`Match`]: only the two participants may mark, they must
/// alternate, and nothing is accepted once the match is won or drawn.
///
/// The wrapped engine is left untouched, so everything it reports stays available via
/// [`TurnGuard::inner`].
#[derive(Debug, Clone)]
pub struct TurnGuard<P, W> {
    inner: Match<P, W>,
    turn: Turn<P>,
}

impl<P, W> TurnGuard<P, W>
where
    P: PartialEq + Clone + Debug,
    W: PartialEq + Clone + Debug,
{
    /// Guards `inner`. A fresh match is opened by the first seat, a match already in
    /// play continues with the opponent of its last marker.
    pub fn new(inner: Match<P, W>) -> Self {
        Self::with_opening(inner, Seat::First)
    }

    /// Guards `inner`, letting the participant in `opening` seat make the first mark.
    ///
    /// `opening` only applies while no participant has marked yet; otherwise the turn
    /// passes to the opponent of the last marker.
    pub fn with_opening(inner: Match<P, W>, opening: Seat) -> Self {
        let status = inner.status();
        let turn = if status.is_terminal() {
            Turn::Finished(status)
        } else {
            let next = inner
                .last_marker()
                .and_then(|marker| inner.seat_of(marker))
                .map_or(opening, Seat::opponent);
            Turn::Awaiting(next)
        };
        Self { inner, turn }
    }

    /// Plays one move and returns the resulting status.
    ///
    /// Rejected moves leave both the board and the turn unchanged.
    pub fn play(&mut self, participant: P, x: usize, y: usize) -> Result<MatchStatus<P>, TurnError> {
        let expected = match &self.turn {
            Turn::Awaiting(seat) => *seat,
            Turn::Finished(_) => return Err(TurnError::MatchOver),
        };
        if !self.inner.is_participant(&participant) {
            return Err(TurnError::NotAParticipant);
        }
        // Compare against the seat's occupant so that equal participants can still alternate.
        if *self.inner.participant(expected) != participant {
            return Err(TurnError::NotYourTurn { expected });
        }

        self.inner.mark_cell(participant, x, y)?;

        let status = self.inner.status();
        self.turn = if status.is_terminal() {
            tracing::info!(?status, "match finished");
            Turn::Finished(status.clone())
        } else {
            Turn::Awaiting(expected.opponent())
        };
        Ok(status)
    }
}

impl<P, W> TurnGuard<P, W> {
    /// Returns the seat expected to move next, or `None` once the match is over.
    pub fn awaiting(&self) -> Option<Seat> {
        match self.turn {
            Turn::Awaiting(seat) => Some(seat),
            Turn::Finished(_) => None,
        }
    }

    pub fn turn(&self) -> &Turn<P> {
        &self.turn
    }

    pub fn inner(&self) -> &Match<P, W> {
        &self.inner
    }

    pub fn into_inner(self) -> Match<P, W> {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use crate::board::MatchStatus;
    use crate::error::{MarkError, TurnError};
    use crate::game::{Match, Seat};
    use crate::region::Coordinate;
    use crate::turn::{Turn, TurnGuard};

    fn new_guard() -> TurnGuard<&'static str, u32> {
        let game = Match::new(
            "alice",
            "bob",
            Coordinate::new(0, 100, 64, -20),
            Coordinate::new(0, 103, 67, -20),
        )
        .unwrap();
        TurnGuard::new(game)
    }

    #[test]
    fn alternates_between_seats() {
        // arrange
        let mut guard = new_guard();

        // act
        let first = guard.play("alice", 1, 1);
        let second = guard.play("bob", 0, 0);

        // assert
        assert_eq!(first, Ok(MatchStatus::InProgress));
        assert_eq!(second, Ok(MatchStatus::InProgress));
        assert_eq!(guard.awaiting(), Some(Seat::First));
        assert_eq!(guard.inner().last_marker(), Some(&"bob"));
    }

    #[test]
    fn rejects_out_of_turn_moves() {
        let mut guard = new_guard();
        guard.play("alice", 1, 1).unwrap();

        let result = guard.play("alice", 0, 0);

        assert_eq!(result, Err(TurnError::NotYourTurn { expected: Seat::Second }));
        assert_eq!(guard.inner().marks_applied(), 1);
    }

    #[test]
    fn second_seat_can_open() {
        let game = Match::new(
            "alice",
            "bob",
            Coordinate::new(0, 0, 0, 0),
            Coordinate::new(0, 3, 3, 0),
        )
        .unwrap();
        let mut guard = TurnGuard::with_opening(game, Seat::Second);

        assert_eq!(
            guard.play("alice", 0, 0),
            Err(TurnError::NotYourTurn { expected: Seat::Second })
        );
        assert!(guard.play("bob", 0, 0).is_ok());
    }

    #[test]
    fn rejects_outsiders() {
        let mut guard = new_guard();

        assert_eq!(guard.play("mallory", 0, 0), Err(TurnError::NotAParticipant));
        assert_eq!(guard.awaiting(), Some(Seat::First));
    }

    #[test]
    fn occupied_cell_keeps_the_turn() {
        let mut guard = new_guard();
        guard.play("alice", 2, 2).unwrap();

        let result = guard.play("bob", 2, 2);

        assert_eq!(result, Err(TurnError::Mark(MarkError::CellOccupied { x: 2, y: 2 })));
        assert_eq!(guard.awaiting(), Some(Seat::Second));
        assert!(guard.play("bob", 2, 1).is_ok());
    }

    #[test]
    fn blocks_moves_after_a_win() {
        // arrange
        let mut guard = new_guard();
        for (player, x, y) in [
            ("alice", 0, 2),
            ("bob", 0, 0),
            ("alice", 1, 1),
            ("bob", 0, 1),
        ] {
            guard.play(player, x, y).unwrap();
        }

        // act
        let winning = guard.play("alice", 2, 0);
        let after = guard.play("bob", 2, 2);

        // assert
        assert_eq!(winning, Ok(MatchStatus::Won("alice")));
        assert_eq!(after, Err(TurnError::MatchOver));
        assert_eq!(guard.awaiting(), None);
        assert_eq!(guard.turn(), &Turn::Finished(MatchStatus::Won("alice")));
        assert_eq!(guard.into_inner().marks_applied(), 5);
    }

    #[test]
    fn reports_a_draw() {
        let mut guard = new_guard();
        let moves = [
            ("alice", 0, 0),
            ("bob", 0, 1),
            ("alice", 0, 2),
            ("bob", 1, 1),
            ("alice", 1, 0),
            ("bob", 1, 2),
            ("alice", 2, 1),
            ("bob", 2, 0),
        ];
        for (player, x, y) in moves {
            assert_eq!(guard.play(player, x, y), Ok(MatchStatus::InProgress));
        }

        assert_eq!(guard.play("alice", 2, 2), Ok(MatchStatus::Drawn));
        assert_eq!(guard.play("bob", 0, 0), Err(TurnError::MatchOver));
    }

    #[test]
    fn equal_participants_alternate_seats() {
        // arrange
        let game = Match::new(
            "solo",
            "solo",
            Coordinate::new(0, 0, 0, 0),
            Coordinate::new(0, 3, 3, 0),
        )
        .unwrap();
        let mut guard = TurnGuard::new(game);

        // act
        let mut statuses = Vec::new();
        for (x, y) in [(0, 0), (1, 1), (0, 1), (2, 0), (0, 2)] {
            statuses.push(guard.play("solo", x, y));
        }

        // assert
        assert!(statuses[..4].iter().all(|status| *status == Ok(MatchStatus::InProgress)));
        assert_eq!(statuses[4], Ok(MatchStatus::Won("solo")));
        assert_eq!(guard.awaiting(), None);
    }

    #[test]
    fn wrapping_a_match_in_play_continues_after_last_marker() {
        let mut game = Match::new(
            "alice",
            "bob",
            Coordinate::new(0, 0, 0, 0),
            Coordinate::new(0, 3, 3, 0),
        )
        .unwrap();
        game.mark_cell("alice", 0, 0).unwrap();

        let mut guard = TurnGuard::new(game);

        assert_eq!(guard.awaiting(), Some(Seat::Second));
        assert_eq!(
            guard.play("alice", 1, 1),
            Err(TurnError::NotYourTurn { expected: Seat::Second })
        );
        assert_eq!(guard.play("bob", 1, 1), Ok(MatchStatus::InProgress));
        assert_eq!(guard.awaiting(), Some(Seat::First));
    }

    #[test]
    fn last_marker_overrides_opening_seat() {
        let mut game = Match::new(
            "alice",
            "bob",
            Coordinate::new(0, 0, 0, 0),
            Coordinate::new(0, 3, 3, 0),
        )
        .unwrap();
        game.mark_cell("bob", 2, 2).unwrap();

        let guard = TurnGuard::with_opening(game, Seat::Second);

        assert_eq!(guard.awaiting(), Some(Seat::First));
    }

    #[test]
    fn wrapping_a_finished_match_blocks_play() {
        let mut game = Match::new(
            "alice",
            "bob",
            Coordinate::new(7, 0, 0, 0),
            Coordinate::new(7, 3, 3, 0),
        )
        .unwrap();
        for y in 0..3 {
            game.mark_cell("alice", 0, y).unwrap();
        }

        let mut guard = TurnGuard::new(game);

        assert_eq!(guard.awaiting(), None);
        assert_eq!(guard.play("bob", 2, 2), Err(TurnError::MatchOver));
    }
}

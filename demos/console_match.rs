extern crate slab_tictactoe;

use slab_tictactoe::{BOARD_SIZE, Cell, Coordinate, Match, MatchStatus, Plane, TurnError, TurnGuard};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A board lying flat on the ground, one block above y = 64
    let game = Match::builder(
        'X',
        'O',
        Coordinate::new("overworld", 100, 65, -40),
        Coordinate::new("overworld", 103, 65, -37),
    )
    .with_plane(Plane::XZ)
    .build()?;
    let mut guard = TurnGuard::new(game);

    // Players click on blocks; the guard takes care of turn order
    let clicks = [
        ('X', 101, -39),
        ('O', 100, -40),
        ('O', 102, -38),
        ('X', 100, -38),
        ('O', 101, -39),
        ('O', 102, -40),
        ('X', 101, -40),
        ('O', 101, -38),
        ('X', 100, -39),
        ('O', 102, -38),
        ('X', 102, -39),
        ('O', 99, -40),
    ];

    let mut status = MatchStatus::InProgress;
    for (player, x, z) in clicks {
        let Some((cell_x, cell_y)) = guard.inner().cell_at(&Coordinate::new("overworld", x, 65, z))
        else {
            println!("{player} clicked outside the board");
            continue;
        };
        match guard.play(player, cell_x, cell_y) {
            Ok(new_status) => status = new_status,
            Err(error @ (TurnError::NotYourTurn { .. } | TurnError::Mark(_))) => {
                println!("{player}: {error}");
            }
            Err(error) => return Err(error.into()),
        }
    }

    print_board(guard.inner());
    match &status {
        MatchStatus::Won(winner) => println!("{winner} wins"),
        MatchStatus::Drawn => println!("draw"),
        MatchStatus::InProgress => println!("still in progress"),
    }

    if status != MatchStatus::Won('X') {
        return Err("scripted match should end with X winning".into());
    }
    Ok(())
}

fn print_board(game: &Match<char, &str>) {
    for x in 0..BOARD_SIZE {
        let row: String = (0..BOARD_SIZE)
            .map(|y| match game.cell(x, y) {
                Some(Cell::MarkedBy(player)) => *player,
                _ => '.',
            })
            .collect();
        println!("{row}");
    }
}

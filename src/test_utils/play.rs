use crate::{GameState, Move, ParseMoveError};

/// Play an interactive game on stdin/stdout.
pub fn play_interactive() {
    use std::io::Write;
    let mut game = GameState::new();

    while !game.is_terminal() {
        println!("\n{}\n", game);

        print!("Enter a move: ");
        std::io::stdout().flush().unwrap();
        let mut input_line = String::new();
        std::io::stdin().read_line(&mut input_line).unwrap();
        let parsed: Result<Move, ParseMoveError> = input_line.trim().parse();

        let mv = match parsed {
            Ok(mv) => mv,
            Err(_) => {
                println!("Cannot parse move.");
                continue;
            }
        };

        match game.apply_move(mv) {
            Ok(next) => game = next,
            Err(_) if game.need_pass() => println!("No move available. Please enter 'pass'."),
            Err(_) => println!("Invalid move. Legal moves: {}", game.legal_moves()),
        }
    }

    println!("\n{}\n", game);
    if let Some(winner) = game.winner() {
        println!("Winner: {}.", winner);
    } else {
        println!("Tie.");
    }
}

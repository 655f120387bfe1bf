use std::env;
use std::process;

use chess_rules::{Game, GameConfig, Square};

fn parse_move(text: &str) -> Result<(Square, Square), String> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(format!("bad move '{text}', expected e.g. e2e4"));
    }
    let from = text[..2].parse::<Square>().map_err(|e| e.to_string())?;
    let to = text[2..].parse::<Square>().map_err(|e| e.to_string())?;
    Ok((from, to))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut game = Game::new(GameConfig::default());

    for text in &args {
        let result = parse_move(text).and_then(|(from, to)| {
            game.play(from, to).map_err(|e| e.to_string())
        });
        if let Err(e) = result {
            eprintln!("{text}: {e}");
            process::exit(1);
        }
    }

    let legal_moves = game.all_legal_moves();
    println!("side_to_move: {}", game.side_to_move());
    println!("status: {}", game.status());
    println!("{}", game.board());
    println!("legal_moves: {}", legal_moves.len());
    for (from, to) in legal_moves {
        println!("{from}{to}");
    }
}

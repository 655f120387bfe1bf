//! Property-based tests using proptest.

use crate::board::{Color, Square, QUEEN_DIRECTIONS};
use crate::game::{Game, GameConfig};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    0..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn home_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

/// Play up to `num_moves` random legal moves from the start position.
fn random_game(seed: u64, num_moves: usize, home: Color) -> Game {
    let mut game = Game::new(GameConfig::new(home));
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = game.all_legal_moves();
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            break;
        };
        game.play(from, to).expect("generated move must be playable");
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: legal destinations never leave the board
    #[test]
    fn prop_destinations_on_board(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        home in home_strategy(),
    ) {
        let game = random_game(seed, num_moves, home);
        for sq in Square::all() {
            for to in game.legal_destinations(sq) {
                prop_assert!(to.is_on_board(), "{} -> {:?}", sq, to);
                prop_assert_ne!(to, sq);
            }
        }
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        home in home_strategy(),
    ) {
        let game = random_game(seed, num_moves, home);
        let mover = game.side_to_move();
        for (from, to) in game.all_legal_moves() {
            let mut next = game.clone();
            next.commit_move(from, to).expect("legal move must commit");
            prop_assert!(
                !next.is_under_attack(mover),
                "{}{} leaves {} in check",
                from,
                to,
                mover
            );
        }
    }

    /// Property: after a move, the side that moved has no legal destinations
    #[test]
    fn prop_turns_alternate(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        home in home_strategy(),
    ) {
        let mut game = random_game(seed, num_moves, home);
        let moves = game.all_legal_moves();
        if let Some(&(from, to)) = moves.first() {
            let mover = game.side_to_move();
            let turn = game.turn();
            game.commit_move(from, to).expect("legal move must commit");
            prop_assert_eq!(game.turn(), turn + 1);
            prop_assert_eq!(game.side_to_move(), mover.opponent());
            for (sq, _) in game.board().pieces_of(mover) {
                prop_assert!(game.legal_destinations(sq).is_empty());
            }
        }
    }

    /// Property: ray generation is deterministic
    #[test]
    fn prop_rays_deterministic(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        file in 0i8..8,
        rank in 0i8..8,
    ) {
        let game = random_game(seed, num_moves, Color::White);
        let sq = Square(file, rank);
        let first = game.board().ray_destinations(sq, &QUEEN_DIRECTIONS);
        let second = game.board().ray_destinations(sq, &QUEEN_DIRECTIONS);
        prop_assert_eq!(first, second);
    }

    /// Property: pawns only double-step from their starting rank
    #[test]
    fn prop_pawn_double_step_only_from_start(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        home in home_strategy(),
    ) {
        use crate::board::PieceKind;

        let game = random_game(seed, num_moves, home);
        for (sq, piece) in game.board().pieces() {
            if piece.kind != PieceKind::Pawn {
                continue;
            }
            let (dir, start) = if piece.color == home { (1i8, 1i8) } else { (-1, 6) };
            let dests = game.board().pawn_destinations(sq, home);
            if sq.rank() != start {
                prop_assert!(!dests.contains(sq.offset(0, 2 * dir)));
            }
        }
    }
}

#[test]
fn test_random_playout_keeps_piece_count_bounded() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = Game::default();
    let mut pieces = game.board().piece_count();
    for _ in 0..200 {
        let moves = game.all_legal_moves();
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            break;
        };
        let captured = game.play(from, to).expect("generated move must be playable");
        let now = game.board().piece_count();
        if captured.is_some() {
            assert_eq!(now, pieces - 1);
        } else {
            assert_eq!(now, pieces);
        }
        pieces = now;
        assert!(game.board().find_king(Color::White).is_some());
        assert!(game.board().find_king(Color::Black).is_some());
    }
}

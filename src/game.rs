//! Authoritative game state: one board, the turn counter, and the home color.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, MoveError, Piece, Square, SquareList};

/// Game-wide settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Side that starts on ranks 0-1, advances toward higher ranks and moves
    /// on even turns.
    pub home: Color,
}

impl GameConfig {
    #[must_use]
    pub const fn new(home: Color) -> Self {
        GameConfig { home }
    }

    #[must_use]
    pub const fn with_home(mut self, home: Color) -> Self {
        self.home = home;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { home: Color::White }
    }
}

/// Position assessment for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    InProgress,
    Check { color: Color },
    Checkmate { loser: Color },
    Stalemate { color: Color },
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate { .. } | Status::Stalemate { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::Check { color } => write!(f, "{color} is in check"),
            Status::Checkmate { loser } => write!(f, "{loser} is checkmated"),
            Status::Stalemate { color } => write!(f, "{color} is stalemated"),
        }
    }
}

/// A game in progress. The board inside is mutated only by
/// [`Game::commit_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    board: Board,
    config: GameConfig,
    turn: u32,
}

impl Game {
    /// Start a game from the standard setup mirrored for `config.home`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Game {
            board: Board::starting(config.home),
            config,
            turn: 0,
        }
    }

    /// Resume from an arbitrary position. `turn` parity decides the side to
    /// move: even for home, odd for the opponent.
    #[must_use]
    pub fn from_board(board: Board, config: GameConfig, turn: u32) -> Self {
        Game {
            board,
            config,
            turn,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Number of committed moves, modulo 2^32. `u32::MAX` is odd, so wrapping
    /// to zero keeps the side to move alternating.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.turn % 2 == 0 {
            self.config.home
        } else {
            self.config.home.opponent()
        }
    }

    /// Legal destinations for the piece on `from`; empty when the square is
    /// empty, off the board, or holds a piece of the side not to move.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> SquareList {
        self.board
            .legal_destinations(from, self.config.home, self.side_to_move())
    }

    /// Every legal (from, to) pair for the side to move, file-major by source.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        let to_move = self.side_to_move();
        self.board
            .pieces_of(to_move)
            .flat_map(|(from, _)| {
                self.legal_destinations(from)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    #[must_use]
    pub fn is_under_attack(&self, color: Color) -> bool {
        self.board.is_under_attack(color, self.config.home)
    }

    /// Move the piece on `from` to `to` and advance the turn. Returns the
    /// captured piece, if any.
    ///
    /// Legality is not checked; callers pick `to` from
    /// [`Game::legal_destinations`] or use [`Game::play`].
    ///
    /// # Errors
    ///
    /// `MoveError::OffBoard` or `MoveError::EmptySource` when the squares do
    /// not describe a move; the game is left untouched.
    pub fn commit_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        for square in [from, to] {
            if !square.is_on_board() {
                return Err(MoveError::OffBoard { square });
            }
        }
        let Some(moving) = self.board.piece_at(from) else {
            return Err(MoveError::EmptySource { square: from });
        };

        let captured = self.board.move_piece(from, to);
        self.turn = self.turn.wrapping_add(1);
        debug_log!(
            "turn {}: {} {}{}{}",
            self.turn,
            moving,
            from,
            to,
            captured.map_or(String::new(), |p| format!(" takes {p}"))
        );
        Ok(captured)
    }

    /// Commit the move only if `to` is a legal destination of `from`.
    ///
    /// # Errors
    ///
    /// `MoveError::IllegalMove` when `to` is not among the legal destinations,
    /// plus the errors of [`Game::commit_move`].
    pub fn play(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        if !from.is_on_board() {
            return Err(MoveError::OffBoard { square: from });
        }
        if self.board.is_empty(from) {
            return Err(MoveError::EmptySource { square: from });
        }
        if !self.legal_destinations(from).contains(to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        self.commit_move(from, to)
    }

    /// Assessment of `color` regardless of whose turn it is: no safe move and
    /// attacked is checkmate, no safe move otherwise is stalemate.
    #[must_use]
    pub fn outcome_for(&self, color: Color) -> Status {
        let attacked = self.is_under_attack(color);
        let can_move = self.board.has_safe_move(color, self.config.home);
        match (can_move, attacked) {
            (false, true) => Status::Checkmate { loser: color },
            (false, false) => Status::Stalemate { color },
            (true, true) => Status::Check { color },
            (true, false) => Status::InProgress,
        }
    }

    /// Assessment of the side to move.
    #[must_use]
    pub fn status(&self) -> Status {
        let status = self.outcome_for(self.side_to_move());
        if status.is_terminal() {
            info_log!("turn {}: {}", self.turn, status);
        }
        status
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}

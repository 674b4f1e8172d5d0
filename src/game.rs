//! Self-play driver
//!
//! Runs two agents against each other until neither side can move. Mostly
//! useful for the CLI and for exercising the engine end to end.

use std::fmt;

use tracing::{debug, info};

use crate::agent::Agent;
use crate::board::{Board, Move, Side};
use crate::engine::SearchType;
use crate::error::{EngineError, EngineResult};
use crate::rules::{is_game_over, winner, Position};

/// One entry in the game log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Play {
        side: Side,
        mv: Move,
        score: i32,
        search_type: SearchType,
    },
    /// Side had no legal move
    Pass(Side),
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Play { side, mv, .. } => write!(f, "{side} {mv}"),
            Turn::Pass(side) => write!(f, "{side} pass"),
        }
    }
}

/// Finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub turns: Vec<Turn>,
    pub final_board: Board,
    /// `None` on a draw
    pub winner: Option<Side>,
    pub black_discs: u32,
    pub white_discs: u32,
}

impl GameRecord {
    /// Number of discs placed during the game
    pub fn moves_played(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| matches!(turn, Turn::Play { .. }))
            .count()
    }
}

/// Play `black` against `white` from `start`, Black moving first.
///
/// A side without a legal move passes. The game ends when neither side can
/// move.
pub fn play_game(black: &mut Agent, white: &mut Agent, start: Board) -> EngineResult<GameRecord> {
    check_side(black, Side::Black)?;
    check_side(white, Side::White)?;

    let mut board = start;
    let mut to_move = Side::Black;
    let mut turns = Vec::new();

    while !is_game_over(&board) {
        if !board.has_legal_move(to_move) {
            let turn = Turn::Pass(to_move);
            debug!(%turn, "turn");
            turns.push(turn);
            to_move = to_move.other();
            continue;
        }

        let agent = match to_move {
            Side::Black => &mut *black,
            Side::White => &mut *white,
        };
        let result = agent.select_move_with_stats(&board)?;
        board = board.apply_move(to_move, result.best_move)?;
        let turn = Turn::Play {
            side: to_move,
            mv: result.best_move,
            score: result.score,
            search_type: result.search_type,
        };
        debug!(%turn, score = result.score, "turn");
        turns.push(turn);
        to_move = to_move.other();
    }

    let record = GameRecord {
        turns,
        final_board: board,
        winner: winner(&board),
        black_discs: board.count(Side::Black),
        white_discs: board.count(Side::White),
    };
    info!(
        black = record.black_discs,
        white = record.white_discs,
        winner = ?record.winner,
        empty = board.empty_count(),
        moves = record.moves_played(),
        "game over"
    );
    Ok(record)
}

fn check_side(agent: &Agent, expected: Side) -> EngineResult<()> {
    if agent.side() != expected {
        return Err(EngineError::SideMismatch {
            expected,
            got: agent.side(),
        });
    }
    Ok(())
}

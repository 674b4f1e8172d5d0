//! Agent handle for a host game runtime
//!
//! A host creates one agent per side with [`Agent::new`], asks it for a move
//! once per turn with [`Agent::select_move`], and drops it when the game is
//! finished. Each agent owns its own engine and weight table.

use tracing::debug;

use crate::board::{Move, Side};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::EngineResult;
use crate::eval::WeightTable;
use crate::rules::Position;

/// One player's move selector
#[derive(Debug)]
pub struct Agent {
    side: Side,
    engine: AIEngine,
}

impl Agent {
    /// Agent for `side` with the default configuration.
    #[must_use]
    pub fn new(side: Side) -> Self {
        debug!(%side, "agent created");
        Self {
            side,
            engine: AIEngine::new(),
        }
    }

    /// Agent for `side` with a custom configuration.
    pub fn with_config(side: Side, config: &EngineConfig) -> EngineResult<Self> {
        let engine = AIEngine::with_config(config)?;
        debug!(%side, depth = engine.search_depth(), "agent created");
        Ok(Self { side, engine })
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// The agent's current weight table
    pub fn weights(&self) -> &WeightTable {
        self.engine.weights()
    }

    /// Move to play this turn.
    pub fn select_move<P: Position>(&mut self, board: &P) -> EngineResult<Move> {
        self.engine.get_move(board, self.side)
    }

    /// Move to play this turn, with search statistics.
    pub fn select_move_with_stats<P: Position>(&mut self, board: &P) -> EngineResult<MoveResult> {
        self.engine.choose_move(board, self.side)
    }

    /// Forget corner corrections from a previous game.
    pub fn new_game(&mut self) {
        self.engine.new_game();
    }
}

impl Drop for Agent {
    fn drop(&mut self) {
        debug!(
            side = %self.side,
            secured_corners = self.engine.weights().secured_corners().count(),
            "agent released"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::engine::SearchType;
    use crate::error::{ConfigError, EngineError};

    #[test]
    fn test_agent_plays_its_side() {
        let board = Board::new();
        let mut white = Agent::new(Side::White);
        assert_eq!(white.side(), Side::White);

        // After Black's d3, White must answer with one of its legal replies.
        let board = board.apply_move(Side::Black, Move::new(2, 3)).unwrap();
        let mv = white.select_move(&board).unwrap();
        assert!(board.legal_moves(Side::White).contains(&mv));
    }

    #[test]
    fn test_agent_with_config() {
        let config = EngineConfig::new().with_depth(2);
        let mut agent = Agent::with_config(Side::Black, &config).unwrap();
        let result = agent.select_move_with_stats(&Board::new()).unwrap();
        assert!(Board::new().legal_moves(Side::Black).contains(&result.best_move));
        assert_eq!(result.search_type, SearchType::AlphaBeta);

        let err = Agent::with_config(Side::Black, &EngineConfig::new().with_depth(99)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Config(ConfigError::DepthTooLarge { .. })
        ));
    }

    #[test]
    fn test_agent_without_moves_errors() {
        let board: Board = "\
            BB......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();

        let mut agent = Agent::new(Side::White);
        assert!(matches!(
            agent.select_move(&board),
            Err(EngineError::NoLegalMoves { side: Side::White })
        ));
    }

    #[test]
    fn test_new_game_resets_corner_corrections() {
        let board: Board = "\
            .WB.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();

        let mut agent = Agent::with_config(Side::Black, &EngineConfig::new().with_depth(1)).unwrap();
        assert_eq!(agent.select_move(&board).unwrap(), Move::new(0, 0));
        assert!(agent.weights().is_secured(Move::new(0, 0)));

        agent.new_game();
        assert_eq!(agent.weights(), &WeightTable::default());
    }
}

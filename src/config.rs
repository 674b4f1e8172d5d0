//! Engine configuration
//!
//! Plain data with serde support so it can be loaded from a JSON file.
//! Missing fields fall back to the defaults.
//!
//! ```
//! use othello::EngineConfig;
//!
//! let config = EngineConfig::from_json_str(r#"{ "search_depth": 4 }"#).unwrap();
//! assert_eq!(config.search_depth, 4);
//! assert_eq!(config.weights, othello::eval::DEFAULT_WEIGHTS);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{BOARD_SIZE, TOTAL_CELLS};
use crate::error::ConfigError;
use crate::eval::{SecuredWeight, WeightTable, DEFAULT_WEIGHTS};

/// Default lookahead below each root candidate
pub const DEFAULT_SEARCH_DEPTH: u8 = 6;

/// Deepest search accepted by [`EngineConfig::validate`]
pub const MAX_SEARCH_DEPTH: u8 = 12;

/// Largest weight magnitude accepted by [`EngineConfig::validate`].
///
/// A board holds at most 64 discs, so any evaluation stays within
/// `±64 * MAX_ABS_WEIGHT` and fits an `i32`.
pub const MAX_ABS_WEIGHT: i32 = i32::MAX / TOTAL_CELLS as i32;

/// Tunable parameters of the move selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched below each root candidate
    pub search_depth: u8,
    /// Initial weight table, row by row from the top
    pub weights: [[i32; BOARD_SIZE]; BOARD_SIZE],
    /// Weight of the two edge squares next to a secured corner
    pub secured_edge_weight: i32,
    /// Weight of the diagonal square next to a secured corner
    pub secured_diagonal_weight: i32,
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            weights: DEFAULT_WEIGHTS,
            secured_edge_weight: SecuredWeight::EDGE,
            secured_diagonal_weight: SecuredWeight::DIAGONAL,
        }
    }

    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    /// Set the initial weight table.
    #[must_use]
    pub fn with_weights(mut self, weights: [[i32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        self.weights = weights;
        self
    }

    /// Reject settings the engine cannot run with: searches too deep to
    /// finish in reasonable time, and weights whose sums overflow `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::DepthTooLarge {
                depth: self.search_depth,
                max: MAX_SEARCH_DEPTH,
            });
        }

        // Secured weights replace table entries, so they share the bound.
        let largest = self
            .weight_table()
            .max_abs_weight()
            .max(self.secured_edge_weight.saturating_abs())
            .max(self.secured_diagonal_weight.saturating_abs());
        if largest > MAX_ABS_WEIGHT {
            return Err(ConfigError::WeightOutOfRange {
                weight: largest,
                max: MAX_ABS_WEIGHT,
            });
        }
        Ok(())
    }

    /// Fresh weight table built from this configuration
    #[must_use]
    pub fn weight_table(&self) -> WeightTable {
        WeightTable::from_rows(self.weights)
            .with_secured_weights(self.secured_edge_weight, self.secured_diagonal_weight)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Move, Side};
    use crate::eval::evaluate;
    use crate::rules::Position;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.search_depth, 6);
        assert_eq!(config.weights, DEFAULT_WEIGHTS);
        assert_eq!(config.secured_edge_weight, 12);
        assert_eq!(config.secured_diagonal_weight, 25);
        assert!(config.validate().is_ok());
        assert_eq!(config.weight_table(), WeightTable::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "secured_edge_weight": 3 }"#).unwrap();
        assert_eq!(config.search_depth, DEFAULT_SEARCH_DEPTH);
        assert_eq!(config.secured_edge_weight, 3);
        assert_eq!(config.secured_diagonal_weight, 25);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::new().with_depth(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_depth_limit() {
        let err = EngineConfig::new().with_depth(13).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DepthTooLarge { depth: 13, max: 12 }
        ));

        let err = EngineConfig::from_json_str(r#"{ "search_depth": 40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::DepthTooLarge { .. }));
    }

    #[test]
    fn test_oversized_weights_rejected() {
        let json = serde_json::to_string(&EngineConfig::new().with_weights([[1 << 30; 8]; 8])).unwrap();
        let err = EngineConfig::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::WeightOutOfRange {
                weight: 1_073_741_824,
                max: MAX_ABS_WEIGHT
            }
        ));

        let mut weights = DEFAULT_WEIGHTS;
        weights[6][6] = i32::MIN;
        assert!(matches!(
            EngineConfig::new().with_weights(weights).validate(),
            Err(ConfigError::WeightOutOfRange { weight: i32::MAX, .. })
        ));
    }

    #[test]
    fn test_oversized_secured_weight_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "secured_diagonal_weight": -2000000000 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::WeightOutOfRange { .. }));

        let err = EngineConfig::from_json_str(r#"{ "secured_edge_weight": 40000000 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::WeightOutOfRange { .. }));
    }

    #[test]
    fn test_largest_weights_evaluate_without_overflow() {
        let config = EngineConfig::new().with_weights([[MAX_ABS_WEIGHT; 8]; 8]);
        assert!(config.validate().is_ok());

        let table = config.weight_table();
        let full: Board = "B".repeat(64).parse().unwrap();
        assert_eq!(evaluate(&full, Side::Black, &table), 64 * MAX_ABS_WEIGHT);
        assert_eq!(evaluate(&full, Side::White, &table), -64 * MAX_ABS_WEIGHT);

        let opened = Board::new().apply_move(Side::Black, Move::new(2, 3)).unwrap();
        assert_eq!(evaluate(&opened, Side::Black, &table), 3 * MAX_ABS_WEIGHT);
    }

    #[test]
    fn test_invalid_json() {
        let err = EngineConfig::from_json_str("{ search_depth: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_custom_weights_flow_into_table() {
        let mut weights = DEFAULT_WEIGHTS;
        weights[3][3] = 7;
        let table = EngineConfig::new().with_weights(weights).weight_table();
        assert_eq!(table.get(3, 3), 7);
    }
}

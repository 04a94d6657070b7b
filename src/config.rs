//! 環境の設定です。

use thiserror::Error;

use crate::constants::{DEFAULT_BSIZE, DEFAULT_HISTORY, MAX_BSIZE};
use crate::intersection::Color;

/// 設定が不正なときのエラーです。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {0} is out of range")]
    BoardSize(usize),
    #[error("history depth must be positive")]
    History,
    #[error("unknown color {0:?} (expected black or white)")]
    UnknownColor(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// 碁盤のサイズです。
    pub board_size: usize,
    /// NNへの入力に関する履歴の深さです。
    pub history: usize,
    /// エージェントの石の色です。報酬はこの色から見た値になります。
    pub player_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BSIZE,
            history: DEFAULT_HISTORY,
            player_color: Color::Black,
        }
    }
}

impl GameConfig {
    pub fn new(player_color: Color, board_size: usize) -> Self {
        Self {
            board_size,
            player_color,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BSIZE {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.history == 0 {
            return Err(ConfigError::History);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = GameConfig::default();
        assert_eq!(c.board_size, 9);
        assert_eq!(c.history, 8);
        assert_eq!(c.player_color, Color::Black);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let c = GameConfig::new(Color::White, 0);
        assert_eq!(c.validate(), Err(ConfigError::BoardSize(0)));
        let c = GameConfig::new(Color::White, 26);
        assert_eq!(c.validate(), Err(ConfigError::BoardSize(26)));
        let c = GameConfig {
            history: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::History));
    }
}

use thiserror::Error;

use crate::engine::{Coord, EngineError};

/// 環境の操作で起こるエラーです。どのエラーでも環境の状態は変わりません。
#[derive(Debug, Error)]
pub enum GameError {
    #[error("action {action} is out of range 0..={max}")]
    InvalidAction { action: usize, max: usize },
    #[error("coordinate {coord} is not on the board")]
    InvalidCoord { coord: Coord },
    #[error(transparent)]
    IllegalMove(#[from] EngineError),
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

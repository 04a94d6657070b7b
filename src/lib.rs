//! go_env: AlphaZero式の自己対局のための碁の環境
//!
//! 碁盤エンジンの座標と行動の相互変換、NNへの入力のための履歴、終局判定と
//! 面積計算による勝敗を扱います。

pub mod action;
pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod feature;
pub mod game;
pub mod history;
pub mod intersection;
pub mod stone_group;

pub use action::{action_of, native_coordinate_of, Action};
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use engine::{BoardEngine, Coord, EngineError};
pub use error::GameError;
pub use feature::StateTensor;
pub use game::GoGame;
pub use history::History;
pub use intersection::Color;

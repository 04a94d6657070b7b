use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// 石の色や手番を表す列挙型です。
/// 値はエンジンのエンコードのインデックスであり、手番プレーンの値でもあります。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub fn opponent(&self) -> Self {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub fn plane_code(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(ConfigError::UnknownColor(s.to_string())),
        }
    }
}

// 交点の状態を表す列挙型です。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intersection {
    Stone(Color),
    Empty,
    Exterior, // 盤の外
}

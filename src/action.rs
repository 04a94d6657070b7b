//! エンジンの座標と、NNの方策の添字である行動との相互変換です。
//!
//! 行動は`0..bsize²`が行優先の交点、`bsize²`がパス、`bsize² + 1`が投了です。

use crate::engine::{BoardEngine, Coord};
use crate::error::GameError;

/// 行動の添字です。
pub type Action = usize;

#[inline]
pub fn pass_action(bsize: usize) -> Action {
    bsize * bsize
}

#[inline]
pub fn resign_action(bsize: usize) -> Action {
    bsize * bsize + 1
}

/// 行動空間の大きさです。
#[inline]
pub fn action_space_size(bsize: usize) -> usize {
    bsize * bsize + 2
}

/// エンジンの座標を行動に変換します。
pub fn action_of<E: BoardEngine>(board: &E, coord: Coord) -> Result<Action, GameError> {
    let bsize = board.size();
    if coord == E::PASS {
        return Ok(pass_action(bsize));
    }
    if coord == E::RESIGN {
        return Ok(resign_action(bsize));
    }
    board
        .coord_to_ij(coord)
        .map(|(i, j)| i * bsize + j)
        .ok_or(GameError::InvalidCoord { coord })
}

/// 行動をエンジンの座標に変換します。
pub fn native_coordinate_of<E: BoardEngine>(board: &E, action: Action) -> Result<Coord, GameError> {
    let bsize = board.size();
    if action == pass_action(bsize) {
        Ok(E::PASS)
    } else if action == resign_action(bsize) {
        Ok(E::RESIGN)
    } else if action < pass_action(bsize) {
        Ok(board.ij_to_coord(action / bsize, action % bsize))
    } else {
        Err(GameError::InvalidAction {
            action,
            max: resign_action(bsize),
        })
    }
}

use thiserror::Error;

use crate::intersection::Color;

/// エンジン固有の線形座標です。
pub type Coord = usize;

/// エンジンが着手を拒否した理由です。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal move {coord} for {color}: {reason}")]
    IllegalMove {
        coord: Coord,
        color: Color,
        reason: &'static str,
    },
}

/// 環境が利用する碁盤エンジンの機能です。
///
/// 合法手の列挙、着手、エンコード、終局判定、地の計算を提供します。
/// `play`がエラーを返したときは盤面を変更してはいけません。
/// 環境の複製は`Clone`で行うので、状態を共有しない深いコピーでなければなりません。
pub trait BoardEngine: Clone {
    /// パスを表す座標です。
    const PASS: Coord;
    /// 投了を表す座標です。
    const RESIGN: Coord;

    /// サイズsizeの空の碁盤を作ります。
    fn create(size: usize) -> Self;

    fn size(&self) -> usize;

    /// colorの合法手を返します。PASSとRESIGNを含みます。
    fn legal_coords(&self, color: Color, filter_suicides: bool) -> Vec<Coord>;

    fn play(&mut self, coord: Coord, color: Color) -> Result<(), EngineError>;

    /// 黒と白の占有プレーンです。インデックスは`Color::plane_code`です。
    fn encode(&self) -> [Vec<u8>; 2];

    fn is_terminal(&self) -> bool;

    /// コミを含まない地の差(白 - 黒)です。
    fn official_score(&self) -> f32;

    /// 盤上の座標を(行, 列)に分解します。盤外やPASSならNoneです。
    fn coord_to_ij(&self, coord: Coord) -> Option<(usize, usize)>;

    fn ij_to_coord(&self, i: usize, j: usize) -> Coord;

    /// 碁盤の文字表現です。
    fn render(&self) -> String;
}

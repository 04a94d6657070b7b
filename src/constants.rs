/// 碁盤のサイズの既定値です。
pub const DEFAULT_BSIZE: usize = 9;

/// 扱える碁盤のサイズの上限です。X_LABELSの数で決まります。
pub const MAX_BSIZE: usize = 25;

/// NNへの入力に関する履歴の深さの既定値です。
/// 手番ごとに黒白2枚ずつ持つので、履歴のプレーン数はこの2倍になります。
pub const DEFAULT_HISTORY: usize = 8;

/// 碁盤の列ラベルです。Iは使いません。
pub const X_LABELS: [char; MAX_BSIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// 碁盤のサイズに応じた白へのコミです。
pub fn komi(bsize: usize) -> f32 {
    match bsize {
        14..=19 => 7.5,
        9..=13 => 5.5,
        _ => 0.0,
    }
}

/// 履歴の深さhistoryに対する入力フィーチャーの数です。
#[inline]
pub fn feature_cnt(history: usize) -> usize {
    history * 2 + 1
}

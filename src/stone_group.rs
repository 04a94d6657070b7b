use std::collections::HashSet;

use crate::engine::Coord;

/// 連の大きさとダメを保持する構造体です。
/// 石がどの連に属するかについてはBoardのidが管理します。
/// 座標が入る場合、すべて、拡張碁盤の線形座標です。
#[derive(Clone, Debug, Default)]
pub struct StoneGroup {
    size: usize,
    libs: HashSet<Coord>,
}

impl StoneGroup {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get_size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get_lib_cnt(&self) -> usize {
        self.libs.len()
    }

    /// アタリのときの最後のダメの座標です。
    pub fn get_v_atr(&self) -> Option<Coord> {
        if self.libs.len() == 1 {
            self.libs.iter().next().cloned()
        } else {
            None
        }
    }

    pub fn clear(&mut self, stone: bool) {
        self.size = if stone { 1 } else { 0 };
        self.libs.clear();
    }

    /// ダメを追加します。
    pub fn add(&mut self, v: Coord) {
        self.libs.insert(v);
    }

    /// ダメを削除します。
    pub fn sub(&mut self, v: Coord) {
        self.libs.remove(&v);
    }

    /// 連otherをマージします。
    pub fn merge(&mut self, other: &Self) {
        self.libs.extend(other.libs.iter().cloned());
        self.size += other.size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_unions_liberties() {
        let mut a = StoneGroup::new();
        a.clear(true);
        a.add(1);
        a.add(2);
        let mut b = StoneGroup::new();
        b.clear(true);
        b.add(2);
        b.add(3);
        a.merge(&b);
        assert_eq!(a.get_size(), 2);
        assert_eq!(a.get_lib_cnt(), 3);
        assert_eq!(a.get_v_atr(), None);
    }

    #[test]
    fn last_liberty_is_reported_in_atari() {
        let mut g = StoneGroup::new();
        g.clear(true);
        g.add(5);
        g.add(6);
        g.sub(5);
        assert_eq!(g.get_v_atr(), Some(6));
    }
}

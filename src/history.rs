use crate::constants::feature_cnt;
use crate::feature::StateTensor;
use crate::intersection::Color;

/// 過去の局面の占有プレーンを新しい順に`2 * depth`枚保持するリングバッファです。
///
/// プレーンは1つの固定長バッファに並べてあり、追加のたびに全体を1枚分後ろへずらして
/// 先頭に書き込みます。末尾の1枚は捨てられます。
#[derive(Clone, Debug)]
pub struct History {
    bsize: usize,
    depth: usize,
    planes: Vec<u8>,
}

impl History {
    pub fn new(bsize: usize, depth: usize) -> Self {
        Self {
            bsize,
            depth,
            planes: vec![0; 2 * depth * bsize * bsize],
        }
    }

    #[inline]
    fn bvcnt(&self) -> usize {
        self.bsize * self.bsize
    }

    /// 保持しているプレーンの数です。常に`2 * depth`です。
    #[inline]
    pub fn len(&self) -> usize {
        2 * self.depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// i番目に新しいプレーンです。
    pub fn plane(&self, i: usize) -> &[u8] {
        let bvcnt = self.bvcnt();
        &self.planes[i * bvcnt..(i + 1) * bvcnt]
    }

    /// 着手した色の占有プレーンを先頭に追加します。
    pub fn push(&mut self, plane: &[u8]) {
        let bvcnt = self.bvcnt();
        assert_eq!(plane.len(), bvcnt, "plane size mismatch");
        if self.planes.is_empty() {
            return;
        }
        let total = self.planes.len();
        self.planes.copy_within(0..total - bvcnt, bvcnt);
        self.planes[..bvcnt].copy_from_slice(plane);
    }

    pub fn reset(&mut self) {
        for e in self.planes.iter_mut() {
            *e = 0;
        }
    }

    /// 履歴と手番のプレーンを並べた入力を作ります。
    pub fn build_tensor(&self, to_move: Color) -> StateTensor {
        let mut tensor = StateTensor::zeros(self.bsize, feature_cnt(self.depth));
        for f in 0..self.len() {
            tensor.set_plane(f, self.plane(f));
        }
        tensor.fill_plane(self.len(), to_move.plane_code() as u8);
        tensor
    }
}

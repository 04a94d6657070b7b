/// NNへの入力です。形は(bsize, bsize, depth)で、最後の次元がフィーチャーです。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateTensor {
    bsize: usize,
    depth: usize,
    data: Vec<u8>,
}

impl StateTensor {
    pub fn zeros(bsize: usize, depth: usize) -> Self {
        Self {
            bsize,
            depth,
            data: vec![0; bsize * bsize * depth],
        }
    }

    #[inline]
    fn index(&self, p: usize, f: usize) -> usize {
        p * self.depth + f
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.bsize, self.bsize, self.depth)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn get(&self, f: usize, i: usize, j: usize) -> u8 {
        self.data[self.index(i * self.bsize + j, f)]
    }

    /// フィーチャーfの碁盤の線形座標ごとの値です。
    pub fn plane(&self, f: usize) -> Vec<u8> {
        (0..self.bsize * self.bsize)
            .map(|p| self.data[self.index(p, f)])
            .collect()
    }

    pub(crate) fn set_plane(&mut self, f: usize, plane: &[u8]) {
        for (p, &x) in plane.iter().enumerate() {
            let idx = self.index(p, f);
            self.data[idx] = x;
        }
    }

    pub(crate) fn fill_plane(&mut self, f: usize, x: u8) {
        for p in 0..self.bsize * self.bsize {
            let idx = self.index(p, f);
            self.data[idx] = x;
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn to_f32(&self) -> Vec<f32> {
        self.data.iter().map(|&x| x as f32).collect()
    }
}

use itertools::Itertools;

use crate::constants::X_LABELS;
use crate::engine::{BoardEngine, Coord, EngineError};
use crate::intersection::{Color, Intersection};
use crate::stone_group::StoneGroup;

/// 外枠を持つ拡張碁盤で実装した碁盤エンジンです。
///
/// 座標は拡張碁盤の線形座標(ev)で、碁盤の線形座標(rv)は行優先の`0..bsize²`です。
/// 手番は持たず、どちらの色も打てます。手番の管理は環境が行います。
#[derive(Clone, Debug)]
pub struct Board {
    bsize: usize,
    ebsize: usize,
    color: Vec<Intersection>,
    id: Vec<usize>,
    next: Vec<usize>,
    sg: Vec<StoneGroup>,
    ko: Option<(Coord, Color)>, // コウで打てない座標と色
    pass_cnt: usize,            // 連続したパスの数
    resigned: bool,
    move_cnt: usize,
    prev_move: Option<Coord>,
    remove_cnt: usize,
}

impl Board {
    pub fn new(bsize: usize) -> Self {
        let ebsize = bsize + 2;
        let ebvcnt = ebsize * ebsize;
        let mut result = Self {
            bsize,
            ebsize,
            color: vec![Intersection::Exterior; ebvcnt],
            id: vec![0; ebvcnt],
            next: vec![0; ebvcnt],
            sg: vec![StoneGroup::new(); ebvcnt],
            ko: None,
            pass_cnt: 0,
            resigned: false,
            move_cnt: 0,
            prev_move: None,
            remove_cnt: 0,
        };
        result.clear();
        result
    }

    pub fn clear(&mut self) {
        for e in self.color.iter_mut() {
            *e = Intersection::Exterior;
        }
        for rv in 0..self.bsize * self.bsize {
            let v = self.rv2ev(rv);
            self.color[v] = Intersection::Empty;
        }
        for (i, e) in self.id.iter_mut().enumerate() {
            *e = i;
        }
        for (i, e) in self.next.iter_mut().enumerate() {
            *e = i;
        }
        for e in self.sg.iter_mut() {
            e.clear(false);
        }
        self.ko = None;
        self.pass_cnt = 0;
        self.resigned = false;
        self.move_cnt = 0;
        self.prev_move = None;
        self.remove_cnt = 0;
    }

    #[inline]
    pub fn get_move_cnt(&self) -> usize {
        self.move_cnt
    }

    #[inline]
    pub fn get_prev_move(&self) -> Option<Coord> {
        self.prev_move
    }

    /// 碁盤の線形座標を拡張碁盤の線形座標に変換します。
    #[inline]
    pub fn rv2ev(&self, rv: usize) -> Coord {
        rv % self.bsize + 1 + (rv / self.bsize + 1) * self.ebsize
    }

    /// 拡張碁盤の線形座標を碁盤の線形座標に変換します。
    #[inline]
    pub fn ev2rv(&self, ev: Coord) -> usize {
        ev % self.ebsize - 1 + (ev / self.ebsize - 1) * self.bsize
    }

    /// 拡張碁盤の線形座標を碁盤の座標の文字表現に変換します。
    pub fn ev2str(&self, ev: Coord) -> String {
        if ev == Self::PASS {
            "pass".to_string()
        } else if ev == Self::RESIGN {
            "resign".to_string()
        } else {
            match self.coord_to_ij(ev) {
                Some((i, j)) => format!("{}{}", X_LABELS[j], self.bsize - i),
                None => format!("?{}", ev),
            }
        }
    }

    #[inline]
    fn on_board(&self, v: Coord) -> bool {
        v < self.color.len() && self.color[v] != Intersection::Exterior
    }

    #[inline]
    fn neighbors(&self, v: Coord) -> [Coord; 4] {
        [v + 1, v + self.ebsize, v - 1, v - self.ebsize]
    }

    fn remove(&mut self, v: Coord) {
        let mut v_tmp = v;
        loop {
            self.remove_cnt += 1;
            self.color[v_tmp] = Intersection::Empty;
            self.id[v_tmp] = v_tmp;
            for &nv in &self.neighbors(v_tmp) {
                let nid = self.id[nv];
                self.sg[nid].add(v_tmp);
            }
            let v_next = self.next[v_tmp];
            self.next[v_tmp] = v_tmp;
            v_tmp = v_next;
            if v_tmp == v {
                break;
            }
        }
    }

    fn merge(&mut self, v1: Coord, v2: Coord) {
        let mut id_base = self.id[v1];
        let mut id_add = self.id[v2];
        if self.sg[id_base].get_size() < self.sg[id_add].get_size() {
            std::mem::swap(&mut id_base, &mut id_add);
        }

        // self.sg[id_base].merge(&self.sg[id_add])
        if id_base < id_add {
            let (front, back) = self.sg.split_at_mut(id_add);
            front[id_base].merge(&back[0]);
        } else {
            let (front, back) = self.sg.split_at_mut(id_base);
            back[0].merge(&front[id_add]);
        }

        let mut v_tmp = id_add;
        loop {
            self.id[v_tmp] = id_base;
            v_tmp = self.next[v_tmp];
            if v_tmp == id_add {
                break;
            }
        }
        self.next.swap(v1, v2);
    }

    fn place_stone(&mut self, v: Coord, color: Color) {
        let stone_color = Intersection::Stone(color);
        self.color[v] = stone_color;
        self.id[v] = v;
        self.sg[v].clear(true);
        for &nv in &self.neighbors(v) {
            if self.color[nv] == Intersection::Empty {
                self.sg[v].add(nv);
            } else {
                let nid = self.id[nv];
                self.sg[nid].sub(v);
            }
        }
        for &nv in &self.neighbors(v) {
            if self.color[nv] == stone_color && self.id[nv] != self.id[v] {
                self.merge(v, nv);
            }
        }
        self.remove_cnt = 0;
        let opponent_stone = Intersection::Stone(color.opponent());
        for &nv in &self.neighbors(v) {
            if self.color[nv] == opponent_stone && self.sg[self.id[nv]].get_lib_cnt() == 0 {
                self.remove(nv);
            }
        }
    }

    fn is_ko(&self, v: Coord, color: Color) -> bool {
        self.ko == Some((v, color))
    }

    /// 空点vにcolorが打つと自殺手になるかどうかです。
    fn is_suicide(&self, v: Coord, color: Color) -> bool {
        let mut stone_cnt = [0, 0];
        let mut atr_cnt = [0, 0];
        for &nv in &self.neighbors(v) {
            match self.color[nv] {
                Intersection::Empty => {
                    return false;
                }
                Intersection::Stone(c) => {
                    stone_cnt[c.plane_code()] += 1;
                    if self.sg[self.id[nv]].get_lib_cnt() == 1 {
                        atr_cnt[c.plane_code()] += 1;
                    }
                }
                Intersection::Exterior => {}
            }
        }
        let me = color.plane_code();
        let opp = color.opponent().plane_code();
        !(atr_cnt[opp] != 0 || atr_cnt[me] < stone_cnt[me])
    }

    fn check(&self, v: Coord, color: Color) -> Result<(), EngineError> {
        let illegal = |reason| EngineError::IllegalMove {
            coord: v,
            color,
            reason,
        };
        if !self.on_board(v) {
            Err(illegal("off board"))
        } else if self.color[v] != Intersection::Empty {
            Err(illegal("occupied"))
        } else if self.is_ko(v, color) {
            Err(illegal("ko"))
        } else if self.is_suicide(v, color) {
            Err(illegal("suicide"))
        } else {
            Ok(())
        }
    }

    /// Tromp-Taylorルールでの(黒, 白)の地です。石の数と片方の色にだけ接する空点の数の和です。
    pub fn area(&self) -> (usize, usize) {
        let mut cnt = [0, 0];
        let mut visited = vec![false; self.color.len()];
        for v in (0..self.bsize * self.bsize).map(|rv| self.rv2ev(rv)) {
            match self.color[v] {
                Intersection::Stone(c) => cnt[c.plane_code()] += 1,
                Intersection::Empty if !visited[v] => {
                    let mut region = 0;
                    let mut border = [false, false];
                    let mut stack = vec![v];
                    visited[v] = true;
                    while let Some(u) = stack.pop() {
                        region += 1;
                        for &nv in &self.neighbors(u) {
                            match self.color[nv] {
                                Intersection::Empty if !visited[nv] => {
                                    visited[nv] = true;
                                    stack.push(nv);
                                }
                                Intersection::Stone(c) => border[c.plane_code()] = true,
                                _ => {}
                            }
                        }
                    }
                    match border {
                        [true, false] => cnt[Color::Black.plane_code()] += region,
                        [false, true] => cnt[Color::White.plane_code()] += region,
                        _ => {}
                    }
                }
                _ => {}
            }
        }
        (cnt[0], cnt[1])
    }

    pub fn showboard(&self) -> String {
        let xlabel = format!(
            "  {}",
            X_LABELS[..self.bsize].iter().map(|x| format!(" {} ", x)).join("")
        );
        let mut lines = vec![xlabel.clone()];
        for i in 0..self.bsize {
            let y = self.bsize - i;
            let mut line_str = format!("{:>2}", y);
            for j in 0..self.bsize {
                let v = self.ij_to_coord(i, j);
                let x_str = match self.color[v] {
                    Intersection::Stone(c) => {
                        let stone_str = match c {
                            Color::White => "O",
                            Color::Black => "X",
                        };
                        if Some(v) == self.prev_move {
                            format!("[{}]", stone_str)
                        } else {
                            format!(" {} ", stone_str)
                        }
                    }
                    Intersection::Empty => " . ".to_string(),
                    Intersection::Exterior => " ? ".to_string(),
                };
                line_str.push_str(&x_str);
            }
            line_str.push_str(&format!("{:>2}", y));
            lines.push(line_str);
        }
        lines.push(xlabel);
        lines.join("\n")
    }
}

impl BoardEngine for Board {
    const PASS: Coord = usize::MAX;
    const RESIGN: Coord = usize::MAX - 1;

    fn create(size: usize) -> Self {
        Self::new(size)
    }

    fn size(&self) -> usize {
        self.bsize
    }

    fn legal_coords(&self, color: Color, filter_suicides: bool) -> Vec<Coord> {
        let mut cand_list: Vec<Coord> = (0..self.bsize * self.bsize)
            .map(|rv| self.rv2ev(rv))
            .filter(|&v| self.color[v] == Intersection::Empty && !self.is_ko(v, color))
            .filter(|&v| !filter_suicides || !self.is_suicide(v, color))
            .collect();
        cand_list.push(Self::PASS);
        cand_list.push(Self::RESIGN);
        cand_list
    }

    fn play(&mut self, v: Coord, color: Color) -> Result<(), EngineError> {
        if v == Self::RESIGN {
            self.resigned = true;
        } else if v == Self::PASS {
            self.ko = None;
            self.pass_cnt += 1;
        } else {
            self.check(v, color)?;
            self.place_stone(v, color);
            let id = self.id[v];
            self.ko = None;
            if self.remove_cnt == 1 && self.sg[id].get_size() == 1 {
                if let Some(v_atr) = self.sg[id].get_v_atr() {
                    self.ko = Some((v_atr, color.opponent()));
                }
            }
            self.pass_cnt = 0;
        }
        self.prev_move = Some(v);
        self.move_cnt += 1;
        Ok(())
    }

    fn encode(&self) -> [Vec<u8>; 2] {
        let bvcnt = self.bsize * self.bsize;
        let mut planes = [vec![0; bvcnt], vec![0; bvcnt]];
        for rv in 0..bvcnt {
            if let Intersection::Stone(c) = self.color[self.rv2ev(rv)] {
                planes[c.plane_code()][rv] = 1;
            }
        }
        planes
    }

    fn is_terminal(&self) -> bool {
        self.resigned || self.pass_cnt >= 2
    }

    fn official_score(&self) -> f32 {
        let (black, white) = self.area();
        white as f32 - black as f32
    }

    fn coord_to_ij(&self, coord: Coord) -> Option<(usize, usize)> {
        if self.on_board(coord) {
            Some((coord / self.ebsize - 1, coord % self.ebsize - 1))
        } else {
            None
        }
    }

    fn ij_to_coord(&self, i: usize, j: usize) -> Coord {
        (i + 1) * self.ebsize + j + 1
    }

    fn render(&self) -> String {
        self.showboard()
    }
}

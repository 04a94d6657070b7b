//! 1局分の対局を管理する、自己対局と学習のための環境です。

use crate::action::{self, Action};
use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::constants::komi;
use crate::engine::BoardEngine;
use crate::error::GameError;
use crate::feature::StateTensor;
use crate::history::History;
use crate::intersection::Color;

/// 碁の環境です。
///
/// 碁盤エンジン、履歴、NNへの入力、終局フラグを所有します。
/// `clone`は碁盤エンジンごと複製するので、探索で仮の続きを打つのに使えます。
#[derive(Clone, Debug)]
pub struct GoGame<E: BoardEngine = Board> {
    bsize: usize,
    komi: f32,
    player_color: Color,
    to_move: Color,
    board: E,
    history: History,
    state: StateTensor,
    done: bool,
}

impl GoGame<Board> {
    /// player_colorの石を持つエージェントのための環境を作ります。
    pub fn new(player_color: Color, bsize: usize) -> Result<Self, ConfigError> {
        Self::with_engine(&GameConfig::new(player_color, bsize))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_engine(config)
    }
}

impl<E: BoardEngine> GoGame<E> {
    /// 碁盤エンジンEを使う環境を作ります。
    pub fn with_engine(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bsize = config.board_size;
        let history = History::new(bsize, config.history);
        let state = StateTensor::zeros(bsize, history.len() + 1);
        let mut game = Self {
            bsize,
            komi: komi(bsize),
            player_color: config.player_color,
            to_move: config.player_color,
            board: E::create(bsize),
            history,
            state,
            done: false,
        };
        game.reset();
        Ok(game)
    }

    /// 対局をやり直し、初期状態の入力を返します。
    pub fn reset(&mut self) -> StateTensor {
        self.komi = komi(self.bsize);
        self.board = E::create(self.bsize);
        self.done = false;
        self.to_move = self.player_color;
        self.history.reset();
        self.state = StateTensor::zeros(self.bsize, self.history.len() + 1);
        log::debug!(
            "reset: bsize={} komi={} history={} player={}",
            self.bsize,
            self.komi,
            self.history.depth(),
            self.player_color
        );
        self.state.clone()
    }

    /// 手番の色の合法手を行動として昇順で返します。自殺手は含みません。
    pub fn legal_actions(&self) -> Result<Vec<Action>, GameError> {
        if self.done {
            return Err(GameError::InvalidState("legal actions queried after the game ended"));
        }
        let mut actions = self
            .board
            .legal_coords(self.to_move, true)
            .into_iter()
            .map(|c| action::action_of(&self.board, c))
            .collect::<Result<Vec<_>, _>>()?;
        actions.sort_unstable();
        Ok(actions)
    }

    /// 手番の色でactionを打ち、新しい入力と終局したかどうかを返します。
    ///
    /// 終局後は何もせず現在の入力を返します。
    /// エラーのときは環境の状態を変更しません。
    pub fn step(&mut self, action: Action) -> Result<(StateTensor, bool), GameError> {
        if !self.done {
            self.act(action)?;
            self.done = self.board.is_terminal();
            self.state = self.history.build_tensor(self.to_move);
            log::trace!("state rebuilt for {} to move", self.to_move);
        }
        Ok((self.state.clone(), self.done))
    }

    fn act(&mut self, action: Action) -> Result<(), GameError> {
        let coord = action::native_coordinate_of(&self.board, action)?;
        let mut board = self.board.clone();
        board.play(coord, self.to_move)?;
        self.board = board;

        // 相手の最後のプレーンを捨て、着手した色のプレーンを先頭に入れる
        let planes = self.board.encode();
        self.history.push(&planes[self.to_move.plane_code()]);
        log::debug!("{} plays action {}", self.to_move, action);

        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// コミを含めた地の差です。正なら白が勝っています。
    pub fn score(&self) -> f32 {
        self.komi + self.board.official_score()
    }

    /// 終局後の、エージェントの色から見た報酬(1, 0, -1)です。
    pub fn reward(&self) -> Result<i8, GameError> {
        if !self.done {
            return Err(GameError::InvalidState("reward requested before the game ended"));
        }
        let score = self.score();
        let white_wins = score > 0.0;
        let black_wins = score < 0.0;
        let player_wins = (white_wins && self.player_color == Color::White)
            || (black_wins && self.player_color == Color::Black);

        Ok(if player_wins {
            1
        } else if white_wins ^ black_wins {
            -1
        } else {
            0
        })
    }

    /// SGF形式の結果の文字列です。例えば"B+3.5"は黒の3.5目勝ちです。
    /// 持碁は"B+W"になります。
    pub fn result_string(&self) -> Result<String, GameError> {
        if !self.done {
            return Err(GameError::InvalidState("result requested before the game ended"));
        }
        let score = self.score();
        let label = |white: bool| if white { "W" } else { "B" };
        let winner = label(score > 0.0);

        // TODO: 持碁を"0"や"Draw"で表すかは棋譜を読む側と決める
        if score == 0.0 {
            return Ok(format!("{}+{}", winner, label(!(score > 0.0))));
        }
        Ok(format!("{}+{:.1}", winner, score.abs()))
    }

    /// 現在の入力のコピーです。
    pub fn states(&self) -> StateTensor {
        self.state.clone()
    }

    /// 手番と碁盤の文字表現です。
    pub fn render(&self) -> String {
        format!("To play: {}\n{}\n", self.to_move, self.board.render())
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.bsize
    }

    #[inline]
    pub fn komi(&self) -> f32 {
        self.komi
    }

    #[inline]
    pub fn player_color(&self) -> Color {
        self.player_color
    }

    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn engine(&self) -> &E {
        &self.board
    }
}

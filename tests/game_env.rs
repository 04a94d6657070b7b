use go_env::action::{action_space_size, pass_action, resign_action};
use go_env::{
    Board, BoardEngine, Color, Coord, EngineError, GameConfig, GameError, GoGame, StateTensor,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 投了を受け付けない碁盤エンジンです。
#[derive(Clone)]
struct NoResignBoard(Board);

impl BoardEngine for NoResignBoard {
    const PASS: Coord = Board::PASS;
    const RESIGN: Coord = Board::RESIGN;

    fn create(size: usize) -> Self {
        NoResignBoard(Board::new(size))
    }

    fn size(&self) -> usize {
        self.0.size()
    }

    fn legal_coords(&self, color: Color, filter_suicides: bool) -> Vec<Coord> {
        self.0.legal_coords(color, filter_suicides)
    }

    fn play(&mut self, coord: Coord, color: Color) -> Result<(), EngineError> {
        if coord == Self::RESIGN {
            return Err(EngineError::IllegalMove {
                coord,
                color,
                reason: "resign is not supported",
            });
        }
        self.0.play(coord, color)
    }

    fn encode(&self) -> [Vec<u8>; 2] {
        self.0.encode()
    }

    fn is_terminal(&self) -> bool {
        self.0.is_terminal()
    }

    fn official_score(&self) -> f32 {
        self.0.official_score()
    }

    fn coord_to_ij(&self, coord: Coord) -> Option<(usize, usize)> {
        self.0.coord_to_ij(coord)
    }

    fn ij_to_coord(&self, i: usize, j: usize) -> Coord {
        self.0.ij_to_coord(i, j)
    }

    fn render(&self) -> String {
        self.0.render()
    }
}

fn assert_shapes(game: &GoGame, tensor: &StateTensor) {
    let bsize = game.board_size();
    let h = game.history();
    assert_eq!(h.len(), 2 * h.depth());
    for i in 0..h.len() {
        assert_eq!(h.plane(i).len(), bsize * bsize);
    }
    assert_eq!(tensor.shape(), (bsize, bsize, 2 * h.depth() + 1));
}

#[test]
fn two_passes_end_an_empty_nine_by_nine_game() {
    let mut game = GoGame::new(Color::Black, 9).unwrap();
    let (_, done) = game.step(81).unwrap();
    assert!(!done);
    let (_, done) = game.step(81).unwrap();
    assert!(done);
    let result = game.result_string().unwrap();
    assert_eq!(result, "W+5.5");
    assert_eq!(game.reward().unwrap(), -1);
}

#[test]
fn steps_after_termination_change_nothing() {
    let mut game = GoGame::new(Color::Black, 9).unwrap();
    game.step(30).unwrap();
    game.step(81).unwrap();
    let (last, done) = game.step(81).unwrap();
    assert!(done);
    for a in [0, 81, 82, 1000] {
        let (t, done) = game.step(a).unwrap();
        assert!(done);
        assert_eq!(t, last);
    }
    assert_eq!(game.engine().get_move_cnt(), 3);
}

#[test]
fn out_of_range_action_touches_nothing() {
    let mut game = GoGame::new(Color::Black, 9).unwrap();
    game.step(10).unwrap();
    let before = game.states();
    let err = game.step(83).unwrap_err();
    assert!(matches!(err, GameError::InvalidAction { action: 83, max: 82 }));
    assert_eq!(game.states(), before);
    assert_eq!(game.to_move(), Color::White);
    assert_eq!(game.engine().get_move_cnt(), 1);
    assert_eq!(game.history().plane(0).iter().sum::<u8>(), 1);
    assert_eq!(game.history().plane(1).iter().sum::<u8>(), 0);
}

#[test]
fn resign_is_accepted_by_the_reference_engine() {
    let mut game = GoGame::new(Color::White, 9).unwrap();
    assert!(game.legal_actions().unwrap().contains(&resign_action(9)));
    let (_, done) = game.step(82).unwrap();
    assert!(done);
    // 投了の印はこの層では扱わず、地の計算の結果になる
    assert_eq!(game.result_string().unwrap(), "W+5.5");
}

#[test]
fn resign_rejected_by_engine_leaves_state_intact() {
    let config = GameConfig::new(Color::Black, 9);
    let mut game: GoGame<NoResignBoard> = GoGame::with_engine(&config).unwrap();
    game.step(40).unwrap();
    let before = game.states();
    let actions = game.legal_actions().unwrap();

    let err = game.step(82).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove(_)));
    assert_eq!(game.states(), before);
    assert_eq!(game.to_move(), Color::White);
    assert!(!game.is_done());
    assert_eq!(game.legal_actions().unwrap(), actions);

    // 続けて打てる
    let (_, done) = game.step(pass_action(9)).unwrap();
    assert!(!done);
}

#[test]
fn random_games_keep_history_and_tensor_shapes() {
    let mut rng = StdRng::seed_from_u64(7);
    for &(bsize, history) in &[(5, 8), (9, 8), (7, 2), (13, 1)] {
        let config = GameConfig {
            board_size: bsize,
            history,
            player_color: Color::Black,
        };
        let mut game = GoGame::from_config(&config).unwrap();
        let t = game.reset();
        assert_shapes(&game, &t);
        let mut plies = 0;
        while !game.is_done() {
            let actions = game.legal_actions().unwrap();
            assert!(actions.iter().all(|&a| a < action_space_size(bsize)));
            let candidates: Vec<_> = actions
                .into_iter()
                .filter(|&a| a != resign_action(bsize))
                .collect();
            let a = if plies > 4 * bsize * bsize {
                pass_action(bsize)
            } else {
                *candidates.choose(&mut rng).unwrap()
            };
            let (t, _) = game.step(a).unwrap();
            assert_shapes(&game, &t);
            plies += 1;
        }
        let reward = game.reward().unwrap();
        assert!((-1..=1).contains(&reward));
        let result = game.result_string().unwrap();
        assert!(result.starts_with("W+") || result.starts_with("B+"));
    }
}

#[test]
fn reward_sign_law_for_both_colors() {
    for &player in &[Color::Black, Color::White] {
        for &black_first_stone in &[true, false] {
            // コミ0の5路で中央に1子だけ置いて両者パスする
            let mut game = GoGame::new(player, 5).unwrap();
            let stone_color = if black_first_stone {
                Color::Black
            } else {
                Color::White
            };
            if game.to_move() != stone_color {
                game.step(pass_action(5)).unwrap();
            }
            game.step(12).unwrap();
            game.step(pass_action(5)).unwrap();
            game.step(pass_action(5)).unwrap();
            assert!(game.is_done());

            let expected = if stone_color == player { 1 } else { -1 };
            assert_eq!(game.reward().unwrap(), expected);
        }
    }
}

#[test]
fn reset_starts_a_fresh_game() {
    let mut game = GoGame::new(Color::Black, 9).unwrap();
    game.step(3).unwrap();
    game.step(81).unwrap();
    game.step(81).unwrap();
    assert!(game.is_done());
    let t = game.reset();
    assert!(!game.is_done());
    assert_eq!(game.to_move(), Color::Black);
    assert!(t.as_slice().iter().all(|&x| x == 0));
    assert_eq!(game.engine().get_move_cnt(), 0);
    assert_eq!(game.legal_actions().unwrap().len(), 83);
}

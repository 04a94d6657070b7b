//! goenv: 碁の環境をランダムな自己対局で動かします。

use std::error::Error;
use std::process;

use go_env::action::{pass_action, resign_action};
use go_env::constants::{DEFAULT_BSIZE, DEFAULT_HISTORY};
use go_env::{Color, GameConfig, GameError, GoGame};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

struct Options {
    config: GameConfig,
    games: usize,
    seed: u64,
    show: bool,
}

fn print_usage(program: &str, opts: getopts::Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}", opts.usage(&brief));
}

fn make_opts() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "Help")
        .optflag("", "show", "Show the board after every move.")
        .optopt("", "size", &format!("Board size default: {}", DEFAULT_BSIZE), "NUM")
        .optopt("", "history", &format!("History depth default: {}", DEFAULT_HISTORY), "NUM")
        .optopt("", "color", "Player color default: black", "black|white")
        .optopt("", "games", "Number of games default: 1", "NUM")
        .optopt("", "seed", "Random seed default: 0", "NUM");
    opts
}

fn parse_opt<T: std::str::FromStr>(
    matches: &getopts::Matches,
    name: &str,
    default: T,
) -> Result<T, String> {
    match matches.opt_str(name) {
        Some(s) => s.parse().map_err(|_| format!("invalid --{}: {}", name, s)),
        None => Ok(default),
    }
}

fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let opts = make_opts();
    let matches = opts.parse(&args[1..]).map_err(|f| f.to_string())?;
    if matches.opt_present("h") {
        print_usage(&args[0], opts);
        return Ok(None);
    }
    let player_color = match matches.opt_str("color") {
        Some(s) => s.parse::<Color>().map_err(|e| e.to_string())?,
        None => Color::Black,
    };
    let config = GameConfig {
        board_size: parse_opt(&matches, "size", DEFAULT_BSIZE)?,
        history: parse_opt(&matches, "history", DEFAULT_HISTORY)?,
        player_color,
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(Some(Options {
        config,
        games: parse_opt(&matches, "games", 1)?,
        seed: parse_opt(&matches, "seed", 0)?,
        show: matches.opt_present("show"),
    }))
}

/// 投了以外の合法手からランダムに選んで終局まで打ちます。
fn random_self_play(game: &mut GoGame, rng: &mut StdRng, show: bool) -> Result<(), GameError> {
    let bsize = game.board_size();
    let max_move_cnt = (bsize + 2) * (bsize + 2) * 2;
    let pass = pass_action(bsize);
    let mut move_cnt = 0;
    game.reset();
    while !game.is_done() {
        let candidates: Vec<_> = game
            .legal_actions()?
            .into_iter()
            .filter(|&a| a != resign_action(bsize))
            .collect();
        let mov = if move_cnt >= max_move_cnt {
            pass
        } else {
            *candidates.choose(rng).unwrap_or(&pass)
        };
        game.step(mov)?;
        move_cnt += 1;
        if show {
            eprintln!("\nmove count={}", move_cnt);
            eprint!("{}", game.render());
        }
    }
    Ok(())
}

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut game = GoGame::from_config(&options.config)?;
    let mut total = 0i64;
    for i in 0..options.games {
        random_self_play(&mut game, &mut rng, options.show)?;
        let result = game.result_string()?;
        let reward = game.reward()?;
        total += reward as i64;
        log::info!("game {}: result {} reward {}", i, result, reward);
        println!("{}\t{}\t{}", i, result, reward);
    }
    log::info!(
        "{} games as {}: total reward {}",
        options.games,
        options.config.player_color,
        total
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => process::exit(0),
        Err(e) => {
            eprintln!("{}", e);
            print_usage(&args[0], make_opts());
            process::exit(2);
        }
    };
    if let Err(e) = run(&options) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

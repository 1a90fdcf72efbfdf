use std::io::{self, BufReader, Stdin, Write};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use plum_tactics::chess_errors::ChessResult;
use plum_tactics::coordinator::turn_coordinator::{GameOutcome, TurnCoordinator};
use plum_tactics::engines::engine_alpha_beta::AlphaBetaEngine;
use plum_tactics::engines::engine_external::{ExternalPlayer, LineInput};
use plum_tactics::engines::engine_random::RandomEngine;
use plum_tactics::engines::engine_trait::Player;
use plum_tactics::game_state::chess_types::Color;
use plum_tactics::game_state::game_state::GameState;
use plum_tactics::search::iterative_deepening::SearchConfig;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerKind {
    Human,
    Random,
    AlphaBeta,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess in the terminal", long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    white: PlayerKind,

    #[arg(long, value_enum, default_value_t = PlayerKind::AlphaBeta)]
    black: PlayerKind,

    /// Search time per computer move.
    #[arg(long, default_value_t = 2_000)]
    movetime_ms: u64,

    /// Iterative deepening stops after this depth even with time left.
    #[arg(long, default_value_t = 64)]
    max_depth: u8,

    /// Stop after this many plies, for unattended self-play.
    #[arg(long)]
    max_plies: Option<usize>,

    /// Start from this FEN position instead of the initial one.
    #[arg(long)]
    fen: Option<String>,
}

type SharedStdin = Arc<Mutex<BufReader<Stdin>>>;

fn build_player(
    kind: PlayerKind,
    color: Color,
    config: SearchConfig,
    stdin: &SharedStdin,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(ExternalPlayer::new(
            format!("{color:?} (human)"),
            LineInput::shared(Arc::clone(stdin)),
        )),
        PlayerKind::Random => Box::new(RandomEngine::new()),
        PlayerKind::AlphaBeta => Box::new(AlphaBetaEngine::new(config)),
    }
}

fn play(cli: &Cli) -> ChessResult<GameOutcome> {
    let initial = match &cli.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    let config = SearchConfig {
        max_depth: cli.max_depth,
        movetime_ms: cli.movetime_ms,
    };

    // One stdin buffer shared by both human sides.
    let stdin: SharedStdin = Arc::new(Mutex::new(BufReader::new(io::stdin())));
    let mut coordinator = TurnCoordinator::new(
        initial,
        build_player(cli.white, Color::White, config, &stdin),
        build_player(cli.black, Color::Black, config, &stdin),
    );

    loop {
        let view = coordinator.snapshot()?;
        println!("\n{view}\n");

        if cli
            .max_plies
            .is_some_and(|limit| coordinator.history().len() >= limit)
        {
            return Ok(GameOutcome::PlyLimitReached);
        }

        let side = view.side_to_move();
        let human_to_move = match side {
            Color::White => cli.white == PlayerKind::Human,
            Color::Black => cli.black == PlayerKind::Human,
        };
        if human_to_move && !view.legal_moves(side)?.is_empty() {
            print!("{side:?} to move (e.g. e2e4, e7e8n): ");
            io::stdout().flush().ok();
        }

        if let Some(outcome) = coordinator.play_ply()? {
            println!("\n{}\n", coordinator.snapshot()?);
            return Ok(outcome);
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match play(&cli) {
        Ok(outcome) => {
            println!("Game over: {outcome}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "game aborted");
            ExitCode::FAILURE
        }
    }
}

//! Computer player backed by iterative-deepening alpha-beta search.
//!
//! Each turn runs the search on a dedicated worker thread that owns a private
//! snapshot of the position, so the live game is never touched while it runs.
//! The caller blocks until the worker returns.

use std::sync::Arc;
use std::thread;

use tracing::{debug, info, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_random::pick_random_legal_move;
use crate::engines::engine_trait::Player;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::iterative_deepening::{
    iterative_deepening_search, SearchConfig, SearchResult, SearchTermination,
};

/// Per-turn lifecycle of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    TimeExpired,
    DepthExhausted,
    Done,
}

pub struct AlphaBetaEngine {
    config: SearchConfig,
    scorer: Arc<dyn BoardScorer>,
    phase: SearchPhase,
    last_result: Option<SearchResult>,
}

impl AlphaBetaEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, Arc::new(MaterialScorer))
    }

    pub fn with_scorer(config: SearchConfig, scorer: Arc<dyn BoardScorer>) -> Self {
        Self {
            config,
            scorer,
            phase: SearchPhase::Idle,
            last_result: None,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Outcome of the most recent search, if any ran.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    fn set_phase(&mut self, phase: SearchPhase) {
        debug!(from = ?self.phase, to = ?phase, "search phase");
        self.phase = phase;
    }

    fn run_worker(&self, game_state: &GameState) -> ChessResult<SearchResult> {
        let snapshot = game_state.snapshot();
        let scorer = Arc::clone(&self.scorer);
        let config = self.config;

        let handle = thread::Builder::new()
            .name("alpha-beta-search".to_owned())
            .spawn(move || iterative_deepening_search(&snapshot, scorer.as_ref(), config))
            .map_err(|e| ChessError::SearchWorkerSpawn(e.to_string()))?;

        handle.join().map_err(|_| ChessError::SearchWorkerPanicked)?
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Player for AlphaBetaEngine {
    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<Move>> {
        self.set_phase(SearchPhase::Searching);
        let result = match self.run_worker(game_state) {
            Ok(result) => result,
            Err(err) => {
                self.set_phase(SearchPhase::Idle);
                return Err(err);
            }
        };

        self.set_phase(match result.termination {
            SearchTermination::TimeExpired => SearchPhase::TimeExpired,
            _ => SearchPhase::DepthExhausted,
        });
        info!(
            depth = result.reached_depth,
            score = result.best_score,
            nodes = result.nodes,
            elapsed_ms = result.elapsed_ms,
            termination = ?result.termination,
            "search finished"
        );

        let chosen = match result.best_move {
            Some(mv) => Some(mv),
            None => {
                let fallback = pick_random_legal_move(game_state, &mut rand::rng())?;
                if let Some(mv) = fallback {
                    warn!(mv = %mv, "no search depth completed, playing a random legal move");
                }
                fallback
            }
        };

        self.last_result = Some(result);
        self.set_phase(SearchPhase::Done);
        Ok(chosen)
    }
}

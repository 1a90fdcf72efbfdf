//! Drives a game ply by ply.
//!
//! The live `GameState` sits behind an `Arc<RwLock<_>>` so a presentation
//! layer can read it between plies. Players only ever see a snapshot; the
//! coordinator alone writes to the live state, matching each chosen move
//! against the live legal moves before executing it.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::Player;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate { stalemated: Color },
    PlyLimitReached,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner:?} wins"),
            GameOutcome::Stalemate { stalemated } => write!(f, "stalemate, {stalemated:?} cannot move"),
            GameOutcome::PlyLimitReached => write!(f, "ply limit reached"),
        }
    }
}

pub struct TurnCoordinator {
    state: Arc<RwLock<GameState>>,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    history: Vec<Move>,
    max_plies: Option<usize>,
}

impl TurnCoordinator {
    pub fn new(initial: GameState, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            white,
            black,
            history: Vec::new(),
            max_plies: None,
        }
    }

    /// Stops `run` with `PlyLimitReached` once this many plies were played.
    pub fn with_ply_limit(mut self, max_plies: usize) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    /// Handle for readers such as a renderer. Lock it only between plies.
    pub fn shared_state(&self) -> Arc<RwLock<GameState>> {
        Arc::clone(&self.state)
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn snapshot(&self) -> ChessResult<GameState> {
        Ok(self.read()?.snapshot())
    }

    fn read(&self) -> ChessResult<RwLockReadGuard<'_, GameState>> {
        self.state.read().map_err(|_| ChessError::StatePoisoned)
    }

    fn write(&self) -> ChessResult<RwLockWriteGuard<'_, GameState>> {
        self.state.write().map_err(|_| ChessError::StatePoisoned)
    }

    /// Terminal result of the live position, if any. Checkmate is tested for
    /// both colors, stalemate for the side to move.
    pub fn outcome(&self) -> ChessResult<Option<GameOutcome>> {
        let state = self.read()?;
        for color in Color::BOTH {
            if state.is_checkmate(color)? {
                return Ok(Some(GameOutcome::Checkmate {
                    winner: color.opposite(),
                }));
            }
        }
        let side = state.side_to_move();
        if state.is_stalemate(side)? {
            return Ok(Some(GameOutcome::Stalemate { stalemated: side }));
        }
        Ok(None)
    }

    /// Plays one ply unless the game is already over, then reports the outcome.
    pub fn play_ply(&mut self) -> ChessResult<Option<GameOutcome>> {
        if let Some(outcome) = self.outcome()? {
            return Ok(Some(outcome));
        }

        let view = self.snapshot()?;
        let side = view.side_to_move();
        let player = match side {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let chosen = player
            .choose_move(&view)?
            .ok_or_else(|| ChessError::IllegalMove(format!("{} returned no move", player.name())))?;

        {
            let mut state = self.state.write().map_err(|_| ChessError::StatePoisoned)?;
            let mut mv = state
                .legal_moves(side)?
                .iter()
                .find(|legal| legal.same_action(&chosen))
                .copied()
                .ok_or_else(|| ChessError::IllegalMove(chosen.to_string()))?;
            state.execute(&mut mv)?;
            self.history.push(mv);
        }
        info!(ply = self.history.len(), side = ?side, mv = %chosen, "ply played");

        self.outcome()
    }

    /// Plays until checkmate, stalemate, or the ply limit.
    pub fn run(&mut self) -> ChessResult<GameOutcome> {
        loop {
            if self.max_plies.is_some_and(|limit| self.history.len() >= limit) {
                info!(plies = self.history.len(), "ply limit reached");
                return Ok(GameOutcome::PlyLimitReached);
            }
            if let Some(outcome) = self.play_ply()? {
                info!(plies = self.history.len(), %outcome, "game over");
                return Ok(outcome);
            }
        }
    }

    /// Undoes the latest ply on the live state and returns it.
    pub fn take_back(&mut self) -> ChessResult<Move> {
        let mut mv = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        let result = self.write()?.undo(&mut mv);
        if let Err(err) = result {
            self.history.push(mv);
            return Err(err);
        }
        info!(mv = %mv, "ply taken back");
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Mutex;

    use super::*;
    use crate::engines::engine_alpha_beta::AlphaBetaEngine;
    use crate::engines::engine_external::{ExternalPlayer, LineInput};
    use crate::engines::engine_random::RandomEngine;
    use crate::search::iterative_deepening::SearchConfig;

    fn scripted(lines: &str) -> Box<dyn Player> {
        Box::new(ExternalPlayer::new(
            "script",
            LineInput::new(Cursor::new(lines.as_bytes().to_vec())),
        ))
    }

    #[test]
    fn fools_mate_ends_in_checkmate_for_black() {
        let mut coordinator = TurnCoordinator::new(
            GameState::new_game(),
            scripted("f2f3\ng2g4\n"),
            scripted("e7e5\nd8h4\n"),
        );
        assert_eq!(
            coordinator.run().expect("game"),
            GameOutcome::Checkmate {
                winner: Color::Black
            }
        );
        assert_eq!(coordinator.history().len(), 4);
        assert_eq!(coordinator.history()[3].to_string(), "d8h4");
    }

    #[test]
    fn two_humans_share_one_line_source() {
        let source = Arc::new(Mutex::new(Cursor::new(b"f2f3\ne7e5\ng2g4\nd8h4\n".to_vec())));
        let white = ExternalPlayer::new("white", LineInput::shared(Arc::clone(&source)));
        let black = ExternalPlayer::new("black", LineInput::shared(Arc::clone(&source)));
        let mut coordinator = TurnCoordinator::new(GameState::new_game(), Box::new(white), Box::new(black));
        assert_eq!(
            coordinator.run().expect("game"),
            GameOutcome::Checkmate {
                winner: Color::Black
            }
        );
        let played: Vec<String> = coordinator.history().iter().map(Move::to_string).collect();
        assert_eq!(played, ["f2f3", "e7e5", "g2g4", "d8h4"]);
    }

    #[test]
    fn stalemate_is_reported_for_the_side_to_move() {
        let start = GameState::from_fen("7k/8/5Q2/6K1/8/8/8/8 w - - 0 1").expect("fen");
        let mut coordinator = TurnCoordinator::new(start, scripted("f6f7\n"), scripted(""));
        assert_eq!(
            coordinator.play_ply().expect("ply"),
            Some(GameOutcome::Stalemate {
                stalemated: Color::Black
            })
        );
    }

    #[test]
    fn take_back_restores_the_live_state() {
        let mut coordinator = TurnCoordinator::new(
            GameState::new_game(),
            scripted("e2e4\n"),
            scripted("c7c5\n"),
        );
        coordinator.play_ply().expect("white ply");
        coordinator.play_ply().expect("black ply");

        let undone = coordinator.take_back().expect("take back");
        assert_eq!(undone.to_string(), "c7c5");
        let state = coordinator.snapshot().expect("snapshot");
        assert_eq!(state.side_to_move(), Color::Black);

        coordinator.take_back().expect("take back");
        assert_eq!(coordinator.snapshot().expect("snapshot"), GameState::new_game());
        assert_eq!(coordinator.take_back(), Err(ChessError::NothingToUndo));
    }

    #[test]
    fn random_self_play_respects_the_ply_limit() {
        let mut coordinator = TurnCoordinator::new(
            GameState::new_game(),
            Box::new(RandomEngine::seeded(11)),
            Box::new(RandomEngine::seeded(12)),
        )
        .with_ply_limit(6);
        assert_eq!(coordinator.run().expect("game"), GameOutcome::PlyLimitReached);
        assert_eq!(coordinator.history().len(), 6);
    }

    #[test]
    fn engine_converts_mate_in_one_through_the_coordinator() {
        let start = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("fen");
        let engine = AlphaBetaEngine::new(SearchConfig {
            max_depth: 3,
            movetime_ms: 30_000,
        });
        let mut coordinator = TurnCoordinator::new(start, Box::new(engine), scripted(""));
        assert_eq!(
            coordinator.run().expect("game"),
            GameOutcome::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn shared_state_sees_executed_plies() {
        let mut coordinator = TurnCoordinator::new(
            GameState::new_game(),
            scripted("g1f3\n"),
            scripted(""),
        );
        let view = coordinator.shared_state();
        coordinator.play_ply().expect("ply");
        let state = view.read().expect("lock");
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.last_move().map(|last| last.end.to_string()), Some("f3".to_owned()));
    }
}

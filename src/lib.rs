//! Crate root module declarations for the Plum Tactics chess engine.
//!
//! This file exposes the rules model (game state, moves, move generation),
//! the search and the players built on it, the turn coordinator, and utility
//! helpers, so the launcher, benches, and external tooling can import stable
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_execution;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_external;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod coordinator {
    pub mod turn_coordinator;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

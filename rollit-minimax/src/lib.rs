#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements depth limited adversarial search for games with any number of agents.
//! You provide a game state implementing [GameState] and pick one of the search strategies
//! (minimax, alpha-beta or expectimax). The engine then picks an action for agent 0, which is
//! always 'self'.
//!
//! Non-terminal states at the depth cutoff are scored by an [Evaluation]. The crate ships the
//! raw score evaluation and a composite positional heuristic built from parity, corner control
//! and mobility, tuned for Rollit style board games.
//!
//! The game itself stays outside this crate. For fixtures and debugging we provide
//! [tree_game::TreeGame], an explicit game tree that can be loaded from JSON.

mod config;
mod error;
mod eval;
mod game;
mod reflex;

pub mod search;
pub mod tree_game;

pub use config::{SearchOptions, Strategy, DEFAULT_DEPTH};
pub use error::Error;
pub use eval::{
    better_evaluation, score_evaluation, Evaluation, EvaluationFunction, HeuristicBreakdown,
};
pub use game::{AgentIndex, GameState, SELF_AGENT};
pub use reflex::ReflexAgent;
pub use search::{SearchReturn, Searcher};

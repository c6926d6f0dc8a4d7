//! Error types for the search engine

use thiserror::Error;

/// Everything that can go wrong when configuring or running a search
///
/// Numerical corner cases inside the heuristics (like a ratio with a zero denominator) are not
/// errors, they collapse to a neutral value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The self agent has nothing to play from the given state
    #[error("agent 0 has no legal actions in this state")]
    NoLegalActions,

    /// A search needs to look at least one round ahead
    #[error("invalid search depth {0}: depth must be at least 1")]
    InvalidDepth(usize),

    /// The evaluation function name did not match any known function
    #[error("unknown evaluation function '{0}' (expected 'score' or 'better')")]
    UnknownEvaluation(String),

    /// The strategy name did not match any known search strategy
    #[error("unknown search strategy '{0}' (expected 'minimax', 'alphabeta' or 'expectimax')")]
    UnknownStrategy(String),
}

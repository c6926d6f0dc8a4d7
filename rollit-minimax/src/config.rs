use std::{fmt, str::FromStr};

use crate::{Error, EvaluationFunction};

/// How many full rounds we look ahead when nothing else is configured
pub const DEFAULT_DEPTH: usize = 2;

/// The search disciplines supported by [crate::Searcher]
///
/// They all share the same traversal. They only differ in how the opponent nodes combine the
/// values of their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Opponents minimize agent 0's value
    #[default]
    Minimax,
    /// Minimax, skipping the subtrees that can't change the result
    AlphaBeta,
    /// Opponents pick uniformly at random, their nodes average their children
    Expectimax,
}

impl Strategy {
    /// The canonical short name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::AlphaBeta => "alphabeta",
            Self::Expectimax => "expectimax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "minimaxagent" => Ok(Self::Minimax),
            "alphabeta" | "alpha-beta" | "alphabetaagent" => Ok(Self::AlphaBeta),
            "expectimax" | "expectimaxagent" => Ok(Self::Expectimax),
            _ => Err(Error::UnknownStrategy(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Settings shared by every search strategy
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use rollit_minimax::{EvaluationFunction, SearchOptions};
///
/// let defaults: SearchOptions = Default::default();
///
/// assert_eq!(defaults.depth(), 2);
/// assert_eq!(defaults.evaluation(), EvaluationFunction::Better);
/// ```
pub struct SearchOptions {
    depth: usize,
    evaluation: EvaluationFunction,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            evaluation: EvaluationFunction::default(),
        }
    }
}

impl SearchOptions {
    /// Build options from a depth and the name of an evaluation function
    ///
    /// Fails if the depth is 0 or if the name doesn't match a known evaluation function
    ///
    /// ```
    /// use rollit_minimax::{Error, SearchOptions};
    ///
    /// assert!(SearchOptions::new(3, "score").is_ok());
    /// assert_eq!(SearchOptions::new(0, "score"), Err(Error::InvalidDepth(0)));
    /// ```
    pub fn new(depth: usize, evaluation: &str) -> Result<Self, Error> {
        Self::with_evaluation(depth, evaluation.parse()?)
    }

    /// Build options from a depth and an already resolved evaluation function
    pub fn with_evaluation(depth: usize, evaluation: EvaluationFunction) -> Result<Self, Error> {
        if depth == 0 {
            return Err(Error::InvalidDepth(depth));
        }

        Ok(Self { depth, evaluation })
    }

    /// The number of full rounds the search looks ahead
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The evaluation used at the depth cutoff
    pub fn evaluation(&self) -> EvaluationFunction {
        self.evaluation
    }
}

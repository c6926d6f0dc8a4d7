use std::str::FromStr;

use crate::{AgentIndex, Error, GameState, SELF_AGENT};

/// This trait is used to control something that can turn a game state into a value for agent 0
///
/// Higher is better for agent 0. Any `Fn(&GameType) -> f64` works as an evaluation, so plain
/// functions and closures can be handed to the search engine directly.
pub trait Evaluation<GameType> {
    /// Score the given state from the point of view of agent 0
    fn evaluate(&self, state: &GameType) -> f64;
}

impl<GameType, FnLike: Fn(&GameType) -> f64> Evaluation<GameType> for FnLike {
    fn evaluate(&self, state: &GameType) -> f64 {
        (self)(state)
    }
}

/// The named evaluation functions that can be picked from configuration
///
/// ```
/// use rollit_minimax::EvaluationFunction;
///
/// let parsed: EvaluationFunction = "betterEvaluationFunction".parse().unwrap();
/// assert_eq!(parsed, EvaluationFunction::Better);
/// assert!("nope".parse::<EvaluationFunction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationFunction {
    /// Agent 0's raw score, see [score_evaluation]
    Score,
    /// The composite positional heuristic, see [better_evaluation]
    #[default]
    Better,
}

impl EvaluationFunction {
    /// The canonical short name of this function
    pub fn name(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Better => "better",
        }
    }
}

impl FromStr for EvaluationFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" | "scoreevaluationfunction" => Ok(Self::Score),
            "better" | "betterevaluationfunction" => Ok(Self::Better),
            _ => Err(Error::UnknownEvaluation(s.to_owned())),
        }
    }
}

impl<GameType: GameState> Evaluation<GameType> for EvaluationFunction {
    fn evaluate(&self, state: &GameType) -> f64 {
        match self {
            Self::Score => score_evaluation(state),
            Self::Better => better_evaluation(state),
        }
    }
}

/// Agent 0's score, nothing more
pub fn score_evaluation<GameType: GameState>(state: &GameType) -> f64 {
    state.score(SELF_AGENT)
}

/// The composite positional heuristic
///
/// Blends parity, corner control and mobility, each expressed as a percentage in `[-100, 100]`
/// of agent 0 against all of its opponents combined. See [HeuristicBreakdown] for the individual
/// signals.
pub fn better_evaluation<GameType: GameState>(state: &GameType) -> f64 {
    HeuristicBreakdown::of(state).composite()
}

const PARITY_WEIGHT: f64 = 10.0;
const CORNER_WEIGHT: f64 = 200.0;
const MOBILITY_WEIGHT: f64 = 30.0;

/// The individual signals that make up [better_evaluation]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicBreakdown {
    /// Piece count of agent 0 against everyone else
    pub parity: f64,
    /// Corners held by agent 0 against corners held by the opponents
    pub corners: f64,
    /// Legal action count of agent 0 against everyone else
    pub mobility: f64,
}

impl HeuristicBreakdown {
    /// Compute every signal for the given state
    pub fn of<GameType: GameState>(state: &GameType) -> Self {
        Self {
            parity: parity(state),
            corners: corner_control(state),
            mobility: mobility(state),
        }
    }

    /// The weighted sum of the signals. Corners dominate, parity is the weakest signal
    pub fn composite(&self) -> f64 {
        PARITY_WEIGHT * self.parity + CORNER_WEIGHT * self.corners + MOBILITY_WEIGHT * self.mobility
    }
}

/// `100 * (mine - theirs) / (mine + theirs)`, or 0 when there is nothing to compare
fn percentage_difference(mine: f64, theirs: f64) -> f64 {
    let total = mine + theirs;
    if total == 0.0 {
        return 0.0;
    }

    100.0 * (mine - theirs) / total
}

fn opponents<GameType: GameState>(state: &GameType) -> impl Iterator<Item = AgentIndex> {
    1..state.num_agents()
}

fn parity<GameType: GameState>(state: &GameType) -> f64 {
    let theirs: f64 = opponents(state).map(|agent| state.score(agent)).sum();

    percentage_difference(state.score(SELF_AGENT), theirs)
}

/// Every corner reporting `-1` means the board has no corner information
const NO_CORNERS_SUM: i64 = -4;

fn corner_control<GameType: GameState>(state: &GameType) -> f64 {
    let corners = state.corners();
    // Widened so large owner indices can't overflow
    if corners.iter().map(|&owner| i64::from(owner)).sum::<i64>() == NO_CORNERS_SUM {
        return 0.0;
    }

    let mine = corners.iter().filter(|&&owner| owner == 0).count();
    let theirs = corners.iter().filter(|&&owner| owner > 0).count();

    percentage_difference(mine as f64, theirs as f64)
}

fn mobility<GameType: GameState>(state: &GameType) -> f64 {
    let mine = state.legal_actions(SELF_AGENT).len();
    let theirs: usize = opponents(state)
        .map(|agent| state.legal_actions(agent).len())
        .sum();

    percentage_difference(mine as f64, theirs as f64)
}

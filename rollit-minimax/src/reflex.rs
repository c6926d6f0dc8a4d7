use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{Error, Evaluation, EvaluationFunction, GameState, SELF_AGENT};

/// An agent that only looks one move ahead
///
/// Every legal action is scored by how much it changes the evaluation, comparing the successor
/// against the current state. With the default [EvaluationFunction::Score] that is simply the
/// number of points the move gains. Ties are broken uniformly at random, unlike [crate::Searcher]
/// which always prefers the first of equally valued actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflexAgent {
    evaluation: EvaluationFunction,
}

impl Default for ReflexAgent {
    fn default() -> Self {
        Self::new(EvaluationFunction::Score)
    }
}

impl ReflexAgent {
    /// Build a reflex agent scoring moves with the given evaluation
    pub fn new(evaluation: EvaluationFunction) -> Self {
        Self { evaluation }
    }

    /// Score every legal action of agent 0, in [GameState::legal_actions] order
    pub fn score_actions<GameType: GameState>(
        &self,
        state: &GameType,
    ) -> Vec<(GameType::Action, f64)> {
        let current = self.evaluation.evaluate(state);

        state
            .legal_actions(SELF_AGENT)
            .into_iter()
            .map(|action| {
                let next_state = state.successor(SELF_AGENT, &action);
                let gain = self.evaluation.evaluate(&next_state) - current;
                (action, gain)
            })
            .collect()
    }

    /// Pick one of the best scoring actions at random
    pub fn choose_action<GameType: GameState>(
        &self,
        state: &GameType,
    ) -> Result<GameType::Action, Error> {
        self.choose_action_with_rng(state, &mut rand::thread_rng())
    }

    /// Same as [ReflexAgent::choose_action], with the source of randomness provided by the caller
    pub fn choose_action_with_rng<GameType: GameState, R: Rng + ?Sized>(
        &self,
        state: &GameType,
        rng: &mut R,
    ) -> Result<GameType::Action, Error> {
        let scored = self.score_actions(state);

        let best = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        let best_actions: Vec<_> = scored
            .iter()
            .filter(|(_, score)| *score == best)
            .map(|(action, _)| action)
            .collect();

        let chosen = match best_actions.choose(rng) {
            Some(action) => (*action).clone(),
            None => scored
                .first()
                .map(|(action, _)| action.clone())
                .ok_or(Error::NoLegalActions)?,
        };

        debug!(?chosen, best, candidates = best_actions.len(), "reflex choice");

        Ok(chosen)
    }
}

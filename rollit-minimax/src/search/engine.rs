use derivative::Derivative;
use tracing::{debug, info, info_span, warn};

use crate::{
    AgentIndex, Error, Evaluation, EvaluationFunction, GameState, SearchOptions, Strategy,
    SELF_AGENT,
};

use super::{
    next_turn,
    node::{Accumulator, Window},
    SearchReturn,
};

#[derive(Derivative, Clone)]
#[derivative(Debug(bound = ""))]
/// This is the struct that wraps a search strategy, a depth and an evaluation and can be used to
/// pick actions for agent 0
///
/// It also outputs traces using the [tracing] crate.
pub struct Searcher<EvaluationType = EvaluationFunction> {
    strategy: Strategy,
    depth: usize,
    #[derivative(Debug = "ignore")]
    evaluation: EvaluationType,
}

impl Searcher<EvaluationFunction> {
    /// Construct a new `Searcher` from already validated [SearchOptions]
    ///
    /// ```rust
    /// use rollit_minimax::{tree_game::TreeGame, SearchOptions, Searcher, Strategy};
    ///
    /// // Agent 0 can take the safe move, or grab more points and get punished for it
    /// let game = TreeGame::new(vec![1.0, 1.0])
    ///     .with_move(0, "safe", TreeGame::new(vec![2.0, 1.0]))
    ///     .with_move(
    ///         0,
    ///         "greedy",
    ///         TreeGame::new(vec![3.0, 1.0]).with_move(1, "punish", TreeGame::new(vec![0.0, 5.0])),
    ///     );
    ///
    /// let searcher = Searcher::new(Strategy::Minimax, SearchOptions::new(1, "score")?);
    ///
    /// assert_eq!(searcher.choose_action(&game)?, "safe");
    /// # Ok::<(), rollit_minimax::Error>(())
    /// ```
    pub fn new(strategy: Strategy, options: SearchOptions) -> Self {
        Self {
            strategy,
            depth: options.depth(),
            evaluation: options.evaluation(),
        }
    }

    /// Construct a new `Searcher` by looking up the strategy and the evaluation function by name
    ///
    /// Unknown names and a depth of 0 are rejected here, before any search runs
    pub fn from_names(strategy: &str, depth: usize, evaluation: &str) -> Result<Self, Error> {
        Ok(Self::new(
            strategy.parse()?,
            SearchOptions::new(depth, evaluation)?,
        ))
    }
}

impl<EvaluationType> Searcher<EvaluationType> {
    /// Construct a new `Searcher` with a custom evaluation, like a closure
    pub fn with_evaluation(
        strategy: Strategy,
        depth: usize,
        evaluation: EvaluationType,
    ) -> Result<Self, Error> {
        if depth == 0 {
            return Err(Error::InvalidDepth(depth));
        }

        Ok(Self {
            strategy,
            depth,
            evaluation,
        })
    }

    /// The strategy used by this searcher
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The number of full rounds this searcher looks ahead
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pick the action agent 0 should take from `state`
    ///
    /// Among equally valued actions the first one in [GameState::legal_actions] order wins.
    /// Fails with [Error::NoLegalActions] if agent 0 can't move.
    pub fn choose_action<GameType>(&self, state: &GameType) -> Result<GameType::Action, Error>
    where
        GameType: GameState,
        EvaluationType: Evaluation<GameType>,
    {
        self.choose_action_with_tree(state).map(|(action, _)| action)
    }

    /// Same as [Searcher::choose_action], but also hands back the tree the decision was made
    /// from so callers can inspect it without searching a second time
    pub fn choose_action_with_tree<GameType>(
        &self,
        state: &GameType,
    ) -> Result<(GameType::Action, SearchReturn<GameType::Action>), Error>
    where
        GameType: GameState,
        EvaluationType: Evaluation<GameType>,
    {
        info_span!(
            "choose_action",
            strategy = %self.strategy,
            depth = self.depth,
            num_agents = state.num_agents(),
            chosen_value = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
            nodes = tracing::field::Empty,
        )
        .in_scope(|| {
            let result = self.search(state)?;

            if let SearchReturn::Node { options, .. } = &result {
                for (action, option) in options {
                    debug!(?action, value = option.value(), "scored root action");
                }
            }

            let action = match result.best_action() {
                Some(action) => action.clone(),
                None => {
                    warn!(
                        value = result.value(),
                        "No action beat negative infinity, falling back to the first action"
                    );
                    match &result {
                        SearchReturn::Node { options, .. } => options
                            .first()
                            .map(|(action, _)| action.clone())
                            .ok_or(Error::NoLegalActions)?,
                        SearchReturn::Leaf { .. } => return Err(Error::NoLegalActions),
                    }
                }
            };

            let current_span = tracing::Span::current();
            current_span.record("chosen_value", result.value());
            current_span.record("chosen_action", format!("{action:?}").as_str());
            current_span.record("nodes", result.node_count());

            info!(?action, value = result.value(), "finished choose_action");

            Ok((action, result))
        })
    }

    /// This runs the search from `state`, returning a struct that contains all the information
    /// about the 'tree' we explored
    ///
    /// The return value is a recursive struct that tells you the value of the root, and the
    /// value of all the children we looked at. The root is always a node where agent 0 moves.
    pub fn search<GameType>(
        &self,
        state: &GameType,
    ) -> Result<SearchReturn<GameType::Action>, Error>
    where
        GameType: GameState,
        EvaluationType: Evaluation<GameType>,
    {
        let actions = state.legal_actions(SELF_AGENT);
        if actions.is_empty() {
            return Err(Error::NoLegalActions);
        }

        Ok(self.expand_children(state, actions, 0, SELF_AGENT, Window::unbounded()))
    }

    fn expand<GameType>(
        &self,
        state: &GameType,
        depth: usize,
        agent: AgentIndex,
        window: Window,
    ) -> SearchReturn<GameType::Action>
    where
        GameType: GameState,
        EvaluationType: Evaluation<GameType>,
    {
        if depth >= self.depth {
            return SearchReturn::Leaf {
                value: self.evaluation.evaluate(state),
            };
        }

        // A stuck mover is a leaf whatever `is_terminal` says, so skip asking it
        let actions = state.legal_actions(agent);
        if actions.is_empty() || state.is_terminal() {
            return SearchReturn::Leaf {
                value: self.evaluation.evaluate(state),
            };
        }

        self.expand_children(state, actions, depth, agent, window)
    }

    fn expand_children<GameType>(
        &self,
        state: &GameType,
        actions: Vec<GameType::Action>,
        depth: usize,
        agent: AgentIndex,
        window: Window,
    ) -> SearchReturn<GameType::Action>
    where
        GameType: GameState,
        EvaluationType: Evaluation<GameType>,
    {
        let mut window = window;
        let kind = self.strategy.node_kind(agent);
        let (next_agent, depth_increment) = next_turn(agent, state.num_agents());

        let mut accumulator = Accumulator::new(kind);
        let mut options = Vec::with_capacity(actions.len());
        let mut cutoff = false;

        for (index, action) in actions.into_iter().enumerate() {
            let next_state = state.successor(agent, &action);
            let result = self.expand(&next_state, depth + depth_increment, next_agent, window);

            accumulator.push(index, result.value());
            options.push((action, result));

            if self.strategy.prunes() {
                if window.cuts_off(kind, accumulator.value()) {
                    cutoff = true;
                    break;
                }

                window.tighten(kind, accumulator.value());
            }
        }

        SearchReturn::Node {
            agent,
            kind,
            value: accumulator.value(),
            options,
            chosen: accumulator.chosen(),
            cutoff,
        }
    }
}

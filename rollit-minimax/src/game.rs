use std::fmt::Debug;

/// Index of an agent taking part in the game. Valid indices are `0..num_agents()`
pub type AgentIndex = usize;

/// The agent we are searching on behalf of. It is always the maximizing agent
pub const SELF_AGENT: AgentIndex = 0;

/// This trait is the only thing the search engine knows about the game being played
///
/// Implementations must behave like immutable values: asking for a successor never changes
/// `self`, it hands back a brand new state. The engine leans on this to explore sibling branches
/// from the same parent.
pub trait GameState: Sized {
    /// The type used to describe a single move
    type Action: Clone + Debug + PartialEq;

    /// The moves `agent` can make from this state, in a stable order
    ///
    /// The order matters: ties between equally valued actions are broken in favour of the
    /// earlier one, and alpha-beta prunes in this order. An empty list means the agent is stuck.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state reached after `agent` plays `action`
    ///
    /// The engine only ever passes actions returned by [GameState::legal_actions], so
    /// implementations are free to panic when handed anything else.
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    /// How many agents take turns in this game. Always at least 1
    fn num_agents(&self) -> usize;

    /// The points (usually pieces on the board) owned by `agent`. Never negative
    fn score(&self, agent: AgentIndex) -> f64;

    /// Ownership of the four board corners
    ///
    /// A value of `0` is a corner counting for agent 0, positive values count for the opponents
    /// and negative values count for nobody. A board with every corner set to `-1` is treated as
    /// having no corner information at all.
    fn corners(&self) -> [i32; 4];

    /// Whether the game is over
    ///
    /// Defaults to "nobody has a legal action left", which asks every agent for its actions.
    /// The engine only checks this once the agent to move is known to have actions, but games
    /// that can tell cheaply should override it.
    fn is_terminal(&self) -> bool {
        (0..self.num_agents()).all(|agent| self.legal_actions(agent).is_empty())
    }
}

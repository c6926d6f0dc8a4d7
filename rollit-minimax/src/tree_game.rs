//! An explicit game tree that implements [GameState]
//!
//! Every node lists the scores and corners of the position along with the moves each agent can
//! make from it. This makes it easy to write down small hand crafted positions as JSON fixtures
//! and check what the search engine decides, without having to implement a real game.
//!
//! ```json
//! {
//!   "scores": [2, 1],
//!   "corners": [-1, -1, -1, -1],
//!   "moves": [
//!     [{ "action": "left", "next": { "scores": [3, 1] } }],
//!     []
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{AgentIndex, GameState};

const NO_CORNERS: [i32; 4] = [-1, -1, -1, -1];

fn no_corners() -> [i32; 4] {
    NO_CORNERS
}

/// A single node of an explicit game tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeGame {
    /// The score of every agent. Its length is the number of agents
    pub scores: Vec<f64>,
    /// Corner ownership, see [GameState::corners]. Defaults to "no corner information"
    #[serde(default = "no_corners")]
    pub corners: [i32; 4],
    /// The moves available to each agent, indexed by agent. Missing agents have no moves
    #[serde(default)]
    pub moves: Vec<Vec<Branch>>,
    /// Marks the node as a finished game even if moves are listed
    #[serde(default)]
    pub terminal: bool,
}

/// An edge of the tree: the label of the move and where it leads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Name of the move
    pub action: String,
    /// The node reached by playing it
    pub next: TreeGame,
}

impl TreeGame {
    /// A node with the given scores, no corner information and no moves
    pub fn new(scores: Vec<f64>) -> Self {
        Self {
            scores,
            corners: NO_CORNERS,
            moves: vec![],
            terminal: false,
        }
    }

    /// Replace the corner ownership of this node
    pub fn with_corners(mut self, corners: [i32; 4]) -> Self {
        self.corners = corners;
        self
    }

    /// Add a move for `agent` leading to `next`. Moves keep the order they were added in
    pub fn with_move(
        mut self,
        agent: AgentIndex,
        action: impl Into<String>,
        next: TreeGame,
    ) -> Self {
        if self.moves.len() <= agent {
            self.moves.resize_with(agent + 1, Vec::new);
        }
        self.moves[agent].push(Branch {
            action: action.into(),
            next,
        });
        self
    }

    /// Mark this node as a finished game
    pub fn finished(mut self) -> Self {
        self.terminal = true;
        self
    }

    fn branches(&self, agent: AgentIndex) -> &[Branch] {
        self.moves.get(agent).map(Vec::as_slice).unwrap_or_default()
    }
}

impl GameState for TreeGame {
    type Action = String;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<String> {
        self.branches(agent)
            .iter()
            .map(|branch| branch.action.clone())
            .collect()
    }

    fn successor(&self, agent: AgentIndex, action: &String) -> Self {
        match self
            .branches(agent)
            .iter()
            .find(|branch| &branch.action == action)
        {
            Some(branch) => branch.next.clone(),
            None => panic!("'{action}' is not a legal action for agent {agent}"),
        }
    }

    fn num_agents(&self) -> usize {
        self.scores.len()
    }

    fn score(&self, agent: AgentIndex) -> f64 {
        self.scores.get(agent).copied().unwrap_or_default()
    }

    fn corners(&self) -> [i32; 4] {
        self.corners
    }

    fn is_terminal(&self) -> bool {
        self.terminal || self.moves.iter().all(Vec::is_empty)
    }
}

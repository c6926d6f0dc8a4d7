//! Depth limited tree search for any number of agents
//!
//! Agent 0 is 'self' and always maximizes. The remaining agents are modelled according to the
//! chosen [crate::Strategy]:
//!
//! * `Minimax` assumes all the opponents are working together to minimize your value (the
//!   'paranoid' model)
//! * `AlphaBeta` is the same model, but skips the subtrees that can't change the outcome
//! * `Expectimax` assumes every opponent picks one of its moves uniformly at random
//!
//! All three share a single traversal. Turns rotate through the agents in index order and the
//! depth counter grows once every agent has moved, so a depth of 2 in a 3 agent game means 6
//! moves. A node becomes a leaf, scored by the evaluation, once the depth is reached, the game is
//! over or the agent to move has no legal actions.
//!
//! ```rust
//! use rollit_minimax::{tree_game::TreeGame, SearchOptions, Searcher, Strategy};
//!
//! // Two agents, a single round of look-ahead scored by agent 0's points
//! let game = TreeGame::new(vec![0.0, 0.0])
//!     .with_move(
//!         0,
//!         "steady",
//!         TreeGame::new(vec![0.0, 0.0])
//!             .with_move(1, "x", TreeGame::new(vec![3.0, 0.0]))
//!             .with_move(1, "y", TreeGame::new(vec![3.0, 0.0])),
//!     )
//!     .with_move(
//!         0,
//!         "gamble",
//!         TreeGame::new(vec![0.0, 0.0])
//!             .with_move(1, "x", TreeGame::new(vec![0.0, 0.0]))
//!             .with_move(1, "y", TreeGame::new(vec![10.0, 0.0])),
//!     );
//! let options = SearchOptions::new(1, "score")?;
//!
//! let paranoid = Searcher::new(Strategy::AlphaBeta, options);
//! assert_eq!(paranoid.choose_action(&game)?, "steady");
//!
//! let optimist = Searcher::new(Strategy::Expectimax, options);
//! let result = optimist.search(&game)?;
//! assert_eq!(result.best_action().map(String::as_str), Some("gamble"));
//! assert_eq!(result.value(), 5.0);
//! # Ok::<(), rollit_minimax::Error>(())
//! ```

mod engine;
pub use engine::Searcher;

mod node;
pub use node::NodeKind;

mod search_return;
pub use search_return::SearchReturn;

mod turn;
pub use turn::next_turn;

use std::fmt::Debug;
use text_trees::StringTreeNode;

use super::NodeKind;
use crate::AgentIndex;

#[derive(Debug, Clone, PartialEq)]
/// This is returned from a search
/// It contains everything we learned about the part of the game tree we explored
pub enum SearchReturn<Action> {
    /// This is a non-leaf node in the game tree
    /// We have information about all the options we looked at as well as the resulting value
    Node {
        /// Which agent was moving at this node
        agent: AgentIndex,
        /// How this node combined the values of its children
        kind: NodeKind,
        /// The value of this node for agent 0
        value: f64,
        /// A 'recursive' look at all the moves under us, in the order they were explored.
        /// When alpha-beta cut this node off, the remaining moves are missing
        options: Vec<(Action, Self)>,
        /// Index into `options` of the move this node settled on. Chance nodes don't pick one
        chosen: Option<usize>,
        /// Whether alpha-beta skipped the rest of the moves at this node
        cutoff: bool,
    },
    /// Represents a leaf node in the game tree
    /// This happens when we reach the maximum depth or the moving agent has no moves left
    Leaf {
        #[allow(missing_docs)]
        value: f64,
    },
}

impl<Action> SearchReturn<Action>
where
    Action: Clone + Debug,
{
    /// Returns the value of this node
    pub fn value(&self) -> f64 {
        match self {
            SearchReturn::Node { value, .. } => *value,
            SearchReturn::Leaf { value } => *value,
        }
    }

    /// Returns the option this node settled on, if any
    pub fn chosen_option(&self) -> Option<&(Action, Self)> {
        match self {
            SearchReturn::Leaf { .. } => None,
            SearchReturn::Node {
                options, chosen, ..
            } => chosen.and_then(|index| options.get(index)),
        }
    }

    /// Returns the action the moving agent should take at this node
    /// If we are a leaf node, or a chance node, this will return None
    pub fn best_action(&self) -> Option<&Action> {
        self.chosen_option().map(|(action, _)| action)
    }

    /// Returns all the moves in the 'route' through the game tree that the search expects
    /// This is useful for debugging as it shows each of the moves we and our opponents made
    /// during the search. The route stops at the first leaf or chance node
    pub fn chosen_route(&self) -> Vec<(AgentIndex, Action)> {
        match (self, self.chosen_option()) {
            (SearchReturn::Node { agent, .. }, Some((action, next))) => {
                let mut tail = next.chosen_route();
                tail.insert(0, (*agent, action.clone()));
                tail
            }
            _ => vec![],
        }
    }

    /// The number of nodes, leaves included, that the search looked at
    pub fn node_count(&self) -> usize {
        match self {
            SearchReturn::Leaf { .. } => 1,
            SearchReturn::Node { options, .. } => {
                1 + options.iter().map(|(_, r)| r.node_count()).sum::<usize>()
            }
        }
    }

    /// The length, in moves, of the longest line the search explored
    pub fn height(&self) -> usize {
        match self {
            SearchReturn::Leaf { .. } => 0,
            SearchReturn::Node { options, .. } => {
                1 + options.iter().map(|(_, r)| r.height()).max().unwrap_or(0)
            }
        }
    }

    /// Whether alpha-beta cut off any node of this tree
    pub fn any_cutoff(&self) -> bool {
        match self {
            SearchReturn::Leaf { .. } => false,
            SearchReturn::Node {
                cutoff, options, ..
            } => *cutoff || options.iter().any(|(_, r)| r.any_cutoff()),
        }
    }

    /// This returns a visual representation of the game tree that the search generated
    /// It shows the value, the moving agent and the move that led to each node
    pub fn to_text_tree(&self) -> String {
        format!("{}", self.to_text_tree_node("root".to_owned()))
    }

    fn to_text_tree_node(&self, label: String) -> StringTreeNode {
        match self {
            SearchReturn::Leaf { value } => StringTreeNode::new(format!("{label} = {value}")),
            SearchReturn::Node {
                agent,
                kind,
                value,
                options,
                chosen,
                cutoff,
            } => {
                let cutoff = if *cutoff { " (cutoff)" } else { "" };
                let mut node = StringTreeNode::new(format!(
                    "{label} = {value} [{kind:?} agent {agent}]{cutoff}"
                ));
                for (index, (action, result)) in options.iter().enumerate() {
                    let marker = if *chosen == Some(index) { "*" } else { "" };
                    node.push_node(result.to_text_tree_node(format!("{marker}{action:?}")));
                }

                node
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SearchReturn<&'static str> {
        SearchReturn::Node {
            agent: 0,
            kind: NodeKind::Max,
            value: 4.0,
            options: vec![
                ("left", SearchReturn::Leaf { value: 1.0 }),
                (
                    "right",
                    SearchReturn::Node {
                        agent: 1,
                        kind: NodeKind::Min,
                        value: 4.0,
                        options: vec![
                            ("up", SearchReturn::Leaf { value: 4.0 }),
                            ("down", SearchReturn::Leaf { value: 9.0 }),
                        ],
                        chosen: Some(0),
                        cutoff: false,
                    },
                ),
            ],
            chosen: Some(1),
            cutoff: false,
        }
    }

    #[test]
    fn test_best_action_and_route() {
        let tree = sample();

        assert_eq!(tree.best_action(), Some(&"right"));
        assert_eq!(tree.chosen_route(), vec![(0, "right"), (1, "up")]);
        assert_eq!(tree.value(), 4.0);
    }

    #[test]
    fn test_tree_sizes() {
        let tree = sample();

        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.height(), 2);
        assert!(!tree.any_cutoff());
    }

    #[test]
    fn test_leaf_has_no_action() {
        let leaf: SearchReturn<&str> = SearchReturn::Leaf { value: 2.0 };

        assert_eq!(leaf.best_action(), None);
        assert!(leaf.chosen_route().is_empty());
        assert_eq!(leaf.height(), 0);
    }

    #[test]
    fn test_text_tree_marks_the_chosen_moves() {
        let text = sample().to_text_tree();

        assert!(text.contains("root = 4 [Max agent 0]"));
        assert!(text.contains("*\"right\" = 4 [Min agent 1]"));
        assert!(text.contains("*\"up\" = 4"));
        assert!(text.contains("\"down\" = 9"));
    }
}

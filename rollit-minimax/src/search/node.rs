use crate::{AgentIndex, Strategy, SELF_AGENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a node of the search tree combines the values of its children
pub enum NodeKind {
    /// Agent 0 picks the child with the highest value
    Max,
    /// An adversarial opponent picks the child with the lowest value
    Min,
    /// A random opponent, the node is worth the mean of its children
    Chance,
}

impl Strategy {
    pub(crate) fn node_kind(&self, agent: AgentIndex) -> NodeKind {
        if agent == SELF_AGENT {
            return NodeKind::Max;
        }

        match self {
            Strategy::Minimax | Strategy::AlphaBeta => NodeKind::Min,
            Strategy::Expectimax => NodeKind::Chance,
        }
    }

    pub(crate) fn prunes(&self) -> bool {
        matches!(self, Strategy::AlphaBeta)
    }
}

/// The alpha-beta bounds. Copied into every call so siblings never see each other's updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Window {
    /// The best value agent 0 can already guarantee
    pub(crate) alpha: f64,
    /// The best value the opponents can already guarantee
    pub(crate) beta: f64,
}

impl Window {
    pub(crate) fn unbounded() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }

    /// Whether a node whose best value so far is `best` can stop looking at children
    pub(crate) fn cuts_off(&self, kind: NodeKind, best: f64) -> bool {
        match kind {
            NodeKind::Max => best > self.beta,
            NodeKind::Min => best < self.alpha,
            NodeKind::Chance => false,
        }
    }

    pub(crate) fn tighten(&mut self, kind: NodeKind, best: f64) {
        match kind {
            NodeKind::Max => self.alpha = self.alpha.max(best),
            NodeKind::Min => self.beta = self.beta.min(best),
            NodeKind::Chance => {}
        }
    }
}

/// Folds the values of a node's children, in order, into the node's value
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator {
    kind: NodeKind,
    value: f64,
    seen: usize,
    chosen: Option<usize>,
}

impl Accumulator {
    pub(crate) fn new(kind: NodeKind) -> Self {
        let value = match kind {
            NodeKind::Max => f64::NEG_INFINITY,
            NodeKind::Min => f64::INFINITY,
            NodeKind::Chance => 0.0,
        };

        Self {
            kind,
            value,
            seen: 0,
            chosen: None,
        }
    }

    pub(crate) fn push(&mut self, index: usize, value: f64) {
        self.seen += 1;

        match self.kind {
            NodeKind::Max => {
                if value > self.value {
                    self.value = value;
                    self.chosen = Some(index);
                }
            }
            NodeKind::Min => {
                if value < self.value {
                    self.value = value;
                    self.chosen = Some(index);
                }
            }
            // Running mean, so k children of equal value average to exactly that value
            NodeKind::Chance => self.value += (value - self.value) / self.seen as f64,
        }
    }

    pub(crate) fn value(&self) -> f64 {
        self.value
    }

    /// The index of the first child achieving the best value. Chance nodes never choose
    pub(crate) fn chosen(&self) -> Option<usize> {
        self.chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_keeps_the_first_of_equal_values() {
        let mut acc = Accumulator::new(NodeKind::Max);
        acc.push(0, 3.0);
        acc.push(1, 5.0);
        acc.push(2, 5.0);

        assert_eq!(acc.value(), 5.0);
        assert_eq!(acc.chosen(), Some(1));
    }

    #[test]
    fn test_min_keeps_the_first_of_equal_values() {
        let mut acc = Accumulator::new(NodeKind::Min);
        acc.push(0, 3.0);
        acc.push(1, -1.0);
        acc.push(2, -1.0);

        assert_eq!(acc.value(), -1.0);
        assert_eq!(acc.chosen(), Some(1));
    }

    #[test]
    fn test_chance_is_the_mean() {
        let mut acc = Accumulator::new(NodeKind::Chance);
        for (i, value) in [1.0, 2.0, 6.0].into_iter().enumerate() {
            acc.push(i, value);
        }

        assert!((acc.value() - 3.0).abs() < 1e-12);
        assert_eq!(acc.chosen(), None);
    }

    #[test]
    fn test_chance_of_equal_values_is_exact() {
        let mut acc = Accumulator::new(NodeKind::Chance);
        for i in 0..7 {
            acc.push(i, 0.1);
        }

        assert_eq!(acc.value(), 0.1);
    }

    #[test]
    fn test_window_cutoffs_are_strict() {
        let window = Window {
            alpha: 1.0,
            beta: 4.0,
        };

        assert!(!window.cuts_off(NodeKind::Max, 4.0));
        assert!(window.cuts_off(NodeKind::Max, 4.5));
        assert!(!window.cuts_off(NodeKind::Min, 1.0));
        assert!(window.cuts_off(NodeKind::Min, 0.5));
        assert!(!window.cuts_off(NodeKind::Chance, -100.0));
    }

    #[test]
    fn test_window_tightens_one_side() {
        let mut window = Window::unbounded();
        window.tighten(NodeKind::Max, 2.0);
        window.tighten(NodeKind::Min, 7.0);
        window.tighten(NodeKind::Max, 1.0);

        assert_eq!(
            window,
            Window {
                alpha: 2.0,
                beta: 7.0,
            }
        );
    }

    #[test]
    fn test_node_kinds_per_strategy() {
        assert_eq!(Strategy::Minimax.node_kind(0), NodeKind::Max);
        assert_eq!(Strategy::Minimax.node_kind(2), NodeKind::Min);
        assert_eq!(Strategy::AlphaBeta.node_kind(1), NodeKind::Min);
        assert_eq!(Strategy::Expectimax.node_kind(1), NodeKind::Chance);
        assert!(Strategy::AlphaBeta.prunes());
        assert!(!Strategy::Minimax.prunes());
    }
}

use crate::{AgentIndex, SELF_AGENT};

/// Who moves after `agent`, and by how much the depth counter grows
///
/// Turns rotate round-robin through `0..num_agents`. The depth counter only advances when the
/// turn wraps back to agent 0, so it counts full rounds rather than single moves. In a one agent
/// game every move completes a round.
pub fn next_turn(agent: AgentIndex, num_agents: usize) -> (AgentIndex, usize) {
    let next = agent + 1;
    if next >= num_agents {
        (SELF_AGENT, 1)
    } else {
        (next, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_agents_alternate() {
        assert_eq!(next_turn(0, 2), (1, 0));
        assert_eq!(next_turn(1, 2), (0, 1));
    }

    #[test]
    fn test_depth_only_grows_after_the_last_opponent() {
        assert_eq!(next_turn(0, 4), (1, 0));
        assert_eq!(next_turn(1, 4), (2, 0));
        assert_eq!(next_turn(2, 4), (3, 0));
        assert_eq!(next_turn(3, 4), (0, 1));
    }

    #[test]
    fn test_single_agent_always_completes_a_round() {
        assert_eq!(next_turn(0, 1), (0, 1));
    }
}

use crate::Probability;
use crate::Utility;
use crate::game::Action;
use crate::solver::Memory;

/// Learning state at one information set.
///
/// Holds the per-action memories, the current iteration-local policy, and
/// the lock flag. The averaged strategy is derived from accumulated mass on
/// demand rather than stored, so it can never go stale and finalizing it is
/// idempotent for free.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    edges: &'static [Action],
    memories: Vec<Memory>,
    policy: Vec<Probability>,
    locked: bool,
}

impl Node {
    /// Fresh unlocked node with a uniform policy over the given actions.
    pub fn new(edges: &'static [Action]) -> Self {
        let n = edges.len();
        assert!(n >= 1, "a decision spot has at least one action");
        Self {
            edges,
            memories: vec![Memory::default(); n],
            policy: vec![1. / n as Probability; n],
            locked: false,
        }
    }

    /// Fresh locked node pinned to the given policy for the whole run.
    pub fn pinned(edges: &'static [Action], policy: Vec<Probability>) -> Self {
        assert!(
            policy.len() == edges.len(),
            "locked policy has {} entries for {} actions",
            policy.len(),
            edges.len(),
        );
        Self {
            edges,
            memories: vec![Memory::default(); edges.len()],
            policy,
            locked: true,
        }
    }

    pub fn edges(&self) -> &'static [Action] {
        self.edges
    }
    pub fn locked(&self) -> bool {
        self.locked
    }
    /// The current iteration's policy. Sums to one.
    pub fn policy(&self) -> &[Probability] {
        &self.policy
    }
    pub fn regret(&self, index: usize) -> Utility {
        self.memories[index].regret()
    }
    pub fn mass(&self, index: usize) -> Probability {
        self.memories[index].policy()
    }

    /// Regret matching: the current policy becomes proportional to positive
    /// cumulative regret, uniform when nothing is positive. Locked nodes
    /// keep their pinned policy untouched.
    pub fn regret_match(&mut self) {
        if self.locked {
            return;
        }
        let positive = self
            .memories
            .iter()
            .map(|m| m.regret().max(0.))
            .collect::<Vec<Utility>>();
        let total = positive.iter().sum::<Utility>();
        let uniform = 1. / self.policy.len() as Probability;
        for (policy, regret) in self.policy.iter_mut().zip(positive.iter()) {
            *policy = match total > 0. {
                true => regret / total,
                false => uniform,
            };
        }
    }

    /// Accumulate the current policy into the running average, weighted by
    /// the acting player's own reach probability this iteration.
    pub fn accumulate(&mut self, weight: Probability) {
        for (memory, policy) in self.memories.iter_mut().zip(self.policy.iter()) {
            memory.add_policy(weight * policy);
        }
    }

    /// Add counterfactual regret for one action. The plus clamp is applied
    /// inside [`Memory`].
    pub fn add_regret(&mut self, index: usize, value: Utility) {
        self.memories[index].add_regret(value);
    }

    /// The time-averaged policy: cumulative mass, normalized. A node never
    /// reached with positive probability falls back to uniform. Pure, so
    /// calling it any number of times yields the same vector.
    pub fn averaged(&self) -> Vec<Probability> {
        let total = self.memories.iter().map(|m| m.policy()).sum::<Probability>();
        let uniform = 1. / self.memories.len() as Probability;
        self.memories
            .iter()
            .map(|m| match total > 0. {
                true => m.policy() / total,
                false => uniform,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-6;
    const EDGES: &[Action] = &[Action::Bet, Action::Check];

    fn normalized(policy: &[Probability]) -> bool {
        let total = policy.iter().sum::<Probability>();
        (total - 1.).abs() < TOLERANCE && policy.iter().all(|p| (0. ..=1.).contains(p))
    }

    #[test]
    fn fresh_nodes_are_uniform() {
        let node = Node::new(EDGES);
        assert!(node.policy() == [0.5, 0.5]);
        assert!(node.averaged() == vec![0.5, 0.5]);
    }

    #[test]
    fn matching_is_proportional_to_regret() {
        let mut node = Node::new(EDGES);
        node.add_regret(0, 3.);
        node.add_regret(1, 1.);
        node.regret_match();
        assert!(normalized(node.policy()));
        assert!((node.policy()[0] - 0.75).abs() < TOLERANCE);
        assert!((node.policy()[1] - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn matching_falls_back_to_uniform() {
        let mut node = Node::new(EDGES);
        node.add_regret(0, 5.);
        node.add_regret(0, -5.);
        node.regret_match();
        assert!(node.policy() == [0.5, 0.5]);
    }

    #[test]
    fn locked_nodes_ignore_regret() {
        let mut node = Node::pinned(EDGES, vec![0.9, 0.1]);
        node.add_regret(1, 100.);
        node.regret_match();
        assert!(node.policy() == [0.9, 0.1]);
    }

    #[test]
    #[should_panic]
    fn pinned_length_must_match() {
        let _ = Node::pinned(EDGES, vec![1.]);
    }

    #[test]
    fn averaging_weighs_by_reach() {
        let mut node = Node::new(EDGES);
        node.add_regret(0, 1.);
        node.regret_match();
        node.accumulate(0.5);
        let averaged = node.averaged();
        assert!(normalized(&averaged));
        assert!((averaged[0] - 1.).abs() < TOLERANCE);
    }

    #[test]
    fn averaging_is_idempotent() {
        let mut node = Node::new(EDGES);
        node.add_regret(0, 2.);
        node.add_regret(1, 1.);
        node.regret_match();
        node.accumulate(0.7);
        assert!(node.averaged() == node.averaged());
    }
}

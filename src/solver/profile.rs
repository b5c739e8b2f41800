use crate::Probability;
use crate::solver::Info;
use crate::solver::Node;
use std::collections::HashMap;

/// The infoset store: every node the solver has ever visited.
///
/// Nodes live in a growable arena and are addressed by `usize` handles, so
/// the traversal can hold a handle across recursion without borrowing the
/// store. The index maps keys to handles; arena order is creation order,
/// which is the stable order reports iterate in. The lock table holds
/// overrides that take effect when their key is first witnessed.
#[derive(Debug, Default)]
pub struct Profile {
    arena: Vec<Node>,
    witnesses: Vec<Info>,
    index: HashMap<Info, usize>,
    locks: HashMap<Info, Vec<Probability>>,
}

impl Profile {
    /// Get-or-create the node behind a key, returning its arena handle.
    /// The first witness seeds a uniform policy, or the registered lock if
    /// one exists for the key. Subsequent witnesses return the same handle.
    pub fn witness(&mut self, info: Info) -> usize {
        if let Some(&handle) = self.index.get(&info) {
            return handle;
        }
        let node = match self.locks.get(&info) {
            Some(policy) => Node::pinned(info.choices(), policy.clone()),
            None => Node::new(info.choices()),
        };
        let handle = self.arena.len();
        self.arena.push(node);
        self.witnesses.push(info);
        self.index.insert(info, handle);
        handle
    }

    /// Register a locked policy for a key, effective at first witness.
    /// Locking an already-witnessed key does nothing to the existing node;
    /// locks belong before training starts.
    pub fn lock(&mut self, info: Info, policy: Vec<Probability>) {
        assert!(
            policy.len() == info.choices().len(),
            "lock for {} has {} entries for {} actions",
            info,
            policy.len(),
            info.choices().len(),
        );
        if self.index.contains_key(&info) {
            log::warn!("lock for {} ignored, infoset already witnessed", info);
            return;
        }
        log::debug!("locking {} to {:?}", info, policy);
        self.locks.insert(info, policy);
    }

    pub fn node(&self, handle: usize) -> &Node {
        &self.arena[handle]
    }
    pub fn node_mut(&mut self, handle: usize) -> &mut Node {
        &mut self.arena[handle]
    }

    /// Number of witnessed infosets.
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    /// All witnessed infosets with their nodes, in creation order.
    pub fn infosets(&self) -> impl Iterator<Item = (Info, &Node)> {
        self.witnesses.iter().copied().zip(self.arena.iter())
    }

    /// The averaged policy behind a key, uniform for a key never witnessed.
    /// This is the read-only view best response and reporting consume.
    pub fn averaged(&self, info: &Info) -> Vec<Probability> {
        match self.index.get(info) {
            Some(&handle) => self.arena[handle].averaged(),
            None => {
                let n = info.choices().len() as Probability;
                info.choices().iter().map(|_| 1. / n).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Card;
    use crate::game::Spot;

    #[test]
    fn witnessing_is_idempotent() {
        let mut profile = Profile::default();
        let first = profile.witness(Info::new(Spot::Root, Card::King));
        let second = profile.witness(Info::new(Spot::Root, Card::King));
        assert!(first == second);
        assert!(profile.size() == 1);
    }

    #[test]
    fn handles_are_creation_ordered() {
        let mut profile = Profile::default();
        let root = profile.witness(Info::new(Spot::Root, Card::Queen));
        let bet = profile.witness(Info::new(Spot::Bet, Card::King));
        assert!(root == 0 && bet == 1);
        let keys = profile.infosets().map(|(info, _)| info).collect::<Vec<_>>();
        assert!(keys == vec![
            Info::new(Spot::Root, Card::Queen),
            Info::new(Spot::Bet, Card::King),
        ]);
    }

    #[test]
    fn locks_seed_at_first_witness() {
        let mut profile = Profile::default();
        let info = Info::new(Spot::Root, Card::Jack);
        profile.lock(info, vec![0.5, 0.5]);
        let handle = profile.witness(info);
        assert!(profile.node(handle).locked());
        assert!(profile.node(handle).policy() == [0.5, 0.5]);
    }

    #[test]
    fn late_locks_are_ignored() {
        let mut profile = Profile::default();
        let info = Info::new(Spot::Root, Card::Jack);
        let handle = profile.witness(info);
        profile.lock(info, vec![0.9, 0.1]);
        assert!(!profile.node(handle).locked());
        assert!(profile.node(handle).policy() == [0.5, 0.5]);
    }

    #[test]
    #[should_panic]
    fn misfit_locks_are_fatal() {
        let mut profile = Profile::default();
        profile.lock(Info::new(Spot::Root, Card::Jack), vec![1.]);
    }

    #[test]
    fn unwitnessed_keys_average_uniform() {
        let profile = Profile::default();
        let info = Info::new(Spot::Bet, Card::Queen);
        assert!(profile.averaged(&info) == vec![0.5, 0.5]);
    }
}

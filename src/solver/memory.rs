use crate::Probability;
use crate::Utility;

/// Per-action learning state: cumulative counterfactual regret and
/// cumulative reach-weighted policy mass.
///
/// The regret total is clamped at zero on every update, which is the
/// "plus" in regret-matching-plus: negative regret is discarded
/// immediately instead of being carried as a deficit.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Memory {
    regret: Utility,
    policy: Probability,
}

impl Memory {
    pub fn regret(&self) -> Utility {
        self.regret
    }
    pub fn policy(&self) -> Probability {
        self.policy
    }
    /// Add one iteration's counterfactual regret, clamping the total at zero.
    pub fn add_regret(&mut self, value: Utility) {
        self.regret = (self.regret + value).max(0.);
    }
    /// Add one iteration's reach-weighted policy mass.
    pub fn add_policy(&mut self, value: Probability) {
        self.policy += value;
    }
}

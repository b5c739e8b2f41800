use crate::game::Action;

/// Public game-tree node: the action history, finitely enumerated.
///
/// Each variant names the sequence of public actions taken so far, so the
/// whole reachable tree is six spots. Transitions live in an exhaustive
/// match rather than string parsing, which makes an unrecognized history
/// unrepresentable.
///
/// ```text
/// Root ──bet──> Bet ──call──> BetCall        showdown at full stakes
///      │            └fold──> BetFold         bettor takes the pot
///      └check─> Check ──check──> CheckCheck  showdown for the blind
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Spot {
    /// No action yet, P0 to act.
    Root,
    /// P0 bet, P1 to act.
    Bet,
    /// P0 checked, P1 to act.
    Check,
    /// Bet and call, showdown at full stakes.
    BetCall,
    /// Bet and fold, no showdown.
    BetFold,
    /// Check behind, showdown for the blind.
    CheckCheck,
}

impl Spot {
    /// The empty history.
    pub fn root() -> Self {
        Self::Root
    }

    /// True once no player has a decision left.
    pub fn terminal(&self) -> bool {
        self.choices().is_empty()
    }

    /// Available actions at this spot, in fixed table order.
    pub fn choices(&self) -> &'static [Action] {
        match self {
            Spot::Root => &[Action::Bet, Action::Check],
            Spot::Bet => &[Action::Call, Action::Fold],
            Spot::Check => &[Action::Check],
            Spot::BetCall | Spot::BetFold | Spot::CheckCheck => &[],
        }
    }

    /// Applies an action to transition to the next spot.
    /// Anything off the table is a game-definition bug and refuses to proceed.
    pub fn apply(&self, action: Action) -> Self {
        match (self, action) {
            (Spot::Root, Action::Bet) => Spot::Bet,
            (Spot::Root, Action::Check) => Spot::Check,
            (Spot::Bet, Action::Call) => Spot::BetCall,
            (Spot::Bet, Action::Fold) => Spot::BetFold,
            (Spot::Check, Action::Check) => Spot::CheckCheck,
            (spot, action) => panic!("illegal action {:?} at {:?}", action, spot),
        }
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Spot::Root => write!(f, "root"),
            Spot::Bet => write!(f, "bet"),
            Spot::Check => write!(f, "check"),
            Spot::BetCall => write!(f, "bet-call"),
            Spot::BetFold => write!(f, "bet-fold"),
            Spot::CheckCheck => write!(f, "check-check"),
        }
    }
}

/// Decision-spot names as used by lock tables. Terminal spots have no
/// strategy to lock, so they do not parse.
impl std::str::FromStr for Spot {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "root" => Ok(Spot::Root),
            "bet" => Ok(Spot::Bet),
            "check" => Ok(Spot::Check),
            _ => Err(format!("unknown decision spot {:?}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        assert!(Spot::root().choices().len() == 2);
        assert!(Spot::Bet.choices().len() == 2);
        assert!(Spot::Check.choices().len() == 1);
        assert!(!Spot::Root.terminal());
        assert!(!Spot::Bet.terminal());
        assert!(!Spot::Check.terminal());
        assert!(Spot::BetCall.terminal());
        assert!(Spot::BetFold.terminal());
        assert!(Spot::CheckCheck.terminal());
    }

    #[test]
    fn transitions() {
        assert!(Spot::Root.apply(Action::Bet) == Spot::Bet);
        assert!(Spot::Root.apply(Action::Check) == Spot::Check);
        assert!(Spot::Bet.apply(Action::Call) == Spot::BetCall);
        assert!(Spot::Bet.apply(Action::Fold) == Spot::BetFold);
        assert!(Spot::Check.apply(Action::Check) == Spot::CheckCheck);
    }

    #[test]
    fn every_choice_stays_on_table() {
        for spot in [Spot::Root, Spot::Bet, Spot::Check] {
            for action in spot.choices() {
                let _ = spot.apply(*action);
            }
        }
    }

    #[test]
    #[should_panic]
    fn off_table_action_panics() {
        let _ = Spot::Root.apply(Action::Call);
    }

    #[test]
    #[should_panic]
    fn terminal_action_panics() {
        let _ = Spot::BetCall.apply(Action::Check);
    }
}

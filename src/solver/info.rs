use crate::game::Action;
use crate::game::Card;
use crate::game::Spot;

/// Information set key: what the acting player knows at a decision point.
///
/// The public component is the decision spot, the private component the
/// actor's own card. Two copied enums, so hashing a key allocates nothing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Info {
    spot: Spot,
    card: Card,
}

impl Info {
    pub fn new(spot: Spot, card: Card) -> Self {
        assert!(!spot.terminal(), "terminal spots carry no information set");
        Self { spot, card }
    }
    pub fn spot(&self) -> Spot {
        self.spot
    }
    pub fn card(&self) -> Card {
        self.card
    }
    /// Available actions, inherited from the public spot.
    pub fn choices(&self) -> &'static [Action] {
        self.spot.choices()
    }
}

impl From<(Spot, Card)> for Info {
    fn from((spot, card): (Spot, Card)) -> Self {
        Self::new(spot, card)
    }
}

impl std::fmt::Display for Info {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}·{}", self.spot, self.card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_follow_the_spot() {
        let info = Info::new(Spot::Bet, Card::Queen);
        assert!(info.choices() == Spot::Bet.choices());
    }

    #[test]
    #[should_panic]
    fn terminal_keys_are_rejected() {
        let _ = Info::new(Spot::BetFold, Card::Queen);
    }
}

use crate::Arbitrary;
use crate::game::Card;
use crate::game::Rules;
use crate::game::Turn;

/// One iteration's pair of private cards.
///
/// Immutable and threaded explicitly through the traversal, so the engine
/// cannot cache cards across iterations. Equal cards are rejected at
/// construction: the deck deals without replacement and the payoff model has
/// no tie rule.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Deal {
    cards: [Card; 2],
}

impl Deal {
    pub fn new(p0: Card, p1: Card) -> Self {
        assert!(p0 != p1, "players cannot hold the same card");
        Self { cards: [p0, p1] }
    }

    /// The private card of the given player.
    pub fn card(&self, turn: Turn) -> Card {
        self.cards[usize::from(turn)]
    }

    /// Draw a fresh deal from the players' pools, re-drawing card collisions.
    /// Terminates because [`Rules`] guarantees at least one distinct pair.
    pub fn draw(rules: &Rules, rng: &mut impl rand::Rng) -> Self {
        loop {
            let p0 = rules.pool(Turn::P0).draw(rng);
            let p1 = rules.pool(Turn::P1).draw(rng);
            if p0 != p1 {
                return Self::new(p0, p1);
            }
        }
    }
}

impl Arbitrary for Deal {
    fn random() -> Self {
        loop {
            let p0 = Card::random();
            let p1 = Card::random();
            if p0 != p1 {
                return Self::new(p0, p1);
            }
        }
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}·{}", self.cards[0], self.cards[1])
    }
}

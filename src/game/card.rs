use crate::Arbitrary;
use crate::DECK_SIZE;

/// Private card rank in the three-card deck.
///
/// Derived `Ord` is hand strength: Jack < Queen < King. Showdowns compare
/// ranks directly; ties are impossible because a [`crate::game::Deal`] never
/// holds the same rank twice.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Card {
    Jack = 0,
    Queen = 1,
    King = 2,
}

impl Card {
    /// True if this card wins a showdown against the other.
    pub fn beats(&self, other: &Self) -> bool {
        self > other
    }
}

/// u8 isomorphism
///
/// Drivers and pool masks address cards by rank index.
impl From<u8> for Card {
    fn from(n: u8) -> Card {
        match n {
            0 => Card::Jack,
            1 => Card::Queen,
            2 => Card::King,
            _ => panic!("invalid card u8: {}", n),
        }
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c as u8
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..DECK_SIZE))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Jack => write!(f, "J"),
            Card::Queen => write!(f, "Q"),
            Card::King => write!(f, "K"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..DECK_SIZE {
            assert!(n == u8::from(Card::from(n)));
        }
    }

    #[test]
    fn strength_order() {
        assert!(Card::King.beats(&Card::Queen));
        assert!(Card::Queen.beats(&Card::Jack));
        assert!(Card::King.beats(&Card::Jack));
        assert!(!Card::Jack.beats(&Card::Jack));
    }
}

use crate::DECK_SIZE;
use crate::game::Card;

/// The set of ranks a player may be dealt, as a bitmask over the deck.
///
/// Restricting pools is how constrained matchups are set up, e.g. giving
/// P0 only the Jack and King while P1 always holds the Queen.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Pool(u8);

impl Pool {
    pub fn empty() -> Self {
        Self(0)
    }
    /// Every rank in the deck.
    pub fn full() -> Self {
        Self((1 << DECK_SIZE) - 1)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & (1 << u8::from(*card)) != 0
    }
    pub fn add(&mut self, card: Card) {
        self.0 |= 1 << u8::from(card);
    }
    fn remove(&mut self, card: Card) {
        self.0 &= !(1 << u8::from(card));
    }

    /// Uniformly draw one rank from this pool.
    pub fn draw(&self, rng: &mut impl rand::Rng) -> Card {
        assert!(self.size() > 0, "cannot draw from an empty pool");
        let mut pick = rng.random_range(0..self.size());
        for card in *self {
            if pick == 0 {
                return card;
            }
            pick -= 1;
        }
        unreachable!("pick is bounded by pool size")
    }
}

/// Iterates owned set bits in ascending rank order. `Pool` is `Copy`, so
/// callers iterate a scratch copy and keep the original.
impl Iterator for Pool {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u8 isomorphism
///
/// The mask form addresses pools directly as bitsets
/// (e.g. 0b101 for {Jack, King}).
impl From<u8> for Pool {
    fn from(mask: u8) -> Self {
        assert!(mask < (1 << DECK_SIZE), "pool mask {:#b} outside deck", mask);
        Self(mask)
    }
}
impl From<Pool> for u8 {
    fn from(pool: Pool) -> u8 {
        pool.0
    }
}

/// Comma-separated rank indices, e.g. "0,2". This is the CLI form.
impl std::str::FromStr for Pool {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pool = Self::empty();
        for token in s.split(',') {
            let n = token
                .trim()
                .parse::<u8>()
                .map_err(|e| format!("bad card index {:?}: {}", token, e))?;
            if n >= DECK_SIZE {
                return Err(format!("card index {} outside deck of {}", n, DECK_SIZE));
            }
            pool.add(Card::from(n));
        }
        Ok(pool)
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

/// Acting player.
///
/// Exactly two players alternate: P0 opens at the root, P1 responds, and the
/// hand is over. The traversal carries the turn explicitly and flips it at
/// every recursion step; nothing ever infers the actor from the history.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Turn {
    /// Player 0, first to act.
    P0,
    /// Player 1, closing the action.
    P1,
}

impl Turn {
    /// The opponent of this player.
    pub fn flip(&self) -> Self {
        match self {
            Self::P0 => Self::P1,
            Self::P1 => Self::P0,
        }
    }
}

/// usize isomorphism
///
/// Player indices are how drivers and reach-probability arrays address the
/// two seats.
impl From<usize> for Turn {
    fn from(player: usize) -> Self {
        match player {
            0 => Self::P0,
            1 => Self::P1,
            _ => panic!("this game has exactly 2 players"),
        }
    }
}
impl From<Turn> for usize {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::P0 => 0,
            Turn::P1 => 1,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        assert!(Turn::P0 == Turn::from(usize::from(Turn::P0)));
        assert!(Turn::P1 == Turn::from(usize::from(Turn::P1)));
    }

    #[test]
    fn flip_is_involution() {
        assert!(Turn::P0.flip().flip() == Turn::P0);
        assert!(Turn::P0.flip() == Turn::P1);
    }
}

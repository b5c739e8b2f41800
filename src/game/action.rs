use colored::*;

/// Action symbols of the one-street game.
///
/// P0 chooses Bet or Check at the root. Facing a bet, P1 chooses Call or
/// Fold; facing a check, P1 can only Check behind. Which of these are legal
/// where is owned by the [`crate::game::Spot`] transition table, not by the
/// action itself.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    /// Decline to wager. Opens the checked line, or closes it behind.
    Check,
    /// Put the fixed bet size into the pot.
    Bet,
    /// Match an outstanding bet and go to showdown.
    Call,
    /// Surrender the pot to the bettor.
    Fold,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Bet => write!(f, "{}", "BET".green()),
            Action::Call => write!(f, "{}", "CALL".yellow()),
            Action::Fold => write!(f, "{}", "FOLD".red()),
        }
    }
}

//! The fixed one-street game definition.
//!
//! Everything here is independent of the CFR machinery: a solver only needs
//! the transition table ([`Spot`]), the payoff function ([`Rules`]), and the
//! per-iteration private cards ([`Deal`]).
//!
//! # File Structure
//!
//! - [`Action`] — The four action symbols (Check, Bet, Call, Fold)
//! - [`Turn`] — Acting player (P0 opens, P1 responds)
//! - [`Card`] — Private card rank
//! - [`Pool`] — Per-player set of dealable ranks
//! - [`Deal`] — One iteration's pair of private cards
//! - [`Spot`] — Public-history state machine with its transition table
//! - [`Rules`] — Pot, bet, pools, and the terminal payoff model

mod action;
mod card;
mod deal;
mod pool;
mod rules;
mod spot;
mod turn;

pub use action::*;
pub use card::*;
pub use deal::*;
pub use pool::*;
pub use rules::*;
pub use spot::*;
pub use turn::*;

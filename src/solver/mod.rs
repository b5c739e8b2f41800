//! CFR machinery over the fixed game.
//!
//! The trainer walks the whole action tree once per sampled deal
//! (chance-sampled CFR), regret-matching with the plus clamp at every
//! decision point and accumulating the reach-weighted average strategy that
//! actually converges. Best response lives here too, but shares nothing
//! with the training walk except the game definition and the averaged
//! policies.
//!
//! # File Structure
//!
//! - [`Info`] — Structured infoset key (spot × private card)
//! - [`Memory`] — Per-action regret and policy-mass cell
//! - [`Node`] — Per-infoset learning state (policy, memories, lock)
//! - [`Profile`] — Arena of nodes keyed by infoset, plus lock overrides
//! - [`Solver`] — Recursive traversal and the training loop
//! - [`exploitability`] — Independent best-response sweep

mod info;
mod memory;
mod node;
mod profile;
mod response;
mod solver;

pub use info::*;
pub use memory::*;
pub use node::*;
pub use profile::*;
pub use response::*;
pub use solver::*;

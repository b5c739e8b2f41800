//! Chance-sampled counterfactual regret minimization for a one-street
//! toy poker game.
//!
//! Two players each ante half the pot and receive one private card from a
//! three-card deck. Player 0 bets or checks; facing a bet, Player 1 calls or
//! folds; after a check, Player 1 can only check behind and the hands go to
//! showdown. Training walks this tree once per sampled deal, regret-matching
//! at every decision point, and the reach-weighted average strategy converges
//! to a Nash equilibrium.
//!
//! # Module Structure
//!
//! - `game` — The fixed game definition (actions, cards, spots, payoffs)
//! - `solver` — CFR machinery (infosets, regret matching, traversal, best response)

pub mod game;
pub mod solver;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, regrets, and payoffs.
pub type Utility = f32;
/// Strategy weights, sampling distributions, and reach probabilities.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME
// ============================================================================
/// Number of distinct card ranks in the deck.
pub const DECK_SIZE: u8 = 3;
/// Number of players. The game tree and the reach-probability bookkeeping
/// are written for exactly two.
pub const N_PLAYERS: usize = 2;

// ============================================================================
// TRAINING
// ============================================================================
/// Default number of CFR iterations for a full training run.
pub const CFR_ITERATIONS: usize = 100_000;
/// Epoch interval between progress log lines during training.
pub const TRAINING_LOG_INTERVAL: usize = 10_000;

// ============================================================================
// LOGGING
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

//! Trainer Binary
//!
//! Trains a CFR profile for the one-street bluffing game and prints the
//! averaged strategy table. Policies can be pinned from a JSON lock file
//! and the trained table exported back to JSON.
//!
//! A lock file is an array of rows, one per pinned infoset, e.g. forcing
//! the opener to flip a coin when dealt the lowest card:
//!
//! ```json
//! [{ "spot": "root", "card": 0, "policy": [0.5, 0.5] }]
//! ```

use clap::Parser;
use nanopoker::game::*;
use nanopoker::solver::*;
use nanopoker::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of sampled deals to train on
    #[arg(long, default_value_t = CFR_ITERATIONS)]
    iters: usize,
    /// RNG seed, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Pot size before any action
    #[arg(long, default_value_t = 4.)]
    pot: Utility,
    /// Fixed bet size
    #[arg(long, default_value_t = 2.)]
    bet: Utility,
    /// Cards dealable to the first player, as comma-separated indices
    #[arg(long, default_value = "0,1,2")]
    pool0: Pool,
    /// Cards dealable to the second player, as comma-separated indices
    #[arg(long, default_value = "0,1,2")]
    pool1: Pool,
    /// JSON file of policies to pin before training
    #[arg(long)]
    locks: Option<PathBuf>,
    /// JSON file to write the averaged strategy to
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LockRow {
    spot: String,
    card: u8,
    policy: Vec<Probability>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StrategyRow {
    infoset: String,
    spot: String,
    card: u8,
    actions: Vec<String>,
    policy: Vec<Probability>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let rules = Rules::new(args.pot, args.bet, [args.pool0, args.pool1]);
    let mut solver = Solver::new(rules);
    if let Some(ref path) = args.locks {
        for (info, policy) in locks(path)? {
            solver.lock(info, policy);
        }
    }
    let solver = solver.solve(args.iters, rng);
    log::info!(
        "trained {} epochs  pot {}  value {:+.4}",
        solver.epochs(),
        solver.rules().pot(),
        solver.value(),
    );
    for (info, node) in solver.profile().infosets() {
        let averaged = node.averaged();
        let best = node
            .edges()
            .iter()
            .zip(averaged.iter())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(action, _)| action)
            .expect("decision spots have at least one action");
        log::info!("{} leans {}", info, best);
    }
    println!("{}", solver);
    if let Some(ref path) = args.export {
        export(path, &solver)?;
        log::info!("exported strategy to {}", path.display());
    }
    Ok(())
}

/// Parse and validate a JSON lock table into pinnable policies. Rows are
/// checked here so a bad file surfaces as an error instead of a panic.
fn locks(path: &std::path::Path) -> anyhow::Result<Vec<(Info, Vec<Probability>)>> {
    let rows = serde_json::from_str::<Vec<LockRow>>(&std::fs::read_to_string(path)?)?;
    rows.into_iter()
        .map(|row| {
            let spot = Spot::from_str(&row.spot).map_err(|e| anyhow::anyhow!(e))?;
            let card = match row.card < DECK_SIZE {
                true => Card::from(row.card),
                false => return Err(anyhow::anyhow!("no card at index {}", row.card)),
            };
            match row.policy.len() == spot.choices().len() {
                true => Ok((Info::new(spot, card), row.policy)),
                false => Err(anyhow::anyhow!(
                    "{} choices at {}, got {}",
                    spot.choices().len(),
                    spot,
                    row.policy.len()
                )),
            }
        })
        .collect()
}

/// Write the averaged strategy of every witnessed infoset as JSON rows.
fn export(path: &std::path::Path, solver: &Solver) -> anyhow::Result<()> {
    let rows = solver
        .profile()
        .infosets()
        .map(|(info, node)| StrategyRow {
            infoset: info.to_string(),
            spot: info.spot().to_string(),
            card: u8::from(info.card()),
            actions: node.edges().iter().map(|a| format!("{:?}", a)).collect(),
            policy: node.averaged(),
        })
        .collect::<Vec<StrategyRow>>();
    Ok(std::fs::write(path, serde_json::to_string_pretty(&rows)?)?)
}

use crate::N_PLAYERS;
use crate::Probability;
use crate::TRAINING_LOG_INTERVAL;
use crate::Utility;
use crate::game::Deal;
use crate::game::Rules;
use crate::game::Spot;
use crate::game::Turn;
use crate::solver::Info;
use crate::solver::Profile;
use crate::solver::exploitability;
use rand::rngs::SmallRng;

/// The CFR trainer.
///
/// Owns the rules and the profile, walks the full action tree once per
/// sampled deal, and keeps a running estimate of the game value to P0.
/// Chance is sampled (one deal per iteration); the action tree below the
/// deal is enumerated exactly.
#[derive(Debug, Default)]
pub struct Solver {
    rules: Rules,
    profile: Profile,
    epochs: usize,
    value: Utility,
}

impl Solver {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            profile: Profile::default(),
            epochs: 0,
            value: 0.,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Running mean of sampled root utilities: the value of the game to P0
    /// under the strategies actually played so far.
    pub fn value(&self) -> Utility {
        match self.epochs {
            0 => 0.,
            epochs => self.value / epochs as Utility,
        }
    }

    /// Pin an infoset's policy before training. Effective only for keys not
    /// yet witnessed; see [`Profile::lock`].
    pub fn lock(&mut self, info: Info, policy: Vec<Probability>) {
        self.profile.lock(info, policy)
    }

    /// Best-response gain of both players against the current averaged
    /// profile. Computed by the independent sweep in [`exploitability`].
    pub fn exploitability(&self) -> Utility {
        exploitability(&self.rules, &self.profile)
    }

    /// One full CFR iteration for one sampled deal.
    ///
    /// Returns the root counterfactual utility to P0; drivers may discard
    /// it, since the regret and average updates on the profile are the
    /// point. Cards outside the configured pools are a caller bug.
    pub fn traverse(&mut self, deal: &Deal) -> Utility {
        for turn in [Turn::P0, Turn::P1] {
            assert!(
                self.rules.pool(turn).contains(&deal.card(turn)),
                "{} dealt {} outside pool {}",
                turn,
                deal.card(turn),
                self.rules.pool(turn),
            );
        }
        log::trace!("epoch {} deals {}", self.epochs, deal);
        let utility = self.explore(Spot::root(), deal, Turn::P0, [1., 1.]);
        self.epochs += 1;
        self.value += utility;
        utility
    }

    /// Train for the given number of iterations, drawing a fresh deal each
    /// time, with periodic progress logging.
    pub fn solve(mut self, iterations: usize, rng: &mut SmallRng) -> Self {
        log::debug!("training {} iterations under {:?}", iterations, self.rules);
        for epoch in 1..=iterations {
            let deal = Deal::draw(&self.rules, rng);
            let _ = self.traverse(&deal);
            if epoch % TRAINING_LOG_INTERVAL == 0 {
                log::info!(
                    "epoch {:>8} of {}  value {:+.4}  exploitability {:.6}",
                    epoch,
                    iterations,
                    self.value(),
                    self.exploitability(),
                );
            }
        }
        log::debug!("trained {} epochs over {} infosets", self.epochs, self.profile.size());
        self
    }

    /// Recursive CFR walk for one deal, returning the counterfactual
    /// utility of `spot` to the player acting there.
    ///
    /// Sign convention: every utility is from the current actor's
    /// perspective, so each recursive result is negated exactly once, at
    /// the call site. Terminal payoffs are likewise written from the
    /// perspective of the player who took the final action.
    ///
    /// `reaches` is indexed by player: the probability that each player's
    /// own choices so far would bring play here. The actor's own reach
    /// weights the average-strategy accumulation; the opponent's reach is
    /// the counterfactual weight on regret.
    fn explore(
        &mut self,
        spot: Spot,
        deal: &Deal,
        turn: Turn,
        reaches: [Probability; N_PLAYERS],
    ) -> Utility {
        let actor = usize::from(turn);
        let villain = usize::from(turn.flip());
        let handle = self.profile.witness(Info::from((spot, deal.card(turn))));
        let policy = {
            let node = self.profile.node_mut(handle);
            node.regret_match();
            node.accumulate(reaches[actor]);
            node.policy().to_vec()
        };
        let choices = spot.choices();
        let mut utilities = vec![0.; choices.len()];
        for (i, action) in choices.iter().enumerate() {
            let child = spot.apply(*action);
            utilities[i] = match child.terminal() {
                true => self.rules.payoff(child, deal, turn),
                false => {
                    let mut reaches = reaches;
                    reaches[actor] *= policy[i];
                    0. - self.explore(child, deal, turn.flip(), reaches)
                }
            };
        }
        let expected = policy
            .iter()
            .zip(utilities.iter())
            .map(|(p, u)| p * u)
            .sum::<Utility>();
        let node = self.profile.node_mut(handle);
        for (i, utility) in utilities.iter().enumerate() {
            node.add_regret(i, reaches[villain] * (utility - expected));
        }
        expected
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Epochs: {}  Value: {:+.4}  Exploitability: {:.4}", self.epochs, self.value(), self.exploitability())?;
        writeln!(f, "┌───────────┬────────┬──────────┬──────────┬──────────┬──────────┐")?;
        writeln!(f, "│   Infoset │ Action │ ∑ Regret │ ∑ Weight │  Instant │  Average │")?;
        writeln!(f, "├───────────┼────────┼──────────┼──────────┼──────────┼──────────┤")?;
        for (info, node) in self.profile.infosets() {
            let averaged = node.averaged();
            for (i, edge) in node.edges().iter().enumerate() {
                writeln!(
                    f,
                    "│ {:>9} │ {:>6} │ {:>+8.2} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                    format!("{}", info),
                    format!("{:?}", edge),
                    node.regret(i),
                    node.mass(i),
                    node.policy()[i],
                    averaged[i],
                )?;
            }
        }
        writeln!(f, "└───────────┴────────┴──────────┴──────────┴──────────┴──────────┘")?;
        Ok(())
    }
}

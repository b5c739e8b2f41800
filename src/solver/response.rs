use crate::Probability;
use crate::Utility;
use crate::game::Deal;
use crate::game::Rules;
use crate::game::Spot;
use crate::game::Turn;
use crate::solver::Info;
use crate::solver::Profile;
use std::collections::BTreeMap;

/// Total best-response gain of both players against the profile's averaged
/// strategy: `br(P0) + br(P1)`. Nonnegative, and zero exactly at
/// equilibrium, so it is the convergence metric for training.
///
/// Shares nothing with the training walk except the game definition and
/// the averaged policies, so it checks the trainer rather than echoing it.
pub fn exploitability(rules: &Rules, profile: &Profile) -> Utility {
    Response::new(rules, profile, Turn::P0).value()
        + Response::new(rules, profile, Turn::P1).value()
}

/// One best-response sweep: the hero maximizes per infoset against the
/// averaged profile, the villain plays it faithfully.
///
/// Action values are banked per hero infoset, weighted by chance and the
/// villain's reach, then maximized. Summing per-infoset maxima is the
/// hero's best-response value because every playout of this game passes
/// through exactly one hero decision.
struct Response<'a> {
    rules: &'a Rules,
    profile: &'a Profile,
    hero: Turn,
    encounters: BTreeMap<Info, Vec<Utility>>,
}

impl<'a> Response<'a> {
    fn new(rules: &'a Rules, profile: &'a Profile, hero: Turn) -> Self {
        Self {
            rules,
            profile,
            hero,
            encounters: BTreeMap::new(),
        }
    }

    /// The hero's expected value under a best response to the profile.
    fn value(mut self) -> Utility {
        let deals = self.deals();
        let chance = 1. / deals.len() as Probability;
        for deal in deals {
            self.descend(Spot::root(), &deal, Turn::P0, chance);
        }
        self.encounters
            .values()
            .map(|bank| bank.iter().copied().fold(Utility::MIN, Utility::max))
            .sum()
    }

    /// Every legal deal under the rules, uniformly likely.
    fn deals(&self) -> Vec<Deal> {
        self.rules
            .pool(Turn::P0)
            .flat_map(|p0| self.rules.pool(Turn::P1).map(move |p1| (p0, p1)))
            .filter(|(p0, p1)| p0 != p1)
            .map(|(p0, p1)| Deal::new(p0, p1))
            .collect()
    }

    /// Walk toward the hero's decisions, carrying chance × villain reach.
    /// At a hero decision, bank each action's continuation value; at a
    /// villain decision, weight each branch by the averaged policy and
    /// keep walking.
    fn descend(&mut self, spot: Spot, deal: &Deal, turn: Turn, weight: Probability) {
        let info = Info::from((spot, deal.card(turn)));
        if turn == self.hero {
            let continuations = spot
                .choices()
                .iter()
                .map(|action| self.continuation(spot.apply(*action), deal, turn))
                .collect::<Vec<Utility>>();
            let bank = self
                .encounters
                .entry(info)
                .or_insert_with(|| vec![0.; spot.choices().len()]);
            for (banked, value) in bank.iter_mut().zip(continuations.iter()) {
                *banked += weight * value;
            }
        } else {
            let policy = self.profile.averaged(&info);
            for (i, action) in spot.choices().iter().enumerate() {
                let child = spot.apply(*action);
                assert!(!child.terminal(), "every line passes through both players");
                self.descend(child, deal, turn.flip(), weight * policy[i]);
            }
        }
    }

    /// Value to the hero of a spot just reached by `mover`'s action, with
    /// every hero decision already upstream: terminals settle, villain
    /// spots play the averaged policy.
    fn continuation(&self, spot: Spot, deal: &Deal, mover: Turn) -> Utility {
        if spot.terminal() {
            let payoff = self.rules.payoff(spot, deal, mover);
            return match mover == self.hero {
                true => payoff,
                false => 0. - payoff,
            };
        }
        let turn = mover.flip();
        assert!(turn != self.hero, "the hero acts at most once per line");
        let info = Info::from((spot, deal.card(turn)));
        let policy = self.profile.averaged(&info);
        spot.choices()
            .iter()
            .enumerate()
            .map(|(i, action)| policy[i] * self.continuation(spot.apply(*action), deal, turn))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Card;
    use crate::game::Pool;
    use crate::solver::Solver;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn uniform_profiles_are_exploitable() {
        // Hand-solved vs an everywhere-uniform opponent in the full-deck
        // pot-2 game: br(P0) = 1/2, br(P1) = 1/6.
        let rules = Rules::default();
        let profile = Profile::default();
        let e = exploitability(&rules, &profile);
        assert!((e - 2. / 3.).abs() < 1e-4, "uniform exploitability {:.4} ≠ 0.67", e);
    }

    #[test]
    fn single_deal_sweeps_are_exact() {
        // K vs Q only: br(P0) = 3/2 (always bet), br(P1) = -1 (always fold).
        let rules = Rules::new(2., 1., [Pool::from(0b100), Pool::from(0b010)]);
        let profile = Profile::default();
        let e = exploitability(&rules, &profile);
        assert!((e - 0.5).abs() < 1e-6, "nut matchup exploitability {:.4} ≠ 0.50", e);
    }

    #[test]
    fn pinned_equilibria_are_unexploitable() {
        // The known solution of the pot-2 bet-1 game: K always bets and
        // calls, Q never bets and calls 1/3, J bluffs 1/3 and never calls.
        let ref mut rng = SmallRng::seed_from_u64(2024);
        let mut solver = Solver::new(Rules::default());
        solver.lock(Info::new(Spot::Root, Card::King), vec![1., 0.]);
        solver.lock(Info::new(Spot::Root, Card::Queen), vec![0., 1.]);
        solver.lock(Info::new(Spot::Root, Card::Jack), vec![1. / 3., 2. / 3.]);
        solver.lock(Info::new(Spot::Bet, Card::King), vec![1., 0.]);
        solver.lock(Info::new(Spot::Bet, Card::Queen), vec![1. / 3., 2. / 3.]);
        solver.lock(Info::new(Spot::Bet, Card::Jack), vec![0., 1.]);
        for card in [Card::Jack, Card::Queen, Card::King] {
            solver.lock(Info::new(Spot::Check, card), vec![1.]);
        }
        let solver = solver.solve(1 << 10, rng);
        let e = solver.exploitability();
        assert!(e < 1e-3, "equilibrium exploitability {:.6} ≠ 0", e);
    }
}

use crate::Utility;
use crate::game::Deal;
use crate::game::Pool;
use crate::game::Spot;
use crate::game::Turn;

/// Game configuration: stakes and the legal card universe, fixed once
/// before training.
///
/// Also the terminal payoff model. Every payoff is from the perspective of
/// the player who took the final action; the traversal negates across
/// perspective flips, which is what keeps the game zero-sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pot: Utility,
    bet: Utility,
    pools: [Pool; 2],
}

impl Rules {
    pub fn new(pot: Utility, bet: Utility, pools: [Pool; 2]) -> Self {
        assert!(pot > 0. && bet > 0., "stakes must be positive");
        let dealable = pools[0]
            .flat_map(|p0| pools[1].map(move |p1| (p0, p1)))
            .any(|(p0, p1)| p0 != p1);
        assert!(dealable, "pools admit no distinct deal");
        Self { pot, bet, pools }
    }

    pub fn pot(&self) -> Utility {
        self.pot
    }
    pub fn bet(&self) -> Utility {
        self.bet
    }
    pub fn pool(&self, turn: Turn) -> Pool {
        self.pools[usize::from(turn)]
    }
    /// Half the pot: the ante each player has at stake before any bet.
    pub fn blind(&self) -> Utility {
        self.pot / 2.
    }

    /// Payoff at a terminal spot to the player who took the final action.
    ///
    /// Folding always costs the blind regardless of cards. Showdowns award
    /// the blind, or the bet plus the blind when the pot was raised, signed
    /// by whether the actor's card wins.
    pub fn payoff(&self, spot: Spot, deal: &Deal, turn: Turn) -> Utility {
        let direction = match deal.card(turn).beats(&deal.card(turn.flip())) {
            true => 0. + 1.,
            false => 0. - 1.,
        };
        match spot {
            Spot::BetFold => 0. - self.blind(),
            Spot::CheckCheck => direction * self.blind(),
            Spot::BetCall => direction * (self.bet + self.blind()),
            spot => panic!("no payoff at non-terminal {:?}", spot),
        }
    }
}

impl Default for Rules {
    /// The classic unconstrained game: ante 1 each, fixed bet 1, full deck.
    fn default() -> Self {
        Self::new(2., 1., [Pool::full(), Pool::full()])
    }
}

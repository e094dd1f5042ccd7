//! N-player public goods game

use serde::{Deserialize, Serialize};
use crate::error::{ensure_non_negative, GameError};
use crate::model::{GameModel, GameParameters, Payoff, PayoffPair};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicGoodsParams {
    /// What each player starts with
    pub endowment: f64,
    /// Growth applied to the common pot
    pub multiplier: f64,
    pub num_players: usize,
}

impl Default for PublicGoodsParams {
    fn default() -> Self {
        Self { endowment: 10.0, multiplier: 1.6, num_players: 4 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PublicGoods {
    params: PublicGoodsParams,
}

impl PublicGoods {
    pub fn new(params: PublicGoodsParams) -> Result<Self, GameError> {
        ensure_non_negative("endowment", params.endowment)?;
        ensure_non_negative("multiplier", params.multiplier)?;
        if params.num_players == 0 {
            return Err(GameError::InvalidParameter {
                name: "num_players",
                reason: "at least one player is required".to_string(),
            });
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &PublicGoodsParams {
        &self.params
    }

    /// One payoff per player, in contribution order.
    ///
    /// Exactly `num_players` contributions are required; each is clamped
    /// to `[0, endowment]`.
    pub fn play(&self, contributions: &[f64]) -> Result<Vec<Payoff>, GameError> {
        let PublicGoodsParams { endowment, num_players, .. } = self.params;
        if contributions.len() != num_players {
            return Err(GameError::ContributionCount {
                expected: num_players,
                got: contributions.len(),
            });
        }

        let clamped: Vec<f64> = contributions.iter().map(|c| c.clamp(0.0, endowment)).collect();
        let share = self.share(clamped.iter().sum(), num_players);

        Ok(clamped.iter().map(|c| endowment - c + share).collect())
    }

    /// Two-player convenience form; the pot is split between the two.
    pub fn play_two_player(&self, contribution1: f64, contribution2: f64) -> PayoffPair {
        let endowment = self.params.endowment;
        let c1 = contribution1.clamp(0.0, endowment);
        let c2 = contribution2.clamp(0.0, endowment);
        let share = self.share(c1 + c2, 2);

        (endowment - c1 + share, endowment - c2 + share)
    }

    fn share(&self, total_contribution: f64, players: usize) -> f64 {
        total_contribution * self.params.multiplier / players as f64
    }
}

impl GameModel for PublicGoods {
    fn name(&self) -> &'static str {
        "Public Goods Game"
    }

    fn description(&self) -> &'static str {
        "A multiplayer game where players decide how much to contribute to a public pot that benefits everyone, exploring the tension between individual and group interests."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([
            ("endowment", self.params.endowment),
            ("multiplier", self.params.multiplier),
            ("num_players", self.params.num_players as f64),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_everyone_contributes() {
        let game = PublicGoods::default();
        let payoffs = game.play(&[10.0, 10.0, 10.0, 10.0]).unwrap();
        // pot 40 * 1.6 = 64, share 16
        assert!(payoffs.iter().all(|p| close(*p, 16.0)));
    }

    #[test]
    fn test_free_rider_does_best() {
        let game = PublicGoods::default();
        let payoffs = game.play(&[0.0, 10.0, 10.0, 10.0]).unwrap();
        // pot 30 * 1.6 = 48, share 12
        assert!(close(payoffs[0], 22.0));
        assert!(close(payoffs[1], 12.0));
    }

    #[test]
    fn test_contributions_clamped() {
        let game = PublicGoods::default();
        let clamped = game.play(&[-5.0, 50.0, 0.0, 0.0]).unwrap();
        let expected = game.play(&[0.0, 10.0, 0.0, 0.0]).unwrap();
        assert_eq!(clamped, expected);
    }

    #[test]
    fn test_wrong_contribution_count() {
        let game = PublicGoods::default();
        assert_eq!(
            game.play(&[1.0, 2.0]),
            Err(GameError::ContributionCount { expected: 4, got: 2 })
        );
    }

    #[test]
    fn test_two_player() {
        let game = PublicGoods::default();
        let (p1, p2) = game.play_two_player(10.0, 0.0);
        // pot 16, share 8
        assert!(close(p1, 8.0));
        assert!(close(p2, 18.0));
    }

    #[test]
    fn test_zero_players_rejected() {
        let params = PublicGoodsParams { num_players: 0, ..Default::default() };
        assert!(PublicGoods::new(params).is_err());
    }
}

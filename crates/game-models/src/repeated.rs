//! Repeated Prisoner's Dilemma match execution

use serde::{Deserialize, Serialize};
use crate::error::{ensure_unit_interval, GameError};
use crate::games::DilemmaParams;
use crate::model::{GameModel, GameParameters, PayoffPair};
use crate::strategy::{execute_strategy, Move, Strategy};

/// Longest accepted match
pub const MAX_ROUNDS: u32 = 100_000;

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub move_1: Move,
    pub move_2: Move,
    /// Undiscounted round payoff
    pub payoff_1: f64,
    pub payoff_2: f64,
    /// Weight applied to this round: discount_factor^round
    pub discount: f64,
    pub cumulative_1: f64,
    pub cumulative_2: f64,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Discounted totals (player 1, player 2)
    pub scores: [f64; 2],
    pub history1: Vec<Move>,
    pub history2: Vec<Move>,
    pub rounds: Vec<RoundResult>,
}

impl MatchResult {
    pub fn scores(&self) -> PayoffPair {
        (self.scores[0], self.scores[1])
    }
}

/// Match configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatedParams {
    #[serde(flatten)]
    pub payoffs: DilemmaParams,
    pub rounds: u32,
    /// Per-round weight in [0, 1]; round r counts discount_factor^r
    pub discount_factor: f64,
}

impl Default for RepeatedParams {
    fn default() -> Self {
        Self {
            payoffs: DilemmaParams::default(),
            rounds: 5,
            discount_factor: 0.9,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RepeatedPrisonersDilemma {
    params: RepeatedParams,
}

impl RepeatedPrisonersDilemma {
    pub fn new(params: RepeatedParams) -> Result<Self, GameError> {
        params.payoffs.validate()?;
        ensure_unit_interval("discount_factor", params.discount_factor)?;
        if params.rounds > MAX_ROUNDS {
            return Err(GameError::InvalidParameter {
                name: "rounds",
                reason: format!("must be at most {}, got {}", MAX_ROUNDS, params.rounds),
            });
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &RepeatedParams {
        &self.params
    }

    /// Run a complete match between two strategies
    ///
    /// Moves are chosen simultaneously each round from the histories
    /// so far, so neither player sees the other's current move.
    pub fn play_with_strategies(&self, strategy_1: Strategy, strategy_2: Strategy) -> MatchResult {
        let RepeatedParams { payoffs, rounds, discount_factor } = self.params;

        let mut history1: Vec<Move> = Vec::with_capacity(rounds as usize);
        let mut history2: Vec<Move> = Vec::with_capacity(rounds as usize);
        let mut results: Vec<RoundResult> = Vec::with_capacity(rounds as usize);
        let mut total_1 = 0.0;
        let mut total_2 = 0.0;
        let mut discount = 1.0;

        for round in 0..rounds {
            let move_1 = execute_strategy(strategy_1, &history2, &history1);
            let move_2 = execute_strategy(strategy_2, &history1, &history2);

            let (payoff_1, payoff_2) = payoffs.payoff(move_1.into(), move_2.into());
            total_1 += payoff_1 * discount;
            total_2 += payoff_2 * discount;

            log::debug!(
                "round {}: {:?} vs {:?} -> ({}, {}) x {:.4}",
                round, move_1, move_2, payoff_1, payoff_2, discount
            );

            results.push(RoundResult {
                round,
                move_1,
                move_2,
                payoff_1,
                payoff_2,
                discount,
                cumulative_1: total_1,
                cumulative_2: total_2,
            });

            history1.push(move_1);
            history2.push(move_2);
            discount *= discount_factor;
        }

        MatchResult {
            scores: [total_1, total_2],
            history1,
            history2,
            rounds: results,
        }
    }

    /// Discounted scores for two strategy ids (0..=4)
    pub fn play(&self, strategy_1: u8, strategy_2: u8) -> Result<PayoffPair, GameError> {
        Ok(self.play_ids(strategy_1, strategy_2)?.scores())
    }

    /// Full match for two strategy ids (0..=4)
    pub fn play_ids(&self, strategy_1: u8, strategy_2: u8) -> Result<MatchResult, GameError> {
        let s1 = Strategy::try_from(strategy_1)?;
        let s2 = Strategy::try_from(strategy_2)?;
        Ok(self.play_with_strategies(s1, s2))
    }
}

impl GameModel for RepeatedPrisonersDilemma {
    fn name(&self) -> &'static str {
        "Repeated Prisoner's Dilemma"
    }

    fn description(&self) -> &'static str {
        "A multi-round version of Prisoner's Dilemma where players can learn and adapt strategies over time, exploring cooperation emergence."
    }

    fn parameters(&self) -> GameParameters {
        let mut params = GameParameters::new();
        self.params.payoffs.insert_into(&mut params);
        params.insert("rounds", self.params.rounds as f64);
        params.insert("discount_factor", self.params.discount_factor);
        params
    }
}

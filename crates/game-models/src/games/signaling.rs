//! Sender-receiver signaling game with exact expected payoffs
//!
//! The sender knows its type (High or Low), sends a signal, and the
//! receiver picks a response from the signal alone. Payoffs are
//! averaged over the type prior; nothing is sampled.

use serde::{Deserialize, Serialize};
use crate::error::{ensure_finite, ensure_unit_interval, GameError};
use crate::model::{GameModel, GameParameters, PayoffPair};

/// Sender type, and also the value space of signals and responses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    High,
    Low,
}

impl Level {
    fn flip(self) -> Self {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }
}

/// How the sender maps its type to a signal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SenderStrategy {
    /// Signal reveals type
    Separating,
    PoolingHigh,
    PoolingLow,
    /// Signal inverts type
    Perverse,
}

impl SenderStrategy {
    pub const ALL: [SenderStrategy; 4] = [
        SenderStrategy::Separating,
        SenderStrategy::PoolingHigh,
        SenderStrategy::PoolingLow,
        SenderStrategy::Perverse,
    ];

    pub fn signal(self, sender_type: Level) -> Level {
        match self {
            SenderStrategy::Separating => sender_type,
            SenderStrategy::PoolingHigh => Level::High,
            SenderStrategy::PoolingLow => Level::Low,
            SenderStrategy::Perverse => sender_type.flip(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SenderStrategy::Separating => "Separating (Honest)",
            SenderStrategy::PoolingHigh => "Pooling High",
            SenderStrategy::PoolingLow => "Pooling Low",
            SenderStrategy::Perverse => "Perverse (Dishonest)",
        }
    }
}

impl TryFrom<u8> for SenderStrategy {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(id as usize).copied().ok_or(GameError::InvalidStrategy {
            game: "Signaling Game",
            role: "sender",
            id,
        })
    }
}

/// How the receiver maps a signal to a response
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiverStrategy {
    Trust,
    Distrust,
    AlwaysHigh,
    AlwaysLow,
}

impl ReceiverStrategy {
    pub const ALL: [ReceiverStrategy; 4] = [
        ReceiverStrategy::Trust,
        ReceiverStrategy::Distrust,
        ReceiverStrategy::AlwaysHigh,
        ReceiverStrategy::AlwaysLow,
    ];

    pub fn respond(self, signal: Level) -> Level {
        match self {
            ReceiverStrategy::Trust => signal,
            ReceiverStrategy::Distrust => signal.flip(),
            ReceiverStrategy::AlwaysHigh => Level::High,
            ReceiverStrategy::AlwaysLow => Level::Low,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReceiverStrategy::Trust => "Trust Signals",
            ReceiverStrategy::Distrust => "Distrust Signals",
            ReceiverStrategy::AlwaysHigh => "Always High",
            ReceiverStrategy::AlwaysLow => "Always Low",
        }
    }
}

impl TryFrom<u8> for ReceiverStrategy {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(id as usize).copied().ok_or(GameError::InvalidStrategy {
            game: "Signaling Game",
            role: "receiver",
            id,
        })
    }
}

/// Sender payoffs are keyed by (sender type, receiver response).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalingParams {
    #[serde(alias = "high_sender_high_signal_payoff")]
    pub high_type_high_response: f64,
    #[serde(alias = "high_sender_low_signal_payoff")]
    pub high_type_low_response: f64,
    #[serde(alias = "low_sender_high_signal_payoff")]
    pub low_type_high_response: f64,
    #[serde(alias = "low_sender_low_signal_payoff")]
    pub low_type_low_response: f64,
    /// Receiver's payoff when the response matches the sender's type
    #[serde(alias = "correct_receiver_payoff")]
    pub receiver_correct: f64,
    #[serde(alias = "incorrect_receiver_payoff")]
    pub receiver_incorrect: f64,
    /// Prior probability that the sender is the High type
    #[serde(alias = "high_type_probability")]
    pub high_type_prior: f64,
}

impl Default for SignalingParams {
    fn default() -> Self {
        Self {
            high_type_high_response: 10.0,
            high_type_low_response: 5.0,
            low_type_high_response: 8.0,
            low_type_low_response: 7.0,
            receiver_correct: 6.0,
            receiver_incorrect: 2.0,
            high_type_prior: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Signaling {
    params: SignalingParams,
}

impl Signaling {
    pub fn new(params: SignalingParams) -> Result<Self, GameError> {
        ensure_finite("high_type_high_response", params.high_type_high_response)?;
        ensure_finite("high_type_low_response", params.high_type_low_response)?;
        ensure_finite("low_type_high_response", params.low_type_high_response)?;
        ensure_finite("low_type_low_response", params.low_type_low_response)?;
        ensure_finite("receiver_correct", params.receiver_correct)?;
        ensure_finite("receiver_incorrect", params.receiver_incorrect)?;
        ensure_unit_interval("high_type_prior", params.high_type_prior)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SignalingParams {
        &self.params
    }

    /// Expected (sender, receiver) payoff
    pub fn play(&self, sender: SenderStrategy, receiver: ReceiverStrategy) -> PayoffPair {
        let prior = self.params.high_type_prior;

        [(Level::High, prior), (Level::Low, 1.0 - prior)]
            .into_iter()
            .map(|(sender_type, weight)| {
                let response = receiver.respond(sender.signal(sender_type));
                let (s, r) = self.outcome(sender_type, response);
                (weight * s, weight * r)
            })
            .fold((0.0, 0.0), |acc, (s, r)| (acc.0 + s, acc.1 + r))
    }

    /// Play with raw ids 0..=3
    pub fn play_ids(&self, sender: u8, receiver: u8) -> Result<PayoffPair, GameError> {
        Ok(self.play(sender.try_into()?, receiver.try_into()?))
    }

    fn outcome(&self, sender_type: Level, response: Level) -> PayoffPair {
        let p = &self.params;
        let sender_payoff = match (sender_type, response) {
            (Level::High, Level::High) => p.high_type_high_response,
            (Level::High, Level::Low) => p.high_type_low_response,
            (Level::Low, Level::High) => p.low_type_high_response,
            (Level::Low, Level::Low) => p.low_type_low_response,
        };
        let receiver_payoff = if sender_type == response { p.receiver_correct } else { p.receiver_incorrect };
        (sender_payoff, receiver_payoff)
    }
}

impl GameModel for Signaling {
    fn name(&self) -> &'static str {
        "Signaling Game"
    }

    fn description(&self) -> &'static str {
        "An asymmetric information game where one player knows their type and can send a signal, while the other player must interpret this signal and respond. Models communication when incentives aren't fully aligned."
    }

    fn parameters(&self) -> GameParameters {
        let p = &self.params;
        GameParameters::from([
            ("high_sender_high_signal_payoff", p.high_type_high_response),
            ("high_sender_low_signal_payoff", p.high_type_low_response),
            ("low_sender_high_signal_payoff", p.low_type_high_response),
            ("low_sender_low_signal_payoff", p.low_type_low_response),
            ("correct_receiver_payoff", p.receiver_correct),
            ("incorrect_receiver_payoff", p.receiver_incorrect),
            ("high_type_probability", p.high_type_prior),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: PayoffPair, expected: PayoffPair) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_separating_with_trust() {
        let game = Signaling::default();
        // High: 10/6, Low: 7/6
        assert_close(game.play(SenderStrategy::Separating, ReceiverStrategy::Trust), (8.5, 6.0));
    }

    #[test]
    fn test_separating_with_distrust() {
        let game = Signaling::default();
        // High gets low response: 5/2, Low gets high response: 8/2
        assert_close(game.play(SenderStrategy::Separating, ReceiverStrategy::Distrust), (6.5, 2.0));
    }

    #[test]
    fn test_pooling_high_with_trust() {
        let game = Signaling::default();
        // Everyone gets the high response: High 10/6, Low 8/2
        assert_close(game.play(SenderStrategy::PoolingHigh, ReceiverStrategy::Trust), (9.0, 4.0));
    }

    #[test]
    fn test_perverse_with_distrust_reveals_type() {
        let game = Signaling::default();
        assert_close(
            game.play(SenderStrategy::Perverse, ReceiverStrategy::Distrust),
            game.play(SenderStrategy::Separating, ReceiverStrategy::Trust),
        );
    }

    #[test]
    fn test_receiver_ignoring_signal() {
        let game = Signaling::default();
        for sender in SenderStrategy::ALL {
            assert_close(game.play(sender, ReceiverStrategy::AlwaysLow), (6.0, 4.0));
        }
    }

    #[test]
    fn test_prior_weights() {
        let game = Signaling::new(SignalingParams { high_type_prior: 1.0, ..Default::default() }).unwrap();
        assert_close(game.play(SenderStrategy::PoolingLow, ReceiverStrategy::Trust), (5.0, 2.0));

        let game = Signaling::new(SignalingParams { high_type_prior: 0.25, ..Default::default() }).unwrap();
        // 0.25 * (10, 6) + 0.75 * (7, 6)
        assert_close(game.play(SenderStrategy::Separating, ReceiverStrategy::Trust), (7.75, 6.0));
    }

    #[test]
    fn test_prior_out_of_range_rejected() {
        let params = SignalingParams { high_type_prior: 1.5, ..Default::default() };
        assert!(Signaling::new(params).is_err());
    }

    #[test]
    fn test_strategy_ids() {
        let game = Signaling::default();
        assert_eq!(
            game.play_ids(0, 0).unwrap(),
            game.play(SenderStrategy::Separating, ReceiverStrategy::Trust)
        );
        assert!(matches!(
            game.play_ids(4, 0),
            Err(GameError::InvalidStrategy { role: "sender", id: 4, .. })
        ));
        assert!(matches!(
            game.play_ids(0, 5),
            Err(GameError::InvalidStrategy { role: "receiver", id: 5, .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let game = Signaling::default();
        let first = game.play(SenderStrategy::Perverse, ReceiverStrategy::AlwaysHigh);
        for _ in 0..10 {
            assert_eq!(game.play(SenderStrategy::Perverse, ReceiverStrategy::AlwaysHigh), first);
        }
    }
}

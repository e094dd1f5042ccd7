//! Division games: Dictator, Trust and Ultimatum
//!
//! Amounts are continuous and clamped into range, never rejected.

use serde::{Deserialize, Serialize};
use crate::error::{ensure_non_negative, GameError};
use crate::model::{GameModel, GameParameters, PayoffPair};

// ── Dictator ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictatorParams {
    pub total_amount: f64,
}

impl Default for DictatorParams {
    fn default() -> Self {
        Self { total_amount: 10.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dictator {
    params: DictatorParams,
}

impl Dictator {
    pub fn new(params: DictatorParams) -> Result<Self, GameError> {
        ensure_non_negative("total_amount", params.total_amount)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DictatorParams {
        &self.params
    }

    /// Returns (dictator, recipient)
    pub fn play(&self, amount_given: f64) -> PayoffPair {
        let total = self.params.total_amount;
        let given = amount_given.clamp(0.0, total);
        (total - given, given)
    }
}

impl GameModel for Dictator {
    fn name(&self) -> &'static str {
        "Dictator Game"
    }

    fn description(&self) -> &'static str {
        "A simple economic game exploring fairness and altruism. One player (the dictator) decides how to split a sum of money with another player who has no choice but to accept."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([("total_amount", self.params.total_amount)])
    }
}

// ── Trust ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustParams {
    pub initial_amount: f64,
    /// Growth applied to whatever the investor sends
    pub multiplier: f64,
}

impl Default for TrustParams {
    fn default() -> Self {
        Self { initial_amount: 10.0, multiplier: 3.0 }
    }
}

/// Coarse choice used by the simplified interface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustLevel {
    Low,
    Medium,
    High,
}

impl TrustLevel {
    pub const ALL: [TrustLevel; 3] = [TrustLevel::Low, TrustLevel::Medium, TrustLevel::High];

    pub fn from_index(index: usize) -> Result<Self, GameError> {
        Self::ALL.get(index).copied().ok_or(GameError::InvalidAction {
            game: "Trust Game",
            index,
            options: Self::ALL.len(),
        })
    }

    /// Fraction of the initial amount sent
    pub fn send_fraction(self) -> f64 {
        match self {
            TrustLevel::Low => 0.2,
            TrustLevel::Medium => 0.5,
            TrustLevel::High => 0.8,
        }
    }

    /// Fraction of the multiplied amount returned
    pub fn return_ratio(self) -> f64 {
        match self {
            TrustLevel::Low => 0.1,
            TrustLevel::Medium => 0.3,
            TrustLevel::High => 0.5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TrustLevel::Low => "Low",
            TrustLevel::Medium => "Medium",
            TrustLevel::High => "High",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trust {
    params: TrustParams,
}

impl Trust {
    pub fn new(params: TrustParams) -> Result<Self, GameError> {
        ensure_non_negative("initial_amount", params.initial_amount)?;
        ensure_non_negative("multiplier", params.multiplier)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &TrustParams {
        &self.params
    }

    /// Returns (investor, trustee)
    pub fn play(&self, amount_sent: f64, return_ratio: f64) -> PayoffPair {
        let TrustParams { initial_amount, multiplier } = self.params;
        let sent = amount_sent.clamp(0.0, initial_amount);
        let ratio = return_ratio.clamp(0.0, 1.0);

        let multiplied = sent * multiplier;
        let returned = multiplied * ratio;

        (initial_amount - sent + returned, multiplied - returned)
    }

    pub fn play_levels(&self, send: TrustLevel, give_back: TrustLevel) -> PayoffPair {
        self.play(self.params.initial_amount * send.send_fraction(), give_back.return_ratio())
    }

    /// Simplified interface with level indices 0..=2
    pub fn play_simple(&self, send_choice: usize, return_choice: usize) -> Result<PayoffPair, GameError> {
        Ok(self.play_levels(TrustLevel::from_index(send_choice)?, TrustLevel::from_index(return_choice)?))
    }
}

impl GameModel for Trust {
    fn name(&self) -> &'static str {
        "Trust Game"
    }

    fn description(&self) -> &'static str {
        "An economic game exploring trust and reciprocity. The first player decides how much to send to the second, this amount is multiplied, and the second player decides how much to return."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([
            ("initial_amount", self.params.initial_amount),
            ("multiplier", self.params.multiplier),
        ])
    }
}

// ── Ultimatum ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UltimatumParams {
    pub total_amount: f64,
}

impl Default for UltimatumParams {
    fn default() -> Self {
        Self { total_amount: 10.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposerStrategy {
    /// Half, rounded down
    FairSplit,
    /// 30% of the pot
    SlightlyUnfair,
    /// 10% of the pot
    VeryUnfair,
    /// 90% of the pot
    AlmostAll,
}

impl ProposerStrategy {
    pub const ALL: [ProposerStrategy; 4] = [
        ProposerStrategy::FairSplit,
        ProposerStrategy::SlightlyUnfair,
        ProposerStrategy::VeryUnfair,
        ProposerStrategy::AlmostAll,
    ];

    pub fn offer(self, total: f64) -> f64 {
        match self {
            ProposerStrategy::FairSplit => (total / 2.0).floor(),
            ProposerStrategy::SlightlyUnfair => total * 0.3,
            ProposerStrategy::VeryUnfair => total * 0.1,
            ProposerStrategy::AlmostAll => total * 0.9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProposerStrategy::FairSplit => "Fair Split (50%)",
            ProposerStrategy::SlightlyUnfair => "Slightly Unfair (30%)",
            ProposerStrategy::VeryUnfair => "Very Unfair (10%)",
            ProposerStrategy::AlmostAll => "Almost All (90%)",
        }
    }
}

impl TryFrom<u8> for ProposerStrategy {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(id as usize).copied().ok_or(GameError::InvalidStrategy {
            game: "Ultimatum Game",
            role: "proposer",
            id,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponderStrategy {
    AcceptAnything,
    /// At least half
    RequireFair,
    /// At least 30%
    RequireSomewhatFair,
    /// Any non-zero offer
    Rational,
}

impl ResponderStrategy {
    pub const ALL: [ResponderStrategy; 4] = [
        ResponderStrategy::AcceptAnything,
        ResponderStrategy::RequireFair,
        ResponderStrategy::RequireSomewhatFair,
        ResponderStrategy::Rational,
    ];

    pub fn threshold(self, total: f64) -> f64 {
        match self {
            ResponderStrategy::AcceptAnything => 0.0,
            ResponderStrategy::RequireFair => total * 0.5,
            ResponderStrategy::RequireSomewhatFair => total * 0.3,
            ResponderStrategy::Rational => {
                if total > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResponderStrategy::AcceptAnything => "Accept Anything",
            ResponderStrategy::RequireFair => "Require Fair (50%+)",
            ResponderStrategy::RequireSomewhatFair => "Require Somewhat Fair (30%+)",
            ResponderStrategy::Rational => "Rational (Accept any non-zero)",
        }
    }
}

impl TryFrom<u8> for ResponderStrategy {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(id as usize).copied().ok_or(GameError::InvalidStrategy {
            game: "Ultimatum Game",
            role: "responder",
            id,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ultimatum {
    params: UltimatumParams,
}

impl Ultimatum {
    pub fn new(params: UltimatumParams) -> Result<Self, GameError> {
        ensure_non_negative("total_amount", params.total_amount)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &UltimatumParams {
        &self.params
    }

    /// Returns (proposer, responder); a rejected offer pays nobody
    pub fn play(&self, offer: f64, accept_threshold: f64) -> PayoffPair {
        let total = self.params.total_amount;
        let offer = offer.clamp(0.0, total);
        let threshold = accept_threshold.clamp(0.0, total);

        if offer >= threshold {
            (total - offer, offer)
        } else {
            (0.0, 0.0)
        }
    }

    /// Whether the responder would take the proposer's offer
    pub fn accepts(&self, proposer: ProposerStrategy, responder: ResponderStrategy) -> bool {
        let (offer, threshold) = self.rounded_terms(proposer, responder);
        offer.clamp(0.0, self.params.total_amount) >= threshold.clamp(0.0, self.params.total_amount)
    }

    pub fn play_with_strategies(&self, proposer: ProposerStrategy, responder: ResponderStrategy) -> PayoffPair {
        let (offer, threshold) = self.rounded_terms(proposer, responder);
        self.play(offer, threshold)
    }

    /// Strategy-driven play with raw ids 0..=3
    pub fn play_with_strategy_ids(&self, proposer: u8, responder: u8) -> Result<PayoffPair, GameError> {
        Ok(self.play_with_strategies(proposer.try_into()?, responder.try_into()?))
    }

    fn rounded_terms(&self, proposer: ProposerStrategy, responder: ResponderStrategy) -> (f64, f64) {
        let total = self.params.total_amount;
        (
            proposer.offer(total).round_ties_even(),
            responder.threshold(total).round_ties_even(),
        )
    }
}

impl GameModel for Ultimatum {
    fn name(&self) -> &'static str {
        "Ultimatum Game"
    }

    fn description(&self) -> &'static str {
        "A negotiation game where one player proposes how to divide a sum of money, and the other player can accept or reject the offer. If rejected, both players receive nothing."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([("total_amount", self.params.total_amount)])
    }
}

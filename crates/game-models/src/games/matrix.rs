//! Symmetric-choice 2x2 games: Prisoner's Dilemma, Stag Hunt,
//! Coordination, Hawk-Dove and Battle of the Sexes

use serde::{Deserialize, Serialize};
use crate::error::{ensure_finite, GameError};
use crate::model::{ActionLabels, Choice, GameModel, GameParameters, PayoffPair, TwoActionGame};

// ── Prisoner's Dilemma ───────────────────────────────────────────────

/// Payoffs of a single Prisoner's Dilemma round.
///
/// The dilemma property needs T > R > P > S; it is not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DilemmaParams {
    /// Both cooperate
    #[serde(alias = "R")]
    pub reward: f64,
    /// Betray a cooperator
    #[serde(alias = "T")]
    pub temptation: f64,
    /// Cooperate with a betrayer
    #[serde(alias = "S")]
    pub sucker: f64,
    /// Both betray
    #[serde(alias = "P")]
    pub punishment: f64,
}

impl Default for DilemmaParams {
    fn default() -> Self {
        Self { reward: 3.0, temptation: 5.0, sucker: 0.0, punishment: 1.0 }
    }
}

impl DilemmaParams {
    pub fn validate(&self) -> Result<(), GameError> {
        ensure_finite("reward", self.reward)?;
        ensure_finite("temptation", self.temptation)?;
        ensure_finite("sucker", self.sucker)?;
        ensure_finite("punishment", self.punishment)
    }

    /// T > R > P > S
    pub fn is_dilemma(&self) -> bool {
        self.temptation > self.reward && self.reward > self.punishment && self.punishment > self.sucker
    }

    /// Single-round payoff; `Choice::First` is Cooperate
    pub fn payoff(&self, action1: Choice, action2: Choice) -> PayoffPair {
        match (action1, action2) {
            (Choice::First, Choice::First) => (self.reward, self.reward),
            (Choice::Second, Choice::Second) => (self.punishment, self.punishment),
            (Choice::First, Choice::Second) => (self.sucker, self.temptation),
            (Choice::Second, Choice::First) => (self.temptation, self.sucker),
        }
    }

    pub(crate) fn insert_into(&self, params: &mut GameParameters) {
        params.insert("R", self.reward);
        params.insert("T", self.temptation);
        params.insert("S", self.sucker);
        params.insert("P", self.punishment);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrisonersDilemma {
    params: DilemmaParams,
}

impl PrisonersDilemma {
    pub fn new(params: DilemmaParams) -> Result<Self, GameError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DilemmaParams {
        &self.params
    }
}

impl GameModel for PrisonersDilemma {
    fn name(&self) -> &'static str {
        "Prisoner's Dilemma"
    }

    fn description(&self) -> &'static str {
        "A classic non-zero-sum game model where two prisoners choose to cooperate or betray."
    }

    fn parameters(&self) -> GameParameters {
        let mut params = GameParameters::new();
        self.params.insert_into(&mut params);
        params
    }
}

impl TwoActionGame for PrisonersDilemma {
    fn action_labels(&self) -> ActionLabels {
        ActionLabels::symmetric(["Cooperate", "Betray"])
    }

    fn payoff(&self, action1: Choice, action2: Choice) -> PayoffPair {
        self.params.payoff(action1, action2)
    }
}

// ── Stag Hunt ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagHuntParams {
    pub stag: f64,
    pub hare: f64,
    /// Hunting stag alone
    pub fail: f64,
}

impl Default for StagHuntParams {
    fn default() -> Self {
        Self { stag: 4.0, hare: 2.0, fail: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StagHunt {
    params: StagHuntParams,
}

impl StagHunt {
    pub fn new(params: StagHuntParams) -> Result<Self, GameError> {
        ensure_finite("stag", params.stag)?;
        ensure_finite("hare", params.hare)?;
        ensure_finite("fail", params.fail)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &StagHuntParams {
        &self.params
    }
}

impl GameModel for StagHunt {
    fn name(&self) -> &'static str {
        "Stag Hunt"
    }

    fn description(&self) -> &'static str {
        "A game model with both cooperation and risk, examining trust and collaboration."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([
            ("stag", self.params.stag),
            ("hare", self.params.hare),
            ("fail", self.params.fail),
        ])
    }
}

impl TwoActionGame for StagHunt {
    fn action_labels(&self) -> ActionLabels {
        ActionLabels::symmetric(["Hunt Stag", "Hunt Hare"])
    }

    fn payoff(&self, action1: Choice, action2: Choice) -> PayoffPair {
        let StagHuntParams { stag, hare, fail } = self.params;
        match (action1, action2) {
            (Choice::First, Choice::First) => (stag, stag),
            (Choice::Second, Choice::Second) => (hare, hare),
            (Choice::First, Choice::Second) => (fail, hare),
            (Choice::Second, Choice::First) => (hare, fail),
        }
    }
}

// ── Coordination ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinationParams {
    /// Both pick option A
    #[serde(alias = "coord_a")]
    pub option_a: f64,
    /// Both pick option B
    #[serde(alias = "coord_b")]
    pub option_b: f64,
    pub mismatch: f64,
}

impl Default for CoordinationParams {
    fn default() -> Self {
        Self { option_a: 3.0, option_b: 3.0, mismatch: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordination {
    params: CoordinationParams,
}

impl Coordination {
    pub fn new(params: CoordinationParams) -> Result<Self, GameError> {
        ensure_finite("option_a", params.option_a)?;
        ensure_finite("option_b", params.option_b)?;
        ensure_finite("mismatch", params.mismatch)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &CoordinationParams {
        &self.params
    }
}

impl GameModel for Coordination {
    fn name(&self) -> &'static str {
        "Coordination Game"
    }

    fn description(&self) -> &'static str {
        "A game where players benefit from coordinating their actions, demonstrating the importance of coordination in social situations."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([
            ("coord_a", self.params.option_a),
            ("coord_b", self.params.option_b),
            ("mismatch", self.params.mismatch),
        ])
    }
}

impl TwoActionGame for Coordination {
    fn action_labels(&self) -> ActionLabels {
        ActionLabels::symmetric(["Option A", "Option B"])
    }

    fn payoff(&self, action1: Choice, action2: Choice) -> PayoffPair {
        let p = &self.params;
        match (action1, action2) {
            (Choice::First, Choice::First) => (p.option_a, p.option_a),
            (Choice::Second, Choice::Second) => (p.option_b, p.option_b),
            _ => (p.mismatch, p.mismatch),
        }
    }
}

// ── Hawk-Dove ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HawkDoveParams {
    /// Value of the contested resource
    pub value: f64,
    /// Cost of a fight between two hawks
    pub cost: f64,
}

impl Default for HawkDoveParams {
    fn default() -> Self {
        Self { value: 4.0, cost: 6.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HawkDove {
    params: HawkDoveParams,
}

impl HawkDove {
    pub fn new(params: HawkDoveParams) -> Result<Self, GameError> {
        ensure_finite("value", params.value)?;
        ensure_finite("cost", params.cost)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &HawkDoveParams {
        &self.params
    }
}

impl GameModel for HawkDove {
    fn name(&self) -> &'static str {
        "Hawk-Dove Game"
    }

    fn description(&self) -> &'static str {
        "A classic conflict model examining aggressive vs. passive behavior, also known as Chicken Game. Players can be aggressive (Hawk) or passive (Dove), with different outcomes depending on their choices."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([("value", self.params.value), ("cost", self.params.cost)])
    }
}

impl TwoActionGame for HawkDove {
    fn action_labels(&self) -> ActionLabels {
        ActionLabels::symmetric(["Hawk", "Dove"])
    }

    fn payoff(&self, action1: Choice, action2: Choice) -> PayoffPair {
        let HawkDoveParams { value, cost } = self.params;
        match (action1, action2) {
            // Fight: split the value, both pay the cost
            (Choice::First, Choice::First) => ((value - cost) / 2.0, (value - cost) / 2.0),
            (Choice::First, Choice::Second) => (value, 0.0),
            (Choice::Second, Choice::First) => (0.0, value),
            (Choice::Second, Choice::Second) => (value / 2.0, value / 2.0),
        }
    }
}

// ── Battle of the Sexes ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleOfSexesParams {
    pub opera_man: f64,
    pub opera_woman: f64,
    pub football_man: f64,
    pub football_woman: f64,
}

impl Default for BattleOfSexesParams {
    fn default() -> Self {
        Self { opera_man: 2.0, opera_woman: 1.0, football_man: 1.0, football_woman: 2.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BattleOfSexes {
    params: BattleOfSexesParams,
}

impl BattleOfSexes {
    pub fn new(params: BattleOfSexesParams) -> Result<Self, GameError> {
        ensure_finite("opera_man", params.opera_man)?;
        ensure_finite("opera_woman", params.opera_woman)?;
        ensure_finite("football_man", params.football_man)?;
        ensure_finite("football_woman", params.football_woman)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BattleOfSexesParams {
        &self.params
    }
}

impl GameModel for BattleOfSexes {
    fn name(&self) -> &'static str {
        "Battle of Sexes"
    }

    fn description(&self) -> &'static str {
        "A coordination game representing conflict of interest between two players who need to coordinate but have different preferences for the activity they choose."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([
            ("opera_man", self.params.opera_man),
            ("opera_woman", self.params.opera_woman),
            ("football_man", self.params.football_man),
            ("football_woman", self.params.football_woman),
        ])
    }
}

impl TwoActionGame for BattleOfSexes {
    fn action_labels(&self) -> ActionLabels {
        ActionLabels::symmetric(["Opera", "Football"])
    }

    fn payoff(&self, action1: Choice, action2: Choice) -> PayoffPair {
        let p = &self.params;
        match (action1, action2) {
            (Choice::First, Choice::First) => (p.opera_man, p.opera_woman),
            (Choice::Second, Choice::Second) => (p.football_man, p.football_woman),
            _ => (0.0, 0.0),
        }
    }
}

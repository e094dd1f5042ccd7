//! Model registry and JSON game specifications

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use crate::blotto::{BlottoParams, ColonelBlotto};
use crate::error::GameError;
use crate::games::{
    BattleOfSexes, BattleOfSexesParams, Coordination, CoordinationParams, Dictator, DictatorParams, DilemmaParams,
    HawkDove, HawkDoveParams, PrisonersDilemma, PublicGoods, PublicGoodsParams, Signaling, SignalingParams, StagHunt,
    StagHuntParams, Trust, TrustParams, Ultimatum, UltimatumParams,
};
use crate::model::{GameModel, GameParameters, TwoActionGame};
use crate::repeated::{RepeatedParams, RepeatedPrisonersDilemma};

/// A validated, ready-to-play model
#[derive(Clone, Debug, PartialEq)]
pub enum Game {
    PrisonersDilemma(PrisonersDilemma),
    StagHunt(StagHunt),
    Coordination(Coordination),
    HawkDove(HawkDove),
    BattleOfSexes(BattleOfSexes),
    Dictator(Dictator),
    Trust(Trust),
    Ultimatum(Ultimatum),
    PublicGoods(PublicGoods),
    Signaling(Signaling),
    RepeatedPrisonersDilemma(RepeatedPrisonersDilemma),
    ColonelBlotto(ColonelBlotto),
}

impl Game {
    /// Every model with default parameters, keyed by display name
    pub fn catalogue() -> BTreeMap<&'static str, Game> {
        [
            Game::PrisonersDilemma(PrisonersDilemma::default()),
            Game::StagHunt(StagHunt::default()),
            Game::Coordination(Coordination::default()),
            Game::HawkDove(HawkDove::default()),
            Game::BattleOfSexes(BattleOfSexes::default()),
            Game::Dictator(Dictator::default()),
            Game::Trust(Trust::default()),
            Game::Ultimatum(Ultimatum::default()),
            Game::PublicGoods(PublicGoods::default()),
            Game::Signaling(Signaling::default()),
            Game::RepeatedPrisonersDilemma(RepeatedPrisonersDilemma::default()),
            Game::ColonelBlotto(ColonelBlotto::default()),
        ]
        .into_iter()
        .map(|game| (game.model().name(), game))
        .collect()
    }

    pub fn model(&self) -> &dyn GameModel {
        match self {
            Game::PrisonersDilemma(g) => g,
            Game::StagHunt(g) => g,
            Game::Coordination(g) => g,
            Game::HawkDove(g) => g,
            Game::BattleOfSexes(g) => g,
            Game::Dictator(g) => g,
            Game::Trust(g) => g,
            Game::Ultimatum(g) => g,
            Game::PublicGoods(g) => g,
            Game::Signaling(g) => g,
            Game::RepeatedPrisonersDilemma(g) => g,
            Game::ColonelBlotto(g) => g,
        }
    }

    /// The 2x2 view, for games played with two binary action indices
    pub fn binary(&self) -> Option<&dyn TwoActionGame> {
        match self {
            Game::PrisonersDilemma(g) => Some(g),
            Game::StagHunt(g) => Some(g),
            Game::Coordination(g) => Some(g),
            Game::HawkDove(g) => Some(g),
            Game::BattleOfSexes(g) => Some(g),
            _ => None,
        }
    }

    pub fn entry(&self) -> CatalogueEntry {
        let model = self.model();
        let binary = self.binary();
        CatalogueEntry {
            name: model.name(),
            description: model.description(),
            parameters: model.parameters(),
            actions: binary.map(|g| g.action_labels().rows),
            payoff_matrix: binary.map(|g| g.payoff_matrix().cells),
        }
    }
}

/// Serializable summary of one model
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogueEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: GameParameters,
    /// Row player's action labels for 2x2 games
    pub actions: Option<[&'static str; 2]>,
    pub payoff_matrix: Option<[[String; 2]; 2]>,
}

/// JSON description of a game: `{"game": "stag_hunt", "params": {...}}`
///
/// Missing parameter fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", content = "params", rename_all = "snake_case")]
pub enum GameSpec {
    PrisonersDilemma(DilemmaParams),
    StagHunt(StagHuntParams),
    Coordination(CoordinationParams),
    HawkDove(HawkDoveParams),
    BattleOfSexes(BattleOfSexesParams),
    Dictator(DictatorParams),
    Trust(TrustParams),
    Ultimatum(UltimatumParams),
    PublicGoods(PublicGoodsParams),
    Signaling(SignalingParams),
    RepeatedPrisonersDilemma(RepeatedParams),
    ColonelBlotto(BlottoParams),
}

impl GameSpec {
    pub fn build(self) -> Result<Game, GameError> {
        Ok(match self {
            GameSpec::PrisonersDilemma(p) => Game::PrisonersDilemma(PrisonersDilemma::new(p)?),
            GameSpec::StagHunt(p) => Game::StagHunt(StagHunt::new(p)?),
            GameSpec::Coordination(p) => Game::Coordination(Coordination::new(p)?),
            GameSpec::HawkDove(p) => Game::HawkDove(HawkDove::new(p)?),
            GameSpec::BattleOfSexes(p) => Game::BattleOfSexes(BattleOfSexes::new(p)?),
            GameSpec::Dictator(p) => Game::Dictator(Dictator::new(p)?),
            GameSpec::Trust(p) => Game::Trust(Trust::new(p)?),
            GameSpec::Ultimatum(p) => Game::Ultimatum(Ultimatum::new(p)?),
            GameSpec::PublicGoods(p) => Game::PublicGoods(PublicGoods::new(p)?),
            GameSpec::Signaling(p) => Game::Signaling(Signaling::new(p)?),
            GameSpec::RepeatedPrisonersDilemma(p) => Game::RepeatedPrisonersDilemma(RepeatedPrisonersDilemma::new(p)?),
            GameSpec::ColonelBlotto(p) => Game::ColonelBlotto(ColonelBlotto::new(p)?),
        })
    }
}

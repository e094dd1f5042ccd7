//! Game Models
//!
//! Classic game-theory models and a life-expectancy estimator.
//! This crate is compiled to:
//! - Native (for analysis tools and tests)
//! - WASM (for the browser front end, behind the `wasm` feature)

mod blotto;
mod catalogue;
mod error;
mod games;
mod life;
mod model;
mod random;
mod repeated;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use blotto::{
    Allocation, BlottoOutcome, BlottoParams, BlottoRound, BlottoStrategy, ColonelBlotto, FieldResult, MAX_BATTLEFIELDS,
    MAX_RESOURCES,
};
pub use catalogue::{CatalogueEntry, Game, GameSpec};
pub use error::{GameError, LookupError};
pub use games::*;
pub use life::{
    Condition, CountryRecord, CountryTable, EstimatorConfig, FixedNoise, Frequency, GaussianNoise, Gender,
    LifeExpectancy, LifeExpectancyCalculator, LifeProfile, NoiseSource, MAX_LIFE_EXPECTANCY,
};
pub use model::{ActionLabels, Choice, GameModel, GameParameters, Payoff, PayoffMatrix, PayoffPair, TwoActionGame};
pub use random::SeededRng;
pub use repeated::{MatchResult, MAX_ROUNDS, RepeatedParams, RepeatedPrisonersDilemma, RoundResult};
pub use strategy::{execute_strategy, Move, Strategy};

//! WASM bindings for the browser front end
//!
//! Parameters cross the boundary as JSON strings; an empty string means
//! "all defaults". Results come back as plain JS objects.

#![cfg(feature = "wasm")]

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use crate::{
    BlottoParams, BlottoStrategy, ColonelBlotto, CountryTable, Game, GameSpec, LifeExpectancyCalculator,
    LifeProfile, RepeatedParams, RepeatedPrisonersDilemma, SeededRng, Signaling, SignalingParams, Strategy, Trust,
    TrustParams, Ultimatum, UltimatumParams,
};

fn parse_params<T: DeserializeOwned + Default>(json: &str) -> Result<T, JsError> {
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid parameters: {}", e)))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn build_game(spec_json: &str) -> Result<Game, JsError> {
    let spec: GameSpec =
        serde_json::from_str(spec_json).map_err(|e| JsError::new(&format!("Invalid game spec: {}", e)))?;
    Ok(spec.build()?)
}

/// Seeded when a seed is given, OS entropy otherwise
fn with_rng<T>(seed: Option<u64>, f: impl FnOnce(&mut dyn rand::RngCore) -> T) -> T {
    match seed {
        Some(seed) => f(&mut SeededRng::new(seed)),
        None => f(&mut rand::rng()),
    }
}

/// Every model with default parameters, in name order
#[wasm_bindgen]
pub fn get_game_catalogue() -> Result<JsValue, JsError> {
    let entries: Vec<_> = Game::catalogue().values().map(Game::entry).collect();
    to_js(&entries)
}

/// Play a 2x2 game from a spec like `{"game": "stag_hunt", "params": {}}`
///
/// Returns `[payoff_1, payoff_2]`.
#[wasm_bindgen]
pub fn play_binary_game(spec_json: &str, action_1: usize, action_2: usize) -> Result<JsValue, JsError> {
    let game = build_game(spec_json)?;
    let binary = game
        .binary()
        .ok_or_else(|| JsError::new(&format!("{} is not a two-action game", game.model().name())))?;
    let (p1, p2) = binary.play(action_1, action_2)?;
    to_js(&[p1, p2])
}

/// Formatted 2x2 payoff matrix, rows then columns
#[wasm_bindgen]
pub fn get_payoff_matrix(spec_json: &str) -> Result<JsValue, JsError> {
    let game = build_game(spec_json)?;
    let binary = game
        .binary()
        .ok_or_else(|| JsError::new(&format!("{} is not a two-action game", game.model().name())))?;
    to_js(&binary.payoff_matrix().cells)
}

/// Run a repeated Prisoner's Dilemma match with full round detail
#[wasm_bindgen]
pub fn play_repeated_match(params_json: &str, strategy_1: u8, strategy_2: u8) -> Result<JsValue, JsError> {
    let game = RepeatedPrisonersDilemma::new(parse_params::<RepeatedParams>(params_json)?)?;
    to_js(&game.play_ids(strategy_1, strategy_2)?)
}

#[derive(Serialize)]
struct StrategyInfo {
    id: u8,
    name: &'static str,
    description: &'static str,
}

/// Repeated-game strategies with their ids
#[wasm_bindgen]
pub fn get_repeated_strategies() -> Result<JsValue, JsError> {
    let strategies: Vec<StrategyInfo> = Strategy::ALL
        .iter()
        .map(|s| StrategyInfo { id: s.id(), name: s.name(), description: s.describe() })
        .collect();
    to_js(&strategies)
}

/// Generate one Blotto allocation; pass a seed for a reproducible draw
#[wasm_bindgen]
pub fn generate_blotto_allocation(params_json: &str, strategy: u8, seed: Option<u64>) -> Result<JsValue, JsError> {
    let game = ColonelBlotto::new(parse_params::<BlottoParams>(params_json)?)?;
    let strategy = BlottoStrategy::try_from(strategy)?;
    let allocation = with_rng(seed, |mut rng| game.generate_allocation(strategy, &mut rng));
    to_js(&allocation)
}

/// Compare two Blotto allocations field by field
#[wasm_bindgen]
pub fn compare_blotto_allocations(params_json: &str, allocation_1: &[i64], allocation_2: &[i64]) -> Result<JsValue, JsError> {
    let game = ColonelBlotto::new(parse_params::<BlottoParams>(params_json)?)?;
    to_js(&game.compare(allocation_1, allocation_2)?)
}

#[wasm_bindgen]
pub fn play_ultimatum(params_json: &str, proposer: u8, responder: u8) -> Result<JsValue, JsError> {
    let game = Ultimatum::new(parse_params::<UltimatumParams>(params_json)?)?;
    let (p1, p2) = game.play_with_strategy_ids(proposer, responder)?;
    to_js(&[p1, p2])
}

/// Expected (sender, receiver) payoffs
#[wasm_bindgen]
pub fn play_signaling(params_json: &str, sender: u8, receiver: u8) -> Result<JsValue, JsError> {
    let game = Signaling::new(parse_params::<SignalingParams>(params_json)?)?;
    let (p1, p2) = game.play_ids(sender, receiver)?;
    to_js(&[p1, p2])
}

/// Trust game with Low/Medium/High choices (0..=2)
#[wasm_bindgen]
pub fn play_trust(params_json: &str, send_choice: usize, return_choice: usize) -> Result<JsValue, JsError> {
    let game = Trust::new(parse_params::<TrustParams>(params_json)?)?;
    let (p1, p2) = game.play_simple(send_choice, return_choice)?;
    to_js(&[p1, p2])
}

/// Estimate life expectancy against a country table given as text
///
/// # Arguments
/// * `table_text` - Whitespace-delimited table with a header row
/// * `profile_json` - JSON serialized LifeProfile
/// * `seed` - Optional seed for the noise draw
#[wasm_bindgen]
pub fn estimate_life_expectancy(table_text: &str, profile_json: &str, seed: Option<u64>) -> Result<JsValue, JsError> {
    let table = CountryTable::parse(table_text)?;
    let profile: LifeProfile =
        serde_json::from_str(profile_json).map_err(|e| JsError::new(&format!("Invalid profile: {}", e)))?;
    let calculator = LifeExpectancyCalculator::new(table);
    let estimate = with_rng(seed, |mut rng| calculator.calculate(&profile, &mut rng))?;
    to_js(&estimate)
}


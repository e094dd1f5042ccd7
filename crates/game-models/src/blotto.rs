//! Colonel Blotto: resource allocation across battlefields
//!
//! Allocation strategies produce one vector per player; the comparator
//! awards each battlefield to the strictly larger allocation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::error::GameError;
use crate::model::{GameModel, GameParameters};

/// Resources placed on each battlefield, in battlefield order
pub type Allocation = Vec<i64>;

/// Share of the stock placed on the focus battlefield, as 3/5
const FOCUS_NUMERATOR: i64 = 3;
const FOCUS_DENOMINATOR: i64 = 5;

/// Largest accepted stock; random allocation places units one at a time
pub const MAX_RESOURCES: i64 = 1_000_000;
pub const MAX_BATTLEFIELDS: usize = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlottoStrategy {
    /// Spread evenly
    Equal,
    /// 60% on the first battlefield
    FrontLoaded,
    /// 60% on the last battlefield
    BackLoaded,
    /// Each unit on a uniformly random battlefield
    Random,
}

impl BlottoStrategy {
    pub const ALL: [BlottoStrategy; 4] = [
        BlottoStrategy::Equal,
        BlottoStrategy::FrontLoaded,
        BlottoStrategy::BackLoaded,
        BlottoStrategy::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlottoStrategy::Equal => "Equal Distribution",
            BlottoStrategy::FrontLoaded => "Front-Loaded",
            BlottoStrategy::BackLoaded => "Back-Loaded",
            BlottoStrategy::Random => "Random Distribution",
        }
    }

    pub fn is_deterministic(self) -> bool {
        self != BlottoStrategy::Random
    }
}

impl TryFrom<u8> for BlottoStrategy {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(id as usize).copied().ok_or(GameError::InvalidStrategy {
            game: "Colonel Blotto Game",
            role: "player",
            id,
        })
    }
}

/// Who took a battlefield
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldResult {
    Tie,
    Player1,
    Player2,
}

impl FieldResult {
    /// 0 = tie, 1 = player 1, 2 = player 2
    pub fn code(self) -> u8 {
        match self {
            FieldResult::Tie => 0,
            FieldResult::Player1 => 1,
            FieldResult::Player2 => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlottoOutcome {
    pub wins_1: usize,
    pub wins_2: usize,
    pub fields: Vec<FieldResult>,
}

impl BlottoOutcome {
    pub fn field_codes(&self) -> Vec<u8> {
        self.fields.iter().map(|f| f.code()).collect()
    }
}

/// Allocations and result of a strategy-vs-strategy round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlottoRound {
    pub allocation_1: Allocation,
    pub allocation_2: Allocation,
    pub outcome: BlottoOutcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlottoParams {
    pub resources: i64,
    pub battlefields: usize,
}

impl Default for BlottoParams {
    fn default() -> Self {
        Self { resources: 10, battlefields: 3 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColonelBlotto {
    params: BlottoParams,
}

impl ColonelBlotto {
    pub fn new(params: BlottoParams) -> Result<Self, GameError> {
        if !(0..=MAX_RESOURCES).contains(&params.resources) {
            return Err(GameError::InvalidParameter {
                name: "resources",
                reason: format!("must lie in [0, {}], got {}", MAX_RESOURCES, params.resources),
            });
        }
        if !(1..=MAX_BATTLEFIELDS).contains(&params.battlefields) {
            return Err(GameError::InvalidParameter {
                name: "battlefields",
                reason: format!("must lie in [1, {}], got {}", MAX_BATTLEFIELDS, params.battlefields),
            });
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &BlottoParams {
        &self.params
    }

    /// Build an allocation for `strategy`.
    ///
    /// The RNG is only drawn from by `BlottoStrategy::Random`. For the
    /// loaded strategies the focus field takes floor(60%) and every
    /// leftover unit of the even split goes to the lowest-indexed
    /// non-focus fields.
    pub fn generate_allocation<R: Rng>(&self, strategy: BlottoStrategy, rng: &mut R) -> Allocation {
        let BlottoParams { resources, battlefields } = self.params;

        let allocation = match strategy {
            BlottoStrategy::Equal => spread(resources, battlefields),
            BlottoStrategy::FrontLoaded => {
                let focus = resources * FOCUS_NUMERATOR / FOCUS_DENOMINATOR;
                let mut allocation = vec![focus];
                allocation.extend(spread(resources - focus, battlefields - 1));
                allocation
            }
            BlottoStrategy::BackLoaded => {
                let focus = resources * FOCUS_NUMERATOR / FOCUS_DENOMINATOR;
                let mut allocation = spread(resources - focus, battlefields - 1);
                allocation.push(focus);
                allocation
            }
            BlottoStrategy::Random => {
                let mut allocation = vec![0; battlefields];
                for _ in 0..resources {
                    allocation[rng.random_range(0..battlefields)] += 1;
                }
                allocation
            }
        };

        log::debug!("{} allocation: {:?}", strategy.name(), allocation);
        allocation
    }

    /// Allocation for a raw strategy id (0..=3)
    pub fn generate_allocation_id<R: Rng>(&self, strategy: u8, rng: &mut R) -> Result<Allocation, GameError> {
        Ok(self.generate_allocation(BlottoStrategy::try_from(strategy)?, rng))
    }

    /// Compare two allocations battlefield by battlefield
    pub fn compare(&self, allocation_1: &[i64], allocation_2: &[i64]) -> Result<BlottoOutcome, GameError> {
        self.validate(allocation_1)?;
        self.validate(allocation_2)?;

        let fields: Vec<FieldResult> = allocation_1
            .iter()
            .zip(allocation_2)
            .map(|(a, b)| match a.cmp(b) {
                std::cmp::Ordering::Greater => FieldResult::Player1,
                std::cmp::Ordering::Less => FieldResult::Player2,
                std::cmp::Ordering::Equal => FieldResult::Tie,
            })
            .collect();

        Ok(BlottoOutcome {
            wins_1: fields.iter().filter(|f| **f == FieldResult::Player1).count(),
            wins_2: fields.iter().filter(|f| **f == FieldResult::Player2).count(),
            fields,
        })
    }

    /// Generate both allocations and compare them
    pub fn play_strategies<R: Rng>(
        &self,
        strategy_1: BlottoStrategy,
        strategy_2: BlottoStrategy,
        rng: &mut R,
    ) -> Result<BlottoRound, GameError> {
        let allocation_1 = self.generate_allocation(strategy_1, rng);
        let allocation_2 = self.generate_allocation(strategy_2, rng);
        let outcome = self.compare(&allocation_1, &allocation_2)?;
        Ok(BlottoRound { allocation_1, allocation_2, outcome })
    }

    /// Battlefield wins for two strategy ids (0..=3)
    pub fn play_simple<R: Rng>(&self, strategy_1: u8, strategy_2: u8, rng: &mut R) -> Result<(usize, usize), GameError> {
        let round = self.play_strategies(strategy_1.try_into()?, strategy_2.try_into()?, rng)?;
        Ok((round.outcome.wins_1, round.outcome.wins_2))
    }

    fn validate(&self, allocation: &[i64]) -> Result<(), GameError> {
        let BlottoParams { resources, battlefields } = self.params;
        if allocation.len() != battlefields {
            return Err(GameError::InvalidAllocation(format!(
                "expected {} battlefields, got {}",
                battlefields,
                allocation.len()
            )));
        }
        if let Some(negative) = allocation.iter().find(|a| **a < 0) {
            return Err(GameError::InvalidAllocation(format!("negative allocation {}", negative)));
        }
        let total = allocation.iter().try_fold(0i64, |acc, a| acc.checked_add(*a));
        match total {
            Some(total) if total <= resources => Ok(()),
            Some(total) => Err(GameError::InvalidAllocation(format!(
                "total {} exceeds available resources {}",
                total, resources
            ))),
            None => Err(GameError::InvalidAllocation("total overflows".to_string())),
        }
    }
}

/// Even split of `resources` over `fields`, leftovers to the front
fn spread(resources: i64, fields: usize) -> Allocation {
    if fields == 0 {
        return Vec::new();
    }
    let n = fields as i64;
    let base = resources / n;
    let remainder = (resources % n) as usize;
    (0..fields).map(|i| base + i64::from(i < remainder)).collect()
}

impl GameModel for ColonelBlotto {
    fn name(&self) -> &'static str {
        "Colonel Blotto Game"
    }

    fn description(&self) -> &'static str {
        "A classic game of strategic resource allocation across multiple battlefields. Players must distribute limited resources, with the player allocating more to a battlefield winning that field."
    }

    fn parameters(&self) -> GameParameters {
        GameParameters::from([
            ("resources", self.params.resources as f64),
            ("battlefields", self.params.battlefields as f64),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRng;

    fn game(resources: i64, battlefields: usize) -> ColonelBlotto {
        ColonelBlotto::new(BlottoParams { resources, battlefields }).unwrap()
    }

    #[test]
    fn test_equal_allocation() {
        let mut rng = SeededRng::new(1);
        assert_eq!(game(10, 3).generate_allocation(BlottoStrategy::Equal, &mut rng), vec![4, 3, 3]);
        assert_eq!(game(11, 3).generate_allocation(BlottoStrategy::Equal, &mut rng), vec![4, 4, 3]);
        assert_eq!(game(2, 4).generate_allocation(BlottoStrategy::Equal, &mut rng), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_front_loaded() {
        let mut rng = SeededRng::new(1);
        // 6 up front, 4 over two fields
        assert_eq!(game(10, 3).generate_allocation(BlottoStrategy::FrontLoaded, &mut rng), vec![6, 2, 2]);
        // 7 up front, 5 over two fields -> 3, 2
        assert_eq!(game(12, 3).generate_allocation(BlottoStrategy::FrontLoaded, &mut rng), vec![7, 3, 2]);
    }

    #[test]
    fn test_back_loaded() {
        let mut rng = SeededRng::new(1);
        assert_eq!(game(10, 3).generate_allocation(BlottoStrategy::BackLoaded, &mut rng), vec![2, 2, 6]);
        assert_eq!(game(12, 3).generate_allocation(BlottoStrategy::BackLoaded, &mut rng), vec![3, 2, 7]);
    }

    #[test]
    fn test_loaded_single_battlefield_keeps_focus_share() {
        let mut rng = SeededRng::new(1);
        assert_eq!(game(10, 1).generate_allocation(BlottoStrategy::FrontLoaded, &mut rng), vec![6]);
        assert_eq!(game(10, 1).generate_allocation(BlottoStrategy::BackLoaded, &mut rng), vec![6]);
    }

    #[test]
    fn test_random_allocation_spends_everything() {
        let blotto = game(25, 4);
        let mut rng = SeededRng::new(99);
        for _ in 0..50 {
            let allocation = blotto.generate_allocation(BlottoStrategy::Random, &mut rng);
            assert_eq!(allocation.len(), 4);
            assert_eq!(allocation.iter().sum::<i64>(), 25);
            assert!(allocation.iter().all(|a| *a >= 0));
        }
    }

    #[test]
    fn test_random_allocation_reproducible_with_seed() {
        let blotto = game(10, 3);
        let a = blotto.generate_allocation(BlottoStrategy::Random, &mut SeededRng::new(5));
        let b = blotto.generate_allocation(BlottoStrategy::Random, &mut SeededRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_compare() {
        let outcome = game(10, 3).compare(&[4, 3, 3], &[3, 4, 3]).unwrap();
        assert_eq!(outcome.wins_1, 1);
        assert_eq!(outcome.wins_2, 1);
        assert_eq!(outcome.field_codes(), vec![1, 2, 0]);
    }

    #[test]
    fn test_compare_under_budget_is_valid() {
        let outcome = game(10, 3).compare(&[0, 0, 1], &[0, 0, 0]).unwrap();
        assert_eq!(outcome.fields, vec![FieldResult::Tie, FieldResult::Tie, FieldResult::Player1]);
    }

    #[test]
    fn test_compare_validation() {
        let blotto = game(10, 3);
        assert!(matches!(blotto.compare(&[5, 5], &[3, 3, 3]), Err(GameError::InvalidAllocation(_))));
        assert!(matches!(blotto.compare(&[3, 3, 3], &[3, 3, 3, 1]), Err(GameError::InvalidAllocation(_))));
        assert!(matches!(blotto.compare(&[11, 0, 0], &[3, 3, 3]), Err(GameError::InvalidAllocation(_))));
        assert!(matches!(blotto.compare(&[3, 3, 3], &[12, -1, -1]), Err(GameError::InvalidAllocation(_))));
        assert!(matches!(
            blotto.compare(&[i64::MAX, i64::MAX, 0], &[0, 0, 0]),
            Err(GameError::InvalidAllocation(_))
        ));
    }

    #[test]
    fn test_play_strategies() {
        let mut rng = SeededRng::new(3);
        let round = game(10, 3)
            .play_strategies(BlottoStrategy::Equal, BlottoStrategy::FrontLoaded, &mut rng)
            .unwrap();
        // [4,3,3] vs [6,2,2]
        assert_eq!(round.outcome.wins_1, 2);
        assert_eq!(round.outcome.wins_2, 1);
        assert_eq!(round.allocation_2, vec![6, 2, 2]);
    }

    #[test]
    fn test_play_simple_ids() {
        let mut rng = SeededRng::new(3);
        let blotto = game(10, 3);
        assert_eq!(blotto.play_simple(1, 2, &mut rng), Ok((1, 1)));
        assert!(matches!(
            blotto.play_simple(0, 4, &mut rng),
            Err(GameError::InvalidStrategy { id: 4, .. })
        ));
    }

    #[test]
    fn test_invalid_params() {
        assert!(ColonelBlotto::new(BlottoParams { resources: 10, battlefields: 0 }).is_err());
        assert!(ColonelBlotto::new(BlottoParams { resources: -1, battlefields: 3 }).is_err());
    }

    #[test]
    fn test_size_limits() {
        let largest = ColonelBlotto::new(BlottoParams { resources: MAX_RESOURCES, battlefields: MAX_BATTLEFIELDS }).unwrap();
        let front = largest.generate_allocation(BlottoStrategy::FrontLoaded, &mut SeededRng::new(1));
        assert_eq!(front[0], MAX_RESOURCES * 3 / 5);
        assert_eq!(front.iter().sum::<i64>(), MAX_RESOURCES);

        for params in [
            BlottoParams { resources: MAX_RESOURCES + 1, battlefields: 3 },
            BlottoParams { resources: i64::MAX / 2, battlefields: 3 },
            BlottoParams { resources: 10, battlefields: MAX_BATTLEFIELDS + 1 },
        ] {
            assert!(matches!(ColonelBlotto::new(params), Err(GameError::InvalidParameter { .. })));
        }
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(BlottoStrategy::try_from(1).unwrap().name(), "Front-Loaded");
        assert!(!BlottoStrategy::Random.is_deterministic());
    }
}

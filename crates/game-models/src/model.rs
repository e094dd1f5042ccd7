//! Shared contract for every game model

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use crate::error::GameError;

/// Numeric outcome for one player
pub type Payoff = f64;

/// (player1, player2) outcome of one resolved play
pub type PayoffPair = (Payoff, Payoff);

/// Named numeric parameters a model was constructed with
pub type GameParameters = BTreeMap<&'static str, f64>;

/// One of the two actions of a binary game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    pub const ALL: [Choice; 2] = [Choice::First, Choice::Second];

    pub fn index(self) -> usize {
        match self {
            Choice::First => 0,
            Choice::Second => 1,
        }
    }

    /// Convert a caller-supplied action index
    pub fn from_index(game: &'static str, index: usize) -> Result<Self, GameError> {
        match index {
            0 => Ok(Choice::First),
            1 => Ok(Choice::Second),
            _ => Err(GameError::InvalidAction { game, index, options: 2 }),
        }
    }
}

/// Capability every model in the catalogue provides
pub trait GameModel {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn parameters(&self) -> GameParameters;

    fn summary(&self) -> &'static str {
        self.description()
    }
}

/// Row/column labels of a binary game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActionLabels {
    pub rows: [&'static str; 2],
    pub cols: [&'static str; 2],
}

impl ActionLabels {
    pub const fn symmetric(labels: [&'static str; 2]) -> Self {
        Self { rows: labels, cols: labels }
    }
}

/// Games where each player picks one of two actions
pub trait TwoActionGame: GameModel {
    fn action_labels(&self) -> ActionLabels;

    /// Closed-form payoff for one combination of choices
    fn payoff(&self, action1: Choice, action2: Choice) -> PayoffPair;

    /// Play with raw action indices (0 or 1)
    fn play(&self, action1: usize, action2: usize) -> Result<PayoffPair, GameError> {
        let a1 = Choice::from_index(self.name(), action1)?;
        let a2 = Choice::from_index(self.name(), action2)?;
        Ok(self.payoff(a1, a2))
    }

    /// 2x2 table of "p1, p2" cells, rows indexed by player 1's action.
    ///
    /// Never fails: if any cell cannot be computed the zero matrix is
    /// returned instead.
    fn payoff_matrix(&self) -> PayoffMatrix {
        match PayoffMatrix::build(|a1, a2| self.play(a1, a2)) {
            Ok(matrix) => matrix,
            Err(reason) => {
                log::warn!("payoff matrix for {} fell back to zeros: {}", self.name(), reason);
                PayoffMatrix::fallback()
            }
        }
    }
}

/// Formatted 2x2 payoff table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PayoffMatrix {
    pub cells: [[String; 2]; 2],
}

impl PayoffMatrix {
    fn build<F>(mut play: F) -> Result<Self, String>
    where
        F: FnMut(usize, usize) -> Result<PayoffPair, GameError>,
    {
        let mut cells: [[String; 2]; 2] = Default::default();
        for a1 in 0..2 {
            for a2 in 0..2 {
                let (p1, p2) = play(a1, a2).map_err(|e| e.to_string())?;
                if !p1.is_finite() || !p2.is_finite() {
                    return Err(format!("non-finite payoff ({}, {}) at ({}, {})", p1, p2, a1, a2));
                }
                cells[a1][a2] = format_cell(p1, p2);
            }
        }
        Ok(Self { cells })
    }

    /// Matrix used when the real one cannot be computed
    pub fn fallback() -> Self {
        Self { cells: std::array::from_fn(|_| std::array::from_fn(|_| format_cell(0.0, 0.0))) }
    }

    pub fn cell(&self, action1: Choice, action2: Choice) -> &str {
        &self.cells[action1.index()][action2.index()]
    }
}

impl fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "[{}] [{}]", row[0], row[1])?;
        }
        Ok(())
    }
}

fn format_cell(p1: Payoff, p2: Payoff) -> String {
    format!("{}, {}", p1, p2)
}

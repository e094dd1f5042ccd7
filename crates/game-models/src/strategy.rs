//! Repeated Prisoner's Dilemma strategies and their per-round rules

use serde::{Deserialize, Serialize};
use crate::error::GameError;
use crate::model::Choice;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Betray,
}

impl Move {
    pub fn flip(self) -> Self {
        match self {
            Move::Cooperate => Move::Betray,
            Move::Betray => Move::Cooperate,
        }
    }

    /// 0 = Cooperate, 1 = Betray
    pub fn index(self) -> u8 {
        match self {
            Move::Cooperate => 0,
            Move::Betray => 1,
        }
    }
}

impl From<Move> for Choice {
    fn from(m: Move) -> Self {
        match m {
            Move::Cooperate => Choice::First,
            Move::Betray => Choice::Second,
        }
    }
}

/// Fixed behavior rule for one player of a repeated match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Never betrays.
    AlwaysCooperate,
    /// Never cooperates.
    AlwaysBetray,
    /// Cooperate first, then copy the opponent's last move.
    TitForTat,
    /// Betray first, then copy the opponent's last move.
    SuspiciousTitForTat,
    /// Win-stay, lose-shift. Opens with a betrayal.
    Pavlov,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::AlwaysCooperate,
        Strategy::AlwaysBetray,
        Strategy::TitForTat,
        Strategy::SuspiciousTitForTat,
        Strategy::Pavlov,
    ];

    pub fn id(self) -> u8 {
        match self {
            Strategy::AlwaysCooperate => 0,
            Strategy::AlwaysBetray => 1,
            Strategy::TitForTat => 2,
            Strategy::SuspiciousTitForTat => 3,
            Strategy::Pavlov => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::AlwaysCooperate => "Always Cooperate",
            Strategy::AlwaysBetray => "Always Betray",
            Strategy::TitForTat => "Tit-for-Tat",
            Strategy::SuspiciousTitForTat => "Suspicious Tit-for-Tat",
            Strategy::Pavlov => "Pavlov (Win-Stay, Lose-Shift)",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Strategy::AlwaysCooperate => "Never betrays. Always cooperates.",
            Strategy::AlwaysBetray => "Never cooperates. Always betrays.",
            Strategy::TitForTat => "Copies opponent's last move. Starts by cooperating.",
            Strategy::SuspiciousTitForTat => "Like Tit-for-Tat, but starts by betraying.",
            Strategy::Pavlov => "Repeats its move if the opponent cooperated, switches otherwise. Starts by betraying.",
        }
    }
}

impl TryFrom<u8> for Strategy {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(id as usize).copied().ok_or(GameError::InvalidStrategy {
            game: "Repeated Prisoner's Dilemma",
            role: "player",
            id,
        })
    }
}

/// Execute a strategy for one round
///
/// # Arguments
/// * `strategy` - The strategy to execute
/// * `opponent_history` - Opponent's past moves
/// * `my_history` - Our past moves
///
/// Both histories have the same length: the number of rounds played.
pub fn execute_strategy(strategy: Strategy, opponent_history: &[Move], my_history: &[Move]) -> Move {
    match strategy {
        Strategy::AlwaysCooperate => Move::Cooperate,
        Strategy::AlwaysBetray => Move::Betray,
        Strategy::TitForTat => execute_mirror(opponent_history, Move::Cooperate),
        Strategy::SuspiciousTitForTat => execute_mirror(opponent_history, Move::Betray),
        Strategy::Pavlov => execute_pavlov(opponent_history, my_history),
    }
}

/// Copy the opponent's last move, `opening` on the first round
fn execute_mirror(opponent_history: &[Move], opening: Move) -> Move {
    opponent_history.last().copied().unwrap_or(opening)
}

/// Pavlov: Win-stay, lose-shift
/// - Opponent cooperated last round: repeat our move
/// - Opponent betrayed last round: switch
fn execute_pavlov(opponent_history: &[Move], my_history: &[Move]) -> Move {
    match (my_history.last(), opponent_history.last()) {
        (Some(mine), Some(Move::Cooperate)) => *mine,
        (Some(mine), Some(Move::Betray)) => mine.flip(),
        _ => Move::Betray,
    }
}

//! Moves, verdicts and the opponent that picks moves

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::random::SeededRng;

/// A move in Rock-Paper-Scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in canonical order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// True when this move wins against `other`.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Paper, Move::Rock) | (Move::Scissors, Move::Paper)
        )
    }

    /// Lowercase wire tag
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Label shown on the move buttons
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "Piedra",
            Move::Paper => "Papel",
            Move::Scissors => "Tijera",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            other => Err(EngineError::InvalidMove(other.to_string())),
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = EngineError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidMove(index.to_string()))
    }
}

/// Outcome of a round, from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Win,
    Lose,
    Draw,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Win => "Ganaste",
            Verdict::Lose => "Perdiste",
            Verdict::Draw => "Empate",
        }
    }
}

/// Source of opponent moves.
///
/// The engine asks for a move without revealing the player's choice or
/// any past round, so implementations cannot adapt to the player.
pub trait Opponent {
    fn choose(&mut self) -> Move;
}

/// Opponent that picks each move with probability 1/3
#[derive(Clone, Debug)]
pub struct UniformOpponent {
    rng: SeededRng,
}

impl UniformOpponent {
    pub fn new(rng: SeededRng) -> Self {
        Self { rng }
    }
}

impl Opponent for UniformOpponent {
    fn choose(&mut self) -> Move {
        Move::ALL[self.rng.next_below(Move::ALL.len() as u32) as usize]
    }
}

//! Match Engine for Rock-Paper-Scissors
//!
//! A human picks a move, an automated opponent picks one independently and
//! uniformly at random, and the pair is judged from the player's side.
//! The engine keeps the running score and a bounded most-recent-first
//! history, and models the opponent's "thinking" as a deferred,
//! cancellable resolution.
//! This crate is compiled to:
//! - Native (for tests and embedding hosts)
//! - WASM (for the browser front end)

mod config;
mod engine;
mod error;
mod moves;
mod random;
mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::EngineConfig;
pub use engine::{MatchEngine, Pending, Resolution, Ticket};
pub use error::EngineError;
pub use moves::{Move, Opponent, UniformOpponent, Verdict};
pub use random::SeededRng;
pub use session::{status_line, Phase, Round, RoundId, Score, Session};

/// Outcome table, player first
pub fn judge(player: Move, opponent: Move) -> Verdict {
    match (player, opponent) {
        (Move::Rock, Move::Rock) => Verdict::Draw,
        (Move::Paper, Move::Paper) => Verdict::Draw,
        (Move::Scissors, Move::Scissors) => Verdict::Draw,
        (Move::Rock, Move::Scissors) => Verdict::Win,
        (Move::Paper, Move::Rock) => Verdict::Win,
        (Move::Scissors, Move::Paper) => Verdict::Win,
        (Move::Rock, Move::Paper) => Verdict::Lose,
        (Move::Paper, Move::Scissors) => Verdict::Lose,
        (Move::Scissors, Move::Rock) => Verdict::Lose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_table() {
        use Move::*;
        use Verdict::*;

        let table = [
            (Rock, Rock, Draw),
            (Rock, Paper, Lose),
            (Rock, Scissors, Win),
            (Paper, Rock, Win),
            (Paper, Paper, Draw),
            (Paper, Scissors, Lose),
            (Scissors, Rock, Lose),
            (Scissors, Paper, Win),
            (Scissors, Scissors, Draw),
        ];
        for (p, c, expected) in table {
            assert_eq!(judge(p, c), expected, "{} vs {}", p, c);
        }
    }

    #[test]
    fn test_outcome_counts() {
        let verdicts: Vec<_> = Move::ALL
            .iter()
            .flat_map(|p| Move::ALL.iter().map(move |c| judge(*p, *c)))
            .collect();
        assert_eq!(verdicts.iter().filter(|v| **v == Verdict::Win).count(), 3);
        assert_eq!(verdicts.iter().filter(|v| **v == Verdict::Lose).count(), 3);
        assert_eq!(verdicts.iter().filter(|v| **v == Verdict::Draw).count(), 3);
    }

    #[test]
    fn test_outcome_antisymmetric() {
        for p in Move::ALL {
            for c in Move::ALL {
                let mirrored = match judge(c, p) {
                    Verdict::Win => Verdict::Lose,
                    Verdict::Lose => Verdict::Win,
                    Verdict::Draw => Verdict::Draw,
                };
                assert_eq!(judge(p, c), mirrored);
                assert_eq!(judge(p, c) == Verdict::Win, p.beats(c));
            }
        }
    }
}

//! Observable session state: score, bounded history, current phase

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::moves::{Move, Verdict};

/// Identifier for a recorded round, unique for the life of an engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(pub u64);

/// A completed round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub verdict: Verdict,
    pub player: Move,
    pub opponent: Move,
}

/// Running totals. Every resolved round bumps exactly one counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player_wins: u64,
    pub opponent_wins: u64,
    pub draws: u64,
}

impl Score {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win => self.player_wins = self.player_wins.saturating_add(1),
            Verdict::Lose => self.opponent_wins = self.opponent_wins.saturating_add(1),
            Verdict::Draw => self.draws = self.draws.saturating_add(1),
        }
    }

    /// Rounds resolved since the last reset
    pub fn total(&self) -> u64 {
        self.player_wins
            .saturating_add(self.opponent_wins)
            .saturating_add(self.draws)
    }
}

/// Where the engine is in its round cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No round in flight and nothing revealed
    #[default]
    Idle,
    /// Player has chosen; opponent is "thinking"
    Resolving,
    /// Both moves and the verdict are visible
    Resolved,
}

/// Snapshot read by the presentation layer after every transition
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
    pub player_move: Option<Move>,
    pub opponent_move: Option<Move>,
    pub verdict: Option<Verdict>,
    pub score: Score,
    /// Most recent first
    pub history: VecDeque<Round>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Resolving` with a fresh player move; stale reveal is cleared.
    pub(crate) fn begin(&mut self, player: Move) {
        self.phase = Phase::Resolving;
        self.player_move = Some(player);
        self.opponent_move = None;
        self.verdict = None;
    }

    /// Reveal a round, count it and log it. Returns how many old rounds were evicted.
    pub(crate) fn settle(&mut self, round: Round, history_limit: usize) -> usize {
        self.phase = Phase::Resolved;
        self.player_move = Some(round.player);
        self.opponent_move = Some(round.opponent);
        self.verdict = Some(round.verdict);
        self.score.record(round.verdict);

        self.history.push_front(round);
        let evicted = self.history.len().saturating_sub(history_limit);
        self.history.truncate(history_limit);
        evicted
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One-line status for the result chip
pub fn status_line(session: &Session) -> &'static str {
    match (session.phase, session.verdict) {
        (Phase::Resolving, _) => "La CPU está eligiendo...",
        (Phase::Resolved, Some(verdict)) => verdict.label(),
        _ => "Elige tu jugada",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(id: u64, verdict: Verdict) -> Round {
        Round { id: RoundId(id), verdict, player: Move::Rock, opponent: Move::Rock }
    }

    #[test]
    fn test_score_record() {
        let mut score = Score::default();
        score.record(Verdict::Win);
        score.record(Verdict::Win);
        score.record(Verdict::Lose);
        score.record(Verdict::Draw);
        assert_eq!(score, Score { player_wins: 2, opponent_wins: 1, draws: 1 });
        assert_eq!(score.total(), 4);
    }

    #[test]
    fn test_score_past_u32_range() {
        let edge = u32::MAX as u64;
        let mut score = Score { player_wins: edge, opponent_wins: edge, draws: 0 };
        score.record(Verdict::Win);
        assert_eq!(score.player_wins, u32::MAX as u64 + 1);
        assert_eq!(score.total(), 2 * u32::MAX as u64 + 1);

        let mut full = Score { player_wins: u64::MAX, opponent_wins: 1, draws: 0 };
        full.record(Verdict::Win);
        assert_eq!(full.player_wins, u64::MAX);
        assert_eq!(full.total(), u64::MAX);
    }

    #[test]
    fn test_begin_clears_previous_reveal() {
        let mut session = Session::new();
        session.begin(Move::Paper);
        session.settle(round(0, Verdict::Draw), 6);
        assert_eq!(session.opponent_move, Some(Move::Rock));

        session.begin(Move::Scissors);
        assert_eq!(session.phase, Phase::Resolving);
        assert_eq!(session.player_move, Some(Move::Scissors));
        assert_eq!(session.opponent_move, None);
        assert_eq!(session.verdict, None);
        // history and score survive into the next round
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.score.draws, 1);
    }

    #[test]
    fn test_settle_evicts_oldest() {
        let mut session = Session::new();
        for id in 0..3 {
            assert_eq!(session.settle(round(id, Verdict::Win), 3), 0);
        }
        assert_eq!(session.settle(round(3, Verdict::Lose), 3), 1);

        let ids: Vec<_> = session.history.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(session.history.front().map(|r| r.id), Some(RoundId(3)));
        // eviction drops the log entry, never the count
        assert_eq!(session.score.total(), 4);
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.begin(Move::Rock);
        session.settle(round(0, Verdict::Win), 6);
        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_status_line() {
        let mut session = Session::new();
        assert_eq!(status_line(&session), "Elige tu jugada");
        session.begin(Move::Rock);
        assert_eq!(status_line(&session), "La CPU está eligiendo...");
        session.settle(round(0, Verdict::Lose), 6);
        assert_eq!(status_line(&session), "Perdiste");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut session = Session::new();
        session.begin(Move::Rock);
        session.settle(
            Round {
                id: RoundId(7),
                verdict: Verdict::Win,
                player: Move::Rock,
                opponent: Move::Scissors,
            },
            6,
        );
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["phase"], "resolved");
        assert_eq!(value["verdict"], "win");
        assert_eq!(value["score"]["player_wins"], 1);
        assert_eq!(value["history"][0]["id"], 7);
        assert_eq!(value["history"][0]["opponent"], "scissors");
    }
}

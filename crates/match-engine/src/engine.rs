//! Round state machine
//!
//! `Idle -> Resolving -> Resolved`, and from `Resolved` straight into a new
//! `Resolving` on the next submission. The opponent's "thinking" is a
//! deferred resolution: [`MatchEngine::submit_move`] hands back a
//! [`Pending`] with the delay, the host schedules a callback, and the
//! callback calls [`MatchEngine::resolve`] with the ticket it was given.
//! At most one ticket is outstanding; a reset invalidates it.

use std::time::Duration;

use log::{debug, info, trace};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::judge;
use crate::moves::{Move, Opponent, UniformOpponent};
use crate::random::SeededRng;
use crate::session::{Phase, Round, RoundId, Score, Session};

const OPPONENT_STREAM: u8 = 0;
const DELAY_STREAM: u8 = 1;

/// Handle for one scheduled resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticket(pub u64);

/// A round in flight: resolve it with `ticket` once `delay` has elapsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    pub ticket: Ticket,
    pub delay: Duration,
}

/// What happened when a scheduled resolution fired
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The round was recorded
    Applied(Round),
    /// The ticket no longer matches the round in flight; nothing changed
    Stale,
}

/// The round waiting on its scheduled resolution
#[derive(Clone, Copy, Debug)]
struct InFlight {
    ticket: Ticket,
    player: Move,
}

/// Single-player match against an automated opponent
#[derive(Debug)]
pub struct MatchEngine<O = UniformOpponent> {
    config: EngineConfig,
    session: Session,
    opponent: O,
    delay_rng: SeededRng,
    /// Bumped on every accepted submission and on reset
    generation: u64,
    outstanding: Option<InFlight>,
    /// Never rewound, not even by reset
    next_round_id: u64,
}

impl MatchEngine<UniformOpponent> {
    /// Engine with a uniformly random opponent
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, EngineError> {
        let root = SeededRng::new(seed);
        let opponent = UniformOpponent::new(root.fork(OPPONENT_STREAM));
        Self::with_opponent(config, seed, opponent)
    }
}

impl<O: Opponent> MatchEngine<O> {
    /// Engine with a caller-supplied opponent. `seed` drives the delay draws.
    pub fn with_opponent(
        config: EngineConfig,
        seed: u64,
        opponent: O,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            session: Session::new(),
            opponent,
            delay_rng: SeededRng::new(seed).fork(DELAY_STREAM),
            generation: 0,
            outstanding: None,
            next_round_id: 0,
        })
    }

    /// Start a round with the player's move.
    ///
    /// Returns `None` without touching anything while a round is already
    /// resolving.
    pub fn submit_move(&mut self, player: Move) -> Option<Pending> {
        if self.session.phase == Phase::Resolving {
            debug!("ignoring {} while round {:?} is resolving", player, self.outstanding());
            return None;
        }

        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.outstanding = Some(InFlight { ticket, player });
        self.session.begin(player);

        let delay = self.config.draw_delay(&mut self.delay_rng);
        debug!("player chose {}, resolving {:?} in {} ms", player, ticket, delay.as_millis());
        Some(Pending { ticket, delay })
    }

    /// Finish the round issued under `ticket`.
    pub fn resolve(&mut self, ticket: Ticket) -> Resolution {
        let player = match self.outstanding {
            Some(in_flight) if in_flight.ticket == ticket => in_flight.player,
            _ => {
                debug!(
                    "discarding stale resolution {:?} (outstanding {:?})",
                    ticket,
                    self.outstanding()
                );
                return Resolution::Stale;
            }
        };
        self.outstanding = None;

        let opponent = self.opponent.choose();
        let verdict = judge(player, opponent);
        let round = Round { id: RoundId(self.next_round_id), verdict, player, opponent };
        self.next_round_id += 1;

        let evicted = self.session.settle(round.clone(), self.config.history_limit);
        if evicted > 0 {
            trace!("history full, evicted {} round(s)", evicted);
        }
        debug!(
            "round {} resolved: {} vs {} -> {:?}",
            round.id.0, player, opponent, verdict
        );
        Resolution::Applied(round)
    }

    /// Clear score, history and any round in flight.
    pub fn reset(&mut self) {
        if let Some(in_flight) = self.outstanding.take() {
            debug!("reset cancels pending {:?}", in_flight.ticket);
        }
        self.generation += 1;
        self.session.clear();
        info!("session reset");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn score(&self) -> Score {
        self.session.score
    }

    /// Recorded rounds, most recent first
    pub fn history(&self) -> impl Iterator<Item = &Round> {
        self.session.history.iter()
    }

    /// Ticket of the round currently resolving
    pub fn outstanding(&self) -> Option<Ticket> {
        self.outstanding.map(|in_flight| in_flight.ticket)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

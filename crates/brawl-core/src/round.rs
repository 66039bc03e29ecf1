//! Round controller: termination, knockout and victory sequence.
//!
//! A match moves through three phases:
//!
//! ```text
//! Active ──(a fighter reaches 0 hp)──▶ RoundEnded ──(game-over delay)──▶ GameOver
//! ```
//!
//! The transition out of `Active` happens at most once per match. Fighters
//! are checked in [`Side::BOTH`] order, so on a simultaneous knockout the
//! player is the one declared beaten. During `RoundEnded` the match keeps
//! ticking: particles animate and the survivor may still move, while the
//! loser stays frozen. `GameOver` halts the match.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::TimingConfig;
use crate::fighter::{Fighter, FighterKind, Side};
use crate::particles::{Color, ParticlePool};
use crate::resolver::AudioCue;
use crate::schedule::{Schedule, ScheduledEvent};

/// Knockout explosion layers, emitted from the loser's centre.
const EXPLOSION: [(Color, usize); 4] = [
    (Color::FIRE, 40),
    (Color::EMBER, 40),
    (Color::FLASH, 20),
    (Color::SMOKE, 30),
];

/// Lifecycle phase of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Both fighters alive; the round is being fought
    #[default]
    Active,
    /// A fighter was knocked out; waiting out the game-over delay
    RoundEnded,
    /// The match is over and no longer ticks
    GameOver,
}

/// Final outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    /// Side that won
    pub winner: Side,
    /// Character that won
    pub winner_kind: FighterKind,
    /// Tick on which the match ended
    pub final_tick: u64,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} WINS!", self.winner_kind)
    }
}

/// Collaborator hooks invoked by the match.
///
/// Both methods default to doing nothing, so a listener only implements what
/// it cares about.
pub trait MatchListener: Send {
    /// A sound should be played. Called in event order, once per event.
    fn on_cue(&mut self, _cue: AudioCue) {}

    /// The match is over. Called exactly once per match.
    fn on_game_over(&mut self, _result: &MatchResult) {}
}

/// Tracks the phase and winner of a match.
#[derive(Debug, Clone)]
pub struct RoundController {
    phase: Phase,
    winner: Option<Side>,
    game_over_delay: u64,
}

impl RoundController {
    /// Creates a controller in the `Active` phase.
    #[must_use]
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            phase: Phase::Active,
            winner: None,
            game_over_delay: timing.ticks_for_ms(timing.game_over_delay_ms),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winning side, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Ticks between the knockout and game over.
    #[must_use]
    pub fn game_over_delay(&self) -> u64 {
        self.game_over_delay
    }

    /// Checks both fighters for a knockout.
    ///
    /// On the first knockout of the match this knocks the loser out, emits the
    /// explosion, records the winner and schedules the end of the match.
    /// Returns the winner if this call ended the round.
    pub fn evaluate(
        &mut self,
        fighters: &mut [Fighter; 2],
        particles: &mut ParticlePool,
        schedule: &mut Schedule,
        tick: u64,
    ) -> Option<Side> {
        if self.phase != Phase::Active {
            return None;
        }

        let loser = Side::BOTH
            .into_iter()
            .find(|side| fighters[side.index()].vitals.is_depleted())?;
        let winner = loser.other();

        let fighter = &mut fighters[loser.index()];
        fighter.knock_out();
        let centre = fighter.body.center();
        for (color, count) in EXPLOSION {
            particles.spawn_burst(centre, color, count);
        }

        self.phase = Phase::RoundEnded;
        self.winner = Some(winner);
        schedule.push(tick.saturating_add(self.game_over_delay), ScheduledEvent::EndGame);

        info!(
            tick,
            %winner,
            kind = %fighters[winner.index()].kind,
            "round ended"
        );
        Some(winner)
    }

    /// Moves a finished round to `GameOver`. Returns `false` if the round
    /// had not ended.
    pub fn finish(&mut self) -> bool {
        if self.phase == Phase::RoundEnded {
            self.phase = Phase::GameOver;
            true
        } else {
            false
        }
    }
}

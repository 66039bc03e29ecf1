//! Event log for audio cues and match telemetry.
//!
//! The `EventLog` records what happened during each tick. Unlike the other
//! resolvers it never mutates fighters; it only keeps the record that the
//! host drains with `take_events()`, typically once per rendered frame.

use serde::{Deserialize, Serialize};

use crate::fighter::Side;
use crate::round::MatchResult;

/// Fire-and-forget sound requests for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    /// A fighter left the ground
    Jump,
    /// An attack connected on an open defender
    Hit,
    /// An attack connected on a raised guard
    Block,
    /// A fighter was knocked out
    Explosion,
}

/// Something observable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A fighter jumped
    Jumped {
        /// Who jumped
        side: Side,
    },
    /// An attack connected on an open defender
    Hit {
        /// Who attacked
        attacker: Side,
        /// Health removed
        damage: f32,
    },
    /// An attack connected on a raised guard
    Blocked {
        /// Who attacked
        attacker: Side,
    },
    /// An accepted attack missed
    Whiffed {
        /// Who attacked
        attacker: Side,
    },
    /// A fighter was knocked out and the winner decided
    RoundEnded {
        /// Surviving side
        winner: Side,
    },
    /// The post-knockout delay elapsed; the match is over
    GameOver(MatchResult),
}

impl MatchEvent {
    /// The audio cue this event should trigger, if any.
    #[must_use]
    pub fn cue(&self) -> Option<AudioCue> {
        match self {
            Self::Jumped { .. } => Some(AudioCue::Jump),
            Self::Hit { .. } => Some(AudioCue::Hit),
            Self::Blocked { .. } => Some(AudioCue::Block),
            Self::RoundEnded { .. } => Some(AudioCue::Explosion),
            Self::Whiffed { .. } | Self::GameOver(_) => None,
        }
    }
}

/// A [`MatchEvent`] stamped with the tick it happened on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Tick the event occurred on
    pub tick: u64,
    /// What happened
    pub event: MatchEvent,
}

/// Append-only log of match events, drained by the host.
///
/// # Example
///
/// ```
/// use brawl_core::fighter::Side;
/// use brawl_core::resolver::{AudioCue, EventLog, MatchEvent};
///
/// let mut log = EventLog::new();
/// log.record(3, MatchEvent::Jumped { side: Side::Player });
///
/// let events = log.take_events();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].event.cue(), Some(AudioCue::Jump));
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<EventRecord>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn record(&mut self, tick: u64, event: MatchEvent) {
        self.events.push(EventRecord { tick, event });
    }

    /// Drains and returns all recorded events in the order they occurred.
    pub fn take_events(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Number of events currently in the log.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events without returning them.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::FighterKind;

    mod cue_tests {
        use super::*;

        #[test]
        fn combat_events_map_to_cues() {
            let cases = [
                (MatchEvent::Jumped { side: Side::Opponent }, Some(AudioCue::Jump)),
                (
                    MatchEvent::Hit {
                        attacker: Side::Player,
                        damage: 10.0,
                    },
                    Some(AudioCue::Hit),
                ),
                (MatchEvent::Blocked { attacker: Side::Player }, Some(AudioCue::Block)),
                (MatchEvent::Whiffed { attacker: Side::Player }, None),
                (
                    MatchEvent::RoundEnded { winner: Side::Player },
                    Some(AudioCue::Explosion),
                ),
            ];
            for (event, cue) in cases {
                assert_eq!(event.cue(), cue, "{event:?}");
            }
        }

        #[test]
        fn game_over_is_silent() {
            let result = MatchResult {
                winner: Side::Opponent,
                winner_kind: FighterKind::Bear,
                final_tick: 400,
            };
            assert_eq!(MatchEvent::GameOver(result).cue(), None);
        }
    }

    mod log_tests {
        use super::*;

        #[test]
        fn take_events_preserves_order_and_clears() {
            let mut log = EventLog::new();
            log.record(1, MatchEvent::Jumped { side: Side::Player });
            log.record(2, MatchEvent::Whiffed { attacker: Side::Opponent });
            assert_eq!(log.event_count(), 2);

            let events = log.take_events();
            assert_eq!(events[0].tick, 1);
            assert_eq!(events[1].event, MatchEvent::Whiffed { attacker: Side::Opponent });
            assert!(log.is_empty());
            assert!(log.take_events().is_empty());
        }

        #[test]
        fn clear_discards_events() {
            let mut log = EventLog::new();
            log.record(5, MatchEvent::RoundEnded { winner: Side::Player });
            log.clear();
            assert!(log.events().is_empty());
        }

        #[test]
        fn records_serialize() {
            let mut log = EventLog::new();
            log.record(9, MatchEvent::Blocked { attacker: Side::Player });
            let json = serde_json::to_string(log.events()).unwrap();
            let restored: Vec<EventRecord> = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, log.events());
        }
    }
}

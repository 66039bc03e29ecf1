//! Deferred match operations keyed by tick.
//!
//! Anything that must happen "later" (lowering a reactive guard, ending the
//! match after the knockout pause) is pushed here instead of being captured
//! in a timer callback. The match drains the due entries at the top of each
//! tick; cancelling is removal from the queue, so a stopped match simply has
//! nothing left to run.

use std::collections::BTreeMap;

use crate::fighter::Side;

/// An operation deferred to a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledEvent {
    /// Lower the guard of `Side` if it is still alive
    ReleaseGuard(Side),
    /// Move the match to game over
    EndGame,
}

/// Tick-ordered queue of deferred operations.
///
/// Entries due on the same tick run in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    queue: BTreeMap<(u64, u64), ScheduledEvent>,
    next_seq: u64,
}

impl Schedule {
    /// Creates an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to run at `tick`.
    pub fn push(&mut self, tick: u64, event: ScheduledEvent) {
        self.queue.insert((tick, self.next_seq), event);
        self.next_seq += 1;
    }

    /// Removes every pending entry equal to `event`. Returns how many were removed.
    pub fn cancel(&mut self, event: ScheduledEvent) -> usize {
        let before = self.queue.len();
        self.queue.retain(|_, pending| *pending != event);
        before - self.queue.len()
    }

    /// Removes and returns every entry due at or before `tick`, in order.
    pub fn drain_due(&mut self, tick: u64) -> Vec<ScheduledEvent> {
        let later = self.queue.split_off(&(tick.saturating_add(1), 0));
        let due = std::mem::replace(&mut self.queue, later);
        due.into_values().collect()
    }

    /// Drops every pending entry.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Tick of the earliest pending entry.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(tick, _)| tick)
    }

    /// Returns `true` if an entry equal to `event` is pending.
    #[must_use]
    pub fn contains(&self, event: ScheduledEvent) -> bool {
        self.queue.values().any(|pending| *pending == event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_only_due_entries_in_order() {
        let mut schedule = Schedule::new();
        schedule.push(10, ScheduledEvent::EndGame);
        schedule.push(5, ScheduledEvent::ReleaseGuard(Side::Opponent));
        schedule.push(5, ScheduledEvent::ReleaseGuard(Side::Player));

        assert!(schedule.drain_due(4).is_empty());
        assert_eq!(schedule.next_due(), Some(5));

        assert_eq!(
            schedule.drain_due(9),
            vec![
                ScheduledEvent::ReleaseGuard(Side::Opponent),
                ScheduledEvent::ReleaseGuard(Side::Player),
            ]
        );
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.drain_due(10), vec![ScheduledEvent::EndGame]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn cancel_removes_matching_entries_only() {
        let mut schedule = Schedule::new();
        schedule.push(3, ScheduledEvent::ReleaseGuard(Side::Opponent));
        schedule.push(7, ScheduledEvent::ReleaseGuard(Side::Opponent));
        schedule.push(7, ScheduledEvent::EndGame);

        assert_eq!(schedule.cancel(ScheduledEvent::ReleaseGuard(Side::Opponent)), 2);
        assert!(!schedule.contains(ScheduledEvent::ReleaseGuard(Side::Opponent)));
        assert!(schedule.contains(ScheduledEvent::EndGame));
    }

    #[test]
    fn clear_cancels_everything() {
        let mut schedule = Schedule::new();
        schedule.push(1, ScheduledEvent::EndGame);
        schedule.clear();
        assert!(schedule.drain_due(u64::MAX - 1).is_empty());
    }
}

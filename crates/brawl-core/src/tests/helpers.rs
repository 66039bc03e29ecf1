//! Test helpers for setting up matches and observing them.
//!
//! This module provides scripted decision sources, a recording listener and
//! setup functions that make scenario tests short and consistent.

use std::sync::{Arc, Mutex};

use crate::decision::{DecisionContext, DecisionSource};
use crate::fighter::{Facing, FighterKind, Side};
use crate::intent::Intent;
use crate::resolver::{AudioCue, MatchEvent};
use crate::round::{MatchListener, MatchResult};
use crate::simulation::Match;

// =============================================================================
// Decision Sources
// =============================================================================

/// A source that never does anything.
pub struct IdleSource;

impl DecisionSource for IdleSource {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn decide(&mut self, _ctx: &DecisionContext) -> Intent {
        Intent::idle()
    }
}

/// A source driven by a closure, counting how often it was consulted.
pub struct ScriptedSource<F> {
    script: F,
    calls: Arc<Mutex<Vec<u64>>>,
}

impl<F> ScriptedSource<F>
where
    F: FnMut(&DecisionContext) -> Intent + Send,
{
    /// Wraps `script`. The returned log lists every tick the source decided on.
    pub fn new(script: F) -> (Self, Arc<Mutex<Vec<u64>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                script,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl<F> DecisionSource for ScriptedSource<F>
where
    F: FnMut(&DecisionContext) -> Intent + Send,
{
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn decide(&mut self, ctx: &DecisionContext) -> Intent {
        self.calls.lock().unwrap().push(ctx.tick);
        (self.script)(ctx)
    }
}

/// Installs a scripted source on `side` and returns its call log.
pub fn script<F>(brawl: &mut Match, side: Side, script: F) -> Arc<Mutex<Vec<u64>>>
where
    F: FnMut(&DecisionContext) -> Intent + Send + 'static,
{
    let (source, calls) = ScriptedSource::new(script);
    brawl.set_source(side, Box::new(source));
    calls
}

// =============================================================================
// Listener
// =============================================================================

/// Everything a [`RecordingListener`] has been told.
#[derive(Debug, Default)]
pub struct Recording {
    /// Audio cues in the order they were requested
    pub cues: Vec<AudioCue>,
    /// Results passed to `on_game_over`
    pub results: Vec<MatchResult>,
}

/// Listener that records into a shared [`Recording`].
pub struct RecordingListener(Arc<Mutex<Recording>>);

impl MatchListener for RecordingListener {
    fn on_cue(&mut self, cue: AudioCue) {
        self.0.lock().unwrap().cues.push(cue);
    }

    fn on_game_over(&mut self, result: &MatchResult) {
        self.0.lock().unwrap().results.push(*result);
    }
}

/// Installs a recording listener and returns the shared recording.
pub fn record(brawl: &mut Match) -> Arc<Mutex<Recording>> {
    let recording = Arc::new(Mutex::new(Recording::default()));
    brawl.set_listener(RecordingListener(Arc::clone(&recording)));
    recording
}

// =============================================================================
// Setup
// =============================================================================

/// A Panda-vs-Bear match in which neither fighter acts on its own.
pub fn quiet_match() -> Match {
    let mut brawl = Match::new(FighterKind::Panda);
    brawl.set_source(Side::Player, Box::new(IdleSource));
    brawl.set_source(Side::Opponent, Box::new(IdleSource));
    brawl
}

/// Moves the opponent to `dx` units right of the player, both facing each other.
pub fn face_off(brawl: &mut Match, dx: f32) {
    let player_x = brawl.fighter(Side::Player).position().x;
    let opponent = brawl.fighter_mut(Side::Opponent);
    opponent.body.position.x = player_x + dx;
    opponent.body.facing = Facing::toward(-dx);
    brawl.fighter_mut(Side::Player).body.facing = Facing::toward(dx);
}

/// Runs `ticks` steps.
pub fn run_ticks(brawl: &mut Match, ticks: u64) {
    for _ in 0..ticks {
        brawl.step();
    }
}

/// Counts drained events matching `predicate`.
pub fn count_events(brawl: &mut Match, predicate: impl Fn(&MatchEvent) -> bool) -> usize {
    brawl
        .take_events()
        .iter()
        .filter(|record| predicate(&record.event))
        .count()
}

/// Attacks on the first tick only.
pub fn attack_once(ctx: &DecisionContext) -> Intent {
    if ctx.tick == 1 {
        Intent::idle().with_attack()
    } else {
        Intent::idle()
    }
}

//! The match: one aggregate owning all state of a fight.
//!
//! `Match::step` runs one fixed-length tick in a deterministic order:
//!
//! 1. **SCHEDULE**: Run deferred operations that have come due (guard
//!    releases, the end of the match)
//! 2. **DECIDE**: For each fighter that can act, in [`Side::BOTH`] order, ask
//!    its decision source for an intent and apply it. An accepted attack is
//!    resolved immediately against the other fighter
//! 3. **INTEGRATE**: Advance physics for every living fighter
//! 4. **PARTICLES**: Advance and cull particles
//! 5. **ROUND**: Check for a knockout
//!
//! Hosts that render at their own rate call [`Match::advance`] with the frame
//! time instead, which runs zero or more ticks through a fixed-step
//! accumulator.
//!
//! # Determinism
//!
//! Given the same configuration (including the seed), the same decision
//! sources and the same control inputs on the same ticks, a match produces
//! identical results. Every random draw comes from ChaCha streams derived
//! from the configured seed.
//!
//! # Example
//!
//! ```
//! use brawl_core::fighter::{FighterKind, Side};
//! use brawl_core::simulation::Match;
//!
//! let mut brawl = Match::new(FighterKind::Panda);
//!
//! for _ in 0..10 {
//!     brawl.step();
//! }
//!
//! assert_eq!(brawl.tick(), 10);
//! assert_eq!(brawl.health(Side::Player), 100.0);
//! ```

use std::fmt;
use std::time::Duration;

use tracing::info;

use crate::clock::FixedStep;
use crate::config::MatchConfig;
use crate::decision::{AutonomousSource, DecisionContext, DecisionSource, HumanSource};
use crate::error::Result;
use crate::fighter::{Fighter, FighterKind, Side, StatusFlags};
use crate::input::{Control, ControlState};
use crate::intent::{Guard, Intent};
use crate::particles::{Particle, ParticlePool};
use crate::resolver::{AttackOutcome, CombatResolver, EventLog, EventRecord, MatchEvent, PhysicsResolver};
use crate::round::{MatchListener, MatchResult, Phase, RoundController};
use crate::schedule::{Schedule, ScheduledEvent};
use crate::view::FighterView;

// =============================================================================
// Match
// =============================================================================

/// The match aggregate and its tick loop.
///
/// `Match` owns:
/// - Both fighters, indexed by [`Side`]
/// - One decision source per fighter
/// - The particle pool, resolvers and event log
/// - The round controller and the deferred-operation schedule
/// - The held-control snapshot fed by the host
///
/// Fighters are created at construction and never removed. Decision sources
/// only ever see [`FighterView`] snapshots; all mutation happens here and in
/// the resolvers.
pub struct Match {
    config: MatchConfig,
    fighters: [Fighter; 2],
    sources: [Box<dyn DecisionSource>; 2],
    particles: ParticlePool,
    physics: PhysicsResolver,
    combat: CombatResolver,
    events: EventLog,
    round: RoundController,
    schedule: Schedule,
    clock: FixedStep,
    controls: ControlState,
    listener: Option<Box<dyn MatchListener>>,
    result: Option<MatchResult>,
    tick: u64,
    running: bool,
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("tick", &self.tick)
            .field("phase", &self.round.phase())
            .field("running", &self.running)
            .field("fighters", &self.fighters)
            .field(
                "sources",
                &[self.sources[0].name(), self.sources[1].name()],
            )
            .field("particles", &self.particles.len())
            .field("pending", &self.schedule.len())
            .field("controls", &self.controls)
            .field("seed", &self.config.seed)
            .finish_non_exhaustive()
    }
}

impl Match {
    /// Creates a match with the stock configuration.
    ///
    /// The human plays `player_kind` on the left; the autonomous opponent
    /// plays its rival on the right.
    #[must_use]
    pub fn new(player_kind: FighterKind) -> Self {
        Self::build(MatchConfig::default(), player_kind)
    }

    /// Creates a match from a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`](crate::error::ConfigError::Invalid) if
    /// the configuration fails validation.
    ///
    /// # Example
    ///
    /// ```
    /// use brawl_core::config::MatchConfig;
    /// use brawl_core::fighter::{FighterKind, Side};
    /// use brawl_core::simulation::Match;
    ///
    /// let config = MatchConfig::default().with_seed(12345);
    /// let brawl = Match::with_config(config, FighterKind::Bear)?;
    /// assert_eq!(brawl.fighter(Side::Opponent).kind, FighterKind::Panda);
    /// assert_eq!(brawl.seed(), 12345);
    /// # Ok::<(), brawl_core::error::ConfigError>(())
    /// ```
    pub fn with_config(config: MatchConfig, player_kind: FighterKind) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, player_kind))
    }

    fn build(config: MatchConfig, player_kind: FighterKind) -> Self {
        let fighters = [
            Fighter::spawn(player_kind, Side::Player, &config),
            Fighter::spawn(player_kind.rival(), Side::Opponent, &config),
        ];
        let sources: [Box<dyn DecisionSource>; 2] = [
            Box::new(HumanSource::new(&config.physics)),
            Box::new(AutonomousSource::new(config.ai.clone(), &config.timing, config.seed)),
        ];

        Self {
            fighters,
            sources,
            particles: ParticlePool::new(config.particles.clone(), config.seed),
            physics: PhysicsResolver::new(&config),
            combat: CombatResolver::new(config.combat.clone()),
            events: EventLog::new(),
            round: RoundController::new(&config.timing),
            schedule: Schedule::new(),
            clock: FixedStep::new(&config.timing),
            controls: ControlState::empty(),
            listener: None,
            result: None,
            tick: 0,
            running: true,
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------------

    /// Replaces the decision source driving `side`.
    pub fn set_source(&mut self, side: Side, source: Box<dyn DecisionSource>) {
        self.sources[side.index()] = source;
    }

    /// Installs the collaborator that receives audio cues and the result.
    pub fn set_listener(&mut self, listener: impl MatchListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Marks the control bound to `key` as held.
    ///
    /// Returns the control, or `None` if the key is unbound.
    pub fn press_key(&mut self, key: &str) -> Option<Control> {
        let control = self.config.controls.control_for(key)?;
        self.controls.set_held(control, true);
        Some(control)
    }

    /// Marks the control bound to `key` as released.
    ///
    /// Returns the control, or `None` if the key is unbound.
    pub fn release_key(&mut self, key: &str) -> Option<Control> {
        let control = self.config.controls.control_for(key)?;
        self.controls.set_held(control, false);
        Some(control)
    }

    /// Replaces the held-control snapshot wholesale.
    pub fn set_controls(&mut self, controls: ControlState) {
        self.controls = controls;
    }

    /// Currently held controls.
    #[must_use]
    pub fn controls(&self) -> ControlState {
        self.controls
    }

    // -------------------------------------------------------------------------
    // Running
    // -------------------------------------------------------------------------

    /// Feeds elapsed wall time and runs every tick that has come due.
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let due = self.clock.accumulate(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            if !self.is_running() {
                break;
            }
            self.step();
            ran += 1;
        }
        ran
    }

    /// Runs one tick. Does nothing once the match is over or stopped.
    pub fn step(&mut self) {
        if !self.is_running() {
            return;
        }
        self.tick += 1;
        let tick = self.tick;

        if self.run_scheduled(tick) {
            return;
        }

        for side in Side::BOTH {
            self.act(side, tick);
        }

        for fighter in &mut self.fighters {
            self.physics.integrate(fighter);
        }

        self.particles.update();

        if let Some(winner) =
            self.round
                .evaluate(&mut self.fighters, &mut self.particles, &mut self.schedule, tick)
        {
            self.emit(tick, MatchEvent::RoundEnded { winner });
        }
    }

    /// Halts the match and cancels every pending deferred operation.
    ///
    /// A stopped match never ticks again and never reports a result.
    pub fn stop(&mut self) {
        if self.running {
            info!(tick = self.tick, "match stopped");
        }
        self.running = false;
        self.schedule.clear();
        self.clock.reset();
    }

    /// Runs due deferred operations. Returns `true` if the match ended.
    fn run_scheduled(&mut self, tick: u64) -> bool {
        for event in self.schedule.drain_due(tick) {
            match event {
                ScheduledEvent::ReleaseGuard(side) => {
                    let fighter = &mut self.fighters[side.index()];
                    if !fighter.is_dead() {
                        fighter.set_blocking(false);
                    }
                }
                ScheduledEvent::EndGame => {
                    if self.round.finish() {
                        self.finish(tick);
                        return true;
                    }
                }
            }
        }
        false
    }

    fn finish(&mut self, tick: u64) {
        let Some(winner) = self.round.winner() else {
            return;
        };
        let result = MatchResult {
            winner,
            winner_kind: self.fighters[winner.index()].kind,
            final_tick: tick,
        };
        self.schedule.clear();
        self.result = Some(result);
        info!(tick, %result, "game over");

        self.emit(tick, MatchEvent::GameOver(result));
        if let Some(listener) = self.listener.as_mut() {
            listener.on_game_over(&result);
        }
    }

    /// Consults `side`'s decision source and applies its intent.
    fn act(&mut self, side: Side, tick: u64) {
        let me = &self.fighters[side.index()];
        if !me.can_act() {
            return;
        }
        let ctx = DecisionContext {
            tick,
            me: FighterView::from(me),
            opponent: FighterView::from(&self.fighters[side.other().index()]),
            controls: self.controls,
        };
        let intent = self.sources[side.index()].decide(&ctx);
        self.apply_intent(side, &intent, tick);
    }

    fn apply_intent(&mut self, side: Side, intent: &Intent, tick: u64) {
        let fighter = &mut self.fighters[side.index()];

        let jumped = self.physics.apply_motion(fighter, intent);

        match intent.guard {
            Guard::Keep => {}
            Guard::Up => fighter.set_blocking(true),
            Guard::Down => fighter.set_blocking(false),
            Guard::UpFor(ticks) => {
                fighter.set_blocking(true);
                self.schedule.cancel(ScheduledEvent::ReleaseGuard(side));
                self.schedule.push(tick.saturating_add(ticks), ScheduledEvent::ReleaseGuard(side));
            }
        }

        let accepted =
            intent.attack && fighter.timers.attack_cooldown == 0 && !fighter.is_blocking();
        if accepted {
            fighter.status.insert(StatusFlags::ATTACKING);
            fighter.timers.attack_cooldown = fighter.attack_recovery;
        }

        if jumped {
            self.emit(tick, MatchEvent::Jumped { side });
        }
        if accepted {
            self.resolve_attack(side, tick);
        }
    }

    fn resolve_attack(&mut self, attacker_side: Side, tick: u64) {
        let [player, opponent] = &mut self.fighters;
        let (attacker, defender) = match attacker_side {
            Side::Player => (player, opponent),
            Side::Opponent => (opponent, player),
        };

        let event = match self.combat.resolve_attack(attacker, defender, &mut self.particles) {
            AttackOutcome::Hit { damage } => MatchEvent::Hit {
                attacker: attacker_side,
                damage,
            },
            AttackOutcome::Blocked => MatchEvent::Blocked {
                attacker: attacker_side,
            },
            AttackOutcome::Whiffed => MatchEvent::Whiffed {
                attacker: attacker_side,
            },
            AttackOutcome::Ignored => return,
        };
        self.emit(tick, event);
    }

    fn emit(&mut self, tick: u64, event: MatchEvent) {
        if let (Some(cue), Some(listener)) = (event.cue(), self.listener.as_mut()) {
            listener.on_cue(cue);
        }
        self.events.record(tick, event);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Fighter occupying `side`.
    #[must_use]
    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    /// Mutable access to a fighter, for scenario setup.
    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        &mut self.fighters[side.index()]
    }

    /// Both fighters in [`Side::BOTH`] order.
    #[must_use]
    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    /// Health of the fighter on `side`.
    #[must_use]
    pub fn health(&self, side: Side) -> f32 {
        self.fighters[side.index()].hp()
    }

    /// Live particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    /// Winning side, once the round has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.round.winner()
    }

    /// Winning character, once the round has ended.
    #[must_use]
    pub fn winner_kind(&self) -> Option<FighterKind> {
        self.winner().map(|side| self.fighters[side.index()].kind)
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    /// Returns `true` while the match still ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running && self.round.phase() != Phase::GameOver
    }

    /// Number of ticks run so far.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Master seed of the match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Configuration the match was built with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Number of deferred operations still pending.
    #[must_use]
    pub fn pending_operations(&self) -> usize {
        self.schedule.len()
    }

    /// Drains and returns every event recorded since the last call.
    pub fn take_events(&mut self) -> Vec<EventRecord> {
        self.events.take_events()
    }
}

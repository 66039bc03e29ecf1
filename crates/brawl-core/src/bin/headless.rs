//! Headless match runner.
//!
//! Plays a scripted sparring partner against the autonomous opponent without
//! rendering and logs how the fight went.
//!
//! ```text
//! headless [CONFIG.json] [SEED]
//! ```
//!
//! Set `RUST_LOG=brawl_core=debug` to watch the opponent think.

use std::time::Duration;

use anyhow::{Context, Result};
use brawl_core::decision::{DecisionContext, DecisionSource};
use brawl_core::fighter::Facing;
use brawl_core::intent::{Guard, Intent};
use brawl_core::{FighterKind, Match, MatchConfig, MatchEvent, Side};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Simulated seconds before the runner calls the fight a draw.
const TIME_LIMIT_SECS: u64 = 180;

/// Stand-in for the human: closes in, swings when it can, guards when threatened.
struct SparringPartner {
    reach: f32,
    walk_accel: f32,
}

impl DecisionSource for SparringPartner {
    fn name(&self) -> &'static str {
        "sparring-partner"
    }

    fn decide(&mut self, ctx: &DecisionContext) -> Intent {
        let (me, foe) = (&ctx.me, &ctx.opponent);
        let dx = me.dx_to(foe);
        let facing = Facing::toward(dx);

        if foe.attacking && foe.faces(me) && me.gap(foe) < self.reach * 1.5 {
            return Intent::idle().with_guard(Guard::Up);
        }

        let mut intent = Intent::idle().with_guard(Guard::Down);
        intent.face = Some(facing);
        if me.gap(foe) >= self.reach * 0.75 {
            intent = intent.walk(facing, self.walk_accel);
        } else if me.attack_ready() {
            intent = intent.with_attack();
        }
        intent
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config() -> Result<MatchConfig> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => MatchConfig::from_path(&path)
            .with_context(|| format!("loading match config from {path}"))?,
        None => MatchConfig::default(),
    };

    match args.next() {
        Some(seed) => {
            let seed = seed
                .parse()
                .with_context(|| format!("seed must be an unsigned integer, got {seed:?}"))?;
            Ok(config.with_seed(seed))
        }
        None => Ok(config),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let frame = Duration::from_nanos(1_000_000_000 / u64::from(config.timing.tick_rate_hz));
    let tick_limit = TIME_LIMIT_SECS * u64::from(config.timing.tick_rate_hz);
    let partner = SparringPartner {
        reach: config.combat.reach,
        walk_accel: config.physics.walk_accel,
    };

    let mut brawl = Match::with_config(config, FighterKind::Panda)?;
    brawl.set_source(Side::Player, Box::new(partner));
    info!(seed = brawl.seed(), "match started");

    let (mut hits, mut blocks, mut jumps) = (0u32, 0u32, 0u32);
    while brawl.is_running() && brawl.tick() < tick_limit {
        brawl.advance(frame);
        for record in brawl.take_events() {
            match record.event {
                MatchEvent::Hit { .. } => hits += 1,
                MatchEvent::Blocked { .. } => blocks += 1,
                MatchEvent::Jumped { .. } => jumps += 1,
                _ => {}
            }
        }
    }

    info!(ticks = brawl.tick(), hits, blocks, jumps, "fight finished");
    match brawl.result() {
        Some(result) => info!(
            winner = %result.winner,
            player_hp = brawl.health(Side::Player),
            opponent_hp = brawl.health(Side::Opponent),
            "{result}"
        ),
        None => {
            warn!(limit_secs = TIME_LIMIT_SECS, "time limit reached without a winner");
            brawl.stop();
        }
    }

    Ok(())
}

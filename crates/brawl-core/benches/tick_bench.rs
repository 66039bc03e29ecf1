use std::time::Duration;

use brawl_core::fighter::Side;
use brawl_core::input::ControlState;
use brawl_core::{FighterKind, Match, MatchConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_step_idle(c: &mut Criterion) {
    let mut brawl = Match::new(FighterKind::Panda);

    c.bench_function("step_idle", |b| {
        b.iter(|| {
            brawl.step();
            black_box(brawl.tick())
        });
    });
}

fn bench_step_with_explosion(c: &mut Criterion) {
    // Knock the opponent out so every tick animates the full explosion.
    c.bench_function("step_with_explosion", |b| {
        b.iter_batched(
            || {
                let mut brawl = Match::new(FighterKind::Bear);
                brawl.fighter_mut(Side::Opponent).vitals.hp = 0.0;
                brawl.step();
                brawl
            },
            |mut brawl| {
                for _ in 0..30 {
                    brawl.step();
                }
                black_box(brawl.particles().len())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_full_match(c: &mut Criterion) {
    // Player walks in and swings every half second for one simulated minute.
    c.bench_function("full_match_60s", |b| {
        b.iter(|| {
            let config = MatchConfig::default().with_seed(black_box(7));
            let Ok(mut brawl) = Match::with_config(config, FighterKind::Panda) else {
                return 0;
            };
            let frame = Duration::from_nanos(16_666_667);
            for frame_index in 0..3600u32 {
                let mut controls = ControlState::RIGHT;
                if frame_index % 30 == 0 {
                    controls |= ControlState::ATTACK;
                }
                brawl.set_controls(controls);
                brawl.advance(frame);
            }
            brawl.tick()
        });
    });
}

criterion_group!(benches, bench_step_idle, bench_step_with_explosion, bench_full_match);
criterion_main!(benches);

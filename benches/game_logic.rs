use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_battlegrid::core::GameState;
use tui_battlegrid::types::{Position, MAP_HEIGHT, MAP_WIDTH};

fn bench_move_enemies(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn_enemies(4);

    c.bench_function("move_enemies_tick", |b| {
        b.iter(|| {
            state.move_enemies();
            black_box(&state.enemies);
        })
    });
}

fn bench_fire(c: &mut Criterion) {
    c.bench_function("fire_full_column", |b| {
        b.iter(|| {
            let mut state = GameState::new(12345);
            state.player = Position::new(10, MAP_HEIGHT as i8 - 2);
            state.rebuild_map();
            black_box(state.fire());
        })
    });
}

fn bench_spawn_enemies(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_4_enemies", |b| {
        b.iter(|| {
            state.spawn_enemies(black_box(4));
        })
    });
}

fn bench_rebuild_map(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rebuild_map", |b| {
        b.iter(|| {
            state.rebuild_map();
            black_box(state.map.get(MAP_WIDTH as i8 / 2, MAP_HEIGHT as i8 / 2));
        })
    });
}

criterion_group!(
    benches,
    bench_move_enemies,
    bench_fire,
    bench_spawn_enemies,
    bench_rebuild_map
);
criterion_main!(benches);

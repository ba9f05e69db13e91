use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ludo::board::{Color, GameState, Phase, Placement, TokenId};
use ludo::movegen::movable_tokens;
use ludo::resolve::{apply_move, apply_roll};
use ludo::simulate::play_game;

/// A mid-game position with tokens spread around the loop.
fn midgame_state() -> GameState {
    let mut state = GameState::new();
    let spots: [(Color, u8, u8); 8] = [
        (Color::Red, 0, 5),
        (Color::Red, 1, 30),
        (Color::Green, 0, 22),
        (Color::Green, 2, 53),
        (Color::Yellow, 1, 11),
        (Color::Yellow, 3, 40),
        (Color::Blue, 0, 17),
        (Color::Blue, 1, 46),
    ];
    for (color, slot, pos) in spots {
        state.tokens[TokenId::new(color, slot).index()].placement = Placement::Track(pos);
    }
    state
}

fn bench_movable_tokens(c: &mut Criterion) {
    let mut state = midgame_state();
    state.phase = Phase::Moving;
    state.dice_value = Some(6);
    c.bench_function("movable_tokens_midgame", |b| b.iter(|| movable_tokens(black_box(&state))));
}

fn bench_roll(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("apply_roll_midgame", |b| {
        b.iter(|| apply_roll(black_box(&state), black_box(4)))
    });
}

fn bench_move_with_capture(c: &mut Criterion) {
    let state = apply_roll(&midgame_state(), 6).map(|r| r.state).unwrap_or_default();
    // Red relative 30 + 6 lands on absolute 36, blue relative 49 sits there.
    let mut state = state;
    state.tokens[TokenId::new(Color::Blue, 2).index()].placement = Placement::Track(49);
    let mover = TokenId::new(Color::Red, 1);
    c.bench_function("apply_move_capture", |b| {
        b.iter(|| apply_move(black_box(&state), black_box(mover), 1))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_full_game", |b| b.iter(|| play_game(0, black_box(42), 10_000)));
}

criterion_group!(
    benches,
    bench_movable_tokens,
    bench_roll,
    bench_move_with_capture,
    bench_full_game,
);
criterion_main!(benches);

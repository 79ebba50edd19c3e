use bug_crossing::compute::*;
use bug_crossing::constants::*;
use bug_crossing::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn enemy_at(x: f64, y: f64, velocity: f64) -> Enemy {
    Enemy {
        sprite: SPRITE_ENEMY,
        x,
        y,
        velocity,
    }
}

fn make_state() -> GameState {
    GameState {
        enemies: vec![
            enemy_at(0.0, 83.0, 100.0),
            enemy_at(0.0, 166.0, 200.0),
            enemy_at(0.0, 249.0, 50.0),
        ],
        player: Player::new(),
        scoreboard: Scoreboard::new(),
    }
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_builds_three_enemies() {
    let s = init_state(&mut seeded_rng());
    assert_eq!(s.enemies.len(), 3);
    for e in &s.enemies {
        assert_eq!(e.x, 0.0);
        assert!(ENEMY_LANES.contains(&e.y));
        assert!(e.velocity >= 50.0 && e.velocity < 300.0);
    }
}

#[test]
fn init_state_fresh_player_and_score() {
    let s = init_state(&mut seeded_rng());
    assert_eq!(s.player, Player::new());
    assert_eq!(s.scoreboard.score, 0);
}

#[test]
fn init_state_is_deterministic_for_a_seed() {
    let a = init_state(&mut seeded_rng());
    let b = init_state(&mut seeded_rng());
    assert_eq!(a, b);
}

// ── apply_input ───────────────────────────────────────────────────────────────

#[test]
fn apply_input_moves_only_the_player() {
    let s = make_state();
    let s2 = apply_input(&s, Direction::Up);
    assert_eq!((s2.player.x, s2.player.y), (202.0, 332.0));
    assert_eq!(s2.enemies, s.enemies);
    assert_eq!(s2.scoreboard, s.scoreboard);
}

#[test]
fn apply_input_does_not_mutate_original() {
    let s = make_state();
    let _ = apply_input(&s, Direction::Left);
    assert_eq!(s.player.x, 202.0);
}

#[test]
fn apply_input_off_board_waits_for_tick() {
    let s = make_state();
    let s2 = apply_input(&s, Direction::Down);
    assert_eq!(s2.player.y, 498.0);
    let s3 = tick(&s2, 0.0);
    assert_eq!((s3.player.x, s3.player.y), (202.0, 415.0));
    assert_eq!(s3.scoreboard.score, 0);
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn tick_moves_every_enemy_by_velocity_dt() {
    let s = make_state();
    let s2 = tick(&s, 0.5);
    let xs: Vec<f64> = s2.enemies.iter().map(|e| e.x).collect();
    assert_eq!(xs, vec![50.0, 100.0, 25.0]);
    assert!(s2.enemies.iter().zip(&s.enemies).all(|(a, b)| a.y == b.y));
}

#[test]
fn tick_does_not_mutate_original() {
    let s = make_state();
    let _ = tick(&s, 1.0);
    assert!(s.enemies.iter().all(|e| e.x == 0.0));
}

#[test]
fn tick_enemies_keep_going_past_the_edge() {
    let mut s = make_state();
    for _ in 0..10 {
        s = tick(&s, 1.0);
    }
    assert_eq!(s.enemies[1].x, 2000.0);
    assert!(!s.enemies[1].is_in_boundaries());
}

#[test]
fn tick_water_scores_and_resets() {
    let mut s = make_state();
    s.player.y = 50.0;
    let s2 = tick(&s, 0.016);
    assert_eq!(s2.scoreboard.score, 1);
    assert_eq!((s2.player.x, s2.player.y), (202.0, 415.0));
}

#[test]
fn tick_collision_uses_moved_enemies() {
    // Enemy at x=0 moving 200 px/s reaches x=200 after one second,
    // which is within reach of the player at x=202.
    let mut s = make_state();
    s.player.y = 166.0;
    let s2 = tick(&s, 1.0);
    assert_eq!(s2.scoreboard.score, -1);
    assert_eq!((s2.player.x, s2.player.y), (202.0, 415.0));
}

#[test]
fn tick_no_collision_when_enemy_far() {
    let mut s = make_state();
    s.player.y = 166.0;
    let s2 = tick(&s, 0.1); // enemy at x=20, player at 202
    assert_eq!(s2.scoreboard.score, 0);
    assert_eq!(s2.player.y, 166.0);
}

#[test]
fn tick_out_of_bounds_resets_without_scoring() {
    let mut s = make_state();
    s.player.x = 500.0;
    s.player.y = 300.0;
    let s2 = tick(&s, 0.016);
    assert_eq!((s2.player.x, s2.player.y), (202.0, 415.0));
    assert_eq!(s2.scoreboard.score, 0);
}

#[test]
fn full_crossing_scores_one() {
    let mut s = GameState {
        enemies: Vec::new(),
        player: Player::new(),
        scoreboard: Scoreboard::new(),
    };
    for _ in 0..5 {
        s = apply_input(&s, Direction::Up);
        s = tick(&s, 0.016);
    }
    assert_eq!(s.scoreboard.score, 1);
    assert_eq!((s.player.x, s.player.y), (202.0, 415.0));
}

/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`.  The only side effect is
/// the injected RNG used by `init_state`.

use rand::Rng;

use crate::constants::ENEMY_COUNT;
use crate::entities::{Direction, Enemy, GameState, Player, Scoreboard};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the starting roster: `ENEMY_COUNT` enemies, one player, one
/// scoreboard.  All randomness comes through `rng` so tests can pass a
/// seeded generator.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    GameState {
        enemies: (0..ENEMY_COUNT).map(|_| Enemy::new(&mut *rng)).collect(),
        player: Player::new(),
        scoreboard: Scoreboard::new(),
    }
}

// ── Input-driven state transitions ──────────────────────────────────────────

/// Apply one jump right away.  Input is never queued against the next tick.
pub fn apply_input(state: &GameState, direction: Direction) -> GameState {
    let mut player = state.player.clone();
    player.handle_input(direction);
    GameState {
        player,
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by `dt` seconds: move every enemy, then let the
/// player check for water, collisions and boundaries against the moved
/// enemies.
pub fn tick(state: &GameState, dt: f64) -> GameState {
    let mut enemies = state.enemies.clone();
    for enemy in &mut enemies {
        enemy.update(dt);
    }

    let mut player = state.player.clone();
    let mut scoreboard = state.scoreboard.clone();
    player.update(dt, &enemies, &mut scoreboard);

    GameState {
        enemies,
        player,
        scoreboard,
    }
}

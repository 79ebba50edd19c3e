/// Game entity types and the rules that move them.
///
/// Nothing here touches the terminal.  Collaborators (the enemy list, the
/// scoreboard, the random source) are always passed in explicitly.

use log::{debug, info};
use rand::Rng;

use crate::constants::{
    BOUNDARY_X, COLLISION_MARGIN, COL_WIDTH, ENEMY_LANES, ENEMY_MAX_VELOCITY,
    ENEMY_MIN_VELOCITY, PLAYER_START_X, PLAYER_START_Y, ROW_HEIGHT, SCOREBOARD_X, SCOREBOARD_Y,
    SPRITE_ENEMY, SPRITE_PLAYER, WATER_Y,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Pixel offset `(dx, dy)` of one jump in this direction.
    pub fn delta(self) -> (f64, f64) {
        match self {
            Direction::Left => (-COL_WIDTH, 0.0),
            Direction::Right => (COL_WIDTH, 0.0),
            Direction::Up => (0.0, -ROW_HEIGHT),
            Direction::Down => (0.0, ROW_HEIGHT),
        }
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub sprite: &'static str,
    pub x: f64,
    /// Always one of `ENEMY_LANES`.
    pub y: f64,
    /// Pixels per second, fixed at construction.
    pub velocity: f64,
}

impl Enemy {
    /// Spawn at the left edge of a random lane with a random speed.
    /// Draws the lane first, then the velocity.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let y = random_starting_pos(rng);
        let velocity = random_velocity(rng);
        Enemy {
            sprite: SPRITE_ENEMY,
            x: 0.0,
            y,
            velocity,
        }
    }

    /// Advance along the lane.  There is no wraparound: once an enemy has
    /// crossed the board it keeps going.
    pub fn update(&mut self, dt: f64) {
        self.x += self.velocity * dt;
    }

    pub fn is_in_boundaries(&self) -> bool {
        self.x < BOUNDARY_X
    }
}

/// One of 83, 166 or 249.
pub fn random_starting_pos<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u: f64 = rng.gen();
    (u * ENEMY_LANES.len() as f64).floor() * ROW_HEIGHT + ROW_HEIGHT
}

/// Uniform in `[ENEMY_MIN_VELOCITY, ENEMY_MAX_VELOCITY)`.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u: f64 = rng.gen();
    u * (ENEMY_MAX_VELOCITY - ENEMY_MIN_VELOCITY) + ENEMY_MIN_VELOCITY
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub sprite: &'static str,
    pub x: f64,
    pub y: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Player {
            sprite: SPRITE_PLAYER,
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
        }
    }

    /// Jump one cell.  No bounds checks here; an out-of-range position is
    /// corrected by the next `update`.
    pub fn handle_input(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.x += dx;
        self.y += dy;
    }

    pub fn reset(&mut self) {
        self.x = PLAYER_START_X;
        self.y = PLAYER_START_Y;
    }

    /// Returns `true` if the player was off the board and got reset.
    pub fn reset_on_boundaries(&mut self) -> bool {
        if self.x < 0.0 || self.x > BOUNDARY_X || self.y > PLAYER_START_Y {
            debug!("player out of bounds at ({}, {}), resetting", self.x, self.y);
            self.reset();
            return true;
        }
        false
    }

    /// Checks every enemy against the current position, without stopping
    /// at the first hit.  After a hit the player sits on the start cell, so
    /// only an enemy there can hit again.  Returns the hit count.
    pub fn reset_on_collisions(&mut self, enemies: &[Enemy], scoreboard: &mut Scoreboard) -> usize {
        let mut hits = 0;
        for enemy in enemies {
            let in_reach =
                self.x >= enemy.x - COLLISION_MARGIN && self.x <= enemy.x + COLLISION_MARGIN;
            if in_reach && self.y == enemy.y {
                debug!("player hit by enemy at ({}, {}), resetting", enemy.x, enemy.y);
                self.reset();
                scoreboard.decrement();
                hits += 1;
            }
        }
        hits
    }

    /// Returns `true` if the player reached the water and scored.
    pub fn reset_on_water(&mut self, scoreboard: &mut Scoreboard) -> bool {
        if self.y < WATER_Y {
            debug!("player reached the water, resetting");
            self.reset();
            scoreboard.increment();
            return true;
        }
        false
    }

    /// Run the reset checks in order: water, collisions, boundaries.
    /// `dt` is unused; the player only moves on input.
    pub fn update(&mut self, _dt: f64, enemies: &[Enemy], scoreboard: &mut Scoreboard) {
        self.reset_on_water(scoreboard);
        self.reset_on_collisions(enemies, scoreboard);
        self.reset_on_boundaries();
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    /// Unbounded in both directions.
    pub score: i64,
    pub x: f64,
    pub y: f64,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard {
            score: 0,
            x: SCOREBOARD_X,
            y: SCOREBOARD_Y,
        }
    }

    pub fn increment(&mut self) {
        self.score += 1;
        info!("score up to {}", self.score);
    }

    pub fn decrement(&mut self) {
        self.score -= 1;
        info!("score down to {}", self.score);
    }

    pub fn text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the game loop updates and draws.  Cloneable so the compute
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub enemies: Vec<Enemy>,
    pub player: Player,
    pub scoreboard: Scoreboard,
}

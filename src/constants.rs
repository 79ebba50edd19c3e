/// Fixed numbers the game is built around.  All positions are canvas pixels
/// with the origin at the top-left of the board.

use std::time::Duration;

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Width of one board cell; also the player's horizontal jump.
pub const COL_WIDTH: f64 = 101.0;
/// Height of one board cell; also the player's vertical jump.
pub const ROW_HEIGHT: f64 = 83.0;

pub const BOARD_COLS: u16 = 5;
pub const BOARD_ROWS: u16 = 6;

// ── Player ────────────────────────────────────────────────────────────────────

/// Bottom row, middle column.
pub const PLAYER_START_X: f64 = 202.0;
pub const PLAYER_START_Y: f64 = 415.0;

/// Rightmost legal player x (and the enemy visibility edge).
pub const BOUNDARY_X: f64 = 404.0;
/// Anything above this y is the water row.
pub const WATER_Y: f64 = 83.0;
/// Horizontal half-width of an enemy's hit box.
pub const COLLISION_MARGIN: f64 = 40.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_COUNT: usize = 3;
pub const ENEMY_LANES: [f64; 3] = [83.0, 166.0, 249.0];
/// Pixels per second, inclusive.
pub const ENEMY_MIN_VELOCITY: f64 = 50.0;
/// Pixels per second, exclusive.
pub const ENEMY_MAX_VELOCITY: f64 = 300.0;

// ── Scoreboard ────────────────────────────────────────────────────────────────

pub const SCOREBOARD_X: f64 = 10.0;
pub const SCOREBOARD_Y: f64 = 100.0;
pub const SCOREBOARD_FONT: &str = "24pt Impact";
pub const SCOREBOARD_LINE_WIDTH: f64 = 3.0;

// ── Sprite asset ids ──────────────────────────────────────────────────────────

pub const SPRITE_ENEMY: &str = "images/enemy-bug.png";
pub const SPRITE_PLAYER: &str = "images/char-boy.png";
pub const SPRITE_WATER: &str = "images/water-block.png";
pub const SPRITE_STONE: &str = "images/stone-block.png";
pub const SPRITE_GRASS: &str = "images/grass-block.png";

/// Background tile per board row, top to bottom.
pub const ROW_TILES: [&str; BOARD_ROWS as usize] = [
    SPRITE_WATER,
    SPRITE_STONE,
    SPRITE_STONE,
    SPRITE_STONE,
    SPRITE_GRASS,
    SPRITE_GRASS,
];

// ── Terminal front-end ────────────────────────────────────────────────────────

/// Terminal columns per board cell.
pub const CELL_COLS: u16 = 10;
/// Terminal rows per board cell.
pub const CELL_ROWS: u16 = 3;

/// Top-left terminal cell of the board.
pub const BOARD_ORIGIN: (u16, u16) = (1, 1);

pub const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

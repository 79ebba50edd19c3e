/// Rendering layer — all terminal I/O lives here.
///
/// `TerminalSurface` implements the canvas-like `Surface` on top of a
/// crossterm writer, scaling board pixels down to character cells.
/// `SpriteSheet` is the matching `Resources`: every sprite id the game uses
/// has a small block of glyph art.  No game logic is performed here.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::constants::{
    BOARD_COLS, BOARD_ORIGIN, BOARD_ROWS, CELL_COLS, CELL_ROWS, COL_WIDTH, ROW_HEIGHT,
    SPRITE_ENEMY, SPRITE_GRASS, SPRITE_PLAYER, SPRITE_STONE, SPRITE_WATER,
};
use crate::entities::GameState;
use crate::render::{render_board, render_entities, Resources, Surface};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WATER: Color = Color::DarkBlue;
const C_STONE: Color = Color::DarkGrey;
const C_GRASS: Color = Color::DarkGreen;
const C_ENEMY: Color = Color::Red;
const C_PLAYER: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Board size in terminal cells.
pub const BOARD_WIDTH: i32 = (BOARD_COLS * CELL_COLS) as i32;
pub const BOARD_HEIGHT: i32 = (BOARD_ROWS * CELL_ROWS) as i32;

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Glyph art for one sprite, `CELL_ROWS` lines of `CELL_COLS` characters.
///
/// Tiles carry a background colour and are painted solid.  Sprites without
/// one only print their non-blank run on each line, so the tile underneath
/// stays visible around them.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub rows: &'static [&'static str],
    pub fg: Color,
    pub bg: Option<Color>,
}

const BLANK_CELL: &[&str] = &["          ", "          ", "          "];

const BUG: &[&str] = &["          ", "  <@@@@>  ", "          "];

const BOY: &[&str] = &["    o     ", "   /|\\    ", "   / \\    "];

pub struct SpriteSheet {
    images: HashMap<&'static str, Glyph>,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::load()
    }
}

impl SpriteSheet {
    /// Every sprite the game references, ready before the first frame.
    pub fn load() -> Self {
        let tile = |bg| Glyph {
            rows: BLANK_CELL,
            fg: Color::Reset,
            bg: Some(bg),
        };

        let mut images = HashMap::new();
        images.insert(SPRITE_WATER, tile(C_WATER));
        images.insert(SPRITE_STONE, tile(C_STONE));
        images.insert(SPRITE_GRASS, tile(C_GRASS));
        images.insert(
            SPRITE_ENEMY,
            Glyph {
                rows: BUG,
                fg: C_ENEMY,
                bg: None,
            },
        );
        images.insert(
            SPRITE_PLAYER,
            Glyph {
                rows: BOY,
                fg: C_PLAYER,
                bg: None,
            },
        );
        SpriteSheet { images }
    }
}

impl Resources for SpriteSheet {
    type Image = Glyph;

    fn get(&self, sprite: &str) -> Option<&Glyph> {
        self.images.get(sprite)
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    font: String,
    fill: Color,
    stroke: Color,
    line_width: f64,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        TerminalSurface {
            out,
            font: String::new(),
            fill: Color::White,
            stroke: Color::Black,
            line_width: 1.0,
        }
    }

    /// Print `text` at a board-relative cell, dropping whatever falls
    /// outside the board.  Enemies leave the board and never come back, so
    /// this runs for them every frame.
    fn print_clipped(&mut self, col: i32, row: i32, text: &str) -> io::Result<()> {
        if row < 0 || row >= BOARD_HEIGHT {
            return Ok(());
        }
        let start = col.max(0);
        if start >= BOARD_WIDTH {
            return Ok(());
        }
        let skip = (start - col) as usize;
        let take = (BOARD_WIDTH - start) as usize;
        let visible: String = text.chars().skip(skip).take(take).collect();
        if visible.is_empty() {
            return Ok(());
        }

        self.out.queue(cursor::MoveTo(
            BOARD_ORIGIN.0 + start as u16,
            BOARD_ORIGIN.1 + row as u16,
        ))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    fn print_label(&mut self, text: &str, x: f64, y: f64, bg: Color) -> io::Result<()> {
        let (col, row) = to_cell(x, y);
        if !self.font.is_empty() {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(style::SetForegroundColor(self.fill))?;
        self.out.queue(style::SetBackgroundColor(bg))?;
        self.print_clipped(col, row, text)?;
        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        self.out.queue(style::ResetColor)?;
        Ok(())
    }
}

/// Board pixel position to board-relative terminal cell.
pub fn to_cell(x: f64, y: f64) -> (i32, i32) {
    let col = (x / COL_WIDTH * f64::from(CELL_COLS)).floor() as i32;
    let row = (y / ROW_HEIGHT * f64::from(CELL_ROWS)).floor() as i32;
    (col, row)
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    type Image = Glyph;

    fn draw_image(&mut self, image: &Glyph, x: f64, y: f64) -> io::Result<()> {
        let (col, row) = to_cell(x, y);
        self.out.queue(style::SetForegroundColor(image.fg))?;
        self.out
            .queue(style::SetBackgroundColor(image.bg.unwrap_or(Color::Reset)))?;

        for (i, line) in image.rows.iter().enumerate() {
            let line_row = row + i as i32;
            if image.bg.is_some() {
                self.print_clipped(col, line_row, line)?;
                continue;
            }
            let lead = line.chars().take_while(|c| *c == ' ').count();
            let body = line.trim();
            if !body.is_empty() {
                self.print_clipped(col + lead as i32, line_row, body)?;
            }
        }

        self.out.queue(style::ResetColor)?;
        Ok(())
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> io::Result<()> {
        self.print_label(text, x, y, Color::Reset)
    }

    /// A terminal can't outline glyphs, so the label is reprinted on a
    /// stroke-coloured background instead.
    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> io::Result<()> {
        if self.line_width <= 0.0 {
            return Ok(());
        }
        let stroke = self.stroke;
        self.print_label(text, x, y, stroke)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render_frame<W: Write>(
    out: &mut W,
    state: &GameState,
    sprites: &SpriteSheet,
) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    {
        let mut surface = TerminalSurface::new(out);
        render_board(&mut surface, sprites)?;
        render_entities(state, &mut surface, sprites)?;
    }

    draw_controls_hint(out)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, hint_row() + 1))?;
    out.flush()?;
    Ok(())
}

fn hint_row() -> u16 {
    BOARD_ORIGIN.1 + BOARD_HEIGHT as u16 + 1
}

fn draw_controls_hint<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(cursor::MoveTo(BOARD_ORIGIN.0, hint_row()))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ → ↓ : Move   Q : Quit"))?;
    Ok(())
}

/// Drawing abstraction shared by every front-end.
///
/// `Surface` is a small 2D canvas: images, and text with a font, fill and
/// stroke.  `Resources` resolves sprite ids to loaded images; loading them
/// up front is the implementor's job.  Entities only ever talk to these two
/// traits.

use std::io;

use crossterm::style::Color;
use log::warn;

use crate::constants::{
    BOARD_COLS, COL_WIDTH, ROW_HEIGHT, ROW_TILES, SCOREBOARD_FONT, SCOREBOARD_LINE_WIDTH,
};
use crate::entities::{Enemy, GameState, Player, Scoreboard};

pub trait Surface {
    type Image;

    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64) -> io::Result<()>;
    fn set_font(&mut self, font: &str);
    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> io::Result<()>;
    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> io::Result<()>;
}

pub trait Resources {
    type Image;

    fn get(&self, sprite: &str) -> Option<&Self::Image>;
}

/// Draw `sprite` at `(x, y)`.  An unknown sprite is logged and skipped.
pub fn draw_sprite<S, R>(
    surface: &mut S,
    resources: &R,
    sprite: &str,
    x: f64,
    y: f64,
) -> io::Result<()>
where
    S: Surface,
    R: Resources<Image = S::Image>,
{
    match resources.get(sprite) {
        Some(image) => surface.draw_image(image, x, y),
        None => {
            warn!("no image loaded for sprite `{}`", sprite);
            Ok(())
        }
    }
}

impl Enemy {
    pub fn render<S, R>(&self, surface: &mut S, resources: &R) -> io::Result<()>
    where
        S: Surface,
        R: Resources<Image = S::Image>,
    {
        draw_sprite(surface, resources, self.sprite, self.x, self.y)
    }
}

impl Player {
    pub fn render<S, R>(&self, surface: &mut S, resources: &R) -> io::Result<()>
    where
        S: Surface,
        R: Resources<Image = S::Image>,
    {
        draw_sprite(surface, resources, self.sprite, self.x, self.y)
    }
}

impl Scoreboard {
    /// White label with a black outline.
    pub fn render<S: Surface>(&self, surface: &mut S) -> io::Result<()> {
        let text = self.text();
        surface.set_font(SCOREBOARD_FONT);

        surface.set_fill_style(Color::White);
        surface.fill_text(&text, self.x, self.y)?;

        surface.set_stroke_style(Color::Black);
        surface.set_line_width(SCOREBOARD_LINE_WIDTH);
        surface.stroke_text(&text, self.x, self.y)
    }
}

/// Background tiles, one image per cell, row by row.
pub fn render_board<S, R>(surface: &mut S, resources: &R) -> io::Result<()>
where
    S: Surface,
    R: Resources<Image = S::Image>,
{
    for (row, tile) in ROW_TILES.iter().enumerate() {
        for col in 0..BOARD_COLS {
            let x = f64::from(col) * COL_WIDTH;
            let y = row as f64 * ROW_HEIGHT;
            draw_sprite(surface, resources, tile, x, y)?;
        }
    }
    Ok(())
}

/// Enemies first, then the player, then the scoreboard on top.
pub fn render_entities<S, R>(state: &GameState, surface: &mut S, resources: &R) -> io::Result<()>
where
    S: Surface,
    R: Resources<Image = S::Image>,
{
    for enemy in &state.enemies {
        enemy.render(surface, resources)?;
    }
    state.player.render(surface, resources)?;
    state.scoreboard.render(surface)
}

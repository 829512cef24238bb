use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::game::{GameState, Position};

/// Glyphs for the three cell kinds
const SNAKE_GLYPH: char = 'S';
const FOOD_GLYPH: char = 'F';
const EMPTY_GLYPH: char = '.';

/// Read-only projection of a game state onto some display
pub trait Renderer {
    /// Emit the grid for the current turn
    fn draw(&mut self, state: &GameState) -> Result<()>;

    /// Emit the end-of-game summary
    fn game_over(&mut self, state: &GameState) -> Result<()>;
}

/// Plain-text grid renderer: one line per row, space-separated glyphs
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, state: &GameState) -> Result<()> {
        for y in 0..state.grid_height {
            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let glyph = if state.snake.occupies(pos) {
                    SNAKE_GLYPH
                } else if pos == state.food {
                    FOOD_GLYPH
                } else {
                    EMPTY_GLYPH
                };

                write!(self.out, "{} ", glyph).context("failed to write grid cell")?;
            }
            writeln!(self.out).context("failed to write grid row")?;
        }

        self.out.flush().context("failed to flush grid")?;
        Ok(())
    }

    fn game_over(&mut self, state: &GameState) -> Result<()> {
        writeln!(
            self.out,
            "Game over! Final score: {} ({} turns)",
            state.score, state.steps
        )
        .context("failed to write game over line")?;
        self.out.flush().context("failed to flush game over line")?;
        Ok(())
    }
}

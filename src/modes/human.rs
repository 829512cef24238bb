use anyhow::Result;

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputEvent, InputSource};
use crate::render::Renderer;

/// Interactive play: one turn per input line
///
/// Owns the engine and state and drives them through an injected input
/// source and renderer, so the whole loop runs headlessly in tests.
pub struct HumanMode<I, R> {
    engine: GameEngine,
    state: GameState,
    input: I,
    renderer: R,
}

impl<I: InputSource, R: Renderer> HumanMode<I, R> {
    pub fn new(config: GameConfig, input: I, renderer: R) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            input,
            renderer,
        }
    }

    /// Run until the snake collides or the input stream closes
    ///
    /// The collision query gates the top of the loop, so nothing is drawn
    /// for the colliding turn; the game-over summary is the only output
    /// after that point.
    pub fn run(&mut self) -> Result<()> {
        while !self.state.check_collision() {
            self.renderer.draw(&self.state)?;

            match self.input.next_event()? {
                InputEvent::Move(direction) => self.state.change_direction(direction),
                InputEvent::Ignored => {}
                InputEvent::Closed => return Ok(()),
            }

            self.engine.update(&mut self.state);
        }

        self.state.is_alive = false;
        self.renderer.game_over(&self.state)?;
        Ok(())
    }

    /// Final state after `run` returns
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

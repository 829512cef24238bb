use super::{
    action::Direction,
    config::GameConfig,
    state::{GameState, Position, Snake},
};
use rand::Rng;

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Reset the game to initial state
    ///
    /// The snake starts at the grid center (integer-truncated) heading up;
    /// food is placed at a random cell off the snake.
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Up,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food_avoid_snake(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one turn of the game
    ///
    /// Shifts the snake one cell in its current direction; if the moved
    /// head lands on the food, the snake grows by one and the food is
    /// relocated. The head may end up colliding — the driving loop observes
    /// that through `GameState::collision` before the next turn.
    ///
    /// Returns whether food was eaten. A dead state is left untouched.
    pub fn update(&mut self, state: &mut GameState) -> bool {
        if !state.is_alive {
            return false;
        }

        state.snake.advance();

        let ate_food = state.snake.head() == state.food;
        if ate_food {
            state.snake.grow_tail();
            state.score += 1;
            state.food = self.spawn_food_avoid_snake(&state.snake);
        }

        state.steps += 1;
        ate_food
    }

    /// Spawn food at a random empty position
    ///
    /// Rejection-samples uniform cells until one is off the snake. Does not
    /// terminate if the snake covers the whole grid; a board that small is
    /// outside supported play.
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Position {
        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::CollisionType;

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(5, 5));
        assert_eq!(state.snake.direction, Direction::Up);
    }

    #[test]
    fn test_reset_food_off_snake() {
        let mut engine = GameEngine::new(GameConfig::small());

        for _ in 0..50 {
            let state = engine.reset();
            assert!(!state.snake.occupies(state.food));
            assert!(state.is_in_bounds(state.food));
        }
    }

    #[test]
    fn test_one_update_moves_head_up() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        // Keep food out of the way for a deterministic turn
        state.food = Position::new(0, 0);

        engine.update(&mut state);

        assert_eq!(state.snake.head(), Position::new(5, 4));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.steps, 1);
        assert!(!state.check_collision());
    }

    #[test]
    fn test_update_preserves_length_without_food() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(0, 0),
            10,
            10,
        );

        let ate = engine.update(&mut state);

        assert!(!ate);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_food_consumption_grows_snake() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Up, 1),
            Position::new(5, 4),
            10,
            10,
        );

        let ate = engine.update(&mut state);

        assert!(ate);
        assert_eq!(state.snake.head(), Position::new(5, 4));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 1);
        // Relocated food avoids the grown snake
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn test_wall_collision_after_update() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = GameState::new(
            Snake::new(Position::new(0, 0), Direction::Left, 1),
            Position::new(5, 5),
            10,
            10,
        );

        engine.update(&mut state);

        assert_eq!(state.snake.head(), Position::new(-1, 0));
        assert_eq!(state.collision(), Some(CollisionType::Wall));
    }

    #[test]
    fn test_reversal_into_body_self_collides() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(0, 0),
            10,
            10,
        );

        // Free 180° reversal is allowed; the move lands the head on the body
        state.change_direction(Direction::Left);
        engine.update(&mut state);

        assert_eq!(state.collision(), Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_dead_state_is_absorbing() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.is_alive = false;
        let before = state.clone();

        let ate = engine.update(&mut state);

        assert!(!ate);
        assert_eq!(state, before);
    }
}

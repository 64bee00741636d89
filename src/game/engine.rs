use rand::Rng;

use super::{
    config::GameConfig,
    direction::Direction,
    state::{Cell, GameState},
};

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// The snake shifted one cell forward.
    Moved,
    /// The head landed on the target: the snake grew and scored.
    Grew,
    /// A wall or self collision ended the game, or it was already over.
    GameOver,
}

/// The game engine that handles all state transitions.
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

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state at the configured spawn. The target stays unset until
    /// the next tick places it.
    pub fn reset(&mut self) -> GameState {
        GameState::new(
            self.config.grid(),
            self.config.initial_snake(),
            Direction::Right,
        )
    }

    /// Request a direction change.
    ///
    /// Ignored while the game is over, and silently ignored when the
    /// request would reverse the snake straight into its second segment.
    pub fn set_direction(&self, state: &mut GameState, requested: Direction) {
        if state.game_over {
            return;
        }
        if state.direction.is_opposite(requested) {
            return;
        }
        state.direction = requested;
    }

    /// Advance the game by one tick.
    pub fn advance(&mut self, state: &mut GameState) -> TickResult {
        if state.game_over {
            return TickResult::GameOver;
        }

        // The target is regenerated lazily after a reset, before any
        // movement is evaluated.
        if state.target.is_none() {
            state.target = Some(self.place_target(&state.snake));
        }

        let grid = state.grid;
        let head = state.head();
        let candidate = head as i64 + state.direction.offset(grid.width);

        if !grid.contains(candidate) {
            state.game_over = true;
            return TickResult::GameOver;
        }

        let new_head = candidate as Cell;

        // A horizontal step that lands on another row wrapped through a
        // side wall: a wall hit, not a teleport. Stepping onto any body
        // cell, the tail included, is a self collision.
        if (state.direction.is_horizontal() && grid.row(head) != grid.row(new_head))
            || state.occupies(new_head)
        {
            state.game_over = true;
            return TickResult::GameOver;
        }

        if state.target == Some(new_head) {
            state.snake.push(new_head);
            state.score += 1;
            state.target = Some(self.place_target(&state.snake));
            return TickResult::Grew;
        }

        state.snake.remove(0);
        state.snake.push(new_head);
        TickResult::Moved
    }

    /// Uniformly sample a free cell by rejection, resampling while the
    /// candidate is occupied.
    ///
    /// Unbounded when the body covers the whole grid; in practice the
    /// snake is always shorter than the board.
    pub fn place_target(&mut self, excluded: &[Cell]) -> Cell {
        let cells = self.config.grid().cell_count();
        debug_assert!(
            (excluded.len() as u32) < cells,
            "no free cell left for the target"
        );
        loop {
            let candidate = self.rng.gen_range(0..cells);
            if !excluded.contains(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Grid;

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig::default())
    }

    fn state_with(snake: Vec<Cell>, direction: Direction) -> GameState {
        GameState::new(Grid::new(50, 40), snake, direction)
    }

    #[test]
    fn test_reset_state() {
        let mut engine = engine();
        let state = engine.reset();

        assert_eq!(state.snake, vec![325, 326, 327, 328]);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.target, None);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
    }

    #[test]
    fn test_first_tick_places_target_off_body() {
        let mut engine = engine();
        let mut state = engine.reset();

        engine.advance(&mut state);

        let target = state.target.expect("target placed on first tick");
        assert!(!state.occupies(target));
        assert!(state.grid.contains(target as i64));
    }

    #[test]
    fn test_eating_target_grows_and_scores() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.target = Some(329);

        let result = engine.advance(&mut state);

        assert_eq!(result, TickResult::Grew);
        assert_eq!(state.snake, vec![325, 326, 327, 328, 329]);
        assert_eq!(state.score, 1);

        // The fresh target excludes the whole grown body
        let target = state.target.expect("target regenerated after eating");
        assert!(!state.occupies(target));
    }

    #[test]
    fn test_plain_move_shifts_body() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.target = Some(0);

        let result = engine.advance(&mut state);

        assert_eq!(result, TickResult::Moved);
        assert_eq!(state.snake, vec![326, 327, 328, 329]);
        assert_eq!(state.score, 0);
        assert_eq!(state.target, Some(0));
    }

    #[test]
    fn test_left_edge_exit_is_terminal() {
        let mut engine = engine();
        let mut state = state_with(vec![3, 2, 1, 0], Direction::Left);
        state.target = Some(100);

        let result = engine.advance(&mut state);

        assert_eq!(result, TickResult::GameOver);
        assert!(state.game_over);
        // Everything but the flag is untouched
        assert_eq!(state.snake, vec![3, 2, 1, 0]);
        assert_eq!(state.score, 0);
        assert_eq!(state.target, Some(100));
    }

    #[test]
    fn test_right_edge_wrap_is_a_wall_hit() {
        let mut engine = engine();

        // Head 49 sits at row 0, column 49; one step right lands on index
        // 50, which is row 1, column 0: a wrap through the side wall.
        let mut state = state_with(vec![48, 49], Direction::Right);
        state.target = Some(100);
        assert_eq!(engine.advance(&mut state), TickResult::GameOver);
        assert!(state.game_over);

        // Head 50 (row 1, column 0) stepping right to 51 stays on row 1
        // and is a perfectly ordinary move.
        let mut state = state_with(vec![49, 50], Direction::Right);
        state.target = Some(100);
        assert_eq!(engine.advance(&mut state), TickResult::Moved);
        assert_eq!(state.snake, vec![50, 51]);
    }

    #[test]
    fn test_top_and_bottom_exits_are_terminal() {
        let mut engine = engine();

        let mut state = state_with(vec![75, 25], Direction::Up);
        state.target = Some(100);
        assert_eq!(engine.advance(&mut state), TickResult::GameOver);

        let mut state = state_with(vec![1925, 1975], Direction::Down);
        state.target = Some(100);
        assert_eq!(engine.advance(&mut state), TickResult::GameOver);
    }

    #[test]
    fn test_self_collision_is_terminal() {
        let mut engine = engine();

        // Head 376 moving up lands on 326, which the body still occupies
        let mut state = state_with(vec![327, 326, 325, 375, 376], Direction::Up);
        state.target = Some(100);

        assert_eq!(engine.advance(&mut state), TickResult::GameOver);
        assert!(state.game_over);
    }

    #[test]
    fn test_tail_cell_counts_as_self_collision() {
        let mut engine = engine();

        // A 2x2 loop: the head steps onto the current tail cell. The tail
        // would move away this tick, but the whole body blocks.
        let mut state = state_with(vec![325, 326, 376, 375], Direction::Up);
        state.target = Some(100);

        assert_eq!(engine.advance(&mut state), TickResult::GameOver);
    }

    #[test]
    fn test_reversal_requests_are_ignored() {
        let mut engine = engine();
        let mut state = engine.reset();
        assert_eq!(state.direction, Direction::Right);

        for _ in 0..3 {
            engine.set_direction(&mut state, Direction::Left);
            assert_eq!(state.direction, Direction::Right);
        }

        engine.set_direction(&mut state, Direction::Down);
        assert_eq!(state.direction, Direction::Down);

        engine.set_direction(&mut state, Direction::Up);
        assert_eq!(state.direction, Direction::Down);
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.target = Some(0);
        state.game_over = true;

        let before = state.clone();

        assert_eq!(engine.advance(&mut state), TickResult::GameOver);
        assert_eq!(state, before);

        engine.set_direction(&mut state, Direction::Down);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_after_play_restores_spawn() {
        let mut engine = engine();
        let mut state = engine.reset();

        // Play a few ticks, eat once
        state.target = Some(329);
        engine.advance(&mut state);
        state.target = Some(0);
        engine.advance(&mut state);
        engine.set_direction(&mut state, Direction::Down);
        engine.advance(&mut state);
        assert_ne!(state.snake, vec![325, 326, 327, 328]);

        let state = engine.reset();

        assert_eq!(state.snake, vec![325, 326, 327, 328]);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.target, None);
        assert!(!state.game_over);
    }

    #[test]
    fn test_place_target_only_returns_free_cells() {
        // On a 2x2 board with three cells occupied, the single free cell
        // is the only possible sample.
        let config = GameConfig {
            grid_width: 2,
            grid_height: 2,
            ..Default::default()
        };
        let mut engine = GameEngine::new(config);

        for _ in 0..20 {
            assert_eq!(engine.place_target(&[0, 1, 3]), 2);
        }
    }

    #[test]
    fn test_growth_law_over_a_steered_run() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.target = Some(0);

        // Walk a rectangle; no tick should grow, die, or duplicate a cell
        let legs = [
            (Direction::Right, 3),
            (Direction::Down, 3),
            (Direction::Left, 3),
            (Direction::Up, 3),
        ];
        for (direction, ticks) in legs {
            engine.set_direction(&mut state, direction);
            for _ in 0..ticks {
                assert_eq!(engine.advance(&mut state), TickResult::Moved);
                assert_eq!(state.len(), 4);

                let mut cells = state.snake.clone();
                cells.sort_unstable();
                cells.dedup();
                assert_eq!(cells.len(), 4, "body holds a duplicate cell");
            }
        }
    }

    #[test]
    fn test_target_never_lands_on_body_across_grows() {
        let mut engine = engine();
        let mut state = engine.reset();

        for _ in 0..5 {
            state.target = Some(state.head() + 1);
            assert_eq!(engine.advance(&mut state), TickResult::Grew);

            let target = state.target.unwrap();
            assert!(!state.occupies(target));
        }
        assert_eq!(state.score, 5);
        assert_eq!(state.len(), 9);
    }
}

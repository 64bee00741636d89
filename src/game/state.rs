use super::direction::Direction;
use super::grid::Grid;

/// Linear index of a grid cell.
pub type Cell = u32;

/// Complete game state.
///
/// The state is owned by the caller and mutated only through
/// [`GameEngine`](super::engine::GameEngine) transitions; renderers read
/// it and never write.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    /// Body cells, tail first: the head is the last element.
    pub snake: Vec<Cell>,
    /// Direction applied to the head on the next tick
    pub direction: Direction,
    /// The mouse the snake is chasing; unset between a restart and the
    /// next tick
    pub target: Option<Cell>,
    pub score: u32,
    pub game_over: bool,
}

impl GameState {
    pub fn new(grid: Grid, snake: Vec<Cell>, direction: Direction) -> Self {
        Self {
            grid,
            snake,
            direction,
            target: None,
            score: 0,
            game_over: false,
        }
    }

    /// The leading segment.
    pub fn head(&self) -> Cell {
        *self.snake.last().unwrap()
    }

    /// The trailing (oldest) segment.
    pub fn tail(&self) -> Cell {
        self.snake[0]
    }

    /// Whether any snake segment occupies the cell.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Check if the snake has no segments (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Segment cells with their 1-based labels, tail first, for the
    /// diagnostic segment listing.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.snake.iter().enumerate().map(|(i, &cell)| (i + 1, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(
            Grid::new(50, 40),
            vec![325, 326, 327, 328],
            Direction::Right,
        )
    }

    #[test]
    fn test_head_and_tail() {
        let state = state();
        assert_eq!(state.head(), 328);
        assert_eq!(state.tail(), 325);
        assert_eq!(state.len(), 4);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_occupancy() {
        let state = state();
        assert!(state.occupies(325));
        assert!(state.occupies(328));
        assert!(!state.occupies(329));
    }

    #[test]
    fn test_segment_labels_are_one_based() {
        let state = state();
        let segments: Vec<_> = state.segments().collect();
        assert_eq!(segments, vec![(1, 325), (2, 326), (3, 327), (4, 328)]);
    }

    #[test]
    fn test_fresh_state_has_no_target() {
        let state = state();
        assert_eq!(state.target, None);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
    }
}

//! Grid snake: segments, heading and movement rules.

use std::collections::VecDeque;

/// Minimum length the snake keeps when shrinking.
pub const MIN_LENGTH: usize = 3;

/// A board coordinate. Signed so a head that just left the board can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

/// Snake heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Outcome of checking the head after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    None,
    Wall,
    SelfBite,
}

/// The snake on a `width` x `height` board. Index 0 of `segments` is the head.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: VecDeque<Cell>,
    direction: Direction,
    next_direction: Direction,
    max_length: usize,
}

impl Snake {
    /// Spawn a length-3 snake at the board centre, heading right.
    pub fn new(board_width: u16, board_height: u16) -> Self {
        let start = Cell::new(i32::from(board_width) / 2, i32::from(board_height) / 2);
        let segments = (0..MIN_LENGTH as i32)
            .map(|offset| Cell::new(start.x - offset, start.y))
            .collect();

        Self {
            segments,
            direction: Direction::Right,
            next_direction: Direction::Right,
            max_length: usize::from(board_width) * usize::from(board_height),
        }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Queue a heading change. Reversing onto the current heading is refused.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Adopt the queued heading and move one cell; the body follows the head.
    pub fn advance(&mut self) {
        self.direction = self.next_direction;
        let new_head = self.head().step(self.direction);
        self.segments.pop_back();
        self.segments.push_front(new_head);
    }

    /// Extend by duplicating the tail; the copy separates on the next move.
    pub fn grow(&mut self) {
        if self.segments.len() < self.max_length {
            if let Some(&tail) = self.segments.back() {
                self.segments.push_back(tail);
            }
        }
    }

    /// Drop up to `amount` tail segments without going below [`MIN_LENGTH`].
    pub fn shrink(&mut self, amount: usize) {
        for _ in 0..amount {
            if self.segments.len() <= MIN_LENGTH {
                break;
            }
            self.segments.pop_back();
        }
    }

    /// Check the head against the walls and the body.
    ///
    /// With `phase` set, a head outside the board wraps to the opposite edge instead of
    /// colliding.
    pub fn check_collision(&mut self, board_width: u16, board_height: u16, phase: bool) -> Collision {
        let width = i32::from(board_width);
        let height = i32::from(board_height);
        let head = self.head();
        let outside = head.x < 0 || head.x >= width || head.y < 0 || head.y >= height;

        if outside {
            if !phase {
                return Collision::Wall;
            }
            self.segments[0] = Cell::new(head.x.rem_euclid(width), head.y.rem_euclid(height));
        }

        let head = self.head();
        if self.segments.iter().skip(1).any(|&segment| segment == head) {
            Collision::SelfBite
        } else {
            Collision::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_centered_heading_right() {
        let snake = Snake::new(40, 30);
        let cells: Vec<Cell> = snake.segments().collect();
        assert_eq!(
            cells,
            vec![Cell::new(20, 15), Cell::new(19, 15), Cell::new(18, 15)]
        );
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn refuses_reversal() {
        let mut snake = Snake::new(40, 30);
        assert!(!snake.change_direction(Direction::Left));
        snake.advance();
        assert_eq!(snake.head(), Cell::new(21, 15));

        assert!(snake.change_direction(Direction::Up));
        // Still heading right until the next move, so Left is checked against Right.
        assert!(!snake.change_direction(Direction::Left));
        snake.advance();
        assert_eq!(snake.head(), Cell::new(21, 14));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn body_follows_head() {
        let mut snake = Snake::new(10, 10);
        snake.change_direction(Direction::Down);
        snake.advance();
        let cells: Vec<Cell> = snake.segments().collect();
        assert_eq!(cells, vec![Cell::new(5, 6), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn grow_and_shrink_respect_bounds() {
        let mut snake = Snake::new(10, 10);
        snake.grow();
        snake.grow();
        assert_eq!(snake.len(), 5);

        snake.shrink(2);
        assert_eq!(snake.len(), 3);
        snake.shrink(2);
        assert_eq!(snake.len(), MIN_LENGTH);

        let mut tiny = Snake::new(3, 1);
        tiny.grow();
        assert_eq!(tiny.len(), 3, "cannot outgrow a full board");
    }

    #[test]
    fn wall_collision_and_phase_wrap() {
        let mut snake = Snake::new(6, 6);
        for _ in 0..3 {
            snake.advance();
        }
        assert_eq!(snake.head(), Cell::new(6, 3));
        assert_eq!(snake.check_collision(6, 6, false), Collision::Wall);

        assert_eq!(snake.check_collision(6, 6, true), Collision::None);
        assert_eq!(snake.head(), Cell::new(0, 3));
    }

    #[test]
    fn self_bite_detected() {
        let mut snake = Snake::new(20, 20);
        for _ in 0..3 {
            snake.grow();
        }
        snake.advance();
        snake.advance();
        snake.advance();
        snake.change_direction(Direction::Down);
        snake.advance();
        snake.change_direction(Direction::Left);
        snake.advance();
        snake.change_direction(Direction::Up);
        snake.advance();
        assert_eq!(snake.check_collision(20, 20, false), Collision::SelfBite);
    }
}

//! Food kinds, their spawn odds and placement on free cells.

use crate::game::snake::{Cell, Snake};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Kinds of food; every kind except `Normal` carries a special effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    /// Grows the snake.
    Normal,
    /// Temporary speed boost.
    Speed,
    /// Double score for a while.
    Double,
    /// High score bonus.
    Golden,
    /// Removes two tail segments.
    Shrink,
    /// Temporary wall phasing.
    Phase,
    /// Large score bonus, rare.
    Mega,
}

impl FoodKind {
    pub const ALL: [FoodKind; 7] = [
        FoodKind::Normal,
        FoodKind::Speed,
        FoodKind::Double,
        FoodKind::Golden,
        FoodKind::Shrink,
        FoodKind::Phase,
        FoodKind::Mega,
    ];

    /// Map a d100 roll (0..100) onto a kind.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=49 => FoodKind::Normal,
            50..=64 => FoodKind::Speed,
            65..=74 => FoodKind::Double,
            75..=84 => FoodKind::Golden,
            85..=91 => FoodKind::Shrink,
            92..=97 => FoodKind::Phase,
            _ => FoodKind::Mega,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_roll(rng.gen_range(0..100))
    }

    pub fn is_special(self) -> bool {
        self != FoodKind::Normal
    }

    pub fn name(self) -> &'static str {
        match self {
            FoodKind::Normal => "food",
            FoodKind::Speed => "speed food",
            FoodKind::Double => "double food",
            FoodKind::Golden => "golden food",
            FoodKind::Shrink => "shrink food",
            FoodKind::Phase => "phase food",
            FoodKind::Mega => "MEGA food",
        }
    }
}

/// A piece of food on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

impl Food {
    /// Place food of a random kind on a uniformly chosen cell the snake does not occupy.
    ///
    /// Returns `None` when the snake covers the whole board.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        snake: &Snake,
        board_width: u16,
        board_height: u16,
    ) -> Option<Self> {
        let width = i32::from(board_width);
        let height = i32::from(board_height);
        let cell = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .filter(|&cell| !snake.occupies(cell))
            .choose(rng)?;

        Some(Self {
            cell,
            kind: FoodKind::random(rng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn roll_table_boundaries() {
        assert_eq!(FoodKind::from_roll(0), FoodKind::Normal);
        assert_eq!(FoodKind::from_roll(49), FoodKind::Normal);
        assert_eq!(FoodKind::from_roll(50), FoodKind::Speed);
        assert_eq!(FoodKind::from_roll(65), FoodKind::Double);
        assert_eq!(FoodKind::from_roll(75), FoodKind::Golden);
        assert_eq!(FoodKind::from_roll(85), FoodKind::Shrink);
        assert_eq!(FoodKind::from_roll(92), FoodKind::Phase);
        assert_eq!(FoodKind::from_roll(97), FoodKind::Phase);
        assert_eq!(FoodKind::from_roll(98), FoodKind::Mega);
        assert_eq!(FoodKind::from_roll(99), FoodKind::Mega);
    }

    #[test]
    fn only_normal_is_plain() {
        let special: Vec<_> = FoodKind::ALL.iter().filter(|k| k.is_special()).collect();
        assert_eq!(special.len(), 6);
        assert!(!FoodKind::Normal.is_special());
    }

    #[test]
    fn never_spawns_on_snake() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let snake = Snake::new(5, 5);
        for _ in 0..500 {
            let food = Food::spawn(&mut rng, &snake, 5, 5).unwrap();
            assert!(!snake.occupies(food.cell));
            assert!((0..5).contains(&food.cell.x));
            assert!((0..5).contains(&food.cell.y));
        }
    }

    #[test]
    fn full_board_has_no_food() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut snake = Snake::new(3, 1);
        // Spawned tail sits at x = -1; one step right covers all three cells.
        snake.advance();
        assert!(Food::spawn(&mut rng, &snake, 3, 1).is_none());
    }

    #[test]
    fn seeded_spawns_are_reproducible() {
        let snake = Snake::new(20, 20);
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                Food::spawn(&mut a, &snake, 20, 20),
                Food::spawn(&mut b, &snake, 20, 20)
            );
        }
    }
}

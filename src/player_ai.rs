use rand::Rng;

use crate::{board::BoardView, coordinate::Coordinate, player::TargetSource};

/// Computer opponent that fires at uniformly random cells.
///
/// It does not remember its own shots, so repeats are possible and are
/// simply rejected and redrawn.
pub struct RandomTarget<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomTarget<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TargetSource for RandomTarget<R> {
    fn next_target(&mut self, view: &BoardView<'_>) -> Option<Coordinate> {
        let size = view.size();
        if size == 0 {
            return None;
        }
        let row = self.rng.random_range(0..size);
        let col = self.rng.random_range(0..size);
        Some(Coordinate::new(row as i32, col as i32))
    }
}

//! Toroidal scroll over a [`Grid`].
//!
//! One `update` rotates the grid by exactly one cell along the active axis.
//! The edge row or column re-enters on the opposite side, so the transform is
//! a permutation: `rows()` vertical steps or `cols()` horizontal steps return
//! the original grid.

use crate::grid::{Grid, GridError};
use crate::pattern::BANNER;
use core_events::{Direction, ProgramSignal};

#[derive(Debug, Clone)]
pub struct ScrollBuffer {
    grid: Grid,
    direction: Direction,
    ticks: u64,
}

impl ScrollBuffer {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            direction: Direction::default(),
            ticks: 0,
        }
    }

    /// Buffer over the built-in banner, scrolling right.
    pub fn with_banner() -> Result<Self, GridError> {
        Ok(Self::new(Grid::from_rows(BANNER)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Affects only the next `update`; the grid is untouched.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction {
            tracing::debug!(
                target: "grid",
                from = self.direction.as_str(),
                to = direction.as_str(),
                "direction_changed"
            );
        }
        self.direction = direction;
    }

    /// Apply a decoded signal: Move signals set the direction, anything else
    /// leaves it as is. Returns the direction now in effect.
    pub fn apply_signal(&mut self, signal: ProgramSignal) -> Direction {
        if let Some(direction) = signal.direction() {
            self.set_direction(direction);
        }
        self.direction
    }

    /// Number of completed updates.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Shift the grid one cell in the current direction, wrapping around.
    pub fn update(&mut self) {
        let cols = self.grid.cols();
        match self.direction {
            // last row re-enters at the top
            Direction::Down => self.grid.cells_mut().rotate_right(cols),
            // first row re-enters at the bottom
            Direction::Up => self.grid.cells_mut().rotate_left(cols),
            Direction::Right => {
                for row in self.grid.rows_mut() {
                    row.rotate_right(1);
                }
            }
            Direction::Left => {
                for row in self.grid.rows_mut() {
                    row.rotate_left(1);
                }
            }
        }
        self.ticks += 1;
    }
}

//! Property tests for the toroidal scroll: rectangularity, round trip and
//! content conservation.

use core_events::Direction;
use core_grid::{Grid, ScrollBuffer};
use proptest::prelude::*;

fn grid_strategy() -> impl Strategy<Value = Vec<String>> {
    (1usize..8, 1usize..12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['%', ' ', '#', 'x', 'é']), cols)
                .prop_map(|chars| chars.into_iter().collect::<String>()),
            rows,
        )
    })
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn full_cycle_restores_grid(rows in grid_strategy(), d in direction_strategy()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let period = if d.is_vertical() { grid.rows() } else { grid.cols() };
        let mut buf = ScrollBuffer::new(grid.clone());
        buf.set_direction(d);
        for _ in 0..period {
            buf.update();
        }
        prop_assert_eq!(buf.grid(), &grid);
    }

    #[test]
    fn dimensions_and_content_conserved(
        rows in grid_strategy(),
        steps in prop::collection::vec(direction_strategy(), 0..40),
    ) {
        let grid = Grid::from_rows(&rows).unwrap();
        let counts = grid.char_counts();
        let mut buf = ScrollBuffer::new(grid.clone());
        for d in steps {
            buf.set_direction(d);
            buf.update();
            prop_assert_eq!(buf.grid().rows(), grid.rows());
            prop_assert_eq!(buf.grid().cols(), grid.cols());
            prop_assert!(buf.grid().iter_rows().all(|r| r.len() == grid.cols()));
        }
        prop_assert_eq!(buf.grid().char_counts(), counts);
    }

    // k steps one way then k steps back is the identity.
    #[test]
    fn opposite_directions_cancel(rows in grid_strategy(), k in 0usize..20, vertical in any::<bool>()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let (there, back) = if vertical {
            (Direction::Down, Direction::Up)
        } else {
            (Direction::Right, Direction::Left)
        };
        let mut buf = ScrollBuffer::new(grid.clone());
        buf.set_direction(there);
        for _ in 0..k {
            buf.update();
        }
        buf.set_direction(back);
        for _ in 0..k {
            buf.update();
        }
        prop_assert_eq!(buf.grid(), &grid);
    }

    // Direction persists across updates until changed.
    #[test]
    fn direction_persists(rows in grid_strategy(), d in direction_strategy(), n in 1usize..10) {
        let mut buf = ScrollBuffer::new(Grid::from_rows(&rows).unwrap());
        buf.set_direction(d);
        let mut expected = buf.clone();
        for _ in 0..n {
            buf.update();
            prop_assert_eq!(buf.direction(), d);
        }
        for _ in 0..n {
            expected.set_direction(d);
            expected.update();
        }
        prop_assert_eq!(buf.grid(), expected.grid());
    }
}

#[test]
fn banner_round_trips_horizontally_and_vertically() {
    let mut buf = ScrollBuffer::with_banner().unwrap();
    let original = buf.grid().clone();
    for _ in 0..original.cols() {
        buf.update();
    }
    assert_eq!(buf.grid(), &original);
    buf.set_direction(Direction::Down);
    for _ in 0..original.rows() {
        buf.update();
    }
    assert_eq!(buf.grid(), &original);
    assert_eq!(buf.ticks() as usize, original.cols() + original.rows());
}

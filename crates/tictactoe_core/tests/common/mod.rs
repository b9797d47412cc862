//! Shared helpers for integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use tictactoe_core::{Cell, Grid, Mark, TieBreaker};

/// Parses `"XX. OO. ..."` style grids; anything but X and O is empty.
pub fn grid(cells: &str) -> Grid {
    let mut parsed = [Cell::Empty; 9];
    let marks = cells.chars().filter(|c| !c.is_whitespace());
    for (slot, ch) in parsed.iter_mut().zip(marks) {
        *slot = match ch {
            'X' => Cell::Occupied(Mark::X),
            'O' => Cell::Occupied(Mark::O),
            _ => Cell::Empty,
        };
    }
    Grid::from_cells(parsed)
}

/// Replays a fixed list of picks, then repeats the last one.
pub struct Scripted(pub Vec<usize>);

impl TieBreaker for Scripted {
    fn pick(&mut self, len: usize) -> usize {
        let next = if self.0.len() > 1 { self.0.remove(0) } else { self.0[0] };
        next % len
    }
}

pub fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Mark::X)),
        Just(Cell::Occupied(Mark::O)),
    ]
}

/// Any well-typed grid, reachable or not.
pub fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform9(arb_cell()).prop_map(Grid::from_cells)
}

pub fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

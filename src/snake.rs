use std::collections::VecDeque;

use crate::Cell;
use crate::grid::Grid;
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved(Snake),
    Ate(Snake),
    Crashed
}

/// Occupied cells, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left))
    }
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Snake { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.iter().any(|segment| *segment == cell)
    }

    /// One step towards `heading`. The receiver is left untouched; the moved
    /// snake comes back inside the result.
    pub fn advance(&self, heading: Direction, food: Cell, grid: &Grid) -> MoveResult {
        let (x, y) = self.head();
        let (dx, dy) = heading.offset();
        let new_head = (x + dx, y + dy);

        // The tail still counts: it has not moved out of the way yet
        if !grid.contains(new_head) || self.occupies(new_head) {
            return Crashed;
        }

        let mut body = self.body.clone();
        body.push_front(new_head);

        if new_head == food {
            Ate(Snake { body })
        } else {
            body.pop_back();
            Moved(Snake { body })
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: &[Cell]) -> Self {
        assert!(!cells.is_empty());
        Snake { body: cells.iter().copied().collect() }
    }
}

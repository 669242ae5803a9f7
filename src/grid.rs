use crate::Cell;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const CELL_SIZE: i32 = 20;

/// Bounds of the playing field, in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    pub fn from_window(window_width: i32, window_height: i32, cell_size: i32) -> Self {
        Grid::new(window_width / cell_size, window_height / cell_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, (x, y): Cell) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_maps_to_forty_by_thirty() {
        let grid = Grid::from_window(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE);
        assert_eq!((grid.width(), grid.height()), (40, 30));
        assert_eq!(grid.center(), (20, 15));
    }

    #[test]
    fn contains_is_half_open() {
        let grid = Grid::new(40, 30);
        assert!(grid.contains((0, 0)));
        assert!(grid.contains((39, 29)));
        assert!(!grid.contains((40, 10)));
        assert!(!grid.contains((10, 30)));
        assert!(!grid.contains((-1, 15)));
        assert!(!grid.contains((5, -1)));
    }
}

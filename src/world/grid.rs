use crate::{Cell, Pos, World};

/// row major storage of a square world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// builds a grid from its rows, panics unless they form a square.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == size),
            "rows do not form a {size}x{size} square"
        );
        let cells = rows.into_iter().flatten().collect();
        Self { size, cells }
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "{pos:?} is outside of a {0}x{0} grid",
            self.size
        );
        pos.row as usize * self.size + pos.col as usize
    }
}

impl World for Grid {
    fn blank(size: usize) -> Self {
        let cells = vec![Cell::default(); size * size];
        Self { size, cells }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        let index = self.index(pos);
        self.cells[index] = cell;
    }
}

use std::hash::{Hash, Hasher};

use metrohash::MetroHash64;
use rand::Rng;

use crate::{moore_offsets, pos, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Tissue,
    Cancer {
        age: u32,
    },
    /// white blood cell, static for now.
    Immune,
    Dead,
}

impl Cell {
    pub fn cancer() -> Self {
        Cell::Cancer { age: 0 }
    }

    pub fn is_cancer(&self) -> bool {
        matches!(self, Cell::Cancer { .. })
    }

    pub fn is_immune(&self) -> bool {
        matches!(self, Cell::Immune)
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Tissue => 'T',
            Cell::Cancer { .. } => 'C',
            Cell::Immune => 'W',
            Cell::Dead => 'X',
        }
    }
}

/// number of cells in each state for one generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    pub tissue: usize,
    pub cancer: usize,
    pub immune: usize,
    pub dead: usize,
}

impl Census {
    fn count(&mut self, cell: Cell) {
        match cell {
            Cell::Tissue => self.tissue += 1,
            Cell::Cancer { .. } => self.cancer += 1,
            Cell::Immune => self.immune += 1,
            Cell::Dead => self.dead += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.tissue + self.cancer + self.immune + self.dead
    }
}

/// a square, fixed size generation of cells.
pub trait World: Clone + PartialEq {
    /// a `size` by `size` world filled with tissue.
    fn blank(size: usize) -> Self;
    fn size(&self) -> usize;
    /// panics when `pos` is out of the world.
    fn get(&self, pos: Pos) -> Cell;
    /// panics when `pos` is out of the world.
    fn set(&mut self, pos: Pos, cell: Cell);

    /// a world where every cell is drawn independently from `population`.
    fn seeded<R>(size: usize, population: &Population, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut world = Self::blank(size);
        for pos in world.positions() {
            world.set(pos, population.sample(rng.gen()));
        }
        world
    }

    fn contains(&self, pos: Pos) -> bool {
        let size = self.size() as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }

    /// every coordinate, row major.
    fn positions(&self) -> Vec<Pos> {
        let size = self.size() as i32;
        (0..size)
            .flat_map(|row| (0..size).map(move |col| pos!(row, col)))
            .collect()
    }

    /// in-bounds moore neighbors of `pos`, in scan order.
    fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        moore_offsets()
            .map(|offset| pos + offset)
            .filter(|neighbor| self.contains(*neighbor))
            .collect()
    }

    fn census(&self) -> Census {
        let mut census = Census::default();
        for pos in self.positions() {
            census.count(self.get(pos));
        }
        census
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = MetroHash64::new();
        self.size().hash(&mut hasher);
        for pos in self.positions() {
            self.get(pos).hash(&mut hasher);
        }
        hasher.finish()
    }
}

pub use grid::Grid;
mod grid;

pub use population::Population;
mod population;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let grid = Grid::blank(20);
        assert_eq!(grid.neighbors(pos!(0, 0)).len(), 3);
        assert_eq!(
            grid.neighbors(pos!(0, 0)),
            vec![pos!(0, 1), pos!(1, 0), pos!(1, 1)]
        );
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let grid = Grid::blank(20);
        assert_eq!(grid.neighbors(pos!(5, 5)).len(), 8);
    }

    #[test]
    fn edge_has_five_neighbors() {
        let grid = Grid::blank(20);
        assert_eq!(grid.neighbors(pos!(0, 7)).len(), 5);
        assert_eq!(grid.neighbors(pos!(19, 19)).len(), 3);
    }

    #[test]
    fn census_counts_every_cell() {
        let mut grid = Grid::blank(4);
        grid.set(pos!(0, 0), Cell::cancer());
        grid.set(pos!(1, 1), Cell::Immune);
        grid.set(pos!(2, 2), Cell::Dead);
        grid.set(pos!(3, 3), Cell::Dead);
        let census = grid.census();
        assert_eq!(census.tissue, 12);
        assert_eq!(census.cancer, 1);
        assert_eq!(census.immune, 1);
        assert_eq!(census.dead, 2);
        assert_eq!(census.total(), 16);
    }

    #[test]
    fn fingerprint_tracks_cancer_age() {
        let mut young = Grid::blank(3);
        young.set(pos!(1, 1), Cell::Cancer { age: 1 });
        let mut old = young.clone();
        old.set(pos!(1, 1), Cell::Cancer { age: 2 });
        assert_eq!(young.fingerprint(), young.clone().fingerprint());
        assert_ne!(young.fingerprint(), old.fingerprint());
    }

    #[test]
    fn symbols() {
        assert_eq!(Cell::Tissue.symbol(), 'T');
        assert_eq!(Cell::Cancer { age: 7 }.symbol(), 'C');
        assert_eq!(Cell::Immune.symbol(), 'W');
        assert_eq!(Cell::Dead.symbol(), 'X');
    }
}

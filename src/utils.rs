use std::ops::Add;

/// a (row, col) coordinate, signed so that neighbor offsets can step outside the grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

/// the 8 moore offsets, rows then columns, both from -1 to 1, skipping the origin.
pub fn moore_offsets() -> impl Iterator<Item = Pos> {
    (-1..=1)
        .flat_map(|row| (-1..=1).map(move |col| pos!(row, col)))
        .filter(|offset| *offset != pos!(0, 0))
}

#[test]
fn test_moore_offsets_order() {
    let offsets: Vec<_> = moore_offsets().collect();
    assert_eq!(offsets.len(), 8);
    assert_eq!(offsets[0], pos!(-1, -1));
    assert_eq!(offsets[1], pos!(-1, 0));
    assert_eq!(offsets[3], pos!(0, -1));
    assert_eq!(offsets[4], pos!(0, 1));
    assert_eq!(offsets[7], pos!(1, 1));
}

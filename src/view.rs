use std::io::{self, Write};

use crate::{pos, Census, Pos, World};

pub use canvas::Canvas;
mod canvas;

const HEADER: &str = "==== Cancer Simulation ====";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// redraws the grid in place.
    #[default]
    Terminal,
    /// prints every generation one after the other.
    Plain,
}

/// the line buffered text form of a generation: a header, one line per row, a blank line.
pub fn render<W>(world: &W) -> String
where
    W: World,
{
    let size = world.size() as i32;
    let mut result = format!("{HEADER}\n");
    for row in 0..size {
        for col in 0..size {
            result.push(world.get(pos!(row, col)).symbol());
            result.push(' ');
        }
        result.push('\n');
    }
    result.push('\n');
    result
}

pub fn status(generation: usize, census: Census) -> String {
    let Census {
        tissue,
        cancer,
        immune,
        dead,
    } = census;
    format!("gen {generation}  T {tissue}  C {cancer}  W {immune}  X {dead}")
}

pub struct View<O>
where
    O: Write,
{
    mode: Mode,
    out: O,
}

impl<O> View<O>
where
    O: Write,
{
    pub fn new(mode: Mode, out: O) -> Self {
        Self { mode, out }
    }

    pub fn show<W>(&mut self, world: &W, generation: usize) -> io::Result<()>
    where
        W: World,
    {
        match self.mode {
            Mode::Plain => {
                write!(self.out, "{}", render(world))?;
                self.out.flush()
            }
            Mode::Terminal => draw(world, generation).display(&mut self.out),
        }
    }
}

fn draw<W>(world: &W, generation: usize) -> Canvas
where
    W: World,
{
    let size = world.size();
    let width = (size * 2).max(HEADER.len());
    // header, grid rows, status
    let mut canvas = Canvas::new(width, size + 2);
    canvas.write_line(0, HEADER);
    canvas.layer(|Pos { row, col }| {
        let cell_row = row - 1;
        let in_grid = (0..size as i32).contains(&cell_row) && col % 2 == 0;
        let cell_pos = pos!(cell_row, col / 2);
        (in_grid && world.contains(cell_pos)).then(|| world.get(cell_pos).symbol())
    });
    canvas.write_line(size + 1, &status(generation, world.census()));
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Grid};

    fn small() -> Grid {
        Grid::from_rows(vec![
            vec![Cell::Tissue, Cell::cancer()],
            vec![Cell::Immune, Cell::Dead],
        ])
    }

    #[test]
    fn render_matches_console_layout() {
        assert_eq!(
            render(&small()),
            "==== Cancer Simulation ====\nT C \nW X \n\n"
        );
    }

    #[test]
    fn status_lists_census() {
        let text = status(3, small().census());
        assert_eq!(text, "gen 3  T 1  C 1  W 1  X 1");
    }

    #[test]
    fn terminal_draw_places_symbols() {
        let lines: Vec<_> = draw(&small(), 0).lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("T C "));
        assert!(lines[2].starts_with("W X "));
        assert!(lines[3].starts_with("gen 0"));
    }

    #[test]
    fn plain_view_writes_render() {
        let mut out = Vec::new();
        View::new(Mode::Plain, &mut out).show(&small(), 0).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render(&small()));
    }
}

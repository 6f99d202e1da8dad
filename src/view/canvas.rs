use std::io::{self, Write};

use crate::Pos;

/// a fixed block of text lines, drawn at the top left of the terminal.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    width: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let lines = (0..height).map(|_| vec![' '; width]).collect();
        Self { lines, width }
    }

    /// paints every position for which `f` returns a char, leaving the others untouched.
    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for (row, line) in self.lines.iter_mut().enumerate() {
            for (col, slot) in line.iter_mut().enumerate() {
                let pos = Pos {
                    row: row as i32,
                    col: col as i32,
                };
                if let Some(char) = f(pos) {
                    *slot = char;
                }
            }
        }
    }

    /// overwrites a whole line with `text`, truncated to the canvas width.
    pub fn write_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            let mut chars = text.chars().chain(std::iter::repeat(' '));
            line.iter_mut()
                .take(self.width)
                .for_each(|slot| *slot = chars.next().unwrap_or(' '));
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| line.iter().collect())
    }

    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        let clear = termion::clear::All;
        write!(out, "{clear}")?;
        for (index, line) in self.lines().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            write!(out, "{goto}{line}")?;
        }
        writeln!(out)?;
        out.flush()
    }
}

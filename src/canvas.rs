//! The play field: one row of character cells.
//!
//! Objects draw themselves by overwriting a range of cells; anything that
//! falls outside the row is dropped.  `render` rewrites the same terminal
//! line each frame so the game animates in place.

use std::fmt;
use std::io::Write;

use crossterm::{style::Print, QueueableCommand};

const BLANK: char = ' ';

#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    cells: Vec<char>,
}

impl Canvas {
    /// A blank canvas `size` cells wide.
    pub fn new(size: usize) -> Self {
        Canvas {
            cells: vec![BLANK; size],
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Overwrite `[pos, pos + len(shape))` with `shape`, skipping cells that
    /// fall outside the canvas.  Invisible shapes leave the buffer untouched.
    pub fn draw(&mut self, shape: &str, pos: i32, visible: bool) {
        if !visible {
            return;
        }
        let size = self.cells.len() as i64;
        for (offset, glyph) in shape.chars().enumerate() {
            let cell = pos as i64 + offset as i64;
            if cell < 0 || cell >= size {
                continue;
            }
            self.cells[cell as usize] = glyph;
        }
    }

    /// Glyph at `index`, if it lies on the canvas.
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied()
    }

    pub fn as_string(&self) -> String {
        self.cells.iter().collect()
    }

    /// Write the row followed by a carriage return (no newline) and flush.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(Print(self.as_string()))?;
        out.queue(Print('\r'))?;
        out.flush()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

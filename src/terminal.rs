//! Terminal setup and teardown for the binary.
//!
//! Once raw mode is on, every way out (normal return, error, panic unwind)
//! has to put the terminal back.  `TerminalGuard` owns the output stream and
//! does that in `Drop`.

use std::io::Write;

use crossterm::{cursor, terminal, ExecutableCommand};

pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enable raw mode and hide the cursor.  If hiding fails the guard is
    /// dropped on the way out, so raw mode is switched off again.
    pub fn enter(out: W) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = TerminalGuard::restoring(out);
        guard.hide_cursor()?;
        Ok(guard)
    }

    /// Wrap `out` without touching terminal modes.  Dropping it still runs
    /// the full restore.
    pub fn restoring(out: W) -> Self {
        TerminalGuard { out }
    }

    pub fn hide_cursor(&mut self) -> std::io::Result<()> {
        self.out.execute(cursor::Hide)?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.execute(cursor::Show);
        let _ = terminal::disable_raw_mode();
        // Leave the game line behind and start the shell on a fresh one.
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}

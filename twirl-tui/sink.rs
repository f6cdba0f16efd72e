use crossterm::{cursor, queue, style, terminal};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[cfg(test)]
#[path = "./sink.tests.rs"]
mod sink_tests;

/// Destination for rendered spinner blocks.
pub trait RenderSink {
    /// Atomically replaces the previously written block with a new one.
    fn replace(&mut self, block: &str) -> io::Result<()>;

    /// Erases the previously written block without writing a new one.
    fn clear(&mut self) -> io::Result<()>;

    /// Leaves the previously written block in place and releases the cursor below it.
    fn finish(&mut self) -> io::Result<()>;
}

/// Redraws blocks of lines in place using ANSI escape sequences.\
/// The cursor is hidden while a block is on screen and restored on clear, finish or drop.
pub struct TerminalSink<W: Write> {
    writer: W,
    lines: usize,
    cursor_hidden: bool,
}

impl TerminalSink<io::Stderr> {
    /// Creates new [`TerminalSink`] writing to the standard error stream.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Creates new [`TerminalSink`] writing to the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: 0,
            cursor_hidden: false,
        }
    }

    fn rewind(&mut self) -> io::Result<()> {
        match self.lines {
            0 => Ok(()),
            1 => queue!(self.writer, cursor::MoveToColumn(0)),
            lines => queue!(self.writer, cursor::MoveToPreviousLine((lines - 1) as u16)),
        }
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            queue!(self.writer, cursor::Show)?;
            self.cursor_hidden = false;
        }

        Ok(())
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn replace(&mut self, block: &str) -> io::Result<()> {
        if !self.cursor_hidden {
            queue!(self.writer, cursor::Hide)?;
            self.cursor_hidden = true;
        }

        self.rewind()?;
        queue!(
            self.writer,
            terminal::Clear(terminal::ClearType::FromCursorDown),
            style::Print(block)
        )?;
        self.lines = block.lines().count();

        self.writer.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.lines > 0 {
            self.rewind()?;
            queue!(self.writer, terminal::Clear(terminal::ClearType::FromCursorDown))?;
            self.lines = 0;
        }

        self.show_cursor()?;
        self.writer.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.lines > 0 {
            queue!(self.writer, style::Print("\n"))?;
            self.lines = 0;
        }

        self.show_cursor()?;
        self.writer.flush()
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = queue!(self.writer, cursor::Show);
            let _ = self.writer.flush();
        }
    }
}

/// Sink that discards all blocks, used in the debug mode.
#[derive(Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn replace(&mut self, _block: &str) -> io::Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that records all operations, used by headless consumers.
#[derive(Default, Clone)]
pub struct CaptureSink {
    state: Arc<Mutex<CaptureState>>,
}

#[derive(Default)]
struct CaptureState {
    blocks: Vec<String>,
    clears: usize,
    finishes: usize,
}

impl CaptureSink {
    /// Returns all blocks received so far.
    pub fn blocks(&self) -> Vec<String> {
        self.state.lock().expect("capture sink mutex poisoned").blocks.clone()
    }

    /// Returns the most recent block.
    pub fn last_block(&self) -> Option<String> {
        self.state.lock().expect("capture sink mutex poisoned").blocks.last().cloned()
    }

    /// Returns how many blocks were received.
    pub fn replaces(&self) -> usize {
        self.state.lock().expect("capture sink mutex poisoned").blocks.len()
    }

    /// Returns how many times the block was erased.
    pub fn clears(&self) -> usize {
        self.state.lock().expect("capture sink mutex poisoned").clears
    }

    /// Returns how many times the block was released in place.
    pub fn finishes(&self) -> usize {
        self.state.lock().expect("capture sink mutex poisoned").finishes
    }
}

impl RenderSink for CaptureSink {
    fn replace(&mut self, block: &str) -> io::Result<()> {
        self.state.lock().expect("capture sink mutex poisoned").blocks.push(block.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.state.lock().expect("capture sink mutex poisoned").clears += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.state.lock().expect("capture sink mutex poisoned").finishes += 1;
        Ok(())
    }
}

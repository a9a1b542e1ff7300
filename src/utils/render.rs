//! Render sinks: where frames go during a run

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Output capability used by the run loop
///
/// Keeps terminal handling out of the evolution code. Sinks are `Send` so a
/// run can be moved into a dedicated thread pool.
pub trait RenderSink: Send {
    /// Wipe whatever was shown before
    fn clear(&mut self) -> Result<()>;

    /// Show a frame, one string per line
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;
}

/// Draws frames on the terminal, clearing the screen first
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> RenderSink for TerminalSink<W> {
    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every frame in memory
#[derive(Debug, Default)]
pub struct BufferSink {
    pub frames: Vec<Vec<String>>,
    pub clears: usize,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for BufferSink {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        self.frames.push(lines.to_vec());
        Ok(())
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_lines(&mut self, _lines: &[String]) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_sink_writes_escape_and_lines() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.clear().unwrap();
        sink.write_lines(&["Generation 1:".to_string(), "O.".to_string()]).unwrap();

        let written = String::from_utf8(sink.out).unwrap();
        assert!(written.starts_with('\x1b'));
        assert!(written.ends_with("Generation 1:\nO.\n"));
    }

    #[test]
    fn test_buffer_sink() {
        let mut sink = BufferSink::new();
        sink.clear().unwrap();
        sink.write_lines(&["a".to_string()]).unwrap();
        assert_eq!(sink.clears, 1);
        assert_eq!(sink.frames, vec![vec!["a".to_string()]]);
    }
}

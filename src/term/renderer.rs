//! TerminalRenderer: flushes view lines to a real terminal.
//!
//! Full clear-and-redraw per frame; the screen is a dozen short lines, so
//! diffing would buy nothing here.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::game_view::{LineKind, ViewLine};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, lines: &[ViewLine]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        for (row, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, row as u16))?;
            self.apply_style(line.kind)?;
            self.stdout.queue(Print(&line.text))?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, kind: LineKind) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        match kind {
            LineKind::Title => {
                self.stdout.queue(SetForegroundColor(Color::Magenta))?;
                self.stdout.queue(SetAttribute(Attribute::Bold))?;
            }
            LineKind::Message => {
                self.stdout.queue(SetForegroundColor(Color::White))?;
                self.stdout.queue(SetAttribute(Attribute::Bold))?;
            }
            LineKind::Score => {
                self.stdout.queue(SetForegroundColor(Color::Yellow))?;
            }
            LineKind::Reels => {
                self.stdout.queue(SetForegroundColor(Color::Green))?;
            }
            LineKind::Info => {
                self.stdout.queue(SetForegroundColor(Color::Grey))?;
                self.stdout.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

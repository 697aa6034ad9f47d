//! Terminal rendering for markdown output.
//!
//! Uses termimad for rich display, with plain text as the fallback.

use std::io::Write;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.quote_mark.set_fg(Color::Red);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        std::io::stdout().flush()?;
        Ok(())
    }

    /// Start a new frame of a live screen.
    ///
    /// Rich output redraws in place; plain output separates frames with a
    /// rule so it stays readable when piped.
    pub fn begin_frame(&self) -> Result<()> {
        if self.rich_enabled {
            print!("\x1b[2J\x1b[H");
        } else {
            println!("---");
        }
        std::io::stdout().flush()?;
        Ok(())
    }

    /// Short notice outside the rendered frame.
    pub fn notice(&self, message: &str) {
        if self.rich_enabled {
            eprintln!("\x1b[33m{message}\x1b[0m");
        } else {
            eprintln!("{message}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}

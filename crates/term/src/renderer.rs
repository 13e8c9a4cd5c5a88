//! TextRenderer: writes styled lines to a terminal or any other writer.
//!
//! Lines are encoded into an internal buffer with crossterm commands and
//! flushed in one write. Colour is dropped entirely when disabled, so piped
//! output stays plain text.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::style::{Line, Rgb, Span};

/// True when stdout is a terminal and `NO_COLOR` is not set.
pub fn color_supported() -> bool {
    io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none()
}

pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write a prompt without a trailing newline.
    pub fn prompt(&mut self, span: &Span) -> Result<()> {
        self.buf.clear();
        encode_span_into(span, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write one raw text line (used for JSON observations).
    pub fn raw_line(&mut self, line: &str) -> Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode lines into `out`, one `\n` after each.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        for span in &line.spans {
            encode_span_into(span, color, out)?;
        }
        out.queue(Print('\n'))?;
    }
    Ok(())
}

fn encode_span_into(span: &Span, color: bool, out: &mut Vec<u8>) -> Result<()> {
    let styled = color && (span.fg.is_some() || span.bold);
    if styled {
        if let Some(fg) = span.fg {
            out.queue(SetForegroundColor(rgb_to_color(fg)))?;
        }
        if span.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
    }
    out.queue(Print(&span.text))?;
    if styled {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Line> {
        vec![
            Line::new(vec![
                Span::plain("Queue    : "),
                Span::colored("[T 0]", Rgb::new(200, 120, 220)).bold(),
            ]),
            Line::plain("done"),
        ]
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut out = Vec::new();
        encode_lines_into(&sample(), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Queue    : [T 0]\ndone\n");
    }

    #[test]
    fn test_colored_output_resets_after_span() {
        let mut out = Vec::new();
        encode_lines_into(&sample(), true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[38;2;200;120;220m"));
        assert!(text.contains("[T 0]"));
        assert!(text.ends_with("done\n"));
    }

    #[test]
    fn test_renderer_writes_to_inner() {
        let mut renderer = TextRenderer::new(Vec::new(), false);
        renderer.draw(&sample()).unwrap();
        renderer.prompt(&Span::plain("→ ")).unwrap();
        renderer.raw_line("{}").unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "Queue    : [T 0]\ndone\n→ {}\n");
    }
}

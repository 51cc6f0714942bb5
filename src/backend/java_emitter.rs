//! Java code emitter - builds Java source strings
//!
//! This module provides the low-level line/indent buffer used by the statement and program emitters.

use super::config::IndentStyle;

/// A buffer for building Java source code with proper indentation
#[derive(Debug)]
pub struct JavaEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: String,
}

impl JavaEmitter {
    pub fn new(style: IndentStyle) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: style.unit(),
        }
    }

    /// Start at a nesting depth (used for method bodies rendered separately from the class shell)
    pub fn with_level(style: IndentStyle, level: usize) -> Self {
        let mut emitter = Self::new(style);
        emitter.indent_level = level;
        emitter
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn level(&self) -> usize {
        self.indent_level
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write text verbatim (no indentation, no newline)
    pub fn write(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{header} {{"));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write a block whose body can fail; the closing brace is only written on success.
    pub fn try_block<F, E>(&mut self, header: &str, closing: &str, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.line(&format!("{header} {{"));
        self.indent();
        f(self)?;
        self.dedent();
        self.line(closing);
        Ok(())
    }
}

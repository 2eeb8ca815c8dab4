//! Canonical call-site location encoding.
//!
//! A call site is identified by its innermost source position plus the chain
//! of positions it was inlined through. The long-form rendering of that chain
//! is the join key used to match call sites between two independent
//! compilation runs, so it must stay byte-stable as long as the source text
//! and debug position metadata are unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `(file, line, column)` source position.
///
/// A column of `0` means "no column information" and is omitted from every
/// rendering, at every chain depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    fn render_into(&self, out: &mut String) {
        out.push_str(&self.file);
        out.push(':');
        out.push_str(&self.line.to_string());
        if self.column != 0 {
            out.push(':');
            out.push_str(&self.column.to_string());
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if self.column != 0 {
            write!(f, ":{}", self.column)?;
        }
        Ok(())
    }
}

/// An ordered chain of source positions, innermost first.
///
/// Frame N+1 is the position of the already-inlined call through which frame
/// N was reached. The chain is non-empty by construction and its length is
/// bounded by the inlining depth already performed this run, so it cannot
/// contain cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationChain {
    frames: Vec<SourceLocation>,
}

impl LocationChain {
    /// Start a chain at the call site's own position.
    pub fn new(innermost: SourceLocation) -> Self {
        Self {
            frames: vec![innermost],
        }
    }

    /// Append the next-outer frame: the position of the call whose inlining
    /// produced this one.
    #[must_use]
    pub fn inlined_at(mut self, frame: SourceLocation) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn innermost(&self) -> &SourceLocation {
        &self.frames[0]
    }

    pub fn frames(&self) -> &[SourceLocation] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// `file:line[:column]` of the innermost position only. Audit-trail
    /// rendering, never a lookup key.
    pub fn short_form(&self) -> String {
        self.innermost().to_string()
    }

    /// Full chain rendering: `inner@[outer@[...]]`, recursion flattened into
    /// a single forward pass over the frames.
    pub fn long_form(&self) -> String {
        let mut out = String::new();
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                out.push_str("@[");
            }
            frame.render_into(&mut out);
        }
        for _ in 1..self.frames.len() {
            out.push(']');
        }
        out
    }
}

impl fmt::Display for LocationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_form())
    }
}

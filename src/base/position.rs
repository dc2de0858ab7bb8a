//! Line/column positions for syntax nodes.
//!
//! The raw tree measures everything in byte offsets ([`TextSize`]). Tooling
//! (structure views, diagnostics) wants 0-indexed line/column pairs; a
//! [`LineIndex`] built once per source converts between the two.

use rowan::{TextRange, TextSize};

/// A position in source code (0-indexed, column in bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A line/column range, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Byte offset → line/column conversion for one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset at which each line starts; always begins with 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(offset, _)| TextSize::new(offset as u32 + 1)),
        );
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Position of a byte offset. Offsets past the end clamp to the end.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let column = offset - self.line_starts[line];
        Position::new(line, u32::from(column) as usize)
    }

    pub fn span(&self, range: TextRange) -> Span {
        Span::new(self.position(range.start()), self.position(range.end()))
    }

    /// Byte offset of a position.
    ///
    /// `None` if the line does not exist or the column lies past the end of
    /// that line. The end of a line (its newline, or the end of the text on
    /// the last line) is a valid column.
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        let start = *self.line_starts.get(position.line)?;
        let line_len = self.line_end(position.line) - start;
        let column = TextSize::new(u32::try_from(position.column).ok()?);
        (column <= line_len).then(|| start + column)
    }

    /// Offset of the newline ending `line`, or the text length for the last line.
    fn line_end(&self, line: usize) -> TextSize {
        self.line_starts
            .get(line + 1)
            .map_or(self.len, |&next| next - TextSize::from(1))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

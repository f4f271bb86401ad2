//! Line position within a stream of records.

/// [LineCursor] tracks the number of lines consumed (or produced)
/// by successive record decoding (or encoding) operations.
/// It is passed in and returned by each cursor based call,
/// so sequencing several records is explicit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineCursor {
    line: usize,
}

impl std::fmt::Display for LineCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}", self.line)
    }
}

impl LineCursor {
    /// Cursor positioned before the first line
    pub fn new() -> Self {
        Self::default()
    }
    /// Cursor positioned after `line` consumed lines,
    /// typically to skip a file header.
    pub fn at(line: usize) -> Self {
        Self { line }
    }
    /// Number of lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }
    /// 1-based number of the next line to be consumed
    pub fn next_line_number(&self) -> usize {
        self.line + 1
    }
    /// Returns a copy of `self` advanced by `lines`
    pub fn advance(&self, lines: usize) -> Self {
        Self {
            line: self.line + lines,
        }
    }
}

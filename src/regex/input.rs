use super::Input;
use crate::ParserError;

impl Input {
    pub fn new(string: &str) -> Self {
        Self {
            string: string.to_string(),
            characters: string.chars().collect(),
            cursor: 0,
        }
    }

    /// Code points consumed so far; the next code point sits at this index.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_consumed(&self) -> bool {
        self.cursor >= self.characters.len()
    }

    pub fn next(&mut self) -> Option<char> {
        let character = self.characters.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(character)
    }

    /// Like [next](Input::next), but the end of input becomes a [ParserError]
    /// with the given reason and a caret at the cursor.
    pub fn next_or_fail(&mut self, reason: &str) -> Result<char, ParserError> {
        match self.next() {
            Some(character) => Ok(character),
            None => Err(ParserError::new(
                reason.to_string(),
                self.annotated(self.cursor),
            )),
        }
    }

    /// The `n`-th upcoming code point without consuming it; `n` is 1-based.
    pub fn lookahead(&self, n: usize) -> Option<char> {
        self.characters.get(self.cursor + n - 1).copied()
    }

    /// The upcoming code points through position `n`, cut short at the end of
    /// the input.
    pub fn lookahead_inclusive(&self, n: usize) -> &[char] {
        let end = (self.cursor + n).min(self.characters.len());
        &self.characters[self.cursor..end]
    }

    pub fn consume(&mut self, n: usize) {
        debug_assert!(self.cursor + n <= self.characters.len());
        self.cursor = (self.cursor + n).min(self.characters.len());
    }

    /// The original string with a caret line pointing at `position`. One space
    /// is emitted per preceding code point, so the caret aligns with the
    /// rendered string.
    pub fn annotated(&self, position: usize) -> String {
        let mut markers = vec![' '; position + 1];
        markers[position] = '^';
        format!("{}\n{}", self.string, markers.into_iter().collect::<String>())
    }

    /// The original string with carets at `start` and `end` joined by hyphens.
    pub fn annotated_range(&self, start: usize, end: usize) -> String {
        let mut markers = vec![' '; end + 1];
        markers[start] = '^';
        markers[end] = '^';
        for position in start + 1..end {
            markers[position] = '-';
        }
        format!("{}\n{}", self.string, markers.into_iter().collect::<String>())
    }
}

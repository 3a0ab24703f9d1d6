/// A forward-only position over the normalized expression text.
///
/// The text is held as characters so that multi-byte symbols such as `√`
/// occupy a single position. One cursor lives for exactly one parse.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos:   usize,
}

impl Cursor {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(),
               pos:   0, }
    }

    /// Returns the current position in characters.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Returns the current character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Returns the character `offset` places after the current one.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Consumes and returns the current character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Returns the text between `start` and the current position.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    /// Returns the unconsumed text.
    #[must_use]
    pub fn rest(&self) -> String {
        self.chars[self.pos.min(self.chars.len())..].iter().collect()
    }

    /// Iterates over the unconsumed characters without moving.
    pub fn lookahead(&self) -> impl Iterator<Item = char> + '_ {
        self.chars[self.pos.min(self.chars.len())..].iter().copied()
    }
}

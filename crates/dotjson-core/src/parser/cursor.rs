//! Byte-position cursor over the parser input.

/// Tracks a byte offset into the input text. Positions handed back to the
/// slicing helpers must sit on character boundaries; the parser only ever
/// stops at ASCII structural bytes, which always are.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub(crate) fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consume `b` if it is the next byte.
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn rest_starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes()[self.pos..].starts_with(prefix)
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Skip the C-locale whitespace set, one byte wider than the JSON
    /// grammar requires (vertical tab and form feed are tolerated).
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r') = self.peek() {
            self.pos += 1;
        }
    }
}

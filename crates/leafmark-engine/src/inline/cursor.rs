/// A cursor for byte-wise inline scanning with position tracking.
///
/// Delimiters are matched with [`Cursor::starts_with`]; because a delimiter is
/// itself a `&str`, a match always begins on a char boundary and the recorded
/// offsets are safe to slice with.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat.as_bytes()))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Collects the start offset of every non-overlapping occurrence of `pat`
    /// in the remaining input, consuming it.
    ///
    /// After a match the cursor skips the whole pattern, so `***` yields a
    /// single `**` occurrence at offset 0.
    pub fn find_all(&mut self, pat: &str) -> Vec<usize> {
        let mut found = Vec::new();
        if pat.is_empty() {
            return found;
        }
        while !self.eof() {
            if self.starts_with(pat) {
                found.push(self.pos());
                self.bump_n(pat.len());
            } else {
                self.bump();
            }
        }
        found
    }
}

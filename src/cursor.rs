/// Immutable view over the unconsumed part of a UTF-8 input
///
/// A cursor is `Copy`: every parsing step hands out a new cursor and the
/// old one stays valid, which is all backtracking needs. `position` is a
/// byte offset into `code` and always sits on a character boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cursor<'code> {
    Valid { code: &'code str, position: usize },
    EndOfFile { code: &'code str },
}

impl<'code> Cursor<'code> {
    pub fn new(code: &'code str) -> Self {
        Self::at(code, 0)
    }

    /// Cursor at byte offset `position`, or end of file when nothing is left
    pub(crate) fn at(code: &'code str, position: usize) -> Self {
        if position >= code.len() {
            Cursor::EndOfFile { code }
        } else {
            Cursor::Valid { code, position }
        }
    }

    /// Split off the first character
    ///
    /// Returns `None` at end of file, otherwise the head character and a
    /// cursor over everything after it.
    pub fn split_front(self) -> Option<(char, Self)> {
        match self {
            Cursor::Valid { code, position } => {
                let head = code.get(position..)?.chars().next()?;
                Some((head, Self::at(code, position + head.len_utf8())))
            }
            Cursor::EndOfFile { .. } => None,
        }
    }

    /// Move forward by `bytes`, which must land on a character boundary
    pub(crate) fn advance(self, bytes: usize) -> Self {
        let (code, position) = self.inner();
        Self::at(code, position + bytes)
    }

    /// The unconsumed input
    pub fn rest(&self) -> &'code str {
        let (code, position) = self.inner();
        code.get(position..).unwrap_or_default()
    }

    /// Slice of the input between this cursor and a later one
    pub(crate) fn consumed_until(&self, later: &Self) -> &'code str {
        let (code, start) = self.inner();
        code.get(start..later.position()).unwrap_or_default()
    }

    pub fn position(&self) -> usize {
        match self {
            Cursor::Valid { position, .. } => *position,
            Cursor::EndOfFile { code } => code.len(),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Cursor::EndOfFile { .. })
    }

    /// The whole input this cursor was created from
    pub fn source(&self) -> &'code str {
        match self {
            Cursor::Valid { code, .. } => code,
            Cursor::EndOfFile { code } => code,
        }
    }

    /// Consume the cursor and return the input and current byte offset
    pub fn inner(self) -> (&'code str, usize) {
        match self {
            Cursor::Valid { code, position } => (code, position),
            Cursor::EndOfFile { code } => (code, code.len()),
        }
    }
}

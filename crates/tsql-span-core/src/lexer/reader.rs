//! Single-character source with one character of pushback.

use core::str::Chars;

/// Reads the input one character at a time.
///
/// `position` is the character offset of `current`, starting at -1 before
/// the first read. A [`putback`](Self::putback) makes the next
/// [`read`](Self::read) replay `current` without moving `position`.
pub struct CharacterReader<'a> {
    chars: Chars<'a>,
    current: char,
    position: isize,
    has_more: bool,
    /// The pushback slot. Holds at most one character.
    replay: Option<char>,
}

impl<'a> CharacterReader<'a> {
    /// Creates a reader positioned before the first character of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            current: '\0',
            position: -1,
            has_more: true,
            replay: None,
        }
    }

    /// Advances to the next character. Returns false at end of input, after
    /// which `current` is meaningless.
    pub fn read(&mut self) -> bool {
        if !self.has_more {
            return false;
        }
        if let Some(c) = self.replay.take() {
            self.current = c;
            return true;
        }
        match self.chars.next() {
            Some(c) => {
                self.current = c;
                self.position += 1;
                true
            }
            None => {
                self.current = '\0';
                self.has_more = false;
                false
            }
        }
    }

    /// Reads until a non-whitespace character or end of input.
    pub fn read_next_non_whitespace(&mut self) -> bool {
        loop {
            if !self.read() {
                return false;
            }
            if !self.current.is_whitespace() {
                return true;
            }
        }
    }

    /// Replays `current` on the next read.
    ///
    /// Only one character can be pushed back; calling this twice without a
    /// successful read in between replays the same character once.
    pub fn putback(&mut self) {
        debug_assert!(self.replay.is_none(), "pushback slot already in use");
        self.replay = Some(self.current);
        self.has_more = true;
    }

    /// The character produced by the last successful read.
    #[must_use]
    pub const fn current(&self) -> char {
        self.current
    }

    /// Character offset of `current`, -1 before the first read.
    #[must_use]
    pub const fn position(&self) -> isize {
        self.position
    }

    /// True once a read has run past the end of the input.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        !self.has_more
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_characters_in_order() {
        let mut reader = CharacterReader::new("ab");
        assert_eq!(reader.position(), -1);
        assert!(reader.read());
        assert_eq!((reader.current(), reader.position()), ('a', 0));
        assert!(reader.read());
        assert_eq!((reader.current(), reader.position()), ('b', 1));
        assert!(!reader.read());
        assert!(reader.is_eof());
        assert!(!reader.read());
    }

    #[test]
    fn test_putback_replays_without_advancing() {
        let mut reader = CharacterReader::new("xy");
        assert!(reader.read());
        reader.putback();
        assert!(reader.read());
        assert_eq!((reader.current(), reader.position()), ('x', 0));
        assert!(reader.read());
        assert_eq!((reader.current(), reader.position()), ('y', 1));
    }

    #[test]
    fn test_position_counts_characters_not_bytes() {
        let mut reader = CharacterReader::new("€1");
        assert!(reader.read());
        assert!(reader.read());
        assert_eq!((reader.current(), reader.position()), ('1', 1));
    }

    #[test]
    fn test_read_next_non_whitespace() {
        let mut reader = CharacterReader::new(" \t\n z");
        assert!(reader.read_next_non_whitespace());
        assert_eq!((reader.current(), reader.position()), ('z', 4));
        assert!(!reader.read_next_non_whitespace());
    }
}

//! Advance-only cursor over decoded script text
//!
//! Every extraction returns a sub-slice of the source, so values taken through
//! the cursor borrow from the decoded buffer for its whole lifetime. Amounts are
//! counted in codepoints, offsets in bytes.

use crate::utils::LineEnding;

/// Check for a Unicode "space separator" (general category Zs)
#[must_use]
pub const fn is_space_separator(ch: char) -> bool {
    matches!(
        ch,
        '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Cursor tracking a byte offset and the current 1-based line
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// Text being consumed
    source: &'a str,
    /// Current byte offset in source
    offset: usize,
    /// Current line number (1-based)
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
        }
    }

    /// Current byte offset
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Current line number (1-based)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Unconsumed text
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Check if all input was consumed
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Move past `end - offset` bytes, counting consumed line breaks
    fn consume_to(&mut self, end: usize) -> &'a str {
        let taken = &self.source[self.offset..end];
        self.line += count_line_breaks(taken);
        self.offset = end;
        taken
    }

    /// Byte length of the next `amount` codepoints, if that many remain
    fn byte_len_of_chars(&self, amount: usize) -> Option<usize> {
        let remaining = self.remaining();
        if amount == 0 {
            return Some(0);
        }
        let mut indices = remaining.char_indices().skip(amount - 1);
        indices.next().map(|(index, ch)| index + ch.len_utf8())
    }

    /// Advance by `amount` codepoints
    ///
    /// Returns `false` and leaves the cursor untouched if fewer remain.
    pub fn advance(&mut self, amount: usize) -> bool {
        match self.byte_len_of_chars(amount) {
            Some(len) => {
                self.consume_to(self.offset + len);
                true
            }
            None => false,
        }
    }

    /// Check whether the unconsumed text starts with `prefix`
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consume `prefix` if the unconsumed text starts with it
    pub fn expect(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.consume_to(self.offset + prefix.len());
            true
        } else {
            false
        }
    }

    /// Consume one line terminator of the given convention
    pub fn expect_line_ending(&mut self, ending: LineEnding) -> bool {
        self.expect(ending.as_str())
    }

    /// Skip any run of Unicode space separators
    pub fn skip_space_separators(&mut self) {
        let skipped = self
            .remaining()
            .char_indices()
            .find(|(_, ch)| !is_space_separator(*ch))
            .map_or(self.source.len() - self.offset, |(index, _)| index);
        self.consume_to(self.offset + skipped);
    }

    /// Take text up to `delimiter`, consuming the delimiter as well
    ///
    /// Without a delimiter in the remaining text this takes everything when
    /// `allow_eof` is set and fails without moving otherwise.
    pub fn take_until(&mut self, delimiter: char, allow_eof: bool) -> Option<&'a str> {
        match self.remaining().find(delimiter) {
            Some(index) => {
                let taken = self.consume_to(self.offset + index);
                self.consume_to(self.offset + delimiter.len_utf8());
                Some(taken)
            }
            None if allow_eof => Some(self.take_rest()),
            None => None,
        }
    }

    /// Take one line, consuming its terminator
    ///
    /// The final line may lack a terminator only when `allow_eof` is set.
    pub fn take_line(&mut self, ending: LineEnding, allow_eof: bool) -> Option<&'a str> {
        let terminator = ending.as_str();
        match self.remaining().find(terminator) {
            Some(index) => {
                let taken = &self.source[self.offset..self.offset + index];
                self.offset += index + terminator.len();
                self.line += 1;
                Some(taken)
            }
            None if allow_eof => {
                let taken = self.remaining();
                self.offset = self.source.len();
                Some(taken)
            }
            None => None,
        }
    }

    /// Take all remaining text
    pub fn take_rest(&mut self) -> &'a str {
        self.consume_to(self.source.len())
    }

    /// Take exactly `amount` codepoints
    pub fn take_chars(&mut self, amount: usize) -> Option<&'a str> {
        let len = self.byte_len_of_chars(amount)?;
        Some(self.consume_to(self.offset + len))
    }
}

/// Lines crossed by `text`, counting CRLF once
fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(index, byte)| match byte {
            b'\n' => true,
            b'\r' => bytes.get(index + 1) != Some(&b'\n'),
            _ => false,
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_codepoints() {
        let mut cursor = Cursor::new("äbc");
        assert!(cursor.advance(1));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.remaining(), "bc");
        assert!(!cursor.advance(3));
        assert_eq!(cursor.remaining(), "bc");
        assert!(cursor.advance(2));
        assert!(cursor.is_eof());
    }

    #[test]
    fn expect_literal() {
        let mut cursor = Cursor::new("[Script Info]\n");
        assert!(!cursor.expect("[Events]"));
        assert!(cursor.expect("[Script Info]"));
        assert!(cursor.expect_line_ending(LineEnding::Lf));
        assert!(cursor.is_eof());
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn skip_unicode_space_separators() {
        let mut cursor = Cursor::new("\u{3000} \u{00A0}\tvalue");
        cursor.skip_space_separators();
        assert_eq!(cursor.remaining(), "\tvalue");
    }

    #[test]
    fn skip_space_separators_to_end() {
        let mut cursor = Cursor::new("   ");
        cursor.skip_space_separators();
        assert!(cursor.is_eof());
    }

    #[test]
    fn take_until_delimiter() {
        let mut cursor = Cursor::new("Title: Example");
        assert_eq!(cursor.take_until(':', false), Some("Title"));
        assert_eq!(cursor.remaining(), " Example");
        assert_eq!(cursor.take_until(',', false), None);
        assert_eq!(cursor.remaining(), " Example");
        assert_eq!(cursor.take_until(',', true), Some(" Example"));
        assert!(cursor.is_eof());
    }

    #[test]
    fn take_line_with_crlf() {
        let mut cursor = Cursor::new("one\r\ntwo\r\nthree");
        assert_eq!(cursor.take_line(LineEnding::Crlf, false), Some("one"));
        assert_eq!(cursor.take_line(LineEnding::Crlf, false), Some("two"));
        assert_eq!(cursor.take_line(LineEnding::Crlf, false), None);
        assert_eq!(cursor.take_line(LineEnding::Crlf, true), Some("three"));
        assert_eq!(cursor.line(), 3);
        assert!(cursor.is_eof());
    }

    #[test]
    fn take_chars_exact() {
        let mut cursor = Cursor::new("0:00:01.00");
        assert_eq!(cursor.take_chars(1), Some("0"));
        assert!(cursor.expect(":"));
        assert_eq!(cursor.take_chars(2), Some("00"));
        assert_eq!(cursor.take_chars(10), None);
        assert_eq!(cursor.take_chars(0), Some(""));
        assert_eq!(cursor.take_rest(), ":01.00");
    }

    #[test]
    fn line_counting_through_take_until() {
        let mut cursor = Cursor::new("a\nb\rc]");
        assert_eq!(cursor.take_until(']', false), Some("a\nb\rc"));
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn zs_classification() {
        assert!(is_space_separator(' '));
        assert!(is_space_separator('\u{2009}'));
        assert!(!is_space_separator('\t'));
        assert!(!is_space_separator('a'));
    }
}

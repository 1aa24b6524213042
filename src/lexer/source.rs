//! Line-buffered character source with push-back.
//!
//! The whole input is split into lines up front, but characters are only
//! materialized one line at a time. The current line is stored reversed so
//! that taking the next character and pushing one back are both `Vec` pops
//! and pushes at the tail.

/// Hands out the lines of the input, front to back.
#[derive(Debug, Clone)]
pub struct LineFeeder {
    /// Lines not yet handed out, last line first
    lines: Vec<String>,
}

impl LineFeeder {
    /// Splits `text` on `\n`; the terminators are restored by [`next_line`](Self::next_line).
    pub fn new(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
        lines.reverse();
        LineFeeder { lines }
    }

    /// Returns the next line as a reversed character stack, or `None` once
    /// the input is exhausted.
    ///
    /// Every line except the final one gets its `\n` back.
    pub fn next_line(&mut self) -> Option<Vec<char>> {
        let line = self.lines.pop()?;
        let mut chars: Vec<char> = line.chars().collect();
        if !self.lines.is_empty() {
            chars.push('\n');
        }
        chars.reverse();
        Some(chars)
    }

    /// Number of lines not yet handed out
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

/// Character source feeding the token scanners.
#[derive(Debug, Clone)]
pub struct CharSource {
    feeder: LineFeeder,
    /// Unread characters of the current line plus push-backs, next char last
    line_buffer: Vec<char>,
    /// Number of lines pulled from the feeder so far
    line: usize,
}

impl CharSource {
    /// Creates a source over the complete input text
    pub fn new(text: &str) -> Self {
        CharSource {
            feeder: LineFeeder::new(text),
            line_buffer: Vec::new(),
            line: 0,
        }
    }

    /// Returns the next character, or `None` at end of input.
    ///
    /// Reading past the end keeps returning `None`.
    pub fn read_char(&mut self) -> Option<char> {
        if self.line_buffer.is_empty() {
            self.restock();
        }
        self.line_buffer.pop()
    }

    /// Pushes `c` back so it is the next character returned.
    pub fn unread_char(&mut self, c: char) {
        self.line_buffer.push(c);
    }

    /// Discards whatever is left of the current line, push-backs included,
    /// and moves on to the next one.
    pub fn skip_line(&mut self) {
        self.restock();
    }

    /// 1-based number of the line currently being consumed (0 before the first read)
    pub fn line(&self) -> usize {
        self.line
    }

    /// True once nothing is buffered and the feeder is empty
    pub fn is_exhausted(&self) -> bool {
        self.line_buffer.is_empty() && self.feeder.remaining() == 0
    }

    fn restock(&mut self) {
        match self.feeder.next_line() {
            Some(chars) => {
                self.line += 1;
                tracing::trace!(line = self.line, len = chars.len(), "restocked line buffer");
                self.line_buffer = chars;
            }
            None => self.line_buffer.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(source: &mut CharSource) -> String {
        let mut out = String::new();
        while let Some(c) = source.read_char() {
            out.push(c);
        }
        out
    }

    #[test]
    fn test_feeder_restores_terminators() {
        let mut feeder = LineFeeder::new("ab\ncd");
        assert_eq!(feeder.remaining(), 2);
        assert_eq!(feeder.next_line(), Some(vec!['\n', 'b', 'a']));
        assert_eq!(feeder.next_line(), Some(vec!['d', 'c']));
        assert_eq!(feeder.next_line(), None);
    }

    #[test]
    fn test_reads_input_verbatim() {
        let mut source = CharSource::new("(a b)\n  c\n");
        assert_eq!(drain(&mut source), "(a b)\n  c\n");
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut source = CharSource::new("x");
        assert_eq!(source.read_char(), Some('x'));
        assert_eq!(source.read_char(), None);
        assert_eq!(source.read_char(), None);
        assert!(source.is_exhausted());
    }

    #[test]
    fn test_empty_input() {
        let mut source = CharSource::new("");
        assert_eq!(source.read_char(), None);
    }

    #[test]
    fn test_unread_round_trip() {
        let mut source = CharSource::new("ab");
        let c = source.read_char().unwrap();
        source.unread_char(c);
        assert_eq!(source.read_char(), Some('a'));
        assert_eq!(source.read_char(), Some('b'));
    }

    #[test]
    fn test_unread_is_last_in_first_out() {
        let mut source = CharSource::new("z");
        source.unread_char('1');
        source.unread_char('2');
        assert_eq!(source.read_char(), Some('2'));
        assert_eq!(source.read_char(), Some('1'));
        assert_eq!(source.read_char(), Some('z'));
    }

    #[test]
    fn test_unread_after_end_of_input() {
        let mut source = CharSource::new("");
        assert_eq!(source.read_char(), None);
        source.unread_char('q');
        assert_eq!(source.read_char(), Some('q'));
        assert_eq!(source.read_char(), None);
    }

    #[test]
    fn test_skip_line_discards_rest_of_line() {
        let mut source = CharSource::new("; note\nnext");
        assert_eq!(source.read_char(), Some(';'));
        source.skip_line();
        assert_eq!(drain(&mut source), "next");
    }

    #[test]
    fn test_line_numbers() {
        let mut source = CharSource::new("a\nb");
        assert_eq!(source.line(), 0);
        source.read_char();
        assert_eq!(source.line(), 1);
        source.read_char(); // '\n'
        assert_eq!(source.line(), 1);
        source.read_char();
        assert_eq!(source.line(), 2);
    }
}

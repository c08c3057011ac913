// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
}

/// The character source and read position the lexer walks with.
///
/// Positions are character indices, which is what lexer errors report.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [char],
    pos: usize,
}

pub trait InputBuffer {
    fn consume_char(&mut self) -> Result<char, Error>;
}

impl InputBuffer for SliceInputBuffer<'_> {
    fn consume_char(&mut self) -> Result<char, Error> {
        let c = *self.data.get(self.pos).ok_or(Error::ReachedEnd)?;
        self.pos += 1;
        Ok(c)
    }
}

impl<'a> SliceInputBuffer<'a> {
    pub fn new(data: &'a [char]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Un-reads the last consumed character so it starts the next token.
    pub fn step_back(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// The last consumed character and its index, used for error reports
    /// when input runs out mid-token.
    pub fn last_consumed(&self) -> Option<(usize, char)> {
        let index = self.pos.checked_sub(1)?;
        self.data.get(index).map(|&c| (index, c))
    }

    /// Consumes `literal` if the input continues with exactly those characters.
    /// Leaves the position untouched otherwise.
    pub fn consume_literal(&mut self, literal: &str) -> bool {
        let mut end = self.pos;
        for expected in literal.chars() {
            if self.data.get(end) != Some(&expected) {
                return false;
            }
            end += 1;
        }
        self.pos = end;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_boundary_behavior() {
        let data = ['a', 'b'];
        let mut buffer = SliceInputBuffer::new(&data);

        assert_eq!(buffer.current_pos(), 0);
        assert_eq!(buffer.last_consumed(), None);
        assert_eq!(buffer.consume_char(), Ok('a'));
        assert_eq!(buffer.consume_char(), Ok('b'));

        // pos == data.len(): nothing left, position stays put
        assert_eq!(buffer.consume_char(), Err(Error::ReachedEnd));
        assert_eq!(buffer.current_pos(), 2);
        assert_eq!(buffer.last_consumed(), Some((1, 'b')));
    }

    #[test]
    fn test_step_back_rereads() {
        let data = ['1', ','];
        let mut buffer = SliceInputBuffer::new(&data);
        assert_eq!(buffer.consume_char(), Ok('1'));
        assert_eq!(buffer.consume_char(), Ok(','));
        buffer.step_back();
        assert_eq!(buffer.consume_char(), Ok(','));
    }

    #[test]
    fn test_consume_literal() {
        let data: Vec<char> = "rue,".chars().collect();
        let mut buffer = SliceInputBuffer::new(&data);
        assert!(!buffer.consume_literal("ull"));
        assert_eq!(buffer.current_pos(), 0);
        assert!(buffer.consume_literal("rue"));
        assert_eq!(buffer.current_pos(), 3);

        // Running off the end is a mismatch, not a panic
        let data: Vec<char> = "ru".chars().collect();
        let mut buffer = SliceInputBuffer::new(&data);
        assert!(!buffer.consume_literal("rue"));
        assert_eq!(buffer.current_pos(), 0);
    }
}

//! Module for walking over the characters of an expression.

use std::{
    iter::{Iterator, Peekable},
    str::CharIndices,
};

use getset::CopyGetters;

/// Iterator iterating over the characters of an expression that can be peeked at.
#[derive(Debug, Clone, CopyGetters)]
pub struct SourceIterator<'a> {
    /// Get the expression that the iterator is iterating over.
    #[get_copy = "pub"]
    source: &'a str,
    iterator: Peekable<CharIndices<'a>>,
    /// Get the previous character that was iterated over.
    #[get_copy = "pub"]
    prev: Option<(usize, char)>,
}

impl<'a> SourceIterator<'a> {
    /// Creates an iterator positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            iterator: source.char_indices().peekable(),
            prev: None,
        }
    }

    /// Peek at the next character in the expression.
    pub fn peek(&mut self) -> Option<(usize, char)> {
        self.iterator.peek().copied()
    }

    /// Byte index of the next character, or the length of the expression at the end.
    pub fn offset(&mut self) -> usize {
        self.peek().map_or(self.source.len(), |(index, _)| index)
    }

    /// Increments the iterator while the predicate returns true.
    pub fn walk_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = self.peek() {
            if !predicate(character) {
                break;
            }

            self.next();
        }
    }

    /// Returns the slice of the expression from `start` up to the current position.
    pub fn slice_from(&mut self, start: usize) -> &'a str {
        let end = self.offset();
        &self.source[start..end]
    }
}

impl<'a> Iterator for SourceIterator<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iterator.next();
        if item.is_some() {
            self.prev = item;
        }
        item
    }
}

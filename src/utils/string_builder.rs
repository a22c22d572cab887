use std::iter::Iterator;

/// A helper for building the output document in-order from an input document
/// and a series of insertions, deletions, and copies. It is safe to use with
/// UTF-8 strings as all counts are in characters, never bytes. The methods
/// must be called in document order.
pub struct StringBuilder<'a> {
    remaining: std::str::Chars<'a>,
    buffer: String,
}

impl<'a> StringBuilder<'a> {
    pub fn new(document: &'a str) -> Self {
        StringBuilder {
            remaining: document.chars(),
            buffer: String::with_capacity(document.len()),
        }
    }

    /// Append new text to the output without consuming any input.
    pub fn insert(&mut self, text: &str) { self.buffer.push_str(text); }

    /// Copy the next `length` characters of the input to the output.
    pub fn retain(&mut self, length: usize) {
        self.buffer.extend(self.remaining.by_ref().take(length));
    }

    /// Drop the next `length` characters of the input.
    pub fn delete(&mut self, length: usize) {
        if length > 0 {
            self.remaining.nth(length - 1);
        }
    }

    /// Copy whatever input is left to the output and return the result. This
    /// realizes the implicit trailing skip of every operation.
    pub fn finish(mut self) -> String {
        self.buffer.extend(self.remaining);

        self.buffer
    }
}

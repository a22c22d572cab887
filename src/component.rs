use core::fmt::{Debug, Display};

/// An atomic edit step. Read against an input document, a component either
/// consumes input (`Skip`, `Delete`) or produces output (`Skip`, `Insert`).
///
/// All counts and text lengths are measured in Unicode code points (Rust
/// `char`s), never in UTF-8 or UTF-16 code units, so a well-formed component
/// can never split a code point.
#[derive(Clone, PartialEq, Eq)]
pub enum Component {
    /// Retain the next `n` characters of the input document unchanged.
    Skip(usize),

    /// Introduce the given text at the current position. Consumes no input.
    Insert(String),

    /// Remove the next `n` characters of the input document.
    Delete(usize),
}

impl Component {
    /// The number of characters the component consumes from the input
    /// document.
    #[must_use]
    pub fn pre_len(&self) -> usize {
        match self {
            Component::Skip(count) | Component::Delete(count) => *count,
            Component::Insert(_) => 0,
        }
    }

    /// The number of characters the component produces into the output
    /// document.
    #[must_use]
    pub fn post_len(&self) -> usize {
        match self {
            Component::Skip(count) => *count,
            Component::Insert(text) => text.chars().count(),
            Component::Delete(_) => 0,
        }
    }

    /// Whether applying the component would leave the document untouched.
    /// No-op components are discarded by [`Operation::append`].
    ///
    /// [`Operation::append`]: crate::Operation::append
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match self {
            Component::Skip(count) | Component::Delete(count) => *count == 0,
            Component::Insert(text) => text.is_empty(),
        }
    }

    /// Returns the piece of the component covering `[offset, offset + length)`
    /// of its own extent. `Skip` and `Delete` slice to `length` unchanged in
    /// kind; `Insert` slices its text to the character range.
    pub(crate) fn slice(&self, offset: usize, length: usize) -> Self {
        match self {
            Component::Skip(_) => Component::Skip(length),
            Component::Delete(_) => Component::Delete(length),
            Component::Insert(text) => {
                Component::Insert(text.chars().skip(offset).take(length).collect())
            }
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Component::Skip(count) => write!(f, "<skip {count}>"),
            Component::Insert(text) => {
                write!(f, "<insert '{}'>", text.replace('\n', "\\n"))
            }
            Component::Delete(count) => write!(f, "<delete {count}>"),
        }
    }
}

impl Debug for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result { write!(f, "{self}") }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(Component::Skip(3), 3, 3; "skip counts on both sides")]
    #[test_case(Component::Insert("héllo".to_owned()), 0, 5; "insert only produces")]
    #[test_case(Component::Delete(4), 4, 0; "delete only consumes")]
    fn test_lengths(component: Component, pre: usize, post: usize) {
        assert_eq!(component.pre_len(), pre);
        assert_eq!(component.post_len(), post);
    }

    #[test]
    fn test_insert_counts_characters_not_bytes() {
        let component = Component::Insert("こんにちは".to_owned());
        assert_eq!(component.post_len(), 5);
    }

    #[test_case(Component::Skip(0), true; "zero skip")]
    #[test_case(Component::Insert(String::new()), true; "empty insert")]
    #[test_case(Component::Delete(0), true; "zero delete")]
    #[test_case(Component::Skip(1), false; "skip")]
    #[test_case(Component::Insert(" ".to_owned()), false; "insert")]
    #[test_case(Component::Delete(1), false; "delete")]
    fn test_is_noop(component: Component, expected: bool) {
        assert_eq!(component.is_noop(), expected);
    }

    #[test]
    fn test_slice_insert_by_character_range() {
        let component = Component::Insert("aこbんc".to_owned());
        assert_eq!(
            component.slice(1, 3),
            Component::Insert("こbん".to_owned())
        );
    }

    #[test]
    fn test_slice_skip_and_delete_ignore_offset() {
        assert_eq!(Component::Skip(10).slice(4, 2), Component::Skip(2));
        assert_eq!(Component::Delete(10).slice(4, 2), Component::Delete(2));
    }

    #[test]
    fn test_display() {
        insta::assert_snapshot!(Component::Skip(7), @"<skip 7>");
        insta::assert_snapshot!(Component::Insert("a\nb".to_owned()), @r"<insert 'a\nb'>");
        insta::assert_snapshot!(Component::Delete(2), @"<delete 2>");
    }
}

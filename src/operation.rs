use core::fmt::{Debug, Display};
use std::mem::discriminant;

use crate::{component::Component, error::OperationError};

/// An ordered sequence of [`Component`]s describing an edit from one document
/// state to another. Read left to right, `Skip` and `Delete` advance a cursor
/// into the input document while `Insert` and `Skip` append to the output.
///
/// An operation never mentions the tail of the document past its last
/// component: an implicit trailing `Skip` to the end of the document is
/// assumed by [`apply`](crate::apply) and must never be stored explicitly.
///
/// Operations built through [`Operation::append`] and [`Operation::trim`] are
/// always in canonical form: no zero-length components, no two adjacent
/// components of the same kind, and no trailing `Skip`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Operation {
    components: Vec<Component>,
}

impl Operation {
    /// Creates an empty (identity) operation.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// The components of the operation, in application order.
    #[must_use]
    pub fn components(&self) -> &[Component] { &self.components }

    /// Whether the operation leaves every document unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool { self.components.is_empty() }

    /// The total number of characters the operation consumes from the input
    /// document, excluding the implicit trailing skip.
    #[must_use]
    pub fn pre_len(&self) -> usize { self.components.iter().map(Component::pre_len).sum() }

    /// The total number of characters the operation explicitly produces into
    /// the output document, excluding the implicit trailing skip.
    #[must_use]
    pub fn post_len(&self) -> usize { self.components.iter().map(Component::post_len).sum() }

    /// Appends a component while maintaining canonical form: no-op components
    /// are discarded and a component of the same kind as the current last one
    /// is merged into it in place instead of being pushed.
    pub fn append(&mut self, component: Component) {
        if component.is_noop() {
            return;
        }

        let component = match (self.components.last_mut(), component) {
            (Some(Component::Skip(count)), Component::Skip(more)) => {
                *count += more;
                return;
            }
            (Some(Component::Delete(count)), Component::Delete(more)) => {
                *count += more;
                return;
            }
            (Some(Component::Insert(text)), Component::Insert(suffix)) => {
                text.push_str(&suffix);
                return;
            }
            (_, component) => component,
        };

        self.components.push(component);
    }

    /// Removes a trailing `Skip`, restoring the "no trailing skip" invariant.
    /// Called once at the end of every operation-producing algorithm.
    pub fn trim(&mut self) {
        if let Some(Component::Skip(_)) = self.components.last() {
            self.components.pop();
        }
    }

    /// Checks that the operation is in canonical form. Operations built
    /// through [`Operation::append`] always are; this guards operations
    /// arriving from untrusted sources such as a wire decoder.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::ZeroLengthComponent`],
    /// [`OperationError::AdjacentComponents`] or
    /// [`OperationError::TrailingSkip`] for the respective violation.
    pub fn validate(&self) -> Result<(), OperationError> {
        for (index, component) in self.components.iter().enumerate() {
            if component.is_noop() {
                return Err(OperationError::ZeroLengthComponent { index });
            }
        }

        for (index, pair) in self.components.windows(2).enumerate() {
            if discriminant(&pair[0]) == discriminant(&pair[1]) {
                return Err(OperationError::AdjacentComponents { index });
            }
        }

        if let Some(Component::Skip(_)) = self.components.last() {
            return Err(OperationError::TrailingSkip);
        }

        Ok(())
    }

    #[cfg(any(test, feature = "serde"))]
    pub(crate) fn from_raw_components(components: Vec<Component>) -> Self {
        Self { components }
    }
}

/// Collects components into a canonical operation: every component goes
/// through [`Operation::append`] and the result is trimmed.
impl FromIterator<Component> for Operation {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut operation = Operation::new();
        for component in iter {
            operation.append(component);
        }
        operation.trim();

        operation
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for component in &self.components {
            write!(f, "{component}")?;
        }

        Ok(())
    }
}

impl Debug for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result { write!(f, "{self}") }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_append_merges_same_kind() {
        let mut operation = Operation::new();
        operation.append(Component::Skip(2));
        operation.append(Component::Skip(3));
        operation.append(Component::Insert("ab".to_owned()));
        operation.append(Component::Insert("cd".to_owned()));
        operation.append(Component::Delete(1));
        operation.append(Component::Delete(4));

        assert_eq!(
            operation.components(),
            &[
                Component::Skip(5),
                Component::Insert("abcd".to_owned()),
                Component::Delete(5),
            ]
        );
    }

    #[test_case(Component::Skip(0); "zero skip")]
    #[test_case(Component::Insert(String::new()); "empty insert")]
    #[test_case(Component::Delete(0); "zero delete")]
    fn test_append_discards_noops(component: Component) {
        let mut operation = Operation::new();
        operation.append(Component::Skip(1));
        operation.append(component);
        operation.append(Component::Delete(2));

        assert_eq!(
            operation.components(),
            &[Component::Skip(1), Component::Delete(2)]
        );
    }

    #[test]
    fn test_trim_drops_trailing_skip_only() {
        let mut operation = Operation::new();
        operation.append(Component::Insert("x".to_owned()));
        operation.append(Component::Skip(9));
        operation.trim();

        assert_eq!(operation.components(), &[Component::Insert("x".to_owned())]);

        operation.trim();
        assert_eq!(operation.components(), &[Component::Insert("x".to_owned())]);
    }

    #[test]
    fn test_collected_operation_is_canonical() {
        let operation: Operation = [
            Component::Skip(1),
            Component::Skip(2),
            Component::Delete(0),
            Component::Insert("a".to_owned()),
            Component::Insert("b".to_owned()),
            Component::Skip(4),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            operation.components(),
            &[Component::Skip(3), Component::Insert("ab".to_owned())]
        );
        assert_eq!(operation.validate(), Ok(()));
    }

    #[test]
    fn test_lengths() {
        let operation: Operation = [
            Component::Skip(2),
            Component::Insert("xyz".to_owned()),
            Component::Delete(4),
        ]
        .into_iter()
        .collect();

        assert_eq!(operation.pre_len(), 6);
        assert_eq!(operation.post_len(), 5);
    }

    #[test]
    fn test_validate_rejects_zero_length_component() {
        let operation = Operation::from_raw_components(vec![
            Component::Insert("a".to_owned()),
            Component::Skip(0),
            Component::Delete(1),
        ]);

        assert_eq!(
            operation.validate(),
            Err(OperationError::ZeroLengthComponent { index: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_adjacent_components_of_the_same_kind() {
        let operation = Operation::from_raw_components(vec![
            Component::Delete(1),
            Component::Delete(2),
        ]);

        assert_eq!(
            operation.validate(),
            Err(OperationError::AdjacentComponents { index: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_trailing_skip() {
        let operation = Operation::from_raw_components(vec![
            Component::Insert("a".to_owned()),
            Component::Skip(3),
        ]);

        assert_eq!(operation.validate(), Err(OperationError::TrailingSkip));
    }

    #[test]
    fn test_display() {
        let operation: Operation = [
            Component::Skip(2),
            Component::Insert("hi".to_owned()),
            Component::Delete(1),
        ]
        .into_iter()
        .collect();

        insta::assert_snapshot!(operation, @"<skip 2><insert 'hi'><delete 1>");
    }
}

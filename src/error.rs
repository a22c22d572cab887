use thiserror::Error;

/// Error type for mispaired or malformed operations.
///
/// Every variant signals a caller bug rather than a runtime condition: there
/// is no I/O and no partial failure in this crate, so none of these are
/// retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// The operation consumes more characters than the document holds. The
    /// (document, operation) pair is mismatched.
    #[error(
        "document too short: the operation consumes {required} characters but the document only \
         holds {available}"
    )]
    DocumentTooShort {
        /// The number of characters the operation skips or deletes.
        required: usize,
        /// The character length of the document.
        available: usize,
    },

    /// The two operations' length contracts don't match: the second operand
    /// explicitly consumes more characters than the first operand covers.
    /// Usually means the operations were derived from different document
    /// versions.
    #[error(
        "incompatible operations: the second operation consumes {consumed} characters but the \
         first one only covers {covered}"
    )]
    IncompatibleOperations {
        /// Characters the second operand consumes.
        consumed: usize,
        /// Characters the first operand covers in the relevant context.
        covered: usize,
    },

    /// An operation contains a component of zero length, violating canonical
    /// form.
    #[error("malformed operation: component {index} has zero length")]
    ZeroLengthComponent {
        /// The position of the offending component.
        index: usize,
    },

    /// An operation contains two adjacent components of the same kind that
    /// should have been merged, violating canonical form.
    #[error("malformed operation: component {index} and its successor share the same kind")]
    AdjacentComponents {
        /// The position of the first of the two offending components.
        index: usize,
    },

    /// An operation ends in a `Skip`, violating canonical form; the trailing
    /// skip to the end of the document is always implicit.
    #[error("malformed operation: the last component is a skip")]
    TrailingSkip,
}

use crate::{
    component::Component,
    cursor::{Context, Cursor},
    error::OperationError,
    operation::Operation,
    utils::side::Side,
};

/// Rebases `operation` against a concurrently produced `other` so it can be
/// applied to a document that already has `other` applied. Both operations
/// must have been derived from the same original document.
///
/// `side` breaks the tie when both operations insert at the exact same
/// position: of the two symmetric `transform` calls the peers make, exactly
/// one must pass [`Side::Left`] and the other [`Side::Right`], so that both
/// merged results order the inserts identically.
///
/// Content `other` deletes is dropped from the result, except for text
/// `operation` itself inserted into that range: `other` never saw that text,
/// so it survives. Content past `other`'s extent is untouched.
///
/// # Errors
///
/// Returns [`OperationError::IncompatibleOperations`] if `other.pre_len()`
/// exceeds `operation.pre_len()` (the operations were not derived from the
/// same document version), and a malformed-operation error if either input
/// is not in canonical form.
///
/// # Examples
///
/// ```
/// use ot_text::{Component, Operation, Side, transform};
///
/// let ours: Operation = [Component::Skip(100), Component::Insert("abc".to_owned())]
///     .into_iter()
///     .collect();
/// let theirs: Operation = [Component::Skip(100), Component::Insert("def".to_owned())]
///     .into_iter()
///     .collect();
///
/// assert_eq!(
///     transform(&ours, &theirs, Side::Left).unwrap().components(),
///     &[Component::Skip(100), Component::Insert("abc".to_owned())]
/// );
/// assert_eq!(
///     transform(&ours, &theirs, Side::Right).unwrap().components(),
///     &[Component::Skip(103), Component::Insert("abc".to_owned())]
/// );
/// ```
pub fn transform(
    operation: &Operation,
    other: &Operation,
    side: Side,
) -> Result<Operation, OperationError> {
    operation.validate()?;
    other.validate()?;

    let covered = operation.pre_len();
    let consumed = other.pre_len();
    if consumed > covered {
        return Err(OperationError::IncompatibleOperations { consumed, covered });
    }

    // Both operations are measured against the same original document.
    let mut cursor = Cursor::new(operation, Context::Pre);
    let mut result = Operation::new();

    for component in other.components() {
        match component {
            // The range is untouched by `other`, so `operation`'s treatment
            // of it is preserved as-is. Inserts of `operation` within it come
            // out of the cursor for free and are kept.
            Component::Skip(count) => {
                let mut remaining = *count;
                while remaining > 0 {
                    let piece = cursor.take(remaining);
                    remaining -= piece.pre_len();
                    result.append(piece);
                }
            }

            // `other` introduced text that did not exist when `operation`
            // was created; `operation` has to skip over it. On the left
            // side, a pending insert of `operation` at this exact position
            // is flushed first so it sorts before `other`'s insert in both
            // merged results.
            Component::Insert(text) => {
                if side == Side::Left {
                    result.append(cursor.take(0));
                }
                result.append(Component::Skip(text.chars().count()));
            }

            // `other` deleted this range of the original document, so
            // `operation`'s skips and deletes of it have nothing left to act
            // on. Only text `operation` inserted into the range survives:
            // `other` never saw it.
            Component::Delete(count) => {
                let mut remaining = *count;
                while remaining > 0 {
                    let piece = cursor.take(remaining);
                    remaining -= piece.pre_len();
                    if matches!(piece, Component::Insert(_)) {
                        result.append(piece);
                    }
                }
            }
        }
    }

    while !cursor.is_exhausted() {
        result.append(cursor.take(usize::MAX));
    }
    result.trim();

    Ok(result)
}

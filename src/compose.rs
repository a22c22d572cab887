use crate::{
    component::Component,
    cursor::{Context, Cursor},
    error::OperationError,
    operation::Operation,
};

/// Combines two sequential operations into one: applying the result to a
/// document is equivalent to applying `a` and then `b`.
///
/// `b` consumes what `a` produces, so `b` may not explicitly consume more
/// characters than `a` explicitly produces; the shortfall on `b`'s side is
/// covered by its implicit trailing skip. Content `a` produced past `b`'s
/// extent passes through unchanged.
///
/// # Errors
///
/// Returns [`OperationError::IncompatibleOperations`] if `b.pre_len()`
/// exceeds `a.post_len()` (the operations were paired incorrectly, for
/// example derived from different document versions), and a
/// malformed-operation error if either input is not in canonical form.
///
/// # Examples
///
/// ```
/// use ot_text::{Component, Operation, compose};
///
/// let a: Operation = [Component::Skip(1), Component::Insert("hi".to_owned())]
///     .into_iter()
///     .collect();
/// let b: Operation = [Component::Insert("yo".to_owned())].into_iter().collect();
///
/// assert_eq!(
///     compose(&a, &b).unwrap().components(),
///     &[
///         Component::Insert("yo".to_owned()),
///         Component::Skip(1),
///         Component::Insert("hi".to_owned()),
///     ]
/// );
/// ```
pub fn compose(a: &Operation, b: &Operation) -> Result<Operation, OperationError> {
    a.validate()?;
    b.validate()?;

    let covered = a.post_len();
    let consumed = b.pre_len();
    if consumed > covered {
        return Err(OperationError::IncompatibleOperations { consumed, covered });
    }

    // `b` is measured against the document `a` produces.
    let mut cursor = Cursor::new(a, Context::Post);
    let mut result = Operation::new();

    for component in b.components() {
        match component {
            // The range is untouched by `b`: whatever `a` did to it, whether
            // skipping through or inserting, survives verbatim. Deletes of
            // `a` are invisible to `b` and pass through for free.
            Component::Skip(count) => {
                let mut remaining = *count;
                while remaining > 0 {
                    let piece = cursor.take(remaining);
                    remaining -= piece.post_len();
                    result.append(piece);
                }
            }

            // New content introduced by `b`; `a` is not involved.
            Component::Insert(text) => result.append(Component::Insert(text.clone())),

            // `b` deletes this range of `a`'s output. Characters `a` passed
            // through from the original document must now be deleted from
            // it; characters `a` itself inserted simply vanish; deletes of
            // `a` still pass through for free.
            Component::Delete(count) => {
                let mut remaining = *count;
                while remaining > 0 {
                    match cursor.take(remaining) {
                        Component::Skip(length) => {
                            remaining -= length;
                            result.append(Component::Delete(length));
                        }
                        Component::Insert(text) => remaining -= text.chars().count(),
                        piece @ Component::Delete(_) => result.append(piece),
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

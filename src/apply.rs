use crate::{
    component::Component, error::OperationError, operation::Operation,
    utils::string_builder::StringBuilder,
};

/// Applies `operation` to `document`, returning the edited document.
///
/// Components are executed left to right: `Skip` copies input characters to
/// the output, `Insert` appends new text, `Delete` drops input characters.
/// Whatever input remains afterwards is copied to the output verbatim (the
/// implicit trailing skip).
///
/// This walks a flat character sequence; storage layers backed by a rope or
/// piece table may execute the same component semantics themselves, as long
/// as they produce an identical result.
///
/// # Errors
///
/// Returns [`OperationError::DocumentTooShort`] if the operation skips or
/// deletes more characters than the document holds, and a malformed-operation
/// error if `operation` is not in canonical form.
///
/// # Examples
///
/// ```
/// use ot_text::{Component, Operation, apply};
///
/// let operation: Operation = [
///     Component::Skip(2),
///     Component::Insert("xx".to_owned()),
///     Component::Skip(1),
///     Component::Delete(1),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(apply("ABCDE", &operation).unwrap(), "ABxxCE");
/// ```
pub fn apply(document: &str, operation: &Operation) -> Result<String, OperationError> {
    operation.validate()?;

    let required = operation.pre_len();
    let available = document.chars().count();
    if required > available {
        return Err(OperationError::DocumentTooShort {
            required,
            available,
        });
    }

    let mut builder = StringBuilder::new(document);
    for component in operation.components() {
        match component {
            Component::Skip(count) => builder.retain(*count),
            Component::Insert(text) => builder.insert(text),
            Component::Delete(count) => builder.delete(*count),
        }
    }

    Ok(builder.finish())
}

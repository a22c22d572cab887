use std::fmt::Display;

/// Breaks the tie when two concurrent operations insert at the same position.
///
/// Of the two operations being transformed against each other, exactly one
/// must be transformed with `Side::Left` and the other with `Side::Right`,
/// chosen by a convention both peers agree on (for example a stable ordering
/// of actor ids). The left operation's insert ends up before the right one's
/// in both merged results, which is what makes them converge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

use crate::{component::Component, operation::Operation};

/// Selects the unit a [`Cursor`] advances in: characters consumed from the
/// input document (`Pre`) or characters produced into the output document
/// (`Post`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    Pre,
    Post,
}

/// A stateful scanner over one operation's components. Each call to
/// [`Cursor::take`] hands out the next piece of the source, sized to at most
/// the requested number of units in the selected context, splitting
/// components as needed. All the splicing done by compose and transform
/// funnels through this.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    components: &'a [Component],
    context: Context,
    index: usize,

    /// Units already handed out from the component at `index`; reset to zero
    /// whenever `index` advances.
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(operation: &'a Operation, context: Context) -> Self {
        Cursor {
            components: operation.components(),
            context,
            index: 0,
            offset: 0,
        }
    }

    /// Whether every component of the source has been handed out.
    pub(crate) fn is_exhausted(&self) -> bool { self.index >= self.components.len() }

    fn measure(&self, component: &Component) -> usize {
        match self.context {
            Context::Pre => component.pre_len(),
            Context::Post => component.post_len(),
        }
    }

    /// Returns the next piece of the source, at most `requested` units long
    /// in the selected context, and advances past exactly what it returns.
    ///
    /// A component with zero length in the selected context (an `Insert`
    /// under `Pre`, a `Delete` under `Post`) is indivisible: it is returned
    /// whole and free of charge, regardless of `requested`. An exhausted
    /// cursor returns `Skip(requested)` verbatim, standing in for the
    /// source's implicit trailing skip; callers draining to the end of the
    /// source should loop on [`Cursor::is_exhausted`] instead of probing for
    /// that.
    pub(crate) fn take(&mut self, requested: usize) -> Component {
        let Some(current) = self.components.get(self.index) else {
            return Component::Skip(requested);
        };

        let total = self.measure(current);
        if total == 0 {
            debug_assert_eq!(
                self.offset, 0,
                "a component of zero contextual length cannot have been partially taken"
            );
            self.index += 1;

            return current.clone();
        }

        let remaining = total - self.offset;
        if remaining <= requested {
            let piece = current.slice(self.offset, remaining);
            self.index += 1;
            self.offset = 0;

            piece
        } else {
            let piece = current.slice(self.offset, requested);
            self.offset += requested;

            piece
        }
    }
}

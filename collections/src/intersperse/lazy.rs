use std::iter::FusedIterator;

/// What the next call to `next` should produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Source,
    Separator,
}

/// An iterator adapter that yields a clone of `separator` between each pair of adjacent
/// elements of the underlying iterator.
///
/// One element of the underlying iterator is always buffered: it is pulled when the adapter is
/// created and lets the adapter know whether a separator must follow the element being emitted.
/// Once the underlying iterator returns `None` it is never polled again, making this adapter
/// fused even if the source is not.
///
/// ```
/// use toolbox_collections::IntersperseExt;
///
/// let out: Vec<_> = [1, 2, 3].into_iter().interspersed(0).collect();
/// assert_eq!(out, [1, 0, 2, 0, 3]);
/// ```
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Intersperse<I: Iterator> {
    iter: I,
    separator: I::Item,
    /// Next element of `iter` that has not been emitted yet.
    peek: Option<I::Item>,
    next_step: Step,
}

impl<I: Iterator> Intersperse<I> {
    /// Wraps `iter`, immediately pulling its first element.
    pub fn new(mut iter: I, separator: I::Item) -> Self {
        let peek = iter.next();
        tracing::trace!(empty = peek.is_none(), "primed intersperse look-ahead");
        Intersperse {
            iter,
            separator,
            peek,
            next_step: Step::Source,
        }
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.next_step {
            Step::Source => {
                self.next_step = Step::Separator;
                let current = self.peek.take();
                if current.is_some() {
                    self.peek = self.iter.next();
                    if self.peek.is_none() {
                        tracing::trace!("intersperse source exhausted");
                    }
                }
                current
            }
            Step::Separator => {
                self.next_step = Step::Source;
                if self.peek.is_some() {
                    Some(self.separator.clone())
                } else {
                    None
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.peek.is_none() {
            return (0, Some(0));
        }
        // elements that are due before the next one is pulled from `iter`
        let pending = match self.next_step {
            Step::Source => 1,
            Step::Separator => 2,
        };
        let (lo, hi) = self.iter.size_hint();
        let lo = lo.saturating_mul(2).saturating_add(pending);
        let hi = hi.and_then(|hi| hi.checked_mul(2)).and_then(|hi| hi.checked_add(pending));
        (lo, hi)
    }
}

impl<I> FusedIterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

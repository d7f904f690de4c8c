use super::lazy::Step;
use std::iter::FusedIterator;

/// Intersperses the successful elements of an iterator of `Result`s.
///
/// Separators are only placed between two `Ok` elements. The first `Err` is passed through
/// unchanged and ends the iteration: the underlying iterator is not polled afterwards.
///
/// ```
/// use toolbox_collections::IntersperseExt;
///
/// let parsed: Vec<Result<u8, _>> = ["1", "2", "x", "3"]
///     .iter()
///     .map(|s| s.parse::<u8>())
///     .try_interspersed(0)
///     .collect();
/// assert_eq!(parsed.len(), 4);
/// assert_eq!(parsed[..3], [Ok(1), Ok(0), Ok(2)]);
/// assert!(parsed[3].is_err());
/// ```
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct TryIntersperse<I: Iterator, T> {
    iter: I,
    separator: T,
    peek: Option<I::Item>,
    next_step: Step,
}

impl<I, T, E> TryIntersperse<I, T>
where
    I: Iterator<Item = Result<T, E>>,
{
    /// Wraps `iter`, immediately pulling its first element.
    pub fn new(mut iter: I, separator: T) -> Self {
        let peek = iter.next();
        tracing::trace!(empty = peek.is_none(), "primed intersperse look-ahead");
        TryIntersperse {
            iter,
            separator,
            peek,
            next_step: Step::Source,
        }
    }
}

impl<I, T, E> Iterator for TryIntersperse<I, T>
where
    I: Iterator<Item = Result<T, E>>,
    T: Clone,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Result<T, E>> {
        match self.next_step {
            Step::Source => {
                self.next_step = Step::Separator;
                match self.peek.take()? {
                    Ok(value) => {
                        self.peek = self.iter.next();
                        Some(Ok(value))
                    }
                    Err(err) => {
                        tracing::trace!("intersperse source failed");
                        Some(Err(err))
                    }
                }
            }
            Step::Separator => {
                self.next_step = Step::Source;
                match self.peek {
                    Some(Ok(_)) => Some(Ok(self.separator.clone())),
                    // the error goes right after the last element
                    Some(Err(_)) => self.next(),
                    None => None,
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.peek, self.next_step) {
            (None, _) => (0, Some(0)),
            (Some(Err(_)), _) => (1, Some(1)),
            (Some(Ok(_)), step) => {
                let pending = match step {
                    Step::Source => 1,
                    Step::Separator => 2,
                };
                // any later element may be an error that stops the iteration
                let (_, hi) = self.iter.size_hint();
                let hi = hi.and_then(|hi| hi.checked_mul(2)).and_then(|hi| hi.checked_add(pending));
                (pending, hi)
            }
        }
    }
}

impl<I, T, E> FusedIterator for TryIntersperse<I, T>
where
    I: Iterator<Item = Result<T, E>>,
    T: Clone,
{
}

#[cfg(test)]
mod tests {
    use crate::intersperse::IntersperseExt;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Failure(&'static str);

    #[test]
    fn test_all_ok() {
        let out: Vec<Result<i32, Failure>> = vec![Ok(1), Ok(2), Ok(3)].into_iter().try_interspersed(0).collect();
        assert_eq!(out, vec![Ok(1), Ok(0), Ok(2), Ok(0), Ok(3)]);

        let empty: Vec<Result<i32, Failure>> = Vec::new();
        let out: Vec<Result<i32, Failure>> = empty.into_iter().try_interspersed(0).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_is_forwarded_without_separator() {
        let source = vec![Ok(1), Ok(2), Err(Failure("boom")), Ok(3)];
        let out: Vec<_> = source.into_iter().try_interspersed(0).collect();
        assert_eq!(out, vec![Ok(1), Ok(0), Ok(2), Err(Failure("boom"))]);

        let source = vec![Err(Failure("first")), Ok(1)];
        let out: Vec<_> = source.into_iter().try_interspersed(0).collect();
        assert_eq!(out, vec![Err(Failure("first"))]);
    }

    #[test]
    fn test_no_pull_after_error() {
        let mut pulls = 0;
        let source = std::iter::from_fn(|| {
            pulls += 1;
            Some(if pulls == 2 { Err(Failure("stop")) } else { Ok(pulls) })
        });
        let mut it = source.try_interspersed(0);
        assert_eq!(it.next(), Some(Ok(1)));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next(), Some(Err(Failure("stop"))));
        for _ in 0..4 {
            assert_eq!(it.next(), None);
        }
        drop(it);
        assert_eq!(pulls, 2);
    }

    #[test]
    fn test_collect_into_result() {
        let ok: Result<Vec<u8>, std::num::ParseIntError> =
            ["4", "5"].iter().map(|s| s.parse::<u8>()).try_interspersed(0).collect();
        assert_eq!(ok, Ok(vec![4, 0, 5]));

        let err: Result<Vec<u8>, std::num::ParseIntError> =
            ["4", "five", "6"].iter().map(|s| s.parse::<u8>()).try_interspersed(0).collect();
        assert!(err.is_err());
    }
}

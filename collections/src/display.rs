use crate::intersperse::IntersperseExt;
use itertools::Either;
use std::fmt::{Display, Error, Formatter};

/// Writes the items of `iterable` to `f`, with `sep` between each pair of adjacent items.
pub fn disp_interspersed<I, S>(f: &mut Formatter<'_>, iterable: I, sep: S) -> Result<(), Error>
where
    I: IntoIterator,
    I::Item: Display + Clone,
    S: Display,
{
    for part in iterable.into_iter().map(Either::Left).interspersed(Either::Right(&sep)) {
        write!(f, "{part}")?;
    }
    Result::Ok(())
}

/// Displays a slice with a separator between its elements.
///
/// ```
/// use toolbox_collections::display::Interspersed;
///
/// assert_eq!(Interspersed::new(&[1, 2, 3], ", ").to_string(), "1, 2, 3");
/// assert_eq!(Interspersed::new(&["solo"], " | ").to_string(), "solo");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Interspersed<'a, T, S> {
    items: &'a [T],
    separator: S,
}

impl<'a, T, S> Interspersed<'a, T, S> {
    pub fn new(items: &'a [T], separator: S) -> Self {
        Interspersed { items, separator }
    }
}

impl<T: Display, S: Display> Display for Interspersed<'_, T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        disp_interspersed(f, self.items, &self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point(i32, i32);

    impl Display for Point {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "(")?;
            disp_interspersed(f, [self.0, self.1], ", ")?;
            write!(f, ")")
        }
    }

    #[test]
    fn test_display() {
        let empty: [u8; 0] = [];
        assert_eq!(Interspersed::new(&empty, ",").to_string(), "");
        assert_eq!(Interspersed::new(&[0], ",").to_string(), "0");
        assert_eq!(Interspersed::new(&[0, 1], ",").to_string(), "0,1");
        assert_eq!(Interspersed::new(&['a', 'b', 'c'], '/').to_string(), "a/b/c");
    }

    #[test]
    fn test_nested() {
        let points = [Point(0, 1), Point(2, 3)];
        assert_eq!(Interspersed::new(&points, " -> ").to_string(), "(0, 1) -> (2, 3)");
    }
}

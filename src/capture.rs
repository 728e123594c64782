//! Snapshots of a sequence's original, pre-mapping values.
//!
//! A [`Capture`] exists so a failing assertion can show the values as the
//! test author wrote them, alongside the values a mapping function turned
//! them into. Building a proxy through [`Capture::all_match_by`] or
//! [`Capture::any_match_by`] makes the proxy render both.
//!
//! # Example
//!
//! ```rust
//! use iter_assert::capture;
//!
//! let proxy = capture(0..3).all_match_by(|v| v + 9000);
//! assert_eq!(
//!     proxy.to_string(),
//!     "[0, 1, 2] = capture\nall(9000, 9001, 9002)",
//! );
//! ```

use std::fmt;
use std::fmt::Debug;

use crate::proxy::Proxy;
use crate::reduce::Reducer;

/// Snapshot a sequence for diagnostics.
///
/// Eagerly drains the input, preserving order and duplicates. A one-shot
/// iterator is fully consumed. The input must be finite.
///
/// # Example
///
/// ```rust
/// use iter_assert::capture;
///
/// let cap = capture(vec![1, 2, 2]);
/// assert_eq!(cap.values(), &[1, 2, 2]);
/// assert_eq!(cap.to_string(), "[1, 2, 2]");
/// ```
#[must_use]
pub fn capture<I>(values: I) -> Capture<I::Item>
where
    I: IntoIterator,
{
    Capture {
        values: values.into_iter().collect(),
    }
}

/// A materialized snapshot of a sequence's original values.
///
/// Created by [`capture`]. Immutable; lives only for the duration of one
/// assertion expression.
pub struct Capture<T> {
    values: Vec<T>,
}

impl<T> Capture<T> {
    /// The stored values, in input iteration order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consume the capture, returning the stored values.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Number of captured values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the capture holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Debug> Capture<T> {
    /// Build an all-proxy over the captured values unchanged.
    ///
    /// The proxy renders the captured values on a `= capture` line in its
    /// failure diagnostics.
    #[must_use]
    pub fn all_match(self) -> Proxy<T> {
        self.match_by(Reducer::All, |value| value)
    }

    /// Build an any-proxy over the captured values unchanged.
    #[must_use]
    pub fn any_match(self) -> Proxy<T> {
        self.match_by(Reducer::Any, |value| value)
    }

    /// Build an all-proxy over the captured values mapped through `f`.
    ///
    /// `f` is called exactly once per element, in order. The proxy compares
    /// the mapped values but still renders the captured originals.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iter_assert::capture;
    ///
    /// assert!(capture(0..3).all_match_by(|v| v + 9000).at_least(9000));
    /// ```
    #[must_use]
    pub fn all_match_by<F, U>(self, f: F) -> Proxy<U>
    where
        F: FnMut(T) -> U,
    {
        self.match_by(Reducer::All, f)
    }

    /// Build an any-proxy over the captured values mapped through `f`.
    #[must_use]
    pub fn any_match_by<F, U>(self, f: F) -> Proxy<U>
    where
        F: FnMut(T) -> U,
    {
        self.match_by(Reducer::Any, f)
    }

    fn match_by<F, U>(self, reducer: Reducer, f: F) -> Proxy<U>
    where
        F: FnMut(T) -> U,
    {
        // Render the originals before mapping consumes them.
        let originals = self.to_string();
        let mapped = self.values.into_iter().map(f).collect();
        Proxy::with_captured(mapped, reducer, originals)
    }
}

impl<T: Debug> fmt::Display for Capture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value:?}")?;
        }
        f.write_str("]")
    }
}

impl<T: Debug> fmt::Debug for Capture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_preserves_order_and_duplicates() {
        let cap = capture(vec![3, 1, 1, 2]);
        assert_eq!(cap.values(), &[3, 1, 1, 2]);
        assert_eq!(cap.len(), 4);
        assert!(!cap.is_empty());
    }

    #[test]
    fn test_capture_drains_one_shot_iterator() {
        let mut source = vec![1, 2, 3].into_iter();
        let cap = capture(&mut source);
        assert_eq!(cap.values(), &[1, 2, 3]);
        assert_eq!(source.next(), None);
    }

    #[test]
    fn test_capture_renders_as_delimited_list() {
        assert_eq!(capture(0..3).to_string(), "[0, 1, 2]");
        assert_eq!(capture(Vec::<i32>::new()).to_string(), "[]");
        assert_eq!(capture(["a", "b"]).to_string(), r#"["a", "b"]"#);
    }

    #[test]
    fn test_all_match_keeps_originals_in_rendering() {
        let proxy = capture(0..3).all_match_by(|v| v + 9000);
        assert_eq!(proxy.values(), &[9000, 9001, 9002]);
        assert_eq!(
            proxy.to_string(),
            "[0, 1, 2] = capture\nall(9000, 9001, 9002)"
        );
    }

    #[test]
    fn test_identity_match_renders_same_values_twice() {
        let proxy = capture(0..2).any_match();
        assert_eq!(proxy.to_string(), "[0, 1] = capture\nany(0, 1)");
    }

    #[test]
    fn test_mapping_runs_once_per_element_in_order() {
        let mut seen = Vec::new();
        let _proxy = capture(vec![10, 20, 30]).all_match_by(|v| {
            seen.push(v);
            v
        });
        assert_eq!(seen, vec![10, 20, 30]);
    }
}

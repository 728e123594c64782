//! Proxies that stand in for "the reduced result of comparing every
//! element", while retaining enough information to explain themselves.
//!
//! Construct a [`Proxy`] with [`all_match`] / [`any_match`] (or their
//! `_by` variants that map each element first), then compare it against a
//! scalar. Unlike `iter.all(..)`, the proxy keeps every evaluated value,
//! so a failure message can list them all:
//!
//! ```rust
//! use iter_assert::all_match;
//!
//! let proxy = all_match(0..3);
//! assert!(!proxy.less_than(1));
//! assert_eq!(proxy.to_string(), "all(0, 1, 2)");
//! ```
//!
//! The [`assert_matched!`](crate::assert_matched) macro turns a `false`
//! reduction into a panic carrying that rendered text, which is what a
//! failing test reports.

use std::fmt;
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::reduce::Reducer;

/// Build a proxy asserting a condition over **all** elements.
///
/// Eagerly drains `values`, preserving order and duplicates. Every element
/// is materialized before any comparison runs, so diagnostics can show the
/// full sequence even when an early element already decides the outcome.
///
/// # Example
///
/// ```rust
/// use iter_assert::all_match;
///
/// assert!(all_match(0..3).less_than(3));
/// assert!(!all_match(0..3).less_than(1));
/// ```
#[must_use]
pub fn all_match<I>(values: I) -> Proxy<I::Item>
where
    I: IntoIterator,
{
    Proxy::new(values.into_iter().collect(), Reducer::All)
}

/// Build a proxy asserting a condition over **any** element.
///
/// # Example
///
/// ```rust
/// use iter_assert::any_match;
///
/// assert!(any_match(0..3).equal_to(2));
/// assert!(!any_match(0..3).equal_to(4));
/// ```
#[must_use]
pub fn any_match<I>(values: I) -> Proxy<I::Item>
where
    I: IntoIterator,
{
    Proxy::new(values.into_iter().collect(), Reducer::Any)
}

/// Build an all-proxy over `values` mapped through `f`.
///
/// `f` is called exactly once per element, in iteration order, with no
/// memoization. The proxy stores and renders the mapped values.
///
/// # Example
///
/// ```rust
/// use iter_assert::all_match_by;
///
/// let words = ["ab", "cde", "f"];
/// assert!(all_match_by(words, str::len).at_most(3));
/// ```
#[must_use]
pub fn all_match_by<I, F, U>(values: I, f: F) -> Proxy<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    Proxy::new(values.into_iter().map(f).collect(), Reducer::All)
}

/// Build an any-proxy over `values` mapped through `f`.
///
/// # Example
///
/// ```rust
/// use iter_assert::any_match_by;
///
/// assert!(any_match_by(0..3, |v| v + 1).equal_to(3));
/// ```
#[must_use]
pub fn any_match_by<I, F, U>(values: I, f: F) -> Proxy<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    Proxy::new(values.into_iter().map(f).collect(), Reducer::Any)
}

/// A comparison applied element-wise by [`Proxy::compare`].
///
/// `Display` renders the operator symbol, so failure messages read like the
/// expression that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Cmp {
    /// Every comparison kind, in a fixed order. Handy for exhaustive tests.
    pub const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Lt, Self::Le, Self::Gt, Self::Ge];

    /// The operator symbol, e.g. `"<="` for [`Cmp::Le`].
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    fn apply<T, U>(self, lhs: &T, rhs: &U) -> bool
    where
        T: PartialOrd<U>,
    {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}

impl fmt::Display for Cmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The evaluated values behind one assertion, plus the rule for collapsing
/// per-element results into a single boolean.
///
/// Created by [`all_match`] / [`any_match`] (or via
/// [`Capture`](crate::Capture) to retain pre-mapping originals). Immutable,
/// single-threaded, local to one assertion expression.
pub struct Proxy<T> {
    values: Vec<T>,
    reducer: Reducer,
    /// Rendered pre-mapping originals, present when built from a `Capture`.
    captured: Option<String>,
}

impl<T> Proxy<T> {
    pub(crate) fn new(values: Vec<T>, reducer: Reducer) -> Self {
        Self {
            values,
            reducer,
            captured: None,
        }
    }

    pub(crate) fn with_captured(values: Vec<T>, reducer: Reducer, captured: String) -> Self {
        Self {
            values,
            reducer,
            captured: Some(captured),
        }
    }

    /// The stored (mapped) values, in input iteration order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The reduction rule this proxy applies.
    #[must_use]
    pub fn reducer(&self) -> Reducer {
        self.reducer
    }

    /// The rendered original values, if this proxy was built from a
    /// [`Capture`](crate::Capture).
    #[must_use]
    pub fn captured(&self) -> Option<&str> {
        self.captured.as_deref()
    }

    /// Compare every stored value against `rhs` with `op`, then reduce.
    ///
    /// Each element is compared independently; the per-element booleans are
    /// collapsed with this proxy's [`Reducer`] into the single result. An
    /// empty all-proxy compares `true` for every operator, an empty
    /// any-proxy `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iter_assert::{all_match, Cmp};
    ///
    /// assert!(all_match(0..3).compare(Cmp::Lt, &3));
    /// assert!(!all_match(0..3).compare(Cmp::Lt, &2));
    /// ```
    #[must_use]
    pub fn compare<U>(&self, op: Cmp, rhs: &U) -> bool
    where
        T: PartialOrd<U>,
    {
        self.reducer
            .reduce(self.values.iter().map(|value| op.apply(value, rhs)))
    }

    /// Element-wise `==`, reduced. Shorthand for [`Cmp::Eq`].
    #[must_use]
    pub fn equal_to<U>(&self, rhs: U) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare(Cmp::Eq, &rhs)
    }

    /// Element-wise `!=`, reduced.
    #[must_use]
    pub fn not_equal_to<U>(&self, rhs: U) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare(Cmp::Ne, &rhs)
    }

    /// Element-wise `<`, reduced.
    #[must_use]
    pub fn less_than<U>(&self, rhs: U) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare(Cmp::Lt, &rhs)
    }

    /// Element-wise `<=`, reduced.
    #[must_use]
    pub fn at_most<U>(&self, rhs: U) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare(Cmp::Le, &rhs)
    }

    /// Element-wise `>`, reduced.
    #[must_use]
    pub fn greater_than<U>(&self, rhs: U) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare(Cmp::Gt, &rhs)
    }

    /// Element-wise `>=`, reduced.
    #[must_use]
    pub fn at_least<U>(&self, rhs: U) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare(Cmp::Ge, &rhs)
    }
}

impl<T: Debug> Proxy<T> {
    /// Like [`Proxy::compare`], but return an [`Error`] instead of a bare
    /// `false`, with the rendered diagnostic as the message.
    ///
    /// For tests that return `Result` rather than panic.
    ///
    /// # Errors
    ///
    /// [`Error::AssertionFailed`] when the reduced comparison is `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iter_assert::{all_match, Cmp};
    ///
    /// let err = all_match(0..3).check(Cmp::Lt, &1).unwrap_err();
    /// assert_eq!(err.to_string(), "assertion failed: all(0, 1, 2) < 1");
    /// ```
    pub fn check<U>(&self, op: Cmp, rhs: &U) -> Result<()>
    where
        T: PartialOrd<U>,
        U: Debug,
    {
        if self.compare(op, rhs) {
            Ok(())
        } else {
            Err(Error::AssertionFailed(format!("{self} {op} {rhs:?}")))
        }
    }
}

impl Proxy<bool> {
    /// Reduce the stored values directly, without a comparison.
    ///
    /// Used when the proxy is asserted standalone: the elements (usually
    /// produced by a mapping function) are treated as the per-element
    /// results themselves.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iter_assert::all_match_by;
    ///
    /// assert!(all_match_by(0..3, |v| v < 3).holds());
    /// ```
    #[must_use]
    pub fn holds(&self) -> bool {
        self.reducer.reduce(self.values.iter().copied())
    }

    /// [`Proxy::holds`] as a `Result`, mirroring [`Proxy::check`].
    ///
    /// # Errors
    ///
    /// [`Error::AssertionFailed`] when the reduction is `false`.
    pub fn check_holds(&self) -> Result<()> {
        if self.holds() {
            Ok(())
        } else {
            Err(Error::AssertionFailed(format!("{self} does not hold")))
        }
    }
}

impl<T: Debug> fmt::Display for Proxy<T> {
    /// Render `<tag>(<elem0>, <elem1>, ...)` over the stored values, in
    /// stored order, preceded by a `[..] = capture` line when the proxy
    /// was built from a [`Capture`](crate::Capture).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(captured) = &self.captured {
            writeln!(f, "{captured} = capture")?;
        }
        write!(f, "{}(", self.reducer.tag())?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value:?}")?;
        }
        f.write_str(")")
    }
}

impl<T: Debug> fmt::Debug for Proxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Assert a proxy's reduced result, panicking with full diagnostics.
///
/// Two forms:
///
/// - `assert_matched!(proxy, <op> rhs)` — apply one of `==`, `!=`, `<`,
///   `<=`, `>`, `>=` element-wise and reduce.
/// - `assert_matched!(proxy)` — standalone truthiness via
///   [`holds`](Proxy::holds) (the proxy must hold `bool`s).
///
/// # Panics
///
/// Panics when the reduction is `false`. The message embeds the proxy's
/// rendered text, so it names every element that was compared:
///
/// ```text
/// assertion failed: all(0, 1, 2) < 1
/// ```
///
/// # Example
///
/// ```rust
/// use iter_assert::{assert_matched, all_match, any_match};
///
/// assert_matched!(all_match(0..3), < 3);
/// assert_matched!(any_match(0..3), == 2);
/// ```
///
/// ```rust,should_panic
/// use iter_assert::{assert_matched, all_match};
///
/// assert_matched!(all_match(0..3), < 1); // panics: all(0, 1, 2) < 1
/// ```
#[macro_export]
macro_rules! assert_matched {
    (@cmp $proxy:expr, $op:expr, $rhs:expr) => {{
        let proxy = $proxy;
        let rhs = $rhs;
        let op = $op;
        if !proxy.compare(op, &rhs) {
            panic!("assertion failed: {proxy} {op} {rhs:?}");
        }
    }};
    ($proxy:expr, == $rhs:expr) => {
        $crate::assert_matched!(@cmp $proxy, $crate::Cmp::Eq, $rhs)
    };
    ($proxy:expr, != $rhs:expr) => {
        $crate::assert_matched!(@cmp $proxy, $crate::Cmp::Ne, $rhs)
    };
    ($proxy:expr, <= $rhs:expr) => {
        $crate::assert_matched!(@cmp $proxy, $crate::Cmp::Le, $rhs)
    };
    ($proxy:expr, < $rhs:expr) => {
        $crate::assert_matched!(@cmp $proxy, $crate::Cmp::Lt, $rhs)
    };
    ($proxy:expr, >= $rhs:expr) => {
        $crate::assert_matched!(@cmp $proxy, $crate::Cmp::Ge, $rhs)
    };
    ($proxy:expr, > $rhs:expr) => {
        $crate::assert_matched!(@cmp $proxy, $crate::Cmp::Gt, $rhs)
    };
    ($proxy:expr) => {{
        let proxy = $proxy;
        if !proxy.holds() {
            panic!("assertion failed: {proxy} does not hold");
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::capture;

    #[test]
    fn test_all_match_reduces_with_and() {
        assert!(all_match(0..3).less_than(3));
        assert!(!all_match(0..3).less_than(2));
        assert!(all_match([5, 5, 5]).equal_to(5));
        assert!(!all_match([5, 5, 6]).equal_to(5));
    }

    #[test]
    fn test_any_match_reduces_with_or() {
        assert!(any_match(0..3).equal_to(2));
        assert!(!any_match(0..3).equal_to(4));
        assert!(any_match([1, 9]).greater_than(5));
        assert!(!any_match([1, 2]).greater_than(5));
    }

    #[test]
    fn test_compare_matches_named_methods() {
        let proxy = all_match(0..3);
        assert_eq!(proxy.compare(Cmp::Lt, &3), proxy.less_than(3));
        assert_eq!(proxy.compare(Cmp::Le, &2), proxy.at_most(2));
        assert_eq!(proxy.compare(Cmp::Ge, &0), proxy.at_least(0));
        assert_eq!(proxy.compare(Cmp::Ne, &1), proxy.not_equal_to(1));
    }

    #[test]
    fn test_empty_all_is_vacuously_true() {
        let proxy = all_match(Vec::<i32>::new());
        for op in Cmp::ALL {
            assert!(proxy.compare(op, &1));
        }
    }

    #[test]
    fn test_empty_any_is_false() {
        let proxy = any_match(Vec::<i32>::new());
        for op in Cmp::ALL {
            assert!(!proxy.compare(op, &1));
        }
    }

    #[test]
    fn test_mapping_law() {
        let mapped: Vec<i32> = (0..5).map(|v| v * 2).collect();
        let by = all_match_by(0..5, |v| v * 2);
        let plain = all_match(mapped);
        for op in Cmp::ALL {
            for rhs in [0, 4, 8, 9] {
                assert_eq!(by.compare(op, &rhs), plain.compare(op, &rhs));
            }
        }
        assert_eq!(by.to_string(), plain.to_string());
    }

    #[test]
    fn test_mapping_side_effects_run_once_per_element() {
        let mut calls = Vec::new();
        let proxy = any_match_by([4, 5, 6], |v| {
            calls.push(v);
            v
        });
        assert_eq!(calls, vec![4, 5, 6]);
        // Comparing twice does not re-run the mapping.
        assert!(proxy.equal_to(4));
        assert!(proxy.equal_to(6));
    }

    #[test]
    fn test_holds_reduces_booleans() {
        assert!(all_match([true, true]).holds());
        assert!(!all_match([true, false]).holds());
        assert!(any_match([false, true]).holds());
        assert!(!any_match([false, false]).holds());
        assert!(all_match(Vec::<bool>::new()).holds());
        assert!(!any_match(Vec::<bool>::new()).holds());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(all_match(0..3).to_string(), "all(0, 1, 2)");
        assert_eq!(any_match(0..3).to_string(), "any(0, 1, 2)");
        assert_eq!(any_match(Vec::<i32>::new()).to_string(), "any()");
        assert_eq!(all_match(Vec::<i32>::new()).to_string(), "all()");
    }

    #[test]
    fn test_rendering_uses_debug_form() {
        assert_eq!(
            any_match(["a", "b"]).to_string(),
            r#"any("a", "b")"#
        );
        assert_eq!(
            all_match([Some(1), None]).to_string(),
            "all(Some(1), None)"
        );
    }

    #[test]
    fn test_check_reports_rendered_diagnostic() {
        let err = all_match(0..3).check(Cmp::Lt, &1).unwrap_err();
        assert_eq!(err.to_string(), "assertion failed: all(0, 1, 2) < 1");
        assert!(all_match(0..3).check(Cmp::Lt, &3).is_ok());
    }

    #[test]
    fn test_check_holds() {
        assert!(all_match([true]).check_holds().is_ok());
        let err = any_match([false, false]).check_holds().unwrap_err();
        assert_eq!(
            err.to_string(),
            "assertion failed: any(false, false) does not hold"
        );
    }

    #[test]
    fn test_check_includes_capture_line() {
        let err = capture(0..3)
            .all_match_by(|v| v + 9000)
            .check(Cmp::Gt, &9000)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "assertion failed: [0, 1, 2] = capture\nall(9000, 9001, 9002) > 9000"
        );
    }

    #[test]
    fn test_assert_matched_passes() {
        assert_matched!(all_match(0..3), < 3);
        assert_matched!(all_match(0..3), <= 2);
        assert_matched!(any_match(0..3), == 2);
        assert_matched!(all_match(0..3), != 7);
        assert_matched!(any_match(0..3), > 1);
        assert_matched!(all_match(0..3), >= 0);
        assert_matched!(all_match_by(0..3, |v| v < 3));
    }

    #[test]
    #[should_panic(expected = "assertion failed: all(0, 1, 2) < 1")]
    fn test_assert_matched_panics_with_elements() {
        assert_matched!(all_match(0..3), < 1);
    }

    #[test]
    #[should_panic(expected = "any(0, 1, 2) == 4")]
    fn test_assert_matched_any_panics_with_elements() {
        assert_matched!(any_match(0..3), == 4);
    }

    #[test]
    #[should_panic(expected = "all(false, true) does not hold")]
    fn test_assert_matched_truthiness_panics() {
        assert_matched!(all_match([false, true]));
    }
}

//! Reduction strategies for per-element boolean results.
//!
//! A [`Reducer`] collapses the sequence of per-element comparison outcomes
//! into the single boolean a proxy reports. The set is closed: `All` is
//! logical AND, `Any` is logical OR, each with the standard empty-sequence
//! convention.

/// The rule used to collapse per-element booleans into one result.
///
/// Chosen at proxy construction by [`all_match`](crate::all_match) /
/// [`any_match`](crate::any_match); a proxy cannot exist without one.
///
/// # Example
///
/// ```rust
/// use iter_assert::Reducer;
///
/// assert!(Reducer::All.reduce([true, true]));
/// assert!(!Reducer::All.reduce([true, false]));
/// assert!(Reducer::Any.reduce([false, true]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Logical AND over all elements. Empty input reduces to `true`.
    All,
    /// Logical OR over all elements. Empty input reduces to `false`.
    Any,
}

impl Reducer {
    /// Collapse a sequence of booleans with this reducer.
    ///
    /// Empty-sequence conventions: AND-of-empty is `true`, OR-of-empty is
    /// `false`.
    #[must_use]
    pub fn reduce<I>(self, results: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        match self {
            Self::All => results.into_iter().all(|r| r),
            Self::Any => results.into_iter().any(|r| r),
        }
    }

    /// The tag used in diagnostic rendering: `"all"` or `"any"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
        }
    }
}

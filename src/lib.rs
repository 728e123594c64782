//! # iter-assert 🔍
//!
//! > Readable all/any assertions over iterators
//!
//! **iter-assert** lets a test assert a condition over every (or any)
//! element of a collection while keeping the failure message useful:
//! instead of the opaque `false` that `iter.all(..)` collapses to, the
//! failure names every evaluated element.
//!
//! ## Quick Start
//!
//! ```rust
//! use iter_assert::prelude::*;
//!
//! // Passes: every element is below 3.
//! assert_matched!(all_match(0..3), < 3);
//!
//! // A failing assertion panics with `assertion failed: all(0, 1, 2) < 1`,
//! // naming every element that was compared.
//! ```
//!
//! ## Features
//!
//! - 🔍 **Element-wise comparisons** - `==`, `!=`, `<`, `<=`, `>`, `>=`
//!   applied per element and reduced with all/any semantics
//! - 🗺️ **Mapping** - evaluate an accessor or predicate per element, and
//!   report the evaluated values on failure
//! - 📸 **Capture** - keep the original values alongside the mapped ones,
//!   so the failure shows both
//! - 🧾 **Diagnostics first** - sequences are fully materialized up front;
//!   the message always lists every element, never a short-circuited prefix

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capture;
pub mod error;
pub mod proxy;
pub mod reduce;

/// Prelude for convenient imports
///
/// ```rust
/// use iter_assert::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assert_matched;
    pub use crate::capture::{capture, Capture};
    pub use crate::error::{Error, Result};
    pub use crate::proxy::{all_match, all_match_by, any_match, any_match_by, Cmp, Proxy};
    pub use crate::reduce::Reducer;
}

// Re-exports
pub use capture::{capture, Capture};
pub use error::{Error, Result};
pub use proxy::{all_match, all_match_by, any_match, any_match_by, Cmp, Proxy};
pub use reduce::Reducer;

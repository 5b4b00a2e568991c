//! Catalog filter and sort engine.
//!
//! A [`ListingQuery`] captures every active filter and sort selection at
//! one point in time; [`filter_and_sort`] derives the visible listing view
//! from it. Both are pure over the immutable catalog.

mod filter;
mod query;

pub use filter::filter_and_sort;
pub use query::{ListingQuery, RangeFilter, SortKey};

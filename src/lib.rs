//! Sort Playground
//!
//! In-place bubble sort over integer sequences, with the aggregate summary
//! and annotated printout that go with it.

pub mod aggregate;
pub mod baselines;
pub mod bubble;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;

pub use aggregate::Summary;
pub use bubble::{
    bubble_sort, bubble_sort_counted, bubble_sort_descending, bubble_sort_early_exit,
    BubbleSorter, EarlyExitBubbleSorter, SortStats,
};
pub use error::{InputError, LoggingError};
pub use report::Report;

/// Trait for sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [i32]);

    /// Name of this sorting method
    fn name(&self) -> &'static str;
}

/// Returns true when every element is `<=` its successor.
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

//! Bubble sort: the in-place exchange sort the playground demonstrates.
//!
//! Each scan walks adjacent pairs up to the unsorted boundary and swaps any
//! pair with `left > right`. After a scan the largest remaining element sits
//! at the boundary, so the boundary shrinks by one. At most `n - 1` scans.
//!
//! Swaps happen only on strict `>` (strict `<` for the descending order), so
//! equal elements keep their relative order and every variant here is stable.

use serde::Serialize;

use crate::Sorter;

/// Classic O(n²) bubble sort, literal nested-loop policy
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn sort(&self, data: &mut [i32]) {
        bubble_sort(data);
    }

    fn name(&self) -> &'static str {
        "bubble"
    }
}

/// Bubble sort that stops after the first scan with no exchange
pub struct EarlyExitBubbleSorter;

impl Sorter for EarlyExitBubbleSorter {
    fn sort(&self, data: &mut [i32]) {
        bubble_sort_early_exit(data);
    }

    fn name(&self) -> &'static str {
        "bubble_early_exit"
    }
}

/// Sort `data` ascending with the literal policy: always `n - 1` scans.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for boundary in (1..n).rev() {
        for j in 0..boundary {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Sort `data` ascending, returning as soon as a scan makes no exchange.
///
/// Same result as [`bubble_sort`]; already-sorted input costs one scan.
pub fn bubble_sort_early_exit<T: Ord>(data: &mut [T]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for boundary in (1..n).rev() {
        let mut swapped = false;
        for j in 0..boundary {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sort `data` descending with the literal policy.
///
/// Mirror of [`bubble_sort`]: pairs with `left < right` are exchanged, so
/// the smallest remaining element sinks to the boundary on each scan.
pub fn bubble_sort_descending<T: Ord>(data: &mut [T]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for boundary in (1..n).rev() {
        for j in 0..boundary {
            if data[j] < data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Work counters from one sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Completed scans over the unsorted prefix
    pub scans: usize,
    /// Adjacent-pair comparisons
    pub comparisons: usize,
    /// Swaps performed
    pub exchanges: usize,
}

/// Bubble sort with counters, using either policy.
pub fn bubble_sort_counted<T: Ord>(data: &mut [T], early_exit: bool) -> SortStats {
    let mut stats = SortStats::default();
    let n = data.len();
    if n <= 1 {
        return stats;
    }

    for boundary in (1..n).rev() {
        stats.scans += 1;
        let mut swapped = false;
        for j in 0..boundary {
            stats.comparisons += 1;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                stats.exchanges += 1;
                swapped = true;
            }
        }
        if early_exit && !swapped {
            break;
        }
    }

    stats
}

//! Aggregations and transformations over an integer sequence.
//!
//! Sums and squares are widened to `i64`, which holds any sum of up to 2^32
//! `i32` values and any single `i32` square.

use serde::Serialize;

/// Aggregate view of one sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub sum: i64,
    /// `None` for an empty sequence
    pub average: Option<f64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    /// Even elements, in input order
    pub evens: Vec<i32>,
    /// Odd elements, in input order
    pub odds: Vec<i32>,
    pub squares: Vec<i64>,
    /// Product of all elements, `None` on `i64` overflow
    pub product: Option<i64>,
}

impl Summary {
    /// Compute every aggregate for `values`.
    pub fn of(values: &[i32]) -> Self {
        let count = values.len();
        let sum = sum(values);
        let (min, max) = min_max(values).unzip();

        Self {
            count,
            sum,
            average: average(values),
            min,
            max,
            evens: values.iter().copied().filter(|v| v % 2 == 0).collect(),
            odds: values.iter().copied().filter(|v| v % 2 != 0).collect(),
            squares: squares(values),
            product: product(values),
        }
    }
}

pub fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}

pub fn average(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(values) as f64 / values.len() as f64)
}

/// Smallest and largest element in one pass.
pub fn min_max(values: &[i32]) -> Option<(i32, i32)> {
    let (&first, rest) = values.split_first()?;
    let mut min_val = first;
    let mut max_val = first;
    for &v in rest {
        if v < min_val {
            min_val = v;
        }
        if v > max_val {
            max_val = v;
        }
    }
    Some((min_val, max_val))
}

pub fn squares(values: &[i32]) -> Vec<i64> {
    values
        .iter()
        .map(|&v| {
            let v = i64::from(v);
            v * v
        })
        .collect()
}

/// Product of all elements; the empty product is 1.
pub fn product(values: &[i32]) -> Option<i64> {
    values
        .iter()
        .try_fold(1i64, |acc, &v| acc.checked_mul(i64::from(v)))
}

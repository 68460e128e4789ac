use crate::Sorter;

/// Standard library sort - the gold standard
pub struct StdSorter;

impl Sorter for StdSorter {
    #[inline]
    fn sort(&self, data: &mut [i32]) {
        data.sort();
    }

    fn name(&self) -> &'static str {
        "std"
    }
}

/// Unstable sort - often faster, no stability guarantee
pub struct StdUnstableSorter;

impl Sorter for StdUnstableSorter {
    #[inline]
    fn sort(&self, data: &mut [i32]) {
        data.sort_unstable();
    }

    fn name(&self) -> &'static str {
        "std_unstable"
    }
}

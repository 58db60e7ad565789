use std::cmp::Ordering;

/// Comparison function wrapped with a call-scoped comparison counter.
///
/// Every top-level search or sort call creates its own counter around the caller's comparison
/// function and lends it by `&mut` to its helper steps, so recursive style sub-steps accumulate
/// into one total while independent calls never share state. Each call through
/// [`is_less`](Self::is_less), [`compare`](Self::compare), [`matches`](Self::matches) or
/// [`probe`](Self::probe) charges exactly one comparison.
/// [`is_less_uncharged`](Self::is_less_uncharged) is for bookkeeping steps that are not part of
/// the reported total.
pub(crate) struct ComparisonCounter<F> {
    compare: F,
    count: u64,
}

impl<F> ComparisonCounter<F> {
    #[inline]
    pub(crate) fn new(compare: F) -> Self {
        Self { compare, count: 0 }
    }

    #[inline]
    pub(crate) fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub(crate) fn compare<T>(&mut self, a: &T, b: &T) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.count += 1;
        (self.compare)(a, b)
    }

    #[inline]
    pub(crate) fn is_less<T>(&mut self, a: &T, b: &T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.compare(a, b) == Ordering::Less
    }

    /// Charges one comparison for an equality style test of `elem` against a fixed target.
    #[inline]
    pub(crate) fn matches<T>(&mut self, elem: &T) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.count += 1;
        (self.compare)(elem)
    }

    /// Charges one comparison for a three-way test of `elem` against a fixed target.
    #[inline]
    pub(crate) fn probe<T>(&mut self, elem: &T) -> Ordering
    where
        F: FnMut(&T) -> Ordering,
    {
        self.count += 1;
        (self.compare)(elem)
    }

    #[inline]
    pub(crate) fn is_less_uncharged<T>(&mut self, a: &T, b: &T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        (self.compare)(a, b) == Ordering::Less
    }
}

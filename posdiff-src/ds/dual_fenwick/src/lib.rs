//! Fenwick tree pair holding counts and value sums over ranks `1..=k`.
//!
//! Both trees share one index space and are only ever updated together, so
//! a prefix query always sees a consistent `(count, sum)` pair.

use std::mem::size_of;

#[derive(Clone, Debug)]
pub struct DualFenwick {
    count: Vec<u64>,
    sum: Vec<i128>,
}

impl DualFenwick {
    pub fn new(k: usize) -> Self {
        Self { count: vec![0; k + 1], sum: vec![0; k + 1] }
    }

    /// Number of ranks, `k`.
    pub fn len(&self) -> usize { self.count.len() - 1 }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Count and value sum of the inserted elements whose rank is at most
    /// `rank`. `query(0)` is `(0, 0)`.
    ///
    /// # Panics
    ///
    /// Panics if `rank > k`.
    pub fn query(&self, rank: usize) -> (u64, i128) {
        let k = self.len();
        assert!(rank <= k, "rank {rank} out of range for {k} ranks");

        let (mut count, mut sum) = (0, 0);
        let mut i = rank;
        while i > 0 {
            count += self.count[i];
            sum += self.sum[i];
            i -= i & i.wrapping_neg();
        }
        (count, sum)
    }

    /// Records one occurrence of `value` at `rank`.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= rank <= k`.
    pub fn insert(&mut self, rank: usize, value: impl Into<i128>) {
        let k = self.len();
        assert!(
            (1..=k).contains(&rank),
            "rank {rank} out of range for {k} ranks"
        );

        let value = value.into();
        let mut i = rank;
        while i <= k {
            self.count[i] += 1;
            self.sum[i] += value;
            i += i & i.wrapping_neg();
        }
    }

    pub fn heap_bytes(&self) -> usize {
        self.count.capacity() * size_of::<u64>()
            + self.sum.capacity() * size_of::<i128>()
    }
}

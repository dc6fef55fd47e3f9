//! Sum of `a[j] - a[i]` over all `i < j` with `a[j] > a[i]`, in
//! $O(n \log n)$ time.
//!
//! Values are ranked by coordinate compression and streamed left to right
//! through a [`DualFenwick`]. When `a[j]` arrives, the tree holds exactly
//! `a[..j]`, so the prefix up to `rank(a[j]) - 1` yields the count $c$ and
//! sum $s$ of the strictly smaller earlier elements, and `a[j]` contributes
//! $a_j c - s$.
//!
//! Every value is widened to `i128` before any arithmetic. Inputs are
//! restricted to integers of at most 64 bits, so neither the tree cells nor
//! the total can overflow as long as $n < 2^{32}$.
//!
//! ```compile_fail
//! use positive_difference_sum::PositiveDifferenceSum;
//!
//! [1_i128, 2].positive_difference_sum();
//! ```

use dual_fenwick::DualFenwick;
use rank_compress::RankCompress;

mod sealed {
    pub trait Sealed {}
}

/// Integer types of at most 64 bits.
pub trait Element: Copy + Ord + Into<i128> + sealed::Sealed {}

macro_rules! impl_element {
    ( $($ty:ty)* ) => { $(
        impl sealed::Sealed for $ty {}
        impl Element for $ty {}
    )* };
}

impl_element! { i8 i16 i32 i64 u8 u16 u32 u64 }

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: i128,
    /// Number of pairs `i < j` with `a[j] > a[i]`.
    pub pairs: u64,
    /// Number of distinct values.
    pub distinct: usize,
    /// Heap bytes held by the rank map and the trees during the pass.
    pub heap_bytes: usize,
}

pub trait PositiveDifferenceSum {
    fn positive_difference_sum(&self) -> i128 {
        self.positive_difference_summary().total
    }
    fn positive_difference_summary(&self) -> Summary;
}

impl<T: Element> PositiveDifferenceSum for [T] {
    fn positive_difference_summary(&self) -> Summary {
        let enc = self.rank_map();
        let mut ft = DualFenwick::new(enc.len());
        let mut res = Summary {
            distinct: enc.len(),
            heap_bytes: enc.heap_bytes() + ft.heap_bytes(),
            ..Summary::default()
        };

        for x in self {
            let r = enc.rank(x).expect("every element has a rank");
            if r > 1 {
                let (count, sum) = ft.query(r - 1);
                let x: i128 = (*x).into();
                res.total += x * count as i128 - sum;
                res.pairs += count;
            }
            ft.insert(r, *x);
        }
        res
    }
}

pub fn compute_positive_difference_sum<T: Element>(a: &[T]) -> i128 {
    a.positive_difference_sum()
}

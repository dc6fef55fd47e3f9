//! Sum of positive pairwise differences.
//!
//! For a sequence $a$ of length $n$, computes
//! $$ \sum_{i < j,\; a_i < a_j} (a_j - a_i) $$
//! in $O(n \log n)$ time with coordinate compression and a pair of Fenwick
//! trees.
//!
//! | category | contents |
//! |---|---|
//! | [`ds`] | [`DualFenwick`](ds::DualFenwick) |
//! | [`seq`] | [`RankMap`](seq::RankMap), [`PositiveDifferenceSum`](seq::PositiveDifferenceSum) |
//! | [`naive`] | quadratic reference evaluators |
//! | [`random`] | seeded sequence generators |
//!
//! ```
//! use posdiff_doc::seq::PositiveDifferenceSum;
//!
//! assert_eq!([1, 3, 2, 4].positive_difference_sum(), 9);
//! assert_eq!([5, 1, 3, 2].positive_difference_summary().pairs, 2);
//! ```

pub use ds;
pub use naive;
pub use random;
pub use seq;

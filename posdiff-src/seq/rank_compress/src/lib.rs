use std::mem::size_of;

// coordinate compression onto 1-based dense ranks
pub trait RankCompress {
    type Item: Ord + Clone;
    fn rank_map(&self) -> RankMap<Self::Item>;
}

impl<T: Ord + Clone> RankCompress for [T] {
    type Item = T;
    fn rank_map(&self) -> RankMap<T> { RankMap::new(self) }
}

/// Order-preserving bijection between the distinct values of a sequence and
/// `1..=k`.
#[derive(Clone, Debug)]
pub struct RankMap<T> {
    values: Vec<T>,
}

impl<T: Ord + Clone> RankMap<T> {
    pub fn new(a: &[T]) -> Self {
        let mut values = a.to_vec();
        values.sort_unstable();
        values.dedup();
        values.shrink_to_fit();
        Self { values }
    }

    pub fn rank(&self, x: &T) -> Option<usize> {
        self.values.binary_search(x).ok().map(|i| i + 1)
    }
}

impl<T> RankMap<T> {
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Distinct values in ascending order; the `i`-th has rank `i + 1`.
    pub fn values(&self) -> &[T] { &self.values }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.values.iter().zip(1..)
    }

    pub fn heap_bytes(&self) -> usize {
        self.values.capacity() * size_of::<T>()
    }
}

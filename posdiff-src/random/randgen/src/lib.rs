use std::{
    collections::BTreeSet,
    ops::{Range, RangeInclusive},
};

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` independent draws from `bound`; duplicates allowed.
pub struct Seq<B> {
    pub bound: B,
    pub len: usize,
}

pub struct StrictAsc<B> {
    pub bound: B,
    pub len: usize,
}

pub struct Asc<B> {
    pub bound: B,
    pub len: usize,
}

/// Pairwise distinct values in uniformly random order.
pub struct Distinct<B> {
    pub bound: B,
    pub len: usize,
}

pub struct Constant {
    pub value: i64,
    pub len: usize,
}

impl Gen for Range<i64> {
    type Output = i64;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for RangeInclusive<i64> {
    type Output = i64;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl<B: Gen<Output = i64>> Gen for Seq<B> {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = &self.bound;
        (0..self.len).map(|_| between.generate(rng)).collect()
    }
}

impl Gen for StrictAsc<Range<i64>> {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound: Range { start, end }, len } = self;
        let width = (end - start) as usize;
        assert!(*len <= width, "{len} distinct values out of {width}");

        // sample the complement instead when it is the smaller side
        let dense = 2 * len > width / 2;
        let count = if dense { width - len } else { *len };

        let mut seen = BTreeSet::new();
        while seen.len() < count {
            seen.insert((*start..*end).generate(rng));
        }

        if dense {
            (*start..*end).filter(|x| !seen.contains(x)).collect()
        } else {
            seen.into_iter().collect()
        }
    }
}

impl Gen for Asc<Range<i64>> {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound: Range { start, end }, len } = self;
        if *len == 0 {
            return vec![];
        }
        let mut strict =
            StrictAsc { bound: *start..end + *len as i64 - 1, len: *len }
                .generate(rng);
        for (i, x) in strict.iter_mut().enumerate() {
            *x -= i as i64;
        }
        strict
    }
}

impl Gen for Distinct<Range<i64>> {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound, len } = self;
        let mut res = StrictAsc { bound: bound.clone(), len: *len }.generate(rng);
        res.shuffle(rng);
        res
    }
}

impl Gen for Constant {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, _: &mut R) -> Self::Output {
        vec![self.value; self.len]
    }
}

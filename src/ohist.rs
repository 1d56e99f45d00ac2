//! Ordered histogram: `K` independent sorted `(u64 key -> i64 count)`
//! sets, used by the out-of-scope stochastic-tree modeling pipeline to
//! tally occurrences of tree-model indices.
//!
//! Each set is kept sorted by key in a `Vec<(u64, i64)>`, located via
//! `Vec::binary_search_by_key` and grown by `Vec`'s own amortized
//! doubling. Counts are `i64` so a long run of increments cannot
//! silently wrap on narrower-`int` platforms.

extern crate alloc;

use alloc::vec::Vec;

/// Failure modes for [`OrderedHistogram`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OhistError {
    /// `k` was outside `[0, K)`.
    InvalidSet { k: usize, k_size: usize },
}

/// `K` independent ordered `(key, count)` sets.
pub struct OrderedHistogram {
    sets: Vec<Vec<(u64, i64)>>,
}

impl OrderedHistogram {
    /// Creates `k_size` independent empty sets.
    pub fn new(k_size: usize) -> Self {
        let mut sets = Vec::with_capacity(k_size);
        for _ in 0..k_size {
            sets.push(Vec::new());
        }
        OrderedHistogram { sets }
    }

    fn check(&self, k: usize) -> Result<(), OhistError> {
        if k >= self.sets.len() {
            #[cfg(feature = "verbose-logging")]
            log::error!("ohist: k out of range {k}");
            return Err(OhistError::InvalidSet {
                k,
                k_size: self.sets.len(),
            });
        }
        Ok(())
    }

    /// Inserts `key` into set `k`: if present, adds `increment` to its
    /// count and returns `Ok(false)`; otherwise inserts it in sorted
    /// order with initial count `increment` and returns `Ok(true)`.
    pub fn insert(&mut self, k: usize, key: u64, increment: i64) -> Result<bool, OhistError> {
        self.check(k)?;
        let set = &mut self.sets[k];
        match set.binary_search_by_key(&key, |&(k, _)| k) {
            Ok(i) => {
                set[i].1 += increment;
                Ok(false)
            }
            Err(i) => {
                set.insert(i, (key, increment));
                Ok(true)
            }
        }
    }

    /// Number of distinct keys present in set `k`.
    pub fn nelements(&self, k: usize) -> Result<usize, OhistError> {
        self.check(k)?;
        Ok(self.sets[k].len())
    }

    /// Reads the `n`-th entry (0-based, sorted by key) of set `k`.
    pub fn nth_element(&self, k: usize, n: usize) -> Result<Option<(u64, i64)>, OhistError> {
        self.check(k)?;
        Ok(self.sets[k].get(n).copied())
    }

    /// Empties every set, keeping `K` unchanged.
    pub fn clear(&mut self) {
        for set in &mut self.sets {
            set.clear();
        }
    }

    /// The configured number of independent sets.
    pub fn k_size(&self) -> usize {
        self.sets.len()
    }
}

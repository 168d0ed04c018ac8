//! Ascending-order permutations.
//!
//! Radiation and PWO both walk locations nearest-first and then write results
//! back in the caller's order. [`Permutation`] does the sort once:
//! [`Permutation::gather`] reads in sorted order and [`Permutation::scatter`]
//! writes back through the inverse, so no second argsort is needed.

use ndarray::{Array1, ArrayView1};

/// `order[r]` is the original index of the element with rank `r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    order: Vec<usize>,
}

impl Permutation {
    /// Indices that sort `values` ascending.
    ///
    /// The sort is stable: ties keep their original relative order. NaNs sort last
    /// (`f64::total_cmp`), though validated model inputs never contain any.
    pub fn argsort(values: &ArrayView1<f64>) -> Self {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        Self { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Original indices in rank order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Read `values` in rank order: `out[r] = values[order[r]]`.
    pub fn gather(&self, values: &ArrayView1<f64>) -> Array1<f64> {
        debug_assert_eq!(values.len(), self.len());
        self.order.iter().map(|&i| values[i]).collect()
    }

    /// Write rank-ordered `sorted` back to original positions: `out[order[r]] = sorted[r]`.
    pub fn scatter(&self, sorted: &ArrayView1<f64>) -> Array1<f64> {
        debug_assert_eq!(sorted.len(), self.len());
        self.inverse().gather(sorted)
    }

    /// The inverse permutation; its order maps an original index to its rank.
    pub fn inverse(&self) -> Self {
        let mut rank = vec![0usize; self.len()];
        for (r, &i) in self.order.iter().enumerate() {
            rank[i] = r;
        }
        Self { order: rank }
    }
}

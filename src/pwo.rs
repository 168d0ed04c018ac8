//! Population-weighted opportunities (Yan et al., 2014).
//!
//! Built column by column. For destination `j`, origins are ranked by distance
//! from `j` and walked nearest-first while a running `pop_in_radius` (starting
//! at `D_j`) absorbs each origin's outflow:
//!
//! \[
//! T_{ij} = \frac{D_j \left(\frac{1}{S_{ji}} - \frac{1}{M}\right)}
//!               {\sum_{k} D_k \left(\frac{1}{S'_{k}} - \frac{1}{M}\right)}
//! \]
//!
//! with `M` the total inflow of the system and `S'_k` a second, separate running
//! total that starts at the origin's outflow and absorbs the inflow of every
//! destination up to and including `k`.
//!
//! The sum skips the term where the destination index `k` equals the *rank*
//! of the origin being evaluated. That comparison mixes an index with a rank and
//! is kept as published so results line up with the reference data.
//!
//! Terms for zero-inflow destinations are skipped, and an origin whose sum has
//! no nonzero term gets zero flow, so every entry is finite.
//!
//! `1/S - 1/M` goes negative once the radius holds more than the system total,
//! so far origins can receive small negative flows.
//!
//! # References
//!
//! - Yan, Zhao, Fan, Di, Wang (2014). "Universal predictability of mobility
//!   patterns in cities", J. R. Soc. Interface 11.

use crate::marginals::{Locations, Marginals};
use crate::permutation::Permutation;
use crate::{Error, FlowModel, Result};
use ndarray::{Array1, Array2};
use tracing::debug;

/// Parameter-free population-weighted opportunities model.
#[derive(Debug, Clone)]
pub struct Pwo {
    marginals: Marginals,
    locations: Locations,
    total: f64,
}

impl Pwo {
    /// Build the model.
    ///
    /// Origins and destinations must be the same location set (`N == M`): the
    /// distance row of destination `j` is what ranks origins around it.
    /// Fails with [`Error::DegenerateTotals`] when total inflow is zero.
    pub fn new(
        inflows: &Array1<f64>,
        outflows: &Array1<f64>,
        dists: &Array2<f64>,
        origin_locations: &Array2<f64>,
        destination_locations: &Array2<f64>,
    ) -> Result<Self> {
        let marginals = Marginals::new(inflows, outflows, dists)?;
        if !marginals.is_square() {
            let n = marginals.n_origins();
            return Err(Error::ShapeMismatch {
                what: "dists (pwo needs one location set)",
                expected_rows: n,
                expected_cols: n,
                rows: n,
                cols: marginals.n_destinations(),
            });
        }
        let locations = Locations::new(
            origin_locations,
            destination_locations,
            marginals.n_origins(),
            marginals.n_destinations(),
        )?;

        let total = marginals.total_inflow();
        if total <= 0.0 {
            return Err(Error::DegenerateTotals("pwo needs positive total inflow"));
        }

        debug!(n_locations = marginals.n_origins(), total, "pwo model built");

        Ok(Self {
            marginals,
            locations,
            total,
        })
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Total inflow of the system (`M` in the formula).
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Flow from every origin to destination `j`, in origin order.
    pub fn from_destination(&self, j: usize) -> Array1<f64> {
        let inflows = self.marginals.inflows();
        let n = self.marginals.n_origins();
        let d_j = inflows[j];
        if d_j == 0.0 {
            return Array1::zeros(n);
        }

        let order = Permutation::argsort(&self.marginals.dists().row(j));
        let outflows = order.gather(&self.marginals.outflows());

        let mut flows = Array1::zeros(n);
        let mut pop_in_radius = d_j;
        for (rank, &o_i) in outflows.iter().enumerate() {
            pop_in_radius += o_i;

            let mut denom = 0.0;
            let mut denom_pop_in_radius = o_i;
            for (k, &d_k) in inflows.iter().enumerate() {
                denom_pop_in_radius += d_k;
                // A zero-inflow term is zero even when the radius is still empty.
                if k != rank && d_k > 0.0 {
                    denom += d_k * (1.0 / denom_pop_in_radius - 1.0 / self.total);
                }
            }

            // No competing opportunity left in the sum: nothing to distribute.
            if denom == 0.0 {
                continue;
            }
            flows[rank] = d_j * (1.0 / pop_in_radius - 1.0 / self.total) / denom;
        }

        order.scatter(&flows.view())
    }

    #[cfg(not(feature = "parallel"))]
    fn columns(&self) -> Vec<Array1<f64>> {
        (0..self.marginals.n_destinations())
            .map(|j| self.from_destination(j))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn columns(&self) -> Vec<Array1<f64>> {
        use rayon::prelude::*;
        (0..self.marginals.n_destinations())
            .into_par_iter()
            .map(|j| self.from_destination(j))
            .collect()
    }
}

impl FlowModel for Pwo {
    fn marginals(&self) -> &Marginals {
        &self.marginals
    }

    fn flowmat(&self) -> Array2<f64> {
        let n = self.marginals.n_origins();
        let m = self.marginals.n_destinations();
        let mut t = Array2::zeros((n, m));
        for (j, col) in self.columns().into_iter().enumerate() {
            t.column_mut(j).assign(&col);
        }
        debug!(n_origins = n, n_destinations = m, total = t.sum(), "pwo flows computed");
        t
    }
}

//! Radiation model (Simini et al., 2012).
//!
//! The share of origin `i`'s trips that end at destination `j` depends on how
//! much opportunity lies closer to `i` than `j` does, not on the raw distance:
//!
//! \[
//! T_{ij} = F_i \frac{O_i\, D_j}{(O_i + s_{ij})(O_i + D_j + s_{ij})},
//! \qquad F_i = \frac{1}{1 - O_i / \sum_k O_k}
//! \]
//!
//! where `s_ij` ("population in radius") is the inflow mass of every destination
//! strictly nearer to `i` than `j` in the distance ranking. `F_i` corrects for the
//! finite system size, so a row sums to a little over 1; scale by `O_i` for counts.
//!
//! Each origin's row is independent of the others; with the `parallel` feature
//! rows are computed on a rayon pool.
//!
//! # References
//!
//! - Simini, González, Maritan, Barabási (2012). "A universal model for mobility
//!   and migration patterns", Nature 484, 96-100.

use crate::marginals::{Locations, Marginals};
use crate::permutation::Permutation;
use crate::{Error, FlowModel, Result};
use ndarray::{Array1, Array2};
use tracing::debug;

/// Parameter-free radiation model.
#[derive(Debug, Clone)]
pub struct Radiation {
    marginals: Marginals,
    locations: Locations,
    total_outflow: f64,
}

impl Radiation {
    /// Build the model.
    ///
    /// `origin_locations` is `N × 2`, `destination_locations` is `M × 2`; both are
    /// stored but the formula only reads `dists`.
    ///
    /// Fails with [`Error::DegenerateTotals`] when total outflow is zero, or when a
    /// single origin holds all of it (its normalization `F_i` would be infinite).
    pub fn new(
        inflows: &Array1<f64>,
        outflows: &Array1<f64>,
        dists: &Array2<f64>,
        origin_locations: &Array2<f64>,
        destination_locations: &Array2<f64>,
    ) -> Result<Self> {
        let marginals = Marginals::new(inflows, outflows, dists)?;
        let locations = Locations::new(
            origin_locations,
            destination_locations,
            marginals.n_origins(),
            marginals.n_destinations(),
        )?;

        let total_outflow = marginals.total_outflow();
        if total_outflow <= 0.0 {
            return Err(Error::DegenerateTotals("radiation needs positive total outflow"));
        }
        if marginals.outflows().iter().any(|&o| o >= total_outflow) {
            return Err(Error::DegenerateTotals(
                "radiation needs outflow spread over more than one origin",
            ));
        }

        debug!(
            n_origins = marginals.n_origins(),
            n_destinations = marginals.n_destinations(),
            total_outflow,
            "radiation model built"
        );

        Ok(Self {
            marginals,
            locations,
            total_outflow,
        })
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Flow from origin `i` to every destination, in destination order.
    pub fn from_origin(&self, i: usize) -> Array1<f64> {
        let m = self.marginals.n_destinations();
        let o_i = self.marginals.outflows()[i];
        if o_i == 0.0 {
            return Array1::zeros(m);
        }

        let order = Permutation::argsort(&self.marginals.dists().row(i));
        let inflows = order.gather(&self.marginals.inflows());
        let f = 1.0 / (1.0 - o_i / self.total_outflow);

        let mut flows = Array1::zeros(m);
        let mut pop_in_radius = 0.0;
        for (r, &d_j) in inflows.iter().enumerate() {
            flows[r] = f * (o_i * d_j) / ((o_i + pop_in_radius) * (o_i + d_j + pop_in_radius));
            pop_in_radius += d_j;
        }

        order.scatter(&flows.view())
    }

    #[cfg(not(feature = "parallel"))]
    fn rows(&self) -> Vec<Array1<f64>> {
        (0..self.marginals.n_origins())
            .map(|i| self.from_origin(i))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn rows(&self) -> Vec<Array1<f64>> {
        use rayon::prelude::*;
        (0..self.marginals.n_origins())
            .into_par_iter()
            .map(|i| self.from_origin(i))
            .collect()
    }
}

impl FlowModel for Radiation {
    fn marginals(&self) -> &Marginals {
        &self.marginals
    }

    fn flowmat(&self) -> Array2<f64> {
        let n = self.marginals.n_origins();
        let m = self.marginals.n_destinations();
        let mut t = Array2::zeros((n, m));
        for (i, row) in self.rows().into_iter().enumerate() {
            t.row_mut(i).assign(&row);
        }
        debug!(n_origins = n, n_destinations = m, total = t.sum(), "radiation flows computed");
        t
    }
}

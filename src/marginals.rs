//! Validated, owned model inputs.
//!
//! Every universal model starts from the same three things: inflow per
//! destination, outflow per origin, and an origin × destination distance matrix.
//! [`Marginals`] checks them once and keeps independent copies, so a caller
//! mutating their arrays afterwards cannot reach into a built model.

use crate::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use tracing::debug;

/// Inflows (length `M`), outflows (length `N`) and distances (`N × M`).
#[derive(Debug, Clone, PartialEq)]
pub struct Marginals {
    inflows: Array1<f64>,
    outflows: Array1<f64>,
    dists: Array2<f64>,
}

impl Marginals {
    /// Validate and copy the inputs.
    ///
    /// Errors:
    /// - [`Error::ShapeMismatch`] if `dists` is not `outflows.len() × inflows.len()`
    /// - [`Error::NonFiniteInput`] for NaN or infinite values
    /// - [`Error::NegativeInput`] for negative values
    pub fn new(inflows: &Array1<f64>, outflows: &Array1<f64>, dists: &Array2<f64>) -> Result<Self> {
        let n = outflows.len();
        let m = inflows.len();
        if dists.dim() != (n, m) {
            return Err(Error::ShapeMismatch {
                what: "dists",
                expected_rows: n,
                expected_cols: m,
                rows: dists.nrows(),
                cols: dists.ncols(),
            });
        }

        check_nonnegative("inflows", inflows.iter())?;
        check_nonnegative("outflows", outflows.iter())?;
        check_nonnegative("dists", dists.iter())?;

        debug!(n_origins = n, n_destinations = m, "marginals validated");

        Ok(Self {
            inflows: inflows.to_owned(),
            outflows: outflows.to_owned(),
            dists: dists.to_owned(),
        })
    }

    /// Number of origins (`N`).
    pub fn n_origins(&self) -> usize {
        self.outflows.len()
    }

    /// Number of destinations (`M`).
    pub fn n_destinations(&self) -> usize {
        self.inflows.len()
    }

    pub fn inflows(&self) -> ArrayView1<'_, f64> {
        self.inflows.view()
    }

    pub fn outflows(&self) -> ArrayView1<'_, f64> {
        self.outflows.view()
    }

    pub fn dists(&self) -> ArrayView2<'_, f64> {
        self.dists.view()
    }

    pub fn total_inflow(&self) -> f64 {
        self.inflows.sum()
    }

    pub fn total_outflow(&self) -> f64 {
        self.outflows.sum()
    }

    pub fn is_square(&self) -> bool {
        self.n_origins() == self.n_destinations()
    }
}

/// Node coordinates carried alongside the marginals.
///
/// Distances are always supplied precomputed; the coordinates are kept so a
/// model describes its locations completely, not because any formula reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Locations {
    origins: Array2<f64>,
    destinations: Array2<f64>,
}

impl Locations {
    /// `origins` must be `n × 2`, `destinations` must be `m × 2`, all finite.
    pub fn new(origins: &Array2<f64>, destinations: &Array2<f64>, n: usize, m: usize) -> Result<Self> {
        check_coordinates("origin locations", origins, n)?;
        check_coordinates("destination locations", destinations, m)?;
        Ok(Self {
            origins: origins.to_owned(),
            destinations: destinations.to_owned(),
        })
    }

    pub fn origins(&self) -> ArrayView2<'_, f64> {
        self.origins.view()
    }

    pub fn destinations(&self) -> ArrayView2<'_, f64> {
        self.destinations.view()
    }
}

fn check_coordinates(what: &'static str, locs: &Array2<f64>, rows: usize) -> Result<()> {
    if locs.dim() != (rows, 2) {
        return Err(Error::ShapeMismatch {
            what,
            expected_rows: rows,
            expected_cols: 2,
            rows: locs.nrows(),
            cols: locs.ncols(),
        });
    }
    if let Some(index) = locs.iter().position(|x| !x.is_finite()) {
        return Err(Error::NonFiniteInput { what, index });
    }
    Ok(())
}

/// Reject NaN, infinities and negatives. Positions are in iteration (row-major) order.
pub(crate) fn check_nonnegative<'a>(
    what: &'static str,
    values: impl IntoIterator<Item = &'a f64>,
) -> Result<()> {
    for (index, &value) in values.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(Error::NonFiniteInput { what, index });
        }
        if value < 0.0 {
            return Err(Error::NegativeInput { what, index, value });
        }
    }
    Ok(())
}

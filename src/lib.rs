//! # spatial-interaction
//!
//! Universal spatial-interaction models: estimate who moves from where to where,
//! given only how much leaves each origin, how much arrives at each destination,
//! and how far apart they are.
//!
//! ## The Problem
//!
//! Marginal counts (outflow per origin, inflow per destination) are cheap to
//! observe; the full origin-destination (OD) matrix is not. The models here fill
//! in the OD matrix from the marginals and a distance matrix without fitting a
//! regression.
//!
//! ## Models
//!
//! | Model | Principle | Deterministic | Complexity |
//! |-------|-----------|---------------|------------|
//! | [`Lenormand`] | depletion assignment, `exp(-β d)` decay | no (seeded) | O(total · M) |
//! | [`Radiation`] | intervening opportunities per origin | yes | O(N · M log M) |
//! | [`Pwo`] | population-weighted opportunities per destination | yes | O(N · M²) |
//!
//! All three implement [`FlowModel`]; [`UniversalModel`] wraps any of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use spatial_interaction::{FlowModel, Radiation};
//!
//! let inflows = array![10.0, 20.0, 30.0];
//! let outflows = array![30.0, 20.0, 10.0];
//! let dists = array![[0.0, 1.0, 2.0], [1.0, 0.0, 1.0], [2.0, 1.0, 0.0]];
//! let locs = array![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
//!
//! let model = Radiation::new(&inflows, &outflows, &dists, &locs, &locs).unwrap();
//! let t = model.flowmat();
//! assert_eq!(t.dim(), (3, 3));
//! ```
//!
//! ## What Can Go Wrong
//!
//! 1. **Imbalanced totals**: [`Lenormand`] assigns unit by unit and needs
//!    `Σ inflows == Σ outflows` in whole numbers.
//! 2. **Misaligned inputs**: row `i` / column `j` of the distance matrix must refer
//!    to the same locations as `outflows[i]` / `inflows[j]`. Nothing here can check that.
//! 3. **Negative PWO entries**: the published PWO formula goes negative once the
//!    cumulative radius exceeds the system total. That is reproduced, not clamped.
//!
//! ## Beyond the models
//!
//! - [`accessibility`]: per-edge accessibility of competing destinations.
//! - [`metrics`]: Pearson correlation, CPC, Sørensen index, SRMSE for comparing
//!   a predicted OD matrix with an observed one.
//!
//! ## References
//!
//! - Lenormand, Huet, Gargiulo, Deffuant (2012). "A Universal Model of Commuting Networks"
//! - Simini, González, Maritan, Barabási (2012). "A universal model for mobility and
//!   migration patterns"
//! - Yan, Zhao, Fan, Di, Wang (2014). "Universal predictability of mobility patterns in cities"

use ndarray::Array2;
use thiserror::Error;

pub mod accessibility;
pub mod lenormand;
pub mod marginals;
pub mod metrics;
pub mod permutation;
pub mod pwo;
pub mod radiation;

pub use lenormand::{DistanceDecay, Lenormand, LenormandConfig};
pub use marginals::Marginals;
pub use permutation::Permutation;
pub use pwo::Pwo;
pub use radiation::Radiation;

/// Spatial-interaction error variants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input array does not have the shape implied by the marginals.
    #[error("{what} shape mismatch: expected ({expected_rows}, {expected_cols}), got ({rows}, {cols})")]
    ShapeMismatch {
        what: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Total inflow and total outflow differ.
    #[error("marginal totals differ: inflows sum to {inflows}, outflows sum to {outflows}")]
    ImbalancedMarginals { inflows: f64, outflows: f64 },

    /// A distance, inflow, outflow or mass is negative.
    #[error("{what} has a negative value {value} at position {index}")]
    NegativeInput {
        what: &'static str,
        index: usize,
        value: f64,
    },

    /// A value is NaN or infinite.
    #[error("{what} has a non-finite value at position {index}")]
    NonFiniteInput { what: &'static str, index: usize },

    /// A total the model divides by is zero (or makes a normalization infinite).
    #[error("degenerate totals: {0}")]
    DegenerateTotals(&'static str),

    /// Depletion assignment works in unit counts.
    #[error("{what} must hold whole-number counts, got {value} at position {index}")]
    NonIntegralCount {
        what: &'static str,
        index: usize,
        value: f64,
    },

    /// Distance-decay parameter (or the surface area it is derived from) is unusable.
    #[error("distance decay must be non-negative and finite, got {0}")]
    InvalidDecay(f64),

    /// Two sequences that must pair up have different lengths.
    #[error("lengths differ: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// Domain error (invalid inputs for the mathematical definition).
    #[error("{0}")]
    Domain(&'static str),
}

/// Result type for spatial-interaction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A model that turns marginals and distances into an origin × destination flow matrix.
///
/// Construction validates everything; `flowmat` never fails.
pub trait FlowModel {
    /// The validated inputs the model was built from.
    fn marginals(&self) -> &Marginals;

    /// Estimate the full `N × M` flow matrix. `T[[i, j]]` is the flow from origin
    /// `i` to destination `j`.
    fn flowmat(&self) -> Array2<f64>;

    /// Number of origins (`N`).
    fn n_origins(&self) -> usize {
        self.marginals().n_origins()
    }

    /// Number of destinations (`M`).
    fn n_destinations(&self) -> usize {
        self.marginals().n_destinations()
    }
}

/// Any of the universal models, behind one type.
#[derive(Debug, Clone)]
pub enum UniversalModel {
    Lenormand(Lenormand),
    Radiation(Radiation),
    Pwo(Pwo),
}

impl UniversalModel {
    /// Short, stable name of the wrapped model.
    pub fn name(&self) -> &'static str {
        match self {
            UniversalModel::Lenormand(_) => "lenormand",
            UniversalModel::Radiation(_) => "radiation",
            UniversalModel::Pwo(_) => "pwo",
        }
    }
}

impl FlowModel for UniversalModel {
    fn marginals(&self) -> &Marginals {
        match self {
            UniversalModel::Lenormand(m) => m.marginals(),
            UniversalModel::Radiation(m) => m.marginals(),
            UniversalModel::Pwo(m) => m.marginals(),
        }
    }

    fn flowmat(&self) -> Array2<f64> {
        match self {
            UniversalModel::Lenormand(m) => m.flowmat(),
            UniversalModel::Radiation(m) => m.flowmat(),
            UniversalModel::Pwo(m) => m.flowmat(),
        }
    }
}

impl From<Lenormand> for UniversalModel {
    fn from(m: Lenormand) -> Self {
        UniversalModel::Lenormand(m)
    }
}

impl From<Radiation> for UniversalModel {
    fn from(m: Radiation) -> Self {
        UniversalModel::Radiation(m)
    }
}

impl From<Pwo> for UniversalModel {
    fn from(m: Pwo) -> Self {
        UniversalModel::Pwo(m)
    }
}

//! Stochastic depletion assignment (Lenormand et al., 2012).
//!
//! Flow is assigned one unit at a time. Each step picks an origin with supply left
//! (uniformly), then a destination with probability proportional to
//! `residual_demand[j] * exp(-β d[i, j])`, and moves one unit between them. When
//! the supply runs out every unit has been placed, so row sums equal the outflows
//! and column sums equal the inflows exactly.
//!
//! β is either given directly or derived from the average surface area of the
//! spatial units, `β = α · S^(-ν)` with the paper's `α = 3.15e-4`, `ν = 0.177`.
//!
//! # Reproducibility
//!
//! [`FlowModel::flowmat`] seeds a `ChaCha8Rng` from [`LenormandConfig::seed`], so
//! one model always returns the same matrix. Use [`Lenormand::flowmat_with_rng`]
//! to drive it from a generator of your own.
//!
//! # References
//!
//! - Lenormand, Huet, Gargiulo, Deffuant (2012). "A Universal Model of Commuting
//!   Networks", PLOS ONE 7(10).

use crate::marginals::Marginals;
use crate::{Error, FlowModel, Result};
use ndarray::{Array1, Array2};
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// Scale constant for deriving β from surface area.
pub const ALPHA: f64 = 3.15e-4;
/// Exponent for deriving β from surface area.
pub const NU: f64 = 0.177;

/// How the decay rate β is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceDecay {
    /// Use this β directly.
    Beta(f64),
    /// Derive β from the average surface area of the spatial units.
    SurfaceArea(f64),
}

impl Default for DistanceDecay {
    fn default() -> Self {
        DistanceDecay::Beta(1.0)
    }
}

impl DistanceDecay {
    /// Resolve to a concrete β.
    pub fn beta(self) -> Result<f64> {
        match self {
            DistanceDecay::Beta(beta) => {
                if beta >= 0.0 && beta.is_finite() {
                    Ok(beta)
                } else {
                    Err(Error::InvalidDecay(beta))
                }
            }
            DistanceDecay::SurfaceArea(area) => {
                if !(area > 0.0) || !area.is_finite() {
                    return Err(Error::InvalidDecay(area));
                }
                Ok(ALPHA * area.powf(-NU))
            }
        }
    }
}

/// Configuration for [`Lenormand`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LenormandConfig {
    /// Distance decay (default `β = 1`).
    pub decay: DistanceDecay,
    /// RNG seed used by [`FlowModel::flowmat`] (deterministic by default).
    pub seed: u64,
}

impl Default for LenormandConfig {
    fn default() -> Self {
        Self {
            decay: DistanceDecay::default(),
            seed: 42,
        }
    }
}

/// Lenormand's universal commuting model.
#[derive(Debug, Clone)]
pub struct Lenormand {
    marginals: Marginals,
    beta: f64,
    seed: u64,
    // Counts as integers; validated whole numbers.
    inflow_counts: Vec<u64>,
    outflow_counts: Vec<u64>,
}

impl Lenormand {
    /// Build the model.
    ///
    /// Besides the [`Marginals`] checks this requires whole-number marginals
    /// ([`Error::NonIntegralCount`]) with equal totals ([`Error::ImbalancedMarginals`]),
    /// and a usable decay ([`Error::InvalidDecay`]).
    pub fn new(
        inflows: &Array1<f64>,
        outflows: &Array1<f64>,
        dists: &Array2<f64>,
        cfg: &LenormandConfig,
    ) -> Result<Self> {
        let marginals = Marginals::new(inflows, outflows, dists)?;
        let beta = cfg.decay.beta()?;

        let inflow_counts = whole_counts("inflows", inflows)?;
        let outflow_counts = whole_counts("outflows", outflows)?;

        let total_in = total_count(&inflow_counts)?;
        let total_out = total_count(&outflow_counts)?;
        if total_in != total_out {
            return Err(Error::ImbalancedMarginals {
                inflows: marginals.total_inflow(),
                outflows: marginals.total_outflow(),
            });
        }

        debug!(
            n_origins = marginals.n_origins(),
            n_destinations = marginals.n_destinations(),
            total = total_out,
            beta,
            "lenormand model built"
        );

        Ok(Self {
            marginals,
            beta,
            seed: cfg.seed,
            inflow_counts,
            outflow_counts,
        })
    }

    /// The resolved decay rate β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the depletion assignment with a caller-supplied generator.
    pub fn flowmat_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Array2<f64> {
        let n = self.marginals.n_origins();
        let m = self.marginals.n_destinations();
        let dists = self.marginals.dists();

        // exp(-β d) does not change between draws; only the residual demand does.
        let decay = dists.mapv(|d| (-self.beta * d).exp());

        let mut s_in = self.inflow_counts.clone();
        let mut s_out = self.outflow_counts.clone();
        let mut t = Array2::<f64>::zeros((n, m));

        // Origins with supply left. Order is irrelevant; the pick is uniform.
        let mut active: Vec<usize> = (0..n).filter(|&i| s_out[i] > 0).collect();
        let mut weights = vec![0.0f64; m];
        let mut draws = 0u64;
        let mut fallbacks = 0u64;

        while !active.is_empty() {
            let slot = rng.gen_range(0..active.len());
            let i = active[slot];

            for j in 0..m {
                weights[j] = s_in[j] as f64 * decay[[i, j]];
            }
            let j = match WeightedIndex::new(&weights) {
                Ok(dist) => dist.sample(rng),
                Err(_) => {
                    // Every exp(-β d) underflowed; fall back to uniform over residual demand.
                    fallbacks += 1;
                    let open: Vec<usize> = (0..m).filter(|&j| s_in[j] > 0).collect();
                    // Balanced marginals always leave demand for remaining supply.
                    if open.is_empty() {
                        break;
                    }
                    open[rng.gen_range(0..open.len())]
                }
            };

            t[[i, j]] += 1.0;
            s_in[j] -= 1;
            s_out[i] -= 1;
            if s_out[i] == 0 {
                active.swap_remove(slot);
            }
            draws += 1;

            if draws % 100_000 == 0 {
                trace!(draws, remaining_origins = active.len(), "lenormand progress");
            }
        }

        debug!(draws, fallbacks, "lenormand assignment finished");
        t
    }
}

impl FlowModel for Lenormand {
    fn marginals(&self) -> &Marginals {
        &self.marginals
    }

    fn flowmat(&self) -> Array2<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.flowmat_with_rng(&mut rng)
    }
}

fn whole_counts(what: &'static str, values: &Array1<f64>) -> Result<Vec<u64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            // Validated non-negative and finite by `Marginals::new`.
            if value.fract() != 0.0 || value > u64::MAX as f64 {
                Err(Error::NonIntegralCount { what, index, value })
            } else {
                Ok(value as u64)
            }
        })
        .collect()
}

fn total_count(counts: &[u64]) -> Result<u64> {
    counts
        .iter()
        .try_fold(0u64, |acc, &c| acc.checked_add(c))
        .ok_or(Error::DegenerateTotals("lenormand total count overflows u64"))
}

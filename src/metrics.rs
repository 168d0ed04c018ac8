//! Goodness-of-fit between an observed and a predicted flow matrix.
//!
//! All functions compare elementwise and accept any ndarray of matching shape
//! (flat vectors or full OD matrices).
//!
//! | Metric | Perfect fit | Range |
//! |--------|-------------|-------|
//! | [`pearson`] | `r = 1` | `[-1, 1]` |
//! | [`cpc`] | `1` | `[0, 1]` |
//! | [`sorensen`] | `1` | `[0, 1]` |
//! | [`srmse`] | `0` | `[0, ∞)` |

use crate::{Error, Result};
use ndarray::{ArrayBase, Data, Dimension};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Pearson correlation with its two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub r: f64,
    /// Probability of |r| at least this large under zero correlation
    /// (Student's t, `n - 2` degrees of freedom).
    pub p_value: f64,
}

fn check_pair<S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    if a.len() != b.len() {
        return Err(Error::LengthMismatch(a.len(), b.len()));
    }
    if a.shape() != b.shape() {
        return Err(Error::Domain("observed and predicted differ in shape"));
    }
    Ok(())
}

/// Pearson's r between `a` and `b`, flattened in logical order.
pub fn pearson<S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<Correlation>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    check_pair(a, b)?;
    let n = a.len();
    if n < 3 {
        return Err(Error::Domain("pearson needs at least 3 samples"));
    }

    let nf = n as f64;
    let mean_a = a.sum() / nf;
    let mean_b = b.sum() / nf;
    let (mut sab, mut saa, mut sbb) = (0.0, 0.0, 0.0);
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        sab += dx * dy;
        saa += dx * dx;
        sbb += dy * dy;
    }
    if saa == 0.0 || sbb == 0.0 {
        return Err(Error::Domain("pearson is undefined for constant input"));
    }

    let r = (sab / (saa.sqrt() * sbb.sqrt())).clamp(-1.0, 1.0);
    let df = nf - 2.0;
    let p_value = if r.abs() == 1.0 {
        0.0
    } else {
        let t = r * (df / (1.0 - r * r)).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|_| Error::Domain("invalid degrees of freedom for Student's t"))?;
        (2.0 * dist.sf(t.abs())).min(1.0)
    };

    Ok(Correlation { r, p_value })
}

/// Common part of commuters: `2 Σ min(o, p) / (Σ o + Σ p)`.
pub fn cpc<S1, S2, D>(observed: &ArrayBase<S1, D>, predicted: &ArrayBase<S2, D>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    check_pair(observed, predicted)?;
    let total = observed.sum() + predicted.sum();
    if total == 0.0 {
        return Err(Error::Domain("cpc needs a positive total"));
    }
    let common: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(&o, &p)| o.min(p))
        .sum();
    Ok(2.0 * common / total)
}

/// Sørensen similarity index: mean over cells of `2 min(o, p) / (o + p)`.
///
/// Cells where both values are zero carry no information and are left out of the mean.
pub fn sorensen<S1, S2, D>(observed: &ArrayBase<S1, D>, predicted: &ArrayBase<S2, D>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    check_pair(observed, predicted)?;
    let mut sum = 0.0;
    let mut cells = 0usize;
    for (&o, &p) in observed.iter().zip(predicted.iter()) {
        let denom = o + p;
        if denom == 0.0 {
            continue;
        }
        sum += 2.0 * o.min(p) / denom;
        cells += 1;
    }
    if cells == 0 {
        return Err(Error::Domain("sorensen needs at least one nonzero cell"));
    }
    Ok(sum / cells as f64)
}

/// Standardized root-mean-square error: `sqrt(Σ (o - p)² / n) / (Σ o / n)`.
pub fn srmse<S1, S2, D>(observed: &ArrayBase<S1, D>, predicted: &ArrayBase<S2, D>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    check_pair(observed, predicted)?;
    let n = observed.len();
    if n == 0 {
        return Err(Error::Domain("srmse needs at least one cell"));
    }
    let nf = n as f64;
    let mean_observed = observed.sum() / nf;
    if mean_observed == 0.0 {
        return Err(Error::Domain("srmse needs a nonzero observed mean"));
    }
    let sq: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(&o, &p)| (o - p) * (o - p))
        .sum();
    Ok((sq / nf).sqrt() / mean_observed)
}

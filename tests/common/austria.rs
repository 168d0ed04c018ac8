//! Austrian NUTS-2 inter-regional migration (9 regions, AT11..AT34).
//!
//! Dennett (2012), "Estimating flows between geographical locations: get me
//! started in spatial interaction modelling", UCL working paper 184. Intra-zonal
//! flows are filtered out, so the observed diagonal is zero.

#![allow(dead_code)]

use ndarray::{Array1, Array2};

pub const N: usize = 9;

pub const REGIONS: [&str; N] = [
    "AT11", "AT12", "AT13", "AT21", "AT22", "AT31", "AT32", "AT33", "AT34",
];

/// Total outflow per origin region.
pub const OUTFLOWS: [f64; N] = [
    4016.0, 20080.0, 29142.0, 4897.0, 8487.0, 10638.0, 5790.0, 4341.0, 2184.0,
];

/// Total inflow per destination region.
pub const INFLOWS: [f64; N] = [
    5146.0, 25741.0, 26980.0, 4117.0, 8634.0, 8193.0, 4902.0, 3952.0, 1910.0,
];

/// Inter-centroid distances (km), row-major origin × destination.
pub const DISTANCES: [f64; N * N] = [
    0.0, 103.0, 84.0, 221.0, 132.0, 215.0, 247.0, 391.0, 505.0, //
    103.0, 0.0, 46.0, 217.0, 130.0, 141.0, 201.0, 344.0, 454.0, //
    84.0, 46.0, 0.0, 250.0, 159.0, 186.0, 244.0, 288.0, 498.0, //
    221.0, 217.0, 250.0, 0.0, 92.0, 152.0, 93.0, 195.0, 306.0, //
    132.0, 130.0, 159.0, 92.0, 0.0, 125.0, 122.0, 262.0, 376.0, //
    215.0, 141.0, 186.0, 152.0, 125.0, 0.0, 82.0, 208.0, 315.0, //
    247.0, 201.0, 244.0, 93.0, 122.0, 82.0, 0.0, 145.0, 259.0, //
    391.0, 344.0, 388.0, 195.0, 262.0, 208.0, 145.0, 0.0, 114.0, //
    505.0, 454.0, 498.0, 306.0, 376.0, 315.0, 259.0, 114.0, 0.0,
];

/// Observed migration flows, row-major origin × destination.
pub const OBSERVED: [f64; N * N] = [
    0.0, 1131.0, 1887.0, 69.0, 738.0, 98.0, 31.0, 43.0, 19.0, //
    1633.0, 0.0, 14055.0, 416.0, 1276.0, 1850.0, 388.0, 303.0, 159.0, //
    2301.0, 20164.0, 0.0, 1080.0, 1831.0, 1943.0, 742.0, 674.0, 407.0, //
    85.0, 379.0, 1597.0, 0.0, 1608.0, 328.0, 317.0, 469.0, 114.0, //
    762.0, 1110.0, 2973.0, 1252.0, 0.0, 1081.0, 622.0, 425.0, 262.0, //
    196.0, 2027.0, 3498.0, 346.0, 1332.0, 0.0, 2144.0, 821.0, 274.0, //
    49.0, 378.0, 1349.0, 310.0, 851.0, 2117.0, 0.0, 630.0, 106.0, //
    87.0, 424.0, 978.0, 490.0, 670.0, 577.0, 546.0, 0.0, 569.0, //
    33.0, 128.0, 643.0, 154.0, 328.0, 199.0, 112.0, 587.0, 0.0,
];

/// Region centroids (latitude, longitude).
pub const CENTROIDS: [[f64; 2]; N] = [
    [47.1537, 16.2689],
    [48.1081, 15.805],
    [48.2082, 16.3738],
    [46.7222, 14.1806],
    [47.3593, 14.47],
    [48.0259, 13.9724],
    [47.8095, 13.055],
    [47.2537, 11.6015],
    [47.2497, 9.9797],
];

pub struct Austria {
    pub inflows: Array1<f64>,
    pub outflows: Array1<f64>,
    pub dists: Array2<f64>,
    pub locs: Array2<f64>,
    pub observed: Array2<f64>,
}

pub fn load() -> Austria {
    Austria {
        inflows: Array1::from_vec(INFLOWS.to_vec()),
        outflows: Array1::from_vec(OUTFLOWS.to_vec()),
        dists: Array2::from_shape_vec((N, N), DISTANCES.to_vec()).expect("9x9 distances"),
        locs: Array2::from_shape_fn((N, 2), |(i, k)| CENTROIDS[i][k]),
        observed: Array2::from_shape_vec((N, N), OBSERVED.to_vec()).expect("9x9 flows"),
    }
}

use spatial_interaction::accessibility::{accessibility, CompetingDestinations, FlowEdge};

const NODES: [&str; 5] = ["A", "B", "C", "D", "E"];
const MASSES: [f64; 5] = [60.0, 10.0, 10.0, 30.0, 50.0];

#[rustfmt::skip]
const VOLUME: [f64; 25] = [
    10.0, 10.0, 10.0, 10.0, 10.0,
    10.0,  0.0,  0.0, 10.0, 10.0,
    10.0,  0.0,  0.0, 10.0,  0.0,
    10.0, 10.0, 10.0,  0.0, 10.0,
    10.0, 10.0,  0.0, 10.0, 10.0,
];

#[rustfmt::skip]
const DISTANCES: [f64; 25] = [
    0.0,  8.0,  2.0, 5.0, 5.0,
    8.0,  0.0, 10.0, 7.0, 4.0,
    2.0, 10.0,  0.0, 6.0, 9.0,
    5.0,  7.0,  6.0, 0.0, 9.0,
    5.0,  4.0,  9.0, 2.0, 0.0,
];

/// Hand-computed accessibility with only observed destinations competing.
#[rustfmt::skip]
const EXPECTED_OBSERVED: [f64; 25] = [
    500.0, 510.0, 730.0, 580.0, 190.0,
    400.0, 890.0, 750.0, 750.0, 360.0,
    150.0, 690.0, 300.0, 300.0, 360.0,
    350.0, 780.0, 670.0, 880.0, 430.0,
    230.0, 690.0, 400.0, 370.0, 400.0,
];

/// Complete 5 × 5 edge list, origin-major.
fn dummy_edges() -> Vec<FlowEdge<String>> {
    let mut edges = Vec::with_capacity(25);
    for (i, o) in NODES.iter().enumerate() {
        for (j, d) in NODES.iter().enumerate() {
            edges.push(FlowEdge {
                origin: o.to_string(),
                destination: d.to_string(),
                distance: DISTANCES[i * 5 + j],
                weight: VOLUME[i * 5 + j],
                destination_mass: MASSES[j],
            });
        }
    }
    edges
}

#[test]
fn observed_destinations_match_fixture() {
    let edges = dummy_edges();
    let acc = accessibility(&edges, CompetingDestinations::Observed).unwrap();
    assert_eq!(acc.len(), 25);
    for (k, (&got, &want)) in acc.iter().zip(EXPECTED_OBSERVED.iter()).enumerate() {
        assert_eq!(
            got, want,
            "edge {} -> {}",
            edges[k].origin, edges[k].destination
        );
    }
}

#[test]
fn all_destinations_equal_observed_for_fully_connected_origin() {
    // Origin A sends flow everywhere, so both modes agree on its edges.
    let edges = dummy_edges();
    let observed = accessibility(&edges, CompetingDestinations::Observed).unwrap();
    let all = accessibility(&edges, CompetingDestinations::All).unwrap();
    assert_eq!(&observed[..5], &all[..5]);
}

#[test]
fn all_destinations_never_lower_than_observed() {
    // Adding competitors only adds non-negative terms.
    let edges = dummy_edges();
    let observed = accessibility(&edges, CompetingDestinations::Observed).unwrap();
    let all = accessibility(&edges, CompetingDestinations::All).unwrap();
    for k in 0..edges.len() {
        assert!(all[k] >= observed[k], "edge {k}");
    }
    // B → A: B competes for {A, D, E} observed; with every destination C also counts,
    // adding d(A,C) * m(C) = 2 * 10.
    assert_eq!(all[5] - observed[5], 20.0);
}

// Accessibility of competing destinations on a five-node toy network.
//
// For each flow i → j, accessibility sums distance(j → k) × mass(k) over the
// other destinations k that origin i could have chosen. "Observed" only counts
// destinations i actually sends flow to; "All" counts every destination.

use spatial_interaction::accessibility::{accessibility, CompetingDestinations, FlowEdge};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), spatial_interaction::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let nodes = ['A', 'B', 'C', 'D', 'E'];
    let masses = [60.0, 10.0, 10.0, 30.0, 50.0];
    #[rustfmt::skip]
    let volume = [
        10.0, 10.0, 10.0, 10.0, 10.0,
        10.0,  0.0,  0.0, 10.0, 10.0,
        10.0,  0.0,  0.0, 10.0,  0.0,
        10.0, 10.0, 10.0,  0.0, 10.0,
        10.0, 10.0,  0.0, 10.0, 10.0,
    ];
    #[rustfmt::skip]
    let distance = [
        0.0,  8.0,  2.0, 5.0, 5.0,
        8.0,  0.0, 10.0, 7.0, 4.0,
        2.0, 10.0,  0.0, 6.0, 9.0,
        5.0,  7.0,  6.0, 0.0, 9.0,
        5.0,  4.0,  9.0, 2.0, 0.0,
    ];

    let mut edges = Vec::new();
    for (i, &o) in nodes.iter().enumerate() {
        for (j, &d) in nodes.iter().enumerate() {
            edges.push(FlowEdge {
                origin: o,
                destination: d,
                distance: distance[i * 5 + j],
                weight: volume[i * 5 + j],
                destination_mass: masses[j],
            });
        }
    }

    let observed = accessibility(&edges, CompetingDestinations::Observed)?;
    let all = accessibility(&edges, CompetingDestinations::All)?;

    println!("edge   observed      all");
    for ((e, o), a) in edges.iter().zip(&observed).zip(&all) {
        println!("{} -> {} {:>8} {:>8}", e.origin, e.destination, o, a);
    }
    Ok(())
}

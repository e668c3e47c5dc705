use twoway_core::benchmark::{QueryBenchmark, compare_algorithm_efficiency};
use twoway_core::{AdjacencyGraph, Algorithm, RoadNetwork, SearchConfig};

const SIDE: usize = 120;

/// Square grid with both arc directions, lengths at least the coordinate
/// step so the halved Manhattan estimate stays a lower bound.
fn grid_network() -> RoadNetwork {
    let mut graph = AdjacencyGraph::directed(SIDE * SIDE);
    let mut coordinates = Vec::with_capacity(SIDE * SIDE);

    for row in 0..SIDE {
        for col in 0..SIDE {
            let vertex = row * SIDE + col;
            coordinates.push((col as i64 * 10, row as i64 * 10));

            let detour = ((row * 7 + col * 13) % 5) as i64;
            if col + 1 < SIDE {
                graph.add_edge(vertex, vertex + 1, 10 + detour);
                graph.add_edge(vertex + 1, vertex, 10 + detour);
            }
            if row + 1 < SIDE {
                graph.add_edge(vertex, vertex + SIDE, 10 + detour * 2);
                graph.add_edge(vertex + SIDE, vertex, 10 + detour * 2);
            }
        }
    }

    RoadNetwork::new(graph, coordinates)
}

fn main() {
    let network = grid_network();
    let last = SIDE * SIDE - 1;
    let queries = vec![
        (0, last),
        (SIDE - 1, last - SIDE + 1),
        (SIDE / 2, last - SIDE / 2),
        (SIDE * (SIDE / 2), SIDE * (SIDE / 2) + SIDE - 1),
    ];

    println!(
        "Benchmarking {} queries on a {}x{} grid...",
        queries.len(),
        SIDE,
        SIDE
    );

    let benchmark = QueryBenchmark::new(&network, SearchConfig::default());
    let report = benchmark.run(
        &[
            Algorithm::Astar,
            Algorithm::Dijkstra,
            Algorithm::Unidirectional,
            Algorithm::Bfs,
        ],
        &queries,
    );

    compare_algorithm_efficiency(&report);
}

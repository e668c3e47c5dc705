use crate::pathfinding_config::{Algorithm, SearchConfig};
use crate::query::RoadNetwork;
use crate::state::VertexId;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub queries: usize,
    pub successes: usize,
    pub failures: usize,
    pub vertices_examined: usize,
    pub total_time_ms: f64,
}

impl BenchmarkResult {
    fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            queries: 0,
            successes: 0,
            failures: 0,
            vertices_examined: 0,
            total_time_ms: 0.0,
        }
    }

    pub fn average_time_ms(&self) -> f64 {
        if self.queries == 0 {
            0.0
        } else {
            self.total_time_ms / self.queries as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub results: Vec<BenchmarkResult>,
    /// Queries on which the algorithms reported different distances.
    pub disagreements: Vec<(VertexId, VertexId)>,
}

/// Runs the same query batch through several algorithms on one network.
pub struct QueryBenchmark<'a> {
    network: &'a RoadNetwork,
    config: SearchConfig,
}

impl<'a> QueryBenchmark<'a> {
    pub fn new(network: &'a RoadNetwork, config: SearchConfig) -> Self {
        Self { network, config }
    }

    pub fn run(
        &self,
        algorithms: &[Algorithm],
        queries: &[(VertexId, VertexId)],
    ) -> BenchmarkReport {
        let mut results: Vec<BenchmarkResult> =
            algorithms.iter().map(|&algorithm| BenchmarkResult::new(algorithm)).collect();
        let mut disagreements = Vec::new();

        for &(source, target) in queries {
            let mut distances: FxHashMap<Algorithm, Option<i64>> = FxHashMap::default();

            for result in results.iter_mut() {
                let query_timer = Instant::now();
                let outcome = self
                    .network
                    .shortest_path(result.algorithm, source, target, &self.config);
                result.total_time_ms += query_timer.elapsed().as_secs_f64() * 1000.0;
                result.queries += 1;

                match outcome {
                    Ok(outcome) => {
                        result.vertices_examined += outcome.stats().vertices_examined;
                        if outcome.is_found() {
                            result.successes += 1;
                        } else {
                            result.failures += 1;
                        }
                        distances.insert(result.algorithm, outcome.distance());
                    }
                    Err(error) => {
                        tracing::warn!(source, target, %error, "benchmark query failed");
                        result.failures += 1;
                    }
                }
            }

            if disagree(&distances, algorithms) {
                disagreements.push((source, target));
            }
        }

        BenchmarkReport {
            results,
            disagreements,
        }
    }
}

/// Hop counts are not comparable with weighted distances, so the
/// breadth-first variant is left out of the agreement check.
fn disagree(distances: &FxHashMap<Algorithm, Option<i64>>, algorithms: &[Algorithm]) -> bool {
    let mut weighted = algorithms
        .iter()
        .filter(|&&algorithm| algorithm != Algorithm::Bfs)
        .filter_map(|algorithm| distances.get(algorithm));

    match weighted.next() {
        Some(first) => weighted.any(|distance| distance != first),
        None => false,
    }
}

pub fn compare_algorithm_efficiency(report: &BenchmarkReport) {
    println!("\n=== Algorithm Efficiency Comparison ===");

    let Some(fastest) = report
        .results
        .iter()
        .min_by(|a, b| a.total_time_ms.total_cmp(&b.total_time_ms))
    else {
        return;
    };

    for result in &report.results {
        println!(
            "{:>15}: {} ok / {} failed, {:.3} ms total, {:.3} ms avg, {} vertices examined",
            result.algorithm.as_str(),
            result.successes,
            result.failures,
            result.total_time_ms,
            result.average_time_ms(),
            result.vertices_examined
        );
    }

    for result in &report.results {
        if result.algorithm != fastest.algorithm && fastest.total_time_ms > 0.0 {
            let slowdown = result.total_time_ms / fastest.total_time_ms;
            let node_ratio =
                result.vertices_examined as f64 / fastest.vertices_examined.max(1) as f64;
            println!(
                "  {} is {:.2}x slower than {}, examined {:.2}x vertices",
                result.algorithm.as_str(),
                slowdown,
                fastest.algorithm.as_str(),
                node_ratio
            );
        }
    }

    if !report.disagreements.is_empty() {
        println!("\n{} queries disagreed on distance", report.disagreements.len());
    }
}

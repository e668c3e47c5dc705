use serde::Serialize;
use std::{path::PathBuf, time::Instant};
use twoway_core::{Algorithm, RoadNetwork, SearchConfig, SearchError, SearchStats, VertexId};

use crate::args::Args;
use crate::utils::{display_id, parse_vertex_id};

/// Where the queries of one invocation come from.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryMode {
    Interactive,
    File(PathBuf),
    Single(VertexId, VertexId),
}

impl QueryMode {
    pub fn from_args(args: &Args, num_vertices: usize) -> Result<Self, String> {
        match args.query.as_slice() {
            [] => Ok(QueryMode::Interactive),
            [path] => Ok(QueryMode::File(PathBuf::from(path))),
            [source, target] => Ok(QueryMode::Single(
                parse_vertex_id(source, num_vertices)?,
                parse_vertex_id(target, num_vertices)?,
            )),
            _ => Err("expected a query file or SOURCE TARGET".to_string()),
        }
    }
}

pub struct SearchRequest {
    pub source: VertexId,
    pub target: VertexId,
    pub algorithm: Algorithm,
    pub config: SearchConfig,
}

impl SearchRequest {
    pub fn new(source: VertexId, target: VertexId, args: &Args) -> Self {
        Self {
            source,
            target,
            algorithm: args.algorithm(),
            config: args.search_config(),
        }
    }
}

/// One answered query, with vertex ids in DIMACS numbering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryReport {
    pub source: usize,
    pub target: usize,
    pub algorithm: Algorithm,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<usize>>,
    pub search_time_ms: f64,
    pub stats: SearchStats,
}

impl QueryReport {
    /// Number of arcs on the path, if one was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

pub fn execute_search(
    network: &RoadNetwork,
    request: &SearchRequest,
) -> Result<QueryReport, SearchError> {
    let search_timer = Instant::now();
    let outcome = network.shortest_path(
        request.algorithm,
        request.source,
        request.target,
        &request.config,
    )?;
    let search_time_ms = search_timer.elapsed().as_secs_f64() * 1000.0;

    Ok(QueryReport {
        source: display_id(request.source),
        target: display_id(request.target),
        algorithm: request.algorithm,
        found: outcome.is_found(),
        distance: outcome.distance(),
        path: outcome
            .path()
            .map(|path| path.iter().copied().map(display_id).collect()),
        search_time_ms,
        stats: *outcome.stats(),
    })
}

/// Totals over a query file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub queries: usize,
    pub successes: usize,
    pub failures: usize,
    pub total_time_ms: f64,
    pub average_time_ms: f64,
}

impl BatchSummary {
    pub fn from_reports(reports: &[QueryReport]) -> Self {
        let successes = reports.iter().filter(|report| report.found).count();
        let total_time_ms: f64 = reports.iter().map(|report| report.search_time_ms).sum();

        Self {
            queries: reports.len(),
            successes,
            failures: reports.len() - successes,
            total_time_ms,
            average_time_ms: if reports.is_empty() {
                0.0
            } else {
                total_time_ms / reports.len() as f64
            },
        }
    }
}

/// Parses one interactive line of the form `SOURCE TARGET`. Blank lines yield `None`.
pub fn parse_query_line(
    line: &str,
    num_vertices: usize,
) -> Result<Option<(VertexId, VertexId)>, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    match fields.as_slice() {
        [] => Ok(None),
        [source, target] => Ok(Some((
            parse_vertex_id(source, num_vertices)?,
            parse_vertex_id(target, num_vertices)?,
        ))),
        _ => Err(format!("expected 'SOURCE TARGET', got '{}'", line.trim())),
    }
}

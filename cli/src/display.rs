use serde::Serialize;
use twoway_core::RoadNetwork;

use crate::app::TwowayApp;
use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{BatchSummary, QueryReport, SearchRequest};
use crate::utils::{display_id, format_number};

pub fn display_load_info(app: &TwowayApp, colors: &ColorScheme) {
    println!(
        "📂 Loaded {} vertices and {} arcs in {} sec",
        colors.number(&format_number(app.num_vertices())),
        colors.number(&format_number(app.num_arcs)),
        colors.number(&format!("{:.3}", app.load_duration))
    );
}

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🔍 Searching from {} to {} with {} ({})",
        colors.vertex(&display_id(request.source).to_string()),
        colors.vertex(&display_id(request.target).to_string()),
        request.algorithm.as_str(),
        request.config.termination.as_str()
    );

    if let Some(limit) = request.config.max_examined {
        println!(
            "⏱️  Stopping after {} examined vertices",
            colors.number(&format_number(limit))
        );
    }
}

pub fn display_query_report(
    report: &QueryReport,
    network: &RoadNetwork,
    display_options: &Args,
    colors: &ColorScheme,
) {
    let is_verbose = display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match (&report.path, report.distance) {
        (Some(path), Some(distance)) => {
            display_successful_path(path, distance, network, display_options, colors);
        }
        _ => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.vertex(&report.source.to_string()),
                colors.vertex(&report.target.to_string())
            );
        }
    }

    if is_verbose {
        display_search_statistics(report, colors);
    }
}

fn display_successful_path(
    path: &[usize],
    distance: i64,
    network: &RoadNetwork,
    display_options: &Args,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        println!(
            "{} Found path with {} steps and cost {}:\n",
            colors.success("✅"),
            colors.number(&path.len().saturating_sub(1).to_string()),
            colors.cost(distance)
        );
    }

    let path_flow = path
        .iter()
        .map(|vertex| colors.vertex(&vertex.to_string()).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    if !display_options.quiet {
        println!();
        for (step_index, vertex) in path.iter().enumerate() {
            println!("{}", format_path_step(step_index, *vertex, network, colors));
        }
    }
}

fn format_path_step(
    step_index: usize,
    vertex: usize,
    network: &RoadNetwork,
    colors: &ColorScheme,
) -> String {
    let step_number = format!("{}.", step_index + 1);
    let mut formatted_line = format!(
        "{:>4} {}",
        colors.step_number(&step_number),
        colors.vertex(&vertex.to_string())
    );

    // Displayed ids are 1-based.
    if let Some(&position) = network.coordinates.get(vertex - 1) {
        formatted_line.push_str(&format!(" {}", colors.coordinate(position)));
    }

    formatted_line
}

fn display_search_statistics(report: &QueryReport, colors: &ColorScheme) {
    let stats = &report.stats;

    println!("\n---\n");
    println!(
        "{} Examined {} vertices ({} discovered, {} reopened) in {} ms",
        colors.stats("📊"),
        colors.number(&format_number(stats.vertices_examined)),
        colors.number(&format_number(stats.vertices_discovered)),
        colors.number(&format_number(stats.vertices_reopened)),
        colors.number(&format!("{:.3}", report.search_time_ms))
    );

    if stats.stopped_early {
        println!(
            "{} Search stopped before the frontiers were exhausted",
            colors.warning("⏹️ ")
        );
    }
}

/// One line per query for query-file runs.
pub fn display_batch_line(report: &QueryReport, colors: &ColorScheme) {
    let query = format!(
        "{} → {}",
        colors.vertex(&report.source.to_string()),
        colors.vertex(&report.target.to_string())
    );

    match (report.distance, report.steps()) {
        (Some(distance), Some(steps)) => println!(
            "{} {}: cost {}, {} steps, {} ms",
            colors.success("✅"),
            query,
            colors.cost(distance),
            colors.number(&steps.to_string()),
            colors.number(&format!("{:.3}", report.search_time_ms))
        ),
        _ => println!(
            "{} {}: no path, {} ms",
            colors.error("❌"),
            query,
            colors.number(&format!("{:.3}", report.search_time_ms))
        ),
    }
}

pub fn display_batch_summary(summary: &BatchSummary, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} {} queries: {} found, {} without path",
        colors.stats("📊"),
        colors.number(&format_number(summary.queries)),
        colors.success(&format_number(summary.successes)),
        colors.error(&format_number(summary.failures))
    );
    println!(
        "⏱️  Total {} ms, average {} ms per query",
        colors.number(&format!("{:.3}", summary.total_time_ms)),
        colors.number(&format!("{:.3}", summary.average_time_ms))
    );
}

pub fn print_json_output<T: Serialize>(value: &T, pretty: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match rendered {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

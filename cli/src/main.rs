use clap::Parser;
use serde_json::json;
use std::{
    error::Error,
    io::{self, BufRead},
    path::Path,
};
use twoway::{
    Args, BatchSummary, QueryMode, SearchRequest, execute_search,
    app::TwowayApp,
    colors::ColorScheme,
    display::{
        display_batch_line, display_batch_summary, display_load_info, display_query_report,
        display_search_info, print_json_output,
    },
    logging::init_tracing,
    parse_query_line,
    utils::display_id,
};
use twoway_core::{
    Algorithm, VertexId,
    benchmark::{QueryBenchmark, compare_algorithm_efficiency},
};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = init_tracing(args.verbose) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }

    if let Err(error) = run(&args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = TwowayApp::load(args)?;
    if !args.json && !args.quiet {
        display_load_info(&app, colors);
    }

    let mode = QueryMode::from_args(args, app.num_vertices())?;

    if args.compare {
        let queries = match mode {
            QueryMode::Single(source, target) => vec![(source, target)],
            QueryMode::File(path) => app.load_queries(&path)?,
            QueryMode::Interactive => {
                return Err("--compare needs a query file or SOURCE TARGET".into());
            }
        };
        run_comparison(&app, &queries, args);
        return Ok(());
    }

    match mode {
        QueryMode::Single(source, target) => run_single_query(&app, source, target, args, colors)?,
        QueryMode::File(path) => run_query_file(&app, &path, args, colors)?,
        QueryMode::Interactive => run_interactive(&app, io::stdin().lock(), args, colors)?,
    }

    Ok(())
}

fn run_single_query(
    app: &TwowayApp,
    source: VertexId,
    target: VertexId,
    args: &Args,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    let request = SearchRequest::new(source, target, args);
    if args.verbose && !args.json {
        display_search_info(&request, colors);
    }

    let report = execute_search(&app.network, &request)?;

    if args.json {
        print_json_output(&report, true);
    } else {
        display_query_report(&report, &app.network, args, colors);
    }
    Ok(())
}

fn run_query_file(
    app: &TwowayApp,
    path: &Path,
    args: &Args,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    let queries = app.load_queries(path)?;
    let mut reports = Vec::with_capacity(queries.len());

    for (source, target) in queries {
        let report = execute_search(&app.network, &SearchRequest::new(source, target, args))?;
        if !args.json && !args.quiet {
            display_batch_line(&report, colors);
        }
        reports.push(report);
    }

    let summary = BatchSummary::from_reports(&reports);
    if args.json {
        print_json_output(&json!({ "queries": reports, "summary": summary }), true);
    } else {
        display_batch_summary(&summary, colors);
    }
    Ok(())
}

/// Answers `SOURCE TARGET` lines until end of input. Bad lines are reported and skipped.
fn run_interactive(
    app: &TwowayApp,
    input: impl BufRead,
    args: &Args,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    if !args.json && !args.quiet {
        println!(
            "Enter queries as 'SOURCE TARGET' with ids in 1..={}, end with Ctrl-D",
            app.num_vertices()
        );
    }

    for line in input.lines() {
        let line = line?;
        let (source, target) = match parse_query_line(&line, app.num_vertices()) {
            Ok(Some(query)) => query,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{}", colors.error(&format!("❌ {}", message)));
                continue;
            }
        };

        let report = execute_search(&app.network, &SearchRequest::new(source, target, args))?;
        if args.json {
            print_json_output(&report, false);
        } else {
            display_query_report(&report, &app.network, args, colors);
        }
    }
    Ok(())
}

fn run_comparison(app: &TwowayApp, queries: &[(VertexId, VertexId)], args: &Args) {
    let algorithms = [
        Algorithm::Astar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Unidirectional,
    ];
    let report = QueryBenchmark::new(&app.network, args.search_config()).run(&algorithms, queries);

    if args.json {
        let disagreements: Vec<(usize, usize)> = report
            .disagreements
            .iter()
            .map(|&(source, target)| (display_id(source), display_id(target)))
            .collect();
        print_json_output(
            &json!({ "results": report.results, "disagreements": disagreements }),
            true,
        );
    } else {
        compare_algorithm_efficiency(&report);
    }
}

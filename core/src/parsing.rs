use crate::error::{ParseError, ParseResult};
use crate::graph::AdjacencyGraph;
use crate::state::VertexId;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

pub type WeightedArc = (VertexId, VertexId, i64);
pub type Coordinates = Vec<(i64, i64)>;
pub type Query = (VertexId, VertexId);

/// Arc list read from a `p sp` file, with vertex ids shifted to start at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimacsGraph {
    pub num_vertices: usize,
    pub arcs: Vec<WeightedArc>,
}

impl DimacsGraph {
    pub fn into_adjacency(self) -> AdjacencyGraph<i64> {
        AdjacencyGraph::from_edges(self.num_vertices, self.arcs)
    }
}

pub fn load_graph_file(path: &Path) -> ParseResult<DimacsGraph> {
    parse_graph(open_reader(path)?)
}

pub fn load_coordinates_file(path: &Path, num_vertices: usize) -> ParseResult<Coordinates> {
    parse_coordinates(open_reader(path)?, num_vertices)
}

pub fn load_queries_file(path: &Path, num_vertices: usize) -> ParseResult<Vec<Query>> {
    parse_queries(open_reader(path)?, num_vertices)
}

fn open_reader(path: &Path) -> ParseResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// Reads `p sp N M` followed by `a u v w` arc lines.
pub fn parse_graph<R: BufRead>(reader: R) -> ParseResult<DimacsGraph> {
    let mut header: Option<(usize, usize)> = None;
    let mut arcs = Vec::new();

    for entry in data_lines(reader) {
        let (line, text) = entry?;
        let fields: Vec<&str> = text.split_whitespace().collect();

        match fields.as_slice() {
            ["p", "sp", nodes, arc_count] => {
                ensure_no_header(header.is_some(), line)?;
                // The declared count is untrusted, so arcs grow as they are read.
                header = Some((parse_field(nodes, line)?, parse_field(arc_count, line)?));
            }
            ["a", from, to, weight] => {
                let (num_vertices, _) = header.ok_or(ParseError::MissingProblemLine { line })?;
                arcs.push((
                    parse_vertex(from, num_vertices, line)?,
                    parse_vertex(to, num_vertices, line)?,
                    parse_field(weight, line)?,
                ));
            }
            _ => return Err(unexpected_line(line, &text)),
        }
    }

    let (num_vertices, declared_arcs) = header.ok_or(ParseError::MissingProblemLine { line: 0 })?;
    ensure_count("arcs", declared_arcs, arcs.len())?;

    tracing::debug!(num_vertices, arcs = arcs.len(), "parsed DIMACS graph");
    Ok(DimacsGraph { num_vertices, arcs })
}

/// Reads `p aux sp co N` followed by `v id x y` lines.
pub fn parse_coordinates<R: BufRead>(reader: R, num_vertices: usize) -> ParseResult<Coordinates> {
    let mut declared: Option<usize> = None;
    let mut coordinates = vec![(0, 0); num_vertices];
    let mut read = 0;

    for entry in data_lines(reader) {
        let (line, text) = entry?;
        let fields: Vec<&str> = text.split_whitespace().collect();

        match fields.as_slice() {
            ["p", "aux", "sp", "co", count] => {
                ensure_no_header(declared.is_some(), line)?;
                let count = parse_field(count, line)?;
                if count != num_vertices {
                    return Err(ParseError::CoordinateMismatch {
                        declared: count,
                        expected: num_vertices,
                    });
                }
                declared = Some(count);
            }
            ["v", id, x, y] => {
                declared.ok_or(ParseError::MissingProblemLine { line })?;
                let vertex = parse_vertex(id, num_vertices, line)?;
                coordinates[vertex] = (parse_field(x, line)?, parse_field(y, line)?);
                read += 1;
            }
            _ => return Err(unexpected_line(line, &text)),
        }
    }

    let declared = declared.ok_or(ParseError::MissingProblemLine { line: 0 })?;
    ensure_count("coordinates", declared, read)?;

    tracing::debug!(vertices = read, "parsed DIMACS coordinates");
    Ok(coordinates)
}

/// Reads `p aux sp p2p K` followed by `q s t` query lines.
pub fn parse_queries<R: BufRead>(reader: R, num_vertices: usize) -> ParseResult<Vec<Query>> {
    let mut declared: Option<usize> = None;
    let mut queries = Vec::new();

    for entry in data_lines(reader) {
        let (line, text) = entry?;
        let fields: Vec<&str> = text.split_whitespace().collect();

        match fields.as_slice() {
            ["p", "aux", "sp", "p2p", count] => {
                ensure_no_header(declared.is_some(), line)?;
                declared = Some(parse_field(count, line)?);
            }
            ["q", source, target] => {
                declared.ok_or(ParseError::MissingProblemLine { line })?;
                queries.push((
                    parse_vertex(source, num_vertices, line)?,
                    parse_vertex(target, num_vertices, line)?,
                ));
            }
            _ => return Err(unexpected_line(line, &text)),
        }
    }

    let declared = declared.ok_or(ParseError::MissingProblemLine { line: 0 })?;
    ensure_count("queries", declared, queries.len())?;

    tracing::debug!(queries = queries.len(), "parsed DIMACS queries");
    Ok(queries)
}

/// Non-blank, non-comment lines paired with their 1-based line number.
fn data_lines<R: BufRead>(reader: R) -> impl Iterator<Item = ParseResult<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed.starts_with('c') {
                    None
                } else {
                    Some(Ok((index + 1, trimmed.to_string())))
                }
            }
            Err(error) => Some(Err(ParseError::Io(error))),
        })
}

fn parse_field<T: FromStr>(field: &str, line: usize) -> ParseResult<T> {
    field.parse().map_err(|_| ParseError::InvalidLine {
        line,
        message: format!("invalid number `{field}`"),
    })
}

/// DIMACS ids run from 1 to N.
fn parse_vertex(field: &str, num_vertices: usize, line: usize) -> ParseResult<VertexId> {
    let id: u64 = parse_field(field, line)?;
    if id == 0 || id > num_vertices as u64 {
        return Err(ParseError::VertexOutOfRange {
            line,
            id,
            num_vertices,
        });
    }
    Ok((id - 1) as VertexId)
}

fn ensure_no_header(seen: bool, line: usize) -> ParseResult<()> {
    if seen {
        return Err(ParseError::InvalidLine {
            line,
            message: "duplicate problem line".to_string(),
        });
    }
    Ok(())
}

fn ensure_count(what: &'static str, declared: usize, read: usize) -> ParseResult<()> {
    if declared != read {
        return Err(ParseError::CountMismatch {
            what,
            declared,
            read,
        });
    }
    Ok(())
}

fn unexpected_line(line: usize, text: &str) -> ParseError {
    ParseError::InvalidLine {
        line,
        message: format!("unexpected line `{text}`"),
    }
}

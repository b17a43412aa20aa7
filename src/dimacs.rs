//! Reader and writer for DIMACS arc lists.
//!
//! ```text
//! c comment
//! p sp <nodes> <arcs>
//! a <from> <to> <weight>
//! ```
//!
//! Node ids are 1-indexed in the file and 0-indexed in [`Graph`].

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph<i64>> {
    let file = File::open(path.as_ref())?;
    let graph = parse_graph(BufReader::new(file))?;
    tracing::debug!(path = %path.as_ref().display(), nodes = graph.num_nodes(), edges = graph.num_edges(), "read graph");
    Ok(graph)
}

pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph<i64>> {
    let mut graph: Option<Graph<i64>> = None;
    let mut line_no = 0;

    for line in reader.lines() {
        line_no += 1;
        let line = line?;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            None | Some("c") => continue,
            Some("p") => {
                if graph.is_some() {
                    return Err(Error::parse(line_no, "duplicate problem line"));
                }
                let _kind = tokens.next().ok_or_else(|| Error::parse(line_no, "problem line is missing its kind"))?;
                let num_nodes: i64 = field(tokens.next(), line_no, "node count")?;
                graph = Some(Graph::try_with_nodes(num_nodes)?);
            }
            Some("a") => {
                let graph = graph.as_mut().ok_or_else(|| Error::parse(line_no, "arc before the problem line"))?;
                let from = node(tokens.next(), line_no, "arc tail")?;
                let to = node(tokens.next(), line_no, "arc head")?;
                let weight: i64 = field(tokens.next(), line_no, "arc weight")?;
                graph.add_edge(from, to, weight)?;
            }
            Some(other) => return Err(Error::parse(line_no, format!("unknown line type `{other}`"))),
        }
    }

    graph.ok_or_else(|| Error::parse(line_no, "missing problem line"))
}

pub fn write_graph<W: Write>(mut writer: W, graph: &Graph<i64>) -> Result<()> {
    writeln!(writer, "p sp {} {}", graph.num_nodes(), graph.num_edges())?;
    for e in graph.edges() {
        writeln!(writer, "a {} {} {}", e.from + 1, e.to + 1, e.weight)?;
    }
    Ok(())
}

fn field<T: FromStr>(token: Option<&str>, line_no: usize, what: &str) -> Result<T> {
    let token = token.ok_or_else(|| Error::parse(line_no, format!("missing {what}")))?;
    token.parse().map_err(|_| Error::parse(line_no, format!("invalid {what} `{token}`")))
}

// 1-indexed in the file
fn node(token: Option<&str>, line_no: usize, what: &str) -> Result<usize> {
    let id: usize = field(token, line_no, what)?;
    id.checked_sub(1).ok_or_else(|| Error::InvalidArgument(format!("line {line_no}: {what} 0 is not a valid 1-indexed node")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn parses_comments_problem_and_arcs() {
        let input = "c sample\n\np sp 3 2\nc between\na 1 2 7\n  a 3 1 4  \n";
        let graph = parse_graph(input.as_bytes()).unwrap();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.edges(), &[Edge { from: 0, to: 1, weight: 7 }, Edge { from: 2, to: 0, weight: 4 }]);
    }

    #[test]
    fn missing_problem_line() {
        assert!(matches!(parse_graph("c nothing\n".as_bytes()), Err(Error::Parse { .. })));
        assert!(matches!(parse_graph("a 1 2 3\np sp 2 1\n".as_bytes()), Err(Error::Parse { line: 1, .. })));
    }

    #[test]
    fn duplicate_problem_line() {
        assert!(matches!(parse_graph("p sp 2 0\np sp 3 0\n".as_bytes()), Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn malformed_numbers() {
        assert!(matches!(parse_graph("p sp x 0\n".as_bytes()), Err(Error::Parse { line: 1, .. })));
        assert!(matches!(parse_graph("p sp 2 1\na 1 2\n".as_bytes()), Err(Error::Parse { line: 2, .. })));
        assert!(matches!(parse_graph("p sp 2 1\na 1 two 3\n".as_bytes()), Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn unknown_line_type() {
        assert!(matches!(parse_graph("p sp 2 0\nn 1 s\n".as_bytes()), Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn invalid_graph_contents() {
        assert!(matches!(parse_graph("p sp -4 0\n".as_bytes()), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_graph("p sp 4611686018427387904 0\n".as_bytes()), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_graph("p sp 2 1\na 1 3 5\n".as_bytes()), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_graph("p sp 2 1\na 0 1 5\n".as_bytes()), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_graph("p sp 2 1\na 1 2 -5\n".as_bytes()), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn write_then_read() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 2, 11).unwrap();
        graph.add_edge(1, 0, 3).unwrap();

        let mut buf = Vec::new();
        write_graph(&mut buf, &graph).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "p sp 3 2\na 1 3 11\na 2 1 3\n");

        let read = parse_graph(buf.as_slice()).unwrap();
        assert_eq!(read.num_nodes(), 3);
        assert_eq!(read.edges(), graph.edges());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read_graph(dir.path().join("absent.gr")), Err(Error::Io(_))));
    }
}

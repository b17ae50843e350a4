//! Undirected edge list ("uel") serialization.
//!
//! A uel file holds one edge per line as two decimal node identifiers
//! separated by a single space, lower identifier first, each line ending in
//! `\n`. Edges appear in ascending `(u, v)` order. A graph without edges
//! produces an empty file.

use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::{
    adjacency::AdjacencyMap,
    error::UelError,
    node::{Edge, NodeId},
};

/// Writes every edge of `graph` to `writer` and returns the number of lines
/// written.
///
/// # Errors
/// Propagates any error returned by `writer`.
///
/// # Examples
/// ```
/// use hakimi_core::{DegreeSequence, OrderMode, realize, write_uel};
///
/// let graph = realize(&DegreeSequence::new(vec![1, 2, 1]), OrderMode::SmallestFirst)?;
/// let mut buffer = Vec::new();
/// let lines = write_uel(&graph, &mut buffer)?;
/// assert_eq!(lines, 2);
/// assert_eq!(String::from_utf8(buffer)?, "0 1\n1 2\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_uel<W: Write>(graph: &AdjacencyMap, mut writer: W) -> io::Result<usize> {
    let mut lines = 0;
    for edge in graph.edges() {
        writeln!(writer, "{edge}")?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}

/// Writes `graph` to `path`, replacing any existing file.
///
/// The edges are written to a temporary file in the destination directory
/// that is renamed over `path` once complete, so a failed write never leaves
/// a truncated edge list behind.
///
/// # Errors
/// Returns [`UelError::Io`] when the temporary file cannot be created,
/// written, or moved into place.
#[instrument(
    skip(graph, path),
    fields(path = %path.display(), edges = graph.edge_count()),
    err
)]
pub fn write_uel_file(graph: &AdjacencyMap, path: &Path) -> Result<usize, UelError> {
    let io_error = |source: io::Error| UelError::Io {
        path: path.to_path_buf(),
        source,
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(directory).map_err(io_error)?;
    let lines = {
        let writer = BufWriter::new(staged.as_file_mut());
        write_uel(graph, writer).map_err(io_error)?
    };
    staged.as_file().sync_all().map_err(io_error)?;
    staged.persist(path).map_err(|err| io_error(err.error))?;
    debug!(lines, "edge list written");
    Ok(lines)
}

/// Reads a uel edge list, validating that every line is a canonical,
/// loop-free edge that has not been listed before.
///
/// Blank lines are ignored. Edges are returned in file order.
///
/// # Errors
/// Returns [`UelError::Read`] when the reader fails and
/// [`UelError::Malformed`], [`UelError::SelfLoop`],
/// [`UelError::NonCanonical`], or [`UelError::Duplicate`] for the first
/// invalid line.
///
/// # Examples
/// ```
/// use hakimi_core::read_uel;
///
/// let edges = read_uel("0 1\n1 2\n".as_bytes())?;
/// assert_eq!(edges.len(), 2);
/// assert!(read_uel("1 0\n".as_bytes()).is_err());
/// # Ok::<(), hakimi_core::UelError>(())
/// ```
pub fn read_uel<R: BufRead>(reader: R) -> Result<Vec<Edge>, UelError> {
    let mut edges = Vec::new();
    let mut seen = BTreeSet::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let content = line.map_err(|source| UelError::Read {
            line: line_number,
            source,
        })?;
        if content.trim().is_empty() {
            continue;
        }
        let edge = parse_line(line_number, &content)?;
        if !seen.insert(edge) {
            return Err(UelError::Duplicate {
                line: line_number,
                u: edge.u(),
                v: edge.v(),
            });
        }
        edges.push(edge);
    }
    Ok(edges)
}

/// Opens `path` and reads it with [`read_uel`].
///
/// # Errors
/// Returns [`UelError::Io`] when the file cannot be opened, otherwise the
/// errors of [`read_uel`].
pub fn read_uel_file(path: &Path) -> Result<Vec<Edge>, UelError> {
    let file = File::open(path).map_err(|source| UelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_uel(BufReader::new(file))
}

fn parse_line(line: usize, content: &str) -> Result<Edge, UelError> {
    let malformed = || UelError::Malformed {
        line,
        content: content.to_owned(),
    };
    let mut tokens = content.split_whitespace();
    let (Some(first), Some(second), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let u = first.parse::<usize>().map(NodeId::new).map_err(|_| malformed())?;
    let v = second.parse::<usize>().map(NodeId::new).map_err(|_| malformed())?;
    if u > v {
        return Err(UelError::NonCanonical { line, u, v });
    }
    Edge::new(u, v).ok_or(UelError::SelfLoop { line, node: u })
}

//! # Graph6
//!
//! A graph6 string consists of the encoded order `N(n)` followed by the upper triangle of the
//! adjacency matrix `R(x)`, read column by column (`(0,1), (0,2), (1,2), (0,3), ...`) and packed
//! into groups of six bits. Every group is stored as a printable byte in `63..=126`.
//!
//! Orders up to `62` use a single byte, orders up to `258047` use the byte `126` followed by
//! three bytes. Larger graphs are rejected.
//!
//! ```
//! use graph_inertia::{prelude::*, io::*};
//!
//! let path = AdjArray::try_read_graph6("Bg").unwrap();
//! assert_eq!(path.number_of_edges(), 2);
//! assert_eq!(path.to_graph6(), "Bg");
//! ```

use std::{
    io::{BufRead, ErrorKind, Lines, Result, Write},
    marker::PhantomData,
};

use super::*;

/// Optional header that may precede the first graph of a graph6 stream
pub const GRAPH6_HEADER: &str = ">>graph6<<";

/// Largest order the encoding supports here
pub const GRAPH6_MAX_ORDER: NumNodes = 258_047;

const OFFSET: u8 = 63;
const MAX_BYTE: u8 = 126;

/// Trait for parsing a graph from a single graph6 string
pub trait Graph6Read: Sized {
    /// Parses `line` (surrounding whitespace and an optional `>>graph6<<` header are ignored)
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::InvalidData`] if `line` is not valid graph6.
    fn try_read_graph6(line: &str) -> Result<Self>;
}

impl<G> Graph6Read for G
where
    G: GraphFromScratch,
{
    fn try_read_graph6(line: &str) -> Result<Self> {
        let line = line.trim();
        let bytes = line.strip_prefix(GRAPH6_HEADER).unwrap_or(line).as_bytes();

        raise_error_unless!(
            bytes.iter().all(|b| (OFFSET..=MAX_BYTE).contains(b)),
            ErrorKind::InvalidData,
            format!("Invalid character in graph6 string {line:?}")
        );

        let (n, data) = decode_order(bytes)?;

        let num_pairs = n as u64 * n.saturating_sub(1) as u64 / 2;
        let expected = num_pairs.div_ceil(6);
        raise_error_unless!(
            data.len() as u64 == expected,
            ErrorKind::InvalidData,
            format!(
                "graph6 string for {n} nodes needs {expected} data bytes, found {}",
                data.len()
            )
        );

        let bit = |k: u64| {
            let byte = data[(k / 6) as usize] - OFFSET;
            (byte >> (5 - k % 6)) & 1 == 1
        };

        let edges = (1..n)
            .flat_map(|v| (0..v).map(move |u| Edge(u, v)))
            .enumerate()
            .filter(|&(k, _)| bit(k as u64))
            .map(|(_, e)| e);

        Ok(G::from_edges(n, edges))
    }
}

/// Splits off and decodes `N(n)`
fn decode_order(bytes: &[u8]) -> Result<(NumNodes, &[u8])> {
    match bytes {
        [] => Err(io_error!(ErrorKind::InvalidData, "Empty graph6 string")),
        [MAX_BYTE, MAX_BYTE, ..] => Err(io_error!(
            ErrorKind::InvalidData,
            format!("graph6 orders above {GRAPH6_MAX_ORDER} are not supported")
        )),
        [MAX_BYTE, rest @ ..] => {
            raise_error_unless!(
                rest.len() >= 3,
                ErrorKind::InvalidData,
                "Premature end of graph6 order"
            );
            let n = rest[..3]
                .iter()
                .fold(0, |n, &b| (n << 6) | (b - OFFSET) as NumNodes);
            Ok((n, &rest[3..]))
        }
        [b, rest @ ..] => Ok(((b - OFFSET) as NumNodes, rest)),
    }
}

/// Reads one graph per line from a [`BufRead`]; empty lines are skipped.
///
/// ```
/// use graph_inertia::{prelude::*, io::*};
///
/// let input = ">>graph6<<A_\nBw\n\n@\n";
/// let graphs: Vec<AdjArray> = Graph6Reader::new(input.as_bytes())
///     .collect::<std::io::Result<_>>()
///     .unwrap();
///
/// assert_eq!(graphs.len(), 3);
/// assert_eq!(graphs[1].number_of_edges(), 3);
/// ```
pub struct Graph6Reader<R, G> {
    lines: Lines<R>,
    _graph: PhantomData<G>,
}

impl<R: BufRead, G> Graph6Reader<R, G> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            _graph: PhantomData,
        }
    }
}

impl<R, G> Iterator for Graph6Reader<R, G>
where
    R: BufRead,
    G: GraphFromScratch,
{
    type Item = Result<G>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            if line.trim().is_empty() {
                continue;
            }

            return Some(G::try_read_graph6(&line));
        }
    }
}

/// Trait for encoding a graph in graph6
pub trait Graph6Write {
    /// Writes the graph6 encoding (without header and line break) into `writer`.
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::InvalidInput`] if the graph has self-loops or more
    /// than [`GRAPH6_MAX_ORDER`] nodes, and forwards errors of the writer.
    fn try_write_graph6<W: Write>(&self, writer: W) -> Result<()>;

    /// Returns the graph6 encoding as string; self-loops cannot be represented and are skipped.
    ///
    /// # Panics
    /// Panics if the graph has more than [`GRAPH6_MAX_ORDER`] nodes.
    fn to_graph6(&self) -> String;
}

impl<G> Graph6Write for G
where
    G: AdjacencyList,
{
    fn try_write_graph6<W: Write>(&self, mut writer: W) -> Result<()> {
        raise_error_unless!(
            self.number_of_nodes() <= GRAPH6_MAX_ORDER,
            ErrorKind::InvalidInput,
            format!("graph6 orders above {GRAPH6_MAX_ORDER} are not supported")
        );
        raise_error_unless!(
            self.edges(true).all(|e| !e.is_loop()),
            ErrorKind::InvalidInput,
            "graph6 cannot encode self-loops"
        );

        writer.write_all(&encode(self))
    }

    fn to_graph6(&self) -> String {
        assert!(self.number_of_nodes() <= GRAPH6_MAX_ORDER);
        encode(self).into_iter().map(char::from).collect()
    }
}

fn encode<G: AdjacencyList>(graph: &G) -> Vec<u8> {
    let n = graph.number_of_nodes();
    let mut bytes = Vec::new();

    if n < MAX_BYTE as NumNodes - OFFSET as NumNodes {
        bytes.push(n as u8 + OFFSET);
    } else {
        bytes.push(MAX_BYTE);
        bytes.extend((0..3).rev().map(|i| ((n >> (6 * i)) & 0x3f) as u8 + OFFSET));
    }

    // index of the pair (u, v) with u < v in column order
    let index = |Edge(u, v): Edge| v as u64 * (v as u64 - 1) / 2 + u as u64;

    let num_pairs = n as u64 * n.saturating_sub(1) as u64 / 2;
    let mut data = vec![0u8; num_pairs.div_ceil(6) as usize];
    for e in graph.edges(true).filter(|e| !e.is_loop()) {
        let k = index(e);
        data[(k / 6) as usize] |= 1 << (5 - k % 6);
    }

    bytes.extend(data.into_iter().map(|b| b + OFFSET));
    bytes
}

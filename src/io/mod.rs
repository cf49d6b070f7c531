/*!
# IO

Utilities for reading and writing graphs in the [graph6](https://users.cecs.anu.edu.au/~bdm/data/formats.txt)
format of *nauty*: a compact, printable encoding of simple undirected graphs with one graph per line.

## Traits

- [`Graph6Read`] parses a single graph from a string.
- [`Graph6Reader`] streams graphs out of any [`BufRead`](std::io::BufRead), one per line.
- [`Graph6Write`] encodes a graph, either into a `String` or into any [`Write`](std::io::Write).

All parsing errors are reported as [`std::io::Error`] of kind [`ErrorKind::InvalidData`](std::io::ErrorKind::InvalidData).
*/

pub mod graph6;

use crate::prelude::*;

pub use graph6::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;

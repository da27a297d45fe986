//! Failures of the mutable surface used to write results into a graph.

use std::fmt;

use thiserror::Error;

/// The node identity is already taken.
#[derive(Debug, Error, PartialEq)]
#[error("adding node {id:?} failed: node already exists")]
pub struct AddNodeError<NI: fmt::Debug> {
    pub id: NI,
}

impl<NI: fmt::Debug> AddNodeError<NI> {
    pub fn new(id: NI) -> Self {
        Self { id }
    }
}

/// The edge was rejected. The attribute is handed back to the caller.
#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    pub attr: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(attr: E, kind: AddEdgeErrorKind) -> Self {
        Self { attr, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

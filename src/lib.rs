#![warn(missing_docs)]

//! # `aqueduct`
//!
//! The algorithmic core of a grid-based pipe-connection puzzle: an N×N board
//! with permanently blocked cells, a water source on the top edge, a drain on
//! the bottom edge, and six pipe shapes the player lays down to connect the
//! two. Begin by sampling a board with a [`BoardBuilder`], feed it placement
//! events, then call [`Board::validate`] to judge the submission or
//! [`Board::give_up_hint`] to compute the shortest open route.
//!
//! Rendering, input mapping, dialogs, and timer display are external
//! collaborators; this crate only ever returns typed payloads and failures
//! across that boundary.
//!
//! # Internals
//! The board is expressed as a weighted undirected graph whose vertices are
//! the open cells. Two interchangeable backing stores implement the [`Graph`]
//! trait, a sparse [`AdjacencyListGraph`] and a dense, matrix-backed
//! [`AdjacencyMatrixGraph`], and the caller selects one at board
//! construction; nothing downstream depends on the concrete representation.
//! Vertices live in an arena addressed by stable indices, with neighbor sets
//! stored as index lists, so the structure carries no ownership cycles.
//!
//! Solvability of a freshly sampled board is a BFS reachability check over
//! the full-connectivity graph (every grid-adjacent open pair). A submission
//! is validated by rebuilding the edge set gated on pipe presence, finding a
//! source-to-drain path, and checking each step of that path against the
//! directional compatibility of the two pipe shapes it crosses. The classic
//! algorithms the trait exposes beyond that (DFS, Dijkstra, Floyd-Warshall,
//! Prim, Kruskal) serve hints, scoring bonuses, and the structural test
//! suite.
//!
//! Two structural quirks are accepted contracts rather than defects: vertex
//! payloads are not deduplicated on insert, and the list representation
//! stores duplicate edge entries for a repeated pair.

pub use board::{Board, BoardError, Solution};
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use direction::Direction;
pub use graph::{Graph, GraphError};
pub use list_graph::AdjacencyListGraph;
pub use location::Location;
pub use matrix_graph::AdjacencyMatrixGraph;
pub use pipe::PipeKind;
pub use vertex::{Edge, Vertex, VertexId, VisitState, Weight, INFINITY};

pub(crate) mod board;
pub mod builder;
pub(crate) mod direction;
pub(crate) mod disjoint;
pub(crate) mod graph;
pub(crate) mod list_graph;
pub(crate) mod location;
pub(crate) mod matrix_graph;
pub(crate) mod pipe;
pub(crate) mod vertex;

use std::hash::Hash;

use ndarray::Array2;
use thiserror::Error;

use crate::vertex::{Vertex, VertexId, Weight};

/// Errors raised by structural graph mutations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum GraphError {
    /// A referenced vertex is not a member of the graph. Always a caller
    /// contract violation; never recoverable by retry.
    #[error("the vertex is not in the graph")]
    NotInGraph,
}

/// A weighted undirected graph over payloads of type `T`, backed by either a
/// sparse adjacency-list store ([`AdjacencyListGraph`](crate::AdjacencyListGraph))
/// or a dense matrix store ([`AdjacencyMatrixGraph`](crate::AdjacencyMatrixGraph)).
///
/// The representation is chosen once, at construction, by the caller; nothing
/// downstream of that choice inspects the concrete type. Vertices live in an
/// arena addressed by [`VertexId`] in insertion order, which makes traversal
/// order deterministic.
///
/// Degenerate inputs (empty graph, unknown traversal source, disconnected
/// destination) yield empty or partial results rather than errors; only the
/// structural mutations in this trait are fallible.
pub trait Graph<T>: Sized
where
    T: Clone + Eq + Hash,
{
    /// An empty graph of this representation.
    fn new() -> Self;

    /// Append a vertex carrying `data` and return its id.
    ///
    /// No duplicate check is performed; inserting an identical payload twice
    /// yields two distinct vertices (an accepted quirk, see crate docs).
    fn add_vertex(&mut self, data: T) -> VertexId;

    /// Find the first vertex whose payload equals `data`, by linear scan in
    /// insertion order.
    fn find_vertex(&self, data: &T) -> Option<VertexId>;

    /// Remove a vertex together with every edge touching it, purging it from
    /// all neighbor records.
    ///
    /// Every vertex inserted after `vertex` is renumbered down by one.
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError>;

    /// Record an undirected edge of the given weight between two vertices.
    /// The adjacency is stored symmetrically.
    ///
    /// In list form a repeated pair creates a duplicate edge entry; in matrix
    /// form it overwrites the weight.
    fn add_edge(&mut self, source: VertexId, destination: VertexId, weight: Weight) -> Result<(), GraphError>;

    /// Remove the edge between two vertices. A silent no-op when no such edge
    /// exists.
    fn remove_edge(&mut self, source: VertexId, destination: VertexId) -> Result<(), GraphError>;

    /// Clear every edge while preserving the vertex arena. Used to reset
    /// between puzzle phases without rebuilding the board.
    fn remove_all_edges(&mut self);

    /// Depth-first visitation order from `source`, marking discovery and
    /// finish timestamps from one monotonically increasing counter.
    ///
    /// Neighbors are visited in insertion order. An out-of-range source
    /// yields an empty sequence.
    fn dfs(&mut self, source: VertexId) -> Vec<VertexId>;

    /// Breadth-first visitation order from `source`, recording hop distances
    /// and predecessor pointers on the visited vertices.
    ///
    /// Contains only vertices reachable from `source`; an out-of-range
    /// source yields an empty sequence.
    fn bfs(&mut self, source: VertexId) -> Vec<VertexId>;

    /// Single-pair shortest path for non-negative weights, returned **from
    /// destination back to source**. Downstream consumers index the first
    /// element as the destination; preserve the ordering.
    ///
    /// Scratch state is reset on entry and the final distances and
    /// predecessors are recorded on the vertices, replacing whatever the
    /// previous traversal left there.
    ///
    /// An unreachable destination yields the partial path `[destination]`;
    /// `dijkstra(s, s)` yields `[s]`. Negative weights are not rejected and
    /// produce best-effort output.
    fn dijkstra(&mut self, source: VertexId, destination: VertexId) -> Vec<VertexId>;

    /// All-pairs shortest distances. The diagonal is zero, direct edges seed
    /// the initial distances and [`INFINITY`](crate::INFINITY) marks a
    /// missing path.
    ///
    /// There is no negative-cycle detection; such a cycle surfaces as a
    /// negative diagonal entry.
    fn floyd_warshall(&self) -> Array2<Weight>;

    /// Minimum spanning tree from `start` as a new graph of the same
    /// representation, carrying the same payloads in the same arena order.
    ///
    /// On disconnected input the result spans only the component reachable
    /// from `start`; this is not an error.
    fn prim(&self, start: VertexId) -> Self;

    /// Minimum spanning tree by sorting all edges ascending and accepting
    /// each edge whose endpoints lie in different union-find components.
    /// Equal weights tie-break by encounter order, so output is
    /// deterministic.
    fn kruskal(&self) -> Self;

    /// The live ordered vertex arena, exposed for iteration only.
    fn vertices(&self) -> &[Vertex<T>];

    /// A single vertex, including the scratch state left by the most recent
    /// traversal.
    fn vertex(&self, vertex: VertexId) -> Option<&Vertex<T>>;
}

use unordered_pair::UnorderedPair;

/// Index of a vertex in a graph's arena.
///
/// Indices are assigned in insertion order and remain stable until a
/// `remove_vertex` call, which renumbers every vertex inserted after the
/// removed one.
pub type VertexId = usize;

/// Edge weight. `0` means "no edge" in the matrix representation.
pub type Weight = i32;

/// Sentinel for "no path known", mirrored in Floyd-Warshall output.
pub const INFINITY: Weight = Weight::MAX;

/// Tri-state traversal marker.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum VisitState {
    /// Not yet discovered.
    #[default]
    Unvisited,
    /// Discovered but not fully explored.
    Frontier,
    /// Fully explored.
    Finished,
}

/// A graph vertex: a payload plus traversal scratch state.
///
/// Scratch state (visit marker, distance, predecessor, timestamps) is reset
/// at the start of every traversal and is only meaningful after one; it never
/// carries over between independent calls.
#[derive(Clone, Debug)]
pub struct Vertex<T> {
    pub(crate) data: T,
    pub(crate) state: VisitState,
    pub(crate) distance: Weight,
    pub(crate) predecessor: Option<VertexId>,
    pub(crate) discovery: usize,
    pub(crate) finish: usize,
    // adjacency in insertion order; unused by the matrix representation
    pub(crate) neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            state: VisitState::Unvisited,
            distance: INFINITY,
            predecessor: None,
            discovery: 0,
            finish: 0,
            neighbors: Vec::new(),
        }
    }

    pub(crate) fn reset_scratch(&mut self) {
        self.state = VisitState::Unvisited;
        self.distance = INFINITY;
        self.predecessor = None;
        self.discovery = 0;
        self.finish = 0;
    }

    /// The payload carried by this vertex.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Visit marker left by the most recent traversal.
    pub fn state(&self) -> VisitState {
        self.state
    }

    /// Best known distance from the source of the most recent BFS or
    /// Dijkstra run (hops for BFS, summed weights for Dijkstra), or
    /// [`INFINITY`] if this vertex was not reached.
    pub fn distance(&self) -> Weight {
        self.distance
    }

    /// Predecessor on the traversal tree of the most recent BFS or Dijkstra
    /// run.
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    /// Discovery timestamp assigned by the most recent DFS.
    pub fn discovery(&self) -> usize {
        self.discovery
    }

    /// Finish timestamp assigned by the most recent DFS.
    pub fn finish(&self) -> usize {
        self.finish
    }
}

/// One undirected weighted connection, stored as an ordered triple.
///
/// The adjacency it stands for is always recorded symmetrically; the ordering
/// of `source` and `destination` only reflects the `add_edge` call.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Edge {
    pub(crate) source: VertexId,
    pub(crate) destination: VertexId,
    pub(crate) weight: Weight,
}

impl Edge {
    /// The endpoint pair, insensitive to storage order.
    pub fn endpoints(&self) -> UnorderedPair<VertexId> {
        UnorderedPair(self.source, self.destination)
    }

    /// This edge's weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub(crate) fn touches(&self, v: VertexId) -> bool {
        self.source == v || self.destination == v
    }

    /// Given one endpoint, the other.
    pub(crate) fn other(&self, v: VertexId) -> VertexId {
        if self.source == v {
            self.destination
        } else {
            self.source
        }
    }
}

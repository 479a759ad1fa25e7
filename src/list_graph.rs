use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

use itertools::Itertools;
use ndarray::Array2;
use unordered_pair::UnorderedPair;

use crate::disjoint::DisjointSet;
use crate::graph::{Graph, GraphError};
use crate::vertex::{Edge, Vertex, VertexId, VisitState, Weight, INFINITY};

/// Sparse graph representation: per-vertex neighbor lists plus a flat edge
/// list.
///
/// Suited to boards where most cell pairs are not adjacent. Neighbor lists
/// keep insertion order, so traversals are deterministic. Edges are not
/// deduplicated; adding the same pair twice stores two entries.
pub struct AdjacencyListGraph<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge>,
    time: usize,
}

impl<T> AdjacencyListGraph<T> {
    fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.vertices.len()
    }

    fn reset_traversal(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset_scratch();
        }
        self.time = 0;
    }

    fn discover(&mut self, vertex: VertexId, order: &mut Vec<VertexId>) {
        self.time += 1;
        let v = &mut self.vertices[vertex];
        v.discovery = self.time;
        v.state = VisitState::Frontier;
        order.push(vertex);
    }

    // Endpoints already validated; skips the membership check of add_edge.
    fn record_edge(&mut self, source: VertexId, destination: VertexId, weight: Weight) {
        self.vertices[source].neighbors.push(destination);
        self.vertices[destination].neighbors.push(source);
        self.edges.push(Edge { source, destination, weight });
    }

    /// All stored edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.touches(vertex))
    }

    /// The first stored edge joining the two endpoints, in either order.
    pub fn find_edge(&self, source: VertexId, destination: VertexId) -> Option<&Edge> {
        let pair = UnorderedPair(source, destination);
        self.edges.iter().find(|e| e.endpoints() == pair)
    }
}

impl<T> Default for AdjacencyListGraph<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> for AdjacencyListGraph<T>
where
    T: Clone + Eq + Hash,
{
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            time: 0,
        }
    }

    fn add_vertex(&mut self, data: T) -> VertexId {
        self.vertices.push(Vertex::new(data));
        self.vertices.len() - 1
    }

    fn find_vertex(&self, data: &T) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.data == *data)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        if !self.contains(vertex) {
            return Err(GraphError::NotInGraph);
        }

        self.vertices.remove(vertex);
        self.edges.retain(|e| !e.touches(vertex));

        // purge the neighbor records, then renumber everything past the hole
        for v in &mut self.vertices {
            v.neighbors.retain(|&n| n != vertex);
            for n in &mut v.neighbors {
                if *n > vertex {
                    *n -= 1;
                }
            }
        }
        for e in &mut self.edges {
            if e.source > vertex {
                e.source -= 1;
            }
            if e.destination > vertex {
                e.destination -= 1;
            }
        }

        Ok(())
    }

    fn add_edge(&mut self, source: VertexId, destination: VertexId, weight: Weight) -> Result<(), GraphError> {
        if !self.contains(source) || !self.contains(destination) {
            return Err(GraphError::NotInGraph);
        }

        self.record_edge(source, destination, weight);
        Ok(())
    }

    fn remove_edge(&mut self, source: VertexId, destination: VertexId) -> Result<(), GraphError> {
        if !self.contains(source) || !self.contains(destination) {
            return Err(GraphError::NotInGraph);
        }

        let pair = UnorderedPair(source, destination);
        let Some(index) = self.edges.iter().position(|e| e.endpoints() == pair) else {
            // no such edge is a no-op, not an error
            return Ok(());
        };
        self.edges.remove(index);

        if let Some(at) = self.vertices[source].neighbors.iter().position(|&n| n == destination) {
            self.vertices[source].neighbors.remove(at);
        }
        if let Some(at) = self.vertices[destination].neighbors.iter().position(|&n| n == source) {
            self.vertices[destination].neighbors.remove(at);
        }

        Ok(())
    }

    fn remove_all_edges(&mut self) {
        self.edges.clear();
        for vertex in &mut self.vertices {
            vertex.neighbors.clear();
        }
    }

    fn dfs(&mut self, source: VertexId) -> Vec<VertexId> {
        let mut order = Vec::new();
        if !self.contains(source) {
            return order;
        }

        self.reset_traversal();
        self.discover(source, &mut order);

        // explicit stack of (vertex, neighbor cursor) frames instead of
        // recursion, preserving the recursive discovery/finish numbering
        let mut stack: Vec<(VertexId, usize)> = vec![(source, 0)];
        while let Some(&(v, cursor)) = stack.last() {
            let mut cur = cursor;
            let mut descended = false;
            while let Some(&u) = self.vertices[v].neighbors.get(cur) {
                cur += 1;
                if self.vertices[u].state == VisitState::Unvisited {
                    stack.last_mut().unwrap().1 = cur;
                    self.discover(u, &mut order);
                    stack.push((u, 0));
                    descended = true;
                    break;
                }
            }

            if !descended {
                self.time += 1;
                let vert = &mut self.vertices[v];
                vert.finish = self.time;
                vert.state = VisitState::Finished;
                stack.pop();
            }
        }

        order
    }

    fn bfs(&mut self, source: VertexId) -> Vec<VertexId> {
        let mut order = Vec::new();
        if !self.contains(source) {
            return order;
        }

        self.reset_traversal();
        let src = &mut self.vertices[source];
        src.state = VisitState::Frontier;
        src.distance = 0;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            order.push(u);
            for i in 0..self.vertices[u].neighbors.len() {
                let v = self.vertices[u].neighbors[i];
                if self.vertices[v].state == VisitState::Unvisited {
                    let distance = self.vertices[u].distance + 1;
                    let next = &mut self.vertices[v];
                    next.state = VisitState::Frontier;
                    next.distance = distance;
                    next.predecessor = Some(u);
                    queue.push_back(v);
                }
            }
            self.vertices[u].state = VisitState::Finished;
        }

        order
    }

    fn dijkstra(&mut self, source: VertexId, destination: VertexId) -> Vec<VertexId> {
        if !self.contains(source) || !self.contains(destination) {
            return Vec::new();
        }

        self.reset_traversal();

        let n = self.vertices.len();
        let mut dist = vec![INFINITY; n];
        let mut prev: Vec<Option<VertexId>> = vec![None; n];
        let mut settled = vec![false; n];

        dist[source] = 0;
        let mut heap = BinaryHeap::from([Reverse((0, source))]);

        while let Some(Reverse((_, u))) = heap.pop() {
            if u == destination {
                break;
            }
            if settled[u] {
                continue;
            }
            settled[u] = true;

            for edge in self.incident_edges(u) {
                let v = edge.other(u);
                let candidate = dist[u].saturating_add(edge.weight);
                if !settled[v] && candidate < dist[v] {
                    dist[v] = candidate;
                    prev[v] = Some(u);
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        // publish the final distances and predecessors into the arena
        // scratch, so vertex() reports this call rather than a prior one
        for (v, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.distance = dist[v];
            vertex.predecessor = prev[v];
        }

        // path runs from the destination back to the source by contract
        let mut path = Vec::new();
        let mut current = Some(destination);
        while let Some(v) = current {
            path.push(v);
            current = prev[v];
        }
        path
    }

    fn floyd_warshall(&self) -> Array2<Weight> {
        let n = self.vertices.len();
        let mut dist = Array2::from_elem((n, n), INFINITY);

        for i in 0..n {
            dist[[i, i]] = 0;
        }
        for edge in &self.edges {
            let (i, j) = (edge.source, edge.destination);
            if i != j && edge.weight < dist[[i, j]] {
                // duplicated pairs seed from their cheapest entry, matching
                // what Dijkstra would relax over the same graph
                dist[[i, j]] = edge.weight;
                dist[[j, i]] = edge.weight;
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if dist[[i, k]] != INFINITY && dist[[k, j]] != INFINITY {
                        let through = dist[[i, k]].saturating_add(dist[[k, j]]);
                        if through < dist[[i, j]] {
                            dist[[i, j]] = through;
                        }
                    }
                }
            }
        }

        dist
    }

    fn prim(&self, start: VertexId) -> Self {
        let mut mst = Self::new();
        for vertex in &self.vertices {
            mst.add_vertex(vertex.data.clone());
        }
        if !self.contains(start) {
            return mst;
        }

        let n = self.vertices.len();
        // best known connecting-edge weight per vertex
        let mut key = vec![INFINITY; n];
        let mut pred: Vec<Option<VertexId>> = vec![None; n];
        let mut in_tree = vec![false; n];

        key[start] = 0;
        let mut heap = BinaryHeap::from([Reverse((0, start))]);

        while let Some(Reverse((weight, u))) = heap.pop() {
            if in_tree[u] {
                continue;
            }
            in_tree[u] = true;
            if let Some(p) = pred[u] {
                mst.record_edge(p, u, weight);
            }

            for edge in self.incident_edges(u) {
                let v = edge.other(u);
                if !in_tree[v] && edge.weight < key[v] {
                    key[v] = edge.weight;
                    pred[v] = Some(u);
                    heap.push(Reverse((edge.weight, v)));
                }
            }
        }

        mst
    }

    fn kruskal(&self) -> Self {
        let mut mst = Self::new();
        for vertex in &self.vertices {
            mst.add_vertex(vertex.data.clone());
        }

        let mut components = DisjointSet::new(self.vertices.iter().map(|v| v.data.clone()));

        // stable sort: equal weights keep their encounter order
        for edge in self.edges.iter().sorted_by_key(|e| e.weight) {
            let a = &self.vertices[edge.source].data;
            let b = &self.vertices[edge.destination].data;
            if components.find(a) != components.find(b) {
                components.union(a, b);
                mst.record_edge(edge.source, edge.destination, edge.weight);
            }
        }

        mst
    }

    fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    fn vertex(&self, vertex: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(vertex)
    }
}

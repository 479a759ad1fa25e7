use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

use itertools::Itertools;
use ndarray::{s, Array2};

use crate::disjoint::DisjointSet;
use crate::graph::{Graph, GraphError};
use crate::vertex::{Vertex, VertexId, VisitState, Weight, INFINITY};

/// Dense graph representation: an N×N weight matrix indexed by vertex
/// position, where a zero cell means "no edge".
///
/// The matrix dimensions always equal the vertex count; adding a vertex grows
/// the matrix and removing one rebuilds it with that row and column excised,
/// renumbering all subsequent vertices.
pub struct AdjacencyMatrixGraph<T> {
    vertices: Vec<Vertex<T>>,
    matrix: Array2<Weight>,
    time: usize,
}

impl<T> AdjacencyMatrixGraph<T> {
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

    fn record_edge(&mut self, source: VertexId, destination: VertexId, weight: Weight) {
        self.matrix[[source, destination]] = weight;
        self.matrix[[destination, source]] = weight;
    }

    // Neighbors of `vertex` in ascending index order, collected so callers
    // may mutate the arena while walking them.
    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.matrix
            .row(vertex)
            .indexed_iter()
            .filter(|(_, &w)| w != 0)
            .map(|(u, _)| u)
            .collect_vec()
    }

    /// The stored weight between two vertices, if an edge exists.
    pub fn edge_weight(&self, source: VertexId, destination: VertexId) -> Option<Weight> {
        if !self.contains(source) || !self.contains(destination) {
            return None;
        }
        match self.matrix[[source, destination]] {
            0 => None,
            w => Some(w),
        }
    }
}

impl<T> Default for AdjacencyMatrixGraph<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> for AdjacencyMatrixGraph<T>
where
    T: Clone + Eq + Hash,
{
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            matrix: Array2::zeros((0, 0)),
            time: 0,
        }
    }

    fn add_vertex(&mut self, data: T) -> VertexId {
        self.vertices.push(Vertex::new(data));

        let n = self.vertices.len();
        let mut grown = Array2::zeros((n, n));
        grown.slice_mut(s![..n - 1, ..n - 1]).assign(&self.matrix);
        self.matrix = grown;

        n - 1
    }

    fn find_vertex(&self, data: &T) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.data == *data)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        if !self.contains(vertex) {
            return Err(GraphError::NotInGraph);
        }

        self.vertices.remove(vertex);

        // rebuild with the row and column excised; later indices renumber
        let n = self.vertices.len();
        let skip = |i: usize| if i < vertex { i } else { i + 1 };
        self.matrix = Array2::from_shape_fn((n, n), |(i, j)| self.matrix[[skip(i), skip(j)]]);

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

        self.matrix[[source, destination]] = 0;
        self.matrix[[destination, source]] = 0;
        Ok(())
    }

    fn remove_all_edges(&mut self) {
        self.matrix.fill(0);
    }

    fn dfs(&mut self, source: VertexId) -> Vec<VertexId> {
        let mut order = Vec::new();
        if !self.contains(source) {
            return order;
        }

        self.reset_traversal();
        self.discover(source, &mut order);

        // explicit stack of (vertex, matrix-column cursor) frames
        let mut stack: Vec<(VertexId, usize)> = vec![(source, 0)];
        while let Some(&(v, cursor)) = stack.last() {
            let n = self.vertices.len();
            let mut cur = cursor;
            let mut descended = false;
            while cur < n {
                let u = cur;
                cur += 1;
                if self.matrix[[v, u]] != 0 && self.vertices[u].state == VisitState::Unvisited {
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
            for v in self.neighbors(u) {
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

            for v in 0..n {
                let weight = self.matrix[[u, v]];
                if weight == 0 {
                    continue;
                }
                let candidate = dist[u].saturating_add(weight);
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
        for ((i, j), &weight) in self.matrix.indexed_iter() {
            if i != j && weight != 0 {
                dist[[i, j]] = weight;
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
        let mut in_tree = vec![false; n];
        in_tree[start] = true;

        // priority queue of crossing edges, smallest weight first
        let mut heap: BinaryHeap<Reverse<(Weight, VertexId, VertexId)>> = BinaryHeap::new();
        for v in self.neighbors(start) {
            heap.push(Reverse((self.matrix[[start, v]], start, v)));
        }

        while let Some(Reverse((weight, u, v))) = heap.pop() {
            if in_tree[v] {
                continue;
            }
            in_tree[v] = true;
            mst.record_edge(u, v, weight);

            for w in self.neighbors(v) {
                if !in_tree[w] {
                    heap.push(Reverse((self.matrix[[v, w]], v, w)));
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

        // upper triangle in row-major order fixes the encounter order for ties
        let edges = (0..self.vertices.len())
            .tuple_combinations::<(_, _)>()
            .filter(|&(i, j)| self.matrix[[i, j]] != 0)
            .sorted_by_key(|&(i, j)| self.matrix[[i, j]]);

        for (i, j) in edges {
            let a = &self.vertices[i].data;
            let b = &self.vertices[j].data;
            if components.find(a) != components.find(b) {
                components.union(a, b);
                mst.record_edge(i, j, self.matrix[[i, j]]);
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

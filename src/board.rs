use std::collections::HashMap;
use std::time::Duration;

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

use crate::builder::BuilderInvalidReason;
use crate::direction::Direction;
use crate::graph::Graph;
use crate::location::{Dimension, Location};
use crate::pipe::PipeKind;
use crate::vertex::VertexId;

/// Typed failures surfaced to the presentation layer.
#[derive(Clone, Debug, Error)]
pub enum BoardError {
    /// Generation produced a configuration with no source-to-drain path.
    /// Recovered by discarding the board and building a fresh one; never
    /// retried internally.
    #[error("the generated board has no source-to-drain path")]
    Unsolvable,
    /// The submitted pipe layout fails the orientation or connectivity
    /// checks. Recovered locally: placed pipes are cleared and the player
    /// retries in place.
    #[error("the submitted path fails orientation or connectivity checks")]
    InvalidSolution,
    /// A pipe placement referenced a blocked or out-of-range cell.
    #[error("cell {0} cannot hold a pipe")]
    BadPlacement(Location),
    /// The builder was driven into an invalid state before building.
    #[error("invalid board configuration: {0:?}")]
    InvalidConfiguration(Vec<BuilderInvalidReason>),
}

/// An accepted solution, as returned by [`Board::validate`].
#[derive(Clone, Debug)]
pub struct Solution {
    /// The accepted flow path, ordered source to drain.
    pub path: Vec<Location>,
    /// Number of pipe pieces the player had placed.
    pub pipes_used: usize,
    /// Final score, including the shortest-path bonus when earned.
    pub score: u32,
    /// Whether the accepted path ties the globally shortest open-cell path
    /// (an equality on vertex counts, not edge weights).
    pub shortest: bool,
}

const BASE_SCORE: u32 = 1000;
const PIPE_PENALTY: u32 = 10;
const SHORTEST_BONUS: u32 = 200;

/// An N×N grid of open and blocked cells with a source on the top edge and a
/// drain on the bottom edge, plus the overlay of player-placed pipes.
///
/// The board owns a single graph of the caller-selected representation `G`
/// whose vertices are the open cells, created once at generation. Edges are
/// the only thing that changes between phases: the full-connectivity edge set
/// (every grid-adjacent open pair) is used for solvability checks and hints,
/// the pipe-gated edge set for validating a submission, and
/// `remove_all_edges` swaps between them. Structural mutation and traversal
/// are never interleaved.
pub struct Board<G> {
    graph: G,
    dims: (Dimension, Dimension),
    blocked: Array2<bool>,
    source: Location,
    drain: Location,
    pipes: HashMap<Location, PipeKind>,
}

impl<G> Board<G>
where
    G: Graph<Location>,
{
    pub(crate) fn assemble(
        dims: (Dimension, Dimension),
        blocked: Array2<bool>,
        source: Location,
        drain: Location,
    ) -> Result<Self, BoardError> {
        let mut board = Self {
            graph: G::new(),
            dims,
            blocked,
            source,
            drain,
            pipes: HashMap::new(),
        };

        // one vertex per open cell, in row-major order
        for row in 0..dims.0.get() {
            for col in 0..dims.1.get() {
                if !board.blocked[[row, col]] {
                    board.graph.add_vertex(Location(row, col));
                }
            }
        }

        board.connect_open_neighbors();
        if !board.drain_reachable() {
            tracing::debug!("generated board is unsolvable, discarding");
            return Err(BoardError::Unsolvable);
        }

        // hand the board over with a clean edge set for the play phase
        board.graph.remove_all_edges();
        Ok(board)
    }

    /// The source cell, on the top edge. Flow enters here from above, so the
    /// piece placed here must open upward.
    pub fn source(&self) -> Location {
        self.source
    }

    /// The drain cell, on the bottom edge.
    pub fn drain(&self) -> Location {
        self.drain
    }

    /// Board dimensions as `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.dims.0.get(), self.dims.1.get())
    }

    /// Whether `cell` is permanently blocked. Out-of-range cells count as
    /// blocked.
    pub fn is_blocked(&self, cell: Location) -> bool {
        self.blocked.get(cell.as_index()).copied().unwrap_or(true)
    }

    /// The pipe currently placed at `cell`, if any.
    pub fn pipe_at(&self, cell: Location) -> Option<PipeKind> {
        self.pipes.get(&cell).copied()
    }

    /// Number of pipes currently placed.
    pub fn pipes_placed(&self) -> usize {
        self.pipes.len()
    }

    /// The graph over the board's open cells.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Place a pipe at `cell`, replacing any piece already there and
    /// returning it. Blocked and out-of-range cells are rejected.
    pub fn place_pipe(&mut self, cell: Location, kind: PipeKind) -> Result<Option<PipeKind>, BoardError> {
        if self.is_blocked(cell) {
            return Err(BoardError::BadPlacement(cell));
        }

        Ok(self.pipes.insert(cell, kind))
    }

    /// Remove and return the pipe at `cell`, if one is placed.
    pub fn remove_pipe(&mut self, cell: Location) -> Option<PipeKind> {
        self.pipes.remove(&cell)
    }

    /// Clear every placed pipe and all graph edges, returning the board to
    /// the start of the play phase.
    pub fn reset(&mut self) {
        self.pipes.clear();
        self.graph.remove_all_edges();
    }

    /// Validate the player's submission.
    ///
    /// The source and drain pieces must open toward their outside edges, the
    /// pipe-gated graph must connect source to drain, and every step of the
    /// discovered path must satisfy the directional compatibility rule. The
    /// contract is all-or-nothing: one failing step invalidates the whole
    /// submission, the placed pipes are cleared, and the player retries in
    /// place.
    pub fn validate(&mut self, elapsed: Duration) -> Result<Solution, BoardError> {
        match self.check_submission() {
            Ok(path) => {
                let pipes_used = self.pipes.len();
                let shortest = self.ties_shortest_path(path.len());
                let score = score(pipes_used, elapsed, shortest);
                self.graph.remove_all_edges();
                Ok(Solution { path, pipes_used, score, shortest })
            }
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    /// Compute a hint path for a player giving up: the shortest open-cell
    /// route from source to drain, ignoring pipes entirely.
    ///
    /// Placed pipes are cleared first. The returned sequence runs from the
    /// drain back to the source, mirroring the Dijkstra contract.
    pub fn give_up_hint(&mut self) -> Vec<Location> {
        self.reset();
        self.connect_open_neighbors();

        let source = self.graph.find_vertex(&self.source).unwrap();
        let drain = self.graph.find_vertex(&self.drain).unwrap();
        let hint = self
            .graph
            .dijkstra(source, drain)
            .into_iter()
            .map(|v| *self.graph.vertex(v).unwrap().data())
            .collect_vec();

        self.graph.remove_all_edges();
        tracing::debug!(len = hint.len(), "computed give-up hint");
        hint
    }

    // Full-connectivity edges: every grid-adjacent pair of open cells,
    // regardless of pipe presence. Down and Right per cell cover each pair
    // exactly once.
    fn connect_open_neighbors(&mut self) {
        self.connect_where(|board, cell| !board.is_blocked(cell));
    }

    // Player edges: adjacent cells gated on both holding a placed pipe.
    fn connect_piped_neighbors(&mut self) {
        self.connect_where(|board, cell| board.pipes.contains_key(&cell));
    }

    fn connect_where(&mut self, eligible: impl Fn(&Self, Location) -> bool) {
        for row in 0..self.dims.0.get() {
            for col in 0..self.dims.1.get() {
                let cell = Location(row, col);
                if !eligible(self, cell) {
                    continue;
                }
                for dir in [Direction::Down, Direction::Right] {
                    let neighbor = dir.attempt_from(cell);
                    if !eligible(self, neighbor) {
                        continue;
                    }
                    if let (Some(a), Some(b)) = (self.graph.find_vertex(&cell), self.graph.find_vertex(&neighbor)) {
                        // endpoints exist by construction
                        self.graph.add_edge(a, b, 1).unwrap();
                    }
                }
            }
        }
    }

    fn drain_reachable(&mut self) -> bool {
        let source = self.graph.find_vertex(&self.source).unwrap();
        let drain = self.graph.find_vertex(&self.drain).unwrap();
        self.graph.bfs(source).contains(&drain)
    }

    fn check_submission(&mut self) -> Result<Vec<Location>, BoardError> {
        // endpoint gate: the source piece receives flow from above the top
        // row, the drain piece discharges below the bottom row
        let source_pipe = self.pipes.get(&self.source).ok_or(BoardError::InvalidSolution)?;
        let drain_pipe = self.pipes.get(&self.drain).ok_or(BoardError::InvalidSolution)?;
        if !source_pipe.opens(Direction::Up) || !drain_pipe.opens(Direction::Down) {
            tracing::trace!("source or drain piece misoriented");
            return Err(BoardError::InvalidSolution);
        }

        self.graph.remove_all_edges();
        self.connect_piped_neighbors();

        let source = self.graph.find_vertex(&self.source).unwrap();
        let drain = self.graph.find_vertex(&self.drain).unwrap();
        if !self.graph.bfs(source).contains(&drain) {
            tracing::trace!("drain not reached through placed pipes");
            return Err(BoardError::InvalidSolution);
        }

        // walk the predecessor chain drain-to-source, then flip it
        let mut path: Vec<VertexId> = Vec::new();
        let mut current = Some(drain);
        while let Some(v) = current {
            path.push(v);
            current = self.graph.vertex(v).unwrap().predecessor();
        }
        path.reverse();

        let cells = path
            .into_iter()
            .map(|v| *self.graph.vertex(v).unwrap().data())
            .collect_vec();

        // every step must satisfy the directional compatibility rule
        for (&from, &to) in cells.iter().tuple_windows() {
            // consecutive path cells are grid-adjacent by construction
            let travel = Direction::between(from, to).unwrap();
            if !self.pipes[&from].fits(self.pipes[&to], travel) {
                tracing::trace!(%from, %to, ?travel, "incompatible pipe step");
                return Err(BoardError::InvalidSolution);
            }
        }

        Ok(cells)
    }

    // The shortest-path bonus compares vertex counts: the accepted path must
    // be exactly as long as the shortest route over all open cells.
    fn ties_shortest_path(&mut self, accepted_len: usize) -> bool {
        self.graph.remove_all_edges();
        self.connect_open_neighbors();

        let source = self.graph.find_vertex(&self.source).unwrap();
        let drain = self.graph.find_vertex(&self.drain).unwrap();
        self.graph.dijkstra(source, drain).len() == accepted_len
    }
}

fn score(pipes_used: usize, elapsed: Duration, shortest: bool) -> u32 {
    let penalty = PIPE_PENALTY.saturating_mul(pipes_used as u32).saturating_add(elapsed.as_secs() as u32);
    let base = BASE_SCORE.saturating_sub(penalty);
    if shortest {
        base + SHORTEST_BONUS
    } else {
        base
    }
}

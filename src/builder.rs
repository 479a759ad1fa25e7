use std::num::NonZero;

use ndarray::Array2;
use rand::Rng;

use crate::board::{Board, BoardError};
use crate::graph::Graph;
use crate::list_graph::AdjacencyListGraph;
use crate::location::{Dimension, Location};
use crate::matrix_graph::AdjacencyMatrixGraph;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug)]
pub enum BuilderInvalidReason {
    /// The requested blocked-cell count leaves no room for a puzzle (fewer
    /// than two open cells).
    TooManyBlockedCells,
}

/// A builder for square pipe-puzzle boards.
///
/// Collects dimensions and the number of permanently blocked cells, then
/// samples a fresh board. Building is deliberately a one-shot operation with
/// no internal retry: a generation that comes out unsolvable surfaces as
/// [`BoardError::Unsolvable`] and the caller requests a new board.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point.
#[derive(Clone)]
pub struct BoardBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    blocked: usize,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        // the classic configuration: 10x10 with 30 blocked cells
        let mut builder = Self::with_dims((NonZero::new(10).unwrap(), NonZero::new(10).unwrap()));
        builder.blocked_cells(30);
        builder
    }
}

impl BoardBuilder {
    /// Construct a new builder for a board with the specified dimensions,
    /// in `(rows, cols)` order, and no blocked cells.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            blocked: 0,
            invalid_reasons: Vec::new(),
        }
    }

    /// Set the number of cells to block off.
    ///
    /// May cause the builder to enter a [`TooManyBlockedCells`](BuilderInvalidReason::TooManyBlockedCells)
    /// invalid state. If the builder is already in an invalid state, this
    /// function does nothing.
    pub fn blocked_cells(&mut self, count: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if count + 2 > self.dims.0.get() * self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::TooManyBlockedCells);
            return self;
        }

        self.blocked = count;
        self
    }

    /// Check the validity of this builder, ensuring no
    /// [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Sample a board backed by the list representation.
    pub fn build_list(&self, rng: &mut impl Rng) -> Result<Board<AdjacencyListGraph<Location>>, BoardError> {
        self.build(rng)
    }

    /// Sample a board backed by the matrix representation.
    pub fn build_matrix(&self, rng: &mut impl Rng) -> Result<Board<AdjacencyMatrixGraph<Location>>, BoardError> {
        self.build(rng)
    }

    /// Sample a board over the caller-selected graph representation `G`.
    ///
    /// Blocked cells are drawn uniformly without replacement; the source is
    /// drawn among open cells of the top row and the drain among open cells
    /// of the bottom row. Returns [`BoardError::Unsolvable`] when the drawn
    /// configuration admits no source-to-drain path (including a fully
    /// blocked top or bottom row); the caller is expected to discard the
    /// result and build again.
    pub fn build<G>(&self, rng: &mut impl Rng) -> Result<Board<G>, BoardError>
    where
        G: Graph<Location>,
    {
        if !self.invalid_reasons.is_empty() {
            return Err(BoardError::InvalidConfiguration(self.invalid_reasons.clone()));
        }

        let (rows, cols) = (self.dims.0.get(), self.dims.1.get());
        let mut blocked = Array2::from_elem((rows, cols), false);
        let mut placed = 0;
        while placed < self.blocked {
            let cell = (rng.gen_range(0..rows), rng.gen_range(0..cols));
            if !blocked[cell] {
                blocked[cell] = true;
                placed += 1;
            }
        }

        let source = Self::pick_open(rng, &blocked, 0)?;
        let drain = Self::pick_open(rng, &blocked, rows - 1)?;
        tracing::debug!(%source, %drain, blocked = self.blocked, "sampled board configuration");

        Board::assemble(self.dims, blocked, source, drain)
    }

    // A uniformly drawn open cell of the given row, or Unsolvable when the
    // whole row is blocked.
    fn pick_open(rng: &mut impl Rng, blocked: &Array2<bool>, row: usize) -> Result<Location, BoardError> {
        let open: Vec<usize> = blocked
            .row(row)
            .indexed_iter()
            .filter(|(_, &b)| !b)
            .map(|(col, _)| col)
            .collect();

        if open.is_empty() {
            tracing::debug!(row, "edge row fully blocked");
            return Err(BoardError::Unsolvable);
        }

        Ok(Location(row, open[rng.gen_range(0..open.len())]))
    }
}

use tracing::{debug, trace};

/// Edge weight stored in both views. `0` in the matrix means "no edge".
pub type Weight = f64;

/// Orientation and weighting of a graph, fixed at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    pub directed: bool,
    pub weighted: bool,
}

/// A graph over the fixed vertex set `0..n` kept as both an adjacency matrix
/// and an adjacency list.
///
/// Every mutation goes through [`Graph::add_edge`] or [`Graph::remove_edge`],
/// which update both views together. Neither view is handed out mutably.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Number of vertices
    n: usize,
    directed: bool,
    weighted: bool,
    /// Adjacency matrix: matrix[u][v] = weight of u -> v, 0 if absent
    matrix: Vec<Vec<Weight>>,
    /// Adjacency list: (neighbor, weight) in insertion order, duplicates kept
    adjacency: Vec<Vec<(usize, Weight)>>,
}

impl Graph {
    pub fn new(n: usize, directed: bool, weighted: bool) -> Self {
        Graph {
            n,
            directed,
            weighted,
            matrix: vec![vec![0.0; n]; n],
            adjacency: vec![Vec::new(); n],
        }
    }

    pub fn with_options(n: usize, options: GraphOptions) -> Self {
        Self::new(n, options.directed, options.weighted)
    }

    /// Builds a graph from a signed vertex count.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] if `n` is negative or does not
    /// fit in `usize` on this target.
    pub fn try_new(n: i64, directed: bool, weighted: bool) -> Result<Self> {
        if n < 0 {
            return Err(GraphError::InvalidArgument(format!(
                "vertex count must be non-negative, got {n}"
            )));
        }
        let n = usize::try_from(n).map_err(|_| {
            GraphError::InvalidArgument(format!("vertex count {n} is out of range"))
        })?;
        Ok(Self::new(n, directed, weighted))
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Read-only view of the adjacency matrix
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    /// Read-only view of the adjacency list of `v`
    pub fn adjacency(&self, v: usize) -> Result<&[(usize, Weight)]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.n {
            return Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.n,
            });
        }
        Ok(())
    }

    /// Adds the edge `u -> v` (and `v -> u` when undirected).
    ///
    /// In an unweighted graph `weight` is ignored and stored as 1. Adding an
    /// edge that already exists overwrites the matrix cell and appends a
    /// second entry to the list. A self-loop is written exactly once.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either index is out of range;
    /// nothing is written in that case.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let weight = if self.weighted { weight } else { 1.0 };
        let mirror = !self.directed && u != v;

        self.matrix[u][v] = weight;
        self.adjacency[u].push((v, weight));
        if mirror {
            self.matrix[v][u] = weight;
            self.adjacency[v].push((u, weight));
        }

        debug!(u, v, weight, mirror, "added edge");
        Ok(())
    }

    /// Adds `u -> v` with the implicit weight 1
    pub fn add_unit_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_edge(u, v, 1.0)
    }

    /// Removes the edge `u -> v` (and `v -> u` when undirected), dropping every
    /// duplicate list entry. Removing an absent edge changes nothing.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either index is out of range.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.matrix[u][v] = 0.0;
        let dropped = drop_neighbor(&mut self.adjacency[u], v);
        trace!(vertex = u, neighbor = v, dropped, "filtered adjacency list");

        if !self.directed {
            self.matrix[v][u] = 0.0;
            let dropped = drop_neighbor(&mut self.adjacency[v], u);
            trace!(vertex = v, neighbor = u, dropped, "filtered adjacency list");
        }

        debug!(u, v, "removed edge");
        Ok(())
    }

    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        Ok(self.weight(u, v)? != 0.0)
    }

    /// Weight stored in the matrix for `u -> v`, 0 if there is no edge
    pub fn weight(&self, u: usize, v: usize) -> Result<Weight> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.matrix[u][v])
    }

    /// Neighbors of `v` in insertion order, duplicates included
    pub fn neighbors(&self, v: usize) -> Result<Vec<usize>> {
        Ok(self.adjacency(v)?.iter().map(|&(w, _)| w).collect())
    }

    /// Out-degree for directed graphs, number of incident edges otherwise.
    /// A self-loop counts once.
    pub fn degree(&self, v: usize) -> Result<usize> {
        if self.directed {
            Ok(self.adjacency(v)?.len())
        } else {
            Ok(self.neighbors(v)?.len())
        }
    }
}

/// Removes every `(neighbor, _)` entry from `list`, returning how many went
fn drop_neighbor(list: &mut Vec<(usize, Weight)>, neighbor: usize) -> usize {
    let before = list.len();
    list.retain(|&(w, _)| w != neighbor);
    before - list.len()
}

// Module declarations
pub mod consistency;
pub mod display;
pub mod error;

pub use error::{GraphError, Result};

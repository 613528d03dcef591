//! Cross-checks the matrix view against the list view.

use crate::{Graph, GraphError, Result, Weight};

impl Graph {
    /// Verifies that both views describe the same edge set.
    ///
    /// Checks, in order:
    /// - every list entry points inside the graph,
    /// - every non-zero cell `matrix[u][v]` has an entry `(v, w)` in the list
    ///   of `u` with `w` equal to the cell,
    /// - every empty cell either has no list entry for `v` or its most recent
    ///   entry for `v` carries weight 0,
    /// - undirected graphs have a symmetric matrix.
    ///
    /// A weighted graph accepts a zero weight, which the matrix cannot tell
    /// apart from "no edge"; the last write for a pair decides which entry the
    /// cell has to match. Weights are compared bit for bit, so a `NaN` weight
    /// matches the `NaN` entry it was written with.
    ///
    /// # Errors
    /// Returns [`GraphError::Inconsistent`] for the first violation found.
    pub fn check_consistency(&self) -> Result<()> {
        let n = self.vertex_count();

        for u in 0..n {
            let list = &self.adjacency[u];

            if let Some(&(v, _)) = list.iter().find(|&&(v, _)| v >= n) {
                return Err(inconsistent(
                    u,
                    v,
                    "list entry points outside the graph".to_string(),
                ));
            }

            for v in 0..n {
                let cell = self.matrix[u][v];
                if cell != 0.0 {
                    let listed = list
                        .iter()
                        .any(|&(w, weight)| w == v && same_weight(weight, cell));
                    if !listed {
                        return Err(inconsistent(
                            u,
                            v,
                            format!("cell holds {cell} but the list has no matching entry"),
                        ));
                    }
                } else if let Some(&(_, last)) = list.iter().rev().find(|&&(w, _)| w == v) {
                    if last != 0.0 {
                        return Err(inconsistent(
                            u,
                            v,
                            format!("list holds weight {last} but the cell is empty"),
                        ));
                    }
                }

                let mirrored = self.matrix[v][u];
                if !self.is_directed() && !same_weight(cell, mirrored) {
                    return Err(inconsistent(
                        u,
                        v,
                        format!("undirected cells differ ({cell} vs {mirrored})"),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn same_weight(a: Weight, b: Weight) -> bool {
    a.to_bits() == b.to_bits()
}

fn inconsistent(u: usize, v: usize, reason: String) -> GraphError {
    GraphError::Inconsistent { u, v, reason }
}

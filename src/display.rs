//! Text rendering of the two graph views.
//!
//! Nothing here prints; callers decide where the text goes.

use crate::Graph;
use itertools::Itertools;
use std::fmt;

impl Graph {
    /// Renders the adjacency matrix, one row per line, under a column header
    ///
    /// ```text
    /// Adjacency matrix:
    ///    0 1 2
    /// 0: [0, 1, 0]
    /// ```
    pub fn display_matrix(&self) -> String {
        let mut out = String::from("Adjacency matrix:\n");
        out.push_str(&format!("   {}\n", (0..self.vertex_count()).join(" ")));
        for (i, row) in self.matrix().iter().enumerate() {
            out.push_str(&format!("{}: [{}]\n", i, row.iter().join(", ")));
        }
        out
    }

    /// Renders the adjacency list, one vertex per line. Weighted graphs show
    /// each entry as `neighbor(weight)`.
    pub fn display_list(&self) -> String {
        let mut out = String::from("Adjacency list:\n");
        for (i, entries) in self.adjacency.iter().enumerate() {
            let rendered = entries
                .iter()
                .map(|&(v, w)| {
                    if self.is_weighted() {
                        format!("{}({})", v, w)
                    } else {
                        v.to_string()
                    }
                })
                .join(", ");
            out.push_str(&format!("{}: [{}]\n", i, rendered));
        }
        out
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph of {} vertices, {}, {}",
            self.vertex_count(),
            if self.is_directed() { "directed" } else { "undirected" },
            if self.is_weighted() { "weighted" } else { "unweighted" }
        )
    }
}

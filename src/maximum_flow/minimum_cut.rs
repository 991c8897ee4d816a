use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;
use std::fmt;

/// Source side of a saturated network and the original edges leaving it.
#[derive(Debug, PartialEq, Clone)]
pub struct MinimumCut {
    reachable: Vec<bool>,
    edges: Vec<(usize, usize)>,
}

impl MinimumCut {
    /// Expects `graph` to hold a maximum flow from `source`.
    pub fn extract<Flow>(source: usize, graph: &Graph<Flow>) -> Self
    where
        Flow: NumAssign + Ord + Copy,
    {
        let reachable = reachable_from(source, graph);
        let n = graph.num_nodes();

        let mut edges = Vec::new();
        for i in (0..n).filter(|&i| reachable[i]) {
            for j in (0..n).filter(|&j| !reachable[j]) {
                if graph.original_capacity(i, j) != Flow::zero() {
                    edges.push((i, j));
                }
            }
        }

        Self { reachable, edges }
    }

    pub fn is_reachable(&self, u: usize) -> bool {
        self.reachable[u]
    }

    pub fn reachable(&self) -> &[bool] {
        &self.reachable
    }

    // 0-indexed (from, to), row-major
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn capacity<Flow>(&self, graph: &Graph<Flow>) -> Flow
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.edges.iter().fold(Flow::zero(), |sum, &(u, v)| sum + graph.original_capacity(u, v))
    }
}

// 1-indexed edge list preceded by its length
impl fmt::Display for MinimumCut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.edges.len())?;
        for &(u, v) in &self.edges {
            writeln!(f, "{} {}", u + 1, v + 1)?;
        }
        Ok(())
    }
}

/// Vertices reachable from `source` over edges with nonzero residual capacity.
pub fn reachable_from<Flow>(source: usize, graph: &Graph<Flow>) -> Vec<bool>
where
    Flow: NumAssign + Ord + Copy,
{
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut stack = vec![source];
    visited[source] = true;

    while let Some(u) = stack.pop() {
        for v in 0..n {
            if !visited[v] && graph.residual_capacity(u, v) != Flow::zero() {
                visited[v] = true;
                stack.push(v);
            }
        }
    }
    visited
}

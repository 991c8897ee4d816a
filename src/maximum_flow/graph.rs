use crate::error::Error;
use num_traits::NumAssign;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
}

/// Dense capacity graph.
///
/// `residual` holds the current residual capacity of every ordered vertex pair and is mutated by
/// each augmentation. `original` is the snapshot of the input capacities and is never touched
/// after the edges are added. Both are `num_nodes * num_nodes` row-major buffers.
pub struct Graph<Flow> {
    num_nodes: usize,
    edges: Vec<Edge<Flow>>,
    residual: Vec<Flow>,
    original: Vec<Flow>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
            residual: vec![Flow::zero(); num_nodes * num_nodes],
            original: vec![Flow::zero(); num_nodes * num_nodes],
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn index(&self, u: usize, v: usize) -> usize {
        u * self.num_nodes + v
    }

    fn check_edge(&self, from: usize, to: usize, upper: Flow) -> Result<(), Error> {
        for vertex in [from, to] {
            if vertex >= self.num_nodes {
                return Err(Error::VertexOutOfRange { vertex, num_nodes: self.num_nodes });
            }
        }
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        if upper <= Flow::zero() {
            return Err(Error::NonPositiveCapacity(from, to));
        }
        Ok(())
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, Error> {
        self.check_edge(from, to, upper)?;
        let i = self.index(from, to);
        if self.original[i] != Flow::zero() {
            return Err(Error::DuplicateEdge(from, to));
        }

        self.original[i] = upper;
        self.residual[i] = upper;
        self.edges.push(Edge { from, to, upper });
        Ok(self.edges.len() - 1)
    }

    // return edge index; modelled as two opposing edges of capacity `upper`
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, upper: Flow) -> Result<usize, Error> {
        self.check_edge(u, v, upper)?;
        let (uv, vu) = (self.index(u, v), self.index(v, u));
        if self.original[uv] != Flow::zero() || self.original[vu] != Flow::zero() {
            return Err(Error::DuplicateEdge(u, v));
        }

        for i in [uv, vu] {
            self.original[i] = upper;
            self.residual[i] = upper;
        }
        self.edges.push(Edge { from: u, to: v, upper });
        Ok(self.edges.len() - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    #[inline]
    pub fn residual_capacity(&self, u: usize, v: usize) -> Flow {
        self.residual[self.index(u, v)]
    }

    #[inline]
    pub fn original_capacity(&self, u: usize, v: usize) -> Flow {
        self.original[self.index(u, v)]
    }

    // caller guarantees flow <= residual_capacity(u, v)
    #[inline]
    pub fn push_flow(&mut self, u: usize, v: usize, flow: Flow) {
        let (uv, vu) = (self.index(u, v), self.index(v, u));
        self.residual[uv] -= flow;
        self.residual[vu] += flow;
    }

    /// Sum of the input capacities, an undirected edge counted once.
    pub fn total_capacity(&self) -> Flow {
        self.edges.iter().fold(Flow::zero(), |sum, e| sum + e.upper)
    }

    /// Net flow leaving `source`.
    pub fn maximum_flow(&self, source: usize) -> Flow {
        // summed separately: a single pair may carry flow into the source
        let (original, residual) = (0..self.num_nodes).fold((Flow::zero(), Flow::zero()), |(o, r), v| {
            (o + self.original_capacity(source, v), r + self.residual_capacity(source, v))
        });
        original - residual
    }

    /// Restore every residual capacity to its original value.
    pub fn reset(&mut self) {
        self.residual.copy_from_slice(&self.original);
    }
}

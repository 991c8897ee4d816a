use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::status::Status;
use log::{debug, trace};
use num_traits::NumAssign;

#[derive(Default)]
pub struct CapacityScaling<Flow> {
    visited: Vec<bool>,
    flow: Flow,
    num_augmentations: usize,
}

impl<Flow> CapacityScaling<Flow>
where
    Flow: NumAssign + Ord + Copy + std::fmt::Debug,
{
    /// Value of the flow found by the last successful `solve`.
    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.visited.resize(graph.num_nodes(), false);
        self.flow = Flow::zero();
        self.num_augmentations = 0;

        let two = Flow::one() + Flow::one();
        let mut delta = initial_delta(graph.total_capacity());

        let upper = (0..graph.num_nodes()).fold(Flow::zero(), |sum, v| sum + graph.residual_capacity(source, v));
        while delta > Flow::zero() {
            debug!("scaling phase delta={:?} flow={:?}", delta, self.flow);

            // drain every augmenting path in the delta-residual network
            loop {
                self.visited.fill(false);
                match self.dfs(source, sink, upper, delta, graph) {
                    Some(d) => {
                        trace!("augmenting path with flow {:?}", d);
                        self.flow += d;
                        self.num_augmentations += 1;
                    }
                    None => break,
                }
            }
            delta /= two;
        }

        Status::Optimal
    }

    // first path found wins; each frame pushes flow on its own edge once the sink is reached
    fn dfs(&mut self, u: usize, sink: usize, upper: Flow, delta: Flow, graph: &mut Graph<Flow>) -> Option<Flow> {
        if u == sink {
            return Some(upper);
        }
        self.visited[u] = true;

        for v in 0..graph.num_nodes() {
            let residual_capacity = graph.residual_capacity(u, v);
            if self.visited[v] || residual_capacity == Flow::zero() || residual_capacity < delta {
                continue;
            }

            if let Some(d) = self.dfs(v, sink, upper.min(residual_capacity), delta, graph) {
                graph.push_flow(u, v, d);
                return Some(d);
            }
        }
        None
    }
}

// largest power of two not exceeding total, zero for an empty network
fn initial_delta<Flow>(total: Flow) -> Flow
where
    Flow: NumAssign + Ord + Copy,
{
    if total <= Flow::zero() {
        return Flow::zero();
    }
    let two = Flow::one() + Flow::one();
    let mut delta = Flow::one();
    while delta <= total / two {
        delta *= two;
    }
    delta
}

use crate::error::Error;
use crate::io::Scanner;
use crate::maximum_flow::capacity_scaling::CapacityScaling;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::minimum_cut::MinimumCut;
use crate::maximum_flow::status::Status;
use log::info;
use std::io::Write;

/// Parses `n m` and `m` undirected unit edges `a b` (1-indexed).
pub fn read_graph(input: &mut Scanner) -> Result<Graph<i64>, Error> {
    let num_nodes: usize = input.value("vertex count")?;
    let num_edges: usize = input.value("edge count")?;
    if num_nodes < 2 {
        return Err(Error::TooFewVertices(num_nodes));
    }

    let mut graph = Graph::new(num_nodes);
    for _ in 0..num_edges {
        let a = vertex(input, num_nodes)?;
        let b = vertex(input, num_nodes)?;
        // report vertices the way they were read
        graph.add_undirected_edge(a, b, 1).map_err(|err| match err {
            Error::SelfLoop(v) => Error::SelfLoop(v + 1),
            Error::DuplicateEdge(u, v) => Error::DuplicateEdge(u + 1, v + 1),
            err => err,
        })?;
    }
    // more edges than announced
    if let Some(token) = input.token() {
        return Err(Error::TrailingInput(String::from_utf8_lossy(token).into_owned()));
    }
    Ok(graph)
}

fn vertex(input: &mut Scanner, num_nodes: usize) -> Result<usize, Error> {
    let id: usize = input.value("edge endpoint")?;
    match id.checked_sub(1) {
        Some(v) if v < num_nodes => Ok(v),
        _ => Err(Error::VertexOutOfRange { vertex: id, num_nodes }),
    }
}

pub fn run<W: Write>(input: &[u8], out: &mut W) -> Result<(), Error> {
    let mut graph = read_graph(&mut Scanner::new(input))?;
    info!("n={} m={}", graph.num_nodes(), graph.num_edges());

    let (source, sink) = (0, graph.num_nodes() - 1);
    let mut solver = CapacityScaling::default();
    let status = solver.solve(source, sink, &mut graph);
    debug_assert_eq!(status, Status::Optimal);
    info!("maximum flow {} after {} augmentations", solver.flow(), solver.num_augmentations());

    let cut = MinimumCut::extract(source, &graph);
    write!(out, "{}", cut)?;
    out.flush()?;
    Ok(())
}

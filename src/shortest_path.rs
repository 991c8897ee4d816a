pub mod dijkstra;
pub mod grid;

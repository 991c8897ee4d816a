pub mod error;
pub mod io;
pub mod maximum_flow;
pub mod range_minimum;
pub mod shortest_path;
pub mod solution;

pub use error::Error;

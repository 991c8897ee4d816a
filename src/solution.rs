//! Input/output protocol of each exercise. `run` reads the whole problem from `input` and writes
//! the answer to `out`.

pub mod labyrinth;
pub mod mincut;
pub mod range_minimum;

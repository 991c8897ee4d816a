pub mod capacity_scaling;
pub mod graph;
pub mod minimum_cut;
pub mod status;

pub mod segment_tree;

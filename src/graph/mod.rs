pub mod graph;
pub mod graph_arena;
pub mod graph_edge;
pub mod graph_layout;
pub mod graph_node;

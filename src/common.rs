pub mod compact_id_map;
pub mod disjoint_set;
pub mod matrix;
pub mod node_set;
pub mod priority_queue;

pub use compact_id_map::CompactIdMap;
pub use disjoint_set::DisjointSet;
pub use node_set::NodeSet;
pub use priority_queue::PriorityQueue;

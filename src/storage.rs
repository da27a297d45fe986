pub mod adj_list;

pub use adj_list::AdjList;

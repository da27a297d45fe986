pub mod base;
pub mod cost;
pub mod error;
pub mod id;
pub mod marker;

mod graph;

pub use cost::Weight;
pub use graph::*;

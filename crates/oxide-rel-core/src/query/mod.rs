//! Query and mutation descriptors.

mod filter;
mod mutation;
mod select;

pub use filter::FilterQuery;
pub use mutation::{ConflictAction, Delete, Insert, InsertAll, Mutate, OnConflict, Update};
pub use select::{Query, SortQuery};

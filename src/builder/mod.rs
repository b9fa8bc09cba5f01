//! Builder API for ergonomic workflow graph construction.
//!
//! This module provides fluent builders for areas, activities and whole
//! graphs, plus the `params!` macro for query parameters. Building a graph
//! validates it; see [`crate::validation`].

pub mod activity;
pub mod error;
pub mod graph;
pub mod macros;

pub use activity::ActivityBuilder;
pub use error::BuildError;
pub use graph::{AreaBuilder, GraphBuilder};
pub(crate) use graph::assemble;

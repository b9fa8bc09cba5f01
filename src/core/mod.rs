//! Workflow graph model.
//!
//! This module contains the read-only structure a loader produces:
//! - States and the terminal sentinel
//! - Activities (guarded, directed edges)
//! - Conditions (named multi-parameter guards)
//! - Areas (named subgraphs) and the whole `GraphModel`
//!
//! Nothing in here mutates once built. Queries borrow the model and never
//! change it.

mod activity;
mod area;
mod condition;
mod error;
mod model;
mod state;

pub use activity::{Activity, ActivitySource};
pub use area::{Area, LookupMode};
pub use condition::Condition;
pub use error::WorkflowError;
pub use model::GraphModel;
pub use state::{Destination, State, TERMINAL_MARKER};

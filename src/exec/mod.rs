//! Delegate process execution

pub mod subprocess;

pub use subprocess::{DelegateCall, Pipeline};

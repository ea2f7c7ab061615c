//! State Management
//!
//! Global application state and the signal-backed dashboard view.

pub mod global;

pub use global::{provide_global_state, GlobalState, SignalView};

//! API Access
//!
//! The dashboard's only remote call: fetching the dataset.

pub mod client;

pub use client::{get_api_base, set_api_base, GlooSource};

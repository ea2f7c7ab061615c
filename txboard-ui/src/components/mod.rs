//! UI Components
//!
//! Leptos components for the dashboard page.

pub mod chart;
pub mod filters;
pub mod loading;
pub mod notices;
pub mod table;

pub use chart::Chart;
pub use filters::FilterBar;
pub use loading::Loading;
pub use notices::ErrorBanners;
pub use table::TransactionTable;

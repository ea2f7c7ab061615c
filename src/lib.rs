//! # txboard
//!
//! Customer transaction dashboard: load customer and transaction records from
//! a JSON endpoint, show them as a table, filter them by customer name and
//! maximum amount, and chart the summed amount per day.
//!
//! ## Modules
//!
//! - [`dataset`]: Customer/transaction records and the built-in fallback dataset
//! - [`loader`]: Fetching and validating a dataset, with fallback on failure
//! - [`filter`]: Name and amount filters over a loaded dataset
//! - [`view`]: Table rendering, daily-total charting and error notices
//! - [`dashboard`]: Controller tying the above to a front end
//!
//! The core has no UI dependency. Front ends implement the sinks in [`view`]:
//! the `txboard` binary writes to the terminal, `txboard-ui` to the browser.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use txboard::dashboard::Dashboard;
//! use txboard::loader::{HttpSource, HttpSourceConfig};
//! use txboard::view::BufferedView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpSource::new(HttpSourceConfig::default())?;
//!
//!     let mut dashboard = Dashboard::new(BufferedView::new());
//!     dashboard.start(&source).await;
//!
//!     // Every keystroke in a filter input ends up here
//!     let shown = dashboard.apply_filter("aya", "1000");
//!     println!("{} transactions shown", shown);
//!
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod loader;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod export;

// Re-export top-level types for convenience
pub use dashboard::{present, Dashboard};

pub use dataset::{fallback_dataset, Customer, CustomerIndex, Dataset, Transaction, UNKNOWN_CUSTOMER};

pub use filter::{filter, filter_transactions, FilterQuery};

pub use loader::{load, parse_dataset, try_load, DataSource, LoadError, LoadResult, DEFAULT_ENDPOINT};

#[cfg(feature = "native")]
pub use loader::{FileSource, HttpSource, HttpSourceConfig};

pub use view::{
    aggregate_by_date, draw_chart, render, show_error, BufferedView, ChartSink, ChartSpec,
    DailyTotals, DashboardView, NoticeBoard, NoticeSink, RowBuffer, TableRow, TableSink,
    FALLBACK_NOTICE,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, SourceConfig};

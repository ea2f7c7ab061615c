//! txboard Dashboard
//!
//! Customer transaction dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Transaction table joined to customer names
//! - Live filtering by customer name and maximum amount
//! - Daily totals area chart
//! - Built-in sample data when the endpoint is unavailable
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Filtering, aggregation and loading live in the `txboard`
//! core crate; this crate only implements its view sinks on top of signals.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Core load errors and progress go to the devtools console
    logging::init();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

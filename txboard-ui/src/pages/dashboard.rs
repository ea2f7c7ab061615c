//! Dashboard Page
//!
//! Error banners, filter inputs, the transaction table and the daily totals chart.

use leptos::*;

use crate::components::{Chart, ErrorBanners, FilterBar, Loading, TransactionTable};
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the dataset once on mount
    create_effect(move |_| {
        state.load();
    });

    view! {
        <div id="app" class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Customer Transactions"</h1>
                    <p class="text-gray-400 mt-1">"Filter by customer or amount; totals update as you type"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || {
                        // Re-read after each load; the count lives outside the signal graph
                        state.loaded_at.track();
                        format!("{} of {} transactions", state.shown(), state.total())
                    }}
                </div>
            </div>

            <ErrorBanners />

            <section class="bg-gray-800 rounded-xl p-6">
                <FilterBar />
            </section>

            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Transactions"</h2>
                    {move || {
                        if state.loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! { <TransactionTable /> }.into_view()
                        }
                    }}
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Daily Totals"</h2>
                    <Chart />
                </section>
            </div>
        </div>
    }
}

//! App Root Component
//!
//! Main application component with global providers.

use leptos::*;

use crate::api;
use crate::components::loading::InlineLoading;
use crate::pages::DashboardPage;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <DashboardPage />
            </main>

            <Footer />
        </div>
    }
}

/// Footer with data source, load time and a way to point at another endpoint
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (endpoint, set_endpoint) = create_signal(api::get_api_base());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        api::set_api_base(endpoint.get_untracked().trim());
        state.load();
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Endpoint
                <form on:submit=on_submit class="flex items-center space-x-2">
                    <label class="text-gray-400">"Source"</label>
                    <input
                        type="url"
                        prop:value=move || endpoint.get()
                        on:input=move |ev| set_endpoint.set(event_target_value(&ev))
                        class="w-80 bg-gray-700 rounded px-2 py-1 border border-gray-600
                               focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        disabled=move || state.loading.get()
                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded font-medium transition-colors"
                    >
                        "Reload"
                    </button>
                </form>

                // Last load time
                <div class="text-gray-400">
                    {move || {
                        state.loaded_at.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Loaded: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not loaded".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <InlineLoading />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

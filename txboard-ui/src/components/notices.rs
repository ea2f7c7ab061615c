//! Error Banner Component
//!
//! One banner per notice. Banners stack and stay until the page reloads.

use leptos::*;

use crate::state::GlobalState;

/// Error banner container
#[component]
pub fn ErrorBanners() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let notices = state.view.notices;

    view! {
        <div id="errors" class="space-y-2">
            {move || {
                notices.get()
                    .into_iter()
                    .map(|message| view! {
                        <div class="error-message flex items-center space-x-3">
                            <span class="text-lg">"✕"</span>
                            <span class="text-sm font-medium">{message}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

//! Filter Inputs Component
//!
//! Name and maximum-amount inputs. Every keystroke re-filters synchronously.

use leptos::*;

use crate::state::GlobalState;

/// Filter bar
#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_name = move |ev: web_sys::Event| {
        state.name_filter.set(event_target_value(&ev));
        state.refilter();
    };

    let on_amount = move |ev: web_sys::Event| {
        state.amount_filter.set(event_target_value(&ev));
        state.refilter();
    };

    view! {
        <div class="grid md:grid-cols-2 gap-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Customer name"</label>
                <input
                    id="filterName"
                    type="text"
                    placeholder="e.g., aya"
                    prop:value=move || state.name_filter.get()
                    on:input=on_name
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Maximum amount"</label>
                <input
                    id="filterAmount"
                    type="number"
                    placeholder="No limit"
                    prop:value=move || state.amount_filter.get()
                    on:input=on_amount
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>
        </div>
    }
}

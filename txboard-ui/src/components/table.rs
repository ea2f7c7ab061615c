//! Transaction Table Component
//!
//! Shows the rows the dashboard last rendered.

use leptos::*;

use crate::state::GlobalState;

/// Customer / amount / date table
#[component]
pub fn TransactionTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let rows = state.view.rows;

    view! {
        <div class="overflow-x-auto">
            <table id="customerTable" class="w-full text-left">
                <thead class="text-gray-400 text-sm border-b border-gray-700">
                    <tr>
                        <th class="py-2 pr-4 font-medium">"Customer Name"</th>
                        <th class="py-2 pr-4 font-medium">"Amount"</th>
                        <th class="py-2 font-medium">"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| view! {
                                <tr class="border-b border-gray-700 last:border-0">
                                    <td class="py-2 pr-4">{row.customer}</td>
                                    <td class="py-2 pr-4 tabular-nums">{row.amount}</td>
                                    <td class="py-2 text-gray-300">{row.date}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || {
                if rows.with(Vec::is_empty) && !state.loading.get() {
                    view! {
                        <p class="text-gray-400 text-sm py-4">"No transactions to show"</p>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

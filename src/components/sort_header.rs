//! Sortable Table Header

use leptos::prelude::*;

use blanq_core::query::{SortConfig, SortDirection};

/// Column header that toggles the table sort on click
#[component]
pub fn SortHeader<K>(
    #[prop(into)] label: String,
    key: K,
    sort: RwSignal<SortConfig<K>>,
) -> impl IntoView
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    let indicator = move || {
        let config = sort.get();
        if config.key != key {
            "↕"
        } else if config.direction == SortDirection::Asc {
            "▲"
        } else {
            "▼"
        }
    };

    view! {
        <th class="sortable" on:click=move |_| sort.update(|s| s.toggle(key))>
            {label}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
}

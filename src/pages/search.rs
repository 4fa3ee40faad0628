//! Global Search Page

use leptos::prelude::*;

use blanq_core::repository::Repository;
use blanq_core::search::{global_search, SearchHit, SearchScope};

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchPage() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    let hits = Memo::new(move |_| {
        let query = query.get();
        store.clients().with(|clients| {
            store.projects().with(|projects| {
                store.invoices().with(|invoices| {
                    store.templates().with(|templates| {
                        let scope = SearchScope {
                            clients: clients.list(),
                            projects: projects.list(),
                            invoices: invoices.list(),
                            templates: templates.list(),
                        };
                        global_search(scope, &query)
                    })
                })
            })
        })
    });

    view! {
        <div class="page search-page">
            <header class="page-header">
                <div>
                    <h1>"Global Search"</h1>
                    <p class="page-subtitle">"Search across clients, projects, invoices and templates"</p>
                </div>
            </header>

            <div class="filter-bar">
                <input
                    class="input search"
                    type="search"
                    placeholder="Type to search..."
                    autofocus=true
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || hits.with(Vec::is_empty) && !query.with(|q| q.trim().is_empty())>
                <p class="empty-state">"No results."</p>
            </Show>

            <ul class="search-results">
                {move || hits.get().into_iter().map(|hit: SearchHit| view! {
                    <li class="search-hit">
                        <a href=hit.route.path()>
                            <div>
                                <div class="strong">{hit.title}</div>
                                <div class="muted small">{hit.subtitle}</div>
                            </div>
                            <span class="badge">{hit.kind.label()}</span>
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

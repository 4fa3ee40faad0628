//! Client Management Page
//!
//! Client table with stats, filters, column sorting, row selection with bulk
//! actions, and an add/edit modal.

use leptos::prelude::*;

use blanq_core::domain::{Client, ClientStatus, RecordId, INDUSTRIES};
use blanq_core::query::{apply_filter, ClientFilter, ClientSortKey, RecordFilter, SortConfig};
use blanq_core::repository::Repository;
use blanq_core::stats::ClientStats;
use blanq_core::validation::{validate_client, FieldErrors};

use crate::components::{
    plain_options, DeleteConfirmButton, Modal, SelectField, SortHeader, StatCard, TextAreaField, TextField,
};
use crate::download::download_csv;
use crate::pages::{draft_set, draft_text, status_class};
use crate::store::{
    store_remove_clients, store_save_client, store_update_clients, use_app_store, AppStateStoreFields,
};

fn status_options() -> Vec<(String, String)> {
    plain_options(ClientStatus::ALL.iter().map(|s| s.as_str()))
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let store = use_app_store();

    let filter = RwSignal::new(ClientFilter::default());
    let sort = RwSignal::new(SortConfig::new(ClientSortKey::CompanyName));
    let selected = RwSignal::new(Vec::<RecordId>::new());
    let bulk_status = RwSignal::new(String::new());
    let draft = RwSignal::new(None::<Client>);
    let viewing = RwSignal::new(None::<Client>);
    let errors = RwSignal::new(FieldErrors::new());

    let rows = Memo::new(move |_| {
        let mut rows = store.clients().with(|repo| apply_filter(repo.list(), &filter.get()));
        sort.get().sort(&mut rows);
        rows
    });
    let stats = Memo::new(move |_| store.clients().with(|repo| ClientStats::from_clients(repo.list())));

    let all_selected = move || {
        rows.with(|rows| !rows.is_empty() && rows.iter().all(|c| selected.with(|s| s.contains(&c.id))))
    };
    let toggle_all = move |_| {
        if all_selected() {
            selected.set(Vec::new());
        } else {
            selected.set(rows.with(|rows| rows.iter().map(|c| c.id).collect()));
        }
    };

    let open_new = move |_| {
        errors.set(FieldErrors::new());
        draft.set(Some(Client::default()));
    };
    let save = move |_| {
        let Some(client) = draft.get_untracked() else {
            return;
        };
        if let Err(e) = validate_client(&client) {
            errors.set(e);
            return;
        }
        if store_save_client(&store, client).is_ok() {
            draft.set(None);
        }
    };

    let export = move |_| {
        let ids = selected.get_untracked();
        rows.with_untracked(|rows| {
            if ids.is_empty() {
                download_csv("clients", rows.iter());
            } else {
                download_csv("clients", rows.iter().filter(|c| ids.contains(&c.id)));
            }
        });
    };
    let apply_bulk_status = move |_| {
        let Some(status) = ClientStatus::from_str(&bulk_status.get_untracked()) else {
            return;
        };
        store_update_clients(&store, &selected.get_untracked(), |c| c.status = status);
        selected.set(Vec::new());
        bulk_status.set(String::new());
    };
    let bulk_delete = move |_: ()| {
        store_remove_clients(&store, &selected.get_untracked());
        selected.set(Vec::new());
    };

    view! {
        <div class="page clients-page">
            <header class="page-header">
                <div>
                    <h1>"Client Management"</h1>
                    <p class="page-subtitle">"Manage client relationships and contact details"</p>
                </div>
                <div class="page-actions">
                    <button class="btn secondary" on:click=export>"Export CSV"</button>
                    <button class="btn primary" on:click=open_new>"+ Add Client"</button>
                </div>
            </header>

            <div class="stat-grid">
                <StatCard title="Total Clients" value=Signal::derive(move || stats.get().total.to_string()) icon="👥" />
                <StatCard title="Active" value=Signal::derive(move || stats.get().active.to_string()) tone="success" />
                <StatCard title="Pending" value=Signal::derive(move || stats.get().pending.to_string()) tone="warning" />
                <StatCard title="On Hold" value=Signal::derive(move || stats.get().on_hold.to_string()) tone="error" />
                <StatCard title="Inactive" value=Signal::derive(move || stats.get().inactive.to_string()) tone="muted" />
            </div>

            <div class="filter-bar">
                <input
                    class="input search"
                    type="search"
                    placeholder="Search company, contact or email..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.industry.clone())
                    on:change=move |ev| filter.update(|f| f.industry = event_target_value(&ev))
                >
                    <option value="">"All industries"</option>
                    {INDUSTRIES.iter().map(|i| view! { <option value=*i>{*i}</option> }).collect_view()}
                </select>
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.status.map(|s| s.as_str().to_string()).unwrap_or_default())
                    on:change=move |ev| filter.update(|f| f.status = ClientStatus::from_str(&event_target_value(&ev)))
                >
                    <option value="">"All statuses"</option>
                    {ClientStatus::ALL.iter().map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> }).collect_view()}
                </select>
                <Show when=move || filter.with(|f| f.is_active())>
                    <button class="btn link" on:click=move |_| filter.update(|f| f.clear())>"Clear filters"</button>
                </Show>
            </div>

            <Show when=move || selected.with(|s| !s.is_empty())>
                <div class="bulk-bar">
                    <span>{move || format!("{} selected", selected.with(|s| s.len()))}</span>
                    <select
                        class="input"
                        prop:value=move || bulk_status.get()
                        on:change=move |ev| bulk_status.set(event_target_value(&ev))
                    >
                        <option value="">"Change status..."</option>
                        {status_options().into_iter().map(|(v, l)| view! { <option value=v>{l}</option> }).collect_view()}
                    </select>
                    <button class="btn secondary" on:click=apply_bulk_status>"Apply"</button>
                    <button class="btn secondary" on:click=export>"Export selected"</button>
                    <DeleteConfirmButton button_class="btn danger" label="Delete selected" on_confirm=bulk_delete
                        prompt=Signal::derive(move || format!("Delete {} clients?", selected.with(Vec::len))) />
                    <button class="btn link" on:click=move |_| selected.set(Vec::new())>"Clear selection"</button>
                </div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th><input type="checkbox" prop:checked=all_selected on:change=toggle_all /></th>
                        <SortHeader label="Company" key=ClientSortKey::CompanyName sort=sort />
                        <SortHeader label="Contact" key=ClientSortKey::ContactPerson sort=sort />
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <SortHeader label="Industry" key=ClientSortKey::Industry sort=sort />
                        <SortHeader label="Status" key=ClientSortKey::Status sort=sort />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|c| (c.id, c.updated_at.clone(), c.status)
                        children=move |client| {
                            let id = client.id;
                            let for_edit = client.clone();
                            let for_view = client.clone();
                            let is_selected = move || selected.with(|s| s.contains(&id));
                            view! {
                                <tr class=move || if is_selected() { "selected" } else { "" }>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=is_selected
                                            on:change=move |_| selected.update(|s| {
                                                if let Some(pos) = s.iter().position(|x| *x == id) {
                                                    s.remove(pos);
                                                } else {
                                                    s.push(id);
                                                }
                                            })
                                        />
                                    </td>
                                    <td class="strong">{client.company_name.clone()}</td>
                                    <td>{client.contact_person.clone()}</td>
                                    <td><a href=format!("mailto:{}", client.email)>{client.email.clone()}</a></td>
                                    <td>{client.phone.clone()}</td>
                                    <td>{client.industry.clone()}</td>
                                    <td><span class=status_class(client.status.as_str())>{client.status.as_str()}</span></td>
                                    <td class="row-actions">
                                        <button class="icon-btn" title="View" on:click=move |_| viewing.set(Some(for_view.clone()))>"👁"</button>
                                        <button class="icon-btn" title="Edit" on:click=move |_| {
                                            errors.set(FieldErrors::new());
                                            draft.set(Some(for_edit.clone()));
                                        }>"✎"</button>
                                        <DeleteConfirmButton
                                            button_class="icon-btn"
                                            on_confirm=move |_: ()| {
                                                store_remove_clients(&store, &[id]);
                                                selected.update(|s| s.retain(|x| *x != id));
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || rows.with(|r| r.is_empty())>
                <p class="empty-state">"No clients match the current filters."</p>
            </Show>

            <Show when=move || draft.with(|d| d.is_some())>
                <Modal
                    title=Signal::derive(move || {
                        if draft.with(|d| d.as_ref().is_some_and(|c| c.id != 0)) { "Edit Client".to_string() } else { "Add New Client".to_string() }
                    })
                    on_close=move |_: ()| draft.set(None)
                >
                    <div class="form-grid">
                        <TextField label="Company Name" field="company_name" required=true errors=errors
                            value=draft_text(draft, |c: &Client| c.company_name.as_str())
                            on_input=draft_set(draft, |c: &mut Client, v| c.company_name = v) />
                        <TextField label="Contact Person" field="contact_person" required=true errors=errors
                            value=draft_text(draft, |c: &Client| c.contact_person.as_str())
                            on_input=draft_set(draft, |c: &mut Client, v| c.contact_person = v) />
                        <TextField label="Email" field="email" input_type="email" required=true errors=errors
                            value=draft_text(draft, |c: &Client| c.email.as_str())
                            on_input=draft_set(draft, |c: &mut Client, v| c.email = v) />
                        <TextField label="Phone" field="phone" input_type="tel" required=true errors=errors
                            placeholder="+1 (514) 555-0123"
                            value=draft_text(draft, |c: &Client| c.phone.as_str())
                            on_input=draft_set(draft, |c: &mut Client, v| c.phone = v) />
                        <TextField label="Website" field="website" input_type="url" errors=errors
                            value=draft_text(draft, |c: &Client| c.website.as_str())
                            on_input=draft_set(draft, |c: &mut Client, v| c.website = v) />
                        <SelectField label="Industry" field="industry" required=true errors=errors
                            options=plain_options(INDUSTRIES)
                            placeholder="Select industry"
                            value=draft_text(draft, |c: &Client| c.industry.as_str())
                            on_change=draft_set(draft, |c: &mut Client, v| c.industry = v) />
                        <SelectField label="Status" field="status" errors=errors
                            options=status_options()
                            value=draft_text(draft, |c: &Client| c.status.as_str())
                            on_change=draft_set(draft, |c: &mut Client, v| {
                                if let Some(status) = ClientStatus::from_str(&v) {
                                    c.status = status;
                                }
                            }) />
                        <TextField label="Tax ID" field="tax_id" errors=errors
                            value=draft_text(draft, |c: &Client| c.tax_id.as_str())
                            on_input=draft_set(draft, |c: &mut Client, v| c.tax_id = v) />
                        <TextAreaField label="Address" field="address" errors=errors
                            value=draft_text(draft, |c: &Client| c.address.as_str())
                            on_input=draft_set(draft, |c: &mut Client, v| c.address = v) />
                        <TextAreaField label="Notes" field="notes" errors=errors
                            value=draft_text(draft, |c: &Client| c.notes.as_str())
                            on_input=draft_set(draft, |c: &mut Client, v| c.notes = v) />
                    </div>
                    <div class="modal-actions">
                        <button class="btn secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                        <button class="btn primary" on:click=save>"Save Client"</button>
                    </div>
                </Modal>
            </Show>

            {move || viewing.get().map(|client| view! {
                <Modal title=Signal::derive(move || "Client Details".to_string()) on_close=move |_: ()| viewing.set(None)>
                    <dl class="detail-list">
                        <dt>"Company"</dt><dd>{client.company_name.clone()}</dd>
                        <dt>"Contact"</dt><dd>{client.contact_person.clone()}</dd>
                        <dt>"Email"</dt><dd>{client.email.clone()}</dd>
                        <dt>"Phone"</dt><dd>{client.phone.clone()}</dd>
                        <dt>"Website"</dt><dd>{client.website.clone()}</dd>
                        <dt>"Industry"</dt><dd>{client.industry.clone()}</dd>
                        <dt>"Status"</dt><dd>{client.status.as_str()}</dd>
                        <dt>"Address"</dt><dd>{client.address.clone()}</dd>
                        <dt>"Tax ID"</dt><dd>{client.tax_id.clone()}</dd>
                        <dt>"Notes"</dt><dd>{client.notes.clone()}</dd>
                    </dl>
                </Modal>
            })}
        </div>
    }
}

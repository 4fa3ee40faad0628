//! Finance Page
//!
//! Invoices and receipts in two tabs. Everyone can browse and export;
//! only admins create, edit, delete or mark invoices paid.

use leptos::prelude::*;

use blanq_core::domain::{format_cad, Invoice, InvoiceStatus, Receipt};
use blanq_core::query::{
    apply_filter, distinct_values, InvoiceFilter, InvoiceSortKey, ReceiptFilter, RecordFilter, SortConfig,
};
use blanq_core::repository::Repository;
use blanq_core::validation::{parse_amount, validate_invoice, validate_receipt, FieldErrors};

use crate::components::{
    plain_options, ActionAlert, DeleteConfirmButton, Modal, SelectField, SortHeader, TextAreaField, TextField,
};
use crate::context::AppContext;
use crate::download::download_csv;
use crate::pages::{draft_set, draft_text, failure_notice, status_class};
use crate::store::{
    store_mark_invoice_paid, store_remove_invoice, store_remove_receipt, store_save_invoice, store_save_receipt,
    use_app_store, AppStateStoreFields,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Invoices,
    Receipts,
}

/// Amount input text for an existing record, blank for a new one
fn amount_text(id: u64, amount: f64) -> String {
    if id == 0 {
        String::new()
    } else {
        amount.to_string()
    }
}

#[component]
pub fn FinancePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (tab, set_tab) = signal(Tab::Invoices);

    view! {
        <div class="page finance-page">
            <header class="page-header">
                <div>
                    <h1>"Finance"</h1>
                    <p class="page-subtitle">"Invoices and receipts in CAD"</p>
                </div>
                <Show when=move || !ctx.can_manage()>
                    <span class="badge muted">"Read only"</span>
                </Show>
            </header>

            <nav class="tabs">
                <button
                    class=move || if tab.get() == Tab::Invoices { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set(Tab::Invoices)
                >"Invoices"</button>
                <button
                    class=move || if tab.get() == Tab::Receipts { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set(Tab::Receipts)
                >"Receipts"</button>
            </nav>

            {move || match tab.get() {
                Tab::Invoices => view! { <InvoicesTab /> }.into_any(),
                Tab::Receipts => view! { <ReceiptsTab /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn InvoicesTab() -> impl IntoView {
    let store = use_app_store();
    let notice = RwSignal::new(None::<String>);
    let ctx = expect_context::<AppContext>();

    let filter = RwSignal::new(InvoiceFilter::default());
    let sort = RwSignal::new(SortConfig::new(InvoiceSortKey::DueDate));
    let draft = RwSignal::new(None::<Invoice>);
    let amount = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let rows = Memo::new(move |_| {
        let mut rows = store.invoices().with(|repo| apply_filter(repo.list(), &filter.get()));
        sort.get().sort(&mut rows);
        rows
    });
    let outstanding = move || {
        rows.with(|rows| rows.iter().filter(|i| i.is_outstanding()).map(|i| i.amount).sum::<f64>())
    };
    let client_choices = move || store.invoices().with(|repo| distinct_values(repo.list(), |i| i.client.as_str()));

    let open_form = move |invoice: Invoice| {
        errors.set(FieldErrors::new());
        amount.set(amount_text(invoice.id, invoice.amount));
        draft.set(Some(invoice));
    };
    let save = move |_| {
        let Some(mut invoice) = draft.get_untracked() else {
            return;
        };
        let amount_input = amount.get_untracked();
        if let Err(e) = validate_invoice(&invoice, &amount_input) {
            errors.set(e);
            return;
        }
        invoice.amount = parse_amount(&amount_input).unwrap_or_default();
        if store_save_invoice(&store, invoice).is_ok() {
            draft.set(None);
        }
    };

    view! {
        <ActionAlert message=notice />
        <div class="filter-bar">
            <input
                class="input search"
                type="search"
                placeholder="Search invoice #, client or project..."
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
            />
            <select
                class="input"
                prop:value=move || filter.with(|f| f.status.map(|s| s.as_str().to_string()).unwrap_or_default())
                on:change=move |ev| filter.update(|f| f.status = InvoiceStatus::from_str(&event_target_value(&ev)))
            >
                <option value="">"All statuses"</option>
                {InvoiceStatus::ALL.iter().map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> }).collect_view()}
            </select>
            <select
                class="input"
                prop:value=move || filter.with(|f| f.client.clone())
                on:change=move |ev| filter.update(|f| f.client = event_target_value(&ev))
            >
                <option value="">"All clients"</option>
                {move || client_choices().into_iter().map(|c| {
                    let label = c.clone();
                    view! { <option value=c>{label}</option> }
                }).collect_view()}
            </select>
            <Show when=move || filter.with(|f| f.is_active())>
                <button class="btn link" on:click=move |_| filter.update(|f| f.clear())>"Clear filters"</button>
            </Show>
            <div class="spacer"></div>
            <span class="muted">{move || format!("Outstanding: {}", format_cad(outstanding()))}</span>
            <button class="btn secondary" on:click=move |_| rows.with_untracked(|rows| download_csv("invoices", rows.iter()))>
                "Export CSV"
            </button>
            <Show when=move || ctx.can_manage()>
                <button class="btn primary" on:click=move |_| open_form(Invoice::default())>"+ New Invoice"</button>
            </Show>
        </div>

        <table class="data-table">
            <thead>
                <tr>
                    <SortHeader label="Invoice #" key=InvoiceSortKey::InvoiceNumber sort=sort />
                    <SortHeader label="Client" key=InvoiceSortKey::Client sort=sort />
                    <th>"Project"</th>
                    <SortHeader label="Date" key=InvoiceSortKey::Date sort=sort />
                    <SortHeader label="Due" key=InvoiceSortKey::DueDate sort=sort />
                    <SortHeader label="Amount" key=InvoiceSortKey::Amount sort=sort />
                    <SortHeader label="Status" key=InvoiceSortKey::Status sort=sort />
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|i| (i.id, i.status, i.invoice_number.clone(), i.amount.to_bits(), i.due_date.clone())
                    children=move |invoice| {
                        let id = invoice.id;
                        let for_edit = invoice.clone();
                        let unpaid = invoice.is_outstanding();
                        view! {
                            <tr>
                                <td class="strong">{format!("#{}", invoice.invoice_number)}</td>
                                <td>{invoice.client.clone()}</td>
                                <td>{invoice.project.clone()}</td>
                                <td>{invoice.date.clone()}</td>
                                <td>{invoice.due_date.clone()}</td>
                                <td class="amount">{format_cad(invoice.amount)}</td>
                                <td><span class=status_class(invoice.status.as_str())>{invoice.status.as_str()}</span></td>
                                <td class="row-actions">
                                    <Show when=move || ctx.can_manage() && unpaid>
                                        <button class="btn small" on:click=move |_| store_mark_invoice_paid(&store, id)>"Mark paid"</button>
                                    </Show>
                                    <Show when=move || ctx.can_manage()>
                                        <button class="icon-btn" title="Edit" on:click={
                                            let for_edit = for_edit.clone();
                                            move |_| open_form(for_edit.clone())
                                        }>"✎"</button>
                                        <DeleteConfirmButton
                                            button_class="icon-btn"
                                            on_confirm=move |_: ()| {
                                                if let Err(e) = store_remove_invoice(&store, id) {
                                                    notice.set(Some(failure_notice("delete invoice", &e)));
                                                }
                                            }
                                        />
                                    </Show>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <Show when=move || rows.with(|r| r.is_empty())>
            <p class="empty-state">"No invoices found."</p>
        </Show>

        <Show when=move || draft.with(|d| d.is_some())>
            <Modal
                title=Signal::derive(move || {
                    if draft.with(|d| d.as_ref().is_some_and(|i| i.id != 0)) { "Edit Invoice".to_string() } else { "New Invoice".to_string() }
                })
                on_close=move |_: ()| draft.set(None)
            >
                <div class="form-grid">
                    <TextField label="Invoice Number" field="invoice_number" required=true errors=errors
                        placeholder="INV-2024-004"
                        value=draft_text(draft, |i: &Invoice| i.invoice_number.as_str())
                        on_input=draft_set(draft, |i: &mut Invoice, v| i.invoice_number = v) />
                    <TextField label="Client" field="client" required=true errors=errors
                        value=draft_text(draft, |i: &Invoice| i.client.as_str())
                        on_input=draft_set(draft, |i: &mut Invoice, v| i.client = v) />
                    <TextField label="Project" field="project" errors=errors
                        value=draft_text(draft, |i: &Invoice| i.project.as_str())
                        on_input=draft_set(draft, |i: &mut Invoice, v| i.project = v) />
                    <TextField label="Date" field="date" input_type="date" required=true errors=errors
                        value=draft_text(draft, |i: &Invoice| i.date.as_str())
                        on_input=draft_set(draft, |i: &mut Invoice, v| i.date = v) />
                    <TextField label="Due Date" field="due_date" input_type="date" errors=errors
                        value=draft_text(draft, |i: &Invoice| i.due_date.as_str())
                        on_input=draft_set(draft, |i: &mut Invoice, v| i.due_date = v) />
                    <TextField label="Amount (CAD)" field="amount" input_type="number" required=true errors=errors
                        value=amount
                        on_input=move |v: String| amount.set(v) />
                    <SelectField label="Status" field="status" errors=errors
                        options=plain_options(InvoiceStatus::ALL.iter().map(|s| s.as_str()))
                        value=draft_text(draft, |i: &Invoice| i.status.as_str())
                        on_change=draft_set(draft, |i: &mut Invoice, v| {
                            if let Some(status) = InvoiceStatus::from_str(&v) {
                                i.status = status;
                            }
                        }) />
                </div>
                <div class="modal-actions">
                    <button class="btn secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                    <button class="btn primary" on:click=save>"Save Invoice"</button>
                </div>
            </Modal>
        </Show>
    }
}

#[component]
fn ReceiptsTab() -> impl IntoView {
    let store = use_app_store();
    let notice = RwSignal::new(None::<String>);
    let ctx = expect_context::<AppContext>();

    let filter = RwSignal::new(ReceiptFilter::default());
    let draft = RwSignal::new(None::<Receipt>);
    let amount = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let rows = Memo::new(move |_| store.receipts().with(|repo| apply_filter(repo.list(), &filter.get())));
    let total = move || rows.with(|rows| rows.iter().map(|r| r.amount).sum::<f64>());
    let vendor_choices = move || store.receipts().with(|repo| distinct_values(repo.list(), |r| r.vendor.as_str()));

    let open_form = move |receipt: Receipt| {
        errors.set(FieldErrors::new());
        amount.set(amount_text(receipt.id, receipt.amount));
        draft.set(Some(receipt));
    };
    let save = move |_| {
        let Some(mut receipt) = draft.get_untracked() else {
            return;
        };
        let amount_input = amount.get_untracked();
        if let Err(e) = validate_receipt(&receipt, &amount_input) {
            errors.set(e);
            return;
        }
        receipt.amount = parse_amount(&amount_input).unwrap_or_default();
        if store_save_receipt(&store, receipt).is_ok() {
            draft.set(None);
        }
    };

    view! {
        <ActionAlert message=notice />
        <div class="filter-bar">
            <input
                class="input search"
                type="search"
                placeholder="Search receipts or vendors..."
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
            />
            <select
                class="input"
                prop:value=move || filter.with(|f| f.vendor.clone())
                on:change=move |ev| filter.update(|f| f.vendor = event_target_value(&ev))
            >
                <option value="">"All vendors"</option>
                {move || vendor_choices().into_iter().map(|v| {
                    let label = v.clone();
                    view! { <option value=v>{label}</option> }
                }).collect_view()}
            </select>
            <Show when=move || filter.with(|f| f.is_active())>
                <button class="btn link" on:click=move |_| filter.update(|f| f.clear())>"Clear filters"</button>
            </Show>
            <div class="spacer"></div>
            <span class="muted">{move || format!("Total: {}", format_cad(total()))}</span>
            <button class="btn secondary" on:click=move |_| rows.with_untracked(|rows| download_csv("receipts", rows.iter()))>
                "Export CSV"
            </button>
            <Show when=move || ctx.can_manage()>
                <button class="btn primary" on:click=move |_| open_form(Receipt::default())>"+ New Receipt"</button>
            </Show>
        </div>

        <table class="data-table">
            <thead>
                <tr>
                    <th>"Receipt"</th>
                    <th>"Vendor"</th>
                    <th>"Amount"</th>
                    <th>"Date"</th>
                    <th>"Notes"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|r| (r.id, r.name.clone(), r.amount.to_bits(), r.date.clone(), r.notes.clone())
                    children=move |receipt| {
                        let id = receipt.id;
                        let for_edit = receipt.clone();
                        view! {
                            <tr>
                                <td class="strong">{receipt.name.clone()}</td>
                                <td>{receipt.vendor.clone()}</td>
                                <td class="amount">{format_cad(receipt.amount)}</td>
                                <td>{receipt.date.clone()}</td>
                                <td class="muted">{receipt.notes.clone()}</td>
                                <td class="row-actions">
                                    <Show when=move || ctx.can_manage()>
                                        <button class="icon-btn" title="Edit" on:click={
                                            let for_edit = for_edit.clone();
                                            move |_| open_form(for_edit.clone())
                                        }>"✎"</button>
                                        <DeleteConfirmButton
                                            button_class="icon-btn"
                                            on_confirm=move |_: ()| {
                                                if let Err(e) = store_remove_receipt(&store, id) {
                                                    notice.set(Some(failure_notice("delete receipt", &e)));
                                                }
                                            }
                                        />
                                    </Show>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <Show when=move || rows.with(|r| r.is_empty())>
            <p class="empty-state">"No receipts found."</p>
        </Show>

        <Show when=move || draft.with(|d| d.is_some())>
            <Modal
                title=Signal::derive(move || {
                    if draft.with(|d| d.as_ref().is_some_and(|r| r.id != 0)) { "Edit Receipt".to_string() } else { "New Receipt".to_string() }
                })
                on_close=move |_: ()| draft.set(None)
            >
                <div class="form-grid">
                    <TextField label="Receipt Name" field="name" required=true errors=errors
                        value=draft_text(draft, |r: &Receipt| r.name.as_str())
                        on_input=draft_set(draft, |r: &mut Receipt, v| r.name = v) />
                    <TextField label="Vendor" field="vendor" required=true errors=errors
                        value=draft_text(draft, |r: &Receipt| r.vendor.as_str())
                        on_input=draft_set(draft, |r: &mut Receipt, v| r.vendor = v) />
                    <TextField label="Amount (CAD)" field="amount" input_type="number" required=true errors=errors
                        value=amount
                        on_input=move |v: String| amount.set(v) />
                    <TextField label="Date" field="date" input_type="date" required=true errors=errors
                        value=draft_text(draft, |r: &Receipt| r.date.as_str())
                        on_input=draft_set(draft, |r: &mut Receipt, v| r.date = v) />
                    <TextAreaField label="Notes" field="notes" errors=errors
                        value=draft_text(draft, |r: &Receipt| r.notes.as_str())
                        on_input=draft_set(draft, |r: &mut Receipt, v| r.notes = v) />
                </div>
                <div class="modal-actions">
                    <button class="btn secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                    <button class="btn primary" on:click=save>"Save Receipt"</button>
                </div>
            </Modal>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(0, 0.0), "");
        assert_eq!(amount_text(7, 5500.0), "5500");
        assert_eq!(amount_text(7, 24.5), "24.5");
    }
}

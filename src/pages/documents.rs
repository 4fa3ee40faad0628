//! Legal & Quebec Documents Page
//!
//! Document library with compliance tracking: filters, upload form,
//! preview, and an overview of expiring and expired registrations.

use leptos::prelude::*;

use blanq_core::domain::{
    file_extension, parse_tags, ComplianceStatus, Document, DocumentType, RecordId, ALLOWED_EXTENSIONS,
    DOCUMENT_CATEGORIES,
};
use blanq_core::query::{apply_filter, DocumentFilter, RecordFilter};
use blanq_core::repository::Repository;
use blanq_core::stats::ComplianceOverview;
use blanq_core::validation::{validate_document, FieldErrors};

use crate::components::{
    plain_options, ActionAlert, DeleteConfirmButton, FieldError, Modal, SelectField, StatCard, TextAreaField, TextField,
};
use crate::pages::{draft_set, draft_text, failure_notice, iso_date, status_class, today};
use crate::store::{store_add_document, store_remove_document, use_app_store, AppStateStoreFields};

const UPLOADER: &str = "Admin User";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Documents,
    Compliance,
}

fn type_options() -> Vec<(String, String)> {
    DocumentType::ALL
        .iter()
        .map(|t| {
            let label = t.as_str();
            let mut chars = label.chars();
            let title = chars.next().map(|c| c.to_uppercase().chain(chars).collect()).unwrap_or_default();
            (label.to_string(), title)
        })
        .collect()
}

/// File name without its extension, used as the default document name
fn file_stem(file_name: &str) -> &str {
    file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem)
}

/// `accept` value for the upload input, e.g. ".pdf,.doc"
fn accept_attribute() -> String {
    ALLOWED_EXTENSIONS.iter().map(|e| format!(".{}", e)).collect::<Vec<_>>().join(",")
}

fn expiry_label(document: &Document) -> Option<String> {
    let days = document.days_until_expiry(today())?;
    Some(match days {
        d if d < 0 => format!("Expired {} days ago", -d),
        0 => "Expires today".to_string(),
        d => format!("Expires in {} days", d),
    })
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let store = use_app_store();
    let notice = RwSignal::new(None::<String>);

    let (tab, set_tab) = signal(Tab::Documents);
    let filter = RwSignal::new(DocumentFilter::default());
    let draft = RwSignal::new(None::<Document>);
    let tags_text = RwSignal::new(String::new());
    let file = RwSignal::new(None::<(String, u64)>);
    let errors = RwSignal::new(FieldErrors::new());
    let preview = RwSignal::new(None::<RecordId>);

    let rows = Memo::new(move |_| store.documents().with(|repo| apply_filter(repo.list(), &filter.get())));
    let overview = Memo::new(move |_| store.documents().with(|repo| ComplianceOverview::compute(repo.list())));

    let open_upload = move |_| {
        errors.set(FieldErrors::new());
        tags_text.set(String::new());
        file.set(None);
        draft.set(Some(Document::default()));
    };
    let show_status = move |status: ComplianceStatus| {
        filter.set(DocumentFilter { status: Some(status), ..Default::default() });
        set_tab.set(Tab::Documents);
    };
    let upload = move |_| {
        let Some(mut document) = draft.get_untracked() else {
            return;
        };
        let picked = file.get_untracked();
        if let Err(e) = validate_document(&document, picked.as_ref().map(|(name, _)| name.as_str())) {
            errors.set(e);
            return;
        }
        if let Some((name, size)) = picked {
            document.file_name = name;
            document.file_size = size;
        }
        document.tags = parse_tags(&tags_text.get_untracked());
        document.upload_date = iso_date(today());
        document.uploaded_by = UPLOADER.to_string();
        document.compliance_status = ComplianceStatus::Compliant;
        if store_add_document(&store, document).is_ok() {
            draft.set(None);
        }
    };

    let preview_document = move || preview.get().and_then(|id| store.documents().with(|repo| repo.find_by_id(id).cloned()));

    view! {
        <div class="page documents-page">
            <header class="page-header">
                <div>
                    <h1>"Legal & Quebec Documents"</h1>
                    <p class="page-subtitle">"Registrations, tax filings and compliance records"</p>
                </div>
                <div class="page-actions">
                    <button class="btn primary" on:click=open_upload>"⇪ Upload Document"</button>
                </div>
            </header>
            <ActionAlert message=notice />

            <nav class="tabs">
                <button
                    class=move || if tab.get() == Tab::Documents { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set(Tab::Documents)
                >"Documents"</button>
                <button
                    class=move || if tab.get() == Tab::Compliance { "tab active" } else { "tab" }
                    on:click=move |_| set_tab.set(Tab::Compliance)
                >"Compliance Overview"</button>
            </nav>

            <Show when=move || tab.get() == Tab::Compliance>
                <div class="stat-grid">
                    <StatCard title="Total Documents" value=Signal::derive(move || overview.with(|o| o.total.to_string())) />
                    <StatCard title="Compliant" value=Signal::derive(move || overview.with(|o| o.compliant.to_string())) tone="success" />
                    <StatCard title="Expiring Soon" value=Signal::derive(move || overview.with(|o| o.expiring.to_string())) tone="warning" />
                    <StatCard title="Expired" value=Signal::derive(move || overview.with(|o| o.expired.to_string())) tone="error" />
                    <StatCard title="Compliance Rate" value=Signal::derive(move || overview.with(|o| format!("{}%", o.compliance_rate))) />
                </div>
                <div class="quick-actions">
                    <button class="btn secondary" on:click=move |_| show_status(ComplianceStatus::Expiring)>"View expiring"</button>
                    <button class="btn secondary" on:click=move |_| show_status(ComplianceStatus::Expired)>"View expired"</button>
                </div>
                <section class="card">
                    <h3>"Upcoming Renewals"</h3>
                    <ul class="renewal-list">
                        {move || overview.with(|o| o.upcoming_renewals.clone()).into_iter().map(|doc| view! {
                            <li>
                                <span class="strong">{doc.name.clone()}</span>
                                <span class="muted">{doc.expiry_date.clone().unwrap_or_default()}</span>
                                <span class="muted">{expiry_label(&doc)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <Show when=move || overview.with(|o| o.upcoming_renewals.is_empty())>
                        <p class="empty-state">"No renewals scheduled."</p>
                    </Show>
                </section>
            </Show>

            <Show when=move || tab.get() == Tab::Documents>
                <div class="filter-bar">
                    <input
                        class="input search"
                        type="search"
                        placeholder="Search name, description or tags..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                    />
                    <select
                        class="input"
                        prop:value=move || filter.with(|f| f.category.clone())
                        on:change=move |ev| filter.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="">"All categories"</option>
                        {DOCUMENT_CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                    </select>
                    <select
                        class="input"
                        prop:value=move || filter.with(|f| f.doc_type.map(|t| t.as_str().to_string()).unwrap_or_default())
                        on:change=move |ev| filter.update(|f| f.doc_type = DocumentType::from_str(&event_target_value(&ev)))
                    >
                        <option value="">"All types"</option>
                        {type_options().into_iter().map(|(v, l)| view! { <option value=v>{l}</option> }).collect_view()}
                    </select>
                    <select
                        class="input"
                        prop:value=move || filter.with(|f| f.status.map(|s| s.as_str().to_string()).unwrap_or_default())
                        on:change=move |ev| filter.update(|f| f.status = ComplianceStatus::from_str(&event_target_value(&ev)))
                    >
                        <option value="">"All statuses"</option>
                        {ComplianceStatus::ALL.iter().map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> }).collect_view()}
                    </select>
                    <label class="inline-field">
                        "Uploaded from"
                        <input
                            class="input"
                            type="date"
                            prop:value=move || filter.with(|f| f.uploaded_from.clone())
                            on:input=move |ev| filter.update(|f| f.uploaded_from = event_target_value(&ev))
                        />
                    </label>
                    <label class="inline-field">
                        "to"
                        <input
                            class="input"
                            type="date"
                            prop:value=move || filter.with(|f| f.uploaded_until.clone())
                            on:input=move |ev| filter.update(|f| f.uploaded_until = event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || filter.with(|f| f.is_active())>
                        <button class="btn link" on:click=move |_| filter.update(|f| f.clear())>"Clear filters"</button>
                    </Show>
                </div>

                <div class="card-grid">
                    <For
                        each=move || rows.get()
                        key=|d| (d.id, d.compliance_status, d.name.clone())
                        children=move |doc| {
                            let id = doc.id;
                            view! {
                                <article class="document-card">
                                    <header>
                                        <span class="file-icon">{file_extension(&doc.file_name).unwrap_or_default().to_uppercase()}</span>
                                        <span class=status_class(doc.compliance_status.as_str())>{doc.compliance_status.as_str()}</span>
                                        {doc.is_confidential.then(|| view! { <span class="badge confidential">"Confidential"</span> })}
                                    </header>
                                    <h4>{doc.name.clone()}</h4>
                                    <p class="muted">{doc.category.clone()} " · " {doc.size_label()}</p>
                                    <p class="description">{doc.description.clone()}</p>
                                    {expiry_label(&doc).map(|label| view! { <p class="expiry">{label}</p> })}
                                    <div class="task-tags">
                                        {doc.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                                    </div>
                                    <footer class="row-actions">
                                        <button class="btn small" on:click=move |_| preview.set(Some(id))>"Preview"</button>
                                        <DeleteConfirmButton
                                            button_class="icon-btn"
                                            on_confirm=move |_: ()| {
                                                if let Err(e) = store_remove_document(&store, id) {
                                                    notice.set(Some(failure_notice("delete document", &e)));
                                                }
                                            }
                                        />
                                    </footer>
                                </article>
                            }
                        }
                    />
                </div>
                <Show when=move || rows.with(|r| r.is_empty())>
                    <p class="empty-state">"No documents match the current filters."</p>
                </Show>
            </Show>

            <Show when=move || draft.with(|d| d.is_some())>
                <Modal title=Signal::derive(move || "Upload Document".to_string()) on_close=move |_: ()| draft.set(None)>
                    <label class="form-field">
                        <span class="form-label">"File" <span class="required">" *"</span></span>
                        <input
                            type="file"
                            accept=accept_attribute()
                            on:change=move |ev| {
                                let input: web_sys::HtmlInputElement = event_target(&ev);
                                let picked = input
                                    .files()
                                    .and_then(|files| files.get(0))
                                    .map(|f| (f.name(), f.size() as u64));
                                errors.update(|e| e.clear_field("file"));
                                if let Some((name, _)) = &picked {
                                    let stem = file_stem(name).to_string();
                                    draft.update(|d| {
                                        if let Some(doc) = d {
                                            if doc.name.is_empty() {
                                                doc.name = stem;
                                            }
                                        }
                                    });
                                }
                                file.set(picked);
                            }
                        />
                        {move || file.get().map(|(name, size)| view! {
                            <span class="muted">{format!("{} ({:.2} MB)", name, size as f64 / 1024.0 / 1024.0)}</span>
                        })}
                        <FieldError errors=errors field="file" />
                    </label>
                    <div class="form-grid">
                        <TextField label="Document Name" field="name" required=true errors=errors
                            value=draft_text(draft, |d: &Document| d.name.as_str())
                            on_input=draft_set(draft, |d: &mut Document, v| d.name = v) />
                        <SelectField label="Category" field="category" required=true errors=errors
                            options=plain_options(DOCUMENT_CATEGORIES)
                            placeholder="Select category"
                            value=draft_text(draft, |d: &Document| d.category.as_str())
                            on_change=draft_set(draft, |d: &mut Document, v| d.category = v) />
                        <SelectField label="Document Type" field="doc_type" errors=errors
                            options=type_options()
                            value=draft_text(draft, |d: &Document| d.doc_type.as_str())
                            on_change=draft_set(draft, |d: &mut Document, v| {
                                if let Some(kind) = DocumentType::from_str(&v) {
                                    d.doc_type = kind;
                                }
                            }) />
                        <TextField label="Expiry Date" field="expiry_date" input_type="date" errors=errors
                            value=draft_text(draft, |d: &Document| d.expiry_date.as_deref().unwrap_or(""))
                            on_input=draft_set(draft, |d: &mut Document, v| d.expiry_date = (!v.is_empty()).then_some(v)) />
                        <TextAreaField label="Description" field="description" errors=errors
                            value=draft_text(draft, |d: &Document| d.description.as_str())
                            on_input=draft_set(draft, |d: &mut Document, v| d.description = v) />
                        <TextField label="Tags" field="tags" errors=errors
                            placeholder="gst, quebec, annual"
                            value=tags_text
                            on_input=move |v: String| tags_text.set(v) />
                        <label class="checkbox-field">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.as_ref().is_some_and(|d| d.is_confidential))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    draft.update(|d| {
                                        if let Some(doc) = d {
                                            doc.is_confidential = checked;
                                        }
                                    })
                                }
                            />
                            "Confidential"
                        </label>
                        <label class="checkbox-field">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.as_ref().is_some_and(|d| d.requires_renewal))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    draft.update(|d| {
                                        if let Some(doc) = d {
                                            doc.requires_renewal = checked;
                                        }
                                    })
                                }
                            />
                            "Requires renewal"
                        </label>
                    </div>
                    <div class="modal-actions">
                        <button class="btn secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                        <button class="btn primary" on:click=upload>"Upload"</button>
                    </div>
                </Modal>
            </Show>

            {move || preview_document().map(|doc| view! {
                <Modal title=Signal::derive(move || "Document Preview".to_string()) class="modal-wide" on_close=move |_: ()| preview.set(None)>
                    <div class="detail-header">
                        <h3>{doc.name.clone()}</h3>
                        <span class=status_class(doc.compliance_status.as_str())>{doc.compliance_status.as_str()}</span>
                    </div>
                    <dl class="detail-list">
                        <dt>"File"</dt><dd>{doc.file_name.clone()}</dd>
                        <dt>"Size"</dt><dd>{doc.size_label()}</dd>
                        <dt>"Category"</dt><dd>{doc.category.clone()}</dd>
                        <dt>"Type"</dt><dd>{doc.doc_type.as_str()}</dd>
                        <dt>"Uploaded"</dt><dd>{format!("{} by {}", doc.upload_date, doc.uploaded_by)}</dd>
                        <dt>"Expires"</dt><dd>{doc.expiry_date.clone().unwrap_or_else(|| "Never".to_string())}</dd>
                        <dt>"Tags"</dt><dd>{doc.tags.join(", ")}</dd>
                    </dl>
                    <p>{doc.description.clone()}</p>
                </Modal>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("NEQ-certificate.pdf"), "NEQ-certificate");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
        assert_eq!(file_stem("README"), "README");
    }

    #[test]
    fn test_type_options_are_title_cased() {
        let options = type_options();
        assert_eq!(options[0], ("registration".to_string(), "Registration".to_string()));
        assert_eq!(options.len(), DocumentType::ALL.len());
    }

    #[test]
    fn test_accept_attribute_lists_allowed_extensions() {
        let accept = accept_attribute();
        assert!(accept.starts_with(".pdf,.doc,"));
        assert_eq!(accept.split(',').count(), ALLOWED_EXTENSIONS.len());
    }
}

//! Templates Library Page

use leptos::prelude::*;

use blanq_core::domain::{Template, TEMPLATE_CATEGORIES};
use blanq_core::query::{apply_filter, RecordFilter, TemplateFilter};
use blanq_core::repository::Repository;
use blanq_core::validation::{validate_template, FieldErrors};

use crate::components::{plain_options, ActionAlert, DeleteConfirmButton, Modal, SelectField, TextAreaField, TextField};
use crate::context::AppContext;
use crate::download::download_csv;
use crate::store::{store_remove_template, store_save_template, use_app_store, AppStateStoreFields};
use crate::pages::{draft_set, draft_text, failure_notice};

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let store = use_app_store();
    let notice = RwSignal::new(None::<String>);
    let ctx = expect_context::<AppContext>();

    let filter = RwSignal::new(TemplateFilter::default());
    let draft = RwSignal::new(None::<Template>);
    let errors = RwSignal::new(FieldErrors::new());

    let rows = Memo::new(move |_| store.templates().with(|repo| apply_filter(repo.list(), &filter.get())));
    let folders = ctx.with_config(|c| c.drive_folders.clone());

    let open_form = move |template: Template| {
        errors.set(FieldErrors::new());
        draft.set(Some(template));
    };
    let save = move |_| {
        let Some(template) = draft.get_untracked() else {
            return;
        };
        if let Err(e) = validate_template(&template) {
            errors.set(e);
            return;
        }
        if store_save_template(&store, template).is_ok() {
            draft.set(None);
        }
    };

    view! {
        <div class="page templates-page">
            <header class="page-header">
                <div>
                    <h1>"Templates Library"</h1>
                    <p class="page-subtitle">"Contracts, proposals, invoices, SOPs and communication"</p>
                </div>
                <div class="page-actions">
                    <button class="btn secondary" on:click=move |_| rows.with_untracked(|rows| download_csv("templates", rows))>
                        "⇩ Export CSV"
                    </button>
                    <Show when=move || ctx.can_manage()>
                        <button class="btn primary" on:click=move |_| open_form(Template::default())>"+ New"</button>
                    </Show>
                </div>
            </header>
            <ActionAlert message=notice />

            <div class="filter-bar">
                <input
                    class="input search"
                    type="search"
                    placeholder="Search templates..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.category.clone())
                    on:change=move |ev| filter.update(|f| f.category = event_target_value(&ev))
                >
                    <option value="">"All Categories"</option>
                    {TEMPLATE_CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                </select>
                <Show when=move || filter.with(|f| f.is_active())>
                    <button class="btn link" on:click=move |_| filter.update(|f| f.clear())>"Clear filters"</button>
                </Show>
            </div>

            <div class="card-grid">
                <For
                    each=move || rows.get()
                    key=|t| (t.id, t.name.clone(), t.updated_at.clone(), t.description.clone(), t.drive_url.clone())
                    children=move |t| {
                        let id = t.id;
                        let editing = t.clone();
                        view! {
                            <article class="template-card">
                                <header>
                                    <div>
                                        <h3>{t.name.clone()}</h3>
                                        <p class="muted">{t.category.clone()}</p>
                                    </div>
                                    <div class="row-actions">
                                        <a class="btn small" href=t.drive_url.clone() target="_blank" rel="noopener">"↗ Open"</a>
                                        <Show when=move || ctx.can_manage()>
                                            {
                                                let editing = editing.clone();
                                                view! {
                                                    <button class="btn small" on:click=move |_| open_form(editing.clone())>"Edit"</button>
                                                    <DeleteConfirmButton
                                                        button_class="icon-btn"
                                                        on_confirm=move |_: ()| {
                                                            if let Err(e) = store_remove_template(&store, id) {
                                                                notice.set(Some(failure_notice("delete template", &e)));
                                                            }
                                                        }
                                                    />
                                                }
                                            }
                                        </Show>
                                    </div>
                                </header>
                                {(!t.description.is_empty()).then(|| view! { <p class="description">{t.description.clone()}</p> })}
                                <p class="muted small">"Updated " {t.updated_at.clone()}</p>
                            </article>
                        }
                    }
                />
            </div>
            <Show when=move || rows.with(|r| r.is_empty())>
                <p class="empty-state">"No templates match the current filters."</p>
            </Show>

            {(!folders.is_empty()).then(|| view! {
                <section class="card">
                    <h3>"Shared folders"</h3>
                    <ul class="link-list">
                        {folders.into_iter().map(|(name, url)| view! {
                            <li><a href=url target="_blank" rel="noopener">{name}</a></li>
                        }).collect_view()}
                    </ul>
                </section>
            })}

            <Show when=move || draft.with(|d| d.is_some())>
                <Modal
                    title=Signal::derive(move || {
                        if draft.with(|d| d.as_ref().is_some_and(|t| t.id != 0)) { "Edit Template" } else { "New Template" }.to_string()
                    })
                    on_close=move |_: ()| draft.set(None)
                >
                    <div class="form-grid">
                        <TextField label="Name" field="name" required=true errors=errors
                            value=draft_text(draft, |t: &Template| t.name.as_str())
                            on_input=draft_set(draft, |t: &mut Template, v| t.name = v) />
                        <SelectField label="Category" field="category" required=true errors=errors
                            options=plain_options(TEMPLATE_CATEGORIES)
                            placeholder="Select category"
                            value=draft_text(draft, |t: &Template| t.category.as_str())
                            on_change=draft_set(draft, |t: &mut Template, v| t.category = v) />
                        <TextField label="Drive URL" field="drive_url" input_type="url" errors=errors
                            placeholder="https://drive.google.com/..."
                            value=draft_text(draft, |t: &Template| t.drive_url.as_str())
                            on_input=draft_set(draft, |t: &mut Template, v| t.drive_url = v) />
                    </div>
                    <TextAreaField label="Description" field="description" errors=errors
                        value=draft_text(draft, |t: &Template| t.description.as_str())
                        on_input=draft_set(draft, |t: &mut Template, v| t.description = v) />
                    <div class="modal-actions">
                        <button class="btn secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                        <button class="btn primary" on:click=save>"Save"</button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}

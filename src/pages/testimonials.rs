//! Testimonials Page
//!
//! Client feedback cards with stats, filters, an add/edit form with project
//! tags and media attachments, and CSV/JSON export of a selection.

use leptos::prelude::*;

use blanq_core::csv::{export_filename, testimonials_json};
use blanq_core::domain::{Media, MediaKind, RecordId, Testimonial, TESTIMONIAL_INDUSTRIES};
use blanq_core::query::{apply_filter, MediaFilter, RecordFilter, TestimonialFilter, TestimonialOrder};
use blanq_core::repository::Repository;
use blanq_core::stats::TestimonialStats;
use blanq_core::validation::{validate_testimonial, FieldErrors};

use crate::components::{ActionAlert, DeleteConfirmButton, FieldError, Modal, SelectField, StatCard, TextAreaField, TextField};
use crate::download::{download_csv, download_text};
use crate::pages::{draft_set, draft_text, failure_notice, iso_date, next_id, today};
use crate::store::{store_remove_testimonial, store_save_testimonial, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
}

/// Filled then empty stars, e.g. 3 -> "★★★☆☆"
fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn industry_label(key: &str) -> &str {
    TESTIMONIAL_INDUSTRIES
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, label)| *label)
}

fn media_value(media: Option<MediaFilter>) -> &'static str {
    match media {
        None => "",
        Some(MediaFilter::Text) => "text",
        Some(MediaFilter::Image) => "image",
        Some(MediaFilter::Video) => "video",
    }
}

fn industry_options() -> Vec<(String, String)> {
    TESTIMONIAL_INDUSTRIES
        .iter()
        .map(|(k, label)| (k.to_string(), label.to_string()))
        .collect()
}

/// Attachments for the files picked in the media input
fn media_from_files(files: &web_sys::FileList, existing: &[Media]) -> Vec<Media> {
    let mut id = next_id(existing.iter().map(|m| m.id));
    let mut media = Vec::new();
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        let url = match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("could not attach {}: {:?}", file.name(), e);
                continue;
            }
        };
        let kind = if file.type_().starts_with("video") { MediaKind::Video } else { MediaKind::Image };
        media.push(Media { id, kind, name: file.name(), url });
        id += 1;
    }
    media
}

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let store = use_app_store();
    let notice = RwSignal::new(None::<String>);

    let filter = RwSignal::new(TestimonialFilter::default());
    let draft = RwSignal::new(None::<Testimonial>);
    let new_tag = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let export_open = RwSignal::new(false);

    let rows = Memo::new(move |_| store.testimonials().with(|repo| apply_filter(repo.list(), &filter.get())));
    let stats = Memo::new(move |_| store.testimonials().with(|repo| TestimonialStats::compute(repo.list(), today())));

    let open_form = move |testimonial: Testimonial| {
        errors.set(FieldErrors::new());
        new_tag.set(String::new());
        draft.set(Some(testimonial));
    };
    let add_tag = move || {
        let tag = new_tag.get_untracked();
        let mut added = false;
        draft.update(|d| {
            if let Some(t) = d {
                added = t.add_tag(&tag);
            }
        });
        if added {
            new_tag.set(String::new());
        }
    };
    let save = move |_| {
        let Some(mut testimonial) = draft.get_untracked() else {
            return;
        };
        if let Err(e) = validate_testimonial(&testimonial) {
            errors.set(e);
            return;
        }
        if testimonial.date_received.is_empty() {
            testimonial.date_received = iso_date(today());
        }
        if store_save_testimonial(&store, testimonial).is_ok() {
            draft.set(None);
        }
    };

    view! {
        <div class="page testimonials-page">
            <header class="page-header">
                <div>
                    <h1>"Testimonials"</h1>
                    <p class="page-subtitle">"Client feedback for proposals and the website"</p>
                </div>
                <div class="page-actions">
                    <button class="btn secondary" on:click=move |_| export_open.set(true)>"⇩ Export"</button>
                    <button class="btn primary" on:click=move |_| open_form(Testimonial::default())>"+ Add Testimonial"</button>
                </div>
            </header>
            <ActionAlert message=notice />

            <div class="stat-grid">
                <StatCard title="Total Testimonials" value=Signal::derive(move || stats.with(|s| s.total.to_string())) icon="💬" />
                <StatCard title="Average Rating" value=Signal::derive(move || stats.with(|s| s.average_label())) icon="★" tone="warning" />
                <StatCard title="With Media" value=Signal::derive(move || stats.with(|s| s.with_media.to_string())) icon="🖼" />
                <StatCard title="This Month" value=Signal::derive(move || stats.with(|s| s.recent.to_string())) icon="📅" tone="success"
                    hint=Signal::derive(|| "Received in the last 30 days".to_string()) />
            </div>

            <div class="filter-bar">
                <input
                    class="input search"
                    type="search"
                    placeholder="Search client, company or content..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="Project tag"
                    prop:value=move || filter.with(|f| f.project.clone())
                    on:input=move |ev| filter.update(|f| f.project = event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.industry.clone())
                    on:change=move |ev| filter.update(|f| f.industry = event_target_value(&ev))
                >
                    <option value="">"All industries"</option>
                    {industry_options().into_iter().map(|(v, l)| view! { <option value=v>{l}</option> }).collect_view()}
                </select>
                <select
                    class="input"
                    prop:value=move || filter.with(|f| media_value(f.media))
                    on:change=move |ev| filter.update(|f| f.media = MediaFilter::from_str(&event_target_value(&ev)))
                >
                    <option value="">"Any media"</option>
                    <option value="text">"Text only"</option>
                    <option value="image">"With images"</option>
                    <option value="video">"With videos"</option>
                </select>
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.min_rating.map(|r| r.to_string()).unwrap_or_default())
                    on:change=move |ev| filter.update(|f| f.min_rating = event_target_value(&ev).parse().ok())
                >
                    <option value="">"Any rating"</option>
                    <option value="5">"5 stars"</option>
                    <option value="4">"4+ stars"</option>
                    <option value="3">"3+ stars"</option>
                </select>
                <Show when=move || filter.with(|f| f.is_active())>
                    <button class="btn link" on:click=move |_| filter.update(|f| f.clear())>"Clear filters"</button>
                </Show>
            </div>

            <div class="card-grid">
                <For
                    each=move || rows.get()
                    key=|t| (t.id, t.rating, t.content.clone(), t.project_tags.len(), t.media.len())
                    children=move |t| {
                        let id = t.id;
                        let editing = t.clone();
                        view! {
                            <article class="testimonial-card">
                                <header>
                                    <div>
                                        <h4>{t.client_name.clone()}</h4>
                                        <p class="muted">{t.company.clone()}</p>
                                    </div>
                                    <span class="stars" title=format!("{} of 5", t.rating)>{stars(t.rating)}</span>
                                </header>
                                <blockquote>{t.content.clone()}</blockquote>
                                <div class="task-tags">
                                    {t.project_tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                                </div>
                                <ul class="media-list">
                                    {t.media.iter().map(|m| {
                                        let icon = if m.kind == MediaKind::Video { "🎬" } else { "🖼" };
                                        view! { <li><a href=m.url.clone() target="_blank">{icon} " " {m.name.clone()}</a></li> }
                                    }).collect_view()}
                                </ul>
                                <footer class="row-actions">
                                    <span class="muted">{industry_label(&t.industry).to_string()} " · " {t.date_received.clone()}</span>
                                    <button class="icon-btn" title="Edit" on:click=move |_| open_form(editing.clone())>"✎"</button>
                                    <DeleteConfirmButton
                                        button_class="icon-btn"
                                        on_confirm=move |_: ()| {
                                            if let Err(e) = store_remove_testimonial(&store, id) {
                                                notice.set(Some(failure_notice("delete testimonial", &e)));
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
                <p class="empty-state">"No testimonials match the current filters."</p>
            </Show>

            <Show when=move || draft.with(|d| d.is_some())>
                <Modal
                    title=Signal::derive(move || {
                        if draft.with(|d| d.as_ref().is_some_and(|t| t.id != 0)) { "Edit Testimonial" } else { "Add Testimonial" }.to_string()
                    })
                    class="modal-wide"
                    on_close=move |_: ()| draft.set(None)
                >
                    <div class="form-grid">
                        <TextField label="Client Name" field="client_name" required=true errors=errors
                            value=draft_text(draft, |t: &Testimonial| t.client_name.as_str())
                            on_input=draft_set(draft, |t: &mut Testimonial, v| t.client_name = v) />
                        <TextField label="Company" field="company" required=true errors=errors
                            value=draft_text(draft, |t: &Testimonial| t.company.as_str())
                            on_input=draft_set(draft, |t: &mut Testimonial, v| t.company = v) />
                        <TextField label="Email" field="email" input_type="email" errors=errors
                            value=draft_text(draft, |t: &Testimonial| t.email.as_str())
                            on_input=draft_set(draft, |t: &mut Testimonial, v| t.email = v) />
                        <SelectField label="Industry" field="industry" errors=errors
                            options=industry_options()
                            placeholder="Select industry"
                            value=draft_text(draft, |t: &Testimonial| t.industry.as_str())
                            on_change=draft_set(draft, |t: &mut Testimonial, v| t.industry = v) />
                        <label class="form-field">
                            <span class="form-label">"Rating" <span class="required">" *"</span></span>
                            <select
                                class="input"
                                prop:value=move || draft.with(|d| d.as_ref().map(|t| t.rating.to_string()).unwrap_or_default())
                                on:change=move |ev| {
                                    let rating = event_target_value(&ev).parse().unwrap_or(5);
                                    errors.update(|e| e.clear_field("rating"));
                                    draft.update(|d| {
                                        if let Some(t) = d {
                                            t.rating = rating;
                                        }
                                    })
                                }
                            >
                                {(1..=5u8).rev().map(|r| view! { <option value=r.to_string()>{stars(r)}</option> }).collect_view()}
                            </select>
                            <FieldError errors=errors field="rating" />
                        </label>
                        <TextField label="Date Received" field="date_received" input_type="date" errors=errors
                            value=draft_text(draft, |t: &Testimonial| t.date_received.as_str())
                            on_input=draft_set(draft, |t: &mut Testimonial, v| t.date_received = v) />
                    </div>
                    <TextAreaField label="Testimonial" field="content" required=true errors=errors
                        value=draft_text(draft, |t: &Testimonial| t.content.as_str())
                        on_input=draft_set(draft, |t: &mut Testimonial, v| t.content = v) />

                    <div class="form-field">
                        <span class="form-label">"Project Tags"</span>
                        <div class="inline-add">
                            <input
                                class="input"
                                type="text"
                                placeholder="e.g. Website Redesign"
                                prop:value=move || new_tag.get()
                                on:input=move |ev| new_tag.set(event_target_value(&ev))
                            />
                            <button class="btn secondary" on:click=move |_| add_tag()>"Add"</button>
                        </div>
                        <div class="task-tags">
                            {move || draft.with(|d| d.as_ref().map(|t| t.project_tags.clone()).unwrap_or_default())
                                .into_iter()
                                .map(|tag| {
                                    let removed = tag.clone();
                                    view! {
                                        <span class="tag">
                                            {tag}
                                            <button class="tag-remove" on:click=move |_| draft.update(|d| {
                                                if let Some(t) = d {
                                                    t.remove_tag(&removed);
                                                }
                                            })>"×"</button>
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="form-field">
                        <span class="form-label">"Media Attachments"</span>
                        <input
                            type="file"
                            multiple=true
                            accept="image/*,video/*"
                            on:change=move |ev| {
                                let input: web_sys::HtmlInputElement = event_target(&ev);
                                let Some(files) = input.files() else {
                                    return;
                                };
                                draft.update(|d| {
                                    if let Some(t) = d {
                                        let added = media_from_files(&files, &t.media);
                                        t.media.extend(added);
                                    }
                                });
                            }
                        />
                        <ul class="media-list">
                            {move || draft.with(|d| d.as_ref().map(|t| t.media.clone()).unwrap_or_default())
                                .into_iter()
                                .map(|m| {
                                    let media_id = m.id;
                                    let icon = if m.kind == MediaKind::Video { "🎬" } else { "🖼" };
                                    view! {
                                        <li>
                                            {icon} " " {m.name}
                                            <button class="icon-btn" title="Remove" on:click=move |_| draft.update(|d| {
                                                if let Some(t) = d {
                                                    t.media.retain(|item| item.id != media_id);
                                                }
                                            })>"×"</button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="modal-actions">
                        <button class="btn secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                        <button class="btn primary" on:click=save>"Save Testimonial"</button>
                    </div>
                </Modal>
            </Show>

            <Show when=move || export_open.get()>
                <ExportDialog visible=rows on_close=move |_: ()| export_open.set(false) />
            </Show>
        </div>
    }
}

/// Export a selection of the visible testimonials
#[component]
fn ExportDialog(visible: Memo<Vec<Testimonial>>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let format = RwSignal::new(ExportFormat::Csv);
    let order = RwSignal::new(TestimonialOrder::default());
    let selected = RwSignal::new(visible.with_untracked(|rows| rows.iter().map(|t| t.id).collect::<Vec<RecordId>>()));

    let toggle = move |id: RecordId| {
        selected.update(|ids| {
            if let Some(pos) = ids.iter().position(|i| *i == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        })
    };
    let export = move |_| {
        let chosen: Vec<Testimonial> = visible.with_untracked(|rows| {
            selected.with_untracked(|ids| rows.iter().filter(|t| ids.contains(&t.id)).cloned().collect())
        });
        let order = order.get_untracked();
        match format.get_untracked() {
            ExportFormat::Csv => {
                let mut sorted = chosen;
                order.sort(&mut sorted);
                download_csv("testimonials", &sorted);
            }
            ExportFormat::Json => {
                let result = testimonials_json(&chosen, order)
                    .map_err(|e| e.to_string())
                    .and_then(|json| {
                        download_text(&export_filename("testimonials", today(), "json"), "application/json", &json)
                    });
                if let Err(e) = result {
                    log::warn!("testimonial JSON export failed: {}", e);
                }
            }
        }
        on_close.run(());
    };

    view! {
        <Modal title=Signal::derive(|| "Export Testimonials".to_string()) on_close=on_close>
            <div class="form-grid">
                <label class="form-field">
                    <span class="form-label">"Format"</span>
                    <select
                        class="input"
                        on:change=move |ev| format.set(if event_target_value(&ev) == "json" { ExportFormat::Json } else { ExportFormat::Csv })
                    >
                        <option value="csv">"CSV"</option>
                        <option value="json">"JSON"</option>
                    </select>
                </label>
                <label class="form-field">
                    <span class="form-label">"Sort by"</span>
                    <select
                        class="input"
                        on:change=move |ev| {
                            if let Some(o) = TestimonialOrder::from_str(&event_target_value(&ev)) {
                                order.set(o);
                            }
                        }
                    >
                        {TestimonialOrder::ALL.iter().map(|o| view! { <option value=o.as_str()>{o.label()}</option> }).collect_view()}
                    </select>
                </label>
            </div>
            <div class="select-list">
                <div class="select-list-header">
                    <span>{move || format!("{} of {} selected", selected.with(Vec::len), visible.with(Vec::len))}</span>
                    <button class="btn link" on:click=move |_| selected.set(visible.with_untracked(|rows| rows.iter().map(|t| t.id).collect()))>"Select all"</button>
                    <button class="btn link" on:click=move |_| selected.set(Vec::new())>"Clear"</button>
                </div>
                {move || visible.get().into_iter().map(|t| {
                    let id = t.id;
                    view! {
                        <label class="checkbox-field">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.with(|ids| ids.contains(&id))
                                on:change=move |_| toggle(id)
                            />
                            {t.client_name} " · " {t.company} " " <span class="stars">{stars(t.rating)}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
            <div class="modal-actions">
                <button class="btn secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                <button
                    class="btn primary"
                    disabled=move || selected.with(Vec::is_empty)
                    on:click=export
                >"Export"</button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_media_value_matches_filter_parsing() {
        for value in ["text", "image", "video"] {
            assert_eq!(media_value(MediaFilter::from_str(value)), value);
        }
        assert_eq!(media_value(None), "");
    }

    #[test]
    fn test_industry_label_falls_back_to_key() {
        assert_eq!(industry_label("real-estate"), "Real Estate");
        assert_eq!(industry_label("aerospace"), "aerospace");
    }
}

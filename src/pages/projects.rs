//! Project Management Page

use leptos::prelude::*;

use blanq_core::domain::{Deliverable, DriveLink, Project, ProjectStatus, ProjectType, RecordId};
use blanq_core::query::{apply_filter, distinct_values, ProjectFilter, ProjectSortKey, RecordFilter, SortConfig};
use blanq_core::repository::Repository;
use blanq_core::stats::ProjectCounts;
use blanq_core::validation::{validate_project, FieldErrors};

use crate::components::{
    plain_options, ActionAlert, DeleteConfirmButton, Modal, SelectField, SortHeader, StatCard, TextAreaField, TextField,
};
use crate::context::AppContext;
use crate::pages::{draft_set, draft_text, failure_notice, next_id, status_class};
use crate::store::{
    store_remove_project, store_save_project, store_toggle_deliverable, use_app_store, AppStateStoreFields,
};

fn status_options() -> Vec<(String, String)> {
    ProjectStatus::ALL.iter().map(|s| (s.as_str().to_string(), s.label().to_string())).collect()
}

fn type_options() -> Vec<(String, String)> {
    ProjectType::ALL.iter().map(|t| (t.as_str().to_string(), t.label().to_string())).collect()
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let store = use_app_store();
    let notice = RwSignal::new(None::<String>);
    let ctx = expect_context::<AppContext>();

    let filter = RwSignal::new(ProjectFilter::default());
    let sort = RwSignal::new(SortConfig::new(ProjectSortKey::Deadline));
    let draft = RwSignal::new(None::<Project>);
    let errors = RwSignal::new(FieldErrors::new());
    let detail = RwSignal::new(None::<RecordId>);
    let new_deliverable = RwSignal::new(String::new());
    let new_link = RwSignal::new((String::new(), String::new()));

    let rows = Memo::new(move |_| {
        let mut rows = store.projects().with(|repo| apply_filter(repo.list(), &filter.get()));
        sort.get().sort(&mut rows);
        rows
    });
    let counts = Memo::new(move |_| store.projects().with(|repo| ProjectCounts::from_projects(repo.list())));
    let client_choices = move || store.projects().with(|repo| distinct_values(repo.list(), |p| p.client.as_str()));
    let assignee_choices = move || store.projects().with(|repo| distinct_values(repo.list(), |p| p.assigned_to.as_str()));

    let open_form = move |project: Project| {
        errors.set(FieldErrors::new());
        new_deliverable.set(String::new());
        new_link.set((String::new(), String::new()));
        draft.set(Some(project));
    };
    let save = move |_| {
        let Some(project) = draft.get_untracked() else {
            return;
        };
        if let Err(e) = validate_project(&project) {
            errors.set(e);
            return;
        }
        if store_save_project(&store, project).is_ok() {
            draft.set(None);
        }
    };
    let add_deliverable = move |_| {
        let text = new_deliverable.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        draft.update(|d| {
            if let Some(p) = d {
                let id = next_id(p.deliverables.iter().map(|d| d.id));
                p.deliverables.push(Deliverable { id, text, completed: false });
            }
        });
        new_deliverable.set(String::new());
    };
    let add_link = move |_| {
        let (name, url) = new_link.get_untracked();
        if name.trim().is_empty() || url.trim().is_empty() {
            return;
        }
        draft.update(|d| {
            if let Some(p) = d {
                let id = next_id(p.drive_links.iter().map(|l| l.id));
                p.drive_links.push(DriveLink { id, name: name.trim().to_string(), url: url.trim().to_string() });
            }
        });
        new_link.set((String::new(), String::new()));
    };

    let detail_project = move || detail.get().and_then(|id| store.projects().with(|repo| repo.find_by_id(id).cloned()));

    view! {
        <div class="page projects-page">
            <header class="page-header">
                <div>
                    <h1>"Project Management"</h1>
                    <p class="page-subtitle">"Track deadlines, deliverables and assignments"</p>
                </div>
                <div class="page-actions">
                    <button class="btn primary" on:click=move |_| open_form(Project::default())>"+ New Project"</button>
                </div>
            </header>
            <ActionAlert message=notice />

            <div class="stat-grid">
                <StatCard title="Total Projects" value=Signal::derive(move || counts.get().total.to_string()) icon="📁" />
                <StatCard title="Active" value=Signal::derive(move || counts.get().active.to_string()) tone="success" />
                <StatCard title="On Hold" value=Signal::derive(move || counts.get().on_hold.to_string()) tone="warning" />
                <StatCard title="Completed" value=Signal::derive(move || counts.get().completed.to_string()) tone="primary" />
            </div>

            <div class="filter-bar">
                <input
                    class="input search"
                    type="search"
                    placeholder="Search projects or clients..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.status.map(|s| s.as_str().to_string()).unwrap_or_default())
                    on:change=move |ev| filter.update(|f| f.status = ProjectStatus::from_str(&event_target_value(&ev)))
                >
                    <option value="">"All statuses"</option>
                    {status_options().into_iter().map(|(v, l)| view! { <option value=v>{l}</option> }).collect_view()}
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
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.assigned_to.clone())
                    on:change=move |ev| filter.update(|f| f.assigned_to = event_target_value(&ev))
                >
                    <option value="">"All team members"</option>
                    {move || assignee_choices().into_iter().map(|a| {
                    let label = a.clone();
                    view! { <option value=a>{label}</option> }
                }).collect_view()}
                </select>
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.project_type.map(|t| t.as_str().to_string()).unwrap_or_default())
                    on:change=move |ev| filter.update(|f| f.project_type = ProjectType::from_str(&event_target_value(&ev)))
                >
                    <option value="">"All types"</option>
                    {type_options().into_iter().map(|(v, l)| view! { <option value=v>{l}</option> }).collect_view()}
                </select>
                <label class="inline-field">
                    "Starts from"
                    <input
                        class="input"
                        type="date"
                        prop:value=move || filter.with(|f| f.start_date_from.clone())
                        on:input=move |ev| filter.update(|f| f.start_date_from = event_target_value(&ev))
                    />
                </label>
                <label class="inline-field">
                    "Due by"
                    <input
                        class="input"
                        type="date"
                        prop:value=move || filter.with(|f| f.deadline_until.clone())
                        on:input=move |ev| filter.update(|f| f.deadline_until = event_target_value(&ev))
                    />
                </label>
                <Show when=move || filter.with(|f| f.is_active())>
                    <button class="btn link" on:click=move |_| filter.update(|f| f.clear())>"Clear filters"</button>
                </Show>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader label="Project" key=ProjectSortKey::Name sort=sort />
                        <SortHeader label="Client" key=ProjectSortKey::Client sort=sort />
                        <SortHeader label="Start" key=ProjectSortKey::StartDate sort=sort />
                        <SortHeader label="Deadline" key=ProjectSortKey::Deadline sort=sort />
                        <SortHeader label="Assigned To" key=ProjectSortKey::AssignedTo sort=sort />
                        <SortHeader label="Status" key=ProjectSortKey::Status sort=sort />
                        <SortHeader label="Progress" key=ProjectSortKey::Progress sort=sort />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|p| (p.id, p.name.clone(), p.status, p.progress, p.deadline.clone(), p.assigned_to.clone())
                        children=move |project| {
                            let id = project.id;
                            let for_edit = project.clone();
                            view! {
                                <tr>
                                    <td class="strong">
                                        <button class="link-btn" on:click=move |_| detail.set(Some(id))>{project.name.clone()}</button>
                                        <span class="muted">{project.project_type.label()}</span>
                                    </td>
                                    <td>{project.client.clone()}</td>
                                    <td>{project.start_date.clone()}</td>
                                    <td>{project.deadline.clone()}</td>
                                    <td>{project.assigned_to.clone()}</td>
                                    <td><span class=status_class(project.status.as_str())>{project.status.label()}</span></td>
                                    <td>
                                        <div class="progress-bar"><div class="progress-fill" style=format!("width: {}%", project.progress)></div></div>
                                        <span class="muted">{format!("{}%", project.progress)}</span>
                                    </td>
                                    <td class="row-actions">
                                        <button class="icon-btn" title="Edit" on:click=move |_| open_form(for_edit.clone())>"✎"</button>
                                        <DeleteConfirmButton
                                            button_class="icon-btn"
                                            on_confirm=move |_: ()| {
                                                if let Err(e) = store_remove_project(&store, id) {
                                                    notice.set(Some(failure_notice("delete project", &e)));
                                                }
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
                <p class="empty-state">"No projects match the current filters."</p>
            </Show>

            <Show when=move || draft.with(|d| d.is_some())>
                <Modal
                    title=Signal::derive(move || {
                        if draft.with(|d| d.as_ref().is_some_and(|p| p.id != 0)) { "Edit Project".to_string() } else { "New Project".to_string() }
                    })
                    class="modal-wide"
                    on_close=move |_: ()| draft.set(None)
                >
                    <div class="form-grid">
                        <TextField label="Project Name" field="name" required=true errors=errors
                            placeholder="Enter project name"
                            value=draft_text(draft, |p: &Project| p.name.as_str())
                            on_input=draft_set(draft, |p: &mut Project, v| p.name = v) />
                        <SelectField label="Client" field="client" required=true errors=errors
                            options=ctx.with_config(|c| plain_options(&c.project_clients))
                            placeholder="Select client"
                            value=draft_text(draft, |p: &Project| p.client.as_str())
                            on_change=draft_set(draft, |p: &mut Project, v| p.client = v) />
                        <TextField label="Start Date" field="start_date" input_type="date" required=true errors=errors
                            value=draft_text(draft, |p: &Project| p.start_date.as_str())
                            on_input=draft_set(draft, |p: &mut Project, v| p.start_date = v) />
                        <TextField label="Deadline" field="deadline" input_type="date" required=true errors=errors
                            value=draft_text(draft, |p: &Project| p.deadline.as_str())
                            on_input=draft_set(draft, |p: &mut Project, v| p.deadline = v) />
                        <SelectField label="Assigned To" field="assigned_to" required=true errors=errors
                            options=ctx.with_config(|c| plain_options(&c.team_members))
                            placeholder="Select team member"
                            value=draft_text(draft, |p: &Project| p.assigned_to.as_str())
                            on_change=draft_set(draft, |p: &mut Project, v| p.assigned_to = v) />
                        <SelectField label="Status" field="status" errors=errors
                            options=status_options()
                            value=draft_text(draft, |p: &Project| p.status.as_str())
                            on_change=draft_set(draft, |p: &mut Project, v| {
                                if let Some(status) = ProjectStatus::from_str(&v) {
                                    p.status = status;
                                }
                            }) />
                        <SelectField label="Project Type" field="project_type" errors=errors
                            options=type_options()
                            value=draft_text(draft, |p: &Project| p.project_type.as_str())
                            on_change=draft_set(draft, |p: &mut Project, v| {
                                if let Some(kind) = ProjectType::from_str(&v) {
                                    p.project_type = kind;
                                }
                            }) />
                        <TextField label="Budget (CAD)" field="budget" input_type="number" errors=errors
                            value=draft_text(draft, |p: &Project| p.budget.as_str())
                            on_input=draft_set(draft, |p: &mut Project, v| p.budget = v) />
                        <TextAreaField label="Description" field="description" errors=errors
                            value=draft_text(draft, |p: &Project| p.description.as_str())
                            on_input=draft_set(draft, |p: &mut Project, v| p.description = v) />
                        <TextAreaField label="Notes" field="notes" errors=errors
                            value=draft_text(draft, |p: &Project| p.notes.as_str())
                            on_input=draft_set(draft, |p: &mut Project, v| p.notes = v) />
                    </div>

                    <section class="form-section">
                        <h3>"Deliverables"</h3>
                        <ul class="checklist">
                            {move || draft.with(|d| d.as_ref().map(|p| p.deliverables.clone()).unwrap_or_default())
                                .into_iter()
                                .map(|item| {
                                    let id = item.id;
                                    view! {
                                        <li>
                                            <input
                                                type="checkbox"
                                                prop:checked=item.completed
                                                on:change=move |_| draft.update(|d| {
                                                    if let Some(p) = d {
                                                        p.toggle_deliverable(id);
                                                    }
                                                })
                                            />
                                            <span>{item.text.clone()}</span>
                                            <button class="icon-btn" on:click=move |_| draft.update(|d| {
                                                if let Some(p) = d {
                                                    p.deliverables.retain(|x| x.id != id);
                                                }
                                            })>"×"</button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="inline-add">
                            <input
                                class="input"
                                placeholder="Add deliverable..."
                                prop:value=move || new_deliverable.get()
                                on:input=move |ev| new_deliverable.set(event_target_value(&ev))
                            />
                            <button class="btn secondary" on:click=add_deliverable>"Add"</button>
                        </div>
                    </section>

                    <section class="form-section">
                        <h3>"Google Drive Links"</h3>
                        <ul class="link-list">
                            {move || draft.with(|d| d.as_ref().map(|p| p.drive_links.clone()).unwrap_or_default())
                                .into_iter()
                                .map(|link| {
                                    let id = link.id;
                                    view! {
                                        <li>
                                            <a href=link.url.clone() target="_blank" rel="noopener">{link.name.clone()}</a>
                                            <button class="icon-btn" on:click=move |_| draft.update(|d| {
                                                if let Some(p) = d {
                                                    p.drive_links.retain(|x| x.id != id);
                                                }
                                            })>"×"</button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="inline-add">
                            <input
                                class="input"
                                placeholder="Link name"
                                prop:value=move || new_link.with(|l| l.0.clone())
                                on:input=move |ev| new_link.update(|l| l.0 = event_target_value(&ev))
                            />
                            <input
                                class="input"
                                type="url"
                                placeholder="https://drive.google.com/..."
                                prop:value=move || new_link.with(|l| l.1.clone())
                                on:input=move |ev| new_link.update(|l| l.1 = event_target_value(&ev))
                            />
                            <button class="btn secondary" on:click=add_link>"Add"</button>
                        </div>
                    </section>

                    <div class="modal-actions">
                        <button class="btn secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                        <button class="btn primary" on:click=save>"Save Project"</button>
                    </div>
                </Modal>
            </Show>

            {move || detail_project().map(|project| {
                let id = project.id;
                view! {
                    <Modal title=Signal::derive(move || "Project Details".to_string()) class="modal-wide" on_close=move |_: ()| detail.set(None)>
                        <div class="detail-header">
                            <h3>{project.name.clone()}</h3>
                            <span class=status_class(project.status.as_str())>{project.status.label()}</span>
                        </div>
                        <dl class="detail-list">
                            <dt>"Client"</dt><dd>{project.client.clone()}</dd>
                            <dt>"Type"</dt><dd>{project.project_type.label()}</dd>
                            <dt>"Start"</dt><dd>{project.start_date.clone()}</dd>
                            <dt>"Deadline"</dt><dd>{project.deadline.clone()}</dd>
                            <dt>"Assigned To"</dt><dd>{project.assigned_to.clone()}</dd>
                            <dt>"Budget"</dt><dd>{blanq_core::domain::format_cad(project.budget_amount())}</dd>
                            <dt>"Progress"</dt><dd>{format!("{}%", project.progress)}</dd>
                        </dl>
                        <p>{project.description.clone()}</p>
                        <h4>"Deliverables"</h4>
                        <p class="muted small">{format!("{}% of deliverables completed", project.deliverable_progress())}</p>
                        <ul class="checklist">
                            {project.deliverables.iter().map(|item| {
                                let deliverable_id = item.id;
                                view! {
                                    <li>
                                        <input
                                            type="checkbox"
                                            prop:checked=item.completed
                                            on:change=move |_| store_toggle_deliverable(&store, id, deliverable_id)
                                        />
                                        <span class=if item.completed { "done" } else { "" }>{item.text.clone()}</span>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                        <h4>"Drive Links"</h4>
                        <ul class="link-list">
                            {project.drive_links.iter().map(|link| view! {
                                <li><a href=link.url.clone() target="_blank" rel="noopener">{link.name.clone()}</a></li>
                            }).collect_view()}
                        </ul>
                        {(!project.notes.is_empty()).then(|| view! { <p class="notes">{project.notes.clone()}</p> })}
                    </Modal>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_use_wire_values() {
        let options = status_options();
        assert_eq!(options[1], ("on-hold".to_string(), "On Hold".to_string()));
    }
}

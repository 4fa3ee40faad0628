//! Collaborative To-Do Page
//!
//! Task board shared between the owner and the business partner. Cards are
//! dragged between the To Do, In Progress and Completed columns; the task
//! dialog edits details and collects comments.

use leptos::prelude::*;

use blanq_core::board::OWNER;
use blanq_core::domain::{parse_tags, Priority, RecordId, Task, TaskStatus};
use blanq_core::query::{RecordFilter, TaskFilter};
use blanq_core::validation::{validate_task, FieldErrors};

use crate::components::{
    plain_options, DeleteConfirmButton, Modal, SelectField, StatCard, TaskBoardView, TextAreaField, TextField,
};
use crate::context::AppContext;
use crate::download::download_csv;
use crate::pages::{draft_set, draft_text, iso_date, today};
use crate::store::{store_add_comment, store_remove_task, store_save_task, use_app_store, AppStateStoreFields};

fn priority_options() -> Vec<(String, String)> {
    Priority::ALL.iter().map(|p| (p.as_str().to_string(), p.label().to_string())).collect()
}

fn status_options() -> Vec<(String, String)> {
    TaskStatus::ALL.iter().map(|s| (s.as_str().to_string(), s.label().to_string())).collect()
}

/// Blank task for a column's add button, due today
fn new_task(status: TaskStatus, assignee: &str) -> Task {
    Task {
        status,
        ..Task::new("", assignee, iso_date(today()))
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();
    let partners = ctx.with_config(|c| c.partners.clone());

    let filter = RwSignal::new(TaskFilter::default());
    let draft = RwSignal::new(None::<Task>);
    let tags_text = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let counts = Memo::new(move |_| store.tasks().with(|board| board.counts(today())));
    let open_id = move || draft.with(|d| d.as_ref().map(|t| t.id).filter(|id| *id != 0));
    let comments = move || {
        open_id()
            .and_then(|id| store.tasks().with(|board| board.find(id).map(|t| t.comments.clone())))
            .unwrap_or_default()
    };

    let open_task = move |task: Task| {
        errors.set(FieldErrors::new());
        tags_text.set(task.tags.join(", "));
        comment.set(String::new());
        draft.set(Some(task));
    };
    let on_open = move |id: RecordId| {
        if let Some(task) = store.tasks().read_untracked().find(id).cloned() {
            open_task(task);
        }
    };
    let on_add = move |status: TaskStatus| open_task(new_task(status, OWNER));

    let save = move |_| {
        let Some(mut task) = draft.get_untracked() else {
            return;
        };
        if let Err(e) = validate_task(&task, today()) {
            errors.set(e);
            return;
        }
        task.tags = parse_tags(&tags_text.get_untracked());
        if let Some(current) = store.tasks().read_untracked().find(task.id) {
            task.comments = current.comments.clone();
        }
        if store_save_task(&store, task).is_ok() {
            draft.set(None);
        }
    };
    let post_comment = move || {
        let Some(id) = open_id() else {
            return;
        };
        let author = ctx
            .session
            .get_untracked()
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| OWNER.to_string());
        if store_add_comment(&store, id, &author, &comment.get_untracked()).is_ok() {
            comment.set(String::new());
        }
    };
    let export = move |_| {
        let tasks: Vec<Task> = store.tasks().with_untracked(|board| board.all().cloned().collect());
        download_csv("tasks", &tasks);
    };

    let assignee_options = StoredValue::new(plain_options(partners.iter()));

    view! {
        <div class="page tasks-page">
            <header class="page-header">
                <div>
                    <h1>"Collaborative To-Do"</h1>
                    <p class="page-subtitle">"Shared task board for you and your business partner"</p>
                </div>
                <div class="page-actions">
                    <button class="btn secondary" on:click=export>"⇩ Export CSV"</button>
                    <button class="btn primary" on:click=move |_| on_add(TaskStatus::Todo)>"+ New Task"</button>
                </div>
            </header>

            <div class="stat-grid">
                <StatCard title="Total Tasks" value=Signal::derive(move || counts.with(|c| c.total.to_string())) />
                <StatCard title="To Do" value=Signal::derive(move || counts.with(|c| c.todo.to_string())) />
                <StatCard title="In Progress" value=Signal::derive(move || counts.with(|c| c.in_progress.to_string())) tone="warning" />
                <StatCard title="Completed" value=Signal::derive(move || counts.with(|c| c.completed.to_string())) tone="success" />
                <StatCard title="Overdue" value=Signal::derive(move || counts.with(|c| c.overdue.to_string())) tone="error" />
                <StatCard
                    title="Yours / Partner"
                    value=Signal::derive(move || counts.with(|c| format!("{} / {}", c.yours, c.partner)))
                />
            </div>

            <div class="filter-bar">
                <input
                    class="input search"
                    type="search"
                    placeholder="Search title, description or tags..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.assigned_to.clone())
                    on:change=move |ev| filter.update(|f| f.assigned_to = event_target_value(&ev))
                >
                    <option value="">"Everyone"</option>
                    {partners.iter().map(|p| view! { <option value=p.clone()>{p.clone()}</option> }).collect_view()}
                </select>
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.priority.map(|p| p.as_str().to_string()).unwrap_or_default())
                    on:change=move |ev| filter.update(|f| f.priority = Priority::from_str(&event_target_value(&ev)))
                >
                    <option value="">"All priorities"</option>
                    {priority_options().into_iter().map(|(v, l)| view! { <option value=v>{l}</option> }).collect_view()}
                </select>
                <select
                    class="input"
                    prop:value=move || filter.with(|f| f.status.map(|s| s.as_str().to_string()).unwrap_or_default())
                    on:change=move |ev| filter.update(|f| f.status = TaskStatus::from_str(&event_target_value(&ev)))
                >
                    <option value="">"All statuses"</option>
                    {status_options().into_iter().map(|(v, l)| view! { <option value=v>{l}</option> }).collect_view()}
                </select>
                <label class="inline-field">
                    "Due from"
                    <input
                        class="input"
                        type="date"
                        prop:value=move || filter.with(|f| f.due_date_from.clone())
                        on:input=move |ev| filter.update(|f| f.due_date_from = event_target_value(&ev))
                    />
                </label>
                <label class="inline-field">
                    "to"
                    <input
                        class="input"
                        type="date"
                        prop:value=move || filter.with(|f| f.due_date_until.clone())
                        on:input=move |ev| filter.update(|f| f.due_date_until = event_target_value(&ev))
                    />
                </label>
                <Show when=move || filter.with(|f| f.is_active())>
                    <button class="btn link" on:click=move |_| filter.update(|f| f.clear())>"Clear filters"</button>
                </Show>
            </div>

            <TaskBoardView filter=filter on_open=on_open on_add=on_add />

            <Show when=move || draft.with(|d| d.is_some())>
                <Modal
                    title=Signal::derive(move || if open_id().is_some() { "Edit Task" } else { "New Task" }.to_string())
                    class="modal-wide"
                    on_close=move |_: ()| draft.set(None)
                >
                    <div class="form-grid">
                        <TextField label="Title" field="title" required=true errors=errors
                            value=draft_text(draft, |t: &Task| t.title.as_str())
                            on_input=draft_set(draft, |t: &mut Task, v| t.title = v) />
                        <SelectField label="Assigned To" field="assigned_to" required=true errors=errors
                            options=assignee_options.get_value()
                            placeholder="Select assignee"
                            value=draft_text(draft, |t: &Task| t.assigned_to.as_str())
                            on_change=draft_set(draft, |t: &mut Task, v| t.assigned_to = v) />
                        <SelectField label="Priority" field="priority" errors=errors
                            options=priority_options()
                            value=draft_text(draft, |t: &Task| t.priority.as_str())
                            on_change=draft_set(draft, |t: &mut Task, v| {
                                if let Some(p) = Priority::from_str(&v) {
                                    t.priority = p;
                                }
                            }) />
                        <SelectField label="Status" field="status" errors=errors
                            options=status_options()
                            value=draft_text(draft, |t: &Task| t.status.as_str())
                            on_change=draft_set(draft, |t: &mut Task, v| {
                                if let Some(s) = TaskStatus::from_str(&v) {
                                    t.status = s;
                                }
                            }) />
                        <TextField label="Due Date" field="due_date" input_type="date" required=true errors=errors
                            value=draft_text(draft, |t: &Task| t.due_date.as_str())
                            on_input=draft_set(draft, |t: &mut Task, v| t.due_date = v) />
                        <TextField label="Tags" field="tags" errors=errors
                            placeholder="finance, planning"
                            value=tags_text
                            on_input=move |v: String| tags_text.set(v) />
                    </div>
                    <TextAreaField label="Description" field="description" errors=errors
                        value=draft_text(draft, |t: &Task| t.description.as_str())
                        on_input=draft_set(draft, |t: &mut Task, v| t.description = v) />

                    <Show when=move || open_id().is_some()>
                        <section class="comments">
                            <h4>{move || format!("Comments ({})", comments().len())}</h4>
                            <ul class="comment-list">
                                {move || comments().into_iter().map(|c| view! {
                                    <li>
                                        <span class="strong">{c.author}</span>
                                        <span class="muted">{c.timestamp}</span>
                                        <p>{c.text}</p>
                                    </li>
                                }).collect_view()}
                            </ul>
                            <div class="inline-add">
                                <input
                                    class="input"
                                    type="text"
                                    placeholder="Add a comment..."
                                    prop:value=move || comment.get()
                                    on:input=move |ev| comment.set(event_target_value(&ev))
                                />
                                <button
                                    class="btn secondary"
                                    disabled=move || comment.with(|c| c.trim().is_empty())
                                    on:click=move |_| post_comment()
                                >"Post"</button>
                            </div>
                        </section>
                    </Show>

                    <div class="modal-actions">
                        <Show when=move || open_id().is_some()>
                            <DeleteConfirmButton
                                button_class="btn danger"
                                label="Delete Task"
                                on_confirm=move |_: ()| {
                                    if let Some(id) = open_id() {
                                        if store_remove_task(&store, id).is_ok() {
                                            draft.set(None);
                                        }
                                    }
                                }
                            />
                        </Show>
                        <button class="btn secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                        <button class="btn primary" on:click=save>"Save Task"</button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_lands_in_requested_column() {
        let task = new_task(TaskStatus::InProgress, OWNER);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assigned_to, "You");
        assert_eq!(task.id, 0);
        assert!(task.title.is_empty());
    }

    #[test]
    fn test_priority_options_use_wire_values() {
        let options = priority_options();
        assert_eq!(options[0], ("high".to_string(), "High Priority".to_string()));
    }
}

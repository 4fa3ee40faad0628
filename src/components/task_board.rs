//! Task Board Component
//!
//! Three status columns of task cards with drag-and-drop between and within
//! columns. Uses leptos-dragdrop: each card is a slot target, the empty tail
//! of a column is a zone target. The drag signals come from the app root.

use chrono::Local;
use leptos::prelude::*;

use blanq_core::board::{DragEvent, Slot};
use blanq_core::domain::{Priority, RecordId, Task, TaskStatus};
use blanq_core::query::TaskFilter;
use leptos_dragdrop::*;

use crate::store::{store_move_task, use_app_store, AppStateStoreFields};

/// Where a released card should go, in full-column coordinates
fn destination_for(
    store: &crate::store::AppStore,
    filter: &TaskFilter,
    origin: DragOrigin,
    target: DropTarget,
    source: Slot,
) -> Option<Slot> {
    let board = store.tasks().read_untracked();
    let column = TaskStatus::from_index(target.zone())?;
    let visible: Vec<RecordId> = board.filtered(filter)[column.index()].iter().map(|t| t.id).collect();

    let visible_index = match target {
        DropTarget::Slot { index, .. } => {
            let hovered = *visible.get(index)?;
            if hovered == origin.id {
                return Some(source);
            }
            visible
                .iter()
                .filter(|id| **id != origin.id)
                .position(|id| *id == hovered)?
        }
        DropTarget::Zone(_) => visible.len(),
    };
    let index = board.resolve_index(column, &visible, visible_index, origin.id);
    Some(Slot::new(column, index))
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge priority-high",
        Priority::Medium => "badge priority-medium",
        Priority::Low => "badge priority-low",
    }
}

#[component]
pub fn TaskBoardView(
    #[prop(into)] filter: Signal<TaskFilter>,
    #[prop(into)] on_open: Callback<RecordId>,
    #[prop(into)] on_add: Callback<TaskStatus>,
) -> impl IntoView {
    let store = use_app_store();
    let dnd = use_dnd();

    dnd.on_drop(move |origin: DragOrigin, target: Option<DropTarget>| {
        let Some(filter) = filter.try_get_untracked() else {
            return;
        };
        let Some(column) = TaskStatus::from_index(origin.zone) else {
            return;
        };
        let Some(index) = store.tasks().read_untracked().column(column).iter().position(|t| t.id == origin.id)
        else {
            log::warn!("dragged task {} is no longer on the board", origin.id);
            return;
        };
        let source = Slot::new(column, index);
        let destination = target.and_then(|target| destination_for(&store, &filter, origin, target, source));

        store_move_task(&store, DragEvent { task_id: origin.id, source, destination });
    });

    let columns = Memo::new(move |_| store.tasks().with(|board| board.filtered(&filter.get())));

    view! {
        <div class="task-board">
            {TaskStatus::ALL.into_iter().map(|status| {
                let zone = status.index();
                let tasks = move || columns.with(|c| c[zone].clone());
                let count = move || columns.with(|c| c[zone].len());
                let tail = DropTarget::Zone(zone);

                view! {
                    <section class="task-column">
                        <header class="task-column-header">
                            <h3>{status.label()}</h3>
                            <span class="count">{count}</span>
                            <button class="icon-btn" title="Add task" on:click=move |_| on_add.run(status)>"+"</button>
                        </header>
                        <div class="task-column-body">
                            <For
                                each=move || tasks().into_iter().enumerate()
                                key=|(index, task)| (*index, task.id, task.status, task.title.clone(), task.priority, task.due_date.clone(), task.comments.len(), task.progress)
                                children=move |(index, task)| {
                                    let id = task.id;
                                    let slot = DropTarget::Slot { zone, index };
                                    let origin = DragOrigin { id, zone, index };
                                    view! {
                                        <div
                                            class=move || {
                                                let mut c = String::from("task-card-wrapper");
                                                if dnd.is_dragging(id) { c.push_str(" dragging"); }
                                                if dnd.is_target(slot) { c.push_str(" drop-target"); }
                                                c
                                            }
                                            on:mousedown=make_on_mousedown(dnd, origin)
                                            on:mouseenter=make_on_target_mouseenter(dnd, slot)
                                            on:mouseleave=make_on_mouseleave(dnd)
                                            on:click=move |_| {
                                                if !dnd.drag_just_ended.get_untracked() {
                                                    on_open.run(id);
                                                }
                                            }
                                        >
                                            <TaskCard task=task />
                                        </div>
                                    }
                                }
                            />
                            <div
                                class=move || if dnd.is_target(tail) { "column-tail drop-target" } else { "column-tail" }
                                on:mouseenter=make_on_target_mouseenter(dnd, tail)
                                on:mouseleave=make_on_mouseleave(dnd)
                            >
                                <Show when=move || count() == 0>
                                    <p class="empty-column">"No tasks"</p>
                                </Show>
                            </div>
                        </div>
                    </section>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn TaskCard(task: Task) -> impl IntoView {
    let today = Local::now().date_naive();
    let overdue = task.is_overdue(today);
    let progress = (task.status == TaskStatus::InProgress).then_some(task.progress).flatten();
    let comments = task.comments.len();

    view! {
        <article class=if overdue { "task-card overdue" } else { "task-card" }>
            <div class="task-card-top">
                <span class=priority_class(task.priority)>{task.priority.label()}</span>
                {(!task.dependencies.is_empty()).then(|| view! {
                    <span class="badge" title="Waiting on other tasks">"⛓ " {task.dependencies.len()}</span>
                })}
            </div>
            <h4 class="task-title">{task.title.clone()}</h4>
            {(!task.description.is_empty()).then(|| view! {
                <p class="task-description">{task.description.clone()}</p>
            })}
            {progress.map(|p| view! {
                <div class="progress-bar"><div class="progress-fill" style=format!("width: {}%", p)></div></div>
            })}
            <div class="task-tags">
                {task.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
            </div>
            <footer class="task-card-footer">
                <span class="assignee">{task.assigned_to.clone()}</span>
                <span class=if overdue { "due overdue" } else { "due" }>{task.due_date.clone()}</span>
                {(comments > 0).then(|| view! { <span class="comments">"💬 " {comments}</span> })}
            </footer>
            {task.completed_at.clone().map(|at| view! { <p class="completed-at">"Completed " {at}</p> })}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_classes_are_distinct() {
        let classes: Vec<&str> = Priority::ALL.into_iter().map(priority_class).collect();
        assert_eq!(classes, vec!["badge priority-high", "badge priority-medium", "badge priority-low"]);
    }
}

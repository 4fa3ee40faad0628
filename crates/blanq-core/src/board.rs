//! Task Board
//!
//! The collaborative to-do board keeps one ordered column per `TaskStatus`.
//! Dragging a card between slots is the only structural transition: the card
//! leaves its source column, takes the destination column's status and lands
//! at the reported index. Any column may follow any other.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Comment, DomainError, DomainResult, RecordId, Task, TaskStatus, TASK_TIMESTAMP_FORMAT};
use crate::query::{RecordFilter, TaskFilter};

/// A position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub column: TaskStatus,
    pub index: usize,
}

impl Slot {
    pub fn new(column: TaskStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// A finished drag reported by the drag-and-drop layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub task_id: RecordId,
    pub source: Slot,
    /// `None` when the card was dropped outside every column
    pub destination: Option<Slot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Ignored,
    Moved,
}

/// Summary numbers shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub yours: usize,
    pub partner: usize,
    pub overdue: usize,
}

pub const OWNER: &str = "You";
pub const PARTNER: &str = "Business Partner";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskBoard {
    columns: [Vec<Task>; 3],
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket tasks by status, keeping their relative order
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            board.columns[task.status.index()].push(task);
        }
        board
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        &self.columns[status.index()]
    }

    /// Every task, column by column
    pub fn all(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: RecordId) -> Option<&Task> {
        self.all().find(|t| t.id == id)
    }

    fn locate(&self, id: RecordId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(c, tasks)| tasks.iter().position(|t| t.id == id).map(|i| (c, i)))
    }

    /// Move a card according to a finished drag.
    ///
    /// Drops outside the board and drops back onto the source slot are
    /// ignored. The destination index counts positions after the card has
    /// left its source column and is clamped to the column length.
    pub fn apply_drag(&mut self, event: DragEvent, now: NaiveDateTime) -> DragOutcome {
        let Some(destination) = event.destination else {
            return DragOutcome::Ignored;
        };
        if destination == event.source {
            return DragOutcome::Ignored;
        }

        let source = &mut self.columns[event.source.column.index()];
        let Some(position) = source.iter().position(|t| t.id == event.task_id) else {
            log::warn!("drag of unknown task {} from {}", event.task_id, event.source.column.as_str());
            return DragOutcome::Ignored;
        };
        let mut task = source.remove(position);

        task.status = destination.column;
        if destination.column == TaskStatus::Completed {
            task.stamp_completed(now);
        }

        let target = &mut self.columns[destination.column.index()];
        let index = destination.index.min(target.len());
        target.insert(index, task);
        log::debug!(
            "task {} moved to {}[{}]",
            event.task_id,
            destination.column.as_str(),
            index
        );
        DragOutcome::Moved
    }

    /// Translate a drop position inside a filtered column into a position
    /// in the full column.
    ///
    /// `visible_ids` are the cards shown in `column`, in order. Both lists
    /// are taken without the dragged card, matching how `apply_drag` counts
    /// destination indices. Dropping before visible card `k` lands right
    /// before it; dropping past the last visible card lands right after it.
    pub fn resolve_index(
        &self,
        column: TaskStatus,
        visible_ids: &[RecordId],
        visible_index: usize,
        dragged: RecordId,
    ) -> usize {
        let full: Vec<RecordId> = self
            .column(column)
            .iter()
            .map(|t| t.id)
            .filter(|id| *id != dragged)
            .collect();
        let visible: Vec<RecordId> = visible_ids.iter().copied().filter(|id| *id != dragged).collect();

        let position_of = |id: RecordId| full.iter().position(|f| *f == id);
        match visible.get(visible_index) {
            Some(id) => position_of(*id).unwrap_or(full.len()),
            None => visible
                .last()
                .and_then(|id| position_of(*id))
                .map_or(full.len(), |i| i + 1),
        }
    }

    /// Append a new task to its status column; returns the stored copy
    pub fn add(&mut self, mut task: Task, now: NaiveDateTime) -> Task {
        task.id = self.all().map(|t| t.id).max().unwrap_or(0) + 1;
        task.created_at = now.format(TASK_TIMESTAMP_FORMAT).to_string();
        task.comments.clear();
        task.dependencies.clear();
        if task.status == TaskStatus::Completed {
            task.stamp_completed(now);
        }
        self.columns[task.status.index()].push(task.clone());
        task
    }

    /// Replace a task, moving it to the end of its (possibly new) column
    pub fn update(&mut self, mut task: Task, now: NaiveDateTime) -> DomainResult<Task> {
        let (column, index) = self
            .locate(task.id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", task.id)))?;
        let previous = self.columns[column].remove(index);

        if task.completed_at.is_none() {
            task.completed_at = previous.completed_at;
        }
        task.updated_at = Some(now.format(TASK_TIMESTAMP_FORMAT).to_string());
        if task.status == TaskStatus::Completed {
            task.stamp_completed(now);
        }
        self.columns[task.status.index()].push(task.clone());
        Ok(task)
    }

    pub fn remove(&mut self, id: RecordId) -> DomainResult<Task> {
        let (column, index) = self
            .locate(id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", id)))?;
        Ok(self.columns[column].remove(index))
    }

    pub fn add_comment(
        &mut self,
        task_id: RecordId,
        author: &str,
        text: &str,
        now: NaiveDateTime,
    ) -> DomainResult<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput("comment is empty".to_string()));
        }
        let (column, index) = self
            .locate(task_id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?;
        let task = &mut self.columns[column][index];
        let comment = Comment {
            id: task.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            author: author.to_string(),
            text: text.to_string(),
            timestamp: now.format(TASK_TIMESTAMP_FORMAT).to_string(),
        };
        task.comments.push(comment.clone());
        Ok(comment)
    }

    /// Columns with `filter` applied, indexed by `TaskStatus::index`
    pub fn filtered(&self, filter: &TaskFilter) -> [Vec<Task>; 3] {
        self.columns
            .clone()
            .map(|column| column.into_iter().filter(|t| filter.matches(t)).collect())
    }

    pub fn counts(&self, today: NaiveDate) -> TaskCounts {
        TaskCounts {
            total: self.len(),
            todo: self.column(TaskStatus::Todo).len(),
            in_progress: self.column(TaskStatus::InProgress).len(),
            completed: self.column(TaskStatus::Completed).len(),
            yours: self.all().filter(|t| t.assigned_to == OWNER).count(),
            partner: self.all().filter(|t| t.assigned_to == PARTNER).count(),
            overdue: self.all().filter(|t| t.is_overdue(today)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TASK_TIMESTAMP_FORMAT).unwrap()
    }

    fn task(id: RecordId, status: TaskStatus) -> Task {
        Task { id, status, title: format!("Task {}", id), ..Default::default() }
    }

    fn board() -> TaskBoard {
        TaskBoard::from_tasks(vec![
            task(1, TaskStatus::Todo),
            task(2, TaskStatus::Todo),
            task(3, TaskStatus::Todo),
            task(4, TaskStatus::InProgress),
            task(5, TaskStatus::InProgress),
            task(6, TaskStatus::Completed),
        ])
    }

    fn ids(board: &TaskBoard, status: TaskStatus) -> Vec<RecordId> {
        board.column(status).iter().map(|t| t.id).collect()
    }

    fn drag(task_id: RecordId, from: (TaskStatus, usize), to: Option<(TaskStatus, usize)>) -> DragEvent {
        DragEvent {
            task_id,
            source: Slot::new(from.0, from.1),
            destination: to.map(|(c, i)| Slot::new(c, i)),
        }
    }

    #[test]
    fn test_drag_between_columns() {
        let mut board = board();
        let outcome = board.apply_drag(
            drag(2, (TaskStatus::Todo, 1), Some((TaskStatus::InProgress, 1))),
            at("2024-09-05 10:00"),
        );
        assert_eq!(outcome, DragOutcome::Moved);
        assert_eq!(ids(&board, TaskStatus::Todo), vec![1, 3]);
        assert_eq!(ids(&board, TaskStatus::InProgress), vec![4, 2, 5]);
        assert_eq!(board.find(2).unwrap().status, TaskStatus::InProgress);
        assert!(board.find(2).unwrap().completed_at.is_none());
    }

    #[test]
    fn test_reorder_within_column() {
        let mut board = board();
        board.apply_drag(drag(1, (TaskStatus::Todo, 0), Some((TaskStatus::Todo, 2))), at("2024-09-05 10:00"));
        assert_eq!(ids(&board, TaskStatus::Todo), vec![2, 3, 1]);
        assert_eq!(board.find(1).unwrap().status, TaskStatus::Todo);
    }

    #[test]
    fn test_noop_drops_are_ignored() {
        let mut board = board();
        let before = board.clone();
        let now = at("2024-09-05 10:00");
        assert_eq!(board.apply_drag(drag(1, (TaskStatus::Todo, 0), None), now), DragOutcome::Ignored);
        assert_eq!(
            board.apply_drag(drag(1, (TaskStatus::Todo, 0), Some((TaskStatus::Todo, 0))), now),
            DragOutcome::Ignored
        );
        assert_eq!(
            board.apply_drag(drag(99, (TaskStatus::Todo, 0), Some((TaskStatus::Completed, 0))), now),
            DragOutcome::Ignored
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_completion_is_stamped_once() {
        let mut board = board();
        board.apply_drag(
            drag(4, (TaskStatus::InProgress, 0), Some((TaskStatus::Completed, 0))),
            at("2024-09-05 10:00"),
        );
        assert_eq!(board.find(4).unwrap().completed_at.as_deref(), Some("2024-09-05 10:00"));

        // back out and in again keeps the first stamp
        board.apply_drag(drag(4, (TaskStatus::Completed, 0), Some((TaskStatus::Todo, 0))), at("2024-09-06 09:00"));
        assert_eq!(board.find(4).unwrap().status, TaskStatus::Todo);
        board.apply_drag(drag(4, (TaskStatus::Todo, 0), Some((TaskStatus::Completed, 1))), at("2024-09-07 09:00"));
        assert_eq!(board.find(4).unwrap().completed_at.as_deref(), Some("2024-09-05 10:00"));
        assert_eq!(ids(&board, TaskStatus::Completed), vec![6, 4]);
    }

    #[test]
    fn test_destination_index_is_clamped() {
        let mut board = board();
        board.apply_drag(drag(1, (TaskStatus::Todo, 0), Some((TaskStatus::Completed, 40))), at("2024-09-05 10:00"));
        assert_eq!(ids(&board, TaskStatus::Completed), vec![6, 1]);
    }

    #[test]
    fn test_drag_preserves_task_count() {
        let mut board = board();
        let now = at("2024-09-05 10:00");
        board.apply_drag(drag(3, (TaskStatus::Todo, 2), Some((TaskStatus::InProgress, 0))), now);
        board.apply_drag(drag(5, (TaskStatus::InProgress, 2), Some((TaskStatus::Todo, 0))), now);
        assert_eq!(board.len(), 6);
        for status in TaskStatus::ALL {
            assert!(board.column(status).iter().all(|t| t.status == status));
        }
    }

    #[test]
    fn test_resolve_index_in_filtered_view() {
        let board = board();
        // only tasks 1 and 3 are visible in the todo column
        assert_eq!(board.resolve_index(TaskStatus::Todo, &[1, 3], 1, 99), 2);
        assert_eq!(board.resolve_index(TaskStatus::Todo, &[1, 3], 2, 99), 3);
        assert_eq!(board.resolve_index(TaskStatus::Todo, &[1, 3], 0, 99), 0);
        assert_eq!(board.resolve_index(TaskStatus::Todo, &[], 0, 99), 3);
        // the dragged card is skipped on both sides
        assert_eq!(board.resolve_index(TaskStatus::Todo, &[1, 2, 3], 1, 1), 1);
    }

    #[test]
    fn test_add_assigns_next_id() {
        let mut board = board();
        let created = board.add(Task::new("Plan Q4", OWNER, "2024-09-30"), at("2024-09-05 10:00"));
        assert_eq!(created.id, 7);
        assert_eq!(created.created_at, "2024-09-05 10:00");
        assert_eq!(ids(&board, TaskStatus::Todo), vec![1, 2, 3, 7]);
        assert_eq!(TaskBoard::new().add(Task::default(), at("2024-09-05 10:00")).id, 1);
    }

    #[test]
    fn test_update_moves_to_end_of_new_column() {
        let mut board = board();
        let mut edited = board.find(1).unwrap().clone();
        edited.status = TaskStatus::Completed;
        let saved = board.update(edited, at("2024-09-05 10:00")).unwrap();
        assert_eq!(saved.updated_at.as_deref(), Some("2024-09-05 10:00"));
        assert_eq!(saved.completed_at.as_deref(), Some("2024-09-05 10:00"));
        assert_eq!(ids(&board, TaskStatus::Completed), vec![6, 1]);
        assert_eq!(ids(&board, TaskStatus::Todo), vec![2, 3]);

        assert!(matches!(board.update(task(42, TaskStatus::Todo), at("2024-09-05 10:00")), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_remove_and_comment() {
        let mut board = board();
        let comment = board.add_comment(5, PARTNER, "  Include Q3 metrics ", at("2024-09-01 11:20")).unwrap();
        assert_eq!(comment.id, 1);
        assert_eq!(comment.text, "Include Q3 metrics");
        assert_eq!(board.find(5).unwrap().comments.len(), 1);
        assert!(board.add_comment(5, OWNER, "   ", at("2024-09-01 11:20")).is_err());

        assert_eq!(board.remove(5).unwrap().id, 5);
        assert!(board.find(5).is_none());
        assert!(board.remove(5).is_err());
    }

    #[test]
    fn test_counts() {
        let mut tasks = vec![
            Task::new("a", OWNER, "2024-09-01"),
            Task::new("b", PARTNER, "2024-09-20"),
            Task::new("c", OWNER, "2024-08-01"),
        ];
        tasks[2].status = TaskStatus::Completed;
        for (i, t) in tasks.iter_mut().enumerate() {
            t.id = i as RecordId + 1;
        }
        let board = TaskBoard::from_tasks(tasks);
        let counts = board.counts(NaiveDate::from_ymd_opt(2024, 9, 10).unwrap());
        assert_eq!(
            counts,
            TaskCounts { total: 3, todo: 2, in_progress: 0, completed: 1, yours: 2, partner: 1, overdue: 1 }
        );
    }

    #[test]
    fn test_filtered_keeps_column_order() {
        let mut tasks = vec![
            Task::new("Review reports", OWNER, "2024-09-10"),
            Task::new("Update contracts", PARTNER, "2024-09-12"),
            Task::new("Plan marketing", OWNER, "2024-09-15"),
        ];
        for (i, t) in tasks.iter_mut().enumerate() {
            t.id = i as RecordId + 1;
        }
        let board = TaskBoard::from_tasks(tasks);
        let filter = TaskFilter { assigned_to: OWNER.into(), ..Default::default() };
        let view = board.filtered(&filter);
        let todo: Vec<RecordId> = view[TaskStatus::Todo.index()].iter().map(|t| t.id).collect();
        assert_eq!(todo, vec![1, 3]);
        assert!(view[TaskStatus::Completed.index()].is_empty());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::datetime::due_date_serde;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,

    pub task_name: String,

    #[serde(default)]
    pub task_description: String,

    #[serde(with = "due_date_serde")]
    pub due_date: DateTime<Utc>,

    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    #[must_use]
    pub fn toggled(&self) -> Self {
        let mut flipped = self.clone();
        flipped.is_completed = !flipped.is_completed;
        flipped
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub task_name: String,

    #[serde(default)]
    pub task_description: String,

    #[serde(with = "due_date_serde")]
    pub due_date: DateTime<Utc>,

    #[serde(default)]
    pub is_completed: bool,
}

impl TaskDraft {
    pub fn new(task_name: String, task_description: String, due_date: DateTime<Utc>) -> Self {
        Self {
            task_name,
            task_description,
            due_date,
            is_completed: false,
        }
    }
}

// In-memory task collection for the current user. Mutations are
// confirm-then-apply: callers persist remotely first and feed the
// server-confirmed record back in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn replace_all(&mut self, fetched: Vec<Task>) {
        tracing::debug!(total = fetched.len(), "replacing task collection");
        self.tasks = fetched;
    }

    pub fn apply_created(&mut self, confirmed: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|task| task.id == confirmed.id) {
            // The server answered with an id we already hold; trust its record.
            tracing::warn!(id = confirmed.id, "created task id already present, replacing");
            *existing = confirmed;
            return;
        }
        self.tasks.push(confirmed);
    }

    pub fn apply_updated(&mut self, confirmed: Task) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == confirmed.id) {
            Some(existing) => {
                *existing = confirmed;
                true
            }
            None => {
                tracing::warn!(id = confirmed.id, "updated task not in local collection");
                false
            }
        }
    }

    pub fn apply_removed(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        before != self.tasks.len()
    }

    // Flipped copy of the matching record, for persisting. The local
    // collection stays untouched until `apply_updated` runs.
    #[must_use]
    pub fn toggled(&self, id: u64) -> Option<Task> {
        self.get(id).map(Task::toggled)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{Task, TaskDraft, TaskList};

    fn task(id: u64, name: &str, completed: bool) -> Task {
        Task {
            id,
            task_name: name.to_string(),
            task_description: String::new(),
            due_date: Utc
                .with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
                .single()
                .expect("valid due"),
            is_completed: completed,
        }
    }

    fn seeded() -> TaskList {
        let mut list = TaskList::new();
        list.replace_all(vec![
            task(1, "groceries", false),
            task(2, "taxes", true),
            task(3, "dentist", false),
        ]);
        list
    }

    #[test]
    fn wire_shape_uses_camel_case_and_millisecond_zulu() {
        let json = serde_json::to_value(task(7, "groceries", false)).expect("serialize task");
        assert_eq!(json["id"], 7);
        assert_eq!(json["taskName"], "groceries");
        assert_eq!(json["taskDescription"], "");
        assert_eq!(json["dueDate"], "2024-01-01T10:00:00.000Z");
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn deserializes_server_payload_without_offset() {
        let parsed: Task = serde_json::from_str(
            r#"{"id":4,"taskName":"A","taskDescription":"","dueDate":"2024-01-01T10:00:00","isCompleted":false}"#,
        )
        .expect("deserialize task");
        assert_eq!(parsed, task(4, "A", false));
    }

    #[test]
    fn draft_defaults_to_not_completed() {
        let due = Utc
            .with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
            .single()
            .expect("valid due");
        let draft = TaskDraft::new("A".to_string(), String::new(), due);
        assert!(!draft.is_completed);

        let json = serde_json::to_value(&draft).expect("serialize draft");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn apply_created_appends_one_record() {
        let mut list = seeded();
        list.apply_created(task(4, "new", false));
        assert_eq!(list.len(), 4);
        assert_eq!(list.tasks()[3].task_name, "new");
        assert!(!list.tasks()[3].is_completed);
    }

    #[test]
    fn apply_updated_preserves_length_and_order() {
        let mut list = seeded();
        let mut changed = task(2, "taxes, filed", true);
        changed.task_description = "done early".to_string();

        assert!(list.apply_updated(changed));
        assert_eq!(list.len(), 3);
        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(list.tasks()[1].task_name, "taxes, filed");
        assert_eq!(list.tasks()[0].task_name, "groceries");
        assert_eq!(list.tasks()[2].task_name, "dentist");
    }

    #[test]
    fn apply_updated_without_match_changes_nothing() {
        let mut list = seeded();
        assert!(!list.apply_updated(task(99, "ghost", false)));
        assert_eq!(list, seeded());
    }

    #[test]
    fn apply_removed_removes_exactly_one() {
        let mut list = seeded();
        assert!(list.apply_removed(2));
        assert_eq!(list.len(), 2);
        assert!(list.get(2).is_none());

        assert!(!list.apply_removed(2));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn toggled_leaves_collection_untouched() {
        let list = seeded();
        let flipped = list.toggled(1).expect("task 1 exists");
        assert!(flipped.is_completed);
        assert!(!list.get(1).expect("task 1 exists").is_completed);

        // A failed persist means `apply_updated` never runs; two failed
        // attempts in a row leave the record exactly as fetched.
        let flipped_again = list.toggled(1).expect("task 1 exists");
        assert_eq!(flipped, flipped_again);
        assert_eq!(list, seeded());
    }
}

// Task store: authoritative task list over a snapshot backend

use crate::filter::{CategoryFilter, StatusFilter};
use crate::snapshot::Snapshot;
use crate::task::{Category, Priority, Task, TaskId};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Derived counts over the task list.
///
/// `active + completed == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Authoritative owner of the task list.
///
/// Every successful mutation writes the whole list back through the snapshot
/// backend. Persistence is best-effort: a failed save is logged and the
/// in-memory effect stands. Invalid input (blank text, unknown id) makes the
/// operation a reported no-op, never an error.
pub struct TaskStore<S: Snapshot> {
    tasks: Vec<Task>,
    snapshot: S,
}

impl<S: Snapshot> TaskStore<S> {
    /// Open a store over the given snapshot backend.
    ///
    /// A backend that cannot be read starts the store empty rather than
    /// failing.
    pub fn open(snapshot: S) -> Self {
        let tasks = match snapshot.load() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(error = ?e, "Failed to load snapshot, starting empty");
                Vec::new()
            }
        };
        info!(count = tasks.len(), "Task store opened");
        Self { tasks, snapshot }
    }

    /// Append a new task and return it.
    ///
    /// Blank text (empty after trimming) is a no-op returning `None`. The
    /// text is stored as given.
    pub fn add(
        &mut self,
        text: &str,
        priority: Priority,
        category: Category,
        due_date: Option<NaiveDate>,
    ) -> Option<&Task> {
        if text.trim().is_empty() {
            debug!("Ignoring add with blank text");
            return None;
        }

        let task = Task::new(text.to_string(), priority, category, due_date);
        debug!(id = %task.id, "Adding task");
        self.tasks.push(task);
        self.persist();
        self.tasks.last()
    }

    /// Flip the completion flag of the matching task.
    ///
    /// Returns false (no mutation) if the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "Ignoring toggle for unknown task");
            return false;
        };

        task.completed = !task.completed;
        self.persist();
        true
    }

    /// Replace the text of the matching task, leaving every other field
    /// untouched.
    ///
    /// Blank text or an unknown id is a no-op returning false.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> bool {
        if new_text.trim().is_empty() {
            debug!(%id, "Ignoring edit with blank text");
            return false;
        }

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "Ignoring edit for unknown task");
            return false;
        };

        task.text = new_text.to_string();
        self.persist();
        true
    }

    /// Remove the matching task. Returns false if the id is unknown.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);

        if self.tasks.len() == before {
            debug!(%id, "Ignoring remove for unknown task");
            return false;
        }

        self.persist();
        true
    }

    /// Remove every completed task and return how many were removed.
    ///
    /// Idempotent; persists even when nothing was removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();

        debug!(removed, "Cleared completed tasks");
        self.persist();
        removed
    }

    /// Tasks satisfying both filters, in list order.
    ///
    /// Pure and restartable: the same filters over an unchanged list yield
    /// an identical sequence.
    pub fn filter(
        &self,
        status: StatusFilter,
        category: CategoryFilter,
    ) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |t| status.matches(t) && category.matches(t))
    }

    pub fn stats(&self) -> Stats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The full list in append order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.snapshot.save(&self.tasks) {
            warn!(error = ?e, "Failed to persist snapshot, in-memory state kept");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FileSnapshot;
    use eyre::eyre;
    use std::path::Path;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn open_store(dir: &Path) -> TaskStore<FileSnapshot> {
        TaskStore::open(FileSnapshot::new(dir.join("tasks.json")))
    }

    #[test]
    fn test_add_appends_uncompleted_task() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        assert!(store.add("First", Priority::Medium, Category::Personal, None).is_some());
        let added = store
            .add("Second", Priority::High, Category::Work, None)
            .cloned()
            .unwrap();

        assert_eq!(store.stats().total, 2);
        assert!(!added.completed);
        assert_eq!(added.priority, Priority::High);
        assert_eq!(added.category, Category::Work);
        // Appended at the end, not re-sorted
        assert_eq!(store.tasks().last().unwrap().id, added.id);
    }

    #[test]
    fn test_add_blank_text_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        assert!(store.add("", Priority::Medium, Category::Personal, None).is_none());
        assert!(store.add("   ", Priority::Medium, Category::Personal, None).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_is_involution() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        let id = store
            .add("Task", Priority::Medium, Category::Personal, None)
            .unwrap()
            .id;

        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().completed);

        assert!(store.toggle(id));
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        assert!(store.add("Task", Priority::Medium, Category::Personal, None).is_some());
        let before = store.tasks().to_vec();

        assert!(!store.toggle(Uuid::now_v7()));
        assert_eq!(store.tasks(), before);
    }

    #[test]
    fn test_edit_replaces_text_only() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        let original = store
            .add("Old text", Priority::High, Category::Work, None)
            .cloned()
            .unwrap();

        assert!(store.edit(original.id, "New text"));

        let edited = store.get(original.id).unwrap();
        assert_eq!(edited.text, "New text");
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.completed, original.completed);
        assert_eq!(edited.priority, original.priority);
        assert_eq!(edited.category, original.category);
        assert_eq!(edited.due_date, original.due_date);
        assert_eq!(edited.created_at, original.created_at);
    }

    #[test]
    fn test_edit_blank_text_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        let id = store
            .add("Keep me", Priority::Medium, Category::Personal, None)
            .unwrap()
            .id;

        assert!(!store.edit(id, ""));
        assert!(!store.edit(id, "  \t "));
        assert_eq!(store.get(id).unwrap().text, "Keep me");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        assert!(store.add("Task", Priority::Medium, Category::Personal, None).is_some());
        assert!(!store.edit(Uuid::now_v7(), "New text"));
        assert_eq!(store.tasks()[0].text, "Task");
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        let first = store
            .add("First", Priority::Medium, Category::Personal, None)
            .unwrap()
            .id;
        let second = store
            .add("Second", Priority::Medium, Category::Personal, None)
            .unwrap()
            .id;

        assert!(store.remove(first));
        assert_eq!(store.len(), 1);
        assert!(store.get(first).is_none());
        assert!(store.get(second).is_some());

        // Unknown id leaves the list unchanged
        assert!(!store.remove(first));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_completed_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        let a = store.add("a", Priority::Medium, Category::Personal, None).unwrap().id;
        assert!(store.add("b", Priority::Medium, Category::Personal, None).is_some());
        let c = store.add("c", Priority::Medium, Category::Personal, None).unwrap().id;
        store.toggle(a);
        store.toggle(c);

        assert_eq!(store.clear_completed(), 2);
        assert!(store.tasks().iter().all(|t| !t.completed));
        assert_eq!(store.len(), 1);

        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_stats_invariant() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        let mut ids = Vec::new();
        for i in 0..5 {
            let id = store
                .add(&format!("task {i}"), Priority::Medium, Category::Personal, None)
                .unwrap()
                .id;
            ids.push(id);
        }
        store.toggle(ids[1]);
        store.toggle(ids[3]);

        let stats = store.stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.active + stats.completed, stats.total);
    }

    #[test]
    fn test_filter_all_returns_full_list_in_order() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        for text in ["one", "two", "three"] {
            assert!(store.add(text, Priority::Medium, Category::Personal, None).is_some());
        }

        let filtered: Vec<&Task> = store
            .filter(StatusFilter::All, CategoryFilter::All)
            .collect();
        let texts: Vec<&str> = filtered.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn test_filter_combines_status_and_category() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        let report = store.add("report", Priority::High, Category::Work, None).unwrap().id;
        assert!(store.add("standup", Priority::Low, Category::Work, None).is_some());
        assert!(store.add("groceries", Priority::Medium, Category::Shopping, None).is_some());
        store.toggle(report);

        let active_work: Vec<&Task> = store
            .filter(StatusFilter::Active, CategoryFilter::Only(Category::Work))
            .collect();
        assert_eq!(active_work.len(), 1);
        assert_eq!(active_work[0].text, "standup");

        let completed: Vec<&Task> = store
            .filter(StatusFilter::Completed, CategoryFilter::All)
            .collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, report);
    }

    #[test]
    fn test_filter_is_restartable() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        for text in ["one", "two", "three"] {
            assert!(store.add(text, Priority::Medium, Category::Work, None).is_some());
        }

        let first: Vec<TaskId> = store
            .filter(StatusFilter::Active, CategoryFilter::Only(Category::Work))
            .map(|t| t.id)
            .collect();
        let second: Vec<TaskId> = store
            .filter(StatusFilter::Active, CategoryFilter::Only(Category::Work))
            .map(|t| t.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let temp = TempDir::new().unwrap();

        let id = {
            let mut store = open_store(temp.path());
            let id = store
                .add("Persisted", Priority::High, Category::Work, None)
                .unwrap()
                .id;
            store.toggle(id);
            id
        };

        let reopened = open_store(temp.path());
        assert_eq!(reopened.len(), 1);
        let task = reopened.get(id).unwrap();
        assert_eq!(task.text, "Persisted");
        assert!(task.completed);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(temp.path());

        let id = store
            .add("Buy milk", Priority::Low, Category::Shopping, None)
            .unwrap()
            .id;
        let stats = store.stats();
        assert_eq!((stats.total, stats.active, stats.completed), (1, 1, 0));

        store.toggle(id);
        let stats = store.stats();
        assert_eq!((stats.active, stats.completed), (0, 1));

        store.clear_completed();
        assert_eq!(store.stats().total, 0);
    }

    // Backend whose medium is never available
    struct UnavailableSnapshot;

    impl Snapshot for UnavailableSnapshot {
        fn load(&self) -> eyre::Result<Vec<Task>> {
            Err(eyre!("medium unavailable"))
        }

        fn save(&self, _tasks: &[Task]) -> eyre::Result<()> {
            Err(eyre!("medium unavailable"))
        }
    }

    #[test]
    fn test_unavailable_medium_never_blocks_mutations() {
        let mut store = TaskStore::open(UnavailableSnapshot);
        assert!(store.is_empty());

        let added = store.add("Still works", Priority::Medium, Category::Personal, None);
        assert!(added.is_some());
        assert_eq!(store.len(), 1);
    }
}

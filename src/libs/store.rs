//! In-memory task store.
//!
//! The store maps bucket names to ordered task lists and owns the per-bucket
//! id counters. It knows nothing about files; persistence and autosave are
//! layered on top by [`crate::libs::session::Session`].
//!
//! ## Id assignment
//!
//! Each bucket carries a `next_id` counter. New tasks take the counter value
//! and bump it, so ids within a session only ever grow and are never reused.
//! The counter always stays above the largest id present in the bucket.
//!
//! ## Lookups
//!
//! Rename and status changes scan the bucket linearly for the first task with
//! the requested id. A missing bucket or id is not an error: the operation
//! reports that nothing matched and leaves the store untouched.

use super::bucket::{self, CANONICAL_BUCKETS};
use super::task::{Task, TaskStatus};

/// A named, ordered task list with its id counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    pub tasks: Vec<Task>,
    pub next_id: u32,
}

impl Bucket {
    pub fn new(name: &str) -> Self {
        Bucket {
            name: name.to_string(),
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Builds a bucket from loaded tasks, deriving the counter from the
    /// largest id present (`0` when empty).
    pub fn with_tasks(name: &str, tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|task| task.id.saturating_add(1)).max().unwrap_or(0);
        Bucket {
            name: name.to_string(),
            tasks,
            next_id,
        }
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    buckets: Vec<Bucket>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates a store holding the eight canonical buckets, all empty.
    pub fn new() -> Self {
        TaskStore {
            buckets: CANONICAL_BUCKETS.iter().map(|name| Bucket::new(name)).collect(),
        }
    }

    /// Assembles a store from decoded buckets.
    ///
    /// Canonical buckets missing from `buckets` are created empty, and the
    /// result is ordered canonical-first, followed by any extra buckets in
    /// the order given. Buckets sharing a name are merged.
    pub fn from_buckets(buckets: Vec<Bucket>) -> Self {
        let mut store = TaskStore::new();
        for incoming in buckets {
            let slot = store.bucket_entry(&incoming.name);
            slot.tasks.extend(incoming.tasks);
            slot.next_id = slot.next_id.max(incoming.next_id);
        }
        store
    }

    /// Appends a task to `bucket_name`, creating the bucket if it is unknown.
    ///
    /// Blank names go to `general`. Returns a copy of the created task.
    pub fn add(&mut self, bucket_name: &str, name: &str, status: TaskStatus) -> Task {
        let bucket = self.bucket_entry(&bucket::normalize(bucket_name));
        let task = Task::new(bucket.next_id, name, status);
        bucket.tasks.push(task.clone());
        bucket.next_id = bucket.next_id.saturating_add(1);
        task
    }

    /// Renames the first task with `id`. Returns whether a task matched.
    pub fn rename(&mut self, bucket_name: &str, id: u32, new_name: &str) -> bool {
        match self.find_task_mut(bucket_name, id) {
            Some(task) => {
                task.name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets the status of the first task with `id`. Returns whether a task matched.
    pub fn set_status(&mut self, bucket_name: &str, id: u32, status: TaskStatus) -> bool {
        match self.find_task_mut(bucket_name, id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Tasks of one bucket in list order. Unknown buckets yield an empty slice.
    pub fn list_bucket(&self, bucket_name: &str) -> &[Task] {
        self.bucket(bucket_name).map(|bucket| bucket.tasks.as_slice()).unwrap_or(&[])
    }

    /// Every bucket with its tasks, canonical buckets first.
    pub fn list_all(&self) -> Vec<(&str, &[Task])> {
        self.buckets.iter().map(|bucket| (bucket.name.as_str(), bucket.tasks.as_slice())).collect()
    }

    pub fn bucket(&self, bucket_name: &str) -> Option<&Bucket> {
        let key = bucket::lookup_key(bucket_name);
        self.buckets.iter().find(|bucket| bucket.name == key)
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Next id that `add` would assign in `bucket_name`.
    pub fn next_id(&self, bucket_name: &str) -> u32 {
        self.bucket(bucket_name).map(|bucket| bucket.next_id).unwrap_or(0)
    }

    pub fn task_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.tasks.len()).sum()
    }

    fn find_task_mut(&mut self, bucket_name: &str, id: u32) -> Option<&mut Task> {
        let key = bucket::lookup_key(bucket_name);
        self.buckets.iter_mut().find(|bucket| bucket.name == key)?.find_mut(id)
    }

    fn bucket_entry(&mut self, key: &str) -> &mut Bucket {
        let index = match self.buckets.iter().position(|bucket| bucket.name == key) {
            Some(index) => index,
            None => {
                self.buckets.push(Bucket::new(key));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index]
    }
}

//! A working session: the task store plus the file it autosaves to.
//!
//! The session starts empty with no associated file. An explicit save or
//! load associates a path, and from then on every mutation that changes
//! state rewrites that file in the canonical format. Mutations that match
//! nothing (rename or status change of an unknown id) leave the file alone.
//!
//! File operations come in two flavours:
//!
//! - [`Session::save`] / [`Session::load`] return a typed [`StorageError`].
//! - [`Session::save_as`] / [`Session::load_from`] report the outcome to the
//!   user and return a plain `bool`, which is what the command layer uses.

use super::codec;
use super::error::StorageError;
use super::messages::Message;
use super::store::TaskStore;
use super::task::{Task, TaskStatus};
use crate::{msg_error, msg_success};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct Session {
    store: TaskStore,
    current_file: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Path used for autosave, once a save or load has succeeded.
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Adds a pending task. Blank bucket names go to `general`.
    pub fn add(&mut self, bucket_name: &str, task_name: &str) -> Task {
        self.add_with_status(bucket_name, task_name, TaskStatus::Pending)
    }

    pub fn add_with_status(&mut self, bucket_name: &str, task_name: &str, status: TaskStatus) -> Task {
        let task = self.store.add(bucket_name, task_name, status);
        debug!(bucket = bucket_name, id = task.id, "task added");
        self.autosave();
        task
    }

    /// Renames a task. Returns `false`, without touching the file, when no
    /// task in the bucket has that id.
    pub fn rename(&mut self, bucket_name: &str, id: u32, new_name: &str) -> bool {
        let found = self.store.rename(bucket_name, id, new_name);
        if found {
            self.autosave();
        }
        found
    }

    pub fn set_status(&mut self, bucket_name: &str, id: u32, status: TaskStatus) -> bool {
        let found = self.store.set_status(bucket_name, id, status);
        if found {
            self.autosave();
        }
        found
    }

    pub fn mark_done(&mut self, bucket_name: &str, id: u32) -> bool {
        self.set_status(bucket_name, id, TaskStatus::Done)
    }

    pub fn mark_pending(&mut self, bucket_name: &str, id: u32) -> bool {
        self.set_status(bucket_name, id, TaskStatus::Pending)
    }

    pub fn view_one(&self, bucket_name: &str) -> &[Task] {
        self.store.list_bucket(bucket_name)
    }

    pub fn view_all(&self) -> Vec<(&str, &[Task])> {
        self.store.list_all()
    }

    /// Writes the canonical document to `path` and makes it the autosave target.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        write_store(&self.store, path)?;
        self.current_file = Some(path.to_path_buf());
        Ok(())
    }

    /// Replaces the store with the contents of `path` (either schema) and
    /// makes it the autosave target. On error the session is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StorageError::FileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        self.store = codec::from_json(&text)?;
        self.current_file = Some(path.to_path_buf());
        debug!(path = %path.display(), tasks = self.store.task_count(), "tasks loaded");
        Ok(())
    }

    /// Saves to `path`, reporting the outcome. Returns whether it succeeded.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.save(path) {
            Ok(()) => {
                msg_success!(Message::TasksSaved(path.display().to_string()));
                true
            }
            Err(error) => {
                msg_error!(Message::TasksSaveFailed(error.to_string()));
                false
            }
        }
    }

    /// Loads from `path`, reporting the outcome. Returns whether it succeeded.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.load(path) {
            Ok(()) => {
                msg_success!(Message::TasksLoaded(path.display().to_string()));
                true
            }
            Err(StorageError::FileNotFound(missing)) => {
                msg_error!(Message::TaskFileNotFound(missing.display().to_string()));
                false
            }
            Err(error) => {
                msg_error!(Message::TasksLoadFailed(error.to_string()));
                false
            }
        }
    }

    fn autosave(&self) {
        let Some(path) = self.current_file.as_deref() else {
            return;
        };
        match write_store(&self.store, path) {
            Ok(()) => debug!(path = %path.display(), "autosaved"),
            Err(error) => {
                warn!(path = %path.display(), %error, "autosave failed");
                msg_error!(Message::AutosaveFailed(error.to_string()));
            }
        }
    }
}

fn write_store(store: &TaskStore, path: &Path) -> Result<(), StorageError> {
    let json = codec::to_json(store)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "tasks written");
    Ok(())
}

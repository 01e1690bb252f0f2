//! JSON encoding of the task store.
//!
//! ## Canonical format
//!
//! The only format ever written. Keys are capitalized bucket names, values
//! are task lists without ids:
//!
//! ```json
//! {
//!   "Monday": [
//!     { "task": "Write report", "status": "Done" }
//!   ],
//!   "Tuesday": [],
//!   "General": []
//! }
//! ```
//!
//! ## Legacy format
//!
//! Older files wrapped the tasks under `daily_tasks`, keyed by lowercase
//! bucket name, with `{ "id", "name", "status" }` entries and a separate
//! `task_id` counter map. Those files are still readable; the counter map
//! is ignored and counters are rebuilt from the ids actually present.
//!
//! ## Decoding
//!
//! A parsed document is first classified into a [`Document`] variant and
//! then decoded by the routine for that variant. Decoding never fails:
//! wrongly typed values degrade to empty buckets or default fields, and
//! unusable entries are dropped with a warning.

use super::bucket::{self, CANONICAL_BUCKETS};
use super::store::{Bucket, TaskStore};
use super::task::{Task, TaskStatus};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

/// Top-level key that marks a legacy document.
pub const LEGACY_KEY: &str = "daily_tasks";

/// Borrowing view that serializes a store in the canonical format.
pub struct CanonicalView<'a>(pub &'a TaskStore);

#[derive(Serialize)]
struct CanonicalTaskOut<'a> {
    task: &'a str,
    status: TaskStatus,
}

impl Serialize for CanonicalView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let buckets = self.0.buckets();
        let mut map = serializer.serialize_map(Some(buckets.len()))?;
        for bucket in buckets {
            let tasks: Vec<CanonicalTaskOut<'_>> = bucket
                .tasks
                .iter()
                .map(|task| CanonicalTaskOut {
                    task: &task.name,
                    status: task.status,
                })
                .collect();
            map.serialize_entry(&bucket::capitalize(&bucket.name), &tasks)?;
        }
        map.end()
    }
}

/// Serializes the store as pretty-printed canonical JSON (2-space indent).
pub fn to_json(store: &TaskStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CanonicalView(store))
}

/// Parses JSON text and decodes it into a store.
///
/// Only syntax errors are reported; structural problems degrade gracefully.
pub fn from_json(text: &str) -> serde_json::Result<TaskStore> {
    let value: Value = serde_json::from_str(text)?;
    Ok(decode(value))
}

/// Shape of a parsed document, decided before any field is read.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Contents of the `daily_tasks` mapping. `None` when the key holds
    /// something other than a mapping.
    Legacy(Option<Map<String, Value>>),
    /// A mapping without `daily_tasks`.
    Canonical(Map<String, Value>),
    /// Anything that is not a JSON object.
    Malformed,
}

impl Document {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.remove(LEGACY_KEY) {
                Some(Value::Object(daily)) => Document::Legacy(Some(daily)),
                Some(_) => Document::Legacy(None),
                None => Document::Canonical(map),
            },
            _ => Document::Malformed,
        }
    }

    pub fn decode(self) -> TaskStore {
        match self {
            Document::Legacy(daily) => decode_legacy(daily.unwrap_or_default()),
            Document::Canonical(map) => decode_canonical(&map),
            Document::Malformed => {
                warn!("document is not a JSON object, loading empty buckets");
                TaskStore::new()
            }
        }
    }
}

pub fn decode(value: Value) -> TaskStore {
    Document::classify(value).decode()
}

#[derive(Deserialize)]
struct LegacyTaskIn {
    id: Option<Value>,
    name: Option<Value>,
    status: Option<Value>,
}

#[derive(Deserialize)]
struct CanonicalTaskIn {
    task: Option<Value>,
    name: Option<Value>,
    status: Option<Value>,
}

fn decode_legacy(daily: Map<String, Value>) -> TaskStore {
    let buckets = daily
        .into_iter()
        .map(|(key, entries)| {
            let name = bucket::normalize(&key);
            let tasks = entries_of(&name, entries)
                .into_iter()
                .enumerate()
                .filter_map(|(position, entry)| legacy_task(&name, position, entry))
                .collect();
            Bucket::with_tasks(&name, tasks)
        })
        .collect();

    TaskStore::from_buckets(buckets)
}

fn legacy_task(bucket_name: &str, position: usize, entry: Value) -> Option<Task> {
    if !entry.is_object() {
        warn!(bucket = bucket_name, position, "skipping legacy entry that is not an object");
        return None;
    }
    let fields: LegacyTaskIn = serde_json::from_value(entry).ok()?;

    let id = match fields.id {
        None | Some(Value::Null) => u32::try_from(position).ok()?,
        Some(raw) => match legacy_id(&raw) {
            Some(id) => id,
            None => {
                warn!(bucket = bucket_name, position, id = %raw, "skipping legacy entry with invalid id");
                return None;
            }
        },
    };
    let name = text_of(fields.name).unwrap_or_default();
    let status = status_of(bucket_name, fields.status);

    Some(Task { id, name, status })
}

/// Reads a stored id: an integer, an integral float such as `5.0`, or a
/// numeric string. `u32::MAX` is refused so the bucket counter can still
/// move past every loaded id.
fn legacy_id(raw: &Value) -> Option<u32> {
    let id = match raw {
        Value::Number(number) => match number.as_u64() {
            Some(id) => u32::try_from(id).ok()?,
            None => {
                let id = number.as_f64()?;
                if !id.is_finite() || id < 0.0 || id.fract() != 0.0 || id >= f64::from(u32::MAX) {
                    return None;
                }
                id as u32
            }
        },
        Value::String(text) => text.trim().parse().ok()?,
        _ => return None,
    };
    (id < u32::MAX).then_some(id)
}

fn decode_canonical(map: &Map<String, Value>) -> TaskStore {
    let buckets = CANONICAL_BUCKETS
        .iter()
        .map(|&name| {
            let entries = map
                .get(&bucket::capitalize(name))
                .or_else(|| map.get(name))
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new()));

            // Ids restart at zero: the canonical format carries none.
            let tasks = entries_of(name, entries)
                .into_iter()
                .zip(0u32..)
                .map(|(entry, id)| canonical_task(name, id, entry))
                .collect();
            Bucket::with_tasks(name, tasks)
        })
        .collect();

    TaskStore::from_buckets(buckets)
}

fn canonical_task(bucket_name: &str, id: u32, entry: Value) -> Task {
    let fields = match entry {
        Value::Object(_) => serde_json::from_value::<CanonicalTaskIn>(entry).ok(),
        _ => None,
    };

    match fields {
        Some(fields) => Task {
            id,
            name: text_of(fields.task).or_else(|| text_of(fields.name)).unwrap_or_default(),
            status: status_of(bucket_name, fields.status),
        },
        None => Task::new(id, "", TaskStatus::Pending),
    }
}

fn entries_of(bucket_name: &str, value: Value) -> Vec<Value> {
    match value {
        Value::Array(entries) => entries,
        Value::Null => Vec::new(),
        _ => {
            warn!(bucket = bucket_name, "bucket value is not an array, loading it empty");
            Vec::new()
        }
    }
}

fn text_of(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn status_of(bucket_name: &str, value: Option<Value>) -> TaskStatus {
    match value {
        None | Some(Value::Null) => TaskStatus::Pending,
        Some(Value::String(text)) => TaskStatus::parse(&text).unwrap_or_else(|| {
            warn!(bucket = bucket_name, status = %text, "unknown status, using Pending");
            TaskStatus::Pending
        }),
        Some(other) => {
            warn!(bucket = bucket_name, status = %other, "status is not a string, using Pending");
            TaskStatus::Pending
        }
    }
}

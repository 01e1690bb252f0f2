//! Console rendering of task listings.
//!
//! Plain listings follow a fixed line format, one task per line:
//!
//! ```text
//! Monday:
//!   0: Write report - Done
//!   1: Call the bank - Pending
//! Tuesday:
//! ```
//!
//! A single bucket is rendered without header or indentation. The table
//! variants draw the same data with `prettytable`.

use super::bucket::capitalize;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Lines for one bucket: `<id>: <name> - <status>`.
    pub fn bucket(tasks: &[Task]) -> String {
        tasks.iter().map(|task| format!("{}\n", task)).collect()
    }

    /// All buckets, each under a capitalized `Name:` header with indented tasks.
    pub fn all(buckets: &[(&str, &[Task])]) -> String {
        let mut out = String::new();
        for (name, tasks) in buckets {
            out.push_str(&format!("{}:\n", capitalize(name)));
            for task in tasks.iter() {
                out.push_str(&format!("  {}\n", task));
            }
        }
        out
    }

    pub fn bucket_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "TASK", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id, task.name, task.status]);
        }
        table
    }

    /// One table for every bucket, skipping empty ones.
    pub fn all_table(buckets: &[(&str, &[Task])]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["DAY", "ID", "TASK", "STATUS"]);
        for (name, tasks) in buckets {
            for task in tasks.iter() {
                table.add_row(row![capitalize(name), task.id, task.name, task.status]);
            }
        }
        table
    }
}

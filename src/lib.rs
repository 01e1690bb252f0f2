//! # Daytask
//!
//! A command-line utility for organizing short tasks by weekday, marking
//! them done, and keeping them in a JSON file.
//!
//! ## Features
//!
//! - **Weekday Buckets**: Tasks grouped under Monday..Sunday plus General
//! - **Status Tracking**: Mark tasks done or pending again
//! - **JSON Persistence**: Save and load, with autosave to the last used file
//! - **Legacy Files**: Older `daily_tasks` files are still readable
//! - **Interactive Shell**: Prompt-driven loop for quick editing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daytask::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;

//! Core library modules for the daytask application.
//!
//! ## Layers
//!
//! - **Domain**: [`task`], [`bucket`] and the in-memory [`store`]
//! - **Persistence**: [`codec`] for the JSON formats, [`session`] for the
//!   working file and autosave
//! - **Infrastructure**: [`config`], [`data_storage`], [`logging`],
//!   [`messages`] and [`view`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daytask::libs::session::Session;
//!
//! let mut session = Session::new();
//! session.add("monday", "Write report");
//! session.mark_done("monday", 0);
//! session.save_as("tasks.json");
//! ```

pub mod bucket;
pub mod codec;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod session;
pub mod store;
pub mod task;
pub mod view;

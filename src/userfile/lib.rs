//! # userfile
//!
//! Manages a list of user records kept as a single JSON array in a flat file.
//! Four operations are supported: add a user, list all users, find a user by
//! id, and remove a user by id.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses flags, installs logging, loads settings           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (api.rs) + Validator (validate.rs)              │
//! │  - Turns raw flags into a typed Request                     │
//! │  - Opens the file, runs the handler, renders the Outcome    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Handlers (commands/*.rs)                                   │
//! │  - Read, decode, scan, mutate, write back                   │
//! │  - Return an Outcome, never bytes for the terminal          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - Storage trait: read everything, overwrite everything     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes
//!
//! A duplicate add or a remove of an unknown id is not an error. Handlers
//! report it as [`commands::Outcome::AlreadyExists`] or
//! [`commands::Outcome::NotFound`], and the CLI prints a plain-text note on
//! stdout and exits successfully.
//!
//! ## Concurrency
//!
//! Every invocation reads the whole file, changes it in memory and writes it
//! back. Nothing is locked: concurrent invocations on the same file race and
//! the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: Dispatcher, the entry point for running an operation
//! - [`validate`]: Flag validation
//! - [`commands`]: One handler per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `User` record and its JSON encoding
//! - [`config`]: Settings file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;

//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact-book library** with a CLI client on top.
//! Everything from `api.rs` inward is plain Rust functions over plain Rust
//! types; the binary is thin glue.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (group labels → registry entries)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - Validates before the store ever sees a value             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SnapshotStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Whole Snapshots Only
//!
//! The store reads and writes the complete collection, never individual
//! records. Every mutating command saves a full snapshot before it returns,
//! so the data file always matches the last successful mutation. There is no
//! write-ahead log and no incremental persistence.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Library code never calls `std::process::exit` and never assumes a
//! terminal environment; status is carried out as `CmdMessage` values and
//! rendered (or not) by whatever client is driving. The same core could
//! serve a TUI or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    against `InMemoryStore`. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): Tests verifying dispatch and input normalization.
//! 3. **CLI** (`tests/`): Integration tests driving the real binary against a
//!    temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`book`]: The in-memory ordered collection ([`book::Phonebook`])
//! - [`model`]: Core data types (`Contact`, field bounds)
//! - [`validate`]: Phone and email syntax rules
//! - [`group`]: The per-run group registry
//! - [`query`]: Case-insensitive matching primitives
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod group;
pub mod model;
pub mod query;
pub mod store;
pub mod validate;

//! # Eduhist Architecture
//!
//! Eduhist is a **UI-agnostic library** for managing a user's education
//! history records — it happens to ship with a CLI client, but nothing in the
//! core assumes a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders entries, prompts for           │
//! │    confirmation before destructive operations               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: validate, encode attachments, mutate     │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/), Validator (validation.rs),                 │
//! │  Encoder (encoder.rs)                                       │
//! │  - EntryStore over an abstract StorageBackend               │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Submission Pipeline
//!
//! Adding or editing an entry always runs the same pipeline: the candidate
//! fields are validated ([`validation`]), pending file attachments are
//! encoded into self-contained documents ([`encoder`]), and only when both
//! have succeeded does the store get touched ([`store`]). A failure anywhere
//! leaves the store exactly as it was.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, store), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a desktop app, a web backend, or any
//! other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Validator, encoder, store**: thorough unit tests next to the logic.
//!    This is where the lion's share of testing lives.
//! 2. **Commands** (`commands/*.rs`): unit tests against `MemBackend`.
//! 3. **Integration** (`tests/`): the fs backend against real temp
//!    directories, and the binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The entry store, storage backends, and change subscriptions
//! - [`validation`]: Field and cross-field validation of candidate entries
//! - [`encoder`]: File-to-document encoding (base64 data URLs)
//! - [`model`]: Core data types (`EducationEntry`, `EducationDocument`, ...)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod encoder;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;

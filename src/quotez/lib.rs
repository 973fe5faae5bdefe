//! # Quotez Architecture
//!
//! Quotez is a small quote book: it reads one-line commands such as
//! `quote uwu "Let us go"`, renders the quote in the requested variant and
//! keeps it in a duplicate-free, insertion-ordered collection.
//!
//! Like any good CLI citizen, the core is a library with no I/O assumptions;
//! the binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the session, prints results       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses command lines into intents (parser.rs)            │
//! │  - Dispatches to commands, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Runs the variant engine (variant.rs)                     │
//! │  - Commits to the store, turns duplicates into messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `QuoteStore` trait, `InMemoryStore`                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors and Messages
//!
//! Fatal problems (bad grammar, too long, nothing to transform) come back as
//! [`error::QuotezError`] and abort the command. Non-fatal ones (a duplicate,
//! a partially transformed uwu quote) complete the command and travel as
//! [`api::CmdMessage`]s on the result.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`parser`]: Command grammar
//! - [`variant`]: Uwu and pig-latin transformations
//! - [`commands`]: Business logic for `add` and `list`
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: `Quote` and `QuoteVariant`
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
pub mod variant;

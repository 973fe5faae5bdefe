//! # CLI Behavior
//!
//! This is **one possible UI client** for quotez, not the application itself.
//! It is the only place that knows about terminal I/O and exit codes.
//!
//! ## Sessions
//!
//! The store lives in memory, so one invocation is one session: every
//! positional argument is a full command line, run in order against the same
//! collection.
//!
//! ```text
//! quotez 'quote "Hello world"' 'quote uwu "Let us go"' 'quote list'
//! ```
//!
//! With no arguments, command lines are read from stdin, one per line.
//!
//! ## Failures
//!
//! A failing command prints `Error: ...` to stderr and the session moves on.
//! The process exits with status 1 if any command failed.

mod commands;
mod render;
mod setup;

pub use commands::run;

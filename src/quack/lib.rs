//! # Quack Architecture
//!
//! Quack is a **UI-agnostic bang-resolution library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! A "bang" is a short tag bound to a site, invoked as `!gh rust cli` or
//! `rust cli gh!`. Quack parses the query, picks the matching catalog entry
//! (explicit bang, configured default, or the `ddg` fallback), applies the
//! user's per-bang block policy, and produces a destination URL.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Loads/persists policy state around each operation        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (parser, resolver, policy, search, store/)  │
//! │  - resolve() is a pure function of catalog + policy + query │
//! │  - Abstract PolicyStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, core, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`, `Resolution`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The resolver in particular is a pure, synchronous function: the same
//! core could back a browser redirect page or a local HTTP shim.
//!
//! ## Persistence Model
//!
//! The catalog is embedded, loaded once behind a lazy singleton, and
//! read-only for the process lifetime. Block state and the default bang
//! live as small JSON files in the data directory; reads tolerate missing
//! or malformed files by falling back to empty/default state. Writes are
//! last-write-wins across concurrent processes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The embedded bang catalog and its lazy singleton
//! - [`parser`]: Bang token extraction from raw queries
//! - [`resolver`]: Query → destination URL (or blocked/unresolvable)
//! - [`policy`]: Block modes and the merged block policy
//! - [`search`]: Ranked catalog search for browsing
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: Default-bang preference
//! - [`model`]: Core data types (`Bang`)
//! - [`browser`]: Launching the destination in a browser
//! - [`error`]: Error types

pub mod api;
pub mod browser;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod policy;
pub mod resolver;
pub mod search;
pub mod store;

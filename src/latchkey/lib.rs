//! # Latchkey Architecture
//!
//! Latchkey is a **UI-agnostic account and preference library** for hosts with
//! no backend. Accounts, the signed-in session and the theme preference live in
//! a durable key-value store; registration, email confirmation and login are
//! mocked entirely on top of it.
//!
//! It is a library that happens to have a CLI client, not the other way round.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Layer (cli/, wired by main.rs)                        │
//! │  - Parses arguments, runs form checks, prints results       │
//! │  - Acts on the next view a result names                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - AccountDirectory: accounts + cached session              │
//! │  - PreferenceStore: theme flag                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One state transition per call                           │
//! │  - Validation outcomes as values, store failures as errors  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait: get / set / remove                  │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Account Lifecycle
//!
//! ```text
//! register ──▶ Unconfirmed ──confirm_email(token)──▶ Confirmed
//!
//! NoSession ──login (confirmed only)──▶ Active ──logout──▶ NoSession
//! ```
//!
//! A persisted session is restored when the directory is opened.
//!
//! ## Not Security
//!
//! Passwords are stored as given and tokens are not cryptographically random.
//! This is a mock for a page with no backend, and must not guard anything real.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade hosts talk to
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Account` and `Theme`
//! - [`routes`]: Views and route protection
//! - [`forms`]: Registration form checks run by the host
//! - [`token`]: Confirmation token generation
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod forms;
pub mod model;
pub mod routes;
pub mod store;
pub mod token;

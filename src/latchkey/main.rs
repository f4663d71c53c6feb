//! # Latchkey CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and turns its outcome into a process exit status.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, dispatch, navigation (commands.rs)       │
//! │  - Colored terminal output (render.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - AccountDirectory, PreferenceStore over a FileStore       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logging goes to stderr and is controlled by `LATCHKEY_LOG` (an `EnvFilter`
//! directive, default `warn`) or `--verbose`.

mod cli;

fn main() {
    match cli::run() {
        Ok(cli::Outcome::Done) => {}
        Ok(cli::Outcome::Rejected) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

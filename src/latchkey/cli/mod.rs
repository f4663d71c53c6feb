mod commands;
mod render;
mod setup;

pub use commands::{run, Outcome};

//! Command line interface for phrasetag.

pub mod args;
pub mod commands;
pub mod output;

pub use args::PhraseTagArgs;
pub use commands::execute_command;

//! Subcommand definitions and handlers

pub mod clean;
pub mod vocab;

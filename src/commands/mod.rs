//! CLI subcommands

pub mod build;
pub mod check;
pub mod clean;
pub mod list;
pub mod serve;
pub mod show;

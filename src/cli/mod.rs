//! CLI implementation for the `ugraph` command-line tool.

pub mod commands;

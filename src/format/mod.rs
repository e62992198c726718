//! Graph description files.

pub mod description;

pub use description::GraphDescription;

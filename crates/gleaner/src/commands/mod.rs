//! Command implementations

pub mod catalog;
pub mod completions;
pub mod doctor;
pub mod extract;
pub mod fetch;
pub mod metadata;
pub mod repack;
pub mod resolve;
pub mod sample;

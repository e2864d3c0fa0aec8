//! CLI command bodies

pub mod clean;
pub mod generate;
pub mod list;
pub mod provision;

pub mod boundaries;
pub mod common;
pub mod config;
pub mod edges;

//! Schema definitions for RON files

pub mod catalog;
pub mod config;

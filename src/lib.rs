// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod errors;
pub mod persistence;
pub mod tags;
pub mod tally;
pub use crate::core::engine::Analyzer;
pub use crate::errors::{AnalyzerError, Result};

//! Core domain types and error taxonomy.

pub mod domain;
pub mod error;

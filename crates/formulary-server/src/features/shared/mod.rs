//! Shared utilities for feature modules
//!
//! # Contents
//!
//! - **filter**: predicate/bind accumulator for dynamically assembled SQL

pub mod filter;

#[cfg(test)]
pub mod test_helpers;

pub use filter::{BindValue, SqlFilter};

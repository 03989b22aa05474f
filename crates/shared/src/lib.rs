//! Shared utilities and common types for the help-desk rules core.
//!
//! This crate provides common functionality used across the other crates:
//! - Common validation logic for ticket and form inputs
//! - Cursor-based pagination for ticket listings

pub mod pagination;
pub mod validation;

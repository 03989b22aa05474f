//! Domain layer for the help-desk rules core.
//!
//! This crate contains:
//! - Domain models (Actor, Company, Ticket, SLA types)
//! - Business logic services (authorization, SLA status, reporting)
//! - Runtime configuration for SLA thresholds

pub mod config;
pub mod models;
pub mod services;

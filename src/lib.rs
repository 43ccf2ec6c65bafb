//! Leave Reconciliation Engine for newsroom rostering
//!
//! This crate provides functionality for reconciling a leave request's
//! annual/off day split against the workdays contained in its date range,
//! and for computing the balance adjustment to apply when a request is
//! created or edited.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

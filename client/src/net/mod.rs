//! Networking modules for the horse/owner REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `error` classifies their failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

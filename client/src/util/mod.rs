//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Date formatting lives here so wire types and views agree on one format.

pub mod date;

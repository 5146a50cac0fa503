//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render widgets shared by several pages; pages own fetching
//! and navigation.

pub mod autocomplete;
pub mod confirm_delete;
pub mod family_tree;
pub mod nav_bar;
pub mod toast_host;

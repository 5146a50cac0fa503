//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, toasts, navigation)
//! and delegates rendering details to `components`.

pub mod horse_detail;
pub mod horse_edit;
pub mod horse_family;
pub mod horses;
pub mod owner_create;
pub mod owners;

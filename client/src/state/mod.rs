//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Plain data structs with pure transitions; pages wrap them in `RwSignal`s
//! and perform the network calls. Keeping transitions pure lets them be
//! tested without a browser.

pub mod autocomplete;
pub mod family;
pub mod horse_form;
pub mod horses;
pub mod owners;
pub mod toasts;

//! Family-tree view state.
//!
//! The tree is always replaced wholesale: deletes trigger a full re-fetch
//! rather than patching nodes in place.

#[cfg(test)]
#[path = "family_test.rs"]
mod family_test;

use crate::net::error::ApiError;
use crate::net::types::HorseFamily;

/// Generation count used when `?gen=` is missing or unparsable.
pub const DEFAULT_GENERATIONS: u32 = 3;

/// Read the generation count from the `gen` query value.
///
/// Values below one are raised to one.
pub fn generations_from_query(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .map_or(DEFAULT_GENERATIONS, |n| u32::try_from(n.max(1)).unwrap_or(u32::MAX))
}

/// What to do once a node of the tree was deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterDelete {
    /// Re-fetch the tree; it still has a root.
    Reload,
    /// The root itself is gone; leave the view.
    LeaveTree,
}

pub fn after_delete(root_id: i64, deleted_id: i64) -> AfterDelete {
    if root_id == deleted_id { AfterDelete::LeaveTree } else { AfterDelete::Reload }
}

#[derive(Clone, Debug, Default)]
pub struct FamilyState {
    pub tree: Option<HorseFamily>,
    pub loading: bool,
    pub banner_error: Option<String>,
    /// Node awaiting delete confirmation.
    pub pending_delete: Option<HorseFamily>,
    latest_fetch: u64,
}

impl FamilyState {
    /// Mark a new fetch as in flight and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_fetch += 1;
        self.loading = true;
        self.latest_fetch
    }

    /// Apply a fetch result only if it answers the latest fetch.
    pub fn apply_fetch_for(&mut self, seq: u64, horse_id: i64, result: Result<HorseFamily, ApiError>) -> bool {
        if seq != self.latest_fetch {
            return false;
        }
        self.apply_fetch(horse_id, result);
        true
    }

    /// Apply the outcome of a tree fetch.
    pub fn apply_fetch(&mut self, horse_id: i64, result: Result<HorseFamily, ApiError>) {
        self.loading = false;
        match result {
            Ok(tree) => {
                self.tree = Some(tree);
                self.banner_error = None;
            }
            Err(err) => {
                self.tree = None;
                self.banner_error = Some(fetch_error_banner(horse_id, &err));
            }
        }
    }
}

/// Banner text for a failed tree fetch.
pub fn fetch_error_banner(horse_id: i64, err: &ApiError) -> String {
    if err.is_not_found() {
        format!("Horse {horse_id} not found.")
    } else {
        err.user_message()
    }
}

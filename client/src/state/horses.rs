//! Horse list/search view state.

#[cfg(test)]
#[path = "horses_test.rs"]
mod horses_test;

use crate::net::error::ApiError;
use crate::net::types::{Horse, HorseSearch, Owner, Sex};
use crate::util::date::parse_iso_date;

/// Raw search inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HorseFilters {
    pub name: String,
    pub description: String,
    pub date_of_birth: String,
    pub sex: Option<Sex>,
    pub owner: Option<Owner>,
}

impl HorseFilters {
    /// Search derived from the inputs. A partially typed date is ignored.
    pub fn to_search(&self) -> HorseSearch {
        HorseSearch {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            date_of_birth: parse_iso_date(&self.date_of_birth),
            sex: self.sex,
            owner: self.owner.clone(),
            limit: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HorseListState {
    pub items: Vec<Horse>,
    pub loading: bool,
    pub banner_error: Option<String>,
    /// Horse awaiting delete confirmation.
    pub pending_delete: Option<Horse>,
    latest_search: u64,
}

impl HorseListState {
    /// Mark a new search as in flight and return its sequence number.
    pub fn begin_search(&mut self) -> u64 {
        self.latest_search += 1;
        self.loading = true;
        self.latest_search
    }

    /// Sequence number of the most recent search.
    pub fn latest_search(&self) -> u64 {
        self.latest_search
    }

    /// Apply a search result only if it answers the latest search.
    pub fn apply_search_for(&mut self, seq: u64, result: Result<Vec<Horse>, ApiError>) -> bool {
        if seq != self.latest_search {
            return false;
        }
        self.apply_search(result);
        true
    }

    /// Apply the outcome of a search. A failure keeps the previous rows.
    pub fn apply_search(&mut self, result: Result<Vec<Horse>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.banner_error = None;
            }
            Err(err) => {
                self.banner_error = Some(format!("Could not fetch horses: {}", err.user_message()));
            }
        }
    }

    /// Drop the horse with `id` from the rendered rows after a successful delete.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|h| h.id != id);
        if self.pending_delete.as_ref().is_some_and(|h| h.id == id) {
            self.pending_delete = None;
        }
    }
}

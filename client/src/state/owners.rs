//! Owner list and create-form state.

#[cfg(test)]
#[path = "owners_test.rs"]
mod owners_test;

use crate::net::error::ApiError;
use crate::net::types::{Owner, OwnerCreate};

#[derive(Clone, Debug, Default)]
pub struct OwnerListState {
    pub items: Vec<Owner>,
    pub loading: bool,
}

/// Inputs of the owner create form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnerForm {
    pub first_name: String,
    pub last_name: String,
    pub description: String,
}

impl OwnerForm {
    /// Payload for `POST /owners`. Names are trimmed; a blank description is dropped.
    pub fn to_create(&self) -> OwnerCreate {
        let description = self.description.trim();
        OwnerCreate {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            description: (!description.is_empty()).then(|| description.to_owned()),
        }
    }
}

/// Toast text for a rejected owner creation.
///
/// Validation errors are listed in full; otherwise the backend message is used.
pub fn creation_error_message(err: &ApiError) -> String {
    let details = err.details();
    let text = if details.is_empty() { err.user_message() } else { details.join("\nand ") };
    if text.ends_with(['.', '?', '!']) { format!("Error: {text}") } else { format!("Error: {text}.") }
}

//! Create/edit form model for horses.
//!
//! One form serves both modes; the mode picks the texts and the service
//! call. Input fields are kept as raw strings until submission.

#[cfg(test)]
#[path = "horse_form_test.rs"]
mod horse_form_test;

use crate::net::types::{Horse, HorseWrite, Owner, Sex};
use crate::util::date::{format_iso_date, parse_iso_date};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Create => "Create New Horse",
            Self::Edit => "Edit Horse",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit => "Save",
        }
    }

    /// Past-tense verb for the success toast.
    pub fn action_finished(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Edit => "edited",
        }
    }
}

/// Inputs of the horse form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HorseForm {
    pub name: String,
    pub description: String,
    /// Raw `YYYY-MM-DD` text from the date input; empty when unset.
    pub date_of_birth: String,
    pub sex: Sex,
    pub owner: Option<Owner>,
    mother: Option<Horse>,
    father: Option<Horse>,
    /// Parent ids from the loaded record whose lookup has not succeeded.
    /// Saved as-is until the parent is resolved or replaced.
    kept_mother_id: Option<i64>,
    kept_father_id: Option<i64>,
}

/// Which inputs failed client-side validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormProblems {
    pub name: bool,
    pub date_of_birth: bool,
}

impl FormProblems {
    pub fn any(self) -> bool {
        self.name || self.date_of_birth
    }
}

impl HorseForm {
    /// Pre-fill from an existing record. Parents are resolved separately;
    /// until then their ids are kept so a save does not unlink them.
    pub fn from_horse(horse: &Horse) -> Self {
        Self {
            name: horse.name.clone(),
            description: horse.description.clone().unwrap_or_default(),
            date_of_birth: format_iso_date(horse.date_of_birth),
            sex: horse.sex,
            owner: horse.owner.clone(),
            mother: None,
            father: None,
            kept_mother_id: horse.mother_id,
            kept_father_id: horse.father_id,
        }
    }

    pub fn mother(&self) -> Option<&Horse> {
        self.mother.as_ref()
    }

    pub fn father(&self) -> Option<&Horse> {
        self.father.as_ref()
    }

    /// Replace the mother, dropping any unresolved id.
    pub fn set_mother(&mut self, mother: Option<Horse>) {
        self.mother = mother;
        self.kept_mother_id = None;
    }

    /// Replace the father, dropping any unresolved id.
    pub fn set_father(&mut self, father: Option<Horse>) {
        self.father = father;
        self.kept_father_id = None;
    }

    /// Apply parent lookups independently. A failed lookup leaves that
    /// parent's id in place. Returns the first failure, if any.
    pub fn resolve_parents<E>(
        &mut self,
        mother: Result<Option<Horse>, E>,
        father: Result<Option<Horse>, E>,
    ) -> Option<E> {
        let mother = mother.map(|m| self.set_mother(m)).err();
        let father = father.map(|f| self.set_father(f)).err();
        mother.or(father)
    }

    pub fn problems(&self) -> FormProblems {
        FormProblems {
            name: self.name.trim().is_empty(),
            date_of_birth: parse_iso_date(&self.date_of_birth).is_none(),
        }
    }

    /// Build the outbound payload, or report the invalid inputs.
    ///
    /// An empty description becomes `None` so it is left out of the body.
    ///
    /// # Errors
    ///
    /// Returns the failing inputs when the name is blank or the date of
    /// birth is missing or malformed.
    pub fn to_write(&self) -> Result<HorseWrite, FormProblems> {
        let problems = self.problems();
        let date_of_birth = match parse_iso_date(&self.date_of_birth) {
            Some(date) if !problems.any() => date,
            _ => return Err(problems),
        };
        Ok(HorseWrite {
            name: self.name.trim().to_owned(),
            description: Some(self.description.clone()).filter(|d| !d.is_empty()),
            date_of_birth,
            sex: self.sex,
            owner_id: self.owner.as_ref().map(|o| o.id),
            mother_id: self.mother.as_ref().map(|m| m.id).or(self.kept_mother_id),
            father_id: self.father.as_ref().map(|f| f.id).or(self.kept_father_id),
        })
    }
}

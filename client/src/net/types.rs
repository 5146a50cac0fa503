//! Wire DTOs for the horse/owner REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde stays lossless.
//! Dates travel as ISO calendar dates (`YYYY-MM-DD`) with no time component.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::util::date::{format_iso_date, iso_date};

/// Biological sex of a horse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    #[default]
    Female,
    Male,
}

impl Sex {
    /// Wire value used in query strings and multipart fields.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Female => "FEMALE",
            Self::Male => "MALE",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }

    /// Parse the wire value, case-insensitively.
    pub fn from_wire(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("FEMALE") {
            Some(Self::Female)
        } else if raw.eq_ignore_ascii_case("MALE") {
            Some(Self::Male)
        } else {
            None
        }
    }
}

/// A person associated with one or more horses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Owner {
    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for `POST /owners`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerCreate {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A horse record as returned by `GET /horses` and `GET /horses/{id}`.
///
/// Parents are only referenced by id; views that need the parent records
/// resolve them with separate lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    pub sex: Sex,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub image_id: Option<i64>,
    #[serde(default)]
    pub mother_id: Option<i64>,
    #[serde(default)]
    pub father_id: Option<i64>,
}

/// One node of a horse's ancestry tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorseFamily {
    pub id: i64,
    pub name: String,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    #[serde(default)]
    pub mother: Option<Box<HorseFamily>>,
    #[serde(default)]
    pub father: Option<Box<HorseFamily>>,
}

impl HorseFamily {
    /// Number of ancestor levels above this node; a lone node has none.
    pub fn generations(&self) -> usize {
        let mother = self.mother.as_deref().map_or(0, |m| 1 + m.generations());
        let father = self.father.as_deref().map_or(0, |f| 1 + f.generations());
        mother.max(father)
    }

    /// True when neither parent is known.
    pub fn is_leaf(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }

    /// Drop every ancestor more than `generations` levels above this node.
    ///
    /// The root is level zero, so `1` keeps the parents and `0` yields a
    /// lone node.
    #[must_use]
    pub fn pruned(mut self, generations: usize) -> Self {
        if generations == 0 {
            self.mother = None;
            self.father = None;
        } else {
            self.mother = self.mother.map(|m| Box::new(m.pruned(generations - 1)));
            self.father = self.father.map(|f| Box::new(f.pruned(generations - 1)));
        }
        self
    }
}

/// Optional filters for `GET /horses`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HorseSearch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_of_birth: Option<Date>,
    pub sex: Option<Sex>,
    pub owner: Option<Owner>,
    pub limit: Option<u32>,
}

impl HorseSearch {
    /// Flatten into query pairs. Blank text filters are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = non_blank(self.name.as_deref()) {
            pairs.push(("name", name));
        }
        if let Some(description) = non_blank(self.description.as_deref()) {
            pairs.push(("description", description));
        }
        if let Some(date) = self.date_of_birth {
            pairs.push(("dateOfBirth", format_iso_date(date)));
        }
        if let Some(sex) = self.sex {
            pairs.push(("sex", sex.as_wire().to_owned()));
        }
        if let Some(owner) = &self.owner {
            pairs.push(("owner", owner.full_name()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Create/update payload for a horse, sent as multipart form data.
///
/// The image file is attached separately at submission time.
#[derive(Clone, Debug, PartialEq)]
pub struct HorseWrite {
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: Date,
    pub sex: Sex,
    pub owner_id: Option<i64>,
    pub mother_id: Option<i64>,
    pub father_id: Option<i64>,
}

impl HorseWrite {
    /// Text parts of the multipart body, in submission order.
    ///
    /// An empty description is omitted rather than sent as `""`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.clone())];
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            fields.push(("description", description.to_owned()));
        }
        fields.push(("dateOfBirth", format_iso_date(self.date_of_birth)));
        fields.push(("sex", self.sex.as_wire().to_owned()));
        if let Some(id) = self.owner_id {
            fields.push(("ownerId", id.to_string()));
        }
        if let Some(id) = self.mother_id {
            fields.push(("motherId", id.to_string()));
        }
        if let Some(id) = self.father_id {
            fields.push(("fatherId", id.to_string()));
        }
        fields
    }
}

/// Error body returned by the backend for rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

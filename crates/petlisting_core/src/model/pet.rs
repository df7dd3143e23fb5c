//! Pet listing model and its transfer representation.
//!
//! # Responsibility
//! - Define the persisted `Pet` entity.
//! - Define `PetInput`, the external shape used for create/update.
//! - Copy transfer fields onto the entity with full-replace semantics.
//!
//! # Invariants
//! - `id` is `None` only before the first save and never changes after.
//! - `owner_id` is always set; ownership is not touched by field copies.
//! - `extra_photos` keeps caller order.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned identifier of a pet row.
pub type PetId = i64;

/// Sex of a listed animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Stable lowercase form used in storage and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Parses the stable lowercase form. Anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted pet listing.
///
/// Descriptive fields are all optional: the service copies whatever the
/// caller sent without substituting defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Option<PetId>,
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    /// Free text, e.g. "2 years" or "puppy".
    pub age: Option<String>,
    pub sex: Option<Sex>,
    pub color: Option<String>,
    pub special_needs: Option<String>,
    pub vaccinated: Option<bool>,
    pub sterilized: Option<bool>,
    /// Free text listing state, e.g. "available".
    pub status: Option<String>,
    pub primary_photo_url: Option<String>,
    pub extra_photos: Option<Vec<String>>,
    pub owner_id: UserId,
}

impl Pet {
    /// Builds an unsaved pet for `owner_id` from transfer fields.
    ///
    /// `input.owner_id` is ignored here; owner resolution is the caller's job.
    pub fn from_input(input: &PetInput, owner_id: UserId) -> Self {
        let mut pet = Self {
            id: None,
            name: None,
            species: None,
            breed: None,
            age: None,
            sex: None,
            color: None,
            special_needs: None,
            vaccinated: None,
            sterilized: None,
            status: None,
            primary_photo_url: None,
            extra_photos: None,
            owner_id,
        };
        pet.replace_fields(input);
        pet
    }

    /// Overwrites every mutable field with the transfer values.
    ///
    /// Unset input fields clear the corresponding pet field. `id` and
    /// `owner_id` are left as they are.
    pub fn replace_fields(&mut self, input: &PetInput) {
        self.name = input.name.clone();
        self.species = input.species.clone();
        self.breed = input.breed.clone();
        self.age = input.age.clone();
        self.sex = input.sex;
        self.color = input.color.clone();
        self.special_needs = input.special_needs.clone();
        self.vaccinated = input.vaccinated;
        self.sterilized = input.sterilized;
        self.status = input.status.clone();
        self.primary_photo_url = input.primary_photo_url.clone();
        self.extra_photos = input.extra_photos.clone();
    }
}

/// Transfer object for creating or updating a pet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetInput {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub sex: Option<Sex>,
    pub color: Option<String>,
    pub special_needs: Option<String>,
    pub vaccinated: Option<bool>,
    pub sterilized: Option<bool>,
    pub status: Option<String>,
    pub primary_photo_url: Option<String>,
    pub extra_photos: Option<Vec<String>>,
    /// Required on create, ignored on update.
    pub owner_id: Option<UserId>,
}

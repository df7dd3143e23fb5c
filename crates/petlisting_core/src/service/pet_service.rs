//! Pet listing use-case service.
//!
//! # Responsibility
//! - Resolve owners before a pet is created.
//! - Map `PetInput` onto `Pet` with full-replace semantics.
//! - Turn missing rows into domain errors callers can classify.
//!
//! # Invariants
//! - `create_pet` never touches storage when `owner_id` is missing.
//! - `update_pet` replaces every mutable field and never changes the owner.
//! - `list_pets` treats an empty store as not-found; other listings do not.

use crate::model::pet::{Pet, PetId, PetInput};
use crate::model::user::{User, UserId};
use crate::repo::pet_repo::PetRepository;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for pet use-cases.
#[derive(Debug)]
pub enum PetServiceError {
    /// Listing found no pets at all.
    NoPets,
    /// Target pet does not exist.
    PetNotFound(PetId),
    /// Referenced owner does not exist.
    OwnerNotFound(UserId),
    /// Create request carried no owner id.
    OwnerIdRequired,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl PetServiceError {
    /// Whether the error means a requested entity is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoPets | Self::PetNotFound(_) | Self::OwnerNotFound(_)
        )
    }

    /// Whether the error means the request itself was malformed.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::OwnerIdRequired)
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NoPets => "no_pets",
            Self::PetNotFound(_) => "pet_not_found",
            Self::OwnerNotFound(_) => "owner_not_found",
            Self::OwnerIdRequired => "owner_id_required",
            Self::Repo(_) => "repo_error",
        }
    }
}

impl Display for PetServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPets => write!(f, "no pets to show"),
            Self::PetNotFound(id) => write!(f, "pet with id {id} not found"),
            Self::OwnerNotFound(id) => write!(f, "owner with id {id} not found"),
            Self::OwnerIdRequired => write!(f, "owner id required to create a pet"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PetServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PetServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::PetNotFound(id),
            RepoError::OwnerNotFound(id) => Self::OwnerNotFound(id),
            other => Self::Repo(other),
        }
    }
}

pub type PetServiceResult<T> = Result<T, PetServiceError>;

/// Pet service facade over pet and owner repositories.
pub struct PetService<P: PetRepository, U: UserRepository> {
    pets: P,
    users: U,
}

impl<P: PetRepository, U: UserRepository> PetService<P, U> {
    /// Creates a service using the provided repository implementations.
    pub fn new(pets: P, users: U) -> Self {
        Self { pets, users }
    }

    /// Lists every stored pet.
    ///
    /// # Errors
    /// - `NoPets` when the store is empty.
    pub fn list_pets(&self) -> PetServiceResult<Vec<Pet>> {
        let pets = self
            .pets
            .find_all()
            .map_err(|err| log_failure("pet_list", err.into()))?;
        if pets.is_empty() {
            return Err(log_failure("pet_list", PetServiceError::NoPets));
        }
        Ok(pets)
    }

    /// Lists pets of one species. An empty result is not an error.
    pub fn list_pets_by_species(&self, species: &str) -> PetServiceResult<Vec<Pet>> {
        self.pets
            .find_by_species(species)
            .map_err(|err| log_failure("pet_list_species", err.into()))
    }

    /// Gets one pet by id.
    pub fn get_pet(&self, id: PetId) -> PetServiceResult<Pet> {
        self.find_pet("pet_get", id)
    }

    /// Resolves the owner of one pet on demand.
    pub fn get_owner(&self, pet_id: PetId) -> PetServiceResult<User> {
        let pet = self.find_pet("pet_owner", pet_id)?;
        self.users
            .find_by_id(pet.owner_id)
            .map_err(|err| log_failure("pet_owner", err.into()))?
            .ok_or_else(|| {
                log_failure("pet_owner", PetServiceError::OwnerNotFound(pet.owner_id))
            })
    }

    /// Creates a pet from transfer fields for an existing owner.
    ///
    /// # Contract
    /// - Every field is copied verbatim, unset fields stay unset.
    /// - Returns the stored pet carrying its new id.
    /// - The store re-checks the owner inside the insert transaction, so an
    ///   owner removed after the lookup still yields `OwnerNotFound`.
    ///
    /// # Errors
    /// - `OwnerIdRequired` when `input.owner_id` is `None`.
    /// - `OwnerNotFound` when the owner id does not resolve.
    pub fn create_pet(&self, input: &PetInput) -> PetServiceResult<Pet> {
        let owner_id = input
            .owner_id
            .ok_or_else(|| log_failure("pet_create", PetServiceError::OwnerIdRequired))?;

        let owner = self
            .users
            .find_by_id(owner_id)
            .map_err(|err| log_failure("pet_create", err.into()))?
            .ok_or_else(|| {
                log_failure("pet_create", PetServiceError::OwnerNotFound(owner_id))
            })?;

        let created = self
            .pets
            .save(&Pet::from_input(input, owner.id))
            .map_err(|err| log_failure("pet_create", err.into()))?;
        info!(
            "event=pet_create module=service status=ok pet_id={} owner_id={}",
            created.id.unwrap_or_default(),
            owner.id
        );
        Ok(created)
    }

    /// Replaces every mutable field of an existing pet.
    ///
    /// `input.owner_id` is ignored; ownership does not change on update.
    pub fn update_pet(&self, id: PetId, input: &PetInput) -> PetServiceResult<Pet> {
        let mut pet = self.find_pet("pet_update", id)?;

        pet.replace_fields(input);
        let updated = self
            .pets
            .save(&pet)
            .map_err(|err| log_failure("pet_update", err.into()))?;
        info!("event=pet_update module=service status=ok pet_id={id}");
        Ok(updated)
    }

    /// Deletes one pet permanently.
    ///
    /// Returns `Ok(true)` once the row is gone.
    pub fn delete_pet(&self, id: PetId) -> PetServiceResult<bool> {
        let deleted = self
            .pets
            .delete_by_id(id)
            .map_err(|err| log_failure("pet_delete", err.into()))?;
        if !deleted {
            return Err(log_failure("pet_delete", PetServiceError::PetNotFound(id)));
        }
        info!("event=pet_delete module=service status=ok pet_id={id}");
        Ok(true)
    }

    fn find_pet(&self, event: &str, id: PetId) -> PetServiceResult<Pet> {
        self.pets
            .find_by_id(id)
            .map_err(|err| log_failure(event, err.into()))?
            .ok_or_else(|| log_failure(event, PetServiceError::PetNotFound(id)))
    }
}

fn log_failure(event: &str, err: PetServiceError) -> PetServiceError {
    warn!(
        "event={event} module=service status=error error_code={} error={err}",
        err.code()
    );
    err
}

#[cfg(test)]
mod tests {
    use super::PetServiceError;
    use crate::repo::RepoError;

    #[test]
    fn repo_not_found_maps_to_pet_not_found() {
        let err = PetServiceError::from(RepoError::NotFound(12));
        assert!(matches!(err, PetServiceError::PetNotFound(12)));
        assert!(err.is_not_found());
    }

    #[test]
    fn repo_owner_not_found_maps_to_owner_not_found() {
        let err = PetServiceError::from(RepoError::OwnerNotFound(7));
        assert!(matches!(err, PetServiceError::OwnerNotFound(7)));
        assert!(err.is_not_found());
    }

    #[test]
    fn error_kinds_are_disjoint() {
        assert!(PetServiceError::OwnerIdRequired.is_invalid_argument());
        assert!(!PetServiceError::OwnerIdRequired.is_not_found());
        assert!(PetServiceError::NoPets.is_not_found());
        assert!(!PetServiceError::OwnerNotFound(1).is_invalid_argument());

        let storage = PetServiceError::Repo(RepoError::InvalidData("x".to_string()));
        assert!(!storage.is_not_found());
        assert!(!storage.is_invalid_argument());
    }

    #[test]
    fn not_found_message_carries_id() {
        assert_eq!(
            PetServiceError::PetNotFound(42).to_string(),
            "pet with id 42 not found"
        );
    }
}

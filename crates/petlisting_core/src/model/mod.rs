//! Domain model for pet listings and their owners.
//!
//! # Invariants
//! - Every stored pet has a stable integer id assigned by the store.
//! - Every pet references exactly one owner through `owner_id`.

pub mod pet;
pub mod user;

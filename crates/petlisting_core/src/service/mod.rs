//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep API/controller layers decoupled from storage details.

pub mod pet_service;

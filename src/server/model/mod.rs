//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! catalog entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Update parameters are patch types: every `None` field is left untouched in storage.

pub mod card;
pub mod deck;
pub mod user;

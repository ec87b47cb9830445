//! HTTP request handlers.
//!
//! Each handler extracts path, query and body, builds the matching service from
//! the shared connection, and converts the returned domain model to its DTO.
//! Failures are returned as `AppError` and mapped to a status code in one place.

pub mod card;
pub mod deck;
pub mod user;

#[cfg(test)]
mod test;

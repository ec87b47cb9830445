//! Wire-format DTOs shared by the HTTP API.
//!
//! These types define the JSON request and response bodies. Optional fields are
//! omitted when unset so partial payloads never clobber stored columns.

pub mod api;
pub mod card;
pub mod deck;
pub mod user;

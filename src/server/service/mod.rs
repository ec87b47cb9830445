//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are built per request from a borrowed connection and are responsible for:
//!
//! - **Business Logic**: existence checks, quantity rules and email uniqueness
//! - **Orchestration**: coordinating several repositories for one operation
//! - **Error Interpretation**: lifting `DbErr` into `AppError` and mapping the
//!   conditions they check to `NotFound`/`BadRequest`
//!
//! Scoring algorithms are injected as strategy trait objects from [`scoring`].

pub mod card;
pub mod card_interaction;
pub mod card_theme;
pub mod deck;
pub mod deck_card;
pub mod price;
pub mod scoring;
pub mod synergy_score;
pub mod user;

#[cfg(test)]
mod test;

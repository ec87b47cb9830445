use std::time::Duration;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{card, deck, user},
    doc::ApiDoc,
    state::AppState,
};

/// Builds the API router.
///
/// All resource routes live under `/api/v1`. Swagger UI is served at `/api/docs`
/// from the document at `/api/openapi.json`. Requests exceeding `request_timeout`
/// are dropped and answered with 408 Request Timeout.
///
/// # Arguments
/// - `request_timeout` - Upper bound on the time spent handling one request
///
/// # Returns
/// - `Router<AppState>` - Router awaiting its state
pub fn router(request_timeout: Duration) -> Router<AppState> {
    let api = Router::new()
        .route("/users/", post(user::create_user).get(user::list_users))
        .route("/users/active", get(user::list_active_users))
        .route("/users/email/{email}", get(user::get_user_by_email))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/cards/", post(card::create_card).get(card::list_cards))
        .route("/cards/search", get(card::search_cards))
        .route("/cards/interactions/", post(card::create_interaction))
        .route("/cards/themes/{theme}", get(card::get_cards_by_theme))
        .route(
            "/cards/themes/{theme}/add/{card_id}",
            post(card::add_card_to_theme),
        )
        .route(
            "/cards/themes/{theme}/remove/{card_id}",
            delete(card::remove_card_from_theme),
        )
        .route(
            "/cards/{id}",
            get(card::get_card)
                .put(card::update_card)
                .delete(card::delete_card),
        )
        .route("/cards/{id}/value", get(card::get_card_value))
        .route("/cards/{id}/themes", get(card::get_card_themes))
        .route("/cards/{id}/interactions", get(card::get_card_interactions))
        .route(
            "/cards/{id}/interaction-strength",
            get(card::get_interaction_strength),
        )
        .route("/cards/{id}/price", post(card::record_price))
        .route("/cards/{id}/latest-price", get(card::get_latest_price))
        .route("/cards/{id}/price-history", get(card::get_price_history))
        .route("/decks/", post(deck::create_deck))
        .route("/decks/user/{user_id}", get(deck::get_decks_by_user))
        .route("/decks/{id}", get(deck::get_deck).delete(deck::delete_deck))
        .route("/decks/{id}/cards/", post(deck::add_card_to_deck))
        .route("/decks/{id}/cards", get(deck::list_deck_cards))
        .route(
            "/decks/{id}/cards/{card_id}",
            delete(deck::remove_card_from_deck),
        )
        .route(
            "/decks/{id}/synergy-score",
            post(deck::calculate_synergy_score).get(deck::get_synergy_score),
        );

    Router::new()
        .nest("/api/v1", api)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
}

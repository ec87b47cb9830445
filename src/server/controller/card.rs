use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        card::{
            CardDto, CardInteractionDto, CardSearchDto, CardThemeDto, CardValueDto, CreateCardDto,
            InteractionStrengthDto, PriceHistoryDto, RecordPriceDto, UpdateCardDto,
        },
    },
    server::{
        error::AppError,
        model::card::{
            CardFilter, CardInteraction, CreateCardParams, RecordPriceParams, UpdateCardParams,
        },
        service::{
            card::CardService, card_interaction::CardInteractionService,
            card_theme::CardThemeService, price::PriceService,
        },
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

fn card_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Card {} not found", id))
}

/// Add a card to the catalog.
///
/// The card ID is generated when the payload omits it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Card fields
///
/// # Returns
/// - `201 Created` - The created card
/// - `500 Internal Server Error` - Database error, including a duplicate ID
#[utoipa::path(
    post,
    path = "/api/v1/cards/",
    tag = CARD_TAG,
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Successfully created card", body = CardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    Json(payload): Json<CreateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let card = service.create(CreateCardParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

/// List every card in the catalog.
#[utoipa::path(
    get,
    path = "/api/v1/cards/",
    tag = CARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved cards", body = Vec<CardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cards = CardService::new(&state.db).list().await?;

    let dtos: Vec<CardDto> = cards.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Search cards by name substring, mana cost and card type.
///
/// Every query parameter is optional; omitted ones match all cards.
///
/// # Returns
/// - `200 OK` - Matching cards ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/cards/search",
    tag = CARD_TAG,
    params(CardSearchDto),
    responses(
        (status = 200, description = "Successfully searched cards", body = Vec<CardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_cards(
    State(state): State<AppState>,
    Query(query): Query<CardSearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CardFilter {
        name: query.name,
        mana_cost: query.mana_cost,
        card_type: query.card_type,
    };

    let cards = CardService::new(&state.db).search(filter).await?;

    let dtos: Vec<CardDto> = cards.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a card by ID.
///
/// # Returns
/// - `200 OK` - The card
/// - `404 Not Found` - No card with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved card", body = CardDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db)
        .get(id)
        .await?
        .ok_or_else(|| card_not_found(id))?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Partially update a card.
///
/// Fields absent from the payload keep their stored values.
///
/// # Returns
/// - `200 OK` - The updated card
/// - `404 Not Found` - No card with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Successfully updated card", body = CardDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db)
        .update(UpdateCardParams::from_dto(id, payload))
        .await?
        .ok_or_else(|| card_not_found(id))?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Delete a card together with its themes, interactions, prices and deck rows.
#[utoipa::path(
    delete,
    path = "/api/v1/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted card", body = CardDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let card = CardService::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(|| card_not_found(id))?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Compute the value of a card with the configured valuation strategy.
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}/value",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully valued card", body = CardValueDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card_value(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let value = CardService::new(&state.db)
        .calculate_card_value(id, state.scoring.card_value.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(CardValueDto { card_id: id, value })))
}

/// Tag a card with a theme.
///
/// Tagging a card that already carries the theme succeeds without change.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `theme` - Theme name
/// - `card_id` - Card to tag
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No card with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/cards/themes/{theme}/add/{card_id}",
    tag = CARD_TAG,
    params(
        ("theme" = String, Path, description = "Theme name"),
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card added to theme", body = MessageDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_card_to_theme(
    State(state): State<AppState>,
    Path((theme, card_id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    CardThemeService::new(&state.db)
        .add(&theme, card_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Card added to theme successfully")),
    ))
}

/// Remove a theme tag from a card.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - The card does not carry the theme
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/cards/themes/{theme}/remove/{card_id}",
    tag = CARD_TAG,
    params(
        ("theme" = String, Path, description = "Theme name"),
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card removed from theme", body = MessageDto),
        (status = 404, description = "Card not in theme", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_card_from_theme(
    State(state): State<AppState>,
    Path((theme, card_id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    CardThemeService::new(&state.db)
        .remove(&theme, card_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Card removed from theme successfully")),
    ))
}

/// List the cards tagged with a theme.
#[utoipa::path(
    get,
    path = "/api/v1/cards/themes/{theme}",
    tag = CARD_TAG,
    params(
        ("theme" = String, Path, description = "Theme name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cards", body = Vec<CardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cards_by_theme(
    State(state): State<AppState>,
    Path(theme): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cards = CardService::new(&state.db).get_by_theme(&theme).await?;

    let dtos: Vec<CardDto> = cards.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the themes a card is tagged with.
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}/themes",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved themes", body = Vec<CardThemeDto>),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card_themes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let themes = CardThemeService::new(&state.db).list_for_card(id).await?;

    let dtos: Vec<CardThemeDto> = themes.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Define a directed interaction between two cards.
///
/// # Returns
/// - `201 Created` - The stored interaction
/// - `400 Bad Request` - A referenced card does not exist, or the interaction is
///   already defined
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/cards/interactions/",
    tag = CARD_TAG,
    request_body = CardInteractionDto,
    responses(
        (status = 201, description = "Successfully defined interaction", body = CardInteractionDto),
        (status = 400, description = "Unknown card or duplicate interaction", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_interaction(
    State(state): State<AppState>,
    Json(payload): Json<CardInteractionDto>,
) -> Result<impl IntoResponse, AppError> {
    let interaction = CardInteractionService::new(&state.db)
        .define(CardInteraction {
            card_id_1: payload.card_id_1,
            card_id_2: payload.card_id_2,
            interaction_type: payload.interaction_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(interaction.into_dto())))
}

/// List the interactions a card takes part in, on either side.
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}/interactions",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved interactions", body = Vec<CardInteractionDto>),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card_interactions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let interactions = CardInteractionService::new(&state.db)
        .get_for_card(id)
        .await?;

    let dtos: Vec<CardInteractionDto> = interactions.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Score a card's interactions with the configured strength strategy.
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}/interaction-strength",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully scored interactions", body = InteractionStrengthDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_interaction_strength(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let strength = CardInteractionService::new(&state.db)
        .evaluate_interaction_strength(id, state.scoring.interaction_strength.as_ref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(InteractionStrengthDto {
            card_id: id,
            strength,
        }),
    ))
}

/// Record a price observation for a card.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Card the price belongs to
/// - `payload` - Price and observation date
///
/// # Returns
/// - `201 Created` - The stored price record
/// - `404 Not Found` - No card with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/cards/{id}/price",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    request_body = RecordPriceDto,
    responses(
        (status = 201, description = "Successfully recorded price", body = PriceHistoryDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecordPriceDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = PriceService::new(&state.db)
        .record(RecordPriceParams {
            card_id: id,
            price: payload.price,
            date: payload.date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// Get the most recent price observation of a card.
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}/latest-price",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved latest price", body = PriceHistoryDto),
        (status = 404, description = "Card not found or never priced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let record = PriceService::new(&state.db).get_latest(id).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Get the price history of a card, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}/price-history",
    tag = CARD_TAG,
    params(
        ("id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved price history", body = Vec<PriceHistoryDto>),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_price_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let history = PriceService::new(&state.db).get_history(id).await?;

    let dtos: Vec<PriceHistoryDto> = history.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

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
        deck::{
            AddDeckCardDto, AddDeckCardQuery, CreateDeckDto, CreateDeckQuery, DeckCardDto, DeckDto,
            SynergyScoreDto,
        },
    },
    server::{
        error::AppError,
        model::deck::AddDeckCardParams,
        service::{
            deck::DeckService, deck_card::DeckCardService, synergy_score::SynergyScoreService,
        },
        state::AppState,
    },
};

/// Tag for grouping deck endpoints in OpenAPI documentation
pub static DECK_TAG: &str = "deck";

/// Create an empty deck for a user.
///
/// The owner and name come from a JSON body or, without one, from the
/// `user_id` and `name` query parameters.
///
/// # Returns
/// - `201 Created` - The created deck
/// - `400 Bad Request` - The user does not exist, or owner or name missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/decks/",
    tag = DECK_TAG,
    params(CreateDeckQuery),
    request_body = CreateDeckDto,
    responses(
        (status = 201, description = "Successfully created deck", body = DeckDto),
        (status = 400, description = "Unknown user or missing fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_deck(
    State(state): State<AppState>,
    Query(query): Query<CreateDeckQuery>,
    body: Option<Json<CreateDeckDto>>,
) -> Result<impl IntoResponse, AppError> {
    let payload = match body {
        Some(Json(payload)) => payload,
        None => query.into_dto().ok_or_else(|| {
            AppError::BadRequest("user_id and name are required".to_string())
        })?,
    };

    let deck = DeckService::new(&state.db)
        .create_deck_for_user(payload.user_id, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(deck.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/decks/user/{user_id}",
    tag = DECK_TAG,
    params(
        ("user_id" = i32, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved decks", body = Vec<DeckDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_decks_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let decks = DeckService::new(&state.db).get_by_user(user_id).await?;

    let dtos: Vec<DeckDto> = decks.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/decks/{id}",
    tag = DECK_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved deck", body = DeckDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deck = DeckService::new(&state.db)
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Deck {} not found", id)))?;

    Ok((StatusCode::OK, Json(deck.into_dto())))
}

/// Delete a deck with its card rows and synergy scores.
#[utoipa::path(
    delete,
    path = "/api/v1/decks/{id}",
    tag = DECK_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted deck", body = DeckDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_deck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deck = DeckService::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Deck {} not found", id)))?;

    Ok((StatusCode::OK, Json(deck.into_dto())))
}

/// Add copies of a card to a deck.
///
/// A card already in the deck has its quantity increased instead of gaining a
/// second row. `quantity` defaults to 1 when omitted. The card and quantity come
/// from a JSON body or, without one, from the `card_id` and `quantity` query
/// parameters.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Deck to add to
/// - `payload` - Card and number of copies
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Quantity below 1 or past `i32::MAX` once merged, or no card
/// - `404 Not Found` - Unknown deck or card
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/decks/{id}/cards/",
    tag = DECK_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID"),
        AddDeckCardQuery
    ),
    request_body = AddDeckCardDto,
    responses(
        (status = 200, description = "Card added to deck", body = MessageDto),
        (status = 400, description = "Invalid quantity or missing card", body = ErrorDto),
        (status = 404, description = "Deck or card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_card_to_deck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AddDeckCardQuery>,
    body: Option<Json<AddDeckCardDto>>,
) -> Result<impl IntoResponse, AppError> {
    let payload = match body {
        Some(Json(payload)) => payload,
        None => query
            .into_dto()
            .ok_or_else(|| AppError::BadRequest("card_id is required".to_string()))?,
    };

    DeckCardService::new(&state.db)
        .add(AddDeckCardParams {
            deck_id: id,
            card_id: payload.card_id,
            quantity: payload.quantity,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Card added to deck successfully")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/decks/{id}/cards/{card_id}",
    tag = DECK_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID"),
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card removed from deck", body = MessageDto),
        (status = 404, description = "Card not in deck", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_card_from_deck(
    State(state): State<AppState>,
    Path((id, card_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    DeckCardService::new(&state.db)
        .remove(id, card_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Card removed from deck successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/decks/{id}/cards",
    tag = DECK_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved deck cards", body = Vec<DeckCardDto>),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_deck_cards(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rows = DeckCardService::new(&state.db).list(id).await?;

    let dtos: Vec<DeckCardDto> = rows.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Score a deck with the configured synergy strategy and store the result.
///
/// # Returns
/// - `201 Created` - The stored score, dated today
/// - `404 Not Found` - No deck with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/decks/{id}/synergy-score",
    tag = DECK_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID")
    ),
    responses(
        (status = 201, description = "Successfully calculated synergy score", body = SynergyScoreDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn calculate_synergy_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let score = SynergyScoreService::new(&state.db)
        .calculate(id, state.scoring.synergy.as_ref())
        .await?;

    Ok((StatusCode::CREATED, Json(score.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/decks/{id}/synergy-score",
    tag = DECK_TAG,
    params(
        ("id" = Uuid, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved latest synergy score", body = SynergyScoreDto),
        (status = 404, description = "Deck never scored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_synergy_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let score = SynergyScoreService::new(&state.db).get_latest(id).await?;

    Ok((StatusCode::OK, Json(score.into_dto())))
}

//! OpenAPI document for the REST API.
//!
//! Served as JSON next to the Swagger UI mounted by the router.

use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        card::{
            CardDto, CardInteractionDto, CardThemeDto, CardValueDto, CreateCardDto,
            InteractionStrengthDto, PriceHistoryDto, RecordPriceDto, UpdateCardDto,
        },
        deck::{AddDeckCardDto, CreateDeckDto, DeckCardDto, DeckDto, SynergyScoreDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::controller::{card, deck, user},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Deckvault API",
        description = "Catalog of cards, themes, interactions and prices, with user decks and synergy scoring."
    ),
    paths(
        user::create_user,
        user::list_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        user::get_user_by_email,
        user::list_active_users,
        card::create_card,
        card::list_cards,
        card::search_cards,
        card::get_card,
        card::update_card,
        card::delete_card,
        card::get_card_value,
        card::add_card_to_theme,
        card::remove_card_from_theme,
        card::get_cards_by_theme,
        card::get_card_themes,
        card::create_interaction,
        card::get_card_interactions,
        card::get_interaction_strength,
        card::record_price,
        card::get_latest_price,
        card::get_price_history,
        deck::create_deck,
        deck::get_decks_by_user,
        deck::get_deck,
        deck::delete_deck,
        deck::add_card_to_deck,
        deck::remove_card_from_deck,
        deck::list_deck_cards,
        deck::calculate_synergy_score,
        deck::get_synergy_score,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        CardDto,
        CreateCardDto,
        UpdateCardDto,
        CardThemeDto,
        CardInteractionDto,
        PriceHistoryDto,
        RecordPriceDto,
        CardValueDto,
        InteractionStrengthDto,
        DeckDto,
        CreateDeckDto,
        DeckCardDto,
        AddDeckCardDto,
        SynergyScoreDto,
    )),
    tags(
        (name = "user", description = "User accounts"),
        (name = "card", description = "Cards, themes, interactions and prices"),
        (name = "deck", description = "Decks, deck contents and synergy scores")
    )
)]
pub struct ApiDoc;

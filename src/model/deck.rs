use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct DeckDto {
    pub id: Uuid,
    pub user_id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateDeckDto {
    pub user_id: i32,
    pub name: String,
}

/// Query string form of [`CreateDeckDto`], used when the request has no JSON body.
#[derive(Debug, Serialize, Deserialize, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateDeckQuery {
    pub user_id: Option<i32>,
    pub name: Option<String>,
}

impl CreateDeckQuery {
    /// Returns the create request if both fields were supplied.
    pub fn into_dto(self) -> Option<CreateDeckDto> {
        Some(CreateDeckDto {
            user_id: self.user_id?,
            name: self.name?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct DeckCardDto {
    pub deck_id: Uuid,
    pub card_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AddDeckCardDto {
    pub card_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

/// Query string form of [`AddDeckCardDto`], used when the request has no JSON body.
#[derive(Debug, Serialize, Deserialize, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddDeckCardQuery {
    pub card_id: Option<Uuid>,
    /// Copies to add, 1 when omitted
    pub quantity: Option<i32>,
}

impl AddDeckCardQuery {
    /// Returns the add request if a card was supplied.
    pub fn into_dto(self) -> Option<AddDeckCardDto> {
        Some(AddDeckCardDto {
            card_id: self.card_id?,
            quantity: self.quantity.unwrap_or_else(default_quantity),
        })
    }
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct SynergyScoreDto {
    pub id: i32,
    pub deck_id: Uuid,
    pub synergy_score: Decimal,
    pub calculated_at: NaiveDate,
}

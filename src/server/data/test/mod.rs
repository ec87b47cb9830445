mod card;
mod card_interaction;
mod card_theme;
mod deck;
mod deck_card;
mod price_history;
mod synergy_score;
mod user;

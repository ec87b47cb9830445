//! Pluggable scoring strategies.
//!
//! Synergy, card value and interaction strength are computed by trait objects held in
//! [`Scoring`] and injected into the services that need them, so alternative
//! algorithms can be swapped in through configuration without touching the services.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::server::{
    config::SynergyStrategyKind,
    model::{
        card::{Card, CardInteraction, CardTheme, PriceHistory},
        deck::DeckCard,
    },
};

/// Everything known about a deck's contents when scoring it.
#[derive(Debug, Clone, Default)]
pub struct DeckSynergyInput {
    /// One row per distinct card, with its quantity.
    pub cards: Vec<DeckCard>,
    /// Theme tags of the deck's cards.
    pub themes: Vec<CardTheme>,
    /// Interactions whose both ends are in the deck.
    pub interactions: Vec<CardInteraction>,
}

/// Computes a synergy score for a deck.
pub trait SynergyStrategy: Send + Sync {
    fn score(&self, input: &DeckSynergyInput) -> Decimal;
}

/// Scores a deck by its number of distinct cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistinctCardCount;

impl SynergyStrategy for DistinctCardCount {
    fn score(&self, input: &DeckSynergyInput) -> Decimal {
        Decimal::from(input.cards.len())
    }
}

/// Scores a deck by how strongly its card pairs relate.
///
/// Each unordered pair of distinct cards contributes the number of themes they share
/// plus the number of interactions between them (either direction), weighted by the
/// product of their quantities. The total saturates at `Decimal::MAX` instead of
/// overflowing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeOverlap;

impl SynergyStrategy for ThemeOverlap {
    fn score(&self, input: &DeckSynergyInput) -> Decimal {
        let mut themes_by_card: HashMap<Uuid, HashSet<&str>> = HashMap::new();
        for theme in &input.themes {
            themes_by_card
                .entry(theme.card_id)
                .or_default()
                .insert(theme.theme.as_str());
        }

        let empty = HashSet::new();
        let mut total = Decimal::ZERO;

        for (i, a) in input.cards.iter().enumerate() {
            let themes_a = themes_by_card.get(&a.card_id).unwrap_or(&empty);

            for b in &input.cards[i + 1..] {
                let themes_b = themes_by_card.get(&b.card_id).unwrap_or(&empty);

                let shared = themes_a.intersection(themes_b).count();
                let linked = input
                    .interactions
                    .iter()
                    .filter(|interaction| interaction.links(a.card_id, b.card_id))
                    .count();

                let pair = Decimal::from(shared + linked)
                    .saturating_mul(Decimal::from(a.quantity))
                    .saturating_mul(Decimal::from(b.quantity));
                total = total.saturating_add(pair);
            }
        }

        total
    }
}

/// Computes the value of a single card.
pub trait CardValueStrategy: Send + Sync {
    fn value(&self, card: &Card, latest_price: Option<&PriceHistory>) -> Decimal;
}

/// Values a card at its latest recorded price, falling back to its list price, then zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestPrice;

impl CardValueStrategy for LatestPrice {
    fn value(&self, card: &Card, latest_price: Option<&PriceHistory>) -> Decimal {
        latest_price
            .map(|record| record.price)
            .or(card.price)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Computes how strongly a card interacts with the rest of the catalog.
pub trait InteractionStrengthStrategy: Send + Sync {
    fn strength(&self, card_id: Uuid, interactions: &[CardInteraction]) -> Decimal;
}

/// Counts the interactions the card takes part in.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionCount;

impl InteractionStrengthStrategy for InteractionCount {
    fn strength(&self, card_id: Uuid, interactions: &[CardInteraction]) -> Decimal {
        let count = interactions
            .iter()
            .filter(|i| i.card_id_1 == card_id || i.card_id_2 == card_id)
            .count();

        Decimal::from(count)
    }
}

/// Set of scoring strategies shared by all requests.
#[derive(Clone)]
pub struct Scoring {
    pub synergy: Arc<dyn SynergyStrategy>,
    pub card_value: Arc<dyn CardValueStrategy>,
    pub interaction_strength: Arc<dyn InteractionStrengthStrategy>,
}

impl Scoring {
    /// Builds the strategy set for the configured synergy algorithm.
    ///
    /// # Arguments
    /// - `kind` - Synergy algorithm selected in configuration
    ///
    /// # Returns
    /// - `Scoring` - Strategies with the default value and strength algorithms
    pub fn from_kind(kind: SynergyStrategyKind) -> Self {
        let synergy: Arc<dyn SynergyStrategy> = match kind {
            SynergyStrategyKind::CardCount => Arc::new(DistinctCardCount),
            SynergyStrategyKind::ThemeOverlap => Arc::new(ThemeOverlap),
        };

        Self {
            synergy,
            card_value: Arc::new(LatestPrice),
            interaction_strength: Arc::new(InteractionCount),
        }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::from_kind(SynergyStrategyKind::default())
    }
}

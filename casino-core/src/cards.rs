use serde::Serialize;

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DeckError, DeckSeed};

/// What a single poker draw reports: the two cards in the order drawn and how many cards the
/// deck still holds afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokerDraw {
    pub hand: [Card; 2],
    pub remaining: usize,
}

impl PokerDraw {
    pub fn deal(deck: &mut Deck) -> Result<Self, DeckError> {
        let hand = deck.draw_hand()?;
        Ok(Self {
            hand,
            remaining: deck.len(),
        })
    }
}

use super::card::{all_cards, Card};
use base64ct::{self, Base64, Encoding};
use rand::prelude::*;
use rand_chacha::ChaChaRng;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace};

pub const DECK_LEN: usize = 52;
/// Every player takes two cards, so one deck can serve at most this many.
pub const MAX_PLAYERS: u8 = (DECK_LEN / 2) as u8;
const SEED_LEN: usize = 32;
const ENCODED_SEED_LEN: usize = 4 * ((SEED_LEN + 3 - 1) / 3); // 4 * ceil(SEED_LEN / 3)

#[derive(PartialEq, Debug)]
pub enum DeckError {
    OutOfCards,
    TooManyPlayers,
    CantDealToNoPlayers,
    DeckSeedDecodeError(base64ct::Error),
}

impl Error for DeckError {}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::OutOfCards => write!(f, "No more cards in deck"),
            DeckError::TooManyPlayers => write!(f, "Too many players to deal"),
            DeckError::CantDealToNoPlayers => write!(f, "Need at least one player"),
            DeckError::DeckSeedDecodeError(e) => write!(f, "{}", e),
        }
    }
}

impl From<base64ct::Error> for DeckError {
    fn from(e: base64ct::Error) -> Self {
        Self::DeckSeedDecodeError(e)
    }
}

/// A single deck of cards that is drawn from at random.
///
/// The cards are kept in canonical order until the first draw. Each draw picks uniformly among
/// the cards still in the deck and fills the hole with the last card, so the order of what
/// remains is meaningless.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaChaRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(&DeckSeed::default())
    }
}

impl Deck {
    /// Generate a new full deck whose draws are determined by `seed`
    pub fn new(seed: &DeckSeed) -> Self {
        let cards = all_cards();
        assert_eq!(cards.len(), DECK_LEN);
        debug!(%seed, "new deck");
        Deck {
            cards,
            rng: ChaChaRng::from_seed(seed.0),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw a random card and return it, or return an error if there are no more cards.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::OutOfCards);
        }
        let idx = self.rng.gen_range(0..self.cards.len());
        let card = self.cards.swap_remove(idx);
        trace!(%card, idx, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Draw two cards, in the order drawn. Nothing is drawn if fewer than two cards remain.
    pub fn draw_hand(&mut self) -> Result<[Card; 2], DeckError> {
        if self.cards.len() < 2 {
            return Err(DeckError::OutOfCards);
        }
        let c1 = self.draw()?;
        let c2 = self.draw()?;
        Ok([c1, c2])
    }

    pub fn deal_pockets(&mut self, num_players: u8) -> Result<Vec<[Card; 2]>, DeckError> {
        if num_players > MAX_PLAYERS {
            Err(DeckError::TooManyPlayers)
        } else if num_players < 1 {
            Err(DeckError::CantDealToNoPlayers)
        } else if usize::from(num_players) * 2 > self.cards.len() {
            Err(DeckError::OutOfCards)
        } else {
            (0..num_players).map(|_| self.draw_hand()).collect()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckSeed([u8; SEED_LEN]);

impl DeckSeed {
    pub fn new(b: [u8; SEED_LEN]) -> Self {
        Self(b)
    }

    /// Expand a wall-clock reading (nanoseconds since the epoch) into a full seed.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::from(nanos)
    }
}

impl From<u64> for DeckSeed {
    fn from(n: u64) -> Self {
        Self(ChaChaRng::seed_from_u64(n).get_seed())
    }
}

impl Default for DeckSeed {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl std::fmt::Display for DeckSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut b = [0u8; ENCODED_SEED_LEN];
        let s = Base64::encode(&self.0, &mut b).map_err(|_| fmt::Error)?;
        write!(f, "{}", s)
    }
}

impl FromStr for DeckSeed {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut b: [u8; SEED_LEN] = [0; SEED_LEN];
        Base64::decode(s, &mut b)?;
        Ok(DeckSeed(b))
    }
}

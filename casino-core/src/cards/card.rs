use serde::{Deserialize, Serialize};
use std::str::FromStr;
pub const SPADE: char = '♠';
pub const HEART: char = '♥';
pub const DIAMOND: char = '♦';
pub const CLUB: char = '♣';
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Three,
    Rank::Two,
];

#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "2")]
    Two,
}

impl Rank {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Rank {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_RANKS
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| CardParseError::BadRank(s.to_string()))
    }
}

#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "♠")]
    Spade,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♣")]
    Club,
}

impl Suit {
    pub const fn symbol(&self) -> char {
        match self {
            Self::Spade => SPADE,
            Self::Heart => HEART,
            Self::Diamond => DIAMOND,
            Self::Club => CLUB,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            SPADE => Ok(Self::Spade),
            HEART => Ok(Self::Heart),
            DIAMOND => Ok(Self::Diamond),
            CLUB => Ok(Self::Club),
            _ => Err(CardParseError::BadSuit(c)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, derive_more::Display)]
pub enum CardParseError {
    #[display(fmt = "empty card string")]
    Empty,
    #[display(fmt = "unknown suit {:?}", _0)]
    BadSuit(char),
    #[display(fmt = "unknown rank {:?}", _0)]
    BadRank(String),
}

impl std::error::Error for CardParseError {}

/// A single playing card. Serializes as `{"suit": "♠", "rank": "A"}`.
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses the display form, e.g. `A♠` or `10♥`. The suit is always the last char.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars.next_back().ok_or(CardParseError::Empty)?;
        Ok(Card {
            suit: suit.try_into()?,
            rank: chars.as_str().parse()?,
        })
    }
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }
}

/// Returns all 52 cards in canonical order: suits outer, ranks inner.
pub fn all_cards() -> Vec<Card> {
    use itertools::Itertools;
    ALL_SUITS
        .iter()
        .cartesian_product(ALL_RANKS.iter())
        .map(|x| Card::new(*x.0, *x.1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn canonical_order() {
        let cards = all_cards();
        assert_eq!(cards.len(), 52);
        assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
        assert_eq!(cards[12], Card::new(Suit::Spade, Rank::Two));
        assert_eq!(cards[13], Card::new(Suit::Heart, Rank::Ace));
        assert_eq!(cards[51], Card::new(Suit::Club, Rank::Two));
        let unique: HashSet<Card> = cards.into_iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[rstest]
    #[case("A♠", Suit::Spade, Rank::Ace)]
    #[case("10♥", Suit::Heart, Rank::Ten)]
    #[case("2♣", Suit::Club, Rank::Two)]
    #[case("Q♦", Suit::Diamond, Rank::Queen)]
    fn string_single(#[case] s: &str, #[case] suit: Suit, #[case] rank: Rank) {
        let c: Card = s.parse().unwrap();
        assert_eq!(c, Card::new(suit, rank));
        assert_eq!(c.to_string(), s);
    }

    #[rstest]
    #[case("", CardParseError::Empty)]
    #[case("Ah", CardParseError::BadSuit('h'))]
    #[case("1♠", CardParseError::BadRank("1".to_string()))]
    #[case("♠", CardParseError::BadRank(String::new()))]
    fn string_bad(#[case] s: &str, #[case] err: CardParseError) {
        assert_eq!(s.parse::<Card>().unwrap_err(), err);
    }

    #[test]
    fn wire_format() {
        let c = Card::new(Suit::Diamond, Rank::Ten);
        let s = serde_json::to_string(&c).unwrap();
        assert_eq!(s, r#"{"suit":"♦","rank":"10"}"#);
        let back: Card = serde_json::from_str(&s).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn labels_match_serde() {
        for r in ALL_RANKS {
            let s = serde_json::to_string(&r).unwrap();
            assert_eq!(s, format!("\"{}\"", r.label()));
        }
        for suit in ALL_SUITS {
            let s = serde_json::to_string(&suit).unwrap();
            assert_eq!(s, format!("\"{}\"", suit.symbol()));
        }
    }
}

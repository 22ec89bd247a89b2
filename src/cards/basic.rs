use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("Empty card code")]
    Empty,
    #[error("Unrecognized rank '{0}'")]
    UnknownRank(String),
    #[error("Unrecognized suit '{0}'")]
    UnknownSuit(String),
}

/// Ink used when drawing a card face
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CardColor {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn glyph(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn color(&self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Spades | Suit::Clubs => CardColor::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardError;

    // The game server deals glyphs; ASCII letters are accepted for typed input
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "♠" | "S" => Ok(Suit::Spades),
            "♥" | "H" => Ok(Suit::Hearts),
            "♦" | "D" => Ok(Suit::Diamonds),
            "♣" | "C" => Ok(Suit::Clubs),
            _ => Err(CardError::UnknownSuit(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(CardError::UnknownRank(s.to_string())),
        }
    }
}

/// A single playing card.
///
/// On the wire a card is a string: the last character is the suit and
/// everything before it is the rank (`"10♠"`, `"KH"`). Parsing happens once,
/// when cards enter the client, so the rest of the crate never sees a
/// malformed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn from_string(s: &str) -> Result<Self, CardError> {
        let code = s.trim();
        let mut chars = code.chars();
        let suit = chars.next_back().ok_or(CardError::Empty)?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(CardError::UnknownRank(code.to_string()));
        }

        let suit = Suit::try_from(suit.to_string().as_str())?;
        let rank = Rank::try_from(rank)?;

        Ok(Self::new(rank, suit))
    }

    /// Canonical code, also used as the drag payload
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn full_deck() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Card::from_string(&s)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.code()
    }
}

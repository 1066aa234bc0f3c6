use core::fmt;
use std::{fmt::Display, str::FromStr};

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};
use tracing::{debug, trace};

use crate::error::{CardError, Result};

/// The color tag printed on a card.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
    #[strum(to_string = "WILD4+", serialize = "WILD_DRAW_FOUR")]
    WildDrawFour,
}

impl CardColor {
    pub fn is_wild(&self) -> bool {
        matches!(self, CardColor::Wild | CardColor::WildDrawFour)
    }

    pub fn parse(tag: &str) -> Result<Self> {
        Self::from_str(tag).map_err(|_| CardError::UnknownColor(tag.to_string()))
    }
}

/// The rank or action printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// Any rank up to 255, not limited to 0-9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(number) => write!(f, "{number}"),
            CardValue::Skip => write!(f, "SKIP"),
            CardValue::Reverse => write!(f, "REVERSE"),
            CardValue::DrawTwo => write!(f, "DRAW_TWO"),
        }
    }
}

impl FromStr for CardValue {
    type Err = CardError;

    fn from_str(tag: &str) -> Result<Self> {
        if !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_digit()) {
            // `07` would print back as `7`
            if tag.len() > 1 && tag.starts_with('0') {
                return Err(CardError::UnknownValue(tag.to_string()));
            }
            return tag
                .parse::<u8>()
                .map(CardValue::Number)
                .map_err(|_| CardError::UnknownValue(tag.to_string()));
        }

        match tag.to_ascii_uppercase().as_str() {
            "SKIP" => Ok(CardValue::Skip),
            "REVERSE" => Ok(CardValue::Reverse),
            "DRAW_TWO" | "DRAW2" | "+2" => Ok(CardValue::DrawTwo),
            _ => Err(CardError::UnknownValue(tag.to_string())),
        }
    }
}

/// A color and, unless it is a wild card, a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub color: CardColor,
    pub value: Option<CardValue>,
}

impl Card {
    pub fn new(color: CardColor, value: Option<CardValue>) -> Self {
        Self { color, value }
    }

    pub fn colored(color: CardColor, value: CardValue) -> Self {
        Self::new(color, Some(value))
    }

    pub fn wild() -> Self {
        Self::new(CardColor::Wild, None)
    }

    pub fn wild_draw_four() -> Self {
        Self::new(CardColor::WildDrawFour, None)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.color, value),
            None => write!(f, "{}", self.color),
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(input: &str) -> Result<Self> {
        trace!(input, "parsing card");

        let mut tokens = input.split_whitespace();

        let color = CardColor::parse(tokens.next().ok_or(CardError::Empty)?)?;
        let value = tokens.next().map(str::parse::<CardValue>).transpose()?;

        let rest = tokens.collect::<Vec<_>>();
        if !rest.is_empty() {
            return Err(CardError::TrailingInput(rest.join(" ")));
        }

        let card = Card::new(color, value);
        debug!(%card, "parsed card");
        Ok(card)
    }
}

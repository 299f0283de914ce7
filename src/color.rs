use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{COLOR_DIGITS_AMOUNT, COLOR_LENGTH, HEX_DIGITS};

/// A `#RRGGBB` color with uppercase hex digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("the color string is empty")]
    Empty,
    #[error("the color string doesn't start with `#`")]
    MissingHash,
    #[error("expected 7 characters, got {0}")]
    InvalidLength(usize),
    #[error("{digit:?} at position {position} isn't in `0123456789ABCDEF`")]
    InvalidDigit { position: usize, digit: char },
}

impl Color {
    /// Checks that `color` is `#` followed by six uppercase hex digits.
    ///
    /// # Errors
    /// Returns the first problem found, checking the prefix first, then the length, then the
    /// digits from left to right.
    pub fn parse(color: impl Into<String>) -> Result<Self, ColorParseError> {
        let color = color.into();
        let digits = match color.strip_prefix('#') {
            Some(digits) => digits,
            None if color.is_empty() => return Err(ColorParseError::Empty),
            None => return Err(ColorParseError::MissingHash),
        };
        let length = color.chars().count();
        if length != COLOR_LENGTH {
            return Err(ColorParseError::InvalidLength(length));
        }
        if let Some((index, digit)) = digits
            .chars()
            .enumerate()
            .find(|(_index, digit)| !is_hex_digit(*digit))
        {
            return Err(ColorParseError::InvalidDigit {
                position: index + 1,
                digit,
            });
        }
        Ok(Self(color))
    }

    pub fn is_well_formed(color: &str) -> bool {
        Self::parse(color).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn is_hex_digit(digit: char) -> bool {
    u8::try_from(digit).map_or(false, |byte| HEX_DIGITS.contains(&byte))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(color: String) -> Result<Self, Self::Error> {
        Self::parse(color)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl Distribution<Color> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let mut color = String::with_capacity(COLOR_LENGTH);
        color.push('#');
        for _ in 0..COLOR_DIGITS_AMOUNT {
            color.push(char::from(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())]));
        }
        Color(color)
    }
}

/// Picks every digit independently and uniformly, using the thread-local generator
pub fn generate_random_color() -> Color {
    generate_random_color_with(&mut rand::thread_rng())
}

pub fn generate_random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    rng.gen()
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Age bracket a puzzle is written for, as an inclusive `low-high` pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgeRange {
    #[default]
    ThreeToFour,
    FourToFive,
    FiveToSix,
    ThreeToFive,
    FourToSix,
}

/// Returned when a string is not one of the known age brackets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgeRangeError {
    #[error("age range must look like `low-high`, got `{0}`")]
    Malformed(String),
    #[error("unsupported age range `{0}`")]
    Unsupported(String),
}

impl AgeRange {
    /// Brackets offered on the home screen.
    pub const SELECTABLE: [AgeRange; 3] = [Self::ThreeToFour, Self::FourToFive, Self::FiveToSix];

    pub const ALL: [AgeRange; 5] = [
        Self::ThreeToFour,
        Self::FourToFive,
        Self::FiveToSix,
        Self::ThreeToFive,
        Self::FourToSix,
    ];

    pub fn bounds(self) -> (u8, u8) {
        match self {
            Self::ThreeToFour => (3, 4),
            Self::FourToFive => (4, 5),
            Self::FiveToSix => (5, 6),
            Self::ThreeToFive => (3, 5),
            Self::FourToSix => (4, 6),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThreeToFour => "3-4",
            Self::FourToFive => "4-5",
            Self::FiveToSix => "5-6",
            Self::ThreeToFive => "3-5",
            Self::FourToSix => "4-6",
        }
    }

    /// Label shown on the age picker.
    pub fn label(self) -> String {
        format!("{} years", self.as_str())
    }

    /// Whether the two inclusive ranges share at least one age.
    pub fn overlaps(self, other: AgeRange) -> bool {
        let (low, high) = self.bounds();
        let (other_low, other_high) = other.bounds();
        low <= other_high && high >= other_low
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeRange {
    type Err = AgeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AgeRangeError::Malformed(s.to_string());

        let (low, high) = s.trim().split_once('-').ok_or_else(malformed)?;
        let low: u8 = low.trim().parse().map_err(|_| malformed())?;
        let high: u8 = high.trim().parse().map_err(|_| malformed())?;

        Self::ALL
            .into_iter()
            .find(|range| range.bounds() == (low, high))
            .ok_or_else(|| AgeRangeError::Unsupported(s.to_string()))
    }
}

impl TryFrom<String> for AgeRange {
    type Error = AgeRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgeRange> for String {
    fn from(range: AgeRange) -> Self {
        range.as_str().to_string()
    }
}

/// One of the fixed puzzle topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Patterns,
    ShapesMatch,
    Logical,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Patterns, Self::ShapesMatch, Self::Logical];

    /// Identifier used in routes and data file names.
    pub fn id(self) -> &'static str {
        match self {
            Self::Patterns => "patterns",
            Self::ShapesMatch => "shapes_match",
            Self::Logical => "logical",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Patterns => "Patterns",
            Self::ShapesMatch => "Shape Match",
            Self::Logical => "Logical Thinking",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Patterns => "🔄",
            Self::ShapesMatch => "⭐",
            Self::Logical => "🧠",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Patterns => "Complete the pattern!",
            Self::ShapesMatch => "Find the right shape!",
            Self::Logical => "Use your brain!",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single multiple-choice puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    pub age_range: AgeRange,
    pub title: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Puzzle {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

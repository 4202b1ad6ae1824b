use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// The five mana colors a land can produce, in WUBRG order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All colors in WUBRG order
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Returns the mana symbol (e.g., 'W', 'U')
    pub fn symbol(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Name of the catalog column holding this color's production flag
    pub fn column(&self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
        }
    }

    /// Parse a mana symbol (case-insensitive) into a Color
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Color::from_symbol(symbol).ok_or(Error::InvalidColor(symbol))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses a string of mana symbols such as "WUB" into colors.
///
/// Whitespace and commas are ignored so "W, U" works too. Duplicates are kept;
/// callers that toggle colors should deduplicate first.
pub fn parse_colors(input: &str) -> Result<Vec<Color>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(Color::try_from)
        .collect()
}

/// Deck power level. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerTier {
    Starter,
    #[default]
    Collector,
    Elite,
}

impl PowerTier {
    pub const ALL: [PowerTier; 3] = [PowerTier::Starter, PowerTier::Collector, PowerTier::Elite];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerTier::Starter => "Starter",
            PowerTier::Collector => "Collector",
            PowerTier::Elite => "Elite",
        }
    }

    /// Digit a land's `Power` field must contain to be played at this tier
    pub fn marker(&self) -> char {
        match self {
            PowerTier::Starter => '1',
            PowerTier::Collector => '2',
            PowerTier::Elite => '3',
        }
    }
}

impl FromStr for PowerTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(PowerTier::Starter),
            "collector" => Ok(PowerTier::Collector),
            "elite" => Ok(PowerTier::Elite),
            _ => Err(Error::InvalidTier(s.to_string())),
        }
    }
}

impl fmt::Display for PowerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Land type that is legal in any color identity
pub const TYPE_ANYLAND: &str = "Anyland";
/// Land type that may produce colors outside the identity (fetch lands)
pub const TYPE_FETCH: &str = "Fetch";
/// Land type hidden when utility lands are switched off
pub const TYPE_UTILITY: &str = "Utility";

/// One land record in the catalog
///
/// Column names match the `MTG_lands` table and the import CSV headers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub land_type: String,
    #[serde(rename = "W", deserialize_with = "deserialize_flag")]
    pub white: bool,
    #[serde(rename = "U", deserialize_with = "deserialize_flag")]
    pub blue: bool,
    #[serde(rename = "B", deserialize_with = "deserialize_flag")]
    pub black: bool,
    #[serde(rename = "R", deserialize_with = "deserialize_flag")]
    pub red: bool,
    #[serde(rename = "G", deserialize_with = "deserialize_flag")]
    pub green: bool,
    /// Tier markers, e.g. "123" for a land played at every power level
    #[serde(rename = "Power")]
    pub power: String,
    /// Deck color-count markers, e.g. "01" for mono and two-color decks
    #[serde(rename = "Suit")]
    pub suit: String,
}

impl CatalogEntry {
    /// Whether the land produces the given color
    pub fn produces(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Blue => self.blue,
            Color::Black => self.black,
            Color::Red => self.red,
            Color::Green => self.green,
        }
    }
}

/// Catalog flags are stored as 0/1 but hand-edited CSVs often say true/false
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid color flag '{other}', expected 0 or 1"
        ))),
    }
}

/// A row returned by a catalog lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandRow {
    pub name: String,
    pub land_type: String,
}

impl From<&CatalogEntry> for LandRow {
    fn from(entry: &CatalogEntry) -> Self {
        LandRow {
            name: entry.name.clone(),
            land_type: entry.land_type.clone(),
        }
    }
}
